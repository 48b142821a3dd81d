use k8s_openapi::api::{core::v1, networking::v1 as netv1};
use kube::Api;

/// Annotation carrying the externally visible URL of a service.
pub const EXPOSE_URL_ANNOTATION: &str = "fabric8.io/exposeUrl";

/// Finds the URL a service is reachable at from outside the cluster.
///
/// Checks the expose annotation and load balancer status of the service first,
/// then an ingress of the same name. Returns an empty string if neither yields
/// anything; a missing service is an error.
pub async fn find_service_url(k: &kube::Client, ns: &str, name: &str) -> kube::Result<String> {
    tracing::debug!("Finding service url for {} in namespace {}", name, ns);
    let svc_api = Api::<v1::Service>::namespaced(k.clone(), ns);
    let svc = svc_api.get(name).await?;
    if let Some(url) = service_url(&svc) {
        return Ok(url);
    }

    let ing_api = Api::<netv1::Ingress>::namespaced(k.clone(), ns);
    match ing_api.get_opt(name).await {
        Ok(Some(ing)) => Ok(ingress_url(&ing).unwrap_or_default()),
        Ok(None) => Ok(String::new()),
        Err(err) => {
            tracing::debug!("failed to load ingress {}/{}: {}", ns, name, err);
            Ok(String::new())
        }
    }
}

pub fn service_url(svc: &v1::Service) -> Option<String> {
    let exposed = svc
        .metadata
        .annotations
        .as_ref()
        .and_then(|anns| anns.get(EXPOSE_URL_ANNOTATION))
        .filter(|url| !url.is_empty());
    if let Some(url) = exposed {
        return Some(url.clone());
    }

    let spec = svc.spec.as_ref()?;
    if spec.type_.as_deref() != Some("LoadBalancer") {
        return None;
    }
    let https = spec
        .ports
        .as_ref()
        .map_or(false, |ports| ports.iter().any(|p| p.port == 443));
    let scheme = if https { "https" } else { "http" };

    let lb_ingress = svc
        .status
        .as_ref()?
        .load_balancer
        .as_ref()?
        .ingress
        .as_ref()?;
    lb_ingress.iter().find_map(|ing| {
        let host = non_empty(ing.ip.as_deref()).or_else(|| non_empty(ing.hostname.as_deref()))?;
        Some(format!("{}://{}/", scheme, host))
    })
}

pub fn ingress_url(ing: &netv1::Ingress) -> Option<String> {
    let spec = ing.spec.as_ref()?;
    let rule = spec.rules.as_ref()?.first()?;
    let host = non_empty(rule.host.as_deref())?;
    let tls = spec
        .tls
        .iter()
        .flatten()
        .flat_map(|tls| tls.hosts.iter().flatten())
        .any(|h| h == host);
    let scheme = if tls { "https" } else { "http" };
    Some(format!("{}://{}", scheme, host))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
