use std::collections::BTreeMap;

use futures::future::BoxFuture;
use k8s_openapi::api::core::v1;
use kube::Api;

use crate::errors::{Error, Result};

/// Raw secret payload, keyed by data field.
pub type SecretData = BTreeMap<String, Vec<u8>>;

/// The parts of the API server the dashboard launcher talks to.
pub trait Cluster {
    fn namespace(&self) -> &str;

    /// Externally reachable URL of the named service, or an empty string if it has none.
    fn service_url<'a>(&'a self, name: &'a str) -> BoxFuture<'a, kube::Result<String>>;

    /// `None` when the secret does not exist.
    fn secret_data<'a>(&'a self, name: &'a str) -> BoxFuture<'a, kube::Result<Option<SecretData>>>;
}

pub struct KubeCluster {
    client: kube::Client,
    namespace: String,
}

impl KubeCluster {
    /// Connects using the inferred kubeconfig or in-cluster configuration.
    pub async fn connect(namespace: Option<&str>) -> Result<Self> {
        let client = kube::Client::try_default()
            .await
            .map_err(Error::ClientInit)?;
        let namespace = match namespace {
            Some(ns) => ns.to_string(),
            None => client.default_namespace().to_string(),
        };
        tracing::debug!("using namespace {}", namespace);
        Ok(KubeCluster { client, namespace })
    }
}

impl Cluster for KubeCluster {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn service_url<'a>(&'a self, name: &'a str) -> BoxFuture<'a, kube::Result<String>> {
        Box::pin(crate::service_util::find_service_url(
            &self.client,
            &self.namespace,
            name,
        ))
    }

    fn secret_data<'a>(&'a self, name: &'a str) -> BoxFuture<'a, kube::Result<Option<SecretData>>> {
        Box::pin(async move {
            let secrets_api = Api::<v1::Secret>::namespaced(self.client.clone(), &self.namespace);
            let secret = secrets_api.get_opt(name).await?;
            Ok(secret.map(|sec| {
                sec.data
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(key, value)| (key, value.0))
                    .collect()
            }))
        })
    }
}
