use std::io;

use thiserror::Error;

/// Helm chart that installs the default dashboard service.
pub const DASHBOARD_CHART: &str = "jxgh/jx-pipelines-visualizer";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("creating kubernetes client")]
    ClientInit(#[source] kube::Error),

    #[error(
        "failed to find dashboard URL for service {}. \
         Check you have 'chart: {}' in your helmfile.yaml",
        .service,
        DASHBOARD_CHART
    )]
    ServiceNotFound {
        service: String,
        #[source]
        source: Option<kube::Error>,
    },

    #[error("failed to load Secret {name} in namespace {namespace}")]
    SecretFetch {
        name: String,
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("failed to parse URL {url}")]
    UrlParse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL {0} cannot carry a username and password")]
    UrlUserinfo(String),

    #[error("failed to open browser at {url}")]
    BrowserOpen {
        url: String,
        #[source]
        source: io::Error,
    },
}
