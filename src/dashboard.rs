use crate::browser::{Browser, Opener};
use crate::cluster::{Cluster, KubeCluster};
use crate::config::Options;
use crate::credentials::add_user_password_to_url;
use crate::errors::{Error, Result};

pub struct Dashboard<O = Browser> {
    pub options: Options,
    pub opener: O,
}

impl Dashboard<Browser> {
    pub fn new(options: Options) -> Self {
        Dashboard {
            options,
            opener: Browser,
        }
    }
}

impl<O: Opener> Dashboard<O> {
    pub fn with_opener(options: Options, opener: O) -> Self {
        Dashboard { options, opener }
    }

    /// Connects to the current cluster and opens the dashboard.
    pub async fn run(&mut self) -> Result<String> {
        let cluster = KubeCluster::connect(self.options.namespace.as_deref()).await?;
        self.run_with(&cluster).await
    }

    /// Opens the dashboard using an already connected cluster.
    ///
    /// Returns the URL that was shown or opened.
    pub async fn run_with<C: Cluster + ?Sized>(&mut self, cluster: &C) -> Result<String> {
        let name = &self.options.service_name;
        let url = cluster
            .service_url(name)
            .await
            .map_err(|source| Error::ServiceNotFound {
                service: name.clone(),
                source: Some(source),
            })?;
        if url.is_empty() {
            return Err(Error::ServiceNotFound {
                service: name.clone(),
                source: None,
            });
        }

        if self.options.quiet {
            println!("{}", url);
        } else {
            tracing::info!("Jenkins X dashboard is running at: {}", url);
        }

        if self.options.no_browser {
            return Ok(url);
        }

        let url =
            add_user_password_to_url(cluster, &url, &self.options.basic_auth_secret_name).await?;

        tracing::debug!("opening: {}", url);
        self.opener.open(&url)?;
        Ok(url)
    }
}
