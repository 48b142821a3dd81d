use clap::Parser;

use crate::config::{DEFAULT_SECRET_NAME, DEFAULT_SERVICE_NAME};

/// View the Jenkins X Pipelines Dashboard
#[derive(Debug, Parser)]
#[command(
    name = "jx-dashboard",
    version,
    after_help = "Examples:\n  \
        # open the dashboard\n  \
        jx-dashboard\n\n  \
        # display the URL only without opening a browser\n  \
        jx-dashboard --no-open"
)]
pub struct Args {
    /// Disable opening the URL; just show it on the console
    #[arg(long = "no-open", default_value_t = false)]
    pub no_open: bool,

    /// The name of the dashboard service
    #[arg(short = 'n', long = "name", default_value = DEFAULT_SERVICE_NAME)]
    pub name: String,

    /// The name of the Secret containing the basic auth login/password
    #[arg(short = 's', long = "secret", default_value = DEFAULT_SECRET_NAME)]
    pub secret: String,

    /// Namespace the dashboard runs in (defaults to the current kubeconfig context)
    #[arg(long = "namespace")]
    pub namespace: Option<String>,

    /// Only print the URL
    #[arg(short = 'q', long = "quiet", default_value_t = false)]
    pub quiet: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        default_value = "info",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    pub verbose: bool,

    /// Run without prompting or opening anything interactive
    #[arg(short = 'b', long = "batch-mode", default_value_t = false)]
    pub batch_mode: bool,
}

impl Args {
    pub fn log_filter(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}
