use crate::cli::Args;

pub const DEFAULT_SERVICE_NAME: &str = "jx-pipelines-visualizer";
pub const DEFAULT_SECRET_NAME: &str = "jx-basic-auth-user-password";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Service exposing the dashboard
    pub service_name: String,
    /// Secret holding `username` and `password` for basic auth
    pub basic_auth_secret_name: String,
    /// Explicit namespace; the client's default namespace is used otherwise
    pub namespace: Option<String>,
    pub no_browser: bool,
    pub quiet: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            basic_auth_secret_name: DEFAULT_SECRET_NAME.to_string(),
            namespace: None,
            no_browser: false,
            quiet: false,
        }
    }
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Options {
            service_name: args.name,
            basic_auth_secret_name: args.secret,
            namespace: args.namespace.filter(|ns| !ns.is_empty()),
            // nobody is around to look at a browser in batch mode
            no_browser: args.no_open || args.batch_mode,
            quiet: args.quiet,
        }
    }
}
