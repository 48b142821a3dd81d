use clap::Parser;
use jx_dashboard::{cli::Args, config::Options, dashboard::Dashboard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    jx_dashboard::logging::init(args.log_filter());

    let mut dashboard = Dashboard::new(Options::from(args));
    dashboard.run().await?;
    Ok(())
}
