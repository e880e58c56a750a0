use std::path::Path;
use tracing::warn;

pub fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let mut poller = super::build_poller(&config);

    super::runtime()?.block_on(poller.run(shutdown_signal()))?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "unable to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
}
