use std::path::Path;

pub fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let mut poller = super::build_poller(&config);

    let report = super::runtime()?.block_on(poller.run_cycle())?;

    let summary = serde_json::json!({
        "fetched": report.fetched,
        "new": report.fresh,
        "delivered": report.delivered,
        "failed": report.failed,
    });
    eprintln!("{summary}");
    Ok(())
}
