use feedwatch_core::{LoadState, SeenStore};
use std::path::Path;

pub fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let store = SeenStore::open(&config.store_path);

    let mut output = summarize(&store)?;
    output["interval_secs"] = serde_json::json!(config.poll_interval.as_secs());

    println!("{output}");
    Ok(())
}

/// Describe the store without creating it when absent
fn summarize(store: &SeenStore) -> anyhow::Result<serde_json::Value> {
    let path = store.path().display().to_string();
    if !store.path().exists() {
        return Ok(serde_json::json!({
            "store": path,
            "exists": false,
            "seen": 0,
        }));
    }

    let (seen, state) = store.load_with_state()?;
    Ok(serde_json::json!({
        "store": path,
        "exists": true,
        "seen": seen.len(),
        "corrupt": state == LoadState::Corrupt,
    }))
}
