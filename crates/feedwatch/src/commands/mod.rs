pub mod check;
pub mod run;
pub mod status;
pub mod version;

use feedwatch_core::{Config, NewnessCache, SeenStore, SourceConfig};
use feedwatch_poll::{
    FileSource, HttpSource, JsonLinesNotifier, Notifier, Poller, RecordSource, WebhookNotifier,
};
use feedwatch_store::Paths;
use std::path::Path;

fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let paths = Paths::new()?;
    Ok(Config::load(&paths, explicit)?)
}

fn build_poller(config: &Config) -> Poller {
    let source: Box<dyn RecordSource> = match &config.source {
        SourceConfig::File { path } => Box::new(FileSource::new(path)),
        SourceConfig::Http { url } => Box::new(HttpSource::new(url)),
    };
    let notifier: Box<dyn Notifier> = match &config.webhook_url {
        Some(url) => Box::new(WebhookNotifier::new(url)),
        None => Box::new(JsonLinesNotifier::stdout()),
    };
    let cache = NewnessCache::new(SeenStore::open(&config.store_path))
        .with_bootstrap(config.bootstrap_on_empty);

    Poller::new(source, notifier, cache, config.poll_interval)
}

fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}
