//! Newness detection for polled activity feeds

mod cache;
mod config;
mod error;
mod filter;
mod fingerprint;
mod record;
mod seen;
mod store;

pub use cache::NewnessCache;
pub use config::{Config, SourceConfig};
pub use error::{ConfigError, StoreError};
pub use filter::partition;
pub use fingerprint::{fingerprint, FingerprintKey};
pub use record::Record;
pub use seen::SeenSet;
pub use store::{LoadState, SeenStore};
