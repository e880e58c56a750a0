//! Activity record type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fingerprint::{fingerprint, FingerprintKey};

fn current_schema_version() -> u32 {
    Record::SCHEMA_VERSION
}

/// One observed activity event from the community feed.
///
/// `id` and `timestamp` are kept for audit but do not take part in identity;
/// see [`fingerprint`] for the fields that do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,

    pub username: String,
    pub profile_link: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,

    pub book_cover_url: String,
    pub book_link: String,
    pub book_name: String,

    pub author_name: String,
    pub author_link: String,

    #[serde(default)]
    pub review_link: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,

    pub action: String,

    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Layout version of the persisted entry (absent in files written before versioning)
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,
}

impl Record {
    pub const SCHEMA_VERSION: u32 = 1;

    pub fn fingerprint(&self) -> FingerprintKey {
        fingerprint(self)
    }

    /// Whether this build understands the entry's layout
    pub fn is_supported_schema(&self) -> bool {
        (1..=Self::SCHEMA_VERSION).contains(&self.schema_version)
    }
}
