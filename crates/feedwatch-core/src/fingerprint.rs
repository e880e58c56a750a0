//! Content-derived identity for records

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::record::Record;

/// Hex-encoded SHA-256 over a record's content fields
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FingerprintKey(String);

impl FingerprintKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FingerprintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the identity key of a record.
///
/// Covers every content field and skips `id`, `timestamp` and
/// `schema_version`. Each field is length-prefixed so adjacent values cannot
/// run together, and an absent optional hashes differently from an empty one.
pub fn fingerprint(record: &Record) -> FingerprintKey {
    let mut hasher = Sha256::new();

    write_field(&mut hasher, Some(record.username.as_str()));
    write_field(&mut hasher, Some(record.profile_link.as_str()));
    write_field(&mut hasher, record.profile_image_url.as_deref());
    write_field(&mut hasher, Some(record.book_cover_url.as_str()));
    write_field(&mut hasher, Some(record.book_link.as_str()));
    write_field(&mut hasher, Some(record.book_name.as_str()));
    write_field(&mut hasher, Some(record.author_name.as_str()));
    write_field(&mut hasher, Some(record.author_link.as_str()));
    write_field(&mut hasher, record.review_link.as_deref());
    write_field(&mut hasher, record.rating.map(rating_bits).as_deref());
    write_field(&mut hasher, Some(record.action.as_str()));

    FingerprintKey(hex::encode(hasher.finalize()))
}

fn write_field(hasher: &mut Sha256, value: Option<&str>) {
    match value {
        Some(v) => {
            hasher.update(b"s");
            hasher.update((v.len() as u64).to_le_bytes());
            hasher.update(v.as_bytes());
        }
        None => hasher.update(b"n"),
    }
}

// -0.0 and 0.0 compare equal, so they must hash equal
fn rating_bits(rating: f64) -> String {
    let normalized = if rating == 0.0 { 0.0 } else { rating };
    format!("{:016x}", normalized.to_bits())
}
