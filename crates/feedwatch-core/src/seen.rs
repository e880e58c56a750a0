//! Monotonic set of already-seen records

use std::collections::HashSet;

use crate::fingerprint::FingerprintKey;
use crate::record::Record;

/// Fingerprints seen so far, each with the record that first produced it.
///
/// Records are kept in insertion order so the persisted file reads as a log
/// of first sightings. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct SeenSet {
    keys: HashSet<FingerprintKey>,
    records: Vec<Record>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from stored records, collapsing duplicate fingerprints
    pub fn from_records<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let mut set = Self::new();
        set.extend(records);
        set
    }

    pub fn contains(&self, key: &FingerprintKey) -> bool {
        self.keys.contains(key)
    }

    pub fn contains_record(&self, record: &Record) -> bool {
        self.contains(&record.fingerprint())
    }

    /// Insert a record; returns `false` if its fingerprint was already present
    pub fn insert(&mut self, record: Record) -> bool {
        let key = record.fingerprint();
        self.insert_keyed(key, record)
    }

    pub(crate) fn insert_keyed(&mut self, key: FingerprintKey, record: Record) -> bool {
        if !self.keys.insert(key) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Drop every record inserted after the first `len`, along with its fingerprint
    pub(crate) fn truncate(&mut self, len: usize) {
        if len >= self.records.len() {
            return;
        }
        for record in self.records.drain(len..) {
            self.keys.remove(&record.fingerprint());
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl Extend<Record> for SeenSet {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

/// Two sets are equal when they hold the same fingerprints
impl PartialEq for SeenSet {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl Eq for SeenSet {}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, book: &str) -> Record {
        Record {
            id: id.to_string(),
            username: "reader".to_string(),
            profile_link: "https://app.thestorygraph.com/profile/reader".to_string(),
            profile_image_url: None,
            book_cover_url: format!("https://cdn.example/{book}.jpg"),
            book_link: format!("https://app.thestorygraph.com/books/{book}"),
            book_name: book.to_string(),
            author_name: "Someone".to_string(),
            author_link: "https://app.thestorygraph.com/authors/someone".to_string(),
            review_link: None,
            rating: None,
            action: "wants to read".to_string(),
            timestamp: None,
            schema_version: Record::SCHEMA_VERSION,
        }
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut set = SeenSet::new();
        assert!(set.insert(record("1", "dune")));
        assert!(!set.insert(record("2", "dune")));
        assert_eq!(set.len(), 1);
        // First sighting wins
        assert_eq!(set.records()[0].id, "1");
    }

    #[test]
    fn test_from_records_collapses_duplicates() {
        let set = SeenSet::from_records(vec![
            record("1", "dune"),
            record("2", "emma"),
            record("3", "dune"),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.records().len(), 2);
        assert!(set.contains_record(&record("99", "emma")));
    }

    #[test]
    fn test_equality_is_by_fingerprint() {
        let a = SeenSet::from_records(vec![record("1", "dune"), record("2", "emma")]);
        let b = SeenSet::from_records(vec![record("7", "emma"), record("8", "dune")]);
        assert_eq!(a, b);

        let c = SeenSet::from_records(vec![record("1", "dune")]);
        assert_ne!(a, c);
    }
}
