//! Newness partitioning of a fetched batch

use crate::record::Record;
use crate::seen::SeenSet;

/// Split a batch into records not yet in `seen`, updating `seen` as it goes.
///
/// With `bootstrap` set, every record is absorbed into `seen` and nothing is
/// reported. Otherwise records are visited in fetch order; a record is new
/// when its fingerprint is absent, and it is emitted before being inserted so
/// a later duplicate in the same batch is suppressed.
pub fn partition<I>(seen: &mut SeenSet, batch: I, bootstrap: bool) -> Vec<Record>
where
    I: IntoIterator<Item = Record>,
{
    if bootstrap {
        seen.extend(batch);
        return Vec::new();
    }

    let mut fresh = Vec::new();
    for record in batch {
        let key = record.fingerprint();
        if seen.contains(&key) {
            continue;
        }
        fresh.push(record.clone());
        seen.insert_keyed(key, record);
    }
    fresh
}
