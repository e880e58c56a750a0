//! Newness cache: seen-set ownership, bootstrap and persistence

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::filter::partition;
use crate::record::Record;
use crate::seen::SeenSet;
use crate::store::{LoadState, SeenStore};

/// In-memory state as of the last successful write
#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    seen_len: usize,
    first_run: bool,
}

/// Decides which records of each polling cycle are new.
///
/// The seen-set is read from the store on the first cycle and kept in memory
/// afterwards; every cycle that changes it writes a full snapshot back. A
/// failed write rolls the in-memory state back, so retrying the same batch
/// reports its new records again.
#[derive(Debug)]
pub struct NewnessCache {
    store: SeenStore,
    seen: SeenSet,
    first_run: bool,
    loaded: bool,
    dirty: bool,
    bootstrap_on_empty: bool,
    pending: Option<Checkpoint>,
}

impl NewnessCache {
    pub fn new(store: SeenStore) -> Self {
        Self {
            store,
            seen: SeenSet::new(),
            first_run: true,
            loaded: false,
            dirty: false,
            bootstrap_on_empty: true,
            pending: None,
        }
    }

    /// Disable to report the whole first batch when the store starts empty
    pub fn with_bootstrap(mut self, enabled: bool) -> Self {
        self.bootstrap_on_empty = enabled;
        self
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    pub fn is_first_run(&self) -> bool {
        self.first_run
    }

    /// Filter a batch and persist the result: `stage` followed by `commit`
    pub fn filter<I>(&mut self, batch: I) -> Result<Vec<Record>, StoreError>
    where
        I: IntoIterator<Item = Record>,
    {
        let fresh = self.stage(batch)?;
        self.commit()?;
        Ok(fresh)
    }

    /// Partition a batch against the in-memory seen-set without writing the store.
    ///
    /// Until [`commit`](Self::commit) succeeds, a restart will report these
    /// records again, and so will a retry after a failed commit.
    pub fn stage<I>(&mut self, batch: I) -> Result<Vec<Record>, StoreError>
    where
        I: IntoIterator<Item = Record>,
    {
        self.ensure_loaded()?;
        if self.pending.is_none() {
            self.pending = Some(Checkpoint {
                seen_len: self.seen.len(),
                first_run: self.first_run,
            });
        }

        let bootstrap = self.first_run && self.bootstrap_on_empty && self.seen.is_empty();
        let before = self.seen.len();

        let fresh = partition(&mut self.seen, batch, bootstrap);

        if bootstrap {
            info!(
                cached = self.seen.len(),
                "no records in store, caching current batch without reporting"
            );
        }
        for record in &fresh {
            debug!(id = %record.id, user = %record.username, action = %record.action, "new record");
        }

        self.first_run = false;
        if self.seen.len() != before {
            self.dirty = true;
        }
        Ok(fresh)
    }

    /// Write the seen-set back if anything changed since the last write.
    ///
    /// On failure everything staged since the last successful commit is
    /// forgotten, including the end of the first run.
    pub fn commit(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            self.pending = None;
            return Ok(());
        }
        if let Err(e) = self.store.save(&self.seen) {
            self.rollback();
            return Err(e);
        }
        self.dirty = false;
        self.pending = None;
        Ok(())
    }

    fn rollback(&mut self) {
        let Some(checkpoint) = self.pending.take() else {
            return;
        };
        let discarded = self.seen.len() - checkpoint.seen_len;
        self.seen.truncate(checkpoint.seen_len);
        self.first_run = checkpoint.first_run;
        warn!(discarded, "seen store write failed, staged records will be reported again");
    }

    fn ensure_loaded(&mut self) -> Result<(), StoreError> {
        if self.loaded {
            return Ok(());
        }

        let (stored, state) = self.store.load_with_state()?;
        debug!(path = %self.store.path().display(), entries = stored.len(), ?state, "loaded seen store");
        // A corrupt file gets overwritten at the next commit even if nothing new arrives
        if state == LoadState::Corrupt {
            self.dirty = true;
        }
        self.seen.extend(stored.into_records());
        self.loaded = true;
        Ok(())
    }
}
