//! services/snapshot.rs
//! Immutable lexicon + blacklist snapshot and the store that swaps it.

use anyhow::{Context, Result};
use std::sync::{Arc, RwLock};

use lexicon::{BlacklistSet, Lexicon, ModerationFilter, TaxonomyResolver};

use crate::config::ForumConfig;
use crate::services::catalogs::{load_blacklists, load_lexicon};

/// Everything a request needs, frozen at build time.
#[derive(Debug)]
pub struct Snapshot {
    pub resolver: TaxonomyResolver,
    pub filter: ModerationFilter,
}

impl Snapshot {
    pub fn build(lexicon: Lexicon, blacklist: BlacklistSet) -> Result<Self> {
        let resolver = TaxonomyResolver::new(Arc::new(lexicon)).context("building taxonomy resolver")?;
        let filter = ModerationFilter::new(Arc::new(blacklist)).context("building moderation filter")?;
        Ok(Self { resolver, filter })
    }

    /// Read every startup file named by `cfg`.
    pub fn load(cfg: &ForumConfig) -> Result<Self> {
        let lexicon = load_lexicon(&cfg.lexicon)?;
        let blacklist = load_blacklists(&cfg.moderation, &cfg.lexicon.languages)?;
        Self::build(lexicon, blacklist)
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.resolver.lexicon()
    }

    pub fn blacklist(&self) -> &BlacklistSet {
        self.filter.blacklist()
    }
}

/// Holder for the current snapshot. Readers clone the `Arc` and keep using
/// it even if a newer snapshot is swapped in meanwhile.
#[derive(Debug)]
pub struct TaxonomyStore {
    current: RwLock<Arc<Snapshot>>,
}

impl TaxonomyStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { current: RwLock::new(Arc::new(snapshot)) }
    }

    pub fn current(&self) -> Arc<Snapshot> {
        // A poisoned lock still holds a complete snapshot; the swap is a single store.
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replace the snapshot; returns the previous one.
    pub fn swap(&self, next: Snapshot) -> Arc<Snapshot> {
        let next = Arc::new(next);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let prev = std::mem::replace(&mut *guard, next);
        tracing::info!("taxonomy snapshot swapped");
        prev
    }
}
