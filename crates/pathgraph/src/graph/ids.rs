//! Free-id pool with LIFO recycling.

use crate::error::{GraphError, Result};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Allocates positive ids, reusing released ones before minting new ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdPool {
    // Lowest id never handed out by this pool
    next: u64,
    free: Vec<u64>,
    // Mirror of `free` for constant-time membership checks
    #[serde(skip)]
    released: HashSet<u64>,
}

impl IdPool {
    /// Create a pool whose first id is 1.
    pub fn new() -> Self {
        Self {
            next: 1,
            free: Vec::new(),
            released: HashSet::new(),
        }
    }

    /// Repair a pool read from untrusted input.
    ///
    /// Id 0 and repeated entries are dropped from the free stack and the
    /// high-water mark is raised to at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if the high-water mark leaves no
    /// room to mint another id.
    pub fn sanitized(self) -> Result<Self> {
        if self.next == u64::MAX {
            return Err(GraphError::Serialization {
                message: "Id pool is exhausted: next id is u64::MAX".to_string(),
                source: None,
            });
        }

        let mut pool = Self {
            next: self.next.max(1),
            ..Self::new()
        };
        for id in self.free {
            pool.release(id);
        }
        debug!(
            "Restored id pool: next={}, free={}",
            pool.next,
            pool.free.len()
        );
        Ok(pool)
    }

    /// Hand out an id that `is_taken` reports as free.
    ///
    /// The most recently released id wins. Otherwise the high-water mark is
    /// advanced past ids occupied through explicit insertion.
    pub fn allocate(&mut self, is_taken: impl Fn(u64) -> bool) -> u64 {
        while let Some(id) = self.free.pop() {
            self.released.remove(&id);
            if !is_taken(id) {
                trace!("Reusing released id {id}");
                return id;
            }
        }

        while is_taken(self.next) {
            self.next += 1;
        }
        let id = self.next;
        self.next += 1;
        trace!("Minted id {id}");
        id
    }

    /// Return an id to the pool.
    pub fn release(&mut self, id: u64) {
        if id != 0 && self.released.insert(id) {
            self.free.push(id);
        }
    }

    /// Forget all released ids and restart from 1.
    pub fn reset(&mut self) {
        self.next = 1;
        self.free.clear();
        self.released.clear();
    }

    /// Number of released ids waiting for reuse.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}

impl Default for IdPool {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for IdPool {
    fn eq(&self, other: &Self) -> bool {
        self.next == other.next && self.free == other.free
    }
}

impl Eq for IdPool {}
