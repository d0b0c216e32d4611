//! Observability: ephemeral in-memory op counters for one index.
//!
//! Counters never affect operation semantics or results.

use serde::{Deserialize, Serialize};
use std::cell::Cell;

///
/// Counter
///
/// Saturating u64 event counter. Interior-mutable so read-path queries can
/// count through `&self`; this makes the index `!Sync`, which is consistent
/// with its uncontracted concurrent access.
///

#[derive(Debug, Default)]
pub(crate) struct Counter(Cell<u64>);

impl Counter {
    pub(crate) fn bump(&self) {
        self.0.set(self.0.get().saturating_add(1));
    }

    fn get(&self) -> u64 {
        self.0.get()
    }
}

///
/// IndexOps
///

#[derive(Debug, Default)]
pub(crate) struct IndexOps {
    pub(crate) insert_calls: Counter,
    pub(crate) insert_rejects: Counter,
    pub(crate) exists_calls: Counter,
    pub(crate) children_calls: Counter,
    pub(crate) subtree_calls: Counter,
    pub(crate) not_found: Counter,
}

impl IndexOps {
    pub(crate) fn report(&self) -> OpsReport {
        OpsReport {
            insert_calls: self.insert_calls.get(),
            insert_rejects: self.insert_rejects.get(),
            exists_calls: self.exists_calls.get(),
            children_calls: self.children_calls.get(),
            subtree_calls: self.subtree_calls.get(),
            not_found: self.not_found.get(),
        }
    }
}

///
/// OpsReport
/// Point-in-time snapshot of an index's op counters.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OpsReport {
    pub insert_calls: u64,
    pub insert_rejects: u64,
    pub exists_calls: u64,
    pub children_calls: u64,
    pub subtree_calls: u64,
    pub not_found: u64,
}
