use crate::{
    error::IndexError,
    node::Node,
    obs::{IndexOps, OpsReport},
    traits::Hierarchic,
};
use derive_more::{Deref, DerefMut};
use std::collections::{HashMap, HashSet};

///
/// Bucket
/// Inner map of self-identifier -> entity for one parent identifier.
///

#[derive(Debug, Deref, DerefMut)]
pub struct Bucket<E: Hierarchic>(HashMap<E::Id, E>);

impl<E: Hierarchic> Bucket<E> {
    fn new() -> Self {
        Self(HashMap::new())
    }
}

///
/// HierarchyIndex
///
/// Groups a flat collection of entities by parent identifier so that the
/// direct children of any identifier resolve in O(1) average time plus the
/// result size. Entities are taken by value and owned by the index; queries
/// hand out borrows.
///
/// ## Invariants
/// - No `(parent, id)` pair is registered twice; the second attempt is an
///   error, not an overwrite.
/// - No entity is its own parent.
///
/// No internal synchronization: callers sharing an index across threads
/// must serialize access externally.
///

#[derive(Debug)]
pub struct HierarchyIndex<E: Hierarchic> {
    buckets: HashMap<E::Id, Bucket<E>>,
    ops: IndexOps,
}

impl<E: Hierarchic> HierarchyIndex<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            ops: IndexOps::default(),
        }
    }

    /// Register one entity under its declared parent.
    pub fn insert(&mut self, entity: E) -> Result<(), IndexError<E::Id>> {
        self.ops.insert_calls.bump();

        let id = entity.id();
        let parent = entity.parent_id();

        if id == parent {
            self.ops.insert_rejects.bump();
            return Err(IndexError::InvalidEntity { id });
        }

        let bucket = self
            .buckets
            .entry(parent.clone())
            .or_insert_with(Bucket::new);
        if bucket.contains_key(&id) {
            self.ops.insert_rejects.bump();
            return Err(IndexError::DuplicateVertex { parent, id });
        }
        bucket.insert(id, entity);

        Ok(())
    }

    /// Register a sequence of entities in order, failing fast on the first
    /// error. Entities inserted before the failure remain in place; callers
    /// must treat a failed batch as leaving the index partially populated.
    pub fn insert_all(
        &mut self,
        entities: impl IntoIterator<Item = E>,
    ) -> Result<(), IndexError<E::Id>> {
        for entity in entities {
            self.insert(entity)?;
        }

        Ok(())
    }

    /// Whether a vertex with the given parent/self pair is registered.
    /// Pure query; false on absence, including absence of the parent bucket.
    #[must_use]
    pub fn exists(&self, parent: &E::Id, id: &E::Id) -> bool {
        self.ops.exists_calls.bump();

        self.buckets
            .get(parent)
            .is_some_and(|bucket| bucket.contains_key(id))
    }

    /// Direct children of `parent`, in unspecified order.
    ///
    /// Fails `NotFound` when no bucket exists for `parent`; callers that
    /// need "no children" as a non-error must check `exists` themselves.
    pub fn children(&self, parent: &E::Id) -> Result<Vec<&E>, IndexError<E::Id>> {
        self.ops.children_calls.bump();

        self.non_empty_bucket(parent)
            .map(|bucket| bucket.values().collect())
    }

    /// Materialize the full tree beneath `parent` as [`Node`] values.
    ///
    /// The top-level call fails `NotFound` exactly when `children` would;
    /// interior entities with no children yield leaf nodes. Input whose
    /// parent identifiers form a cycle fails `CycleDetected` instead of
    /// recursing unboundedly; well-formed input is a forest.
    pub fn subtree(&self, parent: &E::Id) -> Result<Vec<Node<'_, E>>, IndexError<E::Id>> {
        self.ops.subtree_calls.bump();
        self.non_empty_bucket(parent)?;

        let mut path = HashSet::new();
        path.insert(parent.clone());

        self.descend(parent, &mut path)
    }

    /// Total number of registered vertices across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(|bucket| bucket.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of distinct parent identifiers with at least one child.
    #[must_use]
    pub fn parent_count(&self) -> usize {
        self.buckets.len()
    }

    /// Point-in-time snapshot of this index's op counters.
    #[must_use]
    pub fn report(&self) -> OpsReport {
        self.ops.report()
    }

    fn non_empty_bucket(&self, parent: &E::Id) -> Result<&Bucket<E>, IndexError<E::Id>> {
        match self.buckets.get(parent) {
            Some(bucket) if !bucket.is_empty() => Ok(bucket),
            _ => {
                self.ops.not_found.bump();
                Err(IndexError::NotFound {
                    parent: parent.clone(),
                })
            }
        }
    }

    // `path` holds the identifiers on the current descent; a repeat means
    // the caller's parent links loop back on themselves.
    fn descend(
        &self,
        parent: &E::Id,
        path: &mut HashSet<E::Id>,
    ) -> Result<Vec<Node<'_, E>>, IndexError<E::Id>> {
        let Some(bucket) = self.buckets.get(parent) else {
            return Ok(Vec::new());
        };

        let mut nodes = Vec::with_capacity(bucket.len());
        for (id, entity) in bucket.iter() {
            if !path.insert(id.clone()) {
                return Err(IndexError::CycleDetected { id: id.clone() });
            }
            let children = self.descend(id, path)?;
            path.remove(id);

            nodes.push(Node::new(entity, children));
        }

        Ok(nodes)
    }
}

impl<E: Hierarchic> Default for HierarchyIndex<E> {
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///
