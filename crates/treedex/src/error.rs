use crate::traits::IdKind;
use thiserror::Error as ThisError;

///
/// IndexError
///
/// Every failure the index can surface. Errors are returned synchronously
/// to the immediate caller; nothing is retried, swallowed, or panicked.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum IndexError<Id: IdKind> {
    #[error("entity {id:?} is its own parent")]
    InvalidEntity { id: Id },

    #[error("vertex ({parent:?}, {id:?}) is already defined")]
    DuplicateVertex { parent: Id, id: Id },

    #[error("no children registered under {parent:?}")]
    NotFound { parent: Id },

    #[error("parent cycle detected at {id:?}")]
    CycleDetected { id: Id },
}

impl<Id: IdKind> IndexError<Id> {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
