use std::{fmt::Debug, hash::Hash};

///
/// IdKind
///
/// Capability bound for identifier types. Identifiers are opaque to the
/// index; they only need to be cloned, compared, hashed, and printed in
/// errors. Blanket-implemented, so callers never implement it by hand.
///

pub trait IdKind: Clone + Debug + Eq + Hash {}
impl<T> IdKind for T where T: Clone + Debug + Eq + Hash {}

///
/// Hierarchic
///
/// Capability contract implemented by caller-supplied entity values: every
/// entity declares its own identifier and the identifier of its parent.
///
/// ## Semantics
/// - The root marker is the caller's convention: whatever identifier value
///   root entities declare as their parent (commonly the zero value). The
///   index imposes no interpretation on it.
/// - An entity whose `id` equals its `parent_id` is rejected at insert.
///

pub trait Hierarchic {
    type Id: IdKind;

    /// This entity's own identifier.
    fn id(&self) -> Self::Id;

    /// The identifier of this entity's parent.
    fn parent_id(&self) -> Self::Id;
}
