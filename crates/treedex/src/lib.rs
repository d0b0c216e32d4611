//! Core runtime for treedex: the entity capability contract, the hierarchy
//! index itself, subtree materialization, and the ergonomics exported via
//! the `prelude`.
#![warn(unreachable_pub)]

pub mod error;
pub mod index;
pub mod node;
pub mod obs;
pub mod traits;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, reports, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        index::HierarchyIndex,
        node::Node,
        traits::{Hierarchic, IdKind},
    };
}
