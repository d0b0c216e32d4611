use serde::Serialize;

///
/// Node
///
/// Value returned by subtree materialization: one entity together with its
/// materialized children. Borrows from the index; no caller-owned state is
/// mutated by the traversal that builds it.
///

#[derive(Clone, Debug, Serialize)]
pub struct Node<'a, E> {
    entity: &'a E,
    children: Vec<Node<'a, E>>,
}

impl<'a, E> Node<'a, E> {
    pub(crate) const fn new(entity: &'a E, children: Vec<Self>) -> Self {
        Self { entity, children }
    }

    #[must_use]
    pub const fn entity(&self) -> &'a E {
        self.entity
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of descendants beneath this node, excluding the node itself.
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}
