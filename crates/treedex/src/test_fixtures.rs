use crate::traits::Hierarchic;
use serde::Serialize;

///
/// Category
///
/// Minimal fixture entity: a flat record declaring its own id and its
/// parent's id. Parent 0 marks a root.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Category {
    pub id: u64,
    pub parent_id: u64,
    pub name: &'static str,
}

impl Category {
    pub const fn new(id: u64, parent_id: u64, name: &'static str) -> Self {
        Self {
            id,
            parent_id,
            name,
        }
    }
}

impl Hierarchic for Category {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn parent_id(&self) -> u64 {
        self.parent_id
    }
}

/// Twelve-category forest shared across behavioral tests: two roots (1, 3)
/// and interior parents 1, 2, 3, 5, 8.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(1, 0, "Category 1"),
        Category::new(2, 1, "Category 2"),
        Category::new(3, 0, "Category 3"),
        Category::new(5, 3, "Category 5"),
        Category::new(4, 1, "Category 4"),
        Category::new(7, 5, "Category 7"),
        Category::new(6, 2, "Category 6"),
        Category::new(8, 2, "Category 8"),
        Category::new(9, 2, "Category 9"),
        Category::new(10, 8, "Category 10"),
        Category::new(11, 8, "Category 11"),
        Category::new(12, 2, "Category 12"),
    ]
}
