use serde::{Deserialize, Serialize};

/// A unique ID that can be used to refer to a category.
///
/// Categories come from a fixed table, so IDs are small integer codes rather
/// than generated identifiers.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub struct CategoryId(i32);

impl CategoryId {
    /// The food category. New drafts start here, and the submit affordance
    /// is labeled after it.
    pub const FOOD: CategoryId = CategoryId(1);

    pub const fn new(code: i32) -> Self {
        CategoryId(code)
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        CategoryId::FOOD
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// A short display name for the category, e.g. "Comida".
    pub name: String,
}

/// The fixed, ordered list of categories an activity can belong to. The host
/// uses this only to populate selectable options; the form itself never
/// constrains a draft beyond "one of these IDs".
pub fn default_categories() -> Vec<Category> {
    vec![
        Category { id: CategoryId::new(1), name: "Comida".to_string() },
        Category { id: CategoryId::new(2), name: "Ejercicio".to_string() },
    ]
}
