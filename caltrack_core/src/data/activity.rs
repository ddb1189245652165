use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::CategoryId;

/// A unique ID that can be used to refer to an activity.
///
/// IDs are minted once per entry and survive edits; re-saving an activity
/// under the same ID replaces it in the store rather than duplicating it.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub struct ActivityId(Uuid);

impl ActivityId {
    /// Mints a fresh ID, distinct from every previously minted one.
    pub fn random() -> Self {
        ActivityId(Uuid::new_v4())
    }
}

/// A single tracked entry: food eaten or exercise performed.
///
/// Numeric fields are always held as numbers, never as the raw text the
/// input widgets produce; parsing happens at the form's edit seam.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub category: CategoryId,
    /// Free-text label for the entry, e.g. "Jugo de naranja" or "Pesas".
    pub name: String,
    pub calories: i32,
}

impl Activity {
    /// The blank entry a form starts from: default category, empty name,
    /// zero calories, and a freshly minted ID.
    pub fn draft() -> Self {
        Activity {
            id: ActivityId::random(),
            category: CategoryId::default(),
            name: String::new(),
            calories: 0,
        }
    }

    /// Whether this entry may be saved: a non-empty trimmed name and a
    /// strictly positive calorie count. The category carries no constraint.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.calories > 0
    }
}
