pub mod activity;
pub mod category;

pub use activity::{Activity, ActivityId};
pub use category::{default_categories, Category, CategoryId};
