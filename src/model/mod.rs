//! Data models for class color legends.

mod category;

pub use category::{Category, default_categories};
