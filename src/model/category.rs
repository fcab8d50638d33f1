//! Category data model for the class color legend.

use serde::{Deserialize, Serialize};

use crate::color_utils::Rgb;
use crate::defaults;

/// An annotation category with a name and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier for the category
    pub id: u32,
    /// Display name of the category
    pub name: String,
    /// RGB color for the category
    pub color: [u8; 3],
}

impl Category {
    /// Create a new category with the given ID, name, and color.
    pub fn new(id: u32, name: &str, color: [u8; 3]) -> Self {
        Self {
            id,
            name: name.to_string(),
            color,
        }
    }

    /// Category color as a `#rrggbb` string.
    pub fn hex(&self) -> String {
        Rgb::from(self.color).to_hex()
    }
}

/// One category per default class, in legend order, with IDs starting at 1.
pub fn default_categories() -> Vec<Category> {
    defaults::entries()
        .zip(1u32..)
        .filter_map(|((name, hex), id)| match Rgb::from_hex(hex) {
            Ok(color) => Some(Category::new(id, name, color.to_array())),
            Err(e) => {
                log::warn!("Skipping class '{}' with malformed color: {}", name, e);
                None
            }
        })
        .collect()
}
