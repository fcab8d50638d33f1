//! Default display colors for known annotation classes.
//!
//! The table is a `static` and is never mutated, so it can be read from any
//! thread. Unknown class names are not an error: every accessor reports them
//! as `None` and leaves the fallback to the caller (see [`crate::ClassColorResolver`]).

use crate::color_utils::Rgb;

/// Name of the generic entry callers can fall back to for unknown classes.
pub const OTHER_CLASS: &str = "Other";

/// Class name to `#rrggbb` color, in legend order.
pub static DEFAULT_CLASS_COLORS: [(&str, &str); 21] = [
    ("Vehicle", "#ff00ff"),
    ("GT_Vehicle", "#ffff00"),
    ("Pedestrian", "#ff8c00"),
    ("GT_Pedestrian", "#f5f5dc"),
    ("Cyclist", "#0000ff"),
    ("Car", "#ff0000"),
    ("Truck", "#ffff00"),
    ("Bus", "#ffa500"),
    ("Person", "#00ff00"),
    ("Bicycle", "#0000ff"),
    ("Motorcycle", "#800080"),
    ("TrafficSign", "#00ffff"),
    ("TrafficLight", "#ff00ff"),
    ("Pole", "#808080"),
    ("Building", "#a52a2a"),
    ("Vegetation", "#008000"),
    ("Road", "#808000"),
    ("Sidewalk", "#c0c0c0"),
    ("Sky", "#87ceeb"),
    ("Ground", "#f5f5dc"),
    (OTHER_CLASS, "#ffffff"),
];

/// Get the default color for a class name (exact, case-sensitive match).
pub fn lookup(class_name: &str) -> Option<&'static str> {
    DEFAULT_CLASS_COLORS
        .iter()
        .find(|(name, _)| *name == class_name)
        .map(|(_, color)| *color)
}

/// Like [`lookup`], but ignores ASCII case.
///
/// Detection models tend to emit upper-case keys (`PEDESTRIAN`, `CAR`).
pub fn lookup_ignore_case(class_name: &str) -> Option<&'static str> {
    DEFAULT_CLASS_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(class_name))
        .map(|(_, color)| *color)
}

/// Get the default color for a class name as a typed color.
pub fn lookup_rgb(class_name: &str) -> Option<Rgb> {
    let hex = lookup(class_name)?;
    match Rgb::from_hex(hex) {
        Ok(color) => Some(color),
        Err(e) => {
            log::error!("Default color for class '{}' is malformed: {}", class_name, e);
            None
        }
    }
}

/// Whether the table has an entry for this class name.
pub fn contains(class_name: &str) -> bool {
    lookup(class_name).is_some()
}

/// All `(class name, color)` pairs in legend order.
pub fn entries() -> impl ExactSizeIterator<Item = (&'static str, &'static str)> + Clone {
    DEFAULT_CLASS_COLORS.iter().copied()
}
