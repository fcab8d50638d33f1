//! Class Colors - default display colors for annotation classes
//!
//! A read-only table mapping semantic class names (`Car`, `Pedestrian`, `Road`, ...)
//! to `#rrggbb` colors, plus the pieces renderers need around it: typed colors,
//! legend categories, and a resolver that decides what unknown classes look like.

mod cli;
mod color_utils;
mod config;
mod defaults;
mod error;
mod model;
mod resolver;

pub use cli::{Cli, init_logging, write_colors};
pub use color_utils::{Rgb, generated_color, hsv_to_rgb};
pub use config::{CONFIG_VERSION, ConfigError, LogLevel, PaletteConfig};
pub use defaults::{
    DEFAULT_CLASS_COLORS, OTHER_CLASS, contains, entries, lookup, lookup_ignore_case, lookup_rgb,
};
pub use error::ColorError;
pub use model::{Category, default_categories};
pub use resolver::{ClassColorResolver, FallbackPolicy, GROUND_TRUTH_PREFIX};
