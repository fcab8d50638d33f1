//! Command-line interface: print the default legend or resolve class names.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, LogLevel, PaletteConfig};
use crate::defaults;

/// Print default class colors, or resolve the given class names.
#[derive(Debug, Clone, Parser)]
#[command(name = "class-colors", version, about)]
pub struct Cli {
    /// Palette configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Class names to resolve; prints the full legend when empty
    pub classes: Vec<String>,
}

impl Cli {
    /// Load the configuration file, or the defaults when none was given.
    pub fn load_config(&self) -> Result<PaletteConfig, ConfigError> {
        match &self.config {
            Some(path) => PaletteConfig::load(path),
            None => Ok(PaletteConfig::default()),
        }
    }
}

/// Initialize `env_logger` at `level`. `RUST_LOG` still wins when set.
pub fn init_logging(level: LogLevel) {
    if let Err(e) = env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .try_init()
    {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

/// Write `name<TAB>#rrggbb` lines.
///
/// With no class names this is the default legend. Otherwise each name is
/// resolved through the configuration, and `-` marks a class without a color.
pub fn write_colors(
    config: &PaletteConfig,
    classes: &[String],
    out: &mut impl Write,
) -> Result<(), ConfigError> {
    if classes.is_empty() {
        for (name, color) in defaults::entries() {
            writeln!(out, "{name}\t{color}")?;
        }
        return Ok(());
    }

    let resolver = config.build_resolver();
    for class in classes {
        match resolver.resolve_hex(class) {
            Some(hex) => writeln!(out, "{class}\t{hex}")?,
            None => writeln!(out, "{class}\t-")?,
        }
    }
    Ok(())
}
