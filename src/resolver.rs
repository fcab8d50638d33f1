//! Resolve class names to colors, including classes the default table does not know.
//!
//! Resolution order:
//! 1. caller overrides (exact name)
//! 2. default table (exact name)
//! 3. ground-truth names (`GT_Car` resolves like `Car`, `GT_PED` like `Pedestrian`)
//! 4. caller overrides, then the default table, ignoring ASCII case
//! 5. the [`FallbackPolicy`]
//!
//! Ground-truth base names go through the same override/default steps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color_utils::{Rgb, generated_color};
use crate::defaults;

/// Prefix marking ground-truth labels shown next to model predictions.
pub const GROUND_TRUTH_PREFIX: &str = "GT_";

/// Abbreviated ground-truth class names and the class they stand for.
const GROUND_TRUTH_ALIASES: &[(&str, &str)] = &[("GT_PED", "Pedestrian")];

/// What to do with a class name that nothing else matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Use the color of the `Other` entry
    #[default]
    Other,
    /// Derive a stable color from the class name
    Generated,
    /// Report no color and let the caller decide
    None,
}

impl FallbackPolicy {
    /// Get the display name for this policy.
    pub fn name(&self) -> &'static str {
        match self {
            FallbackPolicy::Other => "Other",
            FallbackPolicy::Generated => "Generated",
            FallbackPolicy::None => "None",
        }
    }

    /// Get all policies.
    pub fn all() -> &'static [FallbackPolicy] {
        &[
            FallbackPolicy::Other,
            FallbackPolicy::Generated,
            FallbackPolicy::None,
        ]
    }
}

/// Immutable class color resolver built on top of the default table.
#[derive(Debug, Clone)]
pub struct ClassColorResolver {
    overrides: BTreeMap<String, Rgb>,
    fallback: FallbackPolicy,
    ground_truth_aliases: bool,
}

impl ClassColorResolver {
    /// Resolver with no overrides, `Other` fallback and ground-truth handling enabled.
    pub fn new() -> Self {
        Self {
            overrides: BTreeMap::new(),
            fallback: FallbackPolicy::default(),
            ground_truth_aliases: true,
        }
    }

    /// Set the fallback policy.
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Enable or disable `GT_` prefix handling.
    pub fn with_ground_truth_aliases(mut self, enabled: bool) -> Self {
        self.ground_truth_aliases = enabled;
        self
    }

    /// Override the color of one class. Later overrides replace earlier ones.
    pub fn with_override(mut self, class_name: impl Into<String>, color: Rgb) -> Self {
        self.overrides.insert(class_name.into(), color);
        self
    }

    /// The configured fallback policy.
    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Resolve a class name. `None` only when the fallback policy is [`FallbackPolicy::None`].
    pub fn resolve(&self, class_name: &str) -> Option<Rgb> {
        if let Some(color) = self.overrides.get(class_name) {
            return Some(*color);
        }

        if let Some(color) = defaults::lookup_rgb(class_name) {
            return Some(color);
        }

        let ground_truth = if self.ground_truth_aliases {
            self.resolve_ground_truth(class_name)
        } else {
            None
        };
        if ground_truth.is_some() {
            return ground_truth;
        }

        if let Some(color) = self.resolve_ignore_case(class_name) {
            log::debug!("Class '{}' matched ignoring case", class_name);
            return Some(color);
        }

        self.fall_back(class_name)
    }

    /// Resolve a class name, using `default` when nothing matched.
    pub fn resolve_or(&self, class_name: &str, default: Rgb) -> Rgb {
        self.resolve(class_name).unwrap_or(default)
    }

    /// Resolve a class name to a `#rrggbb` string.
    pub fn resolve_hex(&self, class_name: &str) -> Option<String> {
        self.resolve(class_name).map(|color| color.to_hex())
    }

    fn resolve_ground_truth(&self, class_name: &str) -> Option<Rgb> {
        if let Some((_, target)) = GROUND_TRUTH_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(class_name))
        {
            log::debug!("Ground-truth class '{}' resolved as '{}'", class_name, target);
            return self.resolve_base(target);
        }

        let base = class_name.strip_prefix(GROUND_TRUTH_PREFIX)?;
        if base.is_empty() {
            return None;
        }
        log::debug!("Ground-truth class '{}' resolved as '{}'", class_name, base);
        self.resolve_base(base)
    }

    fn resolve_base(&self, base: &str) -> Option<Rgb> {
        self.overrides
            .get(base)
            .copied()
            .or_else(|| defaults::lookup_rgb(base))
            .or_else(|| self.resolve_ignore_case(base))
    }

    /// Overrides win over defaults. Among overrides differing only in case,
    /// the first in sorted key order wins.
    fn resolve_ignore_case(&self, class_name: &str) -> Option<Rgb> {
        self.overrides
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(class_name))
            .map(|(_, color)| *color)
            .or_else(|| defaults::lookup_ignore_case(class_name).and_then(parse_default))
    }

    fn fall_back(&self, class_name: &str) -> Option<Rgb> {
        match self.fallback {
            FallbackPolicy::Other => {
                log::debug!("Unknown class '{}', using '{}'", class_name, defaults::OTHER_CLASS);
                self.overrides
                    .get(defaults::OTHER_CLASS)
                    .copied()
                    .or_else(|| defaults::lookup_rgb(defaults::OTHER_CLASS))
            }
            FallbackPolicy::Generated => {
                let color = generated_color(class_name);
                log::debug!("Unknown class '{}', generated {}", class_name, color);
                Some(color)
            }
            FallbackPolicy::None => {
                log::debug!("Unknown class '{}', no fallback color", class_name);
                None
            }
        }
    }
}

impl Default for ClassColorResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_default(hex: &str) -> Option<Rgb> {
    Rgb::from_hex(hex).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[test]
    fn test_known_class_uses_default() {
        let resolver = ClassColorResolver::new();
        assert_eq!(resolver.resolve("Car"), Some(RED));
        assert_eq!(resolver.resolve_hex("Road").as_deref(), Some("#808000"));
    }

    #[test]
    fn test_override_wins_over_default() {
        let teal = Rgb::new(0, 128, 128);
        let resolver = ClassColorResolver::new().with_override("Car", teal);
        assert_eq!(resolver.resolve("Car"), Some(teal));
        assert_eq!(resolver.resolve("Truck"), Some(Rgb::new(255, 255, 0)));
    }

    #[test]
    fn test_override_applies_to_case_and_ground_truth_variants() {
        let teal = Rgb::new(0, 128, 128);
        let resolver = ClassColorResolver::new().with_override("Car", teal);
        for name in ["Car", "GT_Car", "CAR", "GT_CAR", "car"] {
            assert_eq!(resolver.resolve_hex(name).as_deref(), Some("#008080"), "{name}");
        }
        // Untouched classes still resolve ignoring case to their default
        assert_eq!(resolver.resolve("TRUCK"), Some(Rgb::new(255, 255, 0)));
    }

    #[test]
    fn test_exact_default_beats_case_insensitive_override() {
        let teal = Rgb::new(0, 128, 128);
        let resolver = ClassColorResolver::new().with_override("car", teal);
        assert_eq!(resolver.resolve("Car"), Some(RED));
        assert_eq!(resolver.resolve("car"), Some(teal));
        assert_eq!(resolver.resolve("CAR"), Some(teal));
    }

    #[test]
    fn test_override_adds_new_class() {
        let resolver = ClassColorResolver::new().with_override("Trailer", RED);
        assert_eq!(resolver.resolve("Trailer"), Some(RED));
    }

    #[test]
    fn test_ground_truth_entries_in_table_are_exact() {
        let resolver = ClassColorResolver::new();
        assert_eq!(resolver.resolve("GT_Vehicle"), Some(Rgb::new(255, 255, 0)));
        assert_eq!(
            resolver.resolve("GT_Pedestrian"),
            Some(Rgb::new(0xf5, 0xf5, 0xdc))
        );
    }

    #[test]
    fn test_ground_truth_prefix_is_stripped() {
        let resolver = ClassColorResolver::new().with_fallback(FallbackPolicy::None);
        assert_eq!(resolver.resolve("GT_Car"), Some(RED));
        assert_eq!(resolver.resolve("GT_CAR"), Some(RED));
        assert_eq!(resolver.resolve("GT_PED"), Some(Rgb::new(255, 140, 0)));
        assert_eq!(resolver.resolve("GT_"), None);
        assert_eq!(resolver.resolve("GT_Trailer"), None);
    }

    #[test]
    fn test_ground_truth_prefix_can_be_disabled() {
        let resolver = ClassColorResolver::new()
            .with_fallback(FallbackPolicy::None)
            .with_ground_truth_aliases(false);
        assert_eq!(resolver.resolve("GT_Car"), None);
        // Exact table entries are unaffected
        assert!(resolver.resolve("GT_Vehicle").is_some());
    }

    #[test]
    fn test_case_insensitive_match() {
        let resolver = ClassColorResolver::new().with_fallback(FallbackPolicy::None);
        assert_eq!(resolver.resolve("CAR"), Some(RED));
        assert_eq!(resolver.resolve("trafficlight"), Some(Rgb::new(255, 0, 255)));
    }

    #[test]
    fn test_fallback_other() {
        let resolver = ClassColorResolver::new();
        assert_eq!(resolver.fallback(), FallbackPolicy::Other);
        assert_eq!(resolver.resolve("NonexistentClass"), Some(WHITE));
    }

    #[test]
    fn test_fallback_other_respects_override() {
        let grey = Rgb::new(64, 64, 64);
        let resolver = ClassColorResolver::new().with_override(defaults::OTHER_CLASS, grey);
        assert_eq!(resolver.resolve("NonexistentClass"), Some(grey));
    }

    #[test]
    fn test_fallback_generated() {
        let resolver = ClassColorResolver::new().with_fallback(FallbackPolicy::Generated);
        assert_eq!(
            resolver.resolve("NonexistentClass"),
            Some(generated_color("NonexistentClass"))
        );
        assert_eq!(resolver.resolve("Car"), Some(RED));
    }

    #[test]
    fn test_fallback_none() {
        let resolver = ClassColorResolver::new().with_fallback(FallbackPolicy::None);
        assert_eq!(resolver.resolve("NonexistentClass"), None);
        assert_eq!(resolver.resolve_hex("NonexistentClass"), None);
        assert_eq!(resolver.resolve_or("NonexistentClass", RED), RED);
    }

    #[test]
    fn test_fallback_policy_serde() {
        assert_eq!(
            serde_json::to_string(&FallbackPolicy::Generated).unwrap(),
            "\"generated\""
        );
        let parsed: FallbackPolicy = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, FallbackPolicy::None);
        assert_eq!(FallbackPolicy::all().len(), 3);
        assert_eq!(FallbackPolicy::Generated.name(), "Generated");
    }

    #[test]
    fn test_resolver_is_shareable_across_threads() {
        let resolver = std::sync::Arc::new(ClassColorResolver::new());
        let handles: Vec<_> = ["Car", "GT_Car", "CAR", "Unknown"]
            .into_iter()
            .map(|name| {
                let resolver = std::sync::Arc::clone(&resolver);
                std::thread::spawn(move || resolver.resolve(name))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![Some(RED), Some(RED), Some(RED), Some(WHITE)]);
    }
}
