//! Per-tag naming convention resolution.

use indexmap::IndexMap;
use type2go_core::NamingStyle;

/// Resolves the configured casing convention for each tag name.
///
/// Built from the manifest's `[naming]` table and passed in explicitly, so
/// independent runs (and tests) can use different configurations without
/// interference. A tag name with no configured convention is a
/// configuration error surfaced by the tag assembler; there is no identity
/// fallback.
#[derive(Debug, Clone)]
pub struct NamingRegistry {
    styles: IndexMap<String, NamingStyle>,
}

impl NamingRegistry {
    /// Create a registry from a tag-name → style mapping.
    pub fn new(styles: IndexMap<String, NamingStyle>) -> Self {
        Self { styles }
    }

    /// Look up the convention configured for a tag name.
    pub fn style(&self, tag: &str) -> Option<NamingStyle> {
        self.styles.get(tag).copied()
    }

    /// Apply the tag's configured convention to an identifier.
    ///
    /// Returns `None` when the tag has no configured convention.
    pub fn convert(&self, tag: &str, ident: &str) -> Option<String> {
        self.style(tag).map(|style| style.apply(ident))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> NamingRegistry {
        NamingRegistry::new(IndexMap::from([
            ("json".to_string(), NamingStyle::Unchanged),
            ("bson".to_string(), NamingStyle::BigCamel),
            ("gorm".to_string(), NamingStyle::SnakeCase),
        ]))
    }

    #[test]
    fn test_convert_applies_configured_style() {
        let registry = registry();
        assert_eq!(
            registry.convert("json", "someArray").as_deref(),
            Some("someArray")
        );
        assert_eq!(
            registry.convert("bson", "someArray").as_deref(),
            Some("SomeArray")
        );
        assert_eq!(
            registry.convert("gorm", "someArray").as_deref(),
            Some("some_array")
        );
    }

    #[test]
    fn test_unconfigured_tag_has_no_convention() {
        assert_eq!(registry().convert("yaml", "someArray"), None);
    }
}
