//! Identifier casing styles for generated struct tags.

use serde::Deserialize;

use crate::utils::{to_camel_case, to_pascal_case, to_snake_case};

/// A deterministic identifier-casing transform.
///
/// The serde spellings match the values accepted in the `[naming]` table of
/// `type2go.toml` ("BigCamel", "smallCamel", "snake_case", "unchanged").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum NamingStyle {
    /// PascalCase
    #[serde(rename = "BigCamel")]
    BigCamel,
    /// camelCase
    #[serde(rename = "smallCamel")]
    SmallCamel,
    /// snake_case
    #[serde(rename = "snake_case")]
    SnakeCase,
    /// Identity: the identifier is used as-is
    #[serde(rename = "unchanged")]
    Unchanged,
}

impl NamingStyle {
    /// Get the configuration spelling (used in type2go.toml)
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStyle::BigCamel => "BigCamel",
            NamingStyle::SmallCamel => "smallCamel",
            NamingStyle::SnakeCase => "snake_case",
            NamingStyle::Unchanged => "unchanged",
        }
    }

    /// Apply this casing transform to an identifier.
    pub fn apply(&self, ident: &str) -> String {
        match self {
            NamingStyle::BigCamel => to_pascal_case(ident),
            NamingStyle::SmallCamel => to_camel_case(ident),
            NamingStyle::SnakeCase => to_snake_case(ident),
            NamingStyle::Unchanged => ident.to_string(),
        }
    }
}
