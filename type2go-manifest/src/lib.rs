//! Manifest types and parsing for type2go.toml files.
//!
//! The manifest is the process-wide configuration for one run: where model
//! sources live, where generated Go files go, and which naming convention
//! each tag name uses. It is loaded once before any class is processed and
//! never mutated mid-run.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

pub use error::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use type2go_core::NamingStyle;

/// Root manifest for type2go.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Directory scanned for `.ts` model files
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory receiving one generated `.go` file per model class
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Naming convention per tag name, consulted when seeding generated tags
    #[serde(default = "default_naming")]
    pub naming: IndexMap<String, NamingStyle>,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("ts_models")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("go_models")
}

fn default_naming() -> IndexMap<String, NamingStyle> {
    IndexMap::from([
        ("json".to_string(), NamingStyle::Unchanged),
        ("bson".to_string(), NamingStyle::BigCamel),
        ("gorm".to_string(), NamingStyle::SnakeCase),
    ])
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            naming: default_naming(),
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "type2go.toml")
    }
}

impl Manifest {
    /// Parse a type2go.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
///
/// Tag names end up inside Go struct tag strings, so they must be plain
/// identifiers with no whitespace or tag-delimiter characters.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    for tag in manifest.naming.keys() {
        if tag.is_empty() {
            return Err(Error::validation("empty tag name", src, filename, None));
        }
        if tag.chars().any(|c| c.is_whitespace() || c == '"' || c == '`' || c == ':') {
            let span = src
                .find(tag.as_str())
                .map(|offset| miette::SourceSpan::from((offset, tag.len())));
            return Err(Error::validation(
                format!("invalid tag name '{tag}'"),
                src,
                filename,
                span,
            ));
        }
    }
    Ok(())
}
