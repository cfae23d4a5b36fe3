use indexmap::IndexMap;

use crate::{Literal, TypeExpr};

/// Structured annotation metadata attached to a class or field.
///
/// Maps annotation name (e.g. `GoModel`, `CustomNaming`, `ExtraTags`) to
/// its parsed literal argument. An annotation written without arguments
/// carries an empty mapping. Declaration order is preserved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Annotations {
    entries: IndexMap<String, Literal>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an annotation. A repeated name replaces the earlier argument.
    pub fn insert(&mut self, name: impl Into<String>, argument: Literal) {
        self.entries.insert(name.into(), argument);
    }

    /// Look up an annotation's argument by name.
    pub fn get(&self, name: &str) -> Option<&Literal> {
        self.entries.get(name)
    }

    /// Whether an annotation with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Literal)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// One declared property of a model class (or of an inline object type).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    /// Source-language property name
    pub name: String,
    /// Whether the property carried an optional (`?`) marker
    pub optional: bool,
    /// The declared type, if any; `None` emits an `UNKNOWN` marker downstream
    pub ty: Option<TypeExpr>,
    /// Field-level annotations (`CustomNaming`, `ExtraTags`)
    pub annotations: Annotations,
}

impl FieldDecl {
    /// A plain required field with a declared type (test and inline-type helper).
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            optional: false,
            ty: Some(ty),
            annotations: Annotations::new(),
        }
    }
}

/// One parsed model class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    /// Class identifier
    pub name: String,
    /// Parent class named in an `extends` clause, if any
    pub base: Option<String>,
    /// Class-level annotations (`GoModel`)
    pub annotations: Annotations,
    /// Declared properties, in source order
    pub fields: Vec<FieldDecl>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotations_preserve_order() {
        let mut anns = Annotations::new();
        anns.insert("ExtraTags", Literal::empty_mapping());
        anns.insert("CustomNaming", Literal::empty_mapping());

        let names: Vec<&str> = anns.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["ExtraTags", "CustomNaming"]);
        assert!(anns.contains("ExtraTags"));
        assert!(!anns.contains("GoModel"));
    }
}
