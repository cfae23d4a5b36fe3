use indexmap::IndexMap;

/// A literal value extracted from an annotation argument.
///
/// Only literal syntax is representable: strings, numbers, booleans,
/// ordered sequences, and string-keyed mappings. Identifiers, calls, and
/// other expressions are rejected at parse time; annotation text comes
/// from the source files being transformed and is never evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
    Bool(bool),
    Sequence(Vec<Literal>),
    Mapping(IndexMap<String, Literal>),
}

impl Literal {
    /// An empty mapping, used for annotations declared without arguments.
    pub fn empty_mapping() -> Self {
        Literal::Mapping(IndexMap::new())
    }

    /// Borrow as a string, if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow as a sequence, if this is a sequence literal.
    pub fn as_sequence(&self) -> Option<&[Literal]> {
        match self {
            Literal::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow as a mapping, if this is a mapping literal.
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Literal>> {
        match self {
            Literal::Mapping(entries) => Some(entries),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let lit = Literal::String("omitempty".into());
        assert_eq!(lit.as_str(), Some("omitempty"));
        assert_eq!(lit.as_sequence(), None);

        let seq = Literal::Sequence(vec![Literal::Bool(true)]);
        assert_eq!(seq.as_sequence().map(<[_]>::len), Some(1));

        assert!(Literal::empty_mapping().as_mapping().unwrap().is_empty());
    }
}
