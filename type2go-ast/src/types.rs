use crate::class::FieldDecl;

/// A declared field type, built structurally at parse time.
///
/// Recursion replaces ad hoc text inspection: a trailing `[]` marker
/// becomes [`TypeExpr::Array`], `Map<K, V>` becomes [`TypeExpr::Map`], and
/// an object-literal type becomes [`TypeExpr::Inline`]. Any other name
/// stays a [`TypeExpr::Named`] and is interpreted (or passed through) by
/// the translator.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// A named type: `string`, `boolean`, `Date`, `int`, `SomeAlias`, ...
    Named(String),
    /// An array of an element type: `Date[]`, `int[][]`
    Array(Box<TypeExpr>),
    /// A parameterized map: `Map<string, int[]>`
    Map(Box<TypeExpr>, Box<TypeExpr>),
    /// An inline object-literal type: `{ a: int, b: string }`
    Inline(Vec<FieldDecl>),
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    pub fn array(element: TypeExpr) -> Self {
        TypeExpr::Array(Box::new(element))
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Map(Box::new(key), Box::new(value))
    }
}
