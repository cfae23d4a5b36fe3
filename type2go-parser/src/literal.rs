//! Literal-only grammar for annotation arguments.
//!
//! Annotation text comes from the source files being transformed, so it is
//! parsed with a dedicated recursive-descent literal grammar. Identifiers,
//! member accesses, and calls are rejected; nothing is ever evaluated.

use indexmap::IndexMap;
use type2go_ast::Literal;

use crate::error::Result;
use crate::lexer::TokenKind;
use crate::parse::Parser;

impl Parser {
    /// Parse one literal expression: string, number, boolean, sequence, or
    /// mapping with ordinary or quoted keys.
    pub(crate) fn literal(&mut self) -> Result<Literal> {
        self.skip_newlines();
        match self.peek().kind.clone() {
            TokenKind::Str(value) => {
                self.advance();
                Ok(Literal::String(value))
            }
            TokenKind::Number(value) => {
                self.advance();
                Ok(Literal::Number(value))
            }
            TokenKind::Ident(name) if name == "true" => {
                self.advance();
                Ok(Literal::Bool(true))
            }
            TokenKind::Ident(name) if name == "false" => {
                self.advance();
                Ok(Literal::Bool(false))
            }
            TokenKind::LBracket => self.sequence(),
            TokenKind::LBrace => self.mapping(),
            kind => {
                let token = self.peek();
                Err(self.ctx.literal_error(kind.describe(), token.span()))
            }
        }
    }

    fn sequence(&mut self) -> Result<Literal> {
        self.advance(); // '['
        let mut items = Vec::new();
        loop {
            self.skip_newlines();
            if self.peek().kind == TokenKind::RBracket {
                self.advance();
                return Ok(Literal::Sequence(items));
            }
            items.push(self.literal()?);
            self.skip_newlines();
            match self.peek().kind {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::RBracket => {}
                _ => return Err(self.unexpected("',' or ']'")),
            }
        }
    }

    fn mapping(&mut self) -> Result<Literal> {
        self.advance(); // '{'
        let mut entries = IndexMap::new();
        loop {
            self.skip_newlines();
            if self.peek().kind == TokenKind::RBrace {
                self.advance();
                return Ok(Literal::Mapping(entries));
            }
            let key = match self.peek().kind.clone() {
                TokenKind::Ident(name) => {
                    self.advance();
                    name
                }
                TokenKind::Str(value) => {
                    self.advance();
                    value
                }
                _ => return Err(self.unexpected("a property key")),
            };
            self.skip_newlines();
            self.expect(TokenKind::Colon, "':'")?;
            let value = self.literal()?;
            entries.insert(key, value);
            self.skip_newlines();
            match self.peek().kind {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::RBrace => {}
                _ => return Err(self.unexpected("',' or '}'")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn literal(src: &str) -> Result<Literal> {
        Parser::new(src, "test.ts")?.literal()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(literal("'omitempty'").unwrap().as_str(), Some("omitempty"));
        assert_eq!(literal("42").unwrap(), Literal::Number(42.0));
        assert_eq!(literal("true").unwrap(), Literal::Bool(true));
        assert_eq!(literal("false").unwrap(), Literal::Bool(false));
    }

    #[test]
    fn test_sequences() {
        let lit = literal("['a', 'b',]").unwrap();
        assert_eq!(
            lit,
            Literal::Sequence(vec![
                Literal::String("a".into()),
                Literal::String("b".into()),
            ])
        );
        assert_eq!(literal("[]").unwrap(), Literal::Sequence(vec![]));
    }

    #[test]
    fn test_mappings() {
        let lit = literal("{json: 'omitempty', \"quoted key\": [1, 2]}").unwrap();
        let mapping = lit.as_mapping().unwrap();
        assert_eq!(mapping.get("json").unwrap().as_str(), Some("omitempty"));
        assert_eq!(
            mapping.get("quoted key").unwrap(),
            &Literal::Sequence(vec![Literal::Number(1.0), Literal::Number(2.0)])
        );
    }

    #[test]
    fn test_nested_and_multiline() {
        let lit = literal("{\n    outer: {\n        inner: [true, false],\n    },\n}").unwrap();
        let outer = lit.as_mapping().unwrap().get("outer").unwrap();
        let inner = outer.as_mapping().unwrap().get("inner").unwrap();
        assert_eq!(inner.as_sequence().map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_identifier_is_rejected() {
        let err = literal("someVariable").unwrap_err();
        assert!(matches!(*err, Error::Literal { .. }));
    }

    #[test]
    fn test_call_is_rejected() {
        // the callee identifier is rejected before the parentheses matter
        let err = literal("buildTags()").unwrap_err();
        assert!(matches!(*err, Error::Literal { .. }));
    }
}
