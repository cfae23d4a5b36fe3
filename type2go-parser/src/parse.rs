//! Recursive-descent parser for annotated model class declarations.

use std::path::Path;

use type2go_ast::{Annotations, ClassDecl, FieldDecl, Literal, TypeExpr};

use crate::error::{Error, Result, SourceContext};
use crate::lexer::{Token, TokenKind, tokenize};

/// Parse a model source file from disk.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<ClassDecl>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    parse_source(&content, &path.display().to_string())
}

/// Parse model class declarations from source text.
///
/// The filename is only used for error reporting.
pub fn parse_source(src: &str, filename: &str) -> Result<Vec<ClassDecl>> {
    Parser::new(src, filename)?.source()
}

pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    pub(crate) ctx: SourceContext,
}

impl Parser {
    pub(crate) fn new(src: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(src, filename);
        let tokens = tokenize(src, &ctx)?;
        Ok(Self {
            tokens,
            pos: 0,
            ctx,
        })
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        // Eof is the last token and is never consumed past
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn skip_newlines(&mut self) {
        while self.peek().kind == TokenKind::Newline {
            self.advance();
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token> {
        if self.peek().kind == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    pub(crate) fn unexpected(&self, expected: &str) -> Box<Error> {
        let token = self.peek();
        self.ctx
            .unexpected_token(expected, token.kind.describe(), token.span())
    }

    fn ident(&mut self, expected: &str) -> Result<String> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<()> {
        match &self.peek().kind {
            TokenKind::Ident(name) if name == keyword => {
                self.advance();
                Ok(())
            }
            _ => Err(self.unexpected(&format!("'{keyword}'"))),
        }
    }

    fn source(mut self) -> Result<Vec<ClassDecl>> {
        let mut classes = Vec::new();
        loop {
            self.skip_newlines();
            if self.peek().kind == TokenKind::Eof {
                return Ok(classes);
            }
            classes.push(self.class()?);
        }
    }

    fn class(&mut self) -> Result<ClassDecl> {
        let annotations = self.annotations()?;
        self.expect_keyword("class")?;
        let name = self.ident("a class name")?;

        let base = match &self.peek().kind {
            TokenKind::Ident(kw) if kw == "extends" => {
                self.advance();
                Some(self.ident("a base class name")?)
            }
            _ => None,
        };

        self.skip_newlines();
        self.expect(TokenKind::LBrace, "'{'")?;
        let fields = self.members()?;

        Ok(ClassDecl {
            name,
            base,
            annotations,
            fields,
        })
    }

    /// Zero or more `@Name` / `@Name(argument)` annotations.
    ///
    /// An annotation without arguments (or with empty parentheses) carries
    /// an empty mapping. Arguments go through the literal-only grammar in
    /// `literal.rs`.
    fn annotations(&mut self) -> Result<Annotations> {
        let mut annotations = Annotations::new();
        loop {
            self.skip_newlines();
            if self.peek().kind != TokenKind::At {
                return Ok(annotations);
            }
            self.advance();
            let name = self.ident("an annotation name")?;

            let argument = if self.peek().kind == TokenKind::LParen {
                self.advance();
                self.skip_newlines();
                let argument = if self.peek().kind == TokenKind::RParen {
                    Literal::empty_mapping()
                } else {
                    let literal = self.literal()?;
                    self.skip_newlines();
                    literal
                };
                self.expect(TokenKind::RParen, "')'")?;
                argument
            } else {
                Literal::empty_mapping()
            };

            annotations.insert(name, argument);
        }
    }

    /// Property declarations up to and including the closing `}`.
    ///
    /// Shared between class bodies and inline object-literal types.
    fn members(&mut self) -> Result<Vec<FieldDecl>> {
        let mut fields = Vec::new();
        loop {
            self.skip_newlines();
            match self.peek().kind {
                TokenKind::RBrace => {
                    self.advance();
                    return Ok(fields);
                }
                TokenKind::Eof => return Err(self.unexpected("'}'")),
                _ => fields.push(self.member()?),
            }
        }
    }

    fn member(&mut self) -> Result<FieldDecl> {
        let annotations = self.annotations()?;
        let name = self.ident("a property name")?;

        let optional = if self.peek().kind == TokenKind::Question {
            self.advance();
            true
        } else {
            false
        };

        let ty = if self.peek().kind == TokenKind::Colon {
            self.advance();
            Some(self.type_expr()?)
        } else {
            // missing type annotation: the translator emits UNKNOWN
            None
        };

        self.member_terminator()?;

        Ok(FieldDecl {
            name,
            optional,
            ty,
            annotations,
        })
    }

    fn member_terminator(&mut self) -> Result<()> {
        match self.peek().kind {
            TokenKind::Newline | TokenKind::Semi | TokenKind::Comma => {
                self.advance();
                Ok(())
            }
            TokenKind::RBrace | TokenKind::Eof => Ok(()),
            _ => Err(self.unexpected("end of property declaration")),
        }
    }

    /// One type expression, built structurally.
    ///
    /// The array marker `[]` binds postfix and must start on the same line
    /// as the type it modifies.
    fn type_expr(&mut self) -> Result<TypeExpr> {
        let mut ty = match self.peek().kind.clone() {
            TokenKind::LBrace => {
                self.advance();
                TypeExpr::Inline(self.members()?)
            }
            TokenKind::Ident(name) => {
                self.advance();
                if name == "Map" && self.peek().kind == TokenKind::Lt {
                    self.advance();
                    self.skip_newlines();
                    let key = self.type_expr()?;
                    self.skip_newlines();
                    self.expect(TokenKind::Comma, "','")?;
                    self.skip_newlines();
                    let value = self.type_expr()?;
                    self.skip_newlines();
                    self.expect(TokenKind::Gt, "'>'")?;
                    TypeExpr::map(key, value)
                } else {
                    TypeExpr::Named(name)
                }
            }
            _ => return Err(self.unexpected("a type")),
        };

        while self.peek().kind == TokenKind::LBracket {
            self.advance();
            self.expect(TokenKind::RBracket, "']'")?;
            ty = TypeExpr::array(ty);
        }

        Ok(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(src: &str) -> ClassDecl {
        let mut classes = parse_source(src, "test.ts").unwrap();
        assert_eq!(classes.len(), 1);
        classes.pop().unwrap()
    }

    #[test]
    fn test_empty_annotated_class() {
        let class = parse_one("@GoModel()\nclass Base {}");
        assert_eq!(class.name, "Base");
        assert_eq!(class.base, None);
        assert!(class.annotations.contains("GoModel"));
        assert!(class.fields.is_empty());
    }

    #[test]
    fn test_extends_clause() {
        let class = parse_one("@GoModel()\nclass User extends Base {}");
        assert_eq!(class.base.as_deref(), Some("Base"));
    }

    #[test]
    fn test_fields_and_optional_marker() {
        let class = parse_one(
            "@GoModel()\nclass User {\n    id: string\n    someNullable?: string\n    untyped\n}",
        );
        assert_eq!(class.fields.len(), 3);
        assert_eq!(class.fields[0].name, "id");
        assert_eq!(class.fields[0].ty, Some(TypeExpr::named("string")));
        assert!(!class.fields[0].optional);
        assert!(class.fields[1].optional);
        assert_eq!(class.fields[2].ty, None);
    }

    #[test]
    fn test_array_and_map_types() {
        let class = parse_one(
            "class M {\n    someArray: Date[]\n    deep: int[][]\n    someMap: Map<string, int[]>\n}",
        );
        assert_eq!(
            class.fields[0].ty,
            Some(TypeExpr::array(TypeExpr::named("Date")))
        );
        assert_eq!(
            class.fields[1].ty,
            Some(TypeExpr::array(TypeExpr::array(TypeExpr::named("int"))))
        );
        assert_eq!(
            class.fields[2].ty,
            Some(TypeExpr::map(
                TypeExpr::named("string"),
                TypeExpr::array(TypeExpr::named("int"))
            ))
        );
    }

    #[test]
    fn test_inline_object_type() {
        let class = parse_one("class M {\n    someInlineType: {\n        a: int\n        b: string\n    }\n}");
        let Some(TypeExpr::Inline(fields)) = &class.fields[0].ty else {
            panic!("expected an inline type");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "a");
        assert_eq!(fields[1].ty, Some(TypeExpr::named("string")));
    }

    #[test]
    fn test_field_annotations() {
        let class = parse_one(
            "class M {\n    @ExtraTags({json: 'omitempty'})\n    id: string\n    @CustomNaming({bson: 'UserName'})\n    name: string\n}",
        );
        let extra = class.fields[0].annotations.get("ExtraTags").unwrap();
        assert_eq!(
            extra.as_mapping().unwrap().get("json").unwrap().as_str(),
            Some("omitempty")
        );
        assert!(class.fields[1].annotations.contains("CustomNaming"));
    }

    #[test]
    fn test_class_annotation_argument() {
        let class = parse_one(
            "@GoModel({\n    packageName: 'model',\n    modelName: 'UserModel',\n    generateTags: ['json', 'gorm', 'bson'],\n})\nclass User {}",
        );
        let config = class.annotations.get("GoModel").unwrap();
        let mapping = config.as_mapping().unwrap();
        assert_eq!(mapping.get("modelName").unwrap().as_str(), Some("UserModel"));
        let tags = mapping.get("generateTags").unwrap().as_sequence().unwrap();
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn test_semicolon_terminators() {
        let class = parse_one("class M { a: int; b: string; }");
        assert_eq!(class.fields.len(), 2);
    }

    #[test]
    fn test_non_literal_annotation_argument_fails() {
        let err = parse_source(
            "class M {\n    @ExtraTags(someConfigObject)\n    id: string\n}",
            "test.ts",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Literal { .. }));

        let err = parse_source("@GoModel({tags: makeTags()})\nclass M {}", "test.ts").unwrap_err();
        assert!(matches!(*err, Error::Literal { .. }));
    }

    #[test]
    fn test_missing_brace_fails() {
        let err = parse_source("class M {\n    a: int\n", "test.ts").unwrap_err();
        assert!(matches!(*err, Error::UnexpectedToken { .. }));
    }
}
