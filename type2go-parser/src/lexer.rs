//! Token stream for the model-declaration grammar.
//!
//! Newlines are significant: they terminate member declarations, so runs of
//! newlines are collapsed into a single [`TokenKind::Newline`] token rather
//! than discarded.

use crate::error::{Result, SourceContext};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    At,
    Ident(String),
    Str(String),
    Number(f64),
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Lt,
    Gt,
    Colon,
    Semi,
    Comma,
    Question,
    Newline,
    Eof,
}

impl TokenKind {
    /// Human-readable description for error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            TokenKind::At => "'@'".into(),
            TokenKind::Ident(name) => format!("identifier '{name}'"),
            TokenKind::Str(_) => "a string literal".into(),
            TokenKind::Number(_) => "a number literal".into(),
            TokenKind::LBrace => "'{'".into(),
            TokenKind::RBrace => "'}'".into(),
            TokenKind::LBracket => "'['".into(),
            TokenKind::RBracket => "']'".into(),
            TokenKind::LParen => "'('".into(),
            TokenKind::RParen => "')'".into(),
            TokenKind::Lt => "'<'".into(),
            TokenKind::Gt => "'>'".into(),
            TokenKind::Colon => "':'".into(),
            TokenKind::Semi => "';'".into(),
            TokenKind::Comma => "','".into(),
            TokenKind::Question => "'?'".into(),
            TokenKind::Newline => "end of line".into(),
            TokenKind::Eof => "end of file".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl Token {
    pub(crate) fn span(&self) -> (usize, usize) {
        (self.offset, self.len)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Tokenize a model source file.
pub(crate) fn tokenize(src: &str, ctx: &SourceContext) -> Result<Vec<Token>> {
    let chars: Vec<(usize, char)> = src.char_indices().collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut i = 0;

    let mut push = |tokens: &mut Vec<Token>, kind: TokenKind, offset: usize, len: usize| {
        tokens.push(Token { kind, offset, len });
    };

    while i < chars.len() {
        let (offset, c) = chars[i];
        match c {
            ' ' | '\t' | '\r' => i += 1,
            '\n' => {
                if tokens.last().map(|t| &t.kind) != Some(&TokenKind::Newline) {
                    push(&mut tokens, TokenKind::Newline, offset, 1);
                }
                i += 1;
            }
            '/' if matches!(chars.get(i + 1), Some((_, '/'))) => {
                // line comment: runs to end of line, the newline itself is lexed
                while i < chars.len() && chars[i].1 != '\n' {
                    i += 1;
                }
            }
            '/' if matches!(chars.get(i + 1), Some((_, '*'))) => {
                i += 2;
                while i < chars.len() {
                    if chars[i].1 == '*' && matches!(chars.get(i + 1), Some((_, '/'))) {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
            }
            '@' => {
                push(&mut tokens, TokenKind::At, offset, 1);
                i += 1;
            }
            '{' => {
                push(&mut tokens, TokenKind::LBrace, offset, 1);
                i += 1;
            }
            '}' => {
                push(&mut tokens, TokenKind::RBrace, offset, 1);
                i += 1;
            }
            '[' => {
                push(&mut tokens, TokenKind::LBracket, offset, 1);
                i += 1;
            }
            ']' => {
                push(&mut tokens, TokenKind::RBracket, offset, 1);
                i += 1;
            }
            '(' => {
                push(&mut tokens, TokenKind::LParen, offset, 1);
                i += 1;
            }
            ')' => {
                push(&mut tokens, TokenKind::RParen, offset, 1);
                i += 1;
            }
            '<' => {
                push(&mut tokens, TokenKind::Lt, offset, 1);
                i += 1;
            }
            '>' => {
                push(&mut tokens, TokenKind::Gt, offset, 1);
                i += 1;
            }
            ':' => {
                push(&mut tokens, TokenKind::Colon, offset, 1);
                i += 1;
            }
            ';' => {
                push(&mut tokens, TokenKind::Semi, offset, 1);
                i += 1;
            }
            ',' => {
                push(&mut tokens, TokenKind::Comma, offset, 1);
                i += 1;
            }
            '?' => {
                push(&mut tokens, TokenKind::Question, offset, 1);
                i += 1;
            }
            '\'' | '"' | '`' => {
                let quote = c;
                let mut value = String::new();
                let mut closed = false;
                i += 1;
                while i < chars.len() {
                    let (_, sc) = chars[i];
                    if sc == quote {
                        i += 1;
                        closed = true;
                        break;
                    }
                    if sc == '\n' {
                        break;
                    }
                    if sc == '\\' {
                        i += 1;
                        match chars.get(i) {
                            Some((_, 'n')) => value.push('\n'),
                            Some((_, 't')) => value.push('\t'),
                            Some((_, 'r')) => value.push('\r'),
                            Some((_, escaped)) => value.push(*escaped),
                            None => break,
                        }
                        i += 1;
                        continue;
                    }
                    value.push(sc);
                    i += 1;
                }
                if !closed {
                    return Err(ctx.unterminated_string((offset, quote.len_utf8())));
                }
                let end = chars.get(i).map_or(src.len(), |(o, _)| *o);
                push(&mut tokens, TokenKind::Str(value), offset, end - offset);
            }
            c if is_ident_start(c) => {
                let mut end = i;
                while end < chars.len() && is_ident_continue(chars[end].1) {
                    end += 1;
                }
                let end_offset = chars.get(end).map_or(src.len(), |(o, _)| *o);
                let text = &src[offset..end_offset];
                push(
                    &mut tokens,
                    TokenKind::Ident(text.to_string()),
                    offset,
                    end_offset - offset,
                );
                i = end;
            }
            c if c.is_ascii_digit()
                || (c == '-' && matches!(chars.get(i + 1), Some((_, d)) if d.is_ascii_digit())) =>
            {
                let mut end = i + 1;
                let mut seen_dot = false;
                while end < chars.len() {
                    let dc = chars[end].1;
                    if dc.is_ascii_digit() {
                        end += 1;
                    } else if dc == '.' && !seen_dot {
                        seen_dot = true;
                        end += 1;
                    } else {
                        break;
                    }
                }
                let end_offset = chars.get(end).map_or(src.len(), |(o, _)| *o);
                let text = &src[offset..end_offset];
                let value: f64 = text
                    .parse()
                    .map_err(|_| ctx.unexpected_char(c, (offset, end_offset - offset)))?;
                push(
                    &mut tokens,
                    TokenKind::Number(value),
                    offset,
                    end_offset - offset,
                );
                i = end;
            }
            other => return Err(ctx.unexpected_char(other, (offset, other.len_utf8()))),
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        offset: src.len(),
        len: 0,
    });
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let ctx = SourceContext::new(src, "test.ts");
        tokenize(src, &ctx)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_punctuation_and_idents() {
        assert_eq!(
            kinds("class User extends Base {}"),
            vec![
                TokenKind::Ident("class".into()),
                TokenKind::Ident("User".into()),
                TokenKind::Ident("extends".into()),
                TokenKind::Ident("Base".into()),
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_strings_and_numbers() {
        assert_eq!(
            kinds(r#"'omitempty' "a;b" 42 -1.5"#),
            vec![
                TokenKind::Str("omitempty".into()),
                TokenKind::Str("a;b".into()),
                TokenKind::Number(42.0),
                TokenKind::Number(-1.5),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_newlines_collapse() {
        assert_eq!(
            kinds("a\n\n\nb"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Newline,
                TokenKind::Ident("b".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("a // trailing\n/* block\ncomment */ b"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Newline,
                TokenKind::Ident("b".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            kinds(r#"'it\'s' "tab\there""#),
            vec![
                TokenKind::Str("it's".into()),
                TokenKind::Str("tab\there".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let ctx = SourceContext::new("'oops", "test.ts");
        let err = tokenize("'oops", &ctx).unwrap_err();
        assert!(matches!(*err, crate::Error::UnterminatedString { .. }));
    }

    #[test]
    fn test_unexpected_char() {
        let ctx = SourceContext::new("a # b", "test.ts");
        let err = tokenize("a # b", &ctx).unwrap_err();
        assert!(matches!(*err, crate::Error::UnexpectedChar { ch: '#', .. }));
    }
}
