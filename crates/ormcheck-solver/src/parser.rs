//! Type-expression parser.
//!
//! Accepts the annotation syntax declared property types are written in:
//!
//! ```text
//! union        := intersection ( '|' intersection )*
//! intersection := postfix ( '&' postfix )*
//! postfix      := primary ( '[' ']' )*
//! primary      := '?' postfix
//!               | '(' union ')'
//!               | name ( '<' union ( ',' union )* '>' )?
//! ```
//!
//! `iterable`, `array` and `list` take one (value) or two (key, value)
//! arguments; `T[]` is `array<T>`; `?T` is `T|null`. Any other name is a
//! class, with a leading `\` stripped.

use crate::intern::TypeInterner;
use crate::type_operations::add_null;
use crate::types::{IntrinsicKind, TypeId};
use ormcheck_common::limits::MAX_TYPE_PARSE_DEPTH;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
    #[error("unexpected end of type expression `{input}`")]
    UnexpectedEnd { input: String },
    #[error("unexpected `{found}` at offset {offset} in `{input}`")]
    UnexpectedToken {
        found: String,
        offset: usize,
        input: String,
    },
    #[error("`{name}` does not accept {count} type argument(s)")]
    InvalidArguments { name: String, count: usize },
    #[error("type expression nests deeper than {limit} levels")]
    TooDeep { limit: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'s> {
    Name(&'s str),
    Punct(char),
}

fn tokenize(input: &str) -> Result<Vec<(usize, Token<'_>)>, TypeParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    while let Some(&(offset, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
        } else if is_name_char(ch) {
            let start = offset;
            let mut end = offset;
            while let Some(&(i, c)) = chars.peek() {
                if !is_name_char(c) {
                    break;
                }
                end = i + c.len_utf8();
                chars.next();
            }
            tokens.push((start, Token::Name(&input[start..end])));
        } else if "<>,|&?()[]".contains(ch) {
            tokens.push((offset, Token::Punct(ch)));
            chars.next();
        } else {
            return Err(TypeParseError::UnexpectedToken {
                found: ch.to_string(),
                offset,
                input: input.to_string(),
            });
        }
    }
    Ok(tokens)
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '\\' || ch == '-'
}

pub struct TypeParser<'a, 's> {
    interner: &'a TypeInterner,
    input: &'s str,
    tokens: Vec<(usize, Token<'s>)>,
    pos: usize,
    depth: u32,
}

impl<'a, 's> TypeParser<'a, 's> {
    pub fn new(interner: &'a TypeInterner, input: &'s str) -> Result<Self, TypeParseError> {
        Ok(Self {
            interner,
            input,
            tokens: tokenize(input)?,
            pos: 0,
            depth: 0,
        })
    }

    /// Parse the whole input as one type.
    pub fn parse(mut self) -> Result<TypeId, TypeParseError> {
        let type_id = self.parse_union()?;
        if let Some((offset, token)) = self.tokens.get(self.pos) {
            return Err(self.unexpected(*offset, token));
        }
        Ok(type_id)
    }

    fn unexpected(&self, offset: usize, token: &Token<'_>) -> TypeParseError {
        let found = match token {
            Token::Name(name) => (*name).to_string(),
            Token::Punct(ch) => ch.to_string(),
        };
        TypeParseError::UnexpectedToken {
            found,
            offset,
            input: self.input.to_string(),
        }
    }

    fn peek_punct(&self, expected: char) -> bool {
        matches!(self.tokens.get(self.pos), Some((_, Token::Punct(ch))) if *ch == expected)
    }

    fn eat_punct(&mut self, expected: char) -> bool {
        if self.peek_punct(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, expected: char) -> Result<(), TypeParseError> {
        if self.eat_punct(expected) {
            return Ok(());
        }
        match self.tokens.get(self.pos) {
            Some((offset, token)) => Err(self.unexpected(*offset, token)),
            None => Err(TypeParseError::UnexpectedEnd {
                input: self.input.to_string(),
            }),
        }
    }

    fn enter(&mut self) -> Result<(), TypeParseError> {
        self.depth += 1;
        if self.depth > MAX_TYPE_PARSE_DEPTH {
            return Err(TypeParseError::TooDeep {
                limit: MAX_TYPE_PARSE_DEPTH,
            });
        }
        Ok(())
    }

    fn parse_union(&mut self) -> Result<TypeId, TypeParseError> {
        self.enter()?;
        let mut members = vec![self.parse_intersection()?];
        while self.eat_punct('|') {
            members.push(self.parse_intersection()?);
        }
        self.depth -= 1;
        Ok(self.interner.union(members))
    }

    fn parse_intersection(&mut self) -> Result<TypeId, TypeParseError> {
        let mut members = vec![self.parse_postfix()?];
        while self.eat_punct('&') {
            members.push(self.parse_postfix()?);
        }
        Ok(self.interner.intersection(members))
    }

    fn parse_postfix(&mut self) -> Result<TypeId, TypeParseError> {
        let mut type_id = self.parse_primary()?;
        while self.eat_punct('[') {
            self.expect_punct(']')?;
            type_id = self.interner.array(TypeId::MIXED, type_id);
        }
        Ok(type_id)
    }

    fn parse_primary(&mut self) -> Result<TypeId, TypeParseError> {
        let Some((offset, token)) = self.tokens.get(self.pos).cloned() else {
            return Err(TypeParseError::UnexpectedEnd {
                input: self.input.to_string(),
            });
        };
        self.pos += 1;
        match token {
            Token::Punct('?') => {
                self.enter()?;
                let inner = self.parse_postfix()?;
                self.depth -= 1;
                Ok(add_null(self.interner, inner))
            }
            Token::Punct('(') => {
                let inner = self.parse_union()?;
                self.expect_punct(')')?;
                Ok(inner)
            }
            Token::Name(name) => {
                let args = if self.eat_punct('<') {
                    self.parse_arguments()?
                } else {
                    Vec::new()
                };
                self.resolve_name(name, args)
            }
            other => Err(self.unexpected(offset, &other)),
        }
    }

    fn parse_arguments(&mut self) -> Result<Vec<TypeId>, TypeParseError> {
        let mut args = vec![self.parse_union()?];
        while self.eat_punct(',') {
            args.push(self.parse_union()?);
        }
        self.expect_punct('>')?;
        Ok(args)
    }

    fn resolve_name(&self, name: &str, args: Vec<TypeId>) -> Result<TypeId, TypeParseError> {
        let invalid = |count: usize| TypeParseError::InvalidArguments {
            name: name.to_string(),
            count,
        };
        let lowered = name.to_ascii_lowercase();

        if let Some(kind) = IntrinsicKind::from_keyword(&lowered) {
            if !args.is_empty() {
                return Err(invalid(args.len()));
            }
            return Ok(kind.to_type_id());
        }

        match lowered.as_str() {
            "iterable" | "array" | "list" => {
                let (key, value) = match args.as_slice() {
                    [] => (TypeId::MIXED, TypeId::MIXED),
                    [value] => (TypeId::MIXED, *value),
                    [key, value] if lowered != "list" => (*key, *value),
                    _ => return Err(invalid(args.len())),
                };
                Ok(match lowered.as_str() {
                    "iterable" => self.interner.iterable(key, value),
                    "list" => self.interner.array(TypeId::INT, value),
                    _ => self.interner.array(key, value),
                })
            }
            _ => Ok(self.interner.generic_object(name, args)),
        }
    }
}

/// Parse a type expression into an interned type.
pub fn parse_type(interner: &TypeInterner, input: &str) -> Result<TypeId, TypeParseError> {
    TypeParser::new(interner, input)?.parse()
}

#[cfg(test)]
#[path = "../tests/parser_tests.rs"]
mod tests;
