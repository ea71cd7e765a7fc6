// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::{FileLocation, Keyword, Punctuator, Token, TokenKind};

use super::ParseError;

/// The token classes a production can insist on. Identifiers are matched by
/// class, keywords and punctuators exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedToken {
    Identifier,
    Keyword(Keyword),
    Punctuator(Punctuator),
}

impl ExpectedToken {
    #[must_use]
    pub fn matches(&self, kind: &TokenKind) -> bool {
        match (self, kind) {
            (Self::Identifier, TokenKind::Identifier(..)) => true,
            (Self::Keyword(expected), TokenKind::Keyword(actual)) => expected == actual,
            (Self::Punctuator(expected), TokenKind::Punctuator(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl Display for ExpectedToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier => f.write_str("identifier"),
            Self::Keyword(keyword) => write!(f, "`{}`", keyword.as_ref()),
            Self::Punctuator(punctuator) => write!(f, "{} `{punctuator}`", punctuator.name()),
        }
    }
}

impl From<Keyword> for ExpectedToken {
    fn from(value: Keyword) -> Self {
        Self::Keyword(value)
    }
}

impl From<Punctuator> for ExpectedToken {
    fn from(value: Punctuator) -> Self {
        Self::Punctuator(value)
    }
}

/// Cursor over a lexed token slice. The cursor only moves forward, and only
/// through [`TokenStream::next`], [`TokenStream::expect`] and
/// [`TokenStream::allow`].
#[derive(Debug, Clone)]
pub struct TokenStream<'tokens> {
    tokens: &'tokens [Token],
    cursor: usize,
}

impl<'tokens> TokenStream<'tokens> {
    #[must_use]
    pub const fn new(tokens: &'tokens [Token]) -> Self {
        Self {
            tokens,
            cursor: 0,
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<&'tokens Token> {
        self.tokens.get(self.cursor)
    }

    #[must_use]
    pub fn peek_kind(&self) -> Option<&'tokens TokenKind> {
        self.peek().map(|token| &token.kind)
    }

    #[must_use]
    pub fn peek_punctuator(&self) -> Option<Punctuator> {
        self.peek_kind()?.as_punctuator()
    }

    #[must_use]
    pub fn peek_keyword(&self) -> Option<Keyword> {
        self.peek_kind()?.as_keyword()
    }

    pub fn next(&mut self) -> Option<&'tokens Token> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    /// Consumes the next token if it matches, otherwise fails and leaves the
    /// cursor where it is.
    pub fn expect(&mut self, expected: impl Into<ExpectedToken>) -> Result<&'tokens Token, ParseError> {
        let expected = expected.into();

        match self.peek() {
            Some(token) if expected.matches(&token.kind) => {
                self.cursor += 1;
                Ok(token)
            }

            found => Err(ParseError::ExpectedToken {
                expected,
                found: found.cloned(),
                location: self.location(),
            }),
        }
    }

    /// Consumes the next token and returns `true` if it matches.
    pub fn allow(&mut self, expected: impl Into<ExpectedToken>) -> bool {
        let expected = expected.into();

        match self.peek() {
            Some(token) if expected.matches(&token.kind) => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    pub fn expect_identifier(&mut self) -> Result<(&'tokens Token, &'tokens str), ParseError> {
        if let Some(token) = self.peek() {
            if let TokenKind::Identifier(name) = &token.kind {
                self.cursor += 1;
                return Ok((token, name.as_str()));
            }
        }

        Err(ParseError::ExpectedToken {
            expected: ExpectedToken::Identifier,
            found: self.peek().cloned(),
            location: self.location(),
        })
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Start of the next token, or the end of the last one.
    #[must_use]
    pub fn location(&self) -> FileLocation {
        match self.peek() {
            Some(token) => token.begin,
            None => self.previous_end(),
        }
    }

    /// End of the most recently consumed token.
    #[must_use]
    pub fn previous_end(&self) -> FileLocation {
        match self.cursor.checked_sub(1).and_then(|idx| self.tokens.get(idx)) {
            Some(token) => token.end,
            None => self.tokens.first().map(|token| token.begin).unwrap_or_default(),
        }
    }
}
