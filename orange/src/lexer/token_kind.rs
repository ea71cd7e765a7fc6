// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::{Keyword, NumberKind, Punctuator};

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Keyword(Keyword),

    Identifier(String),
    CharacterLiteral(char),
    StringLiteral(String),

    /// `value` is always base-10 text; prefixed literals are normalized by
    /// the lexer.
    Number { kind: NumberKind, value: String },

    Punctuator(Punctuator),
    IllegalCharacter(char),
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyword(..) => "keyword",

            Self::Identifier(..) => "identifier",
            Self::CharacterLiteral(..) => "character",
            Self::StringLiteral(..) => "string",
            Self::Number { .. } => "number",

            Self::Punctuator(punctuator) => punctuator.into(),
            Self::IllegalCharacter(..) => "illegal character",
        }
    }

    #[must_use]
    pub fn as_keyword(&self) -> Option<Keyword> {
        match self {
            Self::Keyword(keyword) => Some(*keyword),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_punctuator(&self) -> Option<Punctuator> {
        match self {
            Self::Punctuator(punctuator) => Some(*punctuator),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(keyword) => f.write_str(keyword.as_ref()),
            Self::Identifier(ident) => f.write_str(ident),
            Self::CharacterLiteral(c) => write!(f, "'{}'", c.escape_default()),
            Self::StringLiteral(str) => write!(f, "\"{}\"", str.escape_default()),
            Self::Number { kind, value } => write!(f, "{value} ({kind})"),
            Self::Punctuator(punctuator) => punctuator.fmt(f),
            Self::IllegalCharacter(ch) => ch.fmt(f),
        }
    }
}
