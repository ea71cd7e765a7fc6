// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum Punctuator {
    #[strum(serialize = "colon")]
    Colon,
    #[strum(serialize = "comma")]
    Comma,
    #[strum(serialize = "open parenthesis")]
    LeftParenthesis,
    #[strum(serialize = "close parenthesis")]
    RightParenthesis,
    #[strum(serialize = "open brace")]
    LeftCurlyBracket,
    #[strum(serialize = "close brace")]
    RightCurlyBracket,
    #[strum(serialize = "open bracket")]
    LeftSquareBracket,
    #[strum(serialize = "close bracket")]
    RightSquareBracket,
    #[strum(serialize = "semicolon")]
    Semicolon,
    #[strum(serialize = "dot")]
    Period,
    #[strum(serialize = "assignment")]
    Assignment,
    #[strum(serialize = "equals")]
    Equals,
    #[strum(serialize = "not equals")]
    NotEquals,
    #[strum(serialize = "less than")]
    LessThan,
    #[strum(serialize = "less than or equal")]
    LessThanOrEqual,
    #[strum(serialize = "greater than")]
    GreaterThan,
    #[strum(serialize = "greater than or equal")]
    GreaterThanOrEqual,
    #[strum(serialize = "plus")]
    PlusSign,
    #[strum(serialize = "minus")]
    HyphenMinus,
    #[strum(serialize = "asterisk")]
    Asterisk,
    #[strum(serialize = "slash")]
    Solidus,
    #[strum(serialize = "percent")]
    PercentageSign,
    #[strum(serialize = "bitwise and")]
    BitwiseAnd,
    #[strum(serialize = "bitwise or")]
    BitwiseOr,
    #[strum(serialize = "bitwise xor")]
    BitwiseXor,
    #[strum(serialize = "logical and")]
    LogicalAnd,
    #[strum(serialize = "logical or")]
    LogicalOr,
    #[strum(serialize = "not")]
    Not,
    #[strum(serialize = "increment")]
    Increment,
    #[strum(serialize = "decrement")]
    Decrement,
}

impl Punctuator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Colon => ":",
            Self::Comma => ",",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftCurlyBracket => "{",
            Self::RightCurlyBracket => "}",
            Self::LeftSquareBracket => "[",
            Self::RightSquareBracket => "]",
            Self::Semicolon => ";",
            Self::Period => ".",
            Self::Assignment => "=",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::PlusSign => "+",
            Self::HyphenMinus => "-",
            Self::Asterisk => "*",
            Self::Solidus => "/",
            Self::PercentageSign => "%",
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::BitwiseXor => "^",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Not => "!",
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
