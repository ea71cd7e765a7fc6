// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display};

use log::debug;
use strum::AsRefStr;
use thiserror::Error;

use crate::{FileLocation, SourceCode};

use super::{lex_number, Keyword, Punctuator, RuneStream, StrRuneStream, Token, TokenKind};

pub struct Lexer<'source_code> {
    stream: StrRuneStream<'source_code>,
    errors: Vec<LexerError>,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code SourceCode) -> Self {
        Self {
            stream: StrRuneStream::new(input.contents()),
            errors: Vec::new(),
        }
    }

    pub fn next(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace_and_comments();

            let ch = self.stream.peek()?;
            if let Some(token) = self.consume_token(ch) {
                return Some(token);
            }
        }
    }

    /// Returns `None` when the runes at `ch` did not form a token, after
    /// recording the error.
    fn consume_token(&mut self, ch: char) -> Option<Token> {
        let tok = match ch {
            '"' => self.consume_string(),
            '\'' => self.consume_character_literal(),

            'a'..='z' | 'A'..='Z' | '_' => self.consume_identifier_or_keyword(),
            '0'..='9' => return self.consume_number(),

            '(' => self.consume_single_char_token(Punctuator::LeftParenthesis),
            ')' => self.consume_single_char_token(Punctuator::RightParenthesis),
            '{' => self.consume_single_char_token(Punctuator::LeftCurlyBracket),
            '}' => self.consume_single_char_token(Punctuator::RightCurlyBracket),
            '[' => self.consume_single_char_token(Punctuator::LeftSquareBracket),
            ']' => self.consume_single_char_token(Punctuator::RightSquareBracket),
            ';' => self.consume_single_char_token(Punctuator::Semicolon),
            ',' => self.consume_single_char_token(Punctuator::Comma),
            ':' => self.consume_single_char_token(Punctuator::Colon),
            '.' => self.consume_single_char_token(Punctuator::Period),
            '%' => self.consume_single_char_token(Punctuator::PercentageSign),
            '^' => self.consume_single_char_token(Punctuator::BitwiseXor),
            '=' => self.consume_with_follower(Punctuator::Assignment, &[('=', Punctuator::Equals)]),
            '!' => self.consume_with_follower(Punctuator::Not, &[('=', Punctuator::NotEquals)]),
            '<' => self.consume_with_follower(Punctuator::LessThan, &[('=', Punctuator::LessThanOrEqual)]),
            '>' => self.consume_with_follower(Punctuator::GreaterThan, &[('=', Punctuator::GreaterThanOrEqual)]),
            '&' => self.consume_with_follower(Punctuator::BitwiseAnd, &[('&', Punctuator::LogicalAnd)]),
            '|' => self.consume_with_follower(Punctuator::BitwiseOr, &[('|', Punctuator::LogicalOr)]),
            '*' => self.consume_single_char_token(Punctuator::Asterisk),
            '/' => self.consume_single_char_token(Punctuator::Solidus),
            '+' => self.consume_with_follower(Punctuator::PlusSign, &[('+', Punctuator::Increment)]),
            '-' => self.consume_with_follower(Punctuator::HyphenMinus, &[('-', Punctuator::Decrement)]),

            _ => {
                let begin = self.stream.location();
                self.stream.next();
                Token {
                    kind: TokenKind::IllegalCharacter(ch),
                    begin,
                    end: self.stream.location(),
                }
            }
        };

        Some(tok)
    }

    #[must_use]
    pub fn errors(&self) -> &[LexerError] {
        &self.errors
    }

    pub fn collect_all(mut self) -> (Vec<Token>, Vec<LexerError>) {
        let mut tokens = Vec::new();

        while let Some(token) = self.next() {
            tokens.push(token);
        }

        debug!("Lexed {} tokens with {} errors", tokens.len(), self.errors.len());
        (tokens, self.errors)
    }

    fn consume_single_char_token(&mut self, punctuator: Punctuator) -> Token {
        let begin = self.stream.location();

        self.stream.next();

        Token {
            kind: TokenKind::Punctuator(punctuator),
            begin,
            end: self.stream.location(),
        }
    }

    /// Consumes `single`, or one of the two-character punctuators that start
    /// with the same character.
    fn consume_with_follower(&mut self, single: Punctuator, followers: &[(char, Punctuator)]) -> Token {
        let begin = self.stream.location();
        self.stream.next();

        let punctuator = match followers.iter().find(|(c, _)| self.stream.peek() == Some(*c)) {
            Some((_, double)) => {
                self.stream.next();
                *double
            }
            None => single,
        };

        Token {
            kind: TokenKind::Punctuator(punctuator),
            begin,
            end: self.stream.location(),
        }
    }

    fn consume_number(&mut self) -> Option<Token> {
        match lex_number(&mut self.stream) {
            Ok(token) => Some(token),
            Err(error) => {
                self.errors.push(error);

                // The rest of the literal is noise now.
                self.stream.skip_while(|c| c.is_alphanumeric() || c == '_');
                None
            }
        }
    }

    fn consume_identifier_or_keyword(&mut self) -> Token {
        let begin = self.stream.location();
        self.stream.skip_while(is_identifier_char);
        let end = self.stream.location();

        let str = self.stream.slice(begin, end);
        let kind = match Keyword::parse(str) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier(str.to_string()),
        };

        Token {
            kind,
            begin,
            end,
        }
    }

    fn consume_string(&mut self) -> Token {
        let begin = self.stream.location();
        self.stream.next();

        let mut str = String::new();
        loop {
            match self.stream.peek() {
                Some('"') => {
                    self.stream.next();
                    break;
                }

                Some('\\') => {
                    if let Some(c) = self.consume_escape() {
                        str.push(c);
                    }
                }

                Some('\n') | None => {
                    self.errors.push(LexerError {
                        location: begin,
                        kind: LexerErrorKind::UnterminatedString,
                    });
                    break;
                }

                Some(c) => {
                    self.stream.next();
                    str.push(c);
                }
            }
        }

        Token {
            kind: TokenKind::StringLiteral(str),
            begin,
            end: self.stream.location(),
        }
    }

    fn consume_character_literal(&mut self) -> Token {
        let begin = self.stream.location();
        self.stream.next();

        let ch = match self.stream.peek() {
            Some('\\') => self.consume_escape(),
            Some('\'') | Some('\n') | None => None,
            Some(c) => {
                self.stream.next();
                Some(c)
            }
        };

        let closed = self.stream.peek() == Some('\'');
        if closed {
            self.stream.next();
        }

        if ch.is_none() || !closed {
            self.errors.push(LexerError {
                location: begin,
                kind: LexerErrorKind::InvalidCharacterLiteral,
            });
        }

        Token {
            kind: TokenKind::CharacterLiteral(ch.unwrap_or_default()),
            begin,
            end: self.stream.location(),
        }
    }

    /// Consumes a backslash and the character after it.
    fn consume_escape(&mut self) -> Option<char> {
        self.stream.next();
        let location = self.stream.location();

        let escaped = match self.stream.peek()? {
            '"' => '"',
            '\'' => '\'',
            '\\' => '\\',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '0' => '\0',
            invalid => {
                self.errors.push(LexerError {
                    location,
                    kind: LexerErrorKind::InvalidEscape { invalid },
                });
                invalid
            }
        };

        self.stream.next();
        Some(escaped)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.stream.lookahead::<2>() {
                [Some(c), _] if c.is_whitespace() => {
                    self.stream.next();
                }

                [Some('/'), Some('/')] => {
                    self.stream.skip_while(|c| c != '\n');
                }

                _ => break,
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerError {
    pub location: FileLocation,
    pub kind: LexerErrorKind,
}

impl Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for LexerError {}

#[derive(Debug, Clone, PartialEq, Eq, Error, AsRefStr)]
pub enum LexerErrorKind {
    #[error("Invalid numeric prefix `0{prefix}`")]
    InvalidNumericPrefix { prefix: char },

    #[error("Invalid number `{number}` for base {base}")]
    InvalidNumberForBase { number: String, base: u32 },

    #[error("Invalid suffix `{suffix}`")]
    InvalidSuffix { suffix: String },

    #[error("Number of non-decimal base cannot be floating-point")]
    FloatingPointWithNonDecimalBase,

    #[error("Number of non-decimal base cannot be signed")]
    SignedWithNonDecimalBase,

    #[error("Floating-point value cannot have integral suffix")]
    IntegralSuffixOnFloatingPoint,

    #[error("Number out of range")]
    NumberOutOfRange,

    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Invalid escape `\\{invalid}`, only `\\\"`, `\\'`, `\\\\`, `\\n`, `\\r`, `\\t` and `\\0` are allowed")]
    InvalidEscape { invalid: char },

    #[error("Invalid character literal")]
    InvalidCharacterLiteral,
}

impl LexerErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
