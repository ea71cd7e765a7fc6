// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod ast;
mod lexer;
mod util;

pub use self::{
    ast::*,
    lexer::{lex_number, Keyword, Lexer, LexerError, LexerErrorKind, NumberKind, Punctuator, RuneStream, StrRuneStream, Token, TokenKind},
    util::{FileLocation, FileRange, Ranged, SourceCode},
};
