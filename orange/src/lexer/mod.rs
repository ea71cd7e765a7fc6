// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod keyword;
mod lexer;
mod number;
mod number_kind;
mod punctuator;
mod rune_stream;
mod token;
mod token_kind;

pub use self::{
    keyword::Keyword,
    lexer::{
        Lexer,
        LexerError,
        LexerErrorKind,
    },
    number::lex_number,
    number_kind::NumberKind,
    punctuator::Punctuator,
    rune_stream::{
        RuneStream,
        StrRuneStream,
    },
    token::Token,
    token_kind::TokenKind,
};
