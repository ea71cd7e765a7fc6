// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod expression;
mod parser;
mod statement;
mod token_stream;
mod tree;
mod type_;

pub use self::{
    expression::*,
    parser::{ParseError, ParseResult, Parser},
    statement::{AliasDecl, Block, ElseClause, IfStatement, ImportDecl, Node, PackageDecl, Statement, StatementKind, VarDecl},
    token_stream::{ExpectedToken, TokenStream},
    tree::ParseTree,
    type_::Type,
};
