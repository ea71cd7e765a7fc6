// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{Expression, FileRange, Ranged, Type};

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub range: FileRange,
    pub kind: StatementKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    Alias(AliasDecl),
    If(IfStatement),
    Import(ImportDecl),
    Package(PackageDecl),
    Variable(VarDecl),
}

impl StatementKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Alias(..) => "alias",
            Self::If(..) => "if",
            Self::Import(..) => "import",
            Self::Package(..) => "package",
            Self::Variable(..) => "var",
        }
    }
}

/// `var name[: type][= value]`. A missing type or value is kept as `None`,
/// inference and default values are left to later stages.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Ranged<String>,
    pub ty: Option<Ranged<Type>>,
    pub value: Option<Ranged<Expression>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageDecl {
    pub name: Ranged<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub name: Ranged<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AliasDecl {
    pub name: Ranged<String>,
    pub ty: Ranged<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Ranged<Expression>,
    pub body: Block,
    pub else_clause: ElseClause,
}

impl IfStatement {
    /// Number of conditions in this `if`/`elif` chain.
    #[must_use]
    pub fn chain_len(&self) -> usize {
        match &self.else_clause {
            ElseClause::Elif(elif) => 1 + elif.chain_len(),
            ElseClause::None | ElseClause::Else(..) => 1,
        }
    }
}

/// What follows the body of an `if`. A trailing `else` always belongs to
/// the innermost `elif` of the chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ElseClause {
    #[default]
    None,
    Elif(Box<IfStatement>),
    Else(Block),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub range: FileRange,
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Statement(Statement),
    Expression(Ranged<Expression>),
}

impl Node {
    #[must_use]
    pub fn range(&self) -> FileRange {
        match self {
            Self::Statement(statement) => statement.range,
            Self::Expression(expression) => expression.range(),
        }
    }

    #[must_use]
    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            Self::Statement(statement) => Some(statement),
            Self::Expression(..) => None,
        }
    }
}
