// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter, Write};

use strum::AsRefStr;

use crate::{NumberKind, Ranged};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Primary(PrimaryExpression),
    Unary(UnaryExpression),
    BiExpression(BiExpression),
    Postfix(PostfixExpression),
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary(expr) => expr.fmt(f),
            Self::Unary(expr) => write!(f, "{}{}", expr.kind.value(), expr.rhs.value()),
            Self::BiExpression(expr) => write!(f, "{} {} {}", expr.lhs.value(), expr.operator.value(), expr.rhs.value()),
            Self::Postfix(expr) => {
                expr.lhs.value().fmt(f)?;

                match &expr.kind {
                    PostfixExpressionKind::Call(arguments) => {
                        f.write_char('(')?;
                        for (idx, argument) in arguments.iter().enumerate() {
                            if idx != 0 {
                                f.write_str(", ")?;
                            }
                            argument.value().fmt(f)?;
                        }
                        f.write_char(')')
                    }
                    PostfixExpressionKind::Member(name) => write!(f, ".{}", name.value()),
                    PostfixExpressionKind::Subscript(index) => write!(f, "[{}]", index.value()),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrimaryExpression {
    Boolean(bool),
    CharacterLiteral(char),
    StringLiteral(String),
    NumberLiteral { kind: NumberKind, value: String },
    Reference(Ranged<String>),
    ReferenceThis,
    Parenthesized(Box<Ranged<Expression>>),
}

impl Display for PrimaryExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Self::CharacterLiteral(c) => write!(f, "'{}'", c.escape_default()),
            Self::StringLiteral(str) => write!(f, "\"{}\"", str.escape_default()),
            Self::NumberLiteral { kind: NumberKind::Int, value } => f.write_str(value),
            Self::NumberLiteral { kind, value } => write!(f, "{value}{}", kind.suffix()),
            Self::Reference(name) => f.write_str(name.value()),
            Self::ReferenceThis => f.write_str("this"),
            Self::Parenthesized(expr) => write!(f, "({})", expr.value()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub kind: Ranged<UnaryExpressionKind>,
    pub rhs: Box<Ranged<Expression>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum UnaryExpressionKind {
    Negate,
    Not,
    PreIncrement,
    PreDecrement,
}

impl Display for UnaryExpressionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Negate => "-",
            Self::Not => "!",
            Self::PreIncrement => "++",
            Self::PreDecrement => "--",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BiExpression {
    pub operator: Ranged<BiOperator>,
    pub lhs: Box<Ranged<Expression>>,
    pub rhs: Box<Ranged<Expression>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum BiOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,

    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,

    LogicalAnd,
    LogicalOr,

    Comparison(Comparison),
}

impl Display for BiOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::BitwiseXor => "^",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Comparison(comparison) => comparison.as_str(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equality,
    Inequality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl Comparison {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equality => "==",
            Self::Inequality => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpression {
    pub lhs: Box<Ranged<Expression>>,
    pub kind: PostfixExpressionKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostfixExpressionKind {
    Call(Vec<Ranged<Expression>>),
    Member(Ranged<String>),
    Subscript(Box<Ranged<Expression>>),
}
