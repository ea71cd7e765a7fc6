// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

/// A type expression as written in source. Nothing is validated here;
/// `Int { size: -1, .. }` is representable and rejected during semantic
/// analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Int { size: i32, signed: bool },
    Named { name: String },
    Float,
    Double,
    Bool,
    Char,
    Array { inner: Box<Type> },
    Pointer { inner: Box<Type> },
}

impl Type {
    #[must_use]
    pub const fn int(size: i32, signed: bool) -> Self {
        Self::Int { size, signed }
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named { name: name.into() }
    }

    #[must_use]
    pub fn array(inner: Type) -> Self {
        Self::Array { inner: Box::new(inner) }
    }

    #[must_use]
    pub fn pointer(inner: Type) -> Self {
        Self::Pointer { inner: Box::new(inner) }
    }

    /// The element type of an array or the target of a pointer.
    #[must_use]
    pub fn inner(&self) -> Option<&Type> {
        match self {
            Self::Array { inner } | Self::Pointer { inner } => Some(inner),
            _ => None,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int { size: 64, signed: true } => f.write_str("int"),
            Self::Int { size: 64, signed: false } => f.write_str("uint"),
            Self::Int { size, signed: true } => write!(f, "int{size}"),
            Self::Int { size, signed: false } => write!(f, "uint{size}"),
            Self::Named { name } => f.write_str(name),
            Self::Float => f.write_str("float"),
            Self::Double => f.write_str("double"),
            Self::Bool => f.write_str("bool"),
            Self::Char => f.write_str("char"),
            Self::Array { inner } => write!(f, "{inner}[]"),
            Self::Pointer { inner } => write!(f, "{inner}*"),
        }
    }
}
