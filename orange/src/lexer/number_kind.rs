// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, str::FromStr};

use strum::{AsRefStr, EnumIter, EnumString};

/// The concrete kind of a numeric literal. The strum serialization of each
/// variant is the literal suffix that selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString)]
pub enum NumberKind {
    #[strum(serialize = "i")]
    Int,
    #[strum(serialize = "i8")]
    Int8,
    #[strum(serialize = "i16")]
    Int16,
    #[strum(serialize = "i32")]
    Int32,
    #[strum(serialize = "i64")]
    Int64,
    #[strum(serialize = "u")]
    UInt,
    #[strum(serialize = "u8")]
    UInt8,
    #[strum(serialize = "u16")]
    UInt16,
    #[strum(serialize = "u32")]
    UInt32,
    #[strum(serialize = "u64")]
    UInt64,
    #[strum(serialize = "f")]
    Float,
    #[strum(serialize = "d")]
    Double,
}

impl NumberKind {
    /// Looks up a literal suffix such as `u8` or `f`.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::from_str(suffix).ok()
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        self.as_ref()
    }

    #[must_use]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::Int | Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    #[must_use]
    pub const fn is_floating_point(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Explicit bit width, if the suffix names one.
    #[must_use]
    pub const fn bit_width(&self) -> Option<u32> {
        match self {
            Self::Int8 | Self::UInt8 => Some(8),
            Self::Int16 | Self::UInt16 => Some(16),
            Self::Int32 | Self::UInt32 => Some(32),
            Self::Int64 | Self::UInt64 => Some(64),
            Self::Int | Self::UInt | Self::Float | Self::Double => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt => "uint",
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

impl Display for NumberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
