// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Int,
    #[strum(serialize = "int8")]
    Int8,
    #[strum(serialize = "int16")]
    Int16,
    #[strum(serialize = "int32")]
    Int32,
    #[strum(serialize = "int64")]
    Int64,
    #[strum(serialize = "uint")]
    UInt,
    #[strum(serialize = "uint8")]
    UInt8,
    #[strum(serialize = "uint16")]
    UInt16,
    #[strum(serialize = "uint32")]
    UInt32,
    #[strum(serialize = "uint64")]
    UInt64,
    Float,
    Double,
    Bool,
    Char,
    Void,

    Alias,
    Break,
    Catch,
    Class,
    Const,
    Continue,
    Data,
    Def,
    Delete,
    Do,
    Elif,
    Else,
    Enum,
    Extend,
    Extern,
    False,
    Final,
    Finally,
    For,
    Get,
    If,
    Import,
    Interface,
    New,
    Of,
    Package,
    Private,
    Property,
    Protected,
    Public,
    Set,
    This,
    Throw,
    True,
    Try,
    Var,
    Virtual,
    Where,
    While,
}

impl Keyword {
    pub fn iter_variants() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref() == input)
    }

    /// Keywords that open one of the statement productions.
    #[must_use]
    pub const fn starts_statement(&self) -> bool {
        matches!(self, Self::Var | Self::Package | Self::Import | Self::If | Self::Alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("int", Keyword::Int)]
    #[case("int64", Keyword::Int64)]
    #[case("uint", Keyword::UInt)]
    #[case("uint16", Keyword::UInt16)]
    #[case("elif", Keyword::Elif)]
    #[case("package", Keyword::Package)]
    #[case("alias", Keyword::Alias)]
    #[case("this", Keyword::This)]
    fn parse(#[case] input: &str, #[case] expected: Keyword) {
        assert_eq!(Keyword::parse(input), Some(expected));
    }

    #[test]
    fn every_keyword_round_trips() {
        for keyword in Keyword::iter_variants() {
            assert_eq!(Keyword::parse(keyword.as_ref()), Some(keyword));
        }
    }

    #[rstest]
    #[case("Int")]
    #[case("u_int8")]
    #[case("variable")]
    fn not_a_keyword(#[case] input: &str) {
        assert_eq!(Keyword::parse(input), None);
    }
}
