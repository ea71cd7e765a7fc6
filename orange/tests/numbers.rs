// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use orange::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn lex(input: &str) -> (Vec<TokenKind>, Vec<LexerError>) {
    let source_code = SourceCode::new_test(input);
    let (tokens, errors) = Lexer::new(&source_code).collect_all();
    (tokens.into_iter().map(|token| token.kind).collect(), errors)
}

fn number(kind: NumberKind, value: &str) -> TokenKind {
    TokenKind::Number { kind, value: value.to_string() }
}

#[rstest]
#[case("123.toString", vec![
    number(NumberKind::Int, "123"),
    TokenKind::Punctuator(Punctuator::Period),
    TokenKind::Identifier("toString".to_string()),
])]
#[case("0x10+0b10", vec![
    number(NumberKind::UInt, "16"),
    TokenKind::Punctuator(Punctuator::PlusSign),
    number(NumberKind::UInt, "2"),
])]
#[case("a[1_0]", vec![
    TokenKind::Identifier("a".to_string()),
    TokenKind::Punctuator(Punctuator::LeftSquareBracket),
    number(NumberKind::Int, "10"),
    TokenKind::Punctuator(Punctuator::RightSquareBracket),
])]
#[case("1.5f, 2d", vec![
    number(NumberKind::Float, "1.5"),
    TokenKind::Punctuator(Punctuator::Comma),
    number(NumberKind::Double, "2"),
])]
fn numbers_in_context(#[case] input: &str, #[case] expected: Vec<TokenKind>) {
    let (tokens, errors) = lex(input);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(tokens, expected);
}

#[test]
fn lexing_continues_after_bad_number() {
    let (tokens, errors) = lex("var a = 0o78\nvar b = 0xffi");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].kind.name(), "InvalidNumberForBase");
    assert_eq!(errors[0].location.line(), 0);
    assert_eq!(errors[1].kind.name(), "SignedWithNonDecimalBase");
    assert_eq!(errors[1].location.line(), 1);

    assert_eq!(tokens, vec![
        TokenKind::Keyword(Keyword::Var),
        TokenKind::Identifier("a".to_string()),
        TokenKind::Punctuator(Punctuator::Assignment),
        TokenKind::Keyword(Keyword::Var),
        TokenKind::Identifier("b".to_string()),
        TokenKind::Punctuator(Punctuator::Assignment),
    ]);
}

#[rstest]
#[case("0x7fffffffffffffff", "9223372036854775807")]
#[case("0o777_777u64", "262143")]
#[case("0b1111_0000", "240")]
fn wide_values(#[case] input: &str, #[case] expected: &str) {
    let (tokens, errors) = lex(input);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let [TokenKind::Number { value, .. }] = tokens.as_slice() else {
        panic!("expected a single number, got {tokens:?}");
    };
    assert_eq!(value, expected);
}

#[rstest]
#[case("0x8000_0000_0000_0000")]
#[case("0xffff_ffff_ffff_ffffu64")]
#[case("0b1_000000000000000000000000000000000000000000000000000000000000000")]
#[case("0x1_0000_0000_0000_0000")]
fn out_of_range(#[case] input: &str) {
    let (_, errors) = lex(input);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind.name(), "NumberOutOfRange");
}
