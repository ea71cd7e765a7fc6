// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::PathBuf;

use orange::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn parse(input: &str) -> ParseResult<ParseTree> {
    let source_code = SourceCode::new("test.or", input);
    let (tokens, errors) = Lexer::new(&source_code).collect_all();
    assert!(errors.is_empty(), "unexpected lexer errors: {errors:?}");

    Parser::new(PathBuf::from("test.or"), &tokens).parse_tree()
}

#[rstest]
#[case("")]
#[case("// only a comment\n")]
#[case("package app\nimport std.io\n\nvar greeting: char[] = \"hello\\n\"\nprint(greeting)\n")]
#[case("alias Bytes = uint8[]\nvar buffer: Bytes\nvar first = buffer[0]")]
#[case("var x = 0x1F\nif (x >= 10 && x != 0b11) {\n    decrement(x - 1)\n} elif (x == 0) {\n    reset()\n} else {\n    mask(x & 0o17u)\n}")]
#[case("var ratio: double = 1.5\nvar half: float = 0.5f\nvar big = 1_000_000u64")]
fn parses(#[case] input: &str) {
    if let Err(e) = parse(input) {
        panic!("unexpected parse error at {}: {e}", e.location());
    }
}

#[test]
fn statements_and_expressions_in_order() {
    let tree = parse("package app\nvar a = 1\na + 2;\nif (a) { }").unwrap();

    let kinds: Vec<&str> = tree.nodes().iter()
        .map(|node| match node {
            Node::Statement(statement) => statement.kind.name(),
            Node::Expression(..) => "expression",
        })
        .collect();

    assert_eq!(kinds, vec!["package", "variable", "expression", "if"]);
}

#[test]
fn nested_blocks() {
    let tree = parse("if (a) { if (b) { var c = d.e(f) } }").unwrap();
    let Some(Node::Statement(Statement { kind: StatementKind::If(outer), .. })) = tree.nodes().first() else {
        panic!("expected if statement");
    };

    let Some(Node::Statement(Statement { kind: StatementKind::If(inner), .. })) = outer.body.nodes.first() else {
        panic!("expected nested if statement");
    };

    let Some(Node::Statement(Statement { kind: StatementKind::Variable(decl), .. })) = inner.body.nodes.first() else {
        panic!("expected variable declaration");
    };

    assert_eq!(decl.value.as_ref().map(|value| value.value().to_string()), Some("d.e(f)".to_string()));
}

#[test]
fn statement_ranges_cover_their_tokens() {
    let tree = parse("import a.b.c\nvar x: int").unwrap();
    let ranges: Vec<String> = tree.nodes().iter()
        .map(|node| node.range().to_string())
        .collect();

    assert_eq!(ranges.len(), 2);
    assert_eq!(tree.nodes()[0].range().start().offset(), 0);
    assert_eq!(tree.nodes()[0].range().end().offset(), 12);
    assert_eq!(tree.nodes()[1].range().start().line(), 1);
}

#[rstest]
#[case("var", "ExpectedToken")]
#[case("var a: 5", "ExpectedType")]
#[case("var a = )", "UnknownStartOfExpression")]
#[case("if (a) {", "ExpectedToken")]
#[case("alias = int", "ExpectedToken")]
#[case("import a.", "ExpectedToken")]
#[case("else { }", "UnknownStartOfExpression")]
fn fails(#[case] input: &str, #[case] expected: &str) {
    let error = parse(input).unwrap_err();
    assert_eq!(error.name(), expected, "unexpected error: {error}");
}
