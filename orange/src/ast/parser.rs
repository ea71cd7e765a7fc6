// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::PathBuf;

use log::{debug, trace};
use strum::AsRefStr;

use crate::{
    AliasDecl, BiExpression, BiOperator, Block, Comparison, ElseClause, Expression, FileLocation, FileRange,
    IfStatement, ImportDecl, Keyword, Node, PackageDecl, ParseTree, PostfixExpression, PostfixExpressionKind,
    PrimaryExpression, Punctuator, Ranged, Statement, StatementKind, Token, TokenKind, Type, UnaryExpression,
    UnaryExpressionKind, VarDecl,
};

use super::{ExpectedToken, TokenStream};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a lexed token slice. Every production either
/// returns a complete node or the first error it ran into; nothing is
/// recovered and the cursor is left wherever the failing production stopped.
#[derive(Clone)]
pub struct Parser<'tokens> {
    path: PathBuf,
    stream: TokenStream<'tokens>,
}

impl<'tokens> Parser<'tokens> {
    pub fn new(path: PathBuf, tokens: &'tokens [Token]) -> Self {
        Self {
            path,
            stream: TokenStream::new(tokens),
        }
    }

    pub fn parse_tree(&mut self) -> ParseResult<ParseTree> {
        let mut tree = ParseTree::new(self.path.clone());

        while !self.is_at_end() {
            let node = self.parse_node()?;
            tree.push(node);
            _ = self.stream.allow(Punctuator::Semicolon);
        }

        debug!("Parsed {} top-level nodes from {}", tree.nodes().len(), self.path.display());
        Ok(tree)
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.stream.is_at_end()
    }

    /// Number of tokens consumed so far.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.stream.cursor()
    }

    /// A statement when the next token opens one, otherwise an expression.
    pub fn parse_node(&mut self) -> ParseResult<Node> {
        match self.stream.peek_keyword() {
            Some(keyword) if keyword.starts_statement() => Ok(Node::Statement(self.parse_statement()?)),
            _ => Ok(Node::Expression(self.parse_expression()?)),
        }
    }

    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let Some(first_token) = self.stream.peek() else {
            return Err(ParseError::ExpectedStatement { found: None, location: self.stream.location() });
        };

        let start = first_token.begin;
        let kind = match first_token.kind {
            TokenKind::Keyword(Keyword::Var) => StatementKind::Variable(self.parse_var_decl()?),
            TokenKind::Keyword(Keyword::Package) => StatementKind::Package(self.parse_package_decl()?),
            TokenKind::Keyword(Keyword::Import) => StatementKind::Import(self.parse_import_decl()?),
            TokenKind::Keyword(Keyword::If) => StatementKind::If(self.parse_if_statement()?),
            TokenKind::Keyword(Keyword::Alias) => StatementKind::Alias(self.parse_alias_decl()?),

            _ => {
                return Err(ParseError::ExpectedStatement {
                    found: Some(first_token.clone()),
                    location: start,
                });
            }
        };

        trace!("Parsed {} statement at {start}", kind.name());

        Ok(Statement {
            range: FileRange::new(start, self.stream.previous_end()),
            kind,
        })
    }

    fn parse_var_decl(&mut self) -> ParseResult<VarDecl> {
        self.stream.expect(Keyword::Var)?;
        let name = self.parse_identifier()?;

        let ty = if self.stream.allow(Punctuator::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };

        let value = if self.stream.allow(Punctuator::Assignment) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(VarDecl { name, ty, value })
    }

    fn parse_package_decl(&mut self) -> ParseResult<PackageDecl> {
        self.stream.expect(Keyword::Package)?;
        let name = self.parse_dotted_name()?;
        Ok(PackageDecl { name })
    }

    fn parse_import_decl(&mut self) -> ParseResult<ImportDecl> {
        self.stream.expect(Keyword::Import)?;
        let name = self.parse_dotted_name()?;
        Ok(ImportDecl { name })
    }

    /// `a.b.c`: one or more identifiers separated by dots.
    fn parse_dotted_name(&mut self) -> ParseResult<Ranged<String>> {
        let (first, name) = self.stream.expect_identifier()?;
        let mut full_name = name.to_string();

        while self.stream.allow(Punctuator::Period) {
            let (_, name) = self.stream.expect_identifier()?;
            full_name.push('.');
            full_name.push_str(name);
        }

        let range = FileRange::new(first.begin, self.stream.previous_end());
        Ok(Ranged::new(range, full_name))
    }

    fn parse_alias_decl(&mut self) -> ParseResult<AliasDecl> {
        self.stream.expect(Keyword::Alias)?;
        let name = self.parse_identifier()?;
        self.stream.expect(Punctuator::Assignment)?;
        let ty = self.parse_type()?;

        Ok(AliasDecl { name, ty })
    }

    fn parse_if_statement(&mut self) -> ParseResult<IfStatement> {
        self.stream.expect(Keyword::If)?;
        self.parse_condition()
    }

    /// Parses `(condition) { body }` and whatever `elif` or `else` follows
    /// it. An `elif` recurses, so the chain nests one level per condition.
    fn parse_condition(&mut self) -> ParseResult<IfStatement> {
        self.stream.expect(Punctuator::LeftParenthesis)?;
        let condition = self.parse_expression()?;
        self.stream.expect(Punctuator::RightParenthesis)?;

        let body = self.parse_block()?;

        let else_clause = if self.stream.allow(Keyword::Elif) {
            ElseClause::Elif(Box::new(self.parse_condition()?))
        } else if self.stream.allow(Keyword::Else) {
            ElseClause::Else(self.parse_block()?)
        } else {
            ElseClause::None
        };

        Ok(IfStatement {
            condition,
            body,
            else_clause,
        })
    }

    pub fn parse_block(&mut self) -> ParseResult<Block> {
        let start = self.stream.expect(Punctuator::LeftCurlyBracket)?.begin;
        let mut nodes = Vec::new();

        loop {
            if self.stream.allow(Punctuator::RightCurlyBracket) {
                break;
            }

            if self.is_at_end() {
                self.stream.expect(Punctuator::RightCurlyBracket)?;
            }

            nodes.push(self.parse_node()?);
            _ = self.stream.allow(Punctuator::Semicolon);
        }

        Ok(Block {
            range: FileRange::new(start, self.stream.previous_end()),
            nodes,
        })
    }

    /// A builtin or named type, followed by any number of `[]` and `*`
    /// qualifiers which wrap the type left to right.
    pub fn parse_type(&mut self) -> ParseResult<Ranged<Type>> {
        let Some(token) = self.stream.peek() else {
            return Err(ParseError::ExpectedType { found: None, location: self.stream.location() });
        };

        let specifier = match &token.kind {
            TokenKind::Keyword(keyword) => builtin_type(*keyword),
            TokenKind::Identifier(name) => Some(Type::named(name.as_str())),
            _ => None,
        };

        let Some(mut ty) = specifier else {
            return Err(ParseError::ExpectedType { found: Some(token.clone()), location: token.begin });
        };

        _ = self.stream.next();

        loop {
            if self.stream.allow(Punctuator::LeftSquareBracket) {
                self.stream.expect(Punctuator::RightSquareBracket)?;
                ty = Type::array(ty);
            } else if self.stream.allow(Punctuator::Asterisk) {
                ty = Type::pointer(ty);
            } else {
                break;
            }
        }

        Ok(Ranged::new(FileRange::new(token.begin, self.stream.previous_end()), ty))
    }

    fn parse_identifier(&mut self) -> ParseResult<Ranged<String>> {
        let (token, name) = self.stream.expect_identifier()?;
        Ok(Ranged::new(token.range(), name.to_string()))
    }

    pub fn parse_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_logical_or_expression()
    }

    fn parse_logical_or_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_logical_and_expression, &[
            (Punctuator::LogicalOr, BiOperator::LogicalOr),
        ])
    }

    fn parse_logical_and_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_equality_expression, &[
            (Punctuator::LogicalAnd, BiOperator::LogicalAnd),
        ])
    }

    fn parse_equality_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_relational_expression, &[
            (Punctuator::Equals, BiOperator::Comparison(Comparison::Equality)),
            (Punctuator::NotEquals, BiOperator::Comparison(Comparison::Inequality)),
        ])
    }

    fn parse_relational_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_bitwise_or_expression, &[
            (Punctuator::LessThan, BiOperator::Comparison(Comparison::LessThan)),
            (Punctuator::LessThanOrEqual, BiOperator::Comparison(Comparison::LessThanOrEqual)),
            (Punctuator::GreaterThan, BiOperator::Comparison(Comparison::GreaterThan)),
            (Punctuator::GreaterThanOrEqual, BiOperator::Comparison(Comparison::GreaterThanOrEqual)),
        ])
    }

    fn parse_bitwise_or_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_bitwise_xor_expression, &[
            (Punctuator::BitwiseOr, BiOperator::BitwiseOr),
        ])
    }

    fn parse_bitwise_xor_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_bitwise_and_expression, &[
            (Punctuator::BitwiseXor, BiOperator::BitwiseXor),
        ])
    }

    fn parse_bitwise_and_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_additive_expression, &[
            (Punctuator::BitwiseAnd, BiOperator::BitwiseAnd),
        ])
    }

    fn parse_additive_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_multiplicative_expression, &[
            (Punctuator::PlusSign, BiOperator::Add),
            (Punctuator::HyphenMinus, BiOperator::Subtract),
        ])
    }

    fn parse_multiplicative_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_unary_expression, &[
            (Punctuator::Asterisk, BiOperator::Multiply),
            (Punctuator::Solidus, BiOperator::Divide),
            (Punctuator::PercentageSign, BiOperator::Modulo),
        ])
    }

    fn parse_bi_expression<F>(&mut self, mut operand: F, operators: &[(Punctuator, BiOperator)]) -> ParseResult<Ranged<Expression>>
            where F: FnMut(&mut Self) -> ParseResult<Ranged<Expression>> {
        let mut expr = operand(self)?;

        loop {
            let Some(next) = self.stream.peek_punctuator() else {
                break;
            };

            let Some((_, operator)) = operators.iter().find(|(p, _)| *p == next).copied() else {
                break;
            };

            let operator_range = self.stream.next().map(Token::range).unwrap_or_default();
            let operator = Ranged::new(operator_range, operator);

            let lhs = expr;
            let rhs = operand(self)?;
            let range = lhs.range().join(rhs.range());

            let expression = Expression::BiExpression(BiExpression {
                operator,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            });
            expr = Ranged::new(range, expression);
        }

        Ok(expr)
    }

    fn parse_unary_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        let kind = match self.stream.peek_punctuator() {
            Some(Punctuator::HyphenMinus) => UnaryExpressionKind::Negate,
            Some(Punctuator::Not) => UnaryExpressionKind::Not,
            Some(Punctuator::Increment) => UnaryExpressionKind::PreIncrement,
            Some(Punctuator::Decrement) => UnaryExpressionKind::PreDecrement,
            _ => return self.parse_postfix_expression(),
        };

        let operator_range = self.stream.next().map(Token::range).unwrap_or_default();
        let rhs = self.parse_unary_expression()?;
        let range = operator_range.join(rhs.range());

        Ok(Ranged::new(range, Expression::Unary(UnaryExpression {
            kind: Ranged::new(operator_range, kind),
            rhs: Box::new(rhs),
        })))
    }

    fn parse_postfix_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        let mut expression = self.parse_primary_expression()?.map(Expression::Primary);
        let start = expression.range().start();

        loop {
            let kind = match self.stream.peek_punctuator() {
                Some(Punctuator::LeftParenthesis) => {
                    _ = self.stream.next();
                    PostfixExpressionKind::Call(self.parse_call_arguments()?)
                }

                Some(Punctuator::Period) => {
                    _ = self.stream.next();
                    PostfixExpressionKind::Member(self.parse_identifier()?)
                }

                Some(Punctuator::LeftSquareBracket) => {
                    _ = self.stream.next();
                    let index = self.parse_expression()?;
                    self.stream.expect(Punctuator::RightSquareBracket)?;
                    PostfixExpressionKind::Subscript(Box::new(index))
                }

                _ => break,
            };

            let range = FileRange::new(start, self.stream.previous_end());
            expression = Ranged::new(range, Expression::Postfix(PostfixExpression {
                lhs: Box::new(expression),
                kind,
            }));
        }

        Ok(expression)
    }

    /// Arguments after the opening parenthesis of a call, up to and including
    /// the closing one.
    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Ranged<Expression>>> {
        let mut arguments = Vec::new();

        if self.stream.allow(Punctuator::RightParenthesis) {
            return Ok(arguments);
        }

        loop {
            arguments.push(self.parse_expression()?);

            if self.stream.allow(Punctuator::Comma) {
                continue;
            }

            self.stream.expect(Punctuator::RightParenthesis)?;
            break;
        }

        Ok(arguments)
    }

    fn parse_primary_expression(&mut self) -> ParseResult<Ranged<PrimaryExpression>> {
        let Some(token) = self.stream.next() else {
            return Err(ParseError::UnknownStartOfExpression { found: None, location: self.stream.location() });
        };

        let expression = match &token.kind {
            TokenKind::Number { kind, value } => PrimaryExpression::NumberLiteral { kind: *kind, value: value.clone() },
            TokenKind::StringLiteral(literal) => PrimaryExpression::StringLiteral(literal.clone()),
            TokenKind::CharacterLiteral(c) => PrimaryExpression::CharacterLiteral(*c),
            TokenKind::Identifier(name) => PrimaryExpression::Reference(Ranged::new(token.range(), name.clone())),
            TokenKind::Keyword(Keyword::True) => PrimaryExpression::Boolean(true),
            TokenKind::Keyword(Keyword::False) => PrimaryExpression::Boolean(false),
            TokenKind::Keyword(Keyword::This) => PrimaryExpression::ReferenceThis,

            TokenKind::Punctuator(Punctuator::LeftParenthesis) => {
                let expression = self.parse_expression()?;
                self.stream.expect(Punctuator::RightParenthesis)?;
                PrimaryExpression::Parenthesized(Box::new(expression))
            }

            _ => {
                return Err(ParseError::UnknownStartOfExpression {
                    found: Some(token.clone()),
                    location: token.begin,
                });
            }
        };

        let range = FileRange::new(token.begin, self.stream.previous_end());
        Ok(Ranged::new(range, expression))
    }
}

fn builtin_type(keyword: Keyword) -> Option<Type> {
    Some(match keyword {
        Keyword::Int => Type::int(64, true),
        Keyword::Int8 => Type::int(8, true),
        Keyword::Int16 => Type::int(16, true),
        Keyword::Int32 => Type::int(32, true),
        Keyword::Int64 => Type::int(64, true),
        Keyword::UInt => Type::int(64, false),
        Keyword::UInt8 => Type::int(8, false),
        Keyword::UInt16 => Type::int(16, false),
        Keyword::UInt32 => Type::int(32, false),
        Keyword::UInt64 => Type::int(64, false),
        Keyword::Float => Type::Float,
        Keyword::Double => Type::Double,
        Keyword::Bool => Type::Bool,
        Keyword::Char => Type::Char,
        _ => return None,
    })
}

fn describe(found: &Option<Token>) -> String {
    match found {
        Some(token) => format!("`{token}`"),
        None => "end of file".to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error, AsRefStr)]
pub enum ParseError {
    #[error("Expected statement, but got {}", describe(.found))]
    ExpectedStatement { found: Option<Token>, location: FileLocation },

    #[error("Expected {expected}, but got {}", describe(.found))]
    ExpectedToken { expected: ExpectedToken, found: Option<Token>, location: FileLocation },

    #[error("Expected type, but got {}", describe(.found))]
    ExpectedType { found: Option<Token>, location: FileLocation },

    #[error("Unknown start of expression: {}", describe(.found))]
    UnknownStartOfExpression { found: Option<Token>, location: FileLocation },
}

impl ParseError {
    #[must_use]
    pub fn location(&self) -> FileLocation {
        match self {
            Self::ExpectedStatement { location, .. } => *location,
            Self::ExpectedToken { location, .. } => *location,
            Self::ExpectedType { location, .. } => *location,
            Self::UnknownStartOfExpression { location, .. } => *location,
        }
    }

    /// The offending token, `None` when the input ended early.
    #[must_use]
    pub fn found(&self) -> Option<&Token> {
        match self {
            Self::ExpectedStatement { found, .. } => found.as_ref(),
            Self::ExpectedToken { found, .. } => found.as_ref(),
            Self::ExpectedType { found, .. } => found.as_ref(),
            Self::UnknownStartOfExpression { found, .. } => found.as_ref(),
        }
    }

    #[must_use]
    pub fn range(&self) -> FileRange {
        match self.found() {
            Some(token) => token.range(),
            None => self.location().as_zero_range(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lexer, NumberKind, SourceCode};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn lex(input: &str) -> Vec<Token> {
        let source_code = SourceCode::new_test(input);
        let (tokens, errors) = Lexer::new(&source_code).collect_all();
        assert!(errors.is_empty(), "unexpected lexer errors: {errors:?}");
        tokens
    }

    fn parse_single_statement(input: &str) -> ParseResult<Statement> {
        let tokens = lex(input);
        let mut parser = Parser::new(PathBuf::new(), &tokens);
        let statement = parser.parse_statement()?;
        assert!(parser.is_at_end(), "trailing tokens after {input:?}");
        Ok(statement)
    }

    fn parse_expression(input: &str) -> Ranged<Expression> {
        let tokens = lex(input);
        let mut parser = Parser::new(PathBuf::new(), &tokens);
        let expression = parser.parse_expression().unwrap();
        assert!(parser.is_at_end(), "trailing tokens after {input:?}");
        expression
    }

    fn parse_type(input: &str) -> ParseResult<Type> {
        let tokens = lex(input);
        let mut parser = Parser::new(PathBuf::new(), &tokens);
        parser.parse_type().map(Ranged::into_value)
    }

    fn as_bi(expression: &Expression) -> &BiExpression {
        match expression {
            Expression::BiExpression(bi) => bi,
            other => panic!("expected bi-expression, got {other:?}"),
        }
    }

    #[rstest]
    #[case("var a", None, None)]
    #[case("var a: int", Some(Type::int(64, true)), None)]
    #[case("var a = 5", None, Some("5"))]
    #[case("var a: uint8 = 0xff", Some(Type::int(8, false)), Some("255u"))]
    fn var_decl_combinations(#[case] input: &str, #[case] ty: Option<Type>, #[case] value: Option<&str>) {
        let statement = parse_single_statement(input).unwrap();
        let StatementKind::Variable(decl) = statement.kind else {
            panic!("expected variable declaration, got {statement:?}");
        };

        assert_eq!(decl.name.value(), "a");
        assert_eq!(decl.ty.map(Ranged::into_value), ty);
        assert_eq!(decl.value.map(|value| value.value().to_string()), value.map(ToString::to_string));
    }

    #[test]
    fn var_decl_value_keeps_number_kind() {
        let statement = parse_single_statement("var a = 3u16").unwrap();
        let StatementKind::Variable(VarDecl { value: Some(value), .. }) = statement.kind else {
            panic!("expected initialized variable");
        };

        assert_eq!(
            value.into_value(),
            Expression::Primary(PrimaryExpression::NumberLiteral { kind: NumberKind::UInt16, value: "3".to_string() })
        );
    }

    #[rstest]
    #[case("import a", "a")]
    #[case("import a.b.c", "a.b.c")]
    #[case("package orange.core", "orange.core")]
    fn dotted_names(#[case] input: &str, #[case] expected: &str) {
        let statement = parse_single_statement(input).unwrap();
        let name = match statement.kind {
            StatementKind::Import(ImportDecl { name }) => name,
            StatementKind::Package(PackageDecl { name }) => name,
            other => panic!("unexpected statement {other:?}"),
        };
        assert_eq!(name.value(), expected);
    }

    #[rstest]
    #[case("import a.")]
    #[case("import")]
    #[case("import 5")]
    fn dotted_name_requires_identifier(#[case] input: &str) {
        let error = parse_single_statement(input).unwrap_err();
        assert!(
            matches!(error, ParseError::ExpectedToken { expected: ExpectedToken::Identifier, .. }),
            "unexpected error {error:?}"
        );
    }

    #[test]
    fn package_without_name_reports_end_of_file() {
        let tokens = lex("package");
        let mut parser = Parser::new(PathBuf::new(), &tokens);

        let error = parser.parse_statement().unwrap_err();
        assert_eq!(error.name(), "ExpectedToken");
        assert_eq!(error.found(), None);
        assert_eq!(parser.cursor(), 1);
        assert_eq!(error.to_string(), "Expected identifier, but got end of file");
    }

    #[test]
    fn if_elif_else_nests() {
        let statement = parse_single_statement("if (a) { } elif (b) { } else { c }").unwrap();
        let StatementKind::If(outer) = statement.kind else {
            panic!("expected if statement");
        };

        assert_eq!(outer.chain_len(), 2);
        assert_eq!(outer.condition.value().to_string(), "a");

        let ElseClause::Elif(inner) = &outer.else_clause else {
            panic!("expected elif, got {:?}", outer.else_clause);
        };
        assert_eq!(inner.condition.value().to_string(), "b");

        let ElseClause::Else(block) = &inner.else_clause else {
            panic!("expected else, got {:?}", inner.else_clause);
        };
        assert_eq!(block.nodes.len(), 1);
    }

    #[test]
    fn if_without_else() {
        let statement = parse_single_statement("if (x < 3) { var y = x; y }").unwrap();
        let StatementKind::If(statement) = statement.kind else {
            panic!("expected if statement");
        };

        assert_eq!(statement.else_clause, ElseClause::None);
        assert_eq!(statement.body.nodes.len(), 2);
        assert!(statement.body.nodes[0].as_statement().is_some());
        assert!(statement.body.nodes[1].as_statement().is_none());
    }

    #[rstest]
    #[case("if a) { }", Punctuator::LeftParenthesis)]
    #[case("if (a { }", Punctuator::RightParenthesis)]
    #[case("if (a) b", Punctuator::LeftCurlyBracket)]
    #[case("if (a) { b", Punctuator::RightCurlyBracket)]
    #[case("if (a) { } elif b { }", Punctuator::LeftParenthesis)]
    fn if_statement_missing_punctuation(#[case] input: &str, #[case] missing: Punctuator) {
        let error = parse_single_statement(input).unwrap_err();
        let ParseError::ExpectedToken { expected, .. } = error else {
            panic!("unexpected error {error:?}");
        };
        assert_eq!(expected, ExpectedToken::Punctuator(missing));
    }

    #[rstest]
    #[case("alias Size = uint64", Type::int(64, false))]
    #[case("alias Bytes = uint8[]", Type::array(Type::int(8, false)))]
    #[case("alias Handle = Window*", Type::pointer(Type::named("Window")))]
    fn alias_decl(#[case] input: &str, #[case] expected: Type) {
        let statement = parse_single_statement(input).unwrap();
        let StatementKind::Alias(decl) = statement.kind else {
            panic!("expected alias");
        };
        assert_eq!(decl.ty.into_value(), expected);
    }

    #[rstest]
    #[case("int", Type::int(64, true))]
    #[case("int32", Type::int(32, true))]
    #[case("uint", Type::int(64, false))]
    #[case("float", Type::Float)]
    #[case("double", Type::Double)]
    #[case("bool", Type::Bool)]
    #[case("char", Type::Char)]
    #[case("Point", Type::named("Point"))]
    #[case("char*[]", Type::array(Type::pointer(Type::Char)))]
    #[case("int[]*", Type::pointer(Type::array(Type::int(64, true))))]
    #[case("Point[][]", Type::array(Type::array(Type::named("Point"))))]
    fn types(#[case] input: &str, #[case] expected: Type) {
        assert_eq!(parse_type(input).unwrap(), expected);
    }

    #[rstest]
    #[case("5")]
    #[case("if")]
    #[case("(")]
    #[case("")]
    fn not_a_type(#[case] input: &str) {
        assert_eq!(parse_type(input).unwrap_err().name(), "ExpectedType");
    }

    #[test]
    fn unclosed_array_type() {
        let error = parse_type("int[").unwrap_err();
        assert_eq!(error.name(), "ExpectedToken");
    }

    #[rstest]
    #[case("1 + 2 * 3", BiOperator::Add)]
    #[case("1 * 2 + 3", BiOperator::Add)]
    #[case("a || b && c", BiOperator::LogicalOr)]
    #[case("a == b < c", BiOperator::Comparison(Comparison::Equality))]
    #[case("a & b | c", BiOperator::BitwiseOr)]
    #[case("a - b - c", BiOperator::Subtract)]
    fn expression_precedence(#[case] input: &str, #[case] top: BiOperator) {
        let expression = parse_expression(input);
        assert_eq!(*as_bi(expression.value()).operator.value(), top);
    }

    #[test]
    fn binary_operators_are_left_associative() {
        let expression = parse_expression("a - b - c");
        let outer = as_bi(expression.value());
        let inner = as_bi(outer.lhs.value());

        assert_eq!(inner.lhs.value().to_string(), "a");
        assert_eq!(inner.rhs.value().to_string(), "b");
        assert_eq!(outer.rhs.value().to_string(), "c");
    }

    #[test]
    fn parentheses_override_precedence() {
        let expression = parse_expression("(1 + 2) * 3");
        assert_eq!(*as_bi(expression.value()).operator.value(), BiOperator::Multiply);
    }

    #[test]
    fn unary_binds_tighter_than_binary() {
        let expression = parse_expression("-a * b");
        let bi = as_bi(expression.value());
        assert!(matches!(bi.lhs.value(), Expression::Unary(UnaryExpression { .. })));
    }

    #[test]
    fn postfix_chain() {
        let expression = parse_expression("this.items[0].draw(x, 2)");
        assert_eq!(expression.value().to_string(), "this.items[0].draw(x, 2)");

        let Expression::Postfix(call) = expression.value() else {
            panic!("expected call");
        };
        let PostfixExpressionKind::Call(arguments) = &call.kind else {
            panic!("expected call, got {:?}", call.kind);
        };
        assert_eq!(arguments.len(), 2);
    }

    #[rstest]
    #[case(")")]
    #[case("}")]
    #[case("+")]
    fn unknown_start_of_expression(#[case] input: &str) {
        let tokens = lex(input);
        let mut parser = Parser::new(PathBuf::new(), &tokens);
        let error = parser.parse_expression().unwrap_err();
        assert_eq!(error.name(), "UnknownStartOfExpression");
    }

    #[test]
    fn statement_rejects_expression() {
        let error = parse_single_statement("a + b").unwrap_err();
        assert_eq!(error.name(), "ExpectedStatement");
        assert_eq!(error.location().offset(), 0);
    }

    #[test]
    fn parse_tree_collects_top_level_nodes() {
        let tokens = lex("package app\nimport std.io;\nimport std.math\nvar x = 1\nprint(x)");
        let tree = Parser::new(PathBuf::from("main.or"), &tokens).parse_tree().unwrap();

        assert_eq!(tree.nodes().len(), 5);
        assert_eq!(tree.package().map(|package| package.name.value().as_str()), Some("app"));
        assert_eq!(
            tree.imports().map(|import| import.name.value().as_str()).collect::<Vec<_>>(),
            vec!["std.io", "std.math"]
        );
    }

    #[test]
    fn parse_tree_stops_at_first_error() {
        let tokens = lex("var a = 1\nvar = 2\nvar b = 3");
        let error = Parser::new(PathBuf::new(), &tokens).parse_tree().unwrap_err();

        assert_eq!(error.name(), "ExpectedToken");
        assert_eq!(error.location().line(), 1);
    }
}
