//! Integration tests for the full front-end pipeline.
//!
//! These tests drive source text through the lexer and parser together and
//! check the resulting AST, its canonical printed form, and the diagnostic
//! list handed to collaborators.

use gorilla::{
    ast::ast::{Expression, Program, Statement},
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::Parser,
};

fn parse(source: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source.to_string()));
    let program = parser.parse_program();
    let errors = parser.errors().iter().map(|e| e.to_string()).collect();

    (program, errors)
}

#[test]
fn test_pipeline_clean_program() {
    let source = "
        let add = fn(x, y) { x + y };
        let result = 3 + 4;
    ";

    let (program, errors) = parse(source);

    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(program.statements.len(), 2);
    assert_eq!(
        program.to_string(),
        "let add = fn(x, y) { (x + y) };let result = (3 + 4);"
    );
}

#[test]
fn test_canonical_form_reparses_to_fixed_point() {
    let sources = [
        "let x = 5;",
        "let a := 3;",
        "return x + y * z;",
        "-a * b;",
        "a + b / c;",
        "3 > 5 == false;",
        "!(true == true);",
        "if (x < y) { x } else { y }",
        "fn(x, y) { x + y }",
        "if (a) { let b = 1; b } else { fn() { c } }",
    ];

    for source in sources {
        let (first, errors) = parse(source);
        assert!(errors.is_empty(), "{:?}: {:?}", source, errors);

        let printed = first.to_string();
        let (second, errors) = parse(&printed);
        assert!(errors.is_empty(), "reparse of {:?}: {:?}", printed, errors);

        // One round trip reaches a fixed point of the printer.
        assert_eq!(second.to_string(), printed, "source: {:?}", source);
    }
}

#[test]
fn test_reparse_preserves_structure() {
    let (first, _) = parse("-a * b;");
    let (second, _) = parse(&first.to_string());

    // Token literals differ (the printer adds parentheses) but the shape
    // does not: one infix `*` whose left side is a prefix `-`.
    let expr = |program: &Program| match &program.statements[0] {
        Statement::Expression(stmt) => stmt.expression.clone(),
        other => panic!("expected expression statement, got {:?}", other),
    };

    match (expr(&first), expr(&second)) {
        (Expression::Infix(a), Expression::Infix(b)) => {
            assert_eq!(a.operator, b.operator);
            assert!(matches!(*a.left, Expression::Prefix(_)));
            assert!(matches!(*b.left, Expression::Prefix(_)));
            assert_eq!(a.right.to_string(), b.right.to_string());
        }
        other => panic!("expected infix expressions, got {:?}", other),
    }
}

#[test]
fn test_lexer_feeds_parser_one_token_at_a_time() {
    // The parser holds exactly one token of lookahead; a lexer shared with
    // nothing else terminates the stream and the parse loop with it.
    let mut lexer = Lexer::new("let x = 1;".to_string());
    let mut kinds = vec![];
    loop {
        let token = lexer.next_token();
        kinds.push(token.kind);
        if token.kind == TokenKind::EOF {
            break;
        }
    }

    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_diagnostics_do_not_halt_the_parse() {
    let source = "let = 1; let y = 2; if (z) { w ";
    let (program, errors) = parse(source);

    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.statements[0].to_string(), "let y = 2;");
    assert_eq!(
        errors,
        vec![
            "expected next token to be IDENTIFIER, got ASSIGN instead",
            "unterminated block",
        ]
    );
}

#[test]
fn test_missing_delimiters_never_hang() {
    let sources = ["(2 + 3", "fn(x { x }", "if (a { b }", "{", "fn(", "((("];

    for source in sources {
        let (_, errors) = parse(source);
        assert!(!errors.is_empty(), "expected diagnostics for {:?}", source);
    }
}

#[test]
fn test_program_owns_tree_and_prints_with_statement_terminators() {
    let (program, errors) = parse("let x = 1; return x; x");

    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(program.to_string(), "let x = 1;return x;x");
}
