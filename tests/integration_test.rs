// Integration tests for the expression parser

use parsum::parser::parse::Parser;
use parsum::parser::tree::dump_tree;

#[test]
fn test_sum_trace_and_dump() {
    let mut parser = Parser::new("1+2").expect("Parser creation failed");
    let outcome = parser.parse().expect("Parsing failed");
    assert!(outcome.trailing.is_none());

    assert_eq!(
        parser.trace().lines(),
        &[
            "S -> E S'",
            "  E -> 1",
            "  S' -> + S",
            "    S -> E S'",
            "      E -> 2",
            "      S' -> ε",
        ]
    );

    // The dump replays the trace and additionally prints bracket and plus
    // terminals on their own lines. Digits never get a standalone line.
    assert_eq!(
        dump_tree(parser.arena(), outcome.root),
        vec![
            "S -> E S'",
            "  E -> 1",
            "  S' -> + S",
            "    +",
            "    S -> E S'",
            "      E -> 2",
            "      S' -> ε",
        ]
    );
}

#[test]
fn test_nested_sum_trace_and_dump() {
    let mut parser = Parser::new("(1+2)+3").expect("Parser creation failed");
    let outcome = parser.parse().expect("Parsing failed");
    assert!(outcome.trailing.is_none());

    assert_eq!(
        parser.trace().lines(),
        &[
            "S -> E S'",
            "  E -> ( S )",
            "    S -> E S'",
            "      E -> 1",
            "      S' -> + S",
            "        S -> E S'",
            "          E -> 2",
            "          S' -> ε",
            "  S' -> + S",
            "    S -> E S'",
            "      E -> 3",
            "      S' -> ε",
        ]
    );

    assert_eq!(
        dump_tree(parser.arena(), outcome.root),
        vec![
            "S -> E S'",
            "  E -> ( S )",
            "    (",
            "    S -> E S'",
            "      E -> 1",
            "      S' -> + S",
            "        +",
            "        S -> E S'",
            "          E -> 2",
            "          S' -> ε",
            "    )",
            "  S' -> + S",
            "    +",
            "    S -> E S'",
            "      E -> 3",
            "      S' -> ε",
        ]
    );
}

#[test]
fn test_single_literal_roundtrip() {
    let mut parser = Parser::new("42").expect("Parser creation failed");
    let outcome = parser.parse().expect("Parsing failed");

    assert_eq!(parser.trace().lines(), &["S -> E S'", "  E -> 42", "  S' -> ε"]);
    assert_eq!(
        dump_tree(parser.arena(), outcome.root),
        vec!["S -> E S'", "  E -> 42", "  S' -> ε"]
    );
}

#[test]
fn test_trailing_input_still_yields_a_tree() {
    let mut parser = Parser::new("1+2)").expect("Parser creation failed");
    let outcome = parser.parse().expect("Parsing failed");

    let trailing = outcome.trailing.expect("expected a trailing token");
    assert_eq!(trailing.to_string(), "')'");

    // Library callers still get the finished tree for the consumed prefix.
    let dump = dump_tree(parser.arena(), outcome.root);
    assert_eq!(dump[0], "S -> E S'");
    assert!(dump.contains(&"      E -> 2".to_string()));
}

#[test]
fn test_failure_reports_and_partial_trace() {
    let mut parser = Parser::new("(1+2").expect("Parser creation failed");
    let err = parser.parse().expect_err("parse should fail");

    let message = err.to_string();
    assert!(message.contains("no matching ')'"), "message: {}", message);
    assert!(message.contains("line 1, column 1"), "message: {}", message);

    // Everything up to the failure point was traced.
    assert!(!parser.trace().lines().is_empty());
    assert_eq!(parser.trace().lines()[0], "S -> E S'");
}

#[test]
fn test_deeply_nested_group() {
    let mut parser = Parser::new("((((5))))").expect("Parser creation failed");
    let outcome = parser.parse().expect("Parsing failed");
    assert!(outcome.trailing.is_none());

    let dump = dump_tree(parser.arena(), outcome.root);
    let opens = dump.iter().filter(|l| l.trim() == "(").count();
    let closes = dump.iter().filter(|l| l.trim() == ")").count();
    assert_eq!(opens, 4);
    assert_eq!(closes, 4);
    // One paren layer adds two levels (E then inner S), so the literal's
    // rule line sits at depth 9.
    assert!(dump.contains(&format!("{}E -> 5", "  ".repeat(9))));
}
