/// End-to-end integration tests
/// Demonstrates: Scanner → Parser → Operand working together
use tally::{
    evaluate, evaluate_with, parse, tokenize, Error, ErrorCategory, LexerConfig, Operand, Parser,
    Scanner, Token, TokenKind,
};

#[test]
fn test_e2e_mixed_expression() {
    let source = "10 - 11 + 2";

    // Lex
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens().unwrap();

    assert_eq!(
        tokens.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["Integer(10)", "Minus", "Integer(11)", "Plus", "Integer(2)"]
    );

    // Parse
    let parser = Parser::new(tokens);
    let tree = parser.parse().unwrap();

    // Evaluate
    assert_eq!(tree.value().unwrap(), 1);
}

#[test]
fn test_e2e_left_associativity() {
    assert_eq!(evaluate("1+2+3").unwrap(), 6);
    assert_eq!(evaluate("5-2-1").unwrap(), 2);
    assert_eq!(evaluate("1 - 2 - 3 + 10").unwrap(), 6);
}

#[test]
fn test_e2e_digits_only() {
    let tokens = tokenize("123456").unwrap();
    assert_eq!(tokens, vec![Token::integer("123456", 0)]);

    let tree = parse(&tokens).unwrap();
    assert_eq!(tree, Operand::Literal(123456));
}

#[test]
fn test_e2e_negative_result() {
    assert_eq!(evaluate("3 - 10").unwrap(), -7);
}

#[test]
fn test_e2e_whitespace_variants() {
    assert_eq!(evaluate("\t7\n+\r\n8 ").unwrap(), 15);
}

#[test]
fn test_e2e_empty_input() {
    let tokens = tokenize("").unwrap();
    assert!(tokens.is_empty());

    let err = parse(&tokens).unwrap_err();
    assert_eq!(err, Error::EmptyExpression);
    assert_eq!(err.category(), ErrorCategory::Structural);
}

#[test]
fn test_e2e_structural_errors() {
    for source in ["1 + + 2", "+1", "1 2", "1 +", "-"] {
        let err = evaluate(source).unwrap_err();
        assert_eq!(
            err.category(),
            ErrorCategory::Structural,
            "{} should be a structural error, got {}",
            source,
            err
        );
    }
}

#[test]
fn test_e2e_trailing_operator_offset() {
    assert_eq!(
        evaluate("4 - 2 -").unwrap_err(),
        Error::TrailingOperator { offset: 6 }
    );
}

#[test]
fn test_e2e_unknown_character_policy() {
    let err = evaluate("1 + a").unwrap_err();
    assert_eq!(
        err,
        Error::LexError {
            character: 'a',
            offset: 4
        }
    );

    // Lenient scanning drops the character; `a` then terminates nothing
    assert_eq!(evaluate_with("1 + a2", &LexerConfig::lenient()).unwrap(), 3);
    // ...but the structure still has to be valid
    assert!(evaluate_with("1 + a", &LexerConfig::lenient()).is_err());
}

#[test]
fn test_e2e_lenient_letter_splits_run() {
    let tokens = tally::tokenize_with("1a2", &LexerConfig::lenient()).unwrap();
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Integer, TokenKind::Integer]
    );
    assert_eq!(
        evaluate_with("1a2", &LexerConfig::lenient())
            .unwrap_err()
            .category(),
        ErrorCategory::Structural
    );
}

#[test]
fn test_e2e_overflow() {
    let err = evaluate("9223372036854775808").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Overflow);

    let err = evaluate("9223372036854775807 + 1").unwrap_err();
    assert!(matches!(err, Error::Overflow { .. }));

    // Intermediate overflow is caught while collapsing
    let err = evaluate("9223372036854775807 + 1 - 5").unwrap_err();
    assert!(matches!(err, Error::Overflow { .. }));

    assert_eq!(evaluate("9223372036854775807 - 1 + 1").unwrap(), i64::MAX);
}

#[test]
fn test_e2e_tree_serializes() {
    let tree = parse(&tokenize("2 + 3").unwrap()).unwrap();
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(json["Binary"]["op"], "Addition");
    assert_eq!(json["Binary"]["left"]["Literal"], 2);
    assert_eq!(json["Binary"]["right"]["Literal"], 3);
}
