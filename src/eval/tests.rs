//! Evaluator tests.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::{EvalError, LexerError};
    use crate::evaluate;

    #[test]
    fn test_single_number() {
        assert_eq!(evaluate("7").unwrap(), 7);
        assert_eq!(evaluate("0").unwrap(), 0);
    }

    #[test]
    fn test_precedence() {
        // 1 + 2 * 3 groups as 1 + (2 * 3)
        assert_eq!(evaluate("1 + 2 * 3").unwrap(), 7);
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(evaluate("(1 + 2) * 3").unwrap(), 9);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(evaluate("10 - 4 - 3").unwrap(), 3);
        assert_eq!(evaluate("100 / 5 / 2").unwrap(), 10);
    }

    #[test]
    fn test_truncating_division() {
        assert_eq!(evaluate("7 / 2").unwrap(), 3);
        // A negative intermediate truncates toward zero.
        assert_eq!(evaluate("(0 - 7) / 2").unwrap(), -3);
    }

    #[test]
    fn test_regression_fixture() {
        // 54 + 28196/32 = 54 + 881 = 935 under truncating division.
        assert_eq!(evaluate("(5 + 4) * 6 + 53 * 532 / 32").unwrap(), 935);
    }

    #[test]
    fn test_nested_parentheses() {
        assert_eq!(evaluate("((2))").unwrap(), 2);
        assert_eq!(evaluate("2 * (3 + (4 - 1))").unwrap(), 12);
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(
            evaluate("10 / 0").unwrap_err(),
            EvalError::DivisionByZero(_)
        ));
        assert!(matches!(
            evaluate("1 / (2 - 2)").unwrap_err(),
            EvalError::DivisionByZero(_)
        ));
    }

    #[test]
    fn test_missing_closing_paren() {
        match evaluate("(1 + 2").unwrap_err() {
            EvalError::UnexpectedToken {
                expected, found, ..
            } => {
                assert_eq!(expected, "')'");
                assert_eq!(found, "EOF");
            }
            other => panic!("Expected UnexpectedToken, got {:?}", other),
        }
    }

    #[test]
    fn test_unexpected_closing_paren() {
        assert!(matches!(
            evaluate("1 + )").unwrap_err(),
            EvalError::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn test_trailing_input() {
        match evaluate("1 2").unwrap_err() {
            EvalError::TrailingInput { found, .. } => assert_eq!(found, "2"),
            other => panic!("Expected TrailingInput, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            evaluate("").unwrap_err(),
            EvalError::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn test_string_literal_is_not_an_operand() {
        assert!(matches!(
            evaluate("'5' + 1").unwrap_err(),
            EvalError::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn test_unknown_operator_is_rejected_by_grammar() {
        // `&&` scans fine but the grammar never consumes it.
        assert!(matches!(
            evaluate("1 && 2").unwrap_err(),
            EvalError::TrailingInput { .. }
        ));
    }

    #[test]
    fn test_lexer_errors_propagate() {
        assert!(matches!(
            evaluate("1 + $").unwrap_err(),
            EvalError::Lexer(LexerError::UnrecognizedCharacter('$', _))
        ));
        assert!(matches!(
            evaluate("\"open").unwrap_err(),
            EvalError::Lexer(LexerError::UnterminatedStringLiteral(_))
        ));
    }

    #[test]
    fn test_whitespace_insensitivity() {
        assert_eq!(evaluate("1+2").unwrap(), evaluate(" 1 + 2 ").unwrap());
    }

    #[test]
    fn test_idempotence() {
        let source = "(5 + 4) * 6 + 53 * 532 / 32";
        assert_eq!(evaluate(source).unwrap(), evaluate(source).unwrap());
    }
}
