//! Unit tests for SyntaxError and SourcePosition

use core_types::{SourcePosition, SyntaxError, MAX_MESSAGE_LEN};

#[cfg(test)]
mod syntax_error_tests {
    use super::*;

    fn pos(line: u32, column: u32, offset: usize) -> SourcePosition {
        SourcePosition {
            line,
            column,
            offset,
        }
    }

    #[test]
    fn test_syntax_error_display_includes_position() {
        let err = SyntaxError::new("[;]: expected digit", pos(3, 7, 20));
        assert_eq!(
            err.to_string(),
            "SyntaxError at line 3, column 7: [;]: expected digit"
        );
    }

    #[test]
    fn test_message_at_limit_is_untouched() {
        let message = "a".repeat(MAX_MESSAGE_LEN);
        let err = SyntaxError::new(message.clone(), pos(1, 1, 0));
        assert_eq!(err.message, message);
    }

    #[test]
    fn test_message_over_limit_is_cut() {
        let err = SyntaxError::new("b".repeat(MAX_MESSAGE_LEN + 1), pos(1, 1, 0));
        assert_eq!(err.message.len(), MAX_MESSAGE_LEN);
    }

    #[test]
    fn test_syntax_error_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(SyntaxError::new("boom", SourcePosition::start()));
        assert!(err.to_string().ends_with("boom"));
    }

    #[test]
    fn test_syntax_error_serializes_to_json() {
        let err = SyntaxError::new("[x]: expected '='", pos(2, 4, 9));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["message"], "[x]: expected '='");
        assert_eq!(json["position"]["line"], 2);
        assert_eq!(json["position"]["column"], 4);
        assert_eq!(json["position"]["offset"], 9);
    }

    #[test]
    fn test_syntax_error_clone_eq() {
        let err = SyntaxError::new("same", pos(1, 2, 1));
        assert_eq!(err.clone(), err);
    }
}
