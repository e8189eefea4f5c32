//! Allow-list validation performed before any text reaches the evaluator.
//!
//! This is a cheap pre-filter whose only job is to keep non-arithmetic text
//! out of the evaluation engine. It is not a parser: unbalanced parentheses
//! and other structural problems pass here and fail later, at evaluation.

use lazy_static::lazy_static;
use regex::Regex;

use super::EvalError;

lazy_static! {
    /// Matches strings made up entirely of arithmetic-safe characters.
    /// Allows: digits, operators, parentheses, dot, percent, whitespace.
    static ref ALLOWED_CHARS: Regex = Regex::new(
        r"^[0-9+\-*/().%\s]+$"
    ).unwrap();

    /// Matches two or more adjacent operator characters.
    static ref OPERATOR_RUN: Regex = Regex::new(
        r"[+\-*/%]{2,}"
    ).unwrap();
}

/// Check that `text` stays inside the arithmetic grammar.
///
/// Fails with [`EvalError::InvalidCharacter`] on anything outside the
/// allow-list (including empty input), and with
/// [`EvalError::InvalidOperatorSequence`] if two or more operator
/// characters are adjacent once whitespace is stripped.
pub fn validate(text: &str) -> Result<(), EvalError> {
    if !ALLOWED_CHARS.is_match(text) {
        return Err(EvalError::InvalidCharacter);
    }

    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if OPERATOR_RUN.is_match(&compact) {
        return Err(EvalError::InvalidOperatorSequence);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_expressions_pass() {
        assert_eq!(validate("12+3.5"), Ok(()));
        assert_eq!(validate("(1+2)*3"), Ok(()));
        assert_eq!(validate("-5"), Ok(()));
        assert_eq!(validate("10 % 3"), Ok(()));
        assert_eq!(validate("0."), Ok(()));
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert_eq!(validate(""), Err(EvalError::InvalidCharacter));
        assert_eq!(validate("2+x"), Err(EvalError::InvalidCharacter));
        assert_eq!(validate("alert(1)"), Err(EvalError::InvalidCharacter));
        assert_eq!(validate("Infinity"), Err(EvalError::InvalidCharacter));
        assert_eq!(validate("1;2"), Err(EvalError::InvalidCharacter));
    }

    #[test]
    fn test_operator_runs_rejected() {
        assert_eq!(validate("1++2"), Err(EvalError::InvalidOperatorSequence));
        assert_eq!(validate("1+-2"), Err(EvalError::InvalidOperatorSequence));
        assert_eq!(validate("5*/3"), Err(EvalError::InvalidOperatorSequence));
        // Whitespace between the operators does not hide the run.
        assert_eq!(validate("1 + + 2"), Err(EvalError::InvalidOperatorSequence));
    }

    #[test]
    fn test_structural_problems_pass_validation() {
        // Not a parser: these fail later, in the evaluation engine.
        assert_eq!(validate(")"), Ok(()));
        assert_eq!(validate("(1+2"), Ok(()));
        assert_eq!(validate("5+"), Ok(()));
    }
}
