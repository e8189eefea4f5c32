//! Expression evaluation using fasteval.
//!
//! Wraps fasteval to compute the numeric value of allow-listed arithmetic
//! text with standard operator precedence (`*` `/` before `+` `-`,
//! parentheses, unary minus).

use std::collections::BTreeMap;

use super::{EvalError, validate};

/// Compute the numeric value of arithmetic text.
///
/// Callers are expected to have run [`validate`] first; use [`safe_eval`]
/// unless the text is already known to be allow-listed. Division by zero is
/// not an error here: the result follows IEEE float semantics and comes
/// back as infinity or NaN.
pub fn evaluate(text: &str) -> Result<f64, EvalError> {
    // Empty namespace: no variables, no custom functions.
    let mut namespace = BTreeMap::<String, f64>::new();

    // fasteval's error type only exposes Debug formatting.
    fasteval::ez_eval(text, &mut namespace)
        .map_err(|e| EvalError::Evaluation(format!("{e:?}")))
}

/// Validate `text` and, only if it passes, evaluate it.
///
/// This is the only evaluation entry point the state machine uses, so raw
/// input never reaches the engine unfiltered.
pub fn safe_eval(text: &str) -> Result<f64, EvalError> {
    validate(text)?;
    evaluate(text)
}

/// Format a computed value the way it re-enters the expression.
///
/// Finite values use the shortest round-trip decimal form (`15`, `0.5`).
/// Negative zero collapses to `0`. Non-finite values keep their
/// conventional names so the display can show them directly.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_evaluation() {
        assert_eq!(safe_eval("12+3"), Ok(15.0));
        assert_eq!(safe_eval("10-4"), Ok(6.0));
        assert_eq!(safe_eval("0.1*10"), Ok(1.0));
    }

    #[test]
    fn test_standard_precedence() {
        assert_eq!(safe_eval("2+3*4"), Ok(14.0));
        assert_eq!(safe_eval("(2+3)*4"), Ok(20.0));
        assert_eq!(safe_eval("10-6/2"), Ok(7.0));
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(safe_eval("-7"), Ok(-7.0));
        assert_eq!(safe_eval("-7+10"), Ok(3.0));
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        let value = safe_eval("1/0").unwrap();
        assert!(value.is_infinite() && value.is_sign_positive());
    }

    #[test]
    fn test_malformed_text_is_evaluation_error() {
        assert!(matches!(safe_eval(")"), Err(EvalError::Evaluation(_))));
        assert!(matches!(safe_eval("(1+2"), Err(EvalError::Evaluation(_))));
        assert!(matches!(safe_eval("5+"), Err(EvalError::Evaluation(_))));
        assert!(matches!(safe_eval("-"), Err(EvalError::Evaluation(_))));
    }

    #[test]
    fn test_unfiltered_text_is_rejected_before_the_engine() {
        assert_eq!(safe_eval("2+x"), Err(EvalError::InvalidCharacter));
        assert_eq!(safe_eval("1++2"), Err(EvalError::InvalidOperatorSequence));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
