//! Safe expression evaluation.
//!
//! This module provides functionality to:
//! - Normalize display glyphs (`×`, `÷`) to computable operators
//! - Validate text against the arithmetic allow-list grammar
//! - Evaluate validated text using fasteval
//!
//! Everything here is a pure function: the state lives in
//! [`crate::keypad::Keypad`], which calls in for percent, sign-toggle, and
//! equals.

mod evaluation;
mod sanitize;
mod validation;

pub use evaluation::{evaluate, format_number, safe_eval};
pub use sanitize::sanitize_expression;
pub use validation::validate;

use thiserror::Error;

/// Why an expression was rejected or failed to compute.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The text contains a character outside the arithmetic allow-list.
    #[error("invalid characters in expression")]
    InvalidCharacter,
    /// Two or more operator characters appear back to back.
    #[error("invalid operator sequence")]
    InvalidOperatorSequence,
    /// The arithmetic engine rejected the text (e.g. unbalanced parentheses).
    #[error("expression could not be evaluated: {0}")]
    Evaluation(String),
}
