//! The keypad state machine.
//!
//! Owns the in-progress expression text and the two mode flags that decide
//! how the next key press mutates it. All mutation goes through the methods
//! here; the helpers in [`crate::eval`] are pure.

use tracing::debug;

use crate::eval::{format_number, safe_eval, sanitize_expression};

use super::{Command, Op};

/// What the display shows while the expression is empty.
const EMPTY_DISPLAY: &str = "0";

/// What the display shows after a failed evaluation.
pub const ERROR_DISPLAY: &str = "Error";

/// The calculator input state machine.
///
/// Create one per calculator instance. Every operation returns the text
/// the display collaborator should show next; the string is never empty.
#[derive(Clone, Debug, Default)]
pub struct Keypad {
    /// The not-yet-evaluated arithmetic text, e.g. `12+3.5*`.
    expression: String,
    /// True iff the most recently appended token was a binary operator.
    last_was_operator: bool,
    /// True iff the number currently being typed already has a decimal
    /// point. Reset whenever a new number starts.
    has_dot: bool,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw in-progress expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The text to display right now: the expression, or `0` if empty.
    pub fn display(&self) -> String {
        if self.expression.is_empty() {
            EMPTY_DISPLAY.to_string()
        } else {
            self.expression.clone()
        }
    }

    /// Dispatch one logical command and return the new display text.
    pub fn apply(&mut self, command: Command) -> String {
        match command {
            Command::Digit(digit) => self.press_digit(digit),
            Command::Point => self.press_point(),
            Command::Operator(op) => self.press_operator(op),
            Command::Equals => self.equals(),
            Command::Clear => self.clear(),
            Command::Percent => self.percent(),
            Command::ToggleSign => self.toggle_sign(),
            Command::Backspace => self.backspace(),
        }
    }

    /// Append a digit to the number currently being typed.
    pub fn press_digit(&mut self, digit: char) -> String {
        if !digit.is_ascii_digit() {
            debug!(?digit, "ignoring non-digit input");
            return self.display();
        }
        self.expression.push(digit);
        self.last_was_operator = false;
        self.display()
    }

    /// Append a decimal point to the number currently being typed.
    ///
    /// A second point in the same number is suppressed. A point at the
    /// start of a number (empty expression, or right after an operator)
    /// seeds `0.` so the text stays a readable numeral.
    pub fn press_point(&mut self) -> String {
        if self.has_dot {
            return self.display();
        }
        if self.expression.is_empty() || self.last_was_operator {
            self.expression.push_str("0.");
        } else {
            self.expression.push('.');
        }
        self.has_dot = true;
        self.last_was_operator = false;
        self.display()
    }

    /// Append a binary operator, or replace the trailing one.
    ///
    /// Pressing an operator while the expression already ends in one swaps
    /// the old operator for the new (last press wins). A `-` on an empty
    /// expression instead seeds a negative number: it is treated as the
    /// sign of the upcoming numeral, not as an operator, so
    /// `last_was_operator` stays false and a following operator press
    /// appends rather than replaces.
    pub fn press_operator(&mut self, op: Op) -> String {
        if self.expression.is_empty() && op == Op::Subtract {
            self.expression.push('-');
            self.last_was_operator = false;
            return self.display();
        }
        if self.last_was_operator {
            self.expression.pop();
        }
        self.expression.push(op.symbol());
        self.last_was_operator = true;
        self.has_dot = false;
        self.display()
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) -> String {
        self.expression.clear();
        self.last_was_operator = false;
        self.has_dot = false;
        self.display()
    }

    /// Delete the last character of the expression. No-op when empty.
    ///
    /// Known inconsistency: the mode flags are not recomputed from the
    /// trimmed text, so deleting the trailing point of `0.` leaves
    /// `has_dot` set until an operator, clear, or evaluation resets it.
    pub fn backspace(&mut self) -> String {
        self.expression.pop();
        self.display()
    }

    /// Evaluate the expression and divide the result by 100.
    ///
    /// An empty expression counts as 0. On failure the expression and both
    /// flags reset and the error indicator is returned.
    pub fn percent(&mut self) -> String {
        let text = sanitize_expression(&self.expression);
        let value = if text.is_empty() {
            Ok(0.0)
        } else {
            safe_eval(&text)
        };
        match value {
            Ok(value) => {
                self.expression = format_number(value / 100.0);
                self.display()
            }
            Err(err) => {
                debug!(%err, expression = %self.expression, "percent failed");
                self.reset_after_error()
            }
        }
    }

    /// Evaluate the expression and negate the result.
    ///
    /// No-op on an empty expression. An unevaluable expression is also left
    /// untouched, silently, so an in-progress entry is not destroyed by an
    /// accidental press.
    pub fn toggle_sign(&mut self) -> String {
        if self.expression.is_empty() {
            return self.display();
        }
        match safe_eval(&sanitize_expression(&self.expression)) {
            Ok(value) => {
                self.expression = format_number(-value);
                self.display()
            }
            Err(err) => {
                debug!(%err, expression = %self.expression, "toggle_sign skipped");
                self.display()
            }
        }
    }

    /// Evaluate the expression and replace it with the stringified result.
    ///
    /// On failure the expression and both flags reset and the error
    /// indicator is returned; the user retypes from scratch.
    pub fn equals(&mut self) -> String {
        match safe_eval(&sanitize_expression(&self.expression)) {
            Ok(value) => {
                self.expression = format_number(value);
                self.last_was_operator = false;
                self.has_dot = self.expression.contains('.');
                self.display()
            }
            Err(err) => {
                debug!(%err, expression = %self.expression, "evaluation failed");
                self.reset_after_error()
            }
        }
    }

    fn reset_after_error(&mut self) -> String {
        self.expression.clear();
        self.last_was_operator = false;
        self.has_dot = false;
        ERROR_DISPLAY.to_string()
    }
}
