//! Core engine for an interactive keypad calculator.
//!
//! The crate has two halves:
//! - [`keypad`] — the input state machine that turns discrete key presses
//!   into an in-progress expression string
//! - [`eval`] — pure helpers that sanitize, validate, and evaluate a
//!   finished expression
//!
//! The host UI maps raw device events onto [`keypad::Command`] values,
//! feeds them to a [`keypad::Keypad`], and renders the display string each
//! call returns. The engine never inspects raw events and never renders.

pub mod eval;
pub mod keypad;

pub use eval::{EvalError, evaluate, format_number, safe_eval, sanitize_expression, validate};
pub use keypad::{Command, Keypad, Op, command_for_key};
