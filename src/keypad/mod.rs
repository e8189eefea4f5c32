//! Input state machine for the calculator keypad.
//!
//! This module provides functionality to:
//! - Represent each user action as a tagged [`Command`]
//! - Map printable keys onto commands for keyboard-driven hosts
//! - Mutate the in-progress expression one command at a time

mod command;
mod state;

pub use command::{Command, Op, command_for_key};
pub use state::{ERROR_DISPLAY, Keypad};
