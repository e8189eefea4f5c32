//! Logical keypad commands.
//!
//! The host UI is responsible for turning raw pointer clicks and key
//! presses into these commands; the engine never sees a device event.

/// A binary arithmetic operator as it appears in the expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    /// The character this operator contributes to the expression text.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Map an operator character to its operator. Accepts both the ASCII
    /// forms and the display glyphs `× ÷ −`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// One logical keypad command per user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// A digit key, `0` through `9`.
    Digit(char),
    /// The decimal point key.
    Point,
    /// A binary operator key.
    Operator(Op),
    /// Evaluate the current expression.
    Equals,
    /// Reset to the initial state.
    Clear,
    /// Divide the current value by 100.
    Percent,
    /// Negate the current value.
    ToggleSign,
    /// Delete the last character of the expression.
    Backspace,
}

/// Map a printable key to its command, for hosts that forward keyboard
/// input.
///
/// Covers digits, `.`, the four operators (ASCII or glyph), `=`, and
/// `c`/`C` for clear. Non-printable keys (Enter, Backspace) have no `char`
/// form; hosts map those to [`Command::Equals`] and [`Command::Backspace`]
/// themselves.
pub fn command_for_key(key: char) -> Option<Command> {
    match key {
        '0'..='9' => Some(Command::Digit(key)),
        '.' => Some(Command::Point),
        '=' => Some(Command::Equals),
        'c' | 'C' => Some(Command::Clear),
        _ => Op::from_char(key).map(Command::Operator),
    }
}
