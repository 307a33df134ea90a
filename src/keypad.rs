//! Keyboard and button mapping onto engine operations.
//!
//! Adapters translate raw key names or button identifiers into an
//! [`Action`] and hand it to [`Calculator::dispatch`].

use crate::core::{Calculator, Operator};
use serde::{Deserialize, Serialize};

/// A single user action on the keypad.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Action {
    Digit(char),
    Operator(Operator),
    Function(String),
    Equals,
    Clear,
    ClearEntry,
    Backspace,
}

impl Action {
    /// Map a keyboard key name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lambdacalc::keypad::Action;
    /// use lambdacalc::core::Operator;
    ///
    /// assert_eq!(Action::from_key("7"), Some(Action::Digit('7')));
    /// assert_eq!(Action::from_key("*"), Some(Action::Operator(Operator::Multiply)));
    /// assert_eq!(Action::from_key("Enter"), Some(Action::Equals));
    /// assert_eq!(Action::from_key("Tab"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => return Some(Self::Equals),
            "Escape" | "c" | "C" => return Some(Self::Clear),
            "Backspace" => return Some(Self::Backspace),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };

        if c.is_ascii_digit() || c == '.' {
            Some(Self::Digit(c))
        } else {
            Operator::from_symbol(c).map(Self::Operator)
        }
    }

    /// Map a function-row button identifier.
    ///
    /// `clear`, `clear-entry` and `backspace` are actions; anything else is
    /// passed through as a function name.
    pub fn from_button(id: &str) -> Self {
        match id {
            "clear" => Self::Clear,
            "clear-entry" => Self::ClearEntry,
            "backspace" => Self::Backspace,
            name => Self::Function(name.to_string()),
        }
    }
}

impl Calculator {
    /// Route an action to the matching engine operation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lambdacalc::core::Calculator;
    /// use lambdacalc::keypad::Action;
    ///
    /// let mut calc = Calculator::new();
    /// for key in ["9", "/", "4", "Enter"] {
    ///     if let Some(action) = Action::from_key(key) {
    ///         calc.dispatch(action);
    ///     }
    /// }
    /// assert_eq!(calc.display(), "2.25");
    /// ```
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Digit(d) => self.input_digit(d),
            Action::Operator(op) => self.input_operator(op),
            Action::Function(name) => self.apply_function(&name),
            Action::Equals => self.equals(),
            Action::Clear => self.clear(),
            Action::ClearEntry => self.clear_entry(),
            Action::Backspace => self.backspace(),
        }
    }
}
