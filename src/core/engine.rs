//! The calculator engine: keypad transitions over [`EngineState`].
//!
//! Every operation is one synchronous transition. Binary operations are
//! applied immediately when the next operator arrives, so evaluation is
//! strictly left to right with no precedence.

use super::format::{format_for_display, format_numeral, numeral_string, parse_numeral};
use super::history::{History, HistoryEntry};
use super::operator::{Function, Operator};
use super::state::{EngineState, Phase};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// What a display adapter needs to render the calculator.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Main display line
    pub display: String,
    /// Pending expression line, e.g. `"12 +"`, empty when nothing is pending
    pub expression: String,
    pub phase: Phase,
}

/// Notification delivered to subscribers after a transition.
#[derive(Clone, Debug)]
pub enum EngineEvent {
    StateChanged(DisplaySnapshot),
    HistoryRecorded(HistoryEntry),
}

/// Callback registered with [`Calculator::subscribe`].
pub type Subscriber = Box<dyn Fn(&EngineEvent) + Send + Sync>;

/// Keypad state machine with a rolling history.
///
/// # Example
///
/// ```rust
/// use lambdacalc::core::{Calculator, Operator};
///
/// let mut calc = Calculator::new();
/// calc.input_digit('2');
/// calc.input_operator(Operator::Add);
/// calc.input_digit('3');
/// calc.input_operator(Operator::Multiply);
/// calc.input_digit('4');
/// calc.equals();
///
/// // No precedence: (2 + 3) * 4
/// assert_eq!(calc.display(), "20");
/// assert_eq!(calc.history().latest().unwrap().label, "5 * 4");
/// ```
pub struct Calculator {
    state: EngineState,
    history: History,
    subscribers: Vec<Subscriber>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_history(History::new())
    }

    /// Start from an existing history, e.g. one with a custom capacity.
    pub fn with_history(history: History) -> Self {
        Self {
            state: EngineState::default(),
            history,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Main display line: the numeral under edit, formatted.
    pub fn display(&self) -> String {
        format_numeral(&self.state.current_input)
    }

    /// Pending expression line, `"<previous> <op>"` while an operator waits.
    pub fn expression(&self) -> String {
        match (self.state.previous_operand, self.state.pending_operator) {
            (Some(previous), Some(op)) => format!("{} {}", numeral_string(previous), op),
            _ => String::new(),
        }
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            display: self.display(),
            expression: self.expression(),
            phase: self.phase(),
        }
    }

    /// Register a callback for state and history notifications.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&EngineEvent) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Enter a digit or the decimal point.
    ///
    /// A lone `"0"` is replaced by the next digit; any other character is
    /// ignored.
    pub fn input_digit(&mut self, digit: char) {
        if !(digit.is_ascii_digit() || digit == '.') {
            trace!(%digit, "ignoring non-digit input");
            return;
        }

        if self.state.waiting_for_operand {
            self.state.current_input = digit.to_string();
            self.state.waiting_for_operand = false;
        } else if self.state.current_input == "0" && digit != '.' {
            self.state.current_input = digit.to_string();
        } else {
            self.state.current_input.push(digit);
        }

        self.notify_state();
    }

    /// Press a binary operator.
    ///
    /// If an operator is already pending it is applied first, and its result
    /// becomes the left operand of `op`.
    pub fn input_operator(&mut self, op: Operator) {
        let value = parse_numeral(&self.state.current_input);

        match (self.state.previous_operand, self.state.pending_operator) {
            (None, _) => {
                self.state.previous_operand = Some(value);
            }
            (Some(previous), Some(pending)) => {
                let left = if previous.is_nan() { 0.0 } else { previous };
                let result = pending.apply(left, value);
                debug!(left, right = value, op = %pending, result, "applied pending operator");
                self.state.current_input = numeral_string(result);
                self.state.previous_operand = Some(result);
            }
            (Some(_), None) => {}
        }

        self.state.waiting_for_operand = true;
        self.state.pending_operator = Some(op);
        self.notify_state();
    }

    /// Press a function key by name.
    ///
    /// Unknown names leave the engine untouched.
    pub fn apply_function(&mut self, name: &str) {
        match Function::from_name(name) {
            Some(function) => self.apply_unary(function),
            None => debug!(name, "ignoring unsupported function"),
        }
    }

    /// Apply a unary function to the numeral under edit and record it.
    pub fn apply_unary(&mut self, function: Function) {
        let value = parse_numeral(&self.state.current_input);
        let result = function.apply(value);

        self.state.current_input = numeral_string(result);
        self.record_history(
            format!("{}({})", function, numeral_string(value)),
            format_for_display(result),
        );
        self.notify_state();
    }

    /// Complete the pending operation, if any, and record it.
    pub fn equals(&mut self) {
        let (Some(previous), Some(op)) = (self.state.previous_operand, self.state.pending_operator)
        else {
            trace!("equals with nothing pending");
            return;
        };

        let value = parse_numeral(&self.state.current_input);
        let result = op.apply(previous, value);
        debug!(left = previous, right = value, %op, result, "evaluated");

        self.record_history(
            format!("{} {} {}", numeral_string(previous), op, numeral_string(value)),
            format_for_display(result),
        );

        self.state.current_input = numeral_string(result);
        self.state.previous_operand = None;
        self.state.pending_operator = None;
        self.state.waiting_for_operand = true;
        self.notify_state();
    }

    /// Reset every field to the initial state. History is kept.
    pub fn clear(&mut self) {
        self.state = EngineState::default();
        self.notify_state();
    }

    /// Reset only the numeral under edit.
    pub fn clear_entry(&mut self) {
        self.state.current_input = "0".to_string();
        self.notify_state();
    }

    /// Remove the last character of the numeral under edit.
    pub fn backspace(&mut self) {
        self.state.current_input.pop();
        if self.state.current_input.is_empty() {
            self.state.current_input = "0".to_string();
        }
        self.notify_state();
    }

    /// Prepend a history entry, evicting the oldest beyond capacity.
    pub fn record_history(&mut self, label: impl Into<String>, result: impl Into<String>) {
        let entry = HistoryEntry::new(label, result);
        self.history = self.history.record(entry.clone());
        self.notify(&EngineEvent::HistoryRecorded(entry));
    }

    /// Record a failure message under the `"Error"` label.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.record_history(HistoryEntry::ERROR_LABEL, message);
    }

    fn notify_state(&self) {
        if self.subscribers.is_empty() {
            return;
        }
        self.notify(&EngineEvent::StateChanged(self.snapshot()));
    }

    fn notify(&self, event: &EngineEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}
