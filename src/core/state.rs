//! Engine state and the phase view derived from it.

use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Fields driving the keypad state machine.
///
/// The machine's states are implicit in these fields; [`Phase`] gives them
/// names for display and diagnostics.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EngineState {
    /// Numeral under edit, as typed
    pub current_input: String,
    /// Left operand of the operation in flight
    pub previous_operand: Option<f64>,
    /// Operator awaiting its second operand
    pub pending_operator: Option<Operator>,
    /// The next digit starts a fresh numeral instead of extending this one
    pub waiting_for_operand: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            current_input: "0".to_string(),
            previous_operand: None,
            pending_operator: None,
            waiting_for_operand: false,
        }
    }
}

impl EngineState {
    pub fn phase(&self) -> Phase {
        match (self.waiting_for_operand, self.pending_operator) {
            (true, Some(_)) => Phase::OperatorPending,
            (true, None) => Phase::ResultShown,
            (false, _) if self.current_input == "0" && self.previous_operand.is_none() => {
                Phase::Idle
            }
            (false, _) => Phase::OperandEntered,
        }
    }

    /// Check the structural invariant: an operator is only pending while a
    /// left operand is recorded.
    pub fn is_consistent(&self) -> bool {
        self.pending_operator.is_none() || self.previous_operand.is_some()
    }
}

/// Named view of the keypad state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Fresh start, showing `0`
    Idle,
    /// A numeral is being typed
    OperandEntered,
    /// An operator was just pressed; the next digit starts the right operand
    OperatorPending,
    /// A result is showing; the next digit starts a new numeral
    ResultShown,
}

impl Phase {
    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::OperandEntered => "OperandEntered",
            Self::OperatorPending => "OperatorPending",
            Self::ResultShown => "ResultShown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        let state = EngineState::default();
        assert_eq!(state.current_input, "0");
        assert_eq!(state.previous_operand, None);
        assert_eq!(state.pending_operator, None);
        assert!(!state.waiting_for_operand);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn typing_is_operand_entered() {
        let state = EngineState {
            current_input: "12".to_string(),
            ..EngineState::default()
        };
        assert_eq!(state.phase(), Phase::OperandEntered);
    }

    #[test]
    fn waiting_with_operator_is_operator_pending() {
        let state = EngineState {
            current_input: "2".to_string(),
            previous_operand: Some(2.0),
            pending_operator: Some(Operator::Add),
            waiting_for_operand: true,
        };
        assert_eq!(state.phase(), Phase::OperatorPending);
        assert!(state.is_consistent());
    }

    #[test]
    fn waiting_without_operator_is_result_shown() {
        let state = EngineState {
            current_input: "5".to_string(),
            waiting_for_operand: true,
            ..EngineState::default()
        };
        assert_eq!(state.phase(), Phase::ResultShown);
    }

    #[test]
    fn operator_without_operand_is_inconsistent() {
        let state = EngineState {
            pending_operator: Some(Operator::Divide),
            ..EngineState::default()
        };
        assert!(!state.is_consistent());
    }

    #[test]
    fn phase_names_are_stable() {
        assert_eq!(Phase::Idle.name(), "Idle");
        assert_eq!(Phase::ResultShown.name(), "ResultShown");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = EngineState {
            current_input: "3".to_string(),
            previous_operand: Some(4.0),
            pending_operator: Some(Operator::Multiply),
            waiting_for_operand: false,
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
