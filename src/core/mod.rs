//! Calculator engine core.
//!
//! This module contains the keypad state machine:
//! - Engine state and its derived phase
//! - Binary operators and unary functions
//! - Numeral parsing and display formatting
//! - The bounded, newest-first history
//!
//! Nothing here touches a rendering surface or the network; display
//! adapters observe the engine through [`EngineEvent`] notifications.

mod engine;
mod format;
mod history;
mod operator;
mod state;

pub use engine::{Calculator, DisplaySnapshot, EngineEvent, Subscriber};
pub use format::{
    exponential, format_for_display, format_numeral, numeral_string, parse_numeral,
    SCIENTIFIC_DIGITS, SCIENTIFIC_LOWER, SCIENTIFIC_UPPER,
};
pub use history::{History, HistoryEntry, HISTORY_CAPACITY};
pub use operator::{Function, Operator};
pub use state::{EngineState, Phase};
