//! LambdaCalc: a headless calculator engine
//!
//! The core is a keypad state machine: a stream of discrete actions
//! (digits, operators, function keys, clear and backspace) drives a running
//! computation with strictly left-to-right evaluation, and every completed
//! operation lands in a bounded, newest-first history.
//!
//! Matrix and calculus work is delegated to a remote service through the
//! [`remote`] client. Presentation is left to whatever subscribes to
//! engine notifications.
//!
//! # Core Concepts
//!
//! - **Calculator**: owns the engine state and history
//! - **Keypad**: maps keys and buttons to engine actions
//! - **Remote**: validated requests and their history outcomes
//! - **Preferences**: the persisted light/dark theme
//!
//! # Example
//!
//! ```rust
//! use lambdacalc::core::Calculator;
//! use lambdacalc::keypad::Action;
//!
//! let mut calc = Calculator::new();
//! for key in ["2", "+", "3", "*", "4", "="] {
//!     if let Some(action) = Action::from_key(key) {
//!         calc.dispatch(action);
//!     }
//! }
//!
//! assert_eq!(calc.display(), "20");
//! assert_eq!(calc.history().len(), 1);
//! ```

pub mod config;
pub mod core;
pub mod keypad;
pub mod preferences;
pub mod remote;

// Re-export commonly used types
pub use core::{Calculator, EngineEvent, EngineState, History, HistoryEntry, Operator, Phase};
pub use keypad::Action;
