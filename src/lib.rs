//! Statemap: a table-driven finite state machine library
//!
//! Statemap models a machine as a lookup table: each registered rule maps a
//! (source state, event) pair to a destination state and a callback. Delivering
//! an event with `trigger` looks up the rule for the current state, runs the
//! callback, and commits the new state. Events with no rule in the current
//! state are silently ignored — an inapplicable event is routine for a state
//! machine, not an error.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: closed, hashable key domains via the `State` and
//!   `Event` traits
//! - **Transition**: an immutable (event, from, to) record handed to callbacks
//! - **StateMachine**: the registry plus the current and previous state
//!
//! # Example
//!
//! ```rust
//! use statemap::core::{State, StateMachine};
//! use statemap::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Pomodoro {
//!         Idle,
//!         Work,
//!         ShortBreak,
//!     }
//! }
//!
//! event_enum! {
//!     enum Clock {
//!         StartWork,
//!         StartShortBreak,
//!     }
//! }
//!
//! let machine = StateMachine::new(Pomodoro::Idle);
//! machine.listen(Clock::StartWork, Pomodoro::Idle, Pomodoro::Work, |t| {
//!     println!("{} -> {}", t.from.name(), t.to.name());
//! });
//! machine.listen(Clock::StartShortBreak, Pomodoro::Work, Pomodoro::ShortBreak, |_| {});
//!
//! assert!(machine.trigger(Clock::StartWork));
//! assert_eq!(machine.current_state(), Pomodoro::Work);
//! assert_eq!(machine.last_state(), Some(Pomodoro::Idle));
//!
//! // No rule for Work + StartWork: ignored, nothing changes.
//! assert!(!machine.trigger(Clock::StartWork));
//! assert_eq!(machine.current_state(), Pomodoro::Work);
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::core::{Event, State, StateMachine, Transition};
