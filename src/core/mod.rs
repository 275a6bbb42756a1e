//! Core state machine types and logic.
//!
//! This module contains the heart of the library:
//! - Key domains via the `State` and `Event` traits
//! - The `Transition` value object handed to callbacks
//! - The table-driven `StateMachine` engine
//!
//! The engine is deterministic and synchronous: `trigger` either finds a rule
//! and runs its callback inline, or is an immediate no-op.

mod event;
mod machine;
mod macros;
mod state;
mod transition;

pub use event::Event;
pub use machine::StateMachine;
pub use state::State;
pub use transition::Transition;
