//! Builder API for ergonomic state machine construction.
//!
//! [`StateMachine`](crate::core::StateMachine) needs no builder — it is live
//! as soon as it is constructed — but assembling the initial rule table in
//! one fluent expression often reads better than a run of `listen` calls.
//! The builder queues registrations and replays them in order at build time,
//! so overwrite-wins semantics are identical to registering directly.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
