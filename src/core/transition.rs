//! The transition value object.

use super::event::Event;
use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single state transition.
///
/// A transition is an immutable value pairing a source state and event with a
/// destination state. It is purely descriptive: it carries no behavior, and
/// the engine hands a reference to it to the rule's callback when the rule
/// fires.
///
/// # Example
///
/// ```rust
/// use statemap::core::Transition;
/// use statemap::{event_enum, state_enum};
///
/// state_enum! {
///     enum TaskState {
///         Pending,
///         Running,
///     }
/// }
///
/// event_enum! {
///     enum TaskEvent {
///         Start,
///     }
/// }
///
/// let transition = Transition::new(TaskEvent::Start, TaskState::Pending, TaskState::Running);
/// assert_eq!(transition.from, TaskState::Pending);
/// assert_eq!(transition.to, TaskState::Running);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State, E: Event> {
    /// The event that fires the transition
    pub event: E,
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
}

impl<S: State, E: Event> Transition<S, E> {
    /// Create a new transition record.
    pub fn new(event: E, from: S, to: S) -> Self {
        Self { event, from, to }
    }

    /// Whether this transition leaves the machine in the state it started in.
    ///
    /// Self-transitions are ordinary transitions: they fire their callback and
    /// update the previous-state tracking like any other.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}
