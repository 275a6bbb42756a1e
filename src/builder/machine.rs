//! Builder for constructing state machines.

use std::rc::Rc;

use crate::builder::error::BuildError;
use crate::core::{Event, State, StateMachine, Transition};

type Callback<S, E> = Rc<dyn Fn(&Transition<S, E>)>;

struct PendingRule<S: State, E: Event> {
    event: E,
    from: S,
    to: S,
    callback: Callback<S, E>,
}

/// Builder for constructing state machines with a fluent API.
///
/// Rules are optional: a machine with an empty table is legal (every trigger
/// is a no-op) and can have rules registered later through
/// [`listen`](StateMachine::listen). Only the initial state is required.
///
/// # Example
///
/// ```rust
/// use statemap::builder::StateMachineBuilder;
/// use statemap::{event_enum, state_enum};
///
/// state_enum! {
///     enum Mode {
///         Idle,
///         Work,
///     }
/// }
///
/// event_enum! {
///     enum Tick {
///         Start,
///         Stop,
///     }
/// }
///
/// let machine = StateMachineBuilder::new()
///     .initial(Mode::Idle)
///     .rule(Tick::Start, Mode::Idle, Mode::Work, |_| {})
///     .rule(Tick::Stop, Mode::Work, Mode::Idle, |_| {})
///     .build()
///     .unwrap();
///
/// assert!(machine.trigger(Tick::Start));
/// assert_eq!(machine.current_state(), Mode::Work);
/// ```
pub struct StateMachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    rules: Vec<PendingRule<S, E>>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            rules: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Queue a rule registration.
    pub fn rule<F>(mut self, event: E, from: S, to: S, callback: F) -> Self
    where
        F: Fn(&Transition<S, E>) + 'static,
    {
        self.rules.push(PendingRule {
            event,
            from,
            to,
            callback: Rc::new(callback),
        });
        self
    }

    /// Queue the same rule from several source states, sharing one callback.
    pub fn rules<I, F>(mut self, event: E, from_states: I, to: S, callback: F) -> Self
    where
        I: IntoIterator<Item = S>,
        F: Fn(&Transition<S, E>) + 'static,
    {
        let callback: Callback<S, E> = Rc::new(callback);
        for from in from_states {
            self.rules.push(PendingRule {
                event: event.clone(),
                from,
                to: to.clone(),
                callback: Rc::clone(&callback),
            });
        }
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let machine = StateMachine::new(initial);
        for rule in self.rules {
            machine.listen_rule(rule.event, rule.from, rule.to, rule.callback);
        }

        Ok(machine)
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::cell::Cell;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Work,
        Rest,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Work => "Work",
                Self::Rest => "Rest",
            }
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Start,
        Reset,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Reset => "Reset",
            }
        }
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = StateMachineBuilder::<TestState, TestEvent>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_allows_empty_rule_table() {
        let machine = StateMachineBuilder::<TestState, TestEvent>::new()
            .initial(TestState::Idle)
            .build()
            .unwrap();

        assert!(!machine.trigger(TestEvent::Start));
        assert_eq!(machine.current_state(), TestState::Idle);
    }

    #[test]
    fn fluent_api_builds_dispatching_machine() {
        let machine = StateMachineBuilder::new()
            .initial(TestState::Idle)
            .rule(TestEvent::Start, TestState::Idle, TestState::Work, |_| {})
            .rule(TestEvent::Reset, TestState::Work, TestState::Idle, |_| {})
            .build()
            .unwrap();

        assert!(machine.trigger(TestEvent::Start));
        assert_eq!(machine.current_state(), TestState::Work);
        assert_eq!(machine.last_state(), Some(TestState::Idle));
    }

    #[test]
    fn batch_rules_share_one_callback() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let machine = StateMachineBuilder::new()
            .initial(TestState::Work)
            .rules(
                TestEvent::Reset,
                [TestState::Work, TestState::Rest],
                TestState::Idle,
                move |_| counter.set(counter.get() + 1),
            )
            .build()
            .unwrap();

        assert!(machine.trigger(TestEvent::Reset));
        assert_eq!(machine.current_state(), TestState::Idle);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn build_replays_registrations_in_order() {
        // Two rules for the same key: the later one must win, exactly as with
        // direct listen calls.
        let machine = StateMachineBuilder::new()
            .initial(TestState::Idle)
            .rule(TestEvent::Start, TestState::Idle, TestState::Rest, |_| {})
            .rule(TestEvent::Start, TestState::Idle, TestState::Work, |_| {})
            .build()
            .unwrap();

        assert!(machine.trigger(TestEvent::Start));
        assert_eq!(machine.current_state(), TestState::Work);
    }
}
