//! The table-driven state machine engine.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, trace};

use super::event::Event;
use super::state::State;
use super::transition::Transition;

/// Callback invoked when a rule fires. Receives the executed transition.
pub(crate) type Callback<S, E> = Rc<dyn Fn(&Transition<S, E>)>;

/// A registered rule: the transition plus its reaction callback.
///
/// Owned exclusively by the registry and never exposed. The transition's
/// `from`/`event` always equal the registry keys the rule is stored under.
struct Rule<S: State, E: Event> {
    transition: Transition<S, E>,
    callback: Callback<S, E>,
}

/// Table-driven finite state machine.
///
/// The machine owns a two-level registry mapping (source state, event) pairs
/// to rules, plus the current state and the state it most recently left.
/// Rules are registered with [`listen`](Self::listen) and dispatched with
/// [`trigger`](Self::trigger); there is no compile or finalize phase, so
/// registration and dispatch may be freely interleaved.
///
/// The machine is single-threaded by design: all methods take `&self` through
/// interior mutability, callbacks run inline on the caller's thread, and no
/// internal locking exists. Because every registry borrow is released before
/// a callback runs, a callback may re-enter `trigger` (or `listen`) on the
/// same machine to chain a follow-up transition. Nothing guards against a
/// callback that re-triggers itself forever; bounding chains is the caller's
/// responsibility.
///
/// # Example
///
/// ```rust
/// use statemap::core::StateMachine;
/// use statemap::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// event_enum! {
///     enum Action {
///         Push,
///     }
/// }
///
/// let machine = StateMachine::new(Door::Closed);
/// machine.listen(Action::Push, Door::Closed, Door::Open, |_| {});
/// machine.listen(Action::Push, Door::Open, Door::Closed, |_| {});
///
/// assert!(machine.trigger(Action::Push));
/// assert_eq!(machine.current_state(), Door::Open);
/// assert_eq!(machine.last_state(), Some(Door::Closed));
/// ```
pub struct StateMachine<S: State, E: Event> {
    routes: RefCell<HashMap<S, HashMap<E, Rule<S, E>>>>,
    current: RefCell<S>,
    last: RefCell<Option<S>>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a new machine in the given initial state.
    ///
    /// The machine starts with an empty registry and no previous state.
    pub fn new(initial: S) -> Self {
        Self {
            routes: RefCell::new(HashMap::new()),
            current: RefCell::new(initial),
            last: RefCell::new(None),
        }
    }

    /// Register a rule: when `event` arrives while the machine is in `from`,
    /// run `callback` and move to `to`.
    ///
    /// Registering a second rule for the same (`from`, `event`) pair silently
    /// replaces the first; the last registration wins. `from` and `to` may be
    /// equal — a self-transition fires its callback and updates
    /// [`last_state`](Self::last_state) like any other transition.
    pub fn listen<F>(&self, event: E, from: S, to: S, callback: F)
    where
        F: Fn(&Transition<S, E>) + 'static,
    {
        self.listen_rule(event, from, to, Rc::new(callback));
    }

    /// Register the same rule from several source states at once.
    ///
    /// Equivalent to calling [`listen`](Self::listen) once per source state
    /// with the same event, destination, and callback. Each source state gets
    /// its own registry slot, so registration order across the sequence has
    /// no observable effect.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statemap::core::StateMachine;
    /// use statemap::{event_enum, state_enum};
    ///
    /// state_enum! {
    ///     enum Phase {
    ///         Idle,
    ///         Work,
    ///         Rest,
    ///     }
    /// }
    ///
    /// event_enum! {
    ///     enum Signal {
    ///         Reset,
    ///     }
    /// }
    ///
    /// let machine = StateMachine::new(Phase::Work);
    /// machine.listen_all(Signal::Reset, [Phase::Work, Phase::Rest], Phase::Idle, |_| {});
    ///
    /// assert!(machine.trigger(Signal::Reset));
    /// assert_eq!(machine.current_state(), Phase::Idle);
    /// ```
    pub fn listen_all<I, F>(&self, event: E, from_states: I, to: S, callback: F)
    where
        I: IntoIterator<Item = S>,
        F: Fn(&Transition<S, E>) + 'static,
    {
        let callback: Callback<S, E> = Rc::new(callback);
        for from in from_states {
            self.listen_rule(event.clone(), from, to.clone(), Rc::clone(&callback));
        }
    }

    pub(crate) fn listen_rule(&self, event: E, from: S, to: S, callback: Callback<S, E>) {
        trace!(
            from = from.name(),
            event = event.name(),
            to = to.name(),
            "rule registered"
        );
        let transition = Transition::new(event.clone(), from.clone(), to);
        self.routes
            .borrow_mut()
            .entry(from)
            .or_default()
            .insert(event, Rule { transition, callback });
    }

    /// Deliver an event to the machine.
    ///
    /// Looks up the rule for (current state, `event`). If one exists, its
    /// callback runs first — a read of [`current_state`](Self::current_state)
    /// from inside the callback still sees the pre-transition state — and the
    /// new state is committed afterwards. Returns `true` when a transition
    /// was committed.
    ///
    /// If no rule exists the trigger is silently ignored: no state change, no
    /// callback, and `false` is returned. Inapplicable events are routine for
    /// a state machine, so this is deliberately not an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statemap::core::StateMachine;
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
    ///         Finish,
    ///     }
    /// }
    ///
    /// let machine = StateMachine::new(Mode::Idle);
    /// machine.listen(Tick::Start, Mode::Idle, Mode::Work, |_| {});
    ///
    /// assert!(machine.trigger(Tick::Start));
    /// // Finish has no rule in Work: ignored.
    /// assert!(!machine.trigger(Tick::Finish));
    /// assert_eq!(machine.current_state(), Mode::Work);
    /// ```
    pub fn trigger(&self, event: E) -> bool {
        let (transition, callback) = {
            let routes = self.routes.borrow();
            let current = self.current.borrow();
            let Some(rule) = routes
                .get(&*current)
                .and_then(|by_event| by_event.get(&event))
            else {
                debug!(
                    state = current.name(),
                    event = event.name(),
                    "no rule for event, trigger ignored"
                );
                return false;
            };
            (rule.transition.clone(), Rc::clone(&rule.callback))
        };

        debug!(
            from = transition.from.name(),
            event = transition.event.name(),
            to = transition.to.name(),
            "transition"
        );

        // All borrows are released at this point, so the callback may
        // re-enter trigger() or listen() on this machine.
        (*callback)(&transition);

        // The previous state is read at commit time, not lookup time: if the
        // callback chained a nested trigger, its commit lands first and the
        // outer commit records the state that nested transition produced.
        let previous = self.current.replace(transition.to);
        *self.last.borrow_mut() = Some(previous);
        true
    }

    /// Whether a rule exists for (current state, `event`) without dispatching.
    pub fn can_trigger(&self, event: &E) -> bool {
        let routes = self.routes.borrow();
        let current = self.current.borrow();
        routes
            .get(&*current)
            .is_some_and(|by_event| by_event.contains_key(event))
    }

    /// Get the current state.
    pub fn current_state(&self) -> S {
        self.current.borrow().clone()
    }

    /// Get the state the machine most recently transitioned out of.
    ///
    /// `None` until the first successful transition. Once set, it always
    /// equals the state that was current immediately before the most recent
    /// commit; this is the only backwards-looking record the engine keeps.
    pub fn last_state(&self) -> Option<S> {
        self.last.borrow().clone()
    }

    /// Check if the machine is in a final state.
    pub fn is_final(&self) -> bool {
        self.current.borrow().is_final()
    }
}
