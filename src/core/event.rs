//! Core Event trait for state machine events.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine events.
///
/// An event is an external stimulus drawn from a closed, application-defined
/// set. Like states, events are opaque keys: the engine hashes and compares
/// them but attaches no meaning beyond registry lookup.
///
/// # Example
///
/// ```rust
/// use statemap::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Stimulus {
///     Start,
///     Stop,
/// }
///
/// impl Event for Stimulus {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "Start",
///             Self::Stop => "Stop",
///         }
///     }
/// }
/// ```
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Start,
        Stop,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Stop => "Stop",
            }
        }
    }

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(TestEvent::Start.name(), "Start");
        assert_eq!(TestEvent::Stop.name(), "Stop");
    }

    #[test]
    fn event_is_usable_as_map_key() {
        let mut map = HashMap::new();
        map.insert(TestEvent::Start, "go");
        map.insert(TestEvent::Start, "go again");

        assert_eq!(map.len(), 1);
        assert_eq!(map[&TestEvent::Start], "go again");
    }

    #[test]
    fn event_serializes_correctly() {
        let event = TestEvent::Stop;
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: TestEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
