//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait. States are plain
//! values: the engine compares them, hashes them as registry keys, and clones
//! them into transitions, but never interprets them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// A state is one value from a closed, application-defined set describing the
/// current mode of the modeled entity.
///
/// # Required Traits
///
/// - `Clone`: states are cloned into transitions and reads
/// - `Eq` + `Hash`: states are registry keys
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: transitions built from states are
///   serializable for diagnostics
///
/// # Example
///
/// ```rust
/// use statemap::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Complete => "Complete",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Complete)
///     }
/// }
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Purely informational: the engine treats a final state like any other
    /// and never blocks transitions out of one. If the application wants a
    /// terminal state, it simply registers no rules leaving it.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
