//! State and Event traits for machine vocabularies.
//!
//! Both traits describe closed, caller-defined enumerations. The engine
//! only ever compares values with `PartialEq`; names exist for logging
//! and history inspection.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States are plain values that
/// describe the current position of a machine.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: transition matching is exact equality
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: history and checkpoints are serializable
///
/// # Example
///
/// ```rust
/// use gated_fsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum OrderState {
///     Open,
///     Paid,
///     Shipped,
/// }
///
/// impl State for OrderState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Paid => "Paid",
///             Self::Shipped => "Shipped",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Shipped)
///     }
/// }
///
/// assert!(OrderState::Shipped.is_final());
/// assert_eq!(OrderState::Open.name(), "Open");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Purely informational: the engine does not refuse to fire from a
    /// final state, it simply finds no transitions if none were declared.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Trait for the events offered to a machine.
///
/// # Example
///
/// ```rust
/// use gated_fsm::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum OrderEvent {
///     Pay,
///     Ship,
/// }
///
/// impl Event for OrderEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pay => "Pay",
///             Self::Ship => "Ship",
///         }
///     }
/// }
///
/// assert_eq!(OrderEvent::Ship.name(), "Ship");
/// ```
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}
