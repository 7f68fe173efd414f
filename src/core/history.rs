//! Fired-transition history.
//!
//! Every successful `fire` appends one record in place. Outside the
//! machine, `record` is the functional form and returns a new history.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single fired transition.
///
/// # Example
///
/// ```rust
/// use gated_fsm::core::StateTransition;
/// use gated_fsm::{event_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Door { Closed, Open }
/// }
///
/// event_enum! {
///     enum DoorEvent { Push }
/// }
///
/// let record = StateTransition {
///     from: Door::Closed,
///     to: Door::Open,
///     event: DoorEvent::Push,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, Door::Open);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, E: Event> {
    /// The state the machine was in when the event fired
    pub from: S,
    /// The state the machine moved to
    pub to: S,
    /// The event that triggered the transition
    pub event: E,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of fired transitions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, E: Event> {
    transitions: Vec<StateTransition<S, E>>,
}

impl<S: State, E: Event> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S, E>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    pub(crate) fn push(&mut self, transition: StateTransition<S, E>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` of the first record followed by the `to` of every
    /// record. Empty when nothing has fired.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gated_fsm::core::{StateHistory, StateTransition};
    /// use gated_fsm::{event_enum, state_enum};
    /// use chrono::Utc;
    ///
    /// state_enum! {
    ///     enum Phase { One, Two, Three }
    /// }
    ///
    /// event_enum! {
    ///     enum Step { Next }
    /// }
    ///
    /// let history = StateHistory::new()
    ///     .record(StateTransition {
    ///         from: Phase::One,
    ///         to: Phase::Two,
    ///         event: Step::Next,
    ///         timestamp: Utc::now(),
    ///     })
    ///     .record(StateTransition {
    ///         from: Phase::Two,
    ///         to: Phase::Three,
    ///         event: Step::Next,
    ///         timestamp: Utc::now(),
    ///     });
    ///
    /// assert_eq!(history.get_path(), vec![&Phase::One, &Phase::Two, &Phase::Three]);
    /// ```
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Events that fired, in order.
    pub fn events(&self) -> Vec<&E> {
        self.transitions.iter().map(|t| &t.event).collect()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions. A clock that stepped
    /// backwards between the first and last record yields `Duration::ZERO`.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        let elapsed = last.timestamp.signed_duration_since(first.timestamp);
        Some(elapsed.to_std().unwrap_or(Duration::ZERO))
    }

    /// The most recent record, if any.
    pub fn last(&self) -> Option<&StateTransition<S, E>> {
        self.transitions.last()
    }

    /// Get all transitions in the order they fired.
    pub fn transitions(&self) -> &[StateTransition<S, E>] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether nothing has fired yet.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
