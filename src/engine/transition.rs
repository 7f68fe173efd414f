//! Declarative transition records.

use crate::core::{Action, Event, Guard, State};
use tracing::trace;

/// A rule mapping `(from, on)` to `to`, optionally gated by a guard and
/// paired with an action.
///
/// Transitions carry no validation: self-loops are allowed, and an absent
/// guard or action means "always eligible" and "no side effect".
pub struct Transition<S: State, E: Event, C> {
    pub from: S,
    pub to: S,
    pub on: E,
    pub guard: Option<Guard<C>>,
    pub action: Option<Action<C>>,
}

impl<S: State, E: Event, C> Transition<S, E, C> {
    /// Create an unguarded transition with no action.
    pub fn new(from: S, to: S, on: E) -> Self {
        Self {
            from,
            to,
            on,
            guard: None,
            action: None,
        }
    }

    /// Gate the transition on a predicate over the context.
    pub fn with_guard<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Run a procedure on the context when the transition fires.
    pub fn with_action<F>(mut self, procedure: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        self.action = Some(Action::new(procedure));
        self
    }

    /// Check if this transition is eligible for `event` in `current`.
    ///
    /// The guard is only evaluated once source state and event match.
    pub fn accepts(&self, current: &S, event: &E, context: &C) -> bool {
        if self.from != *current || self.on != *event {
            return false;
        }

        let eligible = self.guard.as_ref().is_none_or(|g| g.check(context));
        if !eligible {
            trace!(
                from = self.from.name(),
                to = self.to.name(),
                event = self.on.name(),
                "guard rejected candidate transition"
            );
        }
        eligible
    }
}

impl<S: State, E: Event, C> Clone for Transition<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            on: self.on.clone(),
            guard: self.guard.clone(),
            action: self.action.clone(),
        }
    }
}

impl<S: State, E: Event, C> std::fmt::Debug for Transition<S, E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("on", &self.on)
            .field("guarded", &self.guard.is_some())
            .field("has_action", &self.action.is_some())
            .finish()
    }
}
