//! State machine that resolves and fires transitions.

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{Event, State, StateHistory, StateTransition};
use crate::engine::transition::Transition;
use chrono::Utc;
use tracing::{debug, info};

/// A finite state machine bound to a caller-owned context.
///
/// The machine holds an exclusive borrow of the context for its whole
/// lifetime; guards read it and actions mutate it during [`fire`](Self::fire).
/// Machines are assembled with [`StateMachineBuilder`](crate::StateMachineBuilder).
pub struct StateMachine<'c, S: State, E: Event, C> {
    initial: S,
    current: S,
    transitions: Vec<Transition<S, E, C>>,
    context: &'c mut C,
    history: StateHistory<S, E>,
}

impl<'c, S: State, E: Event, C> StateMachine<'c, S, E, C> {
    pub(crate) fn new(initial: S, context: &'c mut C) -> Self {
        Self {
            current: initial.clone(),
            initial,
            transitions: Vec::new(),
            context,
            history: StateHistory::new(),
        }
    }

    pub(crate) fn add_transition(&mut self, transition: Transition<S, E, C>) {
        self.transitions.push(transition);
    }

    /// Offer an event to the machine.
    ///
    /// Scans transitions in declaration order and takes the first one whose
    /// source state and event match and whose guard (if any) accepts the
    /// context. Its action runs before the state changes. Returns `false`
    /// without side effects when nothing is eligible.
    ///
    /// Panics raised by guards or actions propagate unchanged; the state is
    /// only advanced after the action returns.
    pub fn fire(&mut self, event: E) -> bool {
        let Some(index) = self.select(&event) else {
            debug!(
                state = self.current.name(),
                event = event.name(),
                "no eligible transition"
            );
            return false;
        };

        let transition = &self.transitions[index];
        if let Some(action) = &transition.action {
            action.run(&mut *self.context);
        }

        debug!(
            from = self.current.name(),
            to = transition.to.name(),
            event = event.name(),
            "transition fired"
        );

        let record = StateTransition {
            from: self.current.clone(),
            to: transition.to.clone(),
            event,
            timestamp: Utc::now(),
        };
        self.current = transition.to.clone();
        self.history.push(record);
        true
    }

    /// Check whether `event` would fire from the current state (pure).
    ///
    /// Guards are evaluated; actions are not run.
    pub fn can_fire(&self, event: &E) -> bool {
        self.select(event).is_some()
    }

    fn select(&self, event: &E) -> Option<usize> {
        self.transitions
            .iter()
            .position(|t| t.accepts(&self.current, event, &*self.context))
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// State the machine was built with.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Declared transitions, in declaration order.
    pub fn transitions(&self) -> &[Transition<S, E, C>] {
        &self.transitions
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    /// Shared access to the bound context.
    pub fn context(&self) -> &C {
        &*self.context
    }

    /// Mutable access to the bound context between fires.
    pub fn context_mut(&mut self) -> &mut C {
        &mut *self.context
    }

    /// Snapshot the machine's position and history.
    ///
    /// Transitions, guards, actions and the context are not captured.
    pub fn checkpoint(&self) -> Checkpoint<S, E> {
        Checkpoint::new(
            self.initial.clone(),
            self.current.clone(),
            self.history.clone(),
        )
    }

    /// Move the machine to the position recorded in `checkpoint`.
    ///
    /// The checkpoint must come from a machine with the same initial state.
    pub fn restore(&mut self, checkpoint: Checkpoint<S, E>) -> Result<(), CheckpointError> {
        checkpoint.validate()?;

        if checkpoint.initial_state != self.initial {
            return Err(CheckpointError::ValidationFailed(format!(
                "checkpoint starts in '{}' but machine starts in '{}'",
                checkpoint.initial_state.name(),
                self.initial.name()
            )));
        }

        info!(
            checkpoint = %checkpoint.id,
            state = checkpoint.current_state.name(),
            transitions = checkpoint.history.len(),
            "restored machine from checkpoint"
        );

        self.current = checkpoint.current_state;
        self.history = checkpoint.history;
        Ok(())
    }
}
