//! Builder for constructing state machines.

use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State};
use crate::engine::{StateMachine, Transition};
use tracing::debug;

/// Builder for assembling a state machine's transition table.
///
/// The machine is created up front in its initial state, bound to the
/// context. Transitions are appended in call order, which is the order
/// `fire` scans them. [`build`](Self::build) consumes the builder, so the
/// table cannot grow once the machine is handed out.
///
/// # Example
///
/// ```rust
/// use gated_fsm::{event_enum, state_enum, StateMachineBuilder};
///
/// state_enum! {
///     enum Door { Closed, Open, Locked }
/// }
///
/// event_enum! {
///     enum DoorEvent { Push, Lock }
/// }
///
/// struct Keyring {
///     has_key: bool,
/// }
///
/// let mut keys = Keyring { has_key: false };
/// let mut builder = StateMachineBuilder::new(Door::Closed, &mut keys);
/// builder
///     .external_transition()
///     .from(Door::Closed)
///     .to(Door::Open)
///     .on(DoorEvent::Push)
///     .build_transition()
///     .external_transition()
///     .from(Door::Closed)
///     .to(Door::Locked)
///     .on(DoorEvent::Lock)
///     .when(|k: &Keyring| k.has_key)
///     .build_transition();
/// let mut door = builder.build();
///
/// assert!(!door.fire(DoorEvent::Lock));
/// assert!(door.fire(DoorEvent::Push));
/// assert_eq!(door.current_state(), &Door::Open);
/// ```
pub struct StateMachineBuilder<'c, S: State, E: Event, C> {
    machine: StateMachine<'c, S, E, C>,
}

impl<'c, S: State, E: Event, C> StateMachineBuilder<'c, S, E, C> {
    /// Create a builder whose machine starts in `initial`, bound to `context`.
    pub fn new(initial: S, context: &'c mut C) -> Self {
        Self {
            machine: StateMachine::new(initial, context),
        }
    }

    /// Begin declaring a transition.
    pub fn external_transition(&mut self) -> TransitionBuilder<'_, 'c, S, E, C> {
        TransitionBuilder::new(self)
    }

    /// Append a pre-built transition.
    pub fn add_transition(&mut self, transition: Transition<S, E, C>) -> &mut Self {
        self.push(transition);
        self
    }

    /// Append several transitions, keeping their iteration order.
    pub fn transitions<I>(&mut self, transitions: I) -> &mut Self
    where
        I: IntoIterator<Item = Transition<S, E, C>>,
    {
        for transition in transitions {
            self.push(transition);
        }
        self
    }

    /// Number of transitions declared so far.
    pub fn transition_count(&self) -> usize {
        self.machine.transitions().len()
    }

    /// Finish assembly and hand out the machine.
    pub fn build(self) -> StateMachine<'c, S, E, C> {
        debug!(
            initial = self.machine.initial_state().name(),
            transitions = self.machine.transitions().len(),
            "state machine built"
        );
        self.machine
    }

    pub(crate) fn push(&mut self, transition: Transition<S, E, C>) {
        self.machine.add_transition(transition);
    }
}
