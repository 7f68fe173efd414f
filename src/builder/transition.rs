//! Nested builder for declaring one transition.

use crate::builder::error::{describe, BuildError, MissingField};
use crate::builder::machine::StateMachineBuilder;
use crate::core::{Action, Event, Guard, State};
use crate::engine::Transition;
use stillwater::validation::{ValidateAll, Validation};
use stillwater::NonEmptyVec;
use tracing::warn;

/// Builder for one transition, scoped to its owning [`StateMachineBuilder`].
///
/// Obtained from [`StateMachineBuilder::external_transition`]. Setters can
/// be chained in any order; finishing with
/// [`build_transition`](Self::build_transition) appends the transition and
/// hands back the owning builder.
pub struct TransitionBuilder<'b, 'c, S: State, E: Event, C> {
    owner: &'b mut StateMachineBuilder<'c, S, E, C>,
    from: Option<S>,
    to: Option<S>,
    on: Option<E>,
    guard: Option<Guard<C>>,
    action: Option<Action<C>>,
}

impl<'b, 'c, S: State, E: Event, C> TransitionBuilder<'b, 'c, S, E, C> {
    pub(crate) fn new(owner: &'b mut StateMachineBuilder<'c, S, E, C>) -> Self {
        Self {
            owner,
            from: None,
            to: None,
            on: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state.
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state.
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the triggering event.
    pub fn on(mut self, event: E) -> Self {
        self.on = Some(event);
        self
    }

    /// Add a guard using a closure (optional).
    ///
    /// The closure must be `Send + Sync + 'static` so a built machine can
    /// move across threads: capture owned or `Arc`-shared data, not `Rc`,
    /// `RefCell` or borrowed locals. State the guard reads belongs in the
    /// context.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Add a prebuilt guard (optional).
    pub fn guard(mut self, guard: Guard<C>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Run a closure on the context when the transition fires (optional).
    ///
    /// Same capture rules as [`when`](Self::when); mutate the context
    /// rather than captured state.
    pub fn perform<F>(mut self, procedure: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        self.action = Some(Action::new(procedure));
        self
    }

    /// Add a prebuilt action (optional).
    pub fn action(mut self, action: Action<C>) -> Self {
        self.action = Some(action);
        self
    }

    /// Append the declared transition and return the owning builder.
    ///
    /// A declaration missing its source, target or event is not an error
    /// here: it is dropped as an inert transition that could never fire,
    /// and a warning is logged. Use
    /// [`try_build_transition`](Self::try_build_transition) to reject it.
    pub fn build_transition(self) -> &'b mut StateMachineBuilder<'c, S, E, C> {
        let (owner, declared) = self.finish();
        match declared {
            Ok(transition) => owner.push(transition),
            Err(missing) => warn!(
                missing = %describe(&missing),
                "incomplete transition declared; it will never fire"
            ),
        }
        owner
    }

    /// Append the declared transition, or report every missing field.
    ///
    /// Nothing is appended on failure.
    pub fn try_build_transition(
        self,
    ) -> Result<&'b mut StateMachineBuilder<'c, S, E, C>, BuildError> {
        let (owner, declared) = self.finish();
        let transition =
            declared.map_err(|missing| BuildError::IncompleteTransition { missing })?;
        owner.push(transition);
        Ok(owner)
    }

    fn finish(
        mut self,
    ) -> (
        &'b mut StateMachineBuilder<'c, S, E, C>,
        Result<Transition<S, E, C>, Vec<MissingField>>,
    ) {
        let declared = match self.check_declared() {
            Validation::Success((from, to, on)) => Ok(Transition {
                from,
                to,
                on,
                guard: self.guard,
                action: self.action,
            }),
            Validation::Failure(fields) => Err(fields.iter().copied().collect()),
        };

        (self.owner, declared)
    }

    /// Take the required fields, accumulating every missing one rather than
    /// stopping at the first.
    fn check_declared(&mut self) -> Validation<(S, S, E), NonEmptyVec<MissingField>> {
        let from = require(self.from.take(), MissingField::From);
        let to = require(self.to.take(), MissingField::To);
        let on = require(self.on.take(), MissingField::Event);

        (from, to, on).validate_all()
    }
}

fn require<T>(
    declared: Option<T>,
    field: MissingField,
) -> Validation<T, NonEmptyVec<MissingField>> {
    match declared {
        Some(value) => Validation::success(value),
        None => Validation::fail(field),
    }
}
