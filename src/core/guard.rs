//! Guard predicates for controlling state transitions.
//!
//! Guards are boolean functions over the machine's context that decide
//! whether a candidate transition is eligible. They receive a shared
//! borrow, so they cannot mutate the context.

use std::fmt;
use std::sync::Arc;

/// Predicate over a context that decides whether a transition can fire.
///
/// Guards are reference-counted so a transition table can be cloned
/// without duplicating the closures.
///
/// # Example
///
/// ```rust
/// use gated_fsm::core::Guard;
///
/// struct Ticket {
///     approved: bool,
/// }
///
/// let is_approved = Guard::new(|t: &Ticket| t.approved);
///
/// assert!(is_approved.check(&Ticket { approved: true }));
/// assert!(!is_approved.check(&Ticket { approved: false }));
/// ```
pub struct Guard<C> {
    predicate: Arc<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate should be deterministic and side-effect free; the
    /// engine may evaluate it from [`can_fire`](crate::StateMachine::can_fire)
    /// as well as from `fire`. It must be `Send + Sync + 'static`, so it
    /// cannot capture `Rc`, `RefCell` or borrowed locals.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate against a context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C> Clone for Guard<C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
