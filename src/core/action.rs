//! Side-effecting procedures run when a transition is taken.

use std::fmt;
use std::sync::Arc;

/// Procedure over a mutable context, executed when its transition fires.
///
/// Actions are the only code that mutates the context on the machine's
/// behalf. A panicking action unwinds through `fire` before the state is
/// updated.
///
/// # Example
///
/// ```rust
/// use gated_fsm::core::Action;
///
/// struct Ticket {
///     approved: bool,
/// }
///
/// let revoke = Action::new(|t: &mut Ticket| t.approved = false);
///
/// let mut ticket = Ticket { approved: true };
/// revoke.run(&mut ticket);
/// assert!(!ticket.approved);
/// ```
pub struct Action<C> {
    procedure: Arc<dyn Fn(&mut C) + Send + Sync>,
}

impl<C> Action<C> {
    /// Create an action from a closure.
    ///
    /// Like guards, the closure must be `Send + Sync + 'static`; keep
    /// mutable state in the context instead of capturing it.
    pub fn new<F>(procedure: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        Action {
            procedure: Arc::new(procedure),
        }
    }

    /// Run the action against a context.
    pub fn run(&self, context: &mut C) {
        (self.procedure)(context)
    }
}

impl<C> Clone for Action<C> {
    fn clone(&self) -> Self {
        Self {
            procedure: Arc::clone(&self.procedure),
        }
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}
