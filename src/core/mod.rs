//! Core vocabulary types.
//!
//! - `State` and `Event` traits for caller-defined enumerations
//! - `Guard` predicates and `Action` procedures over the context
//! - Immutable history of fired transitions

mod action;
mod guard;
mod history;
mod state;

pub use action::Action;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{Event, State};
