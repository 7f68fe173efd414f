//! Transition resolution and firing.
//!
//! A [`StateMachine`] owns an ordered table of [`Transition`]s and an
//! exclusive borrow of the caller's context. Firing an event is a
//! synchronous, first-match-wins scan of that table.

mod machine;
mod transition;

pub use machine::StateMachine;
pub use transition::Transition;
