//! Fluent API for assembling transition tables.
//!
//! [`StateMachineBuilder`] creates the machine up front and accumulates
//! transitions; [`TransitionBuilder`] declares one transition and hands the
//! owning builder back when finished. The `state_enum!` and `event_enum!`
//! macros remove the boilerplate of implementing [`State`](crate::core::State)
//! and [`Event`](crate::core::Event).

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::{BuildError, MissingField};
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;
