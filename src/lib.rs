//! Gated FSM: an embeddable finite state machine.
//!
//! A machine is a fixed table of transitions keyed by (state, event), each
//! optionally gated by a guard over a caller-owned context and optionally
//! paired with an action that mutates it. Events are fired one at a time;
//! the first eligible transition in declaration order wins.
//!
//! # Core Concepts
//!
//! - **State / Event**: caller-defined enums implementing [`State`] and [`Event`]
//! - **Guard**: predicate over the context deciding if a transition is eligible
//! - **Action**: procedure over the context run when a transition fires
//! - **History**: record of fired transitions, checkpointable for resume
//!
//! # Example
//!
//! ```rust
//! use gated_fsm::{event_enum, state_enum, StateMachineBuilder};
//!
//! state_enum! {
//!     enum Review {
//!         Incomplete,
//!         Pending,
//!         Complete,
//!     }
//!     final: [Complete]
//! }
//!
//! event_enum! {
//!     enum ReviewEvent {
//!         Submit,
//!         Approve,
//!         Reject,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Form {
//!     title: Option<String>,
//!     approved: bool,
//! }
//!
//! let mut form = Form::default();
//! let mut builder = StateMachineBuilder::new(Review::Incomplete, &mut form);
//! builder
//!     .external_transition()
//!     .from(Review::Incomplete)
//!     .to(Review::Pending)
//!     .on(ReviewEvent::Submit)
//!     .when(|f: &Form| f.title.is_some())
//!     .build_transition()
//!     .external_transition()
//!     .from(Review::Pending)
//!     .to(Review::Complete)
//!     .on(ReviewEvent::Approve)
//!     .when(|f: &Form| f.approved)
//!     .build_transition()
//!     .external_transition()
//!     .from(Review::Pending)
//!     .to(Review::Incomplete)
//!     .on(ReviewEvent::Reject)
//!     .perform(|f: &mut Form| f.approved = false)
//!     .build_transition();
//! let mut machine = builder.build();
//!
//! assert!(!machine.fire(ReviewEvent::Submit));
//! machine.context_mut().title = Some("Quarterly report".to_string());
//! assert!(machine.fire(ReviewEvent::Submit));
//! assert_eq!(machine.current_state(), &Review::Pending);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use self::core::{Action, Event, Guard, State, StateHistory, StateTransition};
pub use engine::{StateMachine, Transition};
