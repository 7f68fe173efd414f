//! Checkpoint and resume support for state machines.
//!
//! A checkpoint captures where a machine is and how it got there, so a
//! process can rebuild the same transition table after a restart and
//! [`restore`](crate::StateMachine::restore) the position. Guards, actions
//! and the context are never serialized.

use crate::core::{Event, State, StateHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::{CheckpointError, Encoding};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine's position.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State, E: Event> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Initial state of the machine
    pub initial_state: S,

    /// Current state of the machine
    pub current_state: S,

    /// Fired transitions up to this point
    pub history: StateHistory<S, E>,
}

impl<S: State, E: Event> Checkpoint<S, E> {
    pub(crate) fn new(initial_state: S, current_state: S, history: StateHistory<S, E>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state,
            current_state,
            history,
        }
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::encode(Encoding::Json, e))
    }

    /// Decode from JSON, rejecting unsupported versions and inconsistent
    /// histories.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            serde_json::from_str(json).map_err(|e| CheckpointError::decode(Encoding::Json, e))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Encode with bincode.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::encode(Encoding::Binary, e))
    }

    /// Decode from bincode, with the same checks as [`from_json`](Self::from_json).
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::decode(Encoding::Binary, e))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check the version and that the history forms an unbroken path from
    /// the initial state to the current state.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let path = self.history.get_path();
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            if self.current_state != self.initial_state {
                return Err(CheckpointError::ValidationFailed(format!(
                    "no transitions recorded but current state '{}' differs from initial '{}'",
                    self.current_state.name(),
                    self.initial_state.name()
                )));
            }
            return Ok(());
        };

        if **first != self.initial_state {
            return Err(CheckpointError::ValidationFailed(format!(
                "history starts in '{}', expected initial state '{}'",
                first.name(),
                self.initial_state.name()
            )));
        }
        if **last != self.current_state {
            return Err(CheckpointError::ValidationFailed(format!(
                "history ends in '{}', expected current state '{}'",
                last.name(),
                self.current_state.name()
            )));
        }

        let records = self.history.transitions();
        if let Some(pair) = records.windows(2).find(|w| w[0].to != w[1].from) {
            return Err(CheckpointError::ValidationFailed(format!(
                "history jumps from '{}' to '{}'",
                pair[0].to.name(),
                pair[1].from.name()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateTransition;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Incomplete,
        Pending,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Incomplete => "Incomplete",
                Self::Pending => "Pending",
                Self::Complete => "Complete",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Submit,
        Approve,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Submit => "Submit",
                Self::Approve => "Approve",
            }
        }
    }

    fn record(
        from: TestState,
        to: TestState,
        event: TestEvent,
    ) -> StateTransition<TestState, TestEvent> {
        StateTransition {
            from,
            to,
            event,
            timestamp: Utc::now(),
        }
    }

    fn approved_checkpoint() -> Checkpoint<TestState, TestEvent> {
        let history = StateHistory::new()
            .record(record(
                TestState::Incomplete,
                TestState::Pending,
                TestEvent::Submit,
            ))
            .record(record(
                TestState::Pending,
                TestState::Complete,
                TestEvent::Approve,
            ));
        Checkpoint::new(TestState::Incomplete, TestState::Complete, history)
    }

    #[test]
    fn new_checkpoint_uses_current_version_and_unique_id() {
        let a = approved_checkpoint();
        let b = approved_checkpoint();

        assert_eq!(a.version, CHECKPOINT_VERSION);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_ne!(a.id, b.id);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn json_preserves_position_and_history() {
        let checkpoint = approved_checkpoint();

        let json = checkpoint.to_json().unwrap();
        let restored: Checkpoint<TestState, TestEvent> = Checkpoint::from_json(&json).unwrap();

        assert_eq!(restored.id, checkpoint.id);
        assert_eq!(restored.current_state, TestState::Complete);
        assert_eq!(
            restored.history.events(),
            vec![&TestEvent::Submit, &TestEvent::Approve]
        );
    }

    #[test]
    fn binary_preserves_position_and_history() {
        let checkpoint = approved_checkpoint();

        let bytes = checkpoint.to_binary().unwrap();
        let restored: Checkpoint<TestState, TestEvent> = Checkpoint::from_binary(&bytes).unwrap();

        assert_eq!(restored.initial_state, TestState::Incomplete);
        assert_eq!(restored.current_state, TestState::Complete);
        assert_eq!(restored.history.len(), 2);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut value = serde_json::to_value(approved_checkpoint()).unwrap();
        value["version"] = serde_json::json!(CHECKPOINT_VERSION + 1);

        let result = Checkpoint::<TestState, TestEvent>::from_json(&value.to_string());

        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { found, supported })
                if found == CHECKPOINT_VERSION + 1 && supported == CHECKPOINT_VERSION
        ));
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let result = Checkpoint::<TestState, TestEvent>::from_json("{\"version\": 1");
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed {
                encoding: Encoding::Json,
                ..
            })
        ));
    }

    #[test]
    fn truncated_binary_is_a_deserialization_error() {
        let bytes = approved_checkpoint().to_binary().unwrap();
        let result = Checkpoint::<TestState, TestEvent>::from_binary(&bytes[..bytes.len() / 2]);

        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed {
                encoding: Encoding::Binary,
                ..
            })
        ));
    }

    #[test]
    fn current_state_must_match_history_end() {
        let mut checkpoint = approved_checkpoint();
        checkpoint.current_state = TestState::Pending;

        assert!(matches!(
            checkpoint.validate(),
            Err(CheckpointError::ValidationFailed(_))
        ));
    }

    #[test]
    fn broken_history_chain_is_rejected() {
        let history = StateHistory::new()
            .record(record(
                TestState::Incomplete,
                TestState::Pending,
                TestEvent::Submit,
            ))
            .record(record(
                TestState::Incomplete,
                TestState::Complete,
                TestEvent::Approve,
            ));
        let checkpoint = Checkpoint::new(TestState::Incomplete, TestState::Complete, history);

        assert!(matches!(
            checkpoint.validate(),
            Err(CheckpointError::ValidationFailed(_))
        ));
    }

    #[test]
    fn empty_history_requires_initial_position() {
        let fresh: Checkpoint<TestState, TestEvent> =
            Checkpoint::new(TestState::Pending, TestState::Pending, StateHistory::new());
        assert!(fresh.validate().is_ok());

        let moved: Checkpoint<TestState, TestEvent> =
            Checkpoint::new(TestState::Pending, TestState::Complete, StateHistory::new());
        assert!(moved.validate().is_err());
    }
}
