//! Saving and restoring program states.
//!
//! Snapshots let callers seed an evaluation with a stored state or keep
//! the final state of a run. Two encodings are offered: JSON for
//! readability and bincode for compactness. Loading checks the format
//! version and every binding name before handing the state back.

use crate::core::{is_identifier, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// A state captured at a point in time.
///
/// # Example
///
/// ```rust
/// use whilesem::snapshot::Snapshot;
/// use whilesem::state;
///
/// let snapshot = Snapshot::capture(&state! { "x" => 3, "done" => true });
///
/// let json = snapshot.to_json().unwrap();
/// let restored = Snapshot::from_json(&json).unwrap();
/// assert_eq!(restored.state, snapshot.state);
///
/// let bytes = snapshot.to_bytes().unwrap();
/// let restored = Snapshot::from_bytes(&bytes).unwrap();
/// assert_eq!(restored.id, snapshot.id);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// The captured bindings
    pub state: State,
}

impl Snapshot {
    /// Capture `state` under a fresh identifier.
    ///
    /// States share their bindings, so capturing is cheap and the
    /// snapshot is unaffected by anything derived from `state` later.
    pub fn capture(state: &State) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            state: state.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.checked()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.checked()
    }

    fn checked(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        match validate_names(&self.state) {
            Validation::Success(_) => {
                debug!(id = %self.id, bindings = self.state.len(), "snapshot loaded");
                Ok(self)
            }
            Validation::Failure(invalid) => {
                let names: Vec<String> = invalid.iter().map(|name| format!("'{name}'")).collect();
                Err(SnapshotError::ValidationFailed(format!(
                    "invalid variable names: {}",
                    names.join(", ")
                )))
            }
        }
    }
}

/// Check every binding name, collecting ALL that are not identifiers.
pub fn validate_names(state: &State) -> Validation<(), NonEmptyVec<String>> {
    let checks: Vec<Validation<(), NonEmptyVec<String>>> = state
        .names()
        .map(|name| {
            if is_identifier(name) {
                Validation::success(())
            } else {
                Validation::fail(name.to_string())
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;
    use crate::state;

    #[test]
    fn capture_copies_current_bindings() {
        let state = state! { "x" => 1 };
        let snapshot = Snapshot::capture(&state);
        let later = state.update("x", Value::Int(2));

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.state.lookup("x").unwrap(), &Value::Int(1));
        assert_eq!(later.lookup("x").unwrap(), &Value::Int(2));
    }

    #[test]
    fn captures_get_distinct_ids() {
        let state = State::new();
        assert_ne!(Snapshot::capture(&state).id, Snapshot::capture(&state).id);
    }

    #[test]
    fn json_round_trip_preserves_everything() {
        let snapshot = Snapshot::capture(&state! { "n" => -4, "ok" => false });
        let restored = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn binary_round_trip_preserves_everything() {
        let snapshot = Snapshot::capture(&state! { "n" => 42 });
        let restored = Snapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut snapshot = Snapshot::capture(&State::new());
        snapshot.version = SNAPSHOT_VERSION + 1;
        let json = snapshot.to_json().unwrap();

        match Snapshot::from_json(&json) {
            Err(SnapshotError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, SNAPSHOT_VERSION + 1);
                assert_eq!(supported, SNAPSHOT_VERSION);
            }
            other => panic!("Expected unsupported version, got {other:?}"),
        }
    }

    #[test]
    fn invalid_names_are_all_reported() {
        let state = state! { "ok" => 1, "1bad" => 2, "also bad" => 3 };
        let json = Snapshot::capture(&state).to_json().unwrap();

        match Snapshot::from_json(&json) {
            Err(SnapshotError::ValidationFailed(message)) => {
                assert!(message.contains("'1bad'"));
                assert!(message.contains("'also bad'"));
                assert!(!message.contains("'ok'"));
            }
            other => panic!("Expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn validate_names_accepts_identifiers() {
        assert!(validate_names(&state! { "x" => 1, "_y2" => true }).is_success());
        assert!(validate_names(&State::new()).is_success());
    }

    #[test]
    fn malformed_input_is_a_deserialization_error() {
        assert!(matches!(
            Snapshot::from_json("{not json"),
            Err(SnapshotError::DeserializationFailed(_))
        ));
        assert!(matches!(
            Snapshot::from_bytes(&[1, 2, 3]),
            Err(SnapshotError::DeserializationFailed(_))
        ));
    }
}
