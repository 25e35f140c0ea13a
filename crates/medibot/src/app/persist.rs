//! Serialization boundary between the live state and the storage slot.
//!
//! The slot holds `{"state": {...}, "version": N}` where `state` carries only
//! the persisted subset of [`AppState`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::app::state::AppState;
use crate::domain::alert::Alert;
use crate::domain::task::Task;
use crate::domain::user::User;
use crate::infra::storage::StateStorage;

/// Layout version written next to the persisted state.
pub const STORAGE_VERSION: u32 = 0;

/// Subset of [`AppState`] that survives a restart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub current_user: Option<User>,
    pub is_authenticated: bool,
    pub tasks: Vec<Task>,
    pub alerts: Vec<Alert>,
}

#[derive(Deserialize)]
struct PersistedEnvelope {
    state: PersistedState,
    version: u32,
}

/// Reason a stored slot was rejected.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed persisted state: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Unsupported persisted state version {found}")]
    UnsupportedVersion { found: u32 },
}

impl PersistedState {
    /// Projects the persisted fields out of `state`.
    pub fn from_state(state: &AppState) -> Self {
        Self {
            current_user: state.current_user.clone(),
            is_authenticated: state.is_authenticated,
            tasks: state.tasks.clone(),
            alerts: state.alerts.clone(),
        }
    }

    /// Overlays the persisted fields onto `defaults`, keeping every other
    /// field of `defaults` as is.
    pub fn merge_into(self, defaults: AppState) -> AppState {
        AppState {
            current_user: self.current_user,
            is_authenticated: self.is_authenticated,
            tasks: self.tasks,
            alerts: self.alerts,
            ..defaults
        }
    }

    /// Encodes the slot value, including the layout version.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        #[derive(Serialize)]
        struct EnvelopeRef<'a> {
            state: &'a PersistedState,
            version: u32,
        }

        serde_json::to_string(&EnvelopeRef {
            state: self,
            version: STORAGE_VERSION,
        })
    }

    /// Decodes one slot value written by [`PersistedState::to_json`].
    ///
    /// # Errors
    /// Returns an error if the value does not match the expected layout or
    /// carries a different version.
    pub fn from_json(raw: &str) -> Result<Self, DecodeError> {
        let envelope: PersistedEnvelope = serde_json::from_str(raw)?;
        if envelope.version != STORAGE_VERSION {
            return Err(DecodeError::UnsupportedVersion {
                found: envelope.version,
            });
        }

        Ok(envelope.state)
    }
}

/// Reads the persisted subset stored under `key`.
///
/// Any failure is logged and treated as an empty slot so the caller falls
/// back to seed defaults.
pub(crate) fn load(storage: &dyn StateStorage, key: &str) -> Option<PersistedState> {
    let raw = match storage.load(key) {
        Ok(raw) => raw?,
        Err(error) => {
            warn!(key, %error, "Failed to read persisted state, using seed data");

            return None;
        }
    };

    match PersistedState::from_json(&raw) {
        Ok(persisted) => Some(persisted),
        Err(error) => {
            warn!(key, %error, "Discarding persisted state, using seed data");

            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::NetworkStatus;
    use crate::error::StorageError;
    use crate::infra::storage::MockStateStorage;
    use crate::seed::SeedData;

    fn seeded_state() -> AppState {
        let seed = SeedData::new(1_000);

        AppState::from_seed(seed.robots, seed.tasks, seed.alerts)
    }

    #[test]
    fn test_from_state_then_merge_restores_persisted_fields_only() {
        // Arrange
        let mut state = seeded_state();
        state.is_authenticated = true;
        state.current_user = SeedData::new(0).users.into_iter().next();
        state.tasks.truncate(1);
        state.alerts[0].acknowledged = true;
        state.robots[0].battery = 5;
        state.is_simulation_running = true;
        state.network_status = NetworkStatus::Offline;
        let defaults = seeded_state();

        // Act
        let restored = PersistedState::from_state(&state).merge_into(defaults.clone());

        // Assert
        assert_eq!(restored.current_user, state.current_user);
        assert!(restored.is_authenticated);
        assert_eq!(restored.tasks, state.tasks);
        assert_eq!(restored.alerts, state.alerts);
        assert_eq!(restored.robots, defaults.robots);
        assert!(!restored.is_simulation_running);
        assert_eq!(restored.network_status, NetworkStatus::Online);
    }

    #[test]
    fn test_to_json_writes_versioned_camel_case_layout() {
        // Arrange
        let persisted = PersistedState::from_state(&seeded_state());

        // Act
        let json = persisted.to_json().expect("state should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        // Assert
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["currentUser"], serde_json::Value::Null);
        assert_eq!(value["state"]["isAuthenticated"], false);
        assert_eq!(value["state"]["tasks"][0]["id"], "task_001");
        assert_eq!(value["state"]["alerts"][1]["acknowledged"], true);
        assert!(value["state"].get("robots").is_none());
    }

    #[test]
    fn test_from_json_reads_back_encoded_state() {
        // Arrange
        let persisted = PersistedState::from_state(&seeded_state());
        let json = persisted.to_json().expect("state should serialize");

        // Act
        let decoded = PersistedState::from_json(&json).expect("state should decode");

        // Assert
        assert_eq!(decoded, persisted);
    }

    #[test]
    fn test_from_json_rejects_other_version() {
        // Arrange
        let raw = r#"{"state":{"currentUser":null,"isAuthenticated":false,"tasks":[],"alerts":[]},"version":3}"#;

        // Act
        let result = PersistedState::from_json(raw);

        // Assert
        assert!(matches!(
            result,
            Err(DecodeError::UnsupportedVersion { found: 3 })
        ));
    }

    #[test]
    fn test_from_json_rejects_missing_fields() {
        // Arrange
        let raw = r#"{"state":{"isAuthenticated":true},"version":0}"#;

        // Act
        let result = PersistedState::from_json(raw);

        // Assert
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_load_returns_none_for_garbage_slot() {
        // Arrange
        let mut storage = MockStateStorage::new();
        storage
            .expect_load()
            .withf(|key| key == "medibot-storage")
            .times(1)
            .returning(|_| Ok(Some("not json".to_string())));

        // Act
        let loaded = load(&storage, "medibot-storage");

        // Assert
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_load_returns_none_when_storage_fails() {
        // Arrange
        let mut storage = MockStateStorage::new();
        storage
            .expect_load()
            .times(1)
            .returning(|_| Err(StorageError::Unavailable("disk gone".to_string())));

        // Act
        let loaded = load(&storage, "medibot-storage");

        // Assert
        assert_eq!(loaded, None);
    }
}
