//! Application store: the single mutable model shared by every screen.
//!
//! [`AppStore`] is constructed once by the host and passed to whatever owns
//! the UI tree. Reads go through [`AppStore::snapshot`] or a
//! [`AppStore::subscribe`] receiver; every applied mutation notifies
//! subscribers and rewrites the persisted subset of the state.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::domain::user::User;
use crate::infra::clock::Clock;
use crate::infra::storage::StateStorage;
use crate::seed::{ReferenceData, SeedData};

mod auth;
mod fleet;
pub mod persist;
mod simulation;
pub mod state;
pub mod summary;

pub use persist::PersistedState;
pub use simulation::{
    MAX_SIMULATION_SPEED, MIN_SIMULATION_SPEED, SIMULATION_SPEED_PRESETS, Scenario,
    clamp_simulation_speed,
};
pub use state::{AppState, NetworkStatus};
pub use summary::{DashboardSummary, FleetSummary};

/// Process-wide state container for the fleet dashboard.
pub struct AppStore {
    clock: Arc<dyn Clock>,
    config: StoreConfig,
    reference: Arc<ReferenceData>,
    state: watch::Sender<AppState>,
    storage: Arc<dyn StateStorage>,
    users: Vec<User>,
}

impl AppStore {
    /// Creates a store seeded at the current clock time, restoring the
    /// persisted subset from `storage` when a valid slot exists.
    pub fn new(config: StoreConfig, storage: Arc<dyn StateStorage>, clock: Arc<dyn Clock>) -> Self {
        let seed = SeedData::new(clock.now_millis());

        Self::with_seed(config, storage, clock, seed)
    }

    /// Creates a store from explicit seed data.
    pub fn with_seed(
        config: StoreConfig,
        storage: Arc<dyn StateStorage>,
        clock: Arc<dyn Clock>,
        seed: SeedData,
    ) -> Self {
        let SeedData {
            users,
            robots,
            tasks,
            alerts,
            reference,
        } = seed;
        let defaults = AppState::from_seed(robots, tasks, alerts);
        let initial_state = match persist::load(storage.as_ref(), &config.storage_key) {
            Some(persisted) => {
                debug!(key = %config.storage_key, "Restored persisted state");

                persisted.merge_into(defaults)
            }
            None => defaults,
        };
        let (state, _) = watch::channel(initial_state);

        Self {
            clock,
            config,
            reference: Arc::new(reference),
            state,
            storage,
            users,
        }
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Returns a receiver that observes every applied mutation.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    /// Returns the shared zone and model reference data.
    pub fn reference(&self) -> Arc<ReferenceData> {
        Arc::clone(&self.reference)
    }

    /// Returns the accounts known to `login`.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Empties the persisted slot. In-memory state is kept, so the next
    /// mutation writes the slot again.
    pub fn clear_persisted_state(&self) {
        match self.storage.remove(&self.config.storage_key) {
            Ok(()) => info!(key = %self.config.storage_key, "Cleared persisted state"),
            Err(error) => warn!(%error, "Failed to clear persisted state"),
        }
    }

    /// Applies `modify` and, when it reports a change, notifies subscribers
    /// and persists.
    fn mutate(&self, action: &'static str, modify: impl FnOnce(&mut AppState) -> bool) -> bool {
        let modified = self.state.send_if_modified(modify);
        if modified {
            debug!(action, "Applied store mutation");
            self.persist();
        }

        modified
    }

    /// Runs an id-addressed mutation.
    ///
    /// `modify` returns `None` when the target entity does not exist and
    /// `Some(changed)` otherwise. Returns whether the entity was found.
    fn mutate_entity(
        &self,
        action: &'static str,
        modify: impl FnOnce(&mut AppState) -> Option<bool>,
    ) -> bool {
        let mut found = false;
        self.mutate(action, |state| {
            let outcome = modify(state);
            found = outcome.is_some();

            outcome.unwrap_or(false)
        });

        found
    }

    fn persist(&self) {
        let encoded = {
            let state = self.state.borrow();

            PersistedState::from_state(&state).to_json()
        };

        let result = match encoded {
            Ok(value) => self.storage.save(&self.config.storage_key, &value),
            Err(error) => {
                warn!(%error, "Failed to encode store state");

                return;
            }
        };

        if let Err(error) = result {
            warn!(%error, "Failed to persist store state");
        }
    }
}
