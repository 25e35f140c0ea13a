//! Store configuration and on-disk locations.

use std::path::PathBuf;
use std::time::Duration;

/// Storage slot name shared by every store instance.
pub const STORAGE_KEY: &str = "medibot-storage";

/// Simulated network latency applied to each login attempt.
pub const LOGIN_DELAY: Duration = Duration::from_millis(800);

/// Wait before the fault-injection scenario raises its alert.
pub const FAULT_INJECTION_DELAY: Duration = Duration::from_secs(2);

/// Returns the medibot home directory (`~/.medibot`).
pub fn medibot_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(".medibot");
    }

    PathBuf::from(".medibot")
}

/// Tunables for one [`AppStore`](crate::app::AppStore).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoreConfig {
    /// Key of the persisted state slot.
    pub storage_key: String,
    pub login_delay: Duration,
    pub fault_injection_delay: Duration,
}

impl StoreConfig {
    /// Returns a config with every artificial delay removed.
    pub fn without_delays() -> Self {
        Self {
            login_delay: Duration::ZERO,
            fault_injection_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            login_delay: LOGIN_DELAY,
            fault_injection_delay: FAULT_INJECTION_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_demo_delays() {
        // Arrange & Act
        let config = StoreConfig::default();

        // Assert
        assert_eq!(config.storage_key, "medibot-storage");
        assert_eq!(config.login_delay, Duration::from_millis(800));
        assert_eq!(config.fault_injection_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_without_delays_keeps_storage_key() {
        // Arrange & Act
        let config = StoreConfig::without_delays();

        // Assert
        assert_eq!(config.storage_key, STORAGE_KEY);
        assert_eq!(config.login_delay, Duration::ZERO);
    }

    #[test]
    fn test_medibot_home_ends_with_dot_directory() {
        // Arrange & Act
        let home = medibot_home();

        // Assert
        assert!(home.ends_with(".medibot"));
    }
}
