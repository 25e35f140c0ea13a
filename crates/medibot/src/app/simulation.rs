//! Simulation and network flags plus scripted demo scenarios.
//!
//! Robot motion itself belongs to the presentation layer; the store only
//! holds the flags it reads and the events scenarios inject.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use super::AppStore;
use super::state::{DEFAULT_SIMULATION_SPEED, NetworkStatus};
use crate::domain::alert::{NewAlert, Severity};
use crate::domain::task::{NewTask, Payload, Priority};

/// Speed multipliers offered by the settings page.
pub const SIMULATION_SPEED_PRESETS: [f64; 4] = [0.5, 1.0, 2.0, 5.0];

pub const MIN_SIMULATION_SPEED: f64 = 0.1;
pub const MAX_SIMULATION_SPEED: f64 = 10.0;

/// Maps a requested multiplier into the supported range.
///
/// Finite values are clamped to
/// `[MIN_SIMULATION_SPEED, MAX_SIMULATION_SPEED]`; NaN and infinities fall
/// back to the default speed.
pub fn clamp_simulation_speed(speed: f64) -> f64 {
    if !speed.is_finite() {
        return DEFAULT_SIMULATION_SPEED;
    }

    speed.clamp(MIN_SIMULATION_SPEED, MAX_SIMULATION_SPEED)
}

/// Scripted demo run selectable from the simulation sandbox.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Scenario {
    Normal,
    HighPriority,
    FaultInjection,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Normal,
        Scenario::HighPriority,
        Scenario::FaultInjection,
    ];

    /// Returns the stable scenario identifier.
    pub fn id(self) -> &'static str {
        match self {
            Scenario::Normal => "normal",
            Scenario::HighPriority => "high_priority",
            Scenario::FaultInjection => "fault_injection",
        }
    }

    /// Returns the sandbox display name.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Normal => "Normal Day",
            Scenario::HighPriority => "High Priority Spike",
            Scenario::FaultInjection => "Fault Injection",
        }
    }

    /// Returns the one-line sandbox explanation.
    pub fn description(self) -> &'static str {
        match self {
            Scenario::Normal => "Typical hospital operations with steady task flow",
            Scenario::HighPriority => "Simulate surge of critical deliveries",
            Scenario::FaultInjection => "Inject random robot faults and obstacles",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.id() == s)
            .ok_or_else(|| format!("Unknown scenario: {s}"))
    }
}

impl AppStore {
    /// Marks the simulation as running.
    pub fn start_simulation(&self) {
        self.mutate("start_simulation", |state| {
            !std::mem::replace(&mut state.is_simulation_running, true)
        });
    }

    /// Marks the simulation as stopped.
    pub fn stop_simulation(&self) {
        self.mutate("stop_simulation", |state| {
            std::mem::replace(&mut state.is_simulation_running, false)
        });
    }

    /// Stores the simulation speed multiplier and returns the applied value
    /// (see [`clamp_simulation_speed`]).
    pub fn set_simulation_speed(&self, speed: f64) -> f64 {
        let applied = clamp_simulation_speed(speed);
        self.mutate("set_simulation_speed", |state| {
            let previous = std::mem::replace(&mut state.simulation_speed, applied);

            previous.to_bits() != applied.to_bits()
        });

        applied
    }

    /// Stores the simulated connectivity level.
    pub fn set_network_status(&self, status: NetworkStatus) {
        self.mutate("set_network_status", |state| {
            std::mem::replace(&mut state.network_status, status) != status
        });
    }

    /// Starts the simulation and injects the scenario's scripted events.
    ///
    /// Fault injection raises its alert after `config.fault_injection_delay`
    /// whether or not the simulation has been stopped meanwhile.
    pub async fn run_scenario(&self, scenario: Scenario) {
        self.start_simulation();
        info!(scenario = scenario.id(), "Started simulation scenario");

        match scenario {
            Scenario::Normal => {}
            Scenario::HighPriority => {
                self.add_task(NewTask {
                    requester_id: "u_clinician".to_string(),
                    from_zone: "Pharmacy".to_string(),
                    to_zone: "ICU".to_string(),
                    priority: Priority::Critical,
                    payload: Payload::Medication,
                    notes: Some("Emergency cardiac medication".to_string()),
                    ..NewTask::default()
                });
            }
            Scenario::FaultInjection => {
                tokio::time::sleep(self.config.fault_injection_delay).await;
                self.add_alert(NewAlert {
                    robot_id: "robot_R07".to_string(),
                    severity: Severity::Warning,
                    message: "Wheel slip detected in Corridor C".to_string(),
                });
            }
        }
    }
}
