use std::fmt;

use crate::domain::alert::Alert;
use crate::domain::robot::Robot;
use crate::domain::task::{Task, TaskFilter};
use crate::domain::user::User;

/// Simulation speed applied to a fresh store.
pub const DEFAULT_SIMULATION_SPEED: f64 = 1.0;

/// Simulated connectivity level consumed by the presentation layer.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum NetworkStatus {
    #[default]
    Online,
    Degraded,
    Offline,
}

impl NetworkStatus {
    /// Every status in the order the settings page lists them.
    pub const ALL: [NetworkStatus; 3] = [
        NetworkStatus::Online,
        NetworkStatus::Degraded,
        NetworkStatus::Offline,
    ];

    /// Returns the wire name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkStatus::Online => "online",
            NetworkStatus::Degraded => "degraded",
            NetworkStatus::Offline => "offline",
        }
    }

    /// Returns the settings-page label.
    pub fn label(self) -> &'static str {
        match self {
            NetworkStatus::Online => "Online",
            NetworkStatus::Degraded => "Degraded",
            NetworkStatus::Offline => "Offline",
        }
    }

    /// Returns the settings-page explanation.
    pub fn description(self) -> &'static str {
        match self {
            NetworkStatus::Online => "Normal operation",
            NetworkStatus::Degraded => "High latency, packet loss",
            NetworkStatus::Offline => "No connection",
        }
    }
}

impl fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full mutable snapshot owned by the store.
///
/// Only `current_user`, `is_authenticated`, `tasks` and `alerts` survive a
/// restart; everything else resets to seed values.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub current_user: Option<User>,
    pub is_authenticated: bool,
    pub robots: Vec<Robot>,
    /// Newest first.
    pub tasks: Vec<Task>,
    /// Newest first.
    pub alerts: Vec<Alert>,
    pub is_simulation_running: bool,
    pub simulation_speed: f64,
    pub network_status: NetworkStatus,
}

impl AppState {
    /// Builds the logged-out default state around seeded collections.
    pub fn from_seed(robots: Vec<Robot>, tasks: Vec<Task>, alerts: Vec<Alert>) -> Self {
        Self {
            current_user: None,
            is_authenticated: false,
            robots,
            tasks,
            alerts,
            is_simulation_running: false,
            simulation_speed: DEFAULT_SIMULATION_SPEED,
            network_status: NetworkStatus::default(),
        }
    }

    /// Looks up one robot by id.
    pub fn robot(&self, id: &str) -> Option<&Robot> {
        self.robots.iter().find(|robot| robot.id == id)
    }

    /// Looks up one task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Looks up one alert by id.
    pub fn alert(&self, id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.id == id)
    }

    /// Returns up to `limit` tasks that are neither completed nor cancelled,
    /// newest first.
    pub fn open_tasks(&self, limit: usize) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(|task| !task.status.is_terminal())
            .take(limit)
    }

    /// Returns the tasks that pass `filter`, preserving collection order.
    pub fn filtered_tasks<'a>(&'a self, filter: &'a TaskFilter) -> impl Iterator<Item = &'a Task> {
        self.tasks.iter().filter(move |task| filter.matches(task))
    }

    pub fn robots_on_floor(&self, floor: i32) -> impl Iterator<Item = &Robot> {
        self.robots.iter().filter(move |robot| robot.floor == floor)
    }

    pub fn unacknowledged_alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|alert| !alert.acknowledged)
    }

    /// Returns alerts in review order: unacknowledged first, then newest
    /// timestamp first within each group.
    pub fn alerts_for_review(&self) -> Vec<&Alert> {
        let mut alerts: Vec<&Alert> = self.alerts.iter().collect();
        alerts.sort_by(|left, right| {
            left.acknowledged
                .cmp(&right.acknowledged)
                .then_with(|| right.timestamp.cmp(&left.timestamp))
        });

        alerts
    }
}
