//! Read-only aggregates shown on the dashboard and fleet pages.

use super::state::AppState;
use crate::domain::task::TaskStatus;

/// Headline counters for the dashboard cards.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DashboardSummary {
    /// Robots that are idle or en route.
    pub active_robots: usize,
    pub total_robots: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
    pub unacknowledged_alerts: usize,
}

impl DashboardSummary {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            active_robots: state
                .robots
                .iter()
                .filter(|robot| robot.status.is_active())
                .count(),
            total_robots: state.robots.len(),
            completed_tasks: state
                .tasks
                .iter()
                .filter(|task| task.status == TaskStatus::Completed)
                .count(),
            in_progress_tasks: state
                .tasks
                .iter()
                .filter(|task| task.status == TaskStatus::InProgress)
                .count(),
            unacknowledged_alerts: state.unacknowledged_alerts().count(),
        }
    }
}

/// Online/offline split shown in the fleet header.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FleetSummary {
    pub online: usize,
    pub offline: usize,
}

impl FleetSummary {
    pub fn from_state(state: &AppState) -> Self {
        let online = state
            .robots
            .iter()
            .filter(|robot| robot.status.is_online())
            .count();

        Self {
            online,
            offline: state.robots.len() - online,
        }
    }
}
