use std::fmt;

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Operational state reported by one delivery robot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Idle,
    EnRoute,
    Charging,
    Error,
    Offline,
}

impl RobotStatus {
    /// Returns the wire name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            RobotStatus::Idle => "idle",
            RobotStatus::EnRoute => "en_route",
            RobotStatus::Charging => "charging",
            RobotStatus::Error => "error",
            RobotStatus::Offline => "offline",
        }
    }

    /// Returns whether the robot is available for or busy with deliveries.
    pub fn is_active(self) -> bool {
        match self {
            RobotStatus::Idle | RobotStatus::EnRoute => true,
            RobotStatus::Charging | RobotStatus::Error | RobotStatus::Offline => false,
        }
    }

    /// Returns whether the robot is reachable at all.
    pub fn is_online(self) -> bool {
        !matches!(self, RobotStatus::Offline)
    }
}

impl fmt::Display for RobotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Planar position and heading (radians) on the robot's current floor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

/// Live telemetry for one robot in the fleet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Robot {
    pub id: String,
    pub name: String,
    pub status: RobotStatus,
    /// Charge level in percent. Nominally `0..=100`; not enforced.
    pub battery: u8,
    pub floor: i32,
    pub pose: Pose,
    /// SLAM localization confidence, nominally in `[0, 1]`.
    pub localization_confidence: f64,
    /// Task the robot is currently delivering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_task_id: Option<String>,
    pub last_seen: Timestamp,
}

/// Partial robot update merged by `AppStore::update_robot`.
///
/// `None` leaves a field untouched. `current_task_id` is doubly optional so
/// a patch can clear the assignment with `Some(None)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RobotUpdate {
    pub name: Option<String>,
    pub status: Option<RobotStatus>,
    pub battery: Option<u8>,
    pub floor: Option<i32>,
    pub pose: Option<Pose>,
    pub localization_confidence: Option<f64>,
    pub current_task_id: Option<Option<String>>,
}

impl RobotUpdate {
    /// Builds a patch that only changes the robot status.
    pub fn status(status: RobotStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Builds a patch that only changes the battery level.
    pub fn battery(battery: u8) -> Self {
        Self {
            battery: Some(battery),
            ..Self::default()
        }
    }

    /// Merges the set fields into `robot`. `last_seen` is left to the caller.
    pub fn apply_to(self, robot: &mut Robot) {
        if let Some(name) = self.name {
            robot.name = name;
        }
        if let Some(status) = self.status {
            robot.status = status;
        }
        if let Some(battery) = self.battery {
            robot.battery = battery;
        }
        if let Some(floor) = self.floor {
            robot.floor = floor;
        }
        if let Some(pose) = self.pose {
            robot.pose = pose;
        }
        if let Some(localization_confidence) = self.localization_confidence {
            robot.localization_confidence = localization_confidence;
        }
        if let Some(current_task_id) = self.current_task_id {
            robot.current_task_id = current_task_id;
        }
    }
}
