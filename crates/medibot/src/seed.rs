//! Fixture data loaded into a fresh store.
//!
//! Every call builds new collections; relative timestamps are computed from
//! the `now` passed by the caller so seeds stay deterministic under a fixed
//! clock.

use std::collections::BTreeMap;

use crate::domain::Timestamp;
use crate::domain::alert::{Alert, Severity};
use crate::domain::model::{Model, ModelType};
use crate::domain::robot::{Pose, Robot, RobotStatus};
use crate::domain::task::{Payload, Priority, Task, TaskStatus};
use crate::domain::user::{DemoCredential, Role, User};
use crate::domain::zone::{Point, Zone, ZoneType};

const MINUTE_MS: i64 = 60_000;
const DAY_MS: i64 = 86_400_000;

/// Complete initial fixture set.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedData {
    pub users: Vec<User>,
    pub robots: Vec<Robot>,
    pub tasks: Vec<Task>,
    pub alerts: Vec<Alert>,
    pub reference: ReferenceData,
}

impl SeedData {
    /// Builds the fixture set anchored at `now`.
    pub fn new(now: Timestamp) -> Self {
        Self {
            users: users(),
            robots: robots(now),
            tasks: tasks(now),
            alerts: alerts(now),
            reference: ReferenceData {
                zones: zones(),
                models: models(now),
            },
        }
    }
}

/// Immutable zone and model data shared read-only with the presentation layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferenceData {
    pub zones: Vec<Zone>,
    pub models: Vec<Model>,
}

impl ReferenceData {
    /// Looks up one zone by id.
    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// Returns the zones drawn on `floor`.
    pub fn zones_on_floor(&self, floor: i32) -> impl Iterator<Item = &Zone> {
        self.zones.iter().filter(move |zone| zone.floor == floor)
    }

    /// Looks up one deployed model by id.
    pub fn model(&self, id: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.id == id)
    }
}

/// Returns the quick-login credential for `role`, if the demo offers one.
pub fn demo_credential(role: Role) -> Option<DemoCredential> {
    match role {
        Role::Admin => Some(DemoCredential {
            email: "alice@hospital.test",
            password: "AdminDemo123!",
        }),
        Role::Operator => Some(DemoCredential {
            email: "omar@hospital.test",
            password: "OperatorDemo123!",
        }),
        Role::Clinician => Some(DemoCredential {
            email: "nina@hospital.test",
            password: "ClinicianDemo123!",
        }),
        Role::Guest => None,
    }
}

/// Returns the full role → credential table.
pub fn demo_credentials() -> BTreeMap<Role, DemoCredential> {
    Role::ALL
        .into_iter()
        .filter_map(|role| demo_credential(role).map(|credential| (role, credential)))
        .collect()
}

fn user(id: &str, name: &str, role: Role, email: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        role,
        email: email.to_string(),
        avatar: None,
    }
}

fn users() -> Vec<User> {
    vec![
        user("u_admin", "Alice Admin", Role::Admin, "alice@hospital.test"),
        user("u_operator", "Omar Operator", Role::Operator, "omar@hospital.test"),
        user(
            "u_clinician",
            "Nina Clinician",
            Role::Clinician,
            "nina@hospital.test",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn robot(
    name: &str,
    status: RobotStatus,
    battery: u8,
    floor: i32,
    pose: Pose,
    localization_confidence: f64,
    current_task_id: Option<&str>,
    now: Timestamp,
) -> Robot {
    Robot {
        id: format!("robot_{}", name.replace('-', "")),
        name: name.to_string(),
        status,
        battery,
        floor,
        pose,
        localization_confidence,
        current_task_id: current_task_id.map(str::to_string),
        last_seen: now,
    }
}

// Headings are fixture readings, not rounded constants.
#[allow(clippy::approx_constant)]
fn robots(now: Timestamp) -> Vec<Robot> {
    vec![
        robot(
            "R-07",
            RobotStatus::EnRoute,
            72,
            2,
            Pose {
                x: 12.3,
                y: 45.9,
                theta: 1.57,
            },
            0.95,
            Some("task_001"),
            now,
        ),
        robot(
            "R-08",
            RobotStatus::Idle,
            98,
            1,
            Pose {
                x: 5.2,
                y: 20.1,
                theta: 0.2,
            },
            0.99,
            None,
            now,
        ),
        robot(
            "R-09",
            RobotStatus::Charging,
            34,
            1,
            Pose {
                x: 2.0,
                y: 5.0,
                theta: 0.0,
            },
            0.97,
            None,
            now,
        ),
        robot(
            "R-10",
            RobotStatus::Idle,
            85,
            3,
            Pose {
                x: 30.5,
                y: 15.2,
                theta: 3.14,
            },
            0.92,
            None,
            now,
        ),
    ]
}

fn tasks(now: Timestamp) -> Vec<Task> {
    vec![
        Task {
            id: "task_001".to_string(),
            requester_id: "u_clinician".to_string(),
            from_zone: "Pharmacy".to_string(),
            to_zone: "Ward 5B".to_string(),
            priority: Priority::High,
            payload: Payload::Medication,
            status: TaskStatus::InProgress,
            assigned_robot_id: Some("robot_R07".to_string()),
            created_at: now - 30 * MINUTE_MS,
            completed_at: None,
            notes: Some("Urgent insulin delivery".to_string()),
            eta: Some(8),
        },
        Task {
            id: "task_002".to_string(),
            requester_id: "u_clinician".to_string(),
            from_zone: "Lab".to_string(),
            to_zone: "Ward 3A".to_string(),
            priority: Priority::Normal,
            payload: Payload::Sample,
            status: TaskStatus::Queued,
            assigned_robot_id: None,
            created_at: now - 15 * MINUTE_MS,
            completed_at: None,
            notes: None,
            eta: None,
        },
        Task {
            id: "task_003".to_string(),
            requester_id: "u_operator".to_string(),
            from_zone: "Storage".to_string(),
            to_zone: "ICU".to_string(),
            priority: Priority::Critical,
            payload: Payload::Equipment,
            status: TaskStatus::Queued,
            assigned_robot_id: None,
            created_at: now - 5 * MINUTE_MS,
            completed_at: None,
            notes: Some("Emergency ventilator parts".to_string()),
            eta: None,
        },
    ]
}

fn alerts(now: Timestamp) -> Vec<Alert> {
    vec![
        Alert {
            id: "alert_101".to_string(),
            robot_id: "robot_R07".to_string(),
            severity: Severity::Warning,
            message: "Low localization confidence in Corridor B".to_string(),
            timestamp: now - 5 * MINUTE_MS,
            acknowledged: false,
        },
        Alert {
            id: "alert_102".to_string(),
            robot_id: "robot_R09".to_string(),
            severity: Severity::Info,
            message: "Charging cycle complete in 15 minutes".to_string(),
            timestamp: now - 10 * MINUTE_MS,
            acknowledged: true,
        },
    ]
}

fn zone(
    id: &str,
    zone_type: ZoneType,
    name: &str,
    floor: i32,
    corners: [(f64, f64); 4],
    access_rules: &[Role],
    restricted: bool,
) -> Zone {
    Zone {
        id: id.to_string(),
        zone_type,
        name: name.to_string(),
        floor,
        polygon: corners.into_iter().map(|(x, y)| Point(x, y)).collect(),
        access_rules: access_rules.to_vec(),
        restricted,
    }
}

fn zones() -> Vec<Zone> {
    let staff = [Role::Clinician, Role::Operator, Role::Admin];

    vec![
        zone(
            "zone_pharmacy",
            ZoneType::Pharmacy,
            "Main Pharmacy",
            1,
            [(10.0, 10.0), (50.0, 10.0), (50.0, 40.0), (10.0, 40.0)],
            &staff,
            false,
        ),
        zone(
            "zone_ward5b",
            ZoneType::Ward,
            "Ward 5B",
            2,
            [(60.0, 20.0), (100.0, 20.0), (100.0, 60.0), (60.0, 60.0)],
            &staff,
            false,
        ),
        zone(
            "zone_icu",
            ZoneType::Icu,
            "ICU",
            2,
            [(10.0, 60.0), (50.0, 60.0), (50.0, 90.0), (10.0, 90.0)],
            &[Role::Admin],
            true,
        ),
        zone(
            "zone_lab",
            ZoneType::Lab,
            "Laboratory",
            1,
            [(60.0, 60.0), (100.0, 60.0), (100.0, 90.0), (60.0, 90.0)],
            &staff,
            false,
        ),
        zone(
            "zone_dock",
            ZoneType::Dock,
            "Charging Dock",
            1,
            [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
            &[Role::Operator, Role::Admin],
            false,
        ),
    ]
}

fn models(now: Timestamp) -> Vec<Model> {
    vec![
        Model {
            id: "slam_v1".to_string(),
            model_type: ModelType::Slam,
            version: "1.0.0".to_string(),
            metrics: BTreeMap::from([("localizationConfidence".to_string(), 0.96)]),
            deployed_at: now - 30 * DAY_MS,
            coverage: 100,
        },
        Model {
            id: "nlp_v2".to_string(),
            model_type: ModelType::Nlp,
            version: "2.0.0".to_string(),
            metrics: BTreeMap::from([("intentAccuracy".to_string(), 0.93)]),
            deployed_at: now - 7 * DAY_MS,
            coverage: 75,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_has_expected_collection_sizes() {
        // Arrange & Act
        let seed = SeedData::new(1_000_000_000);

        // Assert
        assert_eq!(seed.users.len(), 3);
        assert_eq!(seed.robots.len(), 4);
        assert_eq!(seed.tasks.len(), 3);
        assert_eq!(seed.alerts.len(), 2);
        assert_eq!(seed.reference.zones.len(), 5);
        assert_eq!(seed.reference.models.len(), 2);
    }

    #[test]
    fn test_seed_ids_are_unique_per_collection() {
        // Arrange
        let seed = SeedData::new(0);

        // Act
        let robot_ids: HashSet<&str> = seed.robots.iter().map(|robot| robot.id.as_str()).collect();
        let task_ids: HashSet<&str> = seed.tasks.iter().map(|task| task.id.as_str()).collect();

        // Assert
        assert_eq!(robot_ids.len(), seed.robots.len());
        assert_eq!(task_ids.len(), seed.tasks.len());
        assert!(robot_ids.contains("robot_R07"));
    }

    #[test]
    fn test_seed_timestamps_are_relative_to_now() {
        // Arrange
        let now = 10 * DAY_MS;

        // Act
        let seed = SeedData::new(now);

        // Assert
        assert!(seed.robots.iter().all(|robot| robot.last_seen == now));
        assert_eq!(seed.tasks[0].created_at, now - 30 * MINUTE_MS);
        assert_eq!(seed.alerts[1].timestamp, now - 10 * MINUTE_MS);
        assert_eq!(seed.reference.models[1].deployed_at, now - 7 * DAY_MS);
    }

    #[test]
    fn test_demo_credentials_point_at_seed_users() {
        // Arrange
        let seed = SeedData::new(0);

        // Act
        let credentials = demo_credentials();

        // Assert
        assert_eq!(credentials.len(), 3);
        assert!(!credentials.contains_key(&Role::Guest));
        for (role, credential) in credentials {
            let user = seed
                .users
                .iter()
                .find(|user| user.email == credential.email)
                .expect("credential email should belong to a seed user");
            assert_eq!(user.role, role);
        }
    }

    #[test]
    fn test_reference_data_filters_zones_by_floor() {
        // Arrange
        let reference = SeedData::new(0).reference;

        // Act
        let floor_two: Vec<&str> = reference
            .zones_on_floor(2)
            .map(|zone| zone.name.as_str())
            .collect();

        // Assert
        assert_eq!(floor_two, ["Ward 5B", "ICU"]);
        assert!(reference.zone("zone_icu").is_some_and(|zone| zone.restricted));
        assert_eq!(
            reference.model("slam_v1").and_then(|model| model.metric("localizationConfidence")),
            Some(0.96)
        );
    }
}
