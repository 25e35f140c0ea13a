use std::fmt;

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// How urgently an alert needs operator attention.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    /// Returns the wire name of this severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Robot-raised notification shown on the alerts page.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub robot_id: String,
    pub severity: Severity,
    pub message: String,
    pub timestamp: Timestamp,
    /// One-way flag: once `true`, store operations never reset it.
    pub acknowledged: bool,
}

/// Caller-supplied fields for `AppStore::add_alert`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewAlert {
    pub robot_id: String,
    pub severity: Severity,
    pub message: String,
}

impl NewAlert {
    /// Materializes an unacknowledged alert with store-assigned identity.
    pub(crate) fn into_alert(self, id: String, timestamp: Timestamp) -> Alert {
        Alert {
            id,
            robot_id: self.robot_id,
            severity: self.severity,
            message: self.message,
            timestamp,
            acknowledged: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_alert_starts_unacknowledged() {
        // Arrange
        let new_alert = NewAlert {
            robot_id: "robot_R07".to_string(),
            severity: Severity::Warning,
            message: "Wheel slip detected".to_string(),
        };

        // Act
        let alert = new_alert.into_alert("alert_1".to_string(), 99);

        // Assert
        assert!(!alert.acknowledged);
        assert_eq!(alert.timestamp, 99);
        assert_eq!(alert.id, "alert_1");
    }

    #[test]
    fn test_severity_orders_by_urgency() {
        // Arrange
        let mut severities = vec![Severity::Critical, Severity::Info, Severity::Warning];

        // Act
        severities.sort();

        // Assert
        assert_eq!(
            severities,
            [Severity::Info, Severity::Warning, Severity::Critical]
        );
    }
}
