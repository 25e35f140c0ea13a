use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Access role attached to one dashboard user.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Operator,
    Clinician,
    Guest,
}

impl Role {
    /// Every role, ordered from most to least privileged.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Operator, Role::Clinician, Role::Guest];

    /// Returns the wire name of this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operator => "operator",
            Role::Clinician => "clinician",
            Role::Guest => "guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "operator" => Ok(Role::Operator),
            "clinician" => Ok(Role::Clinician),
            "guest" => Ok(Role::Guest),
            _ => Err(format!("Unknown role: {s}")),
        }
    }
}

/// One dashboard account.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub email: String,
    /// Avatar image URL, when the account has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Email/password pair offered by the login screen's quick-login buttons.
///
/// The store never checks `password`; it exists only to prefill the form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DemoCredential {
    pub email: &'static str,
    pub password: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str_round_trips_every_role() {
        // Arrange
        let names: Vec<&str> = Role::ALL.iter().map(|role| role.as_str()).collect();

        // Act
        let parsed: Vec<Role> = names
            .iter()
            .map(|name| name.parse().expect("role should parse"))
            .collect();

        // Assert
        assert_eq!(parsed, Role::ALL);
    }

    #[test]
    fn test_role_from_str_rejects_unknown_name() {
        // Arrange
        let raw_role = "superuser";

        // Act
        let result = raw_role.parse::<Role>();

        // Assert
        assert_eq!(result, Err("Unknown role: superuser".to_string()));
    }

    #[test]
    fn test_user_serializes_without_missing_avatar() {
        // Arrange
        let user = User {
            id: "u_guest".to_string(),
            name: "Gary Guest".to_string(),
            role: Role::Guest,
            email: "gary@hospital.test".to_string(),
            avatar: None,
        };

        // Act
        let json = serde_json::to_value(&user).expect("user should serialize");

        // Assert
        assert_eq!(
            json,
            serde_json::json!({
                "id": "u_guest",
                "name": "Gary Guest",
                "role": "guest",
                "email": "gary@hospital.test",
            })
        );
    }
}
