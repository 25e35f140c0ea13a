use serde::{Deserialize, Serialize};

use super::user::Role;

/// Functional category of a floor zone.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    Pharmacy,
    Ward,
    Icu,
    Lab,
    Corridor,
    Elevator,
    Dock,
}

impl ZoneType {
    /// Returns the wire name of this zone type.
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneType::Pharmacy => "pharmacy",
            ZoneType::Ward => "ward",
            ZoneType::Icu => "icu",
            ZoneType::Lab => "lab",
            ZoneType::Corridor => "corridor",
            ZoneType::Elevator => "elevator",
            ZoneType::Dock => "dock",
        }
    }
}

/// Map coordinate; serialized as a two-element `[x, y]` array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

/// Named polygonal region on one floor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    pub name: String,
    pub floor: i32,
    pub polygon: Vec<Point>,
    pub access_rules: Vec<Role>,
    pub restricted: bool,
}

impl Zone {
    /// Returns the vertex average used to place the zone label.
    pub fn centroid(&self) -> Option<Point> {
        if self.polygon.is_empty() {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = self.polygon.len() as f64;
        let (sum_x, sum_y) = self
            .polygon
            .iter()
            .fold((0.0, 0.0), |(sum_x, sum_y), point| (sum_x + point.0, sum_y + point.1));

        Some(Point(sum_x / count, sum_y / count))
    }

    /// Returns whether `role` is listed in this zone's access rules.
    pub fn allows(&self, role: Role) -> bool {
        self.access_rules.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(polygon: Vec<Point>) -> Zone {
        Zone {
            id: "zone_icu".to_string(),
            zone_type: ZoneType::Icu,
            name: "ICU".to_string(),
            floor: 2,
            polygon,
            access_rules: vec![Role::Admin],
            restricted: true,
        }
    }

    #[test]
    fn test_centroid_averages_vertices() {
        // Arrange
        let zone = zone(vec![
            Point(10.0, 60.0),
            Point(50.0, 60.0),
            Point(50.0, 90.0),
            Point(10.0, 90.0),
        ]);

        // Act
        let centroid = zone.centroid();

        // Assert
        assert_eq!(centroid, Some(Point(30.0, 75.0)));
    }

    #[test]
    fn test_centroid_is_none_for_empty_polygon() {
        // Arrange
        let zone = zone(Vec::new());

        // Act
        let centroid = zone.centroid();

        // Assert
        assert_eq!(centroid, None);
    }

    #[test]
    fn test_allows_checks_access_rules() {
        // Arrange
        let zone = zone(Vec::new());

        // Act & Assert
        assert!(zone.allows(Role::Admin));
        assert!(!zone.allows(Role::Clinician));
    }

    #[test]
    fn test_zone_serializes_type_and_polygon_pairs() {
        // Arrange
        let zone = zone(vec![Point(0.0, 0.0), Point(10.0, 0.0)]);

        // Act
        let json = serde_json::to_value(&zone).expect("zone should serialize");

        // Assert
        assert_eq!(json["type"], "icu");
        assert_eq!(json["polygon"], serde_json::json!([[0.0, 0.0], [10.0, 0.0]]));
        assert_eq!(json["accessRules"], serde_json::json!(["admin"]));
    }
}
