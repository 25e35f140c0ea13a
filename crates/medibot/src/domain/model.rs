use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Model family running on the fleet.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ModelType {
    #[serde(rename = "SLAM")]
    Slam,
    #[serde(rename = "NLP")]
    Nlp,
}

impl ModelType {
    /// Returns the display name of this model family.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelType::Slam => "SLAM",
            ModelType::Nlp => "NLP",
        }
    }
}

/// Deployed model release and its headline metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    #[serde(rename = "type")]
    pub model_type: ModelType,
    pub version: String,
    pub metrics: BTreeMap<String, f64>,
    pub deployed_at: Timestamp,
    /// Share of the fleet running this release, in percent.
    pub coverage: u8,
}

impl Model {
    /// Returns one named metric value.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}
