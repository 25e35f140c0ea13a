//! Entity shapes and closed vocabularies for the hospital delivery fleet.

pub mod alert;
/// Deployed machine-learning models (reference data).
pub mod model;
pub mod robot;
pub mod task;
pub mod user;
/// Floor zones and their access rules (reference data).
pub mod zone;

/// Wall-clock instant stored as Unix milliseconds.
pub type Timestamp = i64;
