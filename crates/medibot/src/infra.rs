//! Infrastructure adapters for the persisted state slot and wall clock.

pub mod clock;
pub mod storage;
