pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod seed;

pub use app::AppStore;
pub use error::{StorageError, StoreError};
