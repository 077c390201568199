//! timesync-core: shared infrastructure for the TimeSync portal crates.
pub mod config;
pub mod csrf;
pub mod error;
pub mod observability;

pub use error::{AppError, ErrorBody};
pub use reqwest;
pub use secrecy;
pub use serde;
pub use serde_json;
pub use tracing;
