//! Configuration types and file loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, AppConfig, CounterConfig};
