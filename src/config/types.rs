use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub counter: CounterConfig,
}

/// Settings for the HTTP users endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST resource serving `/users`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

/// Settings for the demo counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Starting value, restored by reset.
    #[serde(default)]
    pub initial: i64,
    /// Magnitude applied per increment/decrement (default: 1).
    #[serde(default = "default_step")]
    pub step: i64,
    /// Inclusive lower bound; absent means unbounded below.
    #[serde(default)]
    pub min: Option<i64>,
    /// Inclusive upper bound; absent means unbounded above.
    #[serde(default)]
    pub max: Option<i64>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial: 0,
            step: default_step(),
            min: None,
            max: None,
        }
    }
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_step() -> i64 {
    1
}
