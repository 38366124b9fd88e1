//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_per_page() -> usize {
    10
}

fn default_fixtures_dir() -> String {
    "fixtures".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for the admin pages and the in-memory store.
pub struct AdminConfig {
    #[serde(default = "default_per_page")]
    pub users_per_page: usize,
    #[serde(default = "default_per_page")]
    pub clients_per_page: usize,
    #[serde(default = "default_per_page")]
    pub inquiries_per_page: usize,
    #[serde(default = "default_per_page")]
    pub activity_per_page: usize,
    /// Simulated latency applied to every write, in milliseconds.
    #[serde(default)]
    pub submit_delay_ms: u64,
    #[serde(default = "default_fixtures_dir")]
    pub fixtures_dir: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            users_per_page: default_per_page(),
            clients_per_page: default_per_page(),
            inquiries_per_page: default_per_page(),
            activity_per_page: default_per_page(),
            submit_delay_ms: 0,
            fixtures_dir: default_fixtures_dir(),
        }
    }
}
