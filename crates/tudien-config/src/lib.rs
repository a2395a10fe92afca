use std::env;

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::network::NetworkConfig;

pub mod lookup;
pub mod network;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub lookup: LookupConfig,

    /// Upstream request timeout
    pub timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        Config {
            network: NetworkConfig::new(),
            lookup: LookupConfig::new(),
            timeout_seconds,
        }
    }
}
