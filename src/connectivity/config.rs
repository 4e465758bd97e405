use std::env;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Runtime configuration for one connectivity run.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub frontend_url: String,
    pub timeout: Duration,
    pub verbose: bool,
}

impl Config {
    /// Reads the base URLs from the environment, falling back to the local
    /// development defaults.
    pub fn from_env(verbose: bool) -> Self {
        Config {
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            timeout: Duration::from_secs(10),
            verbose,
        }
    }
}
