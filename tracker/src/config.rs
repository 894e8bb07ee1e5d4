use std::env;

/// Default remote API base URL; all request paths resolve against it.
const DEFAULT_API_BASE_URL: &str = "https://api.coincap.io/v2/";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Read configuration once at startup. The base URL is immutable for the
    /// lifetime of the process.
    pub fn from_env() -> Self {
        let api_base_url =
            env::var("COINCAP_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Self { api_base_url }
    }
}
