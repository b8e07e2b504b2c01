// Where the client talks to and where it keeps its token. Values come from
// the command line (see `cli`), which falls back to `H2W_API_URL` and
// `H2W_TOKEN_FILE` and then to the defaults below.

use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://h2w.cc/api/v1";
pub const DEFAULT_TOKEN_FILE: &str = ".h2wgotoken";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    pub token_file: PathBuf,
}

impl Config {
    pub fn new(base_url: impl Into<String>, token_file: impl Into<PathBuf>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Config {
            base_url,
            token_file: token_file.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token issuance endpoint.
    pub fn token_url(&self) -> String {
        format!("{}/auth/token", self.base_url)
    }

    pub fn verify_url(&self) -> String {
        format!("{}/verify", self.token_url())
    }

    pub fn dashboard_url(&self) -> String {
        format!("{}/dashboard", self.base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_BASE_URL, DEFAULT_TOKEN_FILE)
    }
}
