//! Reddit app credentials read from the environment.

use crate::error::ScrapeError;
use std::fmt;

pub const CLIENT_ID_VAR: &str = "REDDIT_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "REDDIT_CLIENT_SECRET";
pub const USER_AGENT_VAR: &str = "REDDIT_USER_AGENT";

/// Validated credential triple. All three values are non-empty.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    /// Descriptive identifier required by Reddit's API rules,
    /// e.g. `myapp:reddit_scraper:v1 (by u/yourusername)`.
    pub user_agent: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self, ScrapeError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the three variables through `lookup`. Absent and empty values
    /// both count as missing, and every missing name is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScrapeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut take = |name: &'static str| match lookup(name) {
            Some(v) if !v.is_empty() => v,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let client_id = take(CLIENT_ID_VAR);
        let client_secret = take(CLIENT_SECRET_VAR);
        let user_agent = take(USER_AGENT_VAR);

        if !missing.is_empty() {
            return Err(ScrapeError::Configuration { missing });
        }
        Ok(Self { client_id, client_secret, user_agent })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
