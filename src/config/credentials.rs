use std::fmt;

use crate::app::{LinkcasterError, Result};

pub const FIRECRAWL_KEY: &str = "FIRECRAWL_KEY";
pub const SERPAPI_KEY: &str = "SERPAPI_KEY";
pub const X_BEARER_TOKEN: &str = "X_BEARER_TOKEN";

/// API credentials read from the process environment.
#[derive(Clone, Default)]
pub struct Credentials {
    pub firecrawl_key: Option<String>,
    pub serpapi_key: Option<String>,
    pub x_bearer_token: Option<String>,
}

/// Which credentials a run needs, derived from the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    pub firecrawl: bool,
    pub serpapi: bool,
    pub x: bool,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            firecrawl_key: get(FIRECRAWL_KEY),
            serpapi_key: get(SERPAPI_KEY),
            x_bearer_token: get(X_BEARER_TOKEN),
        }
    }

    /// Fail on the first required credential that is absent.
    pub fn check(&self, required: Requirements) -> Result<()> {
        let checks = [
            (required.firecrawl, &self.firecrawl_key, FIRECRAWL_KEY),
            (required.serpapi, &self.serpapi_key, SERPAPI_KEY),
            (required.x, &self.x_bearer_token, X_BEARER_TOKEN),
        ];

        for (needed, value, name) in checks {
            tracing::info!("{} loaded: {}", name, value.is_some());
            if needed && value.is_none() {
                return Err(LinkcasterError::MissingCredential(name));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Credentials")
            .field("firecrawl_key", &mask(&self.firecrawl_key))
            .field("serpapi_key", &mask(&self.serpapi_key))
            .field("x_bearer_token", &mask(&self.x_bearer_token))
            .finish()
    }
}
