//! Account and endpoint configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::constants::*;
use crate::error::{VoiceError, VoiceResult};

/// Which Voice API deployment requests go to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Sandbox,
    Production,
}

impl Environment {
    /// Deployment implied by the account username alone
    pub fn for_username(username: &str) -> Self {
        if username == SANDBOX_USERNAME {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => f.write_str("sandbox"),
            Self::Production => f.write_str("production"),
        }
    }
}

impl FromStr for Environment {
    type Err = VoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "sandbox" => Ok(Environment::Sandbox),
            "production" | "live" => Ok(Environment::Production),
            other => Err(VoiceError::config(format!(
                "unknown environment '{}': expected sandbox or production",
                other
            ))),
        }
    }
}

/// Credentials and endpoint settings for a [`VoiceClient`](crate::VoiceClient).
///
/// The username is stamped on every request payload. The `sandbox`
/// username always targets the sandbox, whatever `environment` says. When
/// `environment` is unset, any other username targets production.
#[derive(Clone, Deserialize)]
pub struct VoiceConfig {
    pub username: String,
    pub api_key: String,
    #[serde(default)]
    pub environment: Option<Environment>,
    /// Overrides the environment's base URL, mainly for tests
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl VoiceConfig {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
            environment: None,
            base_url: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Read `AT_USERNAME`, `AT_API_KEY` and the optional `AT_ENVIRONMENT`.
    pub fn from_env() -> VoiceResult<Self> {
        let username = std::env::var(ENV_USERNAME)
            .map_err(|_| VoiceError::config(format!("{} is not set", ENV_USERNAME)))?;
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| VoiceError::config(format!("{} is not set", ENV_API_KEY)))?;

        let mut config = Self::new(username, api_key);
        if let Ok(env) = std::env::var(ENV_ENVIRONMENT) {
            config = config.environment(env.parse()?);
        }
        Ok(config)
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Effective environment after the sandbox-username rule
    pub fn effective_environment(&self) -> Environment {
        match self.environment {
            _ if self.username == SANDBOX_USERNAME => Environment::Sandbox,
            Some(environment) => environment,
            None => Environment::for_username(&self.username),
        }
    }

    /// Base URL every endpoint path is joined onto
    pub fn resolved_base_url(&self) -> VoiceResult<Url> {
        let raw = match self.base_url {
            Some(ref url) => url.as_str(),
            None => self
                .effective_environment()
                .base_url(),
        };
        let mut url = Url::parse(raw)?;
        if !url
            .path()
            .ends_with('/')
        {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn validate(&self) -> VoiceResult<()> {
        if self.username.is_empty() {
            return Err(VoiceError::config("username must not be empty"));
        }
        if self.api_key.is_empty() {
            return Err(VoiceError::config("api key must not be empty"));
        }
        self.resolved_base_url()?;
        Ok(())
    }
}

impl fmt::Debug for VoiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceConfig")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
