//! Provider API key resolution.
//!
//! Keys are read from environment variables only and wrapped in
//! [`SecretString`] straight away. All three are required; validation
//! reports every missing variable in one error.

use secrecy::SecretString;

use parley_types::error::ConfigError;

pub const ASSEMBLYAI_API_KEY: &str = "ASSEMBLYAI_API_KEY";
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const MURF_API_KEY: &str = "MURF_API_KEY";

/// API keys for the three gateway providers.
pub struct ApiKeys {
    pub assemblyai: SecretString,
    pub gemini: SecretString,
    pub murf: SecretString,
}

impl ApiKeys {
    /// Resolve keys from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve keys through `lookup`. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut fetch = |name: &str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => Some(SecretString::from(value)),
            _ => {
                missing.push(name.to_string());
                None
            }
        };

        let assemblyai = fetch(ASSEMBLYAI_API_KEY);
        let gemini = fetch(GEMINI_API_KEY);
        let murf = fetch(MURF_API_KEY);

        match (assemblyai, gemini, murf) {
            (Some(assemblyai), Some(gemini), Some(murf)) => Ok(Self {
                assemblyai,
                gemini,
                murf,
            }),
            _ => Err(ConfigError::MissingApiKeys(missing)),
        }
    }
}

// The struct holds nothing but keys, so Debug prints no fields at all.
impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKeys { .. }")
    }
}
