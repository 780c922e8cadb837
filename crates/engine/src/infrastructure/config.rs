//! Engine configuration read from the environment.
//!
//! | variable | default | meaning |
//! |----------|---------|---------|
//! | `SHEETSMITH_DEFAULT_RULESET` | `dnd5` | ruleset used when a record names an unknown one |
//! | `SHEETSMITH_RNG_SEED` | unset | seed for deterministic stat rolls |
//! | `RUST_LOG` | `sheetsmith_engine=info` | log filter (read by the binary) |

use sheetsmith_domain::{RulesetRegistry, DEFAULT_RULESET_ID};

pub const DEFAULT_RULESET_VAR: &str = "SHEETSMITH_DEFAULT_RULESET";
pub const RNG_SEED_VAR: &str = "SHEETSMITH_RNG_SEED";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SHEETSMITH_RNG_SEED must be an unsigned integer, got '{0}'")]
    InvalidSeed(String),

    #[error("SHEETSMITH_DEFAULT_RULESET names an unknown ruleset: {0}")]
    UnknownRuleset(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fallback ruleset for unknown ids
    pub default_ruleset: String,
    /// Seed for deterministic rolls; `None` uses system randomness
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_ruleset: DEFAULT_RULESET_ID.to_string(),
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let default_ruleset =
            read(DEFAULT_RULESET_VAR).unwrap_or_else(|| DEFAULT_RULESET_ID.into());
        let rng_seed = match read(RNG_SEED_VAR) {
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| ConfigError::InvalidSeed(raw))?),
            None => None,
        };

        Ok(Self {
            default_ruleset,
            rng_seed,
        })
    }

    /// Built-in registry with the configured fallback.
    pub fn registry(&self) -> Result<RulesetRegistry, ConfigError> {
        RulesetRegistry::with_default(&self.default_ruleset)
            .map_err(|_| ConfigError::UnknownRuleset(self.default_ruleset.clone()))
    }
}
