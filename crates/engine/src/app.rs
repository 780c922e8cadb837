//! Application state and composition.

use std::sync::Arc;

use sheetsmith_domain::RulesetRegistry;

use crate::infrastructure::{
    config::{ConfigError, EngineConfig},
    ports::RandomPort,
    random::{SeededRandom, SystemRandom},
};
use crate::use_cases;

/// Main application state.
///
/// Holds the configured registry and all use cases.
pub struct App {
    pub config: EngineConfig,
    pub registry: Arc<RulesetRegistry>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub sheet: use_cases::SheetUseCases,
    pub time: use_cases::TimeUseCases,
}

impl App {
    /// Compose the application from configuration.
    ///
    /// A configured seed selects deterministic rolls, otherwise system randomness.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let random: Arc<dyn RandomPort> = match config.rng_seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(SystemRandom::new()),
        };
        Self::with_random(config, random)
    }

    /// Compose the application with an explicit random port.
    pub fn with_random(
        config: EngineConfig,
        random: Arc<dyn RandomPort>,
    ) -> Result<Self, ConfigError> {
        let registry = Arc::new(config.registry()?);

        let use_cases = UseCases {
            sheet: use_cases::SheetUseCases::new(registry.clone(), random),
            time: use_cases::TimeUseCases::new(),
        };

        Ok(Self {
            config,
            registry,
            use_cases,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::random::FixedRandom;

    #[test]
    fn seeded_apps_generate_identical_characters() {
        let config = EngineConfig {
            rng_seed: Some(7),
            ..EngineConfig::default()
        };
        let first = App::new(config.clone()).unwrap();
        let second = App::new(config).unwrap();

        let a = first.use_cases.sheet.generate("cthulhu", "Human", "Detective");
        let b = second.use_cases.sheet.generate("cthulhu", "Human", "Detective");
        assert_eq!(a, b);
    }

    #[test]
    fn configured_default_drives_fallback() {
        let config = EngineConfig {
            default_ruleset: "rolemaster".to_string(),
            rng_seed: None,
        };
        let app = App::with_random(config, Arc::new(FixedRandom(50))).unwrap();
        assert_eq!(app.registry.default_id(), "rolemaster");
        let generated = app.use_cases.sheet.generate("unknown", "", "");
        assert_eq!(generated.stats.len(), 10);
    }

    #[test]
    fn unknown_default_fails_composition() {
        let config = EngineConfig {
            default_ruleset: "gurps".to_string(),
            rng_seed: None,
        };
        assert!(matches!(App::new(config), Err(ConfigError::UnknownRuleset(_))));
    }
}
