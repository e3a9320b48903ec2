//! Configuration module for roadmap-forge.
//!
//! Settings are layered, later sources winning:
//! 1. Built-in defaults
//! 2. `roadmap-forge.toml` in the working directory, or the file given with `--config`
//! 3. Environment variables prefixed with `ROADMAP_`
//!
//! Nested keys use a double underscore in the environment:
//! `ROADMAP_GENERATION__COOLDOWN_SECS=5` sets `generation.cooldown_secs`.
//!
//! ```toml
//! [generation]
//! cooldown_secs = 10
//! beginner_steps = 10
//! intermediate_steps = 12
//! advanced_steps = 15
//!
//! [store]
//! channel_capacity = 32
//! share_token_length = 16
//!
//! [logging]
//! filter = "info"
//! ```

use crate::generation::StepCounts;
use crate::service::ServiceOptions;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_FILE: &str = "roadmap-forge.toml";
pub const ENV_PREFIX: &str = "ROADMAP_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generation: GenerationSettings,
    pub store: StoreSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Minimum seconds between two generations from one session.
    pub cooldown_secs: u64,
    pub beginner_steps: u32,
    pub intermediate_steps: u32,
    pub advanced_steps: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Request buffer of each actor's channel.
    pub channel_capacity: usize,
    pub share_token_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        let counts = StepCounts::default();
        Self {
            cooldown_secs: crate::generation::DEFAULT_COOLDOWN.as_secs(),
            beginner_steps: counts.beginner,
            intermediate_steps: counts.intermediate,
            advanced_steps: counts.advanced,
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            share_token_length: crate::service::DEFAULT_SHARE_TOKEN_LENGTH,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then the TOML file (`path` or [`CONFIG_FILE`]), then `ROADMAP_*`.
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".")
                    .into()
            }))
    }

    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment(path))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let settings: Settings = figment.extract().map_err(Box::new)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.generation;
        for (name, value) in [
            ("generation.beginner_steps", g.beginner_steps),
            ("generation.intermediate_steps", g.intermediate_steps),
            ("generation.advanced_steps", g.advanced_steps),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be at least 1")));
            }
        }
        if self.store.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "store.channel_capacity must be at least 1".into(),
            ));
        }
        if self.store.share_token_length == 0 {
            return Err(ConfigError::Invalid(
                "store.share_token_length must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn step_counts(&self) -> StepCounts {
        StepCounts {
            beginner: self.generation.beginner_steps,
            intermediate: self.generation.intermediate_steps,
            advanced: self.generation.advanced_steps,
        }
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.generation.cooldown_secs)
    }

    pub fn service_options(&self) -> ServiceOptions {
        ServiceOptions {
            step_counts: self.step_counts(),
            cooldown: self.cooldown(),
            share_token_length: self.store.share_token_length,
        }
    }
}
