use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::ScoringWeights;
use crate::services::{DirectoryDefaults, PLACEHOLDER_RATING};
use crate::core::{DEFAULT_MAX_TOP_N, DEFAULT_TOP_N};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default)]
    pub recommender: RecommenderSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectorySettings {
    /// Mentor directory file (.json or .toml). Without it the directory is empty.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_rating")]
    pub default_rating: f64,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            path: None,
            default_rating: default_rating(),
        }
    }
}

impl DirectorySettings {
    pub fn defaults(&self) -> DirectoryDefaults {
        DirectoryDefaults::with_rating(self.default_rating)
    }
}

fn default_rating() -> f64 { PLACEHOLDER_RATING }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommenderSettings {
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,
    #[serde(default)]
    pub weights: WeightsConfig,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
            max_top_n: default_max_top_n(),
            weights: WeightsConfig::default(),
        }
    }
}

fn default_top_n() -> usize { DEFAULT_TOP_N }
fn default_max_top_n() -> usize { DEFAULT_MAX_TOP_N }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_goal_match_weight")]
    pub goal_match: f64,
    #[serde(default = "default_skill_overlap_weight")]
    pub skill_overlap: f64,
    #[serde(default = "default_level_compatibility_weight")]
    pub level_compatibility: f64,
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    #[serde(default = "default_learning_style_weight")]
    pub learning_style: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            goal_match: default_goal_match_weight(),
            skill_overlap: default_skill_overlap_weight(),
            level_compatibility: default_level_compatibility_weight(),
            rating: default_rating_weight(),
            learning_style: default_learning_style_weight(),
        }
    }
}

fn default_goal_match_weight() -> f64 { 0.40 }
fn default_skill_overlap_weight() -> f64 { 0.30 }
fn default_level_compatibility_weight() -> f64 { 0.15 }
fn default_rating_weight() -> f64 { 0.10 }
fn default_learning_style_weight() -> f64 { 0.05 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            goal_match: config.goal_match,
            skill_overlap: config.skill_overlap,
            level_compatibility: config.level_compatibility,
            rating: config.rating,
            learning_style: config.learning_style,
        }
    }
}

impl RecommenderSettings {
    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.weights)
    }

    /// Reject weights that do not sum to 1.0 and inconsistent top-N limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = self.scoring_weights();
        if !weights.is_normalized() {
            return Err(ConfigError::Message(format!(
                "recommender.weights must be non-negative and sum to 1.0 (got {:.4})",
                weights.sum()
            )));
        }

        if self.max_top_n == 0 || self.default_top_n > self.max_top_n {
            return Err(ConfigError::Message(format!(
                "recommender.default_top_n ({}) must be within 1..=max_top_n ({})",
                self.default_top_n, self.max_top_n
            )));
        }

        Ok(())
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MENTOR__)
    /// 5. `PORT` and `MENTORS_FILE`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // e.g., MENTOR__SERVER__PORT -> server.port
            .add_source(prefixed_env())
            .build()?;

        Self::finish(settings, EnvShortcuts::from_env())
    }

    /// Load configuration from a custom path
    ///
    /// Environment variables override the file the same way they do for [`Settings::load`].
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .add_source(File::from(path.as_ref()))
            .add_source(prefixed_env())
            .build()?;

        Self::finish(settings, EnvShortcuts::from_env())
    }

    fn finish(settings: Config, shortcuts: EnvShortcuts) -> Result<Self, ConfigError> {
        let settings: Self = shortcuts.apply(settings)?.try_deserialize()?;
        settings.recommender.validate()?;
        Ok(settings)
    }
}

fn prefixed_env() -> Environment {
    Environment::with_prefix("MENTOR")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// The short environment variables deployments commonly set, applied on top
/// of the layered configuration
#[derive(Debug, Default, Clone)]
struct EnvShortcuts {
    port: Option<String>,
    mentors_file: Option<String>,
}

impl EnvShortcuts {
    fn from_env() -> Self {
        Self {
            port: std::env::var("PORT").ok(),
            mentors_file: std::env::var("MENTORS_FILE").ok(),
        }
    }

    fn apply(self, settings: Config) -> Result<Config, ConfigError> {
        let mut builder = Config::builder().add_source(settings);

        if let Some(port) = self.port {
            let port: u16 = port
                .parse()
                .map_err(|e| ConfigError::Message(format!("Invalid PORT `{}`: {}", port, e)))?;
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(path) = self.mentors_file {
            builder = builder.set_override("directory.path", path)?;
        }

        builder.build()
    }
}
