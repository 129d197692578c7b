//! Configuration management for the Farmer AI ML service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FARMER_ML_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{ConfidencePolicy, ForestConfig};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Cross-origin configuration for the web frontend
    pub cors: CorsConfig,

    /// Soil moisture model configuration
    pub models: ModelsConfig,

    /// Crop classifier configuration
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Origins allowed to call the API; `*` allows any
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelsConfig {
    /// Number of trees in the moisture forest
    pub n_estimators: usize,

    /// Rows of synthetic data the forest is fitted on
    pub training_samples: usize,

    /// Seed for data generation and bootstrap sampling
    pub seed: u64,

    /// Maximum tree depth; unset grows trees fully
    pub max_depth: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClassifierConfig {
    /// Confidences below this are replaced by `fallback_confidence`
    pub confidence_floor: f64,

    pub fallback_confidence: f64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARMER_ML_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])?
            .set_default("models.n_estimators", 100)?
            .set_default("models.training_samples", 1000)?
            .set_default("models.seed", 42)?
            .set_default("classifier.confidence_floor", shared::DEFAULT_CONFIDENCE_FLOOR)?
            .set_default(
                "classifier.fallback_confidence",
                shared::DEFAULT_FALLBACK_CONFIDENCE,
            )?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARMER_ML prefix)
            .add_source(
                Environment::with_prefix("FARMER_ML")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the models cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.models.n_estimators == 0 {
            return Err(ConfigError::Message(
                "models.n_estimators must be at least 1".to_string(),
            ));
        }
        if self.models.training_samples == 0 {
            return Err(ConfigError::Message(
                "models.training_samples must be at least 1".to_string(),
            ));
        }
        self.classifier
            .policy()
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ModelsConfig {
    pub fn forest_config(&self) -> ForestConfig {
        ForestConfig {
            n_estimators: self.n_estimators,
            seed: self.seed,
            max_depth: self.max_depth,
            ..ForestConfig::default()
        }
    }
}

impl ClassifierConfig {
    pub fn policy(&self) -> Result<ConfidencePolicy, shared::InferenceError> {
        ConfidencePolicy::new(self.confidence_floor, self.fallback_confidence)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            models: ModelsConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            training_samples: 1000,
            seed: 42,
            max_depth: None,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            confidence_floor: shared::DEFAULT_CONFIDENCE_FLOOR,
            fallback_confidence: shared::DEFAULT_FALLBACK_CONFIDENCE,
        }
    }
}
