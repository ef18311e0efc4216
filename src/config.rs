use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_users_path")]
    pub users_path: String,
    #[serde(default = "default_properties_path")]
    pub properties_path: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            users_path: default_users_path(),
            properties_path: default_properties_path(),
            output_path: default_output_path(),
        }
    }
}

fn default_users_path() -> String { "data/users.csv".to_string() }
fn default_properties_path() -> String { "data/properties.csv".to_string() }
fn default_output_path() -> String { "match_recommendations_top10_per_user.csv".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default)]
    pub min_score: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            min_score: 0.0,
        }
    }
}

fn default_top_k() -> usize { 10 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_price_weight")]
    pub price: f64,
    #[serde(default = "default_bedrooms_weight")]
    pub bedrooms: f64,
    #[serde(default = "default_bathrooms_weight")]
    pub bathrooms: f64,
    #[serde(default = "default_property_type_weight")]
    pub property_type: f64,
    #[serde(default = "default_condition_weight")]
    pub condition: f64,
    #[serde(default = "default_year_built_weight")]
    pub year_built: f64,
    #[serde(default = "default_size_weight")]
    pub size: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            price: default_price_weight(),
            bedrooms: default_bedrooms_weight(),
            bathrooms: default_bathrooms_weight(),
            property_type: default_property_type_weight(),
            condition: default_condition_weight(),
            year_built: default_year_built_weight(),
            size: default_size_weight(),
            location: default_location_weight(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            price: config.price,
            bedrooms: config.bedrooms,
            bathrooms: config.bathrooms,
            property_type: config.property_type,
            condition: config.condition,
            year_built: config.year_built,
            size: config.size,
            location: config.location,
        }
    }
}

fn default_price_weight() -> f64 { 0.30 }
fn default_bedrooms_weight() -> f64 { 0.18 }
fn default_bathrooms_weight() -> f64 { 0.10 }
fn default_property_type_weight() -> f64 { 0.12 }
fn default_condition_weight() -> f64 { 0.08 }
fn default_year_built_weight() -> f64 { 0.07 }
fn default_size_weight() -> f64 { 0.07 }
fn default_location_weight() -> f64 { 0.08 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HOMEMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HOMEMATCH_MATCHING__TOP_K -> matching.top_k
            .add_source(
                Environment::with_prefix("HOMEMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HOMEMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.price, 0.30);
        assert_eq!(weights.bedrooms, 0.18);
        assert_eq!(weights.bathrooms, 0.10);
        assert_eq!(weights.property_type, 0.12);
        assert_eq!(weights.condition, 0.08);
        assert_eq!(weights.year_built, 0.07);
        assert_eq!(weights.size, 0.07);
        assert_eq!(weights.location, 0.08);
    }

    #[test]
    fn test_default_weights_convert_and_sum_to_one() {
        let weights: ScoringWeights = WeightsConfig::default().into();
        assert!((weights.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.matching.top_k, 10);
        assert_eq!(settings.matching.min_score, 0.0);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.data.users_path, "data/users.csv");
    }
}
