use std::env;
use std::fmt;

use chrono::{Local, NaiveDate};

use crate::lifecycle::LifecyclePolicy;
use crate::matching::{ScoringWeights, WeightsError, WeightsRevision};

const CUSTOM_WEIGHTS_LABEL: &str = "custom";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    pub fn load() -> Self {
        Self::from_str(&env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the engine and its command line front end.
///
/// Each section also loads on its own so callers can skip the parts they never use.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
    pub lifecycle: LifecyclePolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        load_dotenv();

        Ok(Self {
            environment: AppEnvironment::load(),
            telemetry: TelemetryConfig::load(),
            scoring: ScoringConfig::load()?,
            lifecycle: load_lifecycle_policy()?,
        })
    }
}

/// Read `.env` into the process environment. Missing files are ignored.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl TelemetryConfig {
    pub fn load() -> Self {
        Self {
            log_level: env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

/// Compatibility scoring controls.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
}

impl ScoringConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            weights: load_weights()?,
        })
    }
}

pub fn load_lifecycle_policy() -> Result<LifecyclePolicy, ConfigError> {
    let allow_unpublish = match env::var("APP_ALLOW_UNPUBLISH") {
        Ok(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidFlag {
            name: "APP_ALLOW_UNPUBLISH",
        })?,
        Err(_) => LifecyclePolicy::default().allow_unpublish,
    };
    Ok(LifecyclePolicy { allow_unpublish })
}

fn load_weights() -> Result<ScoringWeights, ConfigError> {
    let defaults = ScoringWeights::v1();
    let skills = weight_var("APP_SKILL_WEIGHT")?;
    let work_styles = weight_var("APP_WORK_STYLE_WEIGHT")?;
    let personality = weight_var("APP_PERSONALITY_WEIGHT")?;

    if skills.is_none() && work_styles.is_none() && personality.is_none() {
        return Ok(defaults);
    }

    let effective_from = match env::var("APP_WEIGHTS_EFFECTIVE_FROM") {
        Ok(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| ConfigError::InvalidDate { value: raw })?,
        Err(_) => Local::now().date_naive(),
    };

    let revision = WeightsRevision {
        version: defaults.revision().version + 1,
        label: CUSTOM_WEIGHTS_LABEL.to_string(),
        effective_from,
    };

    ScoringWeights::new(
        skills.unwrap_or(defaults.skills()),
        work_styles.unwrap_or(defaults.work_styles()),
        personality.unwrap_or(defaults.personality()),
        revision,
    )
    .map_err(|source| ConfigError::InvalidWeights { source })
}

fn weight_var(name: &'static str) -> Result<Option<f64>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidWeight { name }),
        Err(_) => Ok(None),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWeight { name: &'static str },
    InvalidWeights { source: WeightsError },
    InvalidDate { value: String },
    InvalidFlag { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeight { name } => write!(f, "{name} must be a decimal number"),
            ConfigError::InvalidWeights { source } => {
                write!(f, "configured scoring weights are invalid: {source}")
            }
            ConfigError::InvalidDate { value } => write!(
                f,
                "APP_WEIGHTS_EFFECTIVE_FROM must be YYYY-MM-DD (found '{value}')"
            ),
            ConfigError::InvalidFlag { name } => write!(f, "{name} must be true or false"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidWeights { source } => Some(source),
            ConfigError::InvalidWeight { .. }
            | ConfigError::InvalidDate { .. }
            | ConfigError::InvalidFlag { .. } => None,
        }
    }
}
