use crate::domain::criterion::CriteriaCategory;
use crate::domain::locale::Locale;
use crate::domain::metric::MetricDescriptor;
use crate::domain::period::TrendPeriod;
use chrono::Month;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CATALOG_PATH: &str = "config/catalog";
const ENV_PREFIX: &str = "ESG_SYNTH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load catalog: {0}")]
    Load(#[from] config::ConfigError),

    #[error("end_month must be between 1 and 12, got {0}")]
    InvalidEndMonth(u32),
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub metrics: Vec<MetricDescriptor>,
    #[serde(default)]
    pub categories: Vec<CriteriaCategory>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
    pub period: TrendPeriod,
    pub end_month: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            period: TrendPeriod::default(),
            end_month: 12,
        }
    }
}

impl Settings {
    pub fn end_month(&self) -> Result<Month, ConfigError> {
        u8::try_from(self.end_month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or(ConfigError::InvalidEndMonth(self.end_month))
    }
}

fn env_overrides() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

/// Load the catalog from `path` (extension optional), then apply
/// `ESG_SYNTH_*` environment overrides, e.g. `ESG_SYNTH_SETTINGS__LOCALE`.
pub fn load_catalog(path: &str) -> Result<CatalogConfig, ConfigError> {
    load_catalog_with(path, env_overrides())
}

fn load_catalog_with(
    path: &str,
    overrides: config::Environment,
) -> Result<CatalogConfig, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(overrides)
        .build()?;

    let catalog: CatalogConfig = settings.try_deserialize()?;
    catalog.settings.end_month()?;

    tracing::debug!(
        path,
        metrics = catalog.metrics.len(),
        categories = catalog.categories.len(),
        "Loaded catalog"
    );
    Ok(catalog)
}
