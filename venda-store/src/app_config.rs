use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub pricing: PricingDefaults,
}

/// Which catalog snapshot the repository publishes
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Built-in version name ("current" or "legacy")
    #[serde(default = "default_version")]
    pub version: String,
    /// Optional JSON snapshot file that overrides the built-in catalogs
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            file: None,
        }
    }
}

fn default_version() -> String {
    "current".to_string()
}

/// Request-level defaults applied when a caller omits margin or tax rate
#[derive(Debug, Deserialize, Clone)]
pub struct PricingDefaults {
    #[serde(default = "default_margin_pct")]
    pub margin_pct: f64,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

impl Default for PricingDefaults {
    fn default() -> Self {
        Self {
            margin_pct: default_margin_pct(),
            tax_rate: default_tax_rate(),
        }
    }
}

fn default_margin_pct() -> f64 {
    20.0
}

fn default_tax_rate() -> f64 {
    0.1
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of VENDA)
            // Eg.. `VENDA__CATALOG__VERSION=legacy` would set the catalog version
            .add_source(config::Environment::with_prefix("VENDA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
