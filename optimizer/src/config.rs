//! # Config
//!
//! Define and implement config options for module

use anyhow::Result;
use config::{ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

use crate::router::router_types::policy::CostPolicy;

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// path to log configuration YAML file
    pub log_config: String,

    /// optional path to a JSON graph definition, the built-in graph is
    /// used when unset
    pub graph_file: Option<String>,

    /// cost policy used when a query does not name one
    pub default_policy: CostPolicy,

    /// uppercase node labels entered on the command line
    pub normalize_case: bool,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        Config {
            log_config: String::from("log4rs.yaml"),
            graph_file: None,
            default_policy: CostPolicy::ByToll,
            normalize_case: true,
        }
    }

    /// Create a new `Config` object using environment variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        config::Config::builder()
            .set_default("log_config", default_config.log_config)?
            .set_default("default_policy", default_config.default_policy.to_string())?
            .set_default("normalize_case", default_config.normalize_case)?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}
