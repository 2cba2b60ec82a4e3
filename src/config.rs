//! Settings for collaborators that order and measure recorded dates.
//!
//! Values are layered: built-in defaults, then an optional settings file
//! (any format the `config` crate recognises from its extension), then
//! `GENEADATE_*` environment variables, e.g. `GENEADATE_STRICT=true`.

use std::path::Path;

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::datatype::Calendar;
use crate::error::{GeneadateError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Calendar given to dates built without an explicit one.
    pub calendar: Calendar,
    /// Refuse to order dates whose bounds do not guarantee an ordering.
    pub strict: bool,
    /// Filter directives for the tracing subscriber, e.g. `geneadate=debug`.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            calendar: Calendar::Gregorian,
            strict: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }
        let settings: Settings = builder
            .add_source(Environment::with_prefix("GENEADATE").try_parsing(true))
            .build()?
            .try_deserialize()?;
        info!(calendar = ?settings.calendar, strict = settings.strict, "settings loaded");
        Ok(settings)
    }

    // Installs a global fmt subscriber, a second call is an error.
    pub fn init_tracing(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.log_filter)
            .map_err(|e| GeneadateError::Config(format!("invalid log filter '{}': {}", self.log_filter, e)))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| GeneadateError::Config(e.to_string()))
    }
}
