//! # Store Configuration
//!
//! Settings the host reads once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`INNKEEP_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after the store is built.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use innkeep_core::DEFAULT_CURRENCY;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::StoreResult;
use crate::seed::Seed;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Shown on folios and the dashboard header.
    pub property_name: String,

    /// The day the front desk is working. Arrivals, departures and the
    /// demo seed are all laid out around it.
    pub business_date: NaiveDate,

    /// JSON seed to load instead of the demo property.
    pub seed_path: Option<PathBuf>,

    /// Currency code (ISO 4217)
    pub currency_code: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            property_name: "Innkeep Demo Hotel".to_string(),
            business_date: Utc::now().date_naive(),
            seed_path: None,
            currency_code: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by environment variables.
    ///
    /// ## Environment Variables
    /// - `INNKEEP_PROPERTY_NAME`: property display name
    /// - `INNKEEP_BUSINESS_DATE`: business date as `YYYY-MM-DD`
    /// - `INNKEEP_SEED_PATH`: JSON seed file
    /// - `INNKEEP_CURRENCY`: currency code
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(name) = std::env::var("INNKEEP_PROPERTY_NAME") {
            config.property_name = name;
        }

        if let Ok(date) = std::env::var("INNKEEP_BUSINESS_DATE") {
            match date.parse::<NaiveDate>() {
                Ok(date) => config.business_date = date,
                Err(err) => warn!(value = %date, error = %err, "Ignoring invalid INNKEEP_BUSINESS_DATE"),
            }
        }

        if let Ok(path) = std::env::var("INNKEEP_SEED_PATH") {
            config.seed_path = Some(PathBuf::from(path));
        }

        if let Ok(currency) = std::env::var("INNKEEP_CURRENCY") {
            config.currency_code = currency;
        }

        config
    }

    /// The seed file if one is configured, otherwise the demo property
    /// around the business date.
    pub fn load_seed(&self) -> StoreResult<Seed> {
        match &self.seed_path {
            Some(path) => {
                info!(path = %path.display(), "Loading seed file");
                Seed::from_file(path)
            }
            None => {
                info!(business_date = %self.business_date, "Loading demo seed");
                Ok(Seed::demo(self.business_date))
            }
        }
    }
}
