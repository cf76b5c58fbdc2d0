//! Server state shared by every handler

use chrono::{Local, NaiveDate};
use shared::models::CostFallback;

use crate::core::{Config, Result};
use crate::services::TariffStore;

#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub tariffs: TariffStore,
}

impl ServerState {
    pub fn new(config: Config, tariffs: TariffStore) -> Self {
        Self { config, tariffs }
    }

    /// Load the tariff schedule named by the config, or the built-in one
    ///
    /// Fails when no version of the schedule is in force today.
    pub fn initialize(config: &Config) -> Result<Self> {
        Self::initialize_on(config, Local::now().date_naive())
    }

    fn initialize_on(config: &Config, today: NaiveDate) -> Result<Self> {
        let tariffs = match &config.tariff_file {
            Some(path) => TariffStore::load(path)?,
            None => {
                tracing::info!("📋 No TARIFF_FILE set, using built-in 2025 tariff");
                TariffStore::builtin()
            }
        };
        let active = tariffs.on(today)?;
        tracing::info!(effective_from = %active.effective_from, "Tariff in force");

        Ok(Self::new(config.clone(), tariffs))
    }

    /// Missing-cost policy: the request's choice, else the server default
    pub fn cost_fallback(&self, requested: Option<CostFallback>) -> CostFallback {
        requested.unwrap_or(if self.config.estimate_missing_cost {
            CostFallback::EstimateFromSalePrice
        } else {
            CostFallback::Missing
        })
    }
}
