//! Tariff Store - the tariff schedule shared by every request
//!
//! The schedule is loaded once at startup (JSON file or the built-in 2025
//! tariff). Readers take an `Arc` snapshot; a replacement swaps the whole
//! schedule, a version is never patched in place.

use std::path::Path;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use parking_lot::RwLock;
use shared::error::TariffResult;
use shared::models::{TariffConstants, TariffSchedule};

#[derive(Clone)]
pub struct TariffStore {
    schedule: Arc<RwLock<Arc<TariffSchedule>>>,
}

impl std::fmt::Debug for TariffStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let schedule = self.snapshot();
        f.debug_struct("TariffStore")
            .field("versions", &schedule.versions().len())
            .field("latest", &schedule.latest().effective_from)
            .finish()
    }
}

impl TariffStore {
    pub fn new(schedule: TariffSchedule) -> Self {
        Self {
            schedule: Arc::new(RwLock::new(Arc::new(schedule))),
        }
    }

    /// Store holding only the built-in 2025 tariff
    pub fn builtin() -> Self {
        Self::new(TariffSchedule::default())
    }

    /// Load and validate a JSON tariff file
    pub fn load(path: impl AsRef<Path>) -> TariffResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let schedule = TariffSchedule::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            versions = schedule.versions().len(),
            latest = %schedule.latest().effective_from,
            "📋 Tariff schedule loaded"
        );
        Ok(Self::new(schedule))
    }

    /// Current schedule; stays valid even if the store is replaced meanwhile
    pub fn snapshot(&self) -> Arc<TariffSchedule> {
        self.schedule.read().clone()
    }

    /// Tariff in force on `date`
    pub fn on(&self, date: NaiveDate) -> TariffResult<TariffConstants> {
        self.snapshot().for_date(date).cloned()
    }

    /// Tariff in force today
    pub fn active(&self) -> TariffResult<TariffConstants> {
        self.on(Local::now().date_naive())
    }

    /// Swap in a new schedule
    pub fn replace(&self, schedule: TariffSchedule) {
        let versions = schedule.versions().len();
        *self.schedule.write() = Arc::new(schedule);
        tracing::info!(versions, "Tariff schedule replaced");
    }
}

impl Default for TariffStore {
    fn default() -> Self {
        Self::builtin()
    }
}
