//! Services - stateful components behind the HTTP API

pub mod tariff_store;

pub use tariff_store::TariffStore;
