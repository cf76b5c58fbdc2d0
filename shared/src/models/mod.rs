//! Data models
//!
//! Plain serde types shared between the pricing engine and its HTTP surface.
//! Money is VAT-inclusive `f64` on the wire unless a field says otherwise;
//! rates are percentages (`20` = 20%).

pub mod batch;
pub mod price_band;
pub mod pricing;
pub mod record;
pub mod tariff;

// Re-exports
pub use batch::*;
pub use price_band::*;
pub use pricing::*;
pub use record::*;
pub use tariff::*;
