//! Pricing Engine Module
//!
//! Pure, synchronous functions over the `shared` pricing model. Every
//! function is a deterministic function of its inputs and the tariff it is
//! given; nothing here touches I/O or global state.
//!
//! - [`compute_profit`]: cost + sale price → net profit
//! - [`solve_price`]: target profit → sale price
//! - [`classify`] / [`repair_bands`]: promotional price bands
//! - [`evaluate_visibility_options`]: profit at visibility multipliers
//! - [`evaluate_batch`]: normalization + profit over imported rows

mod band;
mod batch;
mod calculator;
pub mod money;
mod normalize;
mod shipping;
mod solver;
pub mod vat;
mod visibility;

pub use band::*;
pub use batch::*;
pub use calculator::*;
pub use normalize::*;
pub use shipping::*;
pub use solver::*;
pub use visibility::*;
