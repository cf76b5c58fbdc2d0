//! Pricing Server - marketplace pricing and profit engine
//!
//! # Architecture
//!
//! - **Engine** (`pricing`): pure functions turning cost, commission, VAT,
//!   shipping weight and platform fees into profit, and target profits
//!   back into prices
//! - **Tariff store** (`services`): date-versioned tariff constants
//! - **HTTP API** (`api`): thin axum handlers over the engine
//!
//! # Module layout
//!
//! ```text
//! pricing-server/src/
//! ├── core/          # config, state, server, errors
//! ├── pricing/       # engine
//! ├── services/      # tariff store
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging, error helpers
//! ```

pub mod api;
pub mod core;
pub mod pricing;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use services::TariffStore;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the config and initialize logging
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____       _      _
   / __ \_____(_)____(_)___  ____ _
  / /_/ / ___/ / ___/ / __ \/ __ `/
 / ____/ /  / / /__/ / / / / /_/ /
/_/   /_/  /_/\___/_/_/ /_/\__, /
                          /____/
    "#
    );
}
