use std::net::SocketAddr;

use shared::error::TariffError;
use thiserror::Error;

/// Startup and serving failures
///
/// Request-level failures are [`AppError`](crate::utils::AppError)s; these
/// end the process.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to load tariff: {0}")]
    Tariff(#[from] TariffError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
