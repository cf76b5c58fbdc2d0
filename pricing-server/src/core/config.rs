/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file is
/// loaded first):
///
/// | variable | default | meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | TARIFF_FILE | *(unset)* | JSON tariff schedule; built-in 2025 tariff when unset |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | *(unset)* | directory for daily log files |
/// | ENVIRONMENT | development | development \| production |
/// | ESTIMATE_MISSING_COST | false | estimate missing costs as 70% of the sale price |
/// | MAX_BATCH_ROWS | 5000 | largest accepted batch |
///
/// # Example
///
/// ```ignore
/// TARIFF_FILE=/etc/pricing/tariff.json HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Tariff schedule file
    pub tariff_file: Option<String>,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// development | production
    pub environment: String,
    /// Default missing-cost policy for profit and batch requests
    pub estimate_missing_cost: bool,
    pub max_batch_rows: usize,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            tariff_file: non_empty_var("TARIFF_FILE"),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: non_empty_var("LOG_DIR"),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            estimate_missing_cost: std::env::var("ESTIMATE_MISSING_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            max_batch_rows: std::env::var("MAX_BATCH_ROWS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(shared::models::MAX_BATCH_ROWS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
