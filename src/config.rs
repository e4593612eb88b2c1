use crate::error::{AppError, Result};

/// Service identifier reported by /api/health.
pub const SERVICE_NAME: &str = "micro-saas-scout-api";

/// Human-facing system name reported by /api/stats and the dashboard.
pub const SYSTEM_NAME: &str = "Micro SaaS Scout";

/// API version string reported by the /api root endpoint.
pub const API_VERSION: &str = "1.0.0";

/// How many demands the dashboard surfaces as "today's high-potential" picks.
pub const TOP_DEMANDS_COUNT: usize = 3;

/// Fixed denominator for pricing-distribution bar widths.
/// Pinned to the largest authored bucket count in the fixtures, not
/// recomputed from the data — if the fixture buckets change, this must too.
pub const PRICING_BAR_DENOMINATOR: f64 = 79.0;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub api_port: u16,
    /// Deployment environment name, shown by /api/health only (ENVIRONMENT).
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            api_port: std::env::var("API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .map_err(|_| AppError::Config("API_PORT must be a valid port number".to_string()))?,
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        })
    }
}
