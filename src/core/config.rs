//! Server Configuration

/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP service port |
/// | DATABASE_PATH | cafes.db | SQLite database file |
/// | API_KEY | TopSecretAPIKey | Static secret for the delete route |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Log level for the fmt subscriber |
///
/// The API_KEY default only exists for development convenience; deployments
/// set their own value.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub http_port: u16,
    /// Path to the SQLite database file
    pub database_path: String,
    /// Static secret required by DELETE /report-closed/{id}
    pub api_key: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "cafes.db".into()),
            api_key: std::env::var("API_KEY").unwrap_or_else(|_| "TopSecretAPIKey".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
