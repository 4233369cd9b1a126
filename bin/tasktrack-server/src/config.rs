//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for tasktrack-server.
///
/// Every field has a default so the server works out-of-the-box without any
/// environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// SQLite (or other) database URL (default: `"sqlite://tasktrack.db"`).
    /// Any sqlx-compatible connection string works – swap the scheme to move
    /// the tasks collection to another backend.
    pub database_url: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated CORS origin allow-list; `None` means wildcard.
    pub cors_allowed_origins: Option<String>,

    /// Serve the Swagger UI and OpenAPI JSON (default: `true`).
    pub enable_swagger: bool,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("TASKTRACK_BIND", "0.0.0.0:3000"),
            database_url: env_or("TASKTRACK_DATABASE_URL", "sqlite://tasktrack.db"),
            log_level: env_or("TASKTRACK_LOG", "info"),
            log_json: std::env::var("TASKTRACK_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            cors_allowed_origins: std::env::var("TASKTRACK_CORS_ORIGINS").ok(),
            enable_swagger: std::env::var("TASKTRACK_ENABLE_SWAGGER")
                .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false")))
                .unwrap_or(true),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
