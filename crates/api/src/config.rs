use std::fmt::Display;
use std::str::FromStr;

/// Server configuration loaded from environment variables.
///
/// Every field has a local-development default.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address for both listeners.
    pub host: String,
    /// HTTP port serving REST and GraphQL.
    pub port: u16,
    pub grpc_port: u16,
    /// Allowed CORS origins, from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// How long to wait for the gRPC server to drain after shutdown starts.
    pub shutdown_timeout_secs: u64,
    /// PostgreSQL URL. When unset the service runs on the in-memory store.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `GRPC_PORT`                | `50051`                    |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`    | `30`                       |
    /// | `DATABASE_URL`             | unset (in-memory store)    |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                       |
    ///
    /// Panics on a value that does not parse, so bad deployments fail at
    /// startup.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", String::from("0.0.0.0")),
            port: env_or("PORT", 3000),
            grpc_port: env_or("GRPC_PORT", 50051),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_else(|_| vec![String::from("http://localhost:5173")]),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: env_or("SHUTDOWN_TIMEOUT_SECS", 30),
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 20),
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
