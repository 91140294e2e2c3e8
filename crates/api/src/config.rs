use std::time::Duration;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Artificial delay before a login gate answers (default: `1000`).
    pub login_delay_ms: u64,
    /// Interval between simulated upload progress steps (default: `500`).
    pub upload_tick_ms: u64,
    /// Hard ceiling after which an upload is forced complete (default: `3000`).
    pub upload_deadline_ms: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `LOGIN_DELAY_MS`       | `1000`                     |
    /// | `UPLOAD_TICK_MS`       | `500`                      |
    /// | `UPLOAD_DEADLINE_MS`   | `3000`                     |
    ///
    /// See [`JwtConfig::from_env`] for the token settings.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = env_u64("REQUEST_TIMEOUT_SECS", 30);
        let login_delay_ms = env_u64("LOGIN_DELAY_MS", 1000);
        let upload_tick_ms = env_u64("UPLOAD_TICK_MS", 500);
        let upload_deadline_ms = env_u64("UPLOAD_DEADLINE_MS", 3000);

        assert!(upload_tick_ms > 0, "UPLOAD_TICK_MS must be greater than zero");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            login_delay_ms,
            upload_tick_ms,
            upload_deadline_ms,
            jwt: JwtConfig::from_env(),
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn upload_tick(&self) -> Duration {
        Duration::from_millis(self.upload_tick_ms)
    }

    pub fn upload_deadline(&self) -> Duration {
        Duration::from_millis(self.upload_deadline_ms)
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .map(|raw| {
            raw.parse()
                .unwrap_or_else(|_| panic!("{key} must be a valid u64"))
        })
        .unwrap_or(default)
}
