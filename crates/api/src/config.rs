use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Database connection string (default: local Postgres).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Admin account seeded at startup, when configured.
    pub admin: Option<AdminSeed>,
}

/// Startup-provisioned admin account credentials.
///
/// Replaces the legacy hardcoded operator identity: the admin is a regular
/// row in the user store, created once at boot when absent.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub name: String,
    pub phone: String,
    pub password: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                |
    /// |------------------------|----------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                              |
    /// | `PORT`                 | `3000`                                 |
    /// | `DATABASE_URL`         | `postgres://localhost:5432/opsboard`   |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                   |
    ///
    /// Admin seeding requires all three of `ADMIN_NAME`, `ADMIN_PHONE`, and
    /// `ADMIN_PASSWORD`; when any is missing no account is provisioned.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost:5432/opsboard".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        let admin = match (
            std::env::var("ADMIN_NAME"),
            std::env::var("ADMIN_PHONE"),
            std::env::var("ADMIN_PASSWORD"),
        ) {
            (Ok(name), Ok(phone), Ok(password)) => Some(AdminSeed {
                name,
                phone,
                password,
            }),
            _ => None,
        };

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            jwt,
            admin,
        }
    }
}
