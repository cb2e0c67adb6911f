use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub session_ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt: JwtConfig,
    /// Base URL the site is reachable at; confirmation links point back here.
    pub public_url: String,
    /// Skip email confirmation on sign-up (local development).
    pub auth_autoconfirm: bool,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "discovertech".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "authenticated".into()),
            session_ttl_minutes: env_parse("SESSION_TTL_MINUTES").unwrap_or(60 * 24 * 7),
        };
        Ok(Self {
            database_url,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS").unwrap_or(10),
            jwt,
            public_url: std::env::var("PUBLIC_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            auth_autoconfirm: std::env::var("AUTH_AUTOCONFIRM")
                .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "True"))
                .unwrap_or(false),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_parse("APP_PORT").unwrap_or(8080),
        })
    }

    /// Session cookies carry `Secure` when the site is served over https.
    pub fn secure_cookies(&self) -> bool {
        self.public_url.starts_with("https://")
    }

    /// Where sign-up confirmation links land.
    pub fn confirmation_target(&self) -> String {
        format!("{}/auth/callback", self.public_url)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}
