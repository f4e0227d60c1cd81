use std::env;
use std::path::PathBuf;

/// Which login backend answers `/auth/login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Fixed demo credentials with a fixed token.
    Static,
    /// `users` table with argon2 hashes and JWT sessions.
    Database,
}

impl AuthMode {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "database" | "db" => Self::Database,
            _ => Self::Static,
        }
    }
}

/// Demo account served by the static login backend.
#[derive(Debug, Clone)]
pub struct DemoCredentials {
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_access_token_expiry_secs: i64,
    pub auth_mode: AuthMode,
    pub demo: DemoCredentials,
    pub frontend_url: String,
    pub tls_cert_path: Option<PathBuf>,
    pub tls_key_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_access_token_expiry_secs: env::var("JWT_ACCESS_TOKEN_EXPIRY_SECS")
                .unwrap_or_else(|_| "900".to_string())
                .parse()
                .unwrap_or(900),
            auth_mode: AuthMode::parse(
                &env::var("AUTH_MODE").unwrap_or_else(|_| "static".to_string()),
            ),
            demo: DemoCredentials {
                username: env::var("DEMO_USERNAME").unwrap_or_else(|_| "admin".to_string()),
                password: env::var("DEMO_PASSWORD").unwrap_or_else(|_| "demo1234".to_string()),
                token: env::var("DEMO_TOKEN").unwrap_or_else(|_| "demo-token-12345".to_string()),
            },
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            tls_cert_path: env::var("TLS_CERT_PATH").ok().map(PathBuf::from),
            tls_key_path: env::var("TLS_KEY_PATH").ok().map(PathBuf::from),
        })
    }

    /// Certificate and key paths, only when both are configured.
    pub fn tls_paths(&self) -> Option<(&PathBuf, &PathBuf)> {
        match (&self.tls_cert_path, &self.tls_key_path) {
            (Some(cert), Some(key)) => Some((cert, key)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_mode_parsing() {
        assert_eq!(AuthMode::parse("database"), AuthMode::Database);
        assert_eq!(AuthMode::parse(" DB "), AuthMode::Database);
        assert_eq!(AuthMode::parse("static"), AuthMode::Static);
        assert_eq!(AuthMode::parse("anything-else"), AuthMode::Static);
    }

    #[test]
    fn tls_requires_both_paths() {
        let mut config = AppConfig {
            database_url: "postgres://localhost/finboard".to_string(),
            database_max_connections: 1,
            host: "127.0.0.1".to_string(),
            port: 0,
            jwt_secret: "secret".to_string(),
            jwt_access_token_expiry_secs: 900,
            auth_mode: AuthMode::Static,
            demo: DemoCredentials {
                username: "admin".to_string(),
                password: "demo1234".to_string(),
                token: "demo-token-12345".to_string(),
            },
            frontend_url: "http://localhost:5173".to_string(),
            tls_cert_path: Some(PathBuf::from("cert.pem")),
            tls_key_path: None,
        };
        assert!(config.tls_paths().is_none());

        config.tls_key_path = Some(PathBuf::from("key.pem"));
        assert!(config.tls_paths().is_some());
    }
}
