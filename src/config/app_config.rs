use crate::error::{AppError, Result};
use std::{env, path::PathBuf, str::FromStr};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub auth: AuthConfig,
    pub inventory: InventoryConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct InventoryConfig {
    /// Products with fewer units than this on hand are reported as leftovers.
    pub leftover_threshold: i32,
    pub export_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_or("PORT", env::var("PORT").ok(), 3000)?,
                max_body_size: parse_or("MAX_BODY_SIZE", env::var("MAX_BODY_SIZE").ok(), 10_485_760)?,
            },
            database: DatabaseConfig {
                url: env::var("DB_URL")?,
                max_connections: parse_or(
                    "DB_MAX_CONNECTIONS",
                    env::var("DB_MAX_CONNECTIONS").ok(),
                    20,
                )?,
            },
            cors: CorsConfig {
                allowed_origins: split_origins(&env::var("FRONTEND_URL")?),
            },
            auth: AuthConfig {
                jwt_secret: env::var("JWT_SECRET")
                    .map_err(|_| AppError::ConfigError("JWT_SECRET not set".to_string()))?,
            },
            inventory: InventoryConfig {
                leftover_threshold: parse_or(
                    "LEFTOVER_THRESHOLD",
                    env::var("LEFTOVER_THRESHOLD").ok(),
                    5,
                )?,
                export_path: env::var("EXPORT_PATH")
                    .unwrap_or_else(|_| "products.xlsx".to_string())
                    .into(),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_or<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::ConfigError(format!("Invalid {} value", name))),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
