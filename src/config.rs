/// Configuration management for Recipe Service
///
/// This module handles loading configuration from environment variables.
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// MongoDB configuration
    pub mongo: MongoConfig,
    /// Seed fixture configuration
    pub seed: SeedConfig,
}

/// Application settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// MongoDB configuration
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string
    pub uri: String,
    /// Database holding the `recipes` collection
    pub database: String,
}

/// Seed fixture configuration
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Path to the JSON fixture imported at startup
    pub fixture_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("RECIPE_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("RECIPE_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            mongo: MongoConfig {
                uri: std::env::var("MONGODB_URI")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
                database: std::env::var("MONGODB_DATABASE")
                    .unwrap_or_else(|_| "recipe_service".to_string()),
            },
            seed: SeedConfig {
                fixture_path: std::env::var("SEED_FIXTURE_PATH")
                    .unwrap_or_else(|_| "mock-data.json".to_string())
                    .into(),
            },
        })
    }
}
