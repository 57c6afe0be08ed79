//! Configuration for the Registry API

use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Deployment environment, read from `APP_ENV`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// HTTP server binding
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where uploaded product images land and how they are addressed
#[derive(Clone, Debug)]
pub struct UploadConfig {
    /// Directory the image store writes into
    pub dir: PathBuf,
    /// URL prefix under which the directory is served
    pub public_prefix: String,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub upload: UploadConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3005".to_string())
            .parse()
            .map_err(|e| eyre::eyre!("Invalid PORT value: {}", e))?;

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        let public_prefix =
            std::env::var("UPLOAD_PUBLIC_PREFIX").unwrap_or_else(|_| "/uploads".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            upload: UploadConfig {
                dir: PathBuf::from(upload_dir),
                public_prefix,
            },
        })
    }
}

/// Initialize tracing with environment-aware output.
///
/// Production gets JSON logs for aggregation; development gets a
/// pretty-printed format. `RUST_LOG` overrides the default `info` filter.
/// Safe to call multiple times (later calls are no-ops).
pub fn init_tracing(environment: Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match environment {
        Environment::Production => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_target(false))
                .try_init();
        }
        Environment::Development => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init();
        }
    }
}
