// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, storage location, CORS origins, and deployment mode from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, env_config};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Info`
    ///
    /// Filter directives such as `bakehouse_server=debug,tower_http=warn` use
    /// the level of their first bare or crate-level component.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        let first = s.split(',').next().unwrap_or_default();
        let level = first.rsplit('=').next().unwrap_or(first);
        match level.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe storage location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageUrl {
    /// Directory holding one JSON snapshot file per collection
    JsonDirectory {
        /// Directory path
        path: PathBuf,
    },
    /// `SQLite` database file
    Sqlite {
        /// Database file path
        path: PathBuf,
    },
    /// In-memory `SQLite` database
    SqliteMemory,
    /// Process memory only, nothing survives a restart
    Memory,
}

impl StorageUrl {
    /// Parse from string
    ///
    /// `sqlite::memory:`, `sqlite:<path>` and `memory` select their backends;
    /// anything else is a directory for JSON snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error for empty values and unsupported URL schemes.
    pub fn parse_url(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("storage URL must not be empty");
        }

        if let Some(path) = s.strip_prefix("sqlite:") {
            let path = path.trim_start_matches("//");
            return if path == ":memory:" {
                Ok(Self::SqliteMemory)
            } else if path.is_empty() {
                bail!("sqlite storage URL is missing a file path")
            } else {
                Ok(Self::Sqlite {
                    path: PathBuf::from(path),
                })
            };
        }

        if s == "memory" || s == "memory:" {
            return Ok(Self::Memory);
        }

        if let Some((scheme, _)) = s.split_once("://") {
            bail!("unsupported storage scheme '{scheme}'");
        }

        Ok(Self::JsonDirectory {
            path: PathBuf::from(s),
        })
    }

    /// Connection string understood by sqlx, for the `SQLite` variants
    #[must_use]
    pub fn sqlite_connection_string(&self) -> Option<String> {
        match self {
            Self::Sqlite { path } => Some(format!("sqlite:{}?mode=rwc", path.display())),
            Self::SqliteMemory => Some("sqlite::memory:".to_owned()),
            Self::JsonDirectory { .. } | Self::Memory => None,
        }
    }

    /// Short backend name for logs
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::JsonDirectory { .. } => "json-files",
            Self::Sqlite { .. } | Self::SqliteMemory => "sqlite",
            Self::Memory => "memory",
        }
    }

    /// Check if nothing is written to disk
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        matches!(self, Self::SqliteMemory | Self::Memory)
    }
}

impl Default for StorageUrl {
    fn default() -> Self {
        Self::JsonDirectory {
            path: PathBuf::from(defaults::STORAGE_URL),
        }
    }
}

impl fmt::Display for StorageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JsonDirectory { path } => write!(f, "{}", path.display()),
            Self::Sqlite { path } => write!(f, "sqlite:{}", path.display()),
            Self::SqliteMemory => write!(f, "sqlite::memory:"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma separated origins, or `*` for any
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

impl CorsConfig {
    /// Check if every origin is allowed
    #[must_use]
    pub fn allows_any(&self) -> bool {
        let origins = self.allowed_origins.trim();
        origins.is_empty() || origins == "*"
    }

    /// Individual origins, trimmed, empties dropped
    #[must_use]
    pub fn origins(&self) -> Vec<&str> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Where the three collections are persisted
    pub storage: StorageUrl,
    /// Cross-origin settings
    pub cors: CorsConfig,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            storage: StorageUrl::default(),
            cors: CorsConfig::default(),
            environment: Environment::default(),
            log_level: LogLevel::default(),
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = match env_config::http_port() {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid HTTP_PORT value '{raw}'"))?,
            None => defaults::HTTP_PORT,
        };

        let request_timeout_secs = match env_config::request_timeout_secs() {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid REQUEST_TIMEOUT_SECS value '{raw}'"))?,
            None => defaults::REQUEST_TIMEOUT_SECS,
        };

        let storage_raw = env_config::storage_url();
        let storage = StorageUrl::parse_url(&storage_raw)
            .with_context(|| format!("Invalid STORAGE_URL value '{storage_raw}'"))?;

        let config = Self {
            http_port,
            host: env_config::host(),
            storage,
            cors: CorsConfig {
                allowed_origins: env_config::cors_allowed_origins(),
            },
            environment: Environment::from_str_or_default(&env_config::environment()),
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            request_timeout_secs,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero or production runs on
    /// non-durable storage.
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            bail!("REQUEST_TIMEOUT_SECS must be greater than zero");
        }
        if self.environment.is_production() && self.storage.is_ephemeral() {
            bail!(
                "Production environment requires durable storage, got '{}'",
                self.storage
            );
        }
        Ok(())
    }

    /// Address to bind, `host:port`
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Bakehouse Server Configuration:\n\
             - Address: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Storage: {} ({})\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.storage,
            self.storage.backend_name(),
            if self.cors.allows_any() {
                "any"
            } else {
                self.cors.allowed_origins.as_str()
            },
            self.request_timeout_secs,
        )
    }
}
