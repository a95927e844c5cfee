// --- File: crates/netcafe_config/src/models.rs ---

use serde::{Deserialize, Serialize};

use crate::ConfigError;

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served for paths no API route matches (the booking frontend).
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: None,
        }
    }
}

// --- Storage Selection ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Process-local store, lost on restart.
    #[default]
    Memory,
    /// Relational table reached through `database`.
    Sql,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

// --- Database Config ---
// Either a full `url`, or the discrete fields of the legacy config.json
// (db_user, db_password, db_host, db_port, db_name).
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: Option<String>, // e.g. NETCAFE__DATABASE__URL
    #[serde(default)]
    pub driver: Option<String>, // sqlite | postgres | mysql, defaults to mysql for discrete fields
    #[serde(default, alias = "db_user")]
    pub user: Option<String>,
    #[serde(default, alias = "db_password")]
    pub password: Option<String>, // usually "secret_from_env"
    #[serde(default, alias = "db_host")]
    pub host: Option<String>,
    #[serde(default, alias = "db_port")]
    pub port: Option<String>,
    #[serde(default, alias = "db_name")]
    pub name: Option<String>,
}

impl DatabaseConfig {
    /// Resolves the connection URL, preferring an explicit `url`.
    pub fn connection_url(&self) -> Result<String, ConfigError> {
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            return Ok(url.to_string());
        }

        let name = self
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ConfigError::Message("database.url or database.name is required".into()))?;
        let driver = self.driver.as_deref().unwrap_or("mysql");

        if driver == "sqlite" {
            return Ok(format!("sqlite://{name}"));
        }

        let user = self.user.as_deref().unwrap_or_default();
        let password = self.password.as_deref().unwrap_or_default();
        let host = self.host.as_deref().unwrap_or("localhost");
        let credentials = match (user.is_empty(), password.is_empty()) {
            (true, _) => String::new(),
            (false, true) => format!("{user}@"),
            (false, false) => format!("{user}:{password}@"),
        };
        let authority = match self.port.as_deref() {
            Some(port) if !port.is_empty() => format!("{host}:{port}"),
            _ => host.to_string(),
        };

        Ok(format!("{driver}://{credentials}{authority}/{name}"))
    }
}

// --- Google Calendar Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GcalAuthMode {
    /// `key_path` points at a service-account key.
    #[default]
    ServiceAccount,
    /// `key_path` points at an OAuth client secret (credentials.json);
    /// the user consents once and the token is cached on disk.
    Installed,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GcalConfig {
    #[serde(default)]
    pub auth: GcalAuthMode,
    pub key_path: Option<String>, // Mandatory
    #[serde(default)]
    pub token_cache_path: Option<String>, // installed flow only, defaults to token.json
    #[serde(default)]
    pub calendar_id: Option<String>, // defaults to "primary"
}

impl GcalConfig {
    pub fn calendar_id(&self) -> &str {
        self.calendar_id.as_deref().unwrap_or("primary")
    }

    pub fn token_cache_path(&self) -> &str {
        self.token_cache_path.as_deref().unwrap_or("token.json")
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub storage: StorageConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gcal: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
}
