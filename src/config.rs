use std::collections::HashMap;
use std::env;
use std::time::Duration;

use config::Environment;
use serde::Deserialize;

use crate::entity::Theme;

pub const ENV_PREFIX: &str = "DEPOSITOS";
pub const DEFAULT_TABLE: &str = "depositos";
pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 100;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CURRENCY_LABEL: &str = "BOB";

// Unprefixed variables accepted as defaults, matching the hosted store's tooling
const FALLBACK_VARS: &[(&str, &str)] = &[
    ("SUPABASE_URL", "rest_url"),
    ("SUPABASE_ANON_KEY", "api_key"),
    ("DATABASE_URL", "database_url"),
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("No deposit store configured: set DEPOSITOS_DATABASE_URL or DEPOSITOS_REST_URL")]
    MissingStore,

    #[error("{0} backend selected but {1} is not set")]
    MissingSetting(&'static str, &'static str),

    #[error("Notification capacity must be greater than zero")]
    InvalidCapacity,

    #[error("Invalid table name: {0}")]
    InvalidTable(String),
}

/// Where deposits are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Rest,
    Postgres,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    pub fn theme(&self) -> Theme {
        match self {
            Self::Light => Theme::light(),
            Self::Dark => Theme::dark(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    backend: Option<StoreBackend>,
    rest_url: Option<String>,
    api_key: Option<String>,
    database_url: Option<String>,
    table: String,
    notification_capacity: usize,
    request_timeout_secs: u64,
    currency_label: String,
    theme: ThemeName,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: StoreBackend,

    /// Base URL of the REST table API, e.g. `https://xyz.supabase.co`
    pub rest_url: Option<String>,

    /// Key sent as `apikey` and bearer token to the REST API
    pub api_key: Option<String>,

    pub database_url: Option<String>,

    pub table: String,

    /// Maximum number of captured notifications kept in memory
    pub notification_capacity: usize,

    pub request_timeout_secs: u64,

    /// Label for the running total when visible deposits mix currencies
    pub currency_label: String,

    pub theme: ThemeName,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars().collect())
    }

    /// Loads configuration from an explicit variable map.
    ///
    /// `DEPOSITOS_*` variables take precedence over the unprefixed fallbacks.
    /// When no backend is named, a database URL selects Postgres and a REST
    /// URL selects the REST API.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("table", DEFAULT_TABLE)?
            .set_default("notification_capacity", DEFAULT_NOTIFICATION_CAPACITY as u64)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("currency_label", DEFAULT_CURRENCY_LABEL)?
            .set_default("theme", "light")?;

        for (var, key) in FALLBACK_VARS {
            if let Some(value) = vars.get(*var) {
                builder = builder.set_default(*key, value.as_str())?;
            }
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
            .build()?;

        let raw: RawConfig = settings.try_deserialize()?;
        Self::resolve(raw)
    }

    fn resolve(raw: RawConfig) -> Result<Self, ConfigError> {
        let rest_url = raw.rest_url.filter(|url| !url.is_empty());
        let api_key = raw.api_key.filter(|key| !key.is_empty());
        let database_url = raw.database_url.filter(|url| !url.is_empty());

        let backend = match raw.backend {
            Some(backend) => backend,
            None if database_url.is_some() => StoreBackend::Postgres,
            None if rest_url.is_some() => StoreBackend::Rest,
            None => return Err(ConfigError::MissingStore),
        };

        match backend {
            StoreBackend::Postgres if database_url.is_none() => {
                return Err(ConfigError::MissingSetting("postgres", "DEPOSITOS_DATABASE_URL"));
            }
            StoreBackend::Rest if rest_url.is_none() => {
                return Err(ConfigError::MissingSetting("rest", "DEPOSITOS_REST_URL"));
            }
            StoreBackend::Rest if api_key.is_none() => {
                return Err(ConfigError::MissingSetting("rest", "DEPOSITOS_API_KEY"));
            }
            _ => {}
        }

        if !is_valid_table_name(&raw.table) {
            return Err(ConfigError::InvalidTable(raw.table));
        }

        // The REST API exposes one schema per endpoint; qualified names are not a path
        if backend == StoreBackend::Rest && raw.table.contains('.') {
            return Err(ConfigError::InvalidTable(raw.table));
        }

        if raw.notification_capacity == 0 {
            return Err(ConfigError::InvalidCapacity);
        }

        Ok(Self {
            backend,
            rest_url: rest_url.map(|url| url.trim_end_matches('/').to_string()),
            api_key,
            database_url,
            table: raw.table,
            notification_capacity: raw.notification_capacity,
            request_timeout_secs: raw.request_timeout_secs,
            currency_label: raw.currency_label,
            theme: raw.theme,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// Table names end up in SQL text and URL paths
fn is_valid_table_name(table: &str) -> bool {
    !table.is_empty()
        && table
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_rest_from_fallback_vars() {
        let config = AppConfig::from_vars(vars(&[
            ("SUPABASE_URL", "https://demo.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap();

        assert_eq!(config.backend, StoreBackend::Rest);
        assert_eq!(config.rest_url.as_deref(), Some("https://demo.supabase.co"));
        assert_eq!(config.api_key.as_deref(), Some("anon"));
        assert_eq!(config.table, DEFAULT_TABLE);
        assert_eq!(config.notification_capacity, DEFAULT_NOTIFICATION_CAPACITY);
        assert_eq!(config.currency_label, "BOB");
        assert_eq!(config.theme, ThemeName::Light);
    }

    #[test]
    fn test_prefixed_vars_win() {
        let config = AppConfig::from_vars(vars(&[
            ("SUPABASE_URL", "https://fallback.example"),
            ("DEPOSITOS_REST_URL", "https://primary.example"),
            ("DEPOSITOS_API_KEY", "key"),
            ("DEPOSITOS_TABLE", "pagos"),
            ("DEPOSITOS_NOTIFICATION_CAPACITY", "8"),
            ("DEPOSITOS_THEME", "dark"),
        ]))
        .unwrap();

        assert_eq!(config.rest_url.as_deref(), Some("https://primary.example"));
        assert_eq!(config.table, "pagos");
        assert_eq!(config.notification_capacity, 8);
        assert_eq!(config.theme.theme(), Theme::dark());
    }

    #[test]
    fn test_database_url_selects_postgres() {
        let config = AppConfig::from_vars(vars(&[
            ("DATABASE_URL", "postgres://localhost/depositos"),
            ("SUPABASE_URL", "https://demo.supabase.co"),
        ]))
        .unwrap();

        assert_eq!(config.backend, StoreBackend::Postgres);
    }

    #[test]
    fn test_missing_store() {
        let err = AppConfig::from_vars(HashMap::new()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingStore));
    }

    #[test]
    fn test_rest_requires_api_key() {
        let err = AppConfig::from_vars(vars(&[("DEPOSITOS_REST_URL", "https://x.example")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingSetting("rest", _)));
    }

    #[test]
    fn test_table_name_validated() {
        let err = AppConfig::from_vars(vars(&[
            ("DEPOSITOS_DATABASE_URL", "postgres://localhost/depositos"),
            ("DEPOSITOS_TABLE", "depositos; drop table x"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTable(_)));

        assert!(is_valid_table_name("public.depositos"));
        assert!(!is_valid_table_name("public."));
    }

    #[test]
    fn test_rest_rejects_schema_qualified_table() {
        let err = AppConfig::from_vars(vars(&[
            ("DEPOSITOS_REST_URL", "https://x.example"),
            ("DEPOSITOS_API_KEY", "key"),
            ("DEPOSITOS_TABLE", "public.depositos"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTable(ref table) if table == "public.depositos"));

        let config = AppConfig::from_vars(vars(&[
            ("DEPOSITOS_DATABASE_URL", "postgres://localhost/depositos"),
            ("DEPOSITOS_TABLE", "public.depositos"),
        ]))
        .unwrap();
        assert_eq!(config.table, "public.depositos");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = AppConfig::from_vars(vars(&[
            ("DEPOSITOS_DATABASE_URL", "postgres://localhost/depositos"),
            ("DEPOSITOS_NOTIFICATION_CAPACITY", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCapacity));
    }
}
