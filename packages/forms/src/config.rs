//! # Catalog configuration: which hosted table to talk to
//!
//! The catalog views need a project URL and its public (anon) key. Three
//! sources are supported:
//!
//! - `catalog.toml` ([`CatalogConfig::filename`]) read by the desktop app:
//!
//!   ```toml
//!   url = "https://xyzcompany.supabase.co"
//!   anon_key = "eyJhbGciOi..."
//!   table = "books"   # optional
//!   ```
//!
//! - `SUPABASE_URL`, `SUPABASE_ANON_KEY` and optional `CATALOG_TABLE` from the
//!   process environment, after loading `.env` with `dotenvy` (native only).
//! - The same variables captured at compile time ([`CatalogConfig::from_build_env`]),
//!   which is how WASM builds are configured.
//!
//! With no configuration at all the apps fall back to an in-memory table.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const TABLE_VAR: &str = "CATALOG_TABLE";

/// Errors reading catalog configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid catalog.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Location and credentials of the `books` table.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`.
    pub url: String,
    /// Public anon key sent as `apikey` and bearer token.
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_table() -> String {
    "books".to_string()
}

impl fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("table", &self.table)
            .finish()
    }
}

impl CatalogConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            table: default_table(),
        }
    }

    /// Builder method to use a table other than `books`.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "catalog.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Build from a variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &'static str| lookup(name).filter(|v| !v.trim().is_empty());

        let url = get(URL_VAR).ok_or(ConfigError::Missing(URL_VAR))?;
        let anon_key = get(ANON_KEY_VAR).ok_or(ConfigError::Missing(ANON_KEY_VAR))?;
        let config = Self::new(url, anon_key);
        Ok(match get(TABLE_VAR) {
            Some(table) => config.with_table(table),
            None => config,
        })
    }

    /// Variables captured when the crate was compiled.
    pub fn from_build_env() -> Option<Self> {
        Self::from_lookup(|name| {
            match name {
                URL_VAR => option_env!("SUPABASE_URL"),
                ANON_KEY_VAR => option_env!("SUPABASE_ANON_KEY"),
                TABLE_VAR => option_env!("CATALOG_TABLE"),
                _ => None,
            }
            .map(str::to_string)
        })
        .ok()
    }

    /// Read the process environment, loading `.env` first.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read a `catalog.toml` file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_toml_roundtrip_and_default_table() {
        let config = CatalogConfig::from_toml(
            "url = \"https://demo.supabase.co\"\nanon_key = \"public-anon\"\n",
        )
        .unwrap();
        assert_eq!(config.table, "books");

        let back = CatalogConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_toml_missing_key_is_error() {
        let err = CatalogConfig::from_toml("url = \"https://demo.supabase.co\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (URL_VAR, "https://demo.supabase.co"),
            (ANON_KEY_VAR, "anon"),
            (TABLE_VAR, "catalog"),
        ]
        .into_iter()
        .collect();
        let config = CatalogConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.url, "https://demo.supabase.co");
        assert_eq!(config.table, "catalog");
    }

    #[test]
    fn test_from_lookup_blank_is_missing() {
        let err = CatalogConfig::from_lookup(|k| match k {
            URL_VAR => Some("https://demo.supabase.co".to_string()),
            ANON_KEY_VAR => Some("  ".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "SUPABASE_ANON_KEY not set");
    }

    #[test]
    fn test_debug_hides_key() {
        let text = format!("{:?}", CatalogConfig::new("https://demo.supabase.co", "secret"));
        assert!(!text.contains("secret"));
    }
}
