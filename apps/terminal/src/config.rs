//! # Terminal Configuration
//!
//! Stores the till configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KASIR_STORE_NAME`, `KASIR_TERMINAL_NAME`)
//! 2. Config file (`$KASIR_CONFIG`, else `./kasir.toml` when present)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup. Nothing needs it to be mutable.

use std::env;

use config::{Config, Environment, File, FileFormat};
use kasir_core::catalog::standard_menu;
use kasir_core::{Catalog, MenuItem};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "KASIR_CONFIG";

/// Config file looked up in the working directory (`kasir.toml`).
pub const DEFAULT_CONFIG_FILE: &str = "kasir";

/// Prefix for per-field environment overrides.
pub const ENV_PREFIX: &str = "KASIR";

/// Till configuration.
///
/// Every field has a default, so an empty file (or none at all) reproduces
/// the stock till.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Shop name printed in the receipt banner.
    pub store_name: String,

    /// Name in the greeting line (`=== Selamat Datang di ERPE ===`).
    pub terminal_name: String,

    /// Menu table, in display order.
    pub menu: Vec<MenuItem>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            store_name: "TOKO MAKANAN SEDERHANA".to_string(),
            terminal_name: "ERPE".to_string(),
            menu: standard_menu(),
        }
    }
}

impl TerminalConfig {
    /// Loads configuration from the file and environment layers.
    ///
    /// A path given in `KASIR_CONFIG` must exist; the implicit
    /// `kasir.toml` is optional.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => {
                debug!(%path, "Using config file from environment");
                File::with_name(&path).required(true)
            }
            Err(_) => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Parses configuration from TOML text, ignoring the environment.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Builds and validates the catalog declared by `menu`.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        Catalog::new(self.menu.clone()).map_err(ConfigError::Catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasir_core::{ItemCode, Money};

    #[test]
    fn test_defaults_reproduce_stock_till() {
        let config = TerminalConfig::default();
        assert_eq!(config.store_name, "TOKO MAKANAN SEDERHANA");
        assert_eq!(config.terminal_name, "ERPE");
        assert_eq!(config.catalog().unwrap(), Catalog::standard());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TerminalConfig::from_toml_str("").unwrap();
        assert_eq!(config, TerminalConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_only_given_fields() {
        let config = TerminalConfig::from_toml_str(r#"store_name = "WARUNG BU SRI""#).unwrap();
        assert_eq!(config.store_name, "WARUNG BU SRI");
        assert_eq!(config.terminal_name, "ERPE");
        assert_eq!(config.menu.len(), 5);
    }

    #[test]
    fn test_menu_from_file() {
        let text = r#"
            terminal_name = "KASIR-2"

            [[menu]]
            code = 1
            name = "Nasi Uduk"
            price = 15000

            [[menu]]
            code = 2
            name = "Kopi Tubruk"
            price = 4000
        "#;

        let config = TerminalConfig::from_toml_str(text).unwrap();
        let catalog = config.catalog().unwrap();

        assert_eq!(config.terminal_name, "KASIR-2");
        assert_eq!(catalog.len(), 2);
        let item = catalog.lookup(ItemCode::new(2)).unwrap();
        assert_eq!(item.name, "Kopi Tubruk");
        assert_eq!(item.unit_price, Money::from_rupiah(4000));
    }

    #[test]
    fn test_invalid_menu_is_rejected() {
        let text = r#"
            [[menu]]
            code = 1
            name = "Kopi"
            price = 4000

            [[menu]]
            code = 1
            name = "Teh"
            price = 3000
        "#;

        let config = TerminalConfig::from_toml_str(text).unwrap();
        assert!(matches!(config.catalog(), Err(ConfigError::Catalog(_))));
    }

    // The only test that reads or writes KASIR_* variables, so it cannot
    // race with the others.
    #[test]
    fn test_load_layers_environment_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("till.toml");
        std::fs::write(
            &path,
            r#"
                store_name = "WARUNG FILE"
                terminal_name = "KASIR-FILE"

                [[menu]]
                code = 7
                name = "Es Jeruk"
                price = 7000
            "#,
        )
        .unwrap();

        env::set_var(CONFIG_PATH_VAR, &path);
        env::set_var("KASIR_STORE_NAME", "WARUNG ENV");
        let loaded = TerminalConfig::load();

        env::set_var(CONFIG_PATH_VAR, dir.path().join("absent.toml"));
        let missing = TerminalConfig::load();

        env::remove_var(CONFIG_PATH_VAR);
        env::remove_var("KASIR_STORE_NAME");

        let config = loaded.unwrap();
        assert_eq!(config.store_name, "WARUNG ENV");
        assert_eq!(config.terminal_name, "KASIR-FILE");
        assert_eq!(config.menu, vec![MenuItem::new(7, "Es Jeruk", 7000)]);

        assert!(matches!(missing, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_malformed_file_is_a_load_error() {
        let err = TerminalConfig::from_toml_str("store_name = [").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
