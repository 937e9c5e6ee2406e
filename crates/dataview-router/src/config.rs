// File: src/config.rs
// Purpose: Configuration parsing from dataview.toml and route file loading

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{Route, RouteTable};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Whether static segments compare ignoring ASCII case (default: true)
    #[serde(default = "default_true")]
    pub case_insensitive: bool,

    /// Base path the application is served under (e.g., "/app")
    #[serde(default)]
    pub base_path: Option<String>,

    /// TOML route file replacing the built-in table
    #[serde(default)]
    pub routes_file: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset (default: "warn")
    #[serde(default = "default_level")]
    pub level: String,
}

/// Top-level shape of a route file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteFile {
    #[serde(default)]
    pub routes: Vec<Route<String>>,
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            case_insensitive: default_true(),
            base_path: None,
            routes_file: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./dataview.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("dataview.toml")
    }
}

impl RouteFile {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse route file")
    }

    /// Reads and parses a route file; unlike the config, it must exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read route file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Invalid route file: {:?}", path))
    }

    /// Builds a validated table configured by `routing`
    pub fn into_table(self, routing: &RoutingConfig) -> Result<RouteTable<String>> {
        let table = RouteTable::new(self.routes).context("Invalid route declarations")?;
        Ok(table.with_config(routing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.routing.case_insensitive);
        assert_eq!(config.routing.base_path, None);
        assert_eq!(config.routing.routes_file, None);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert!(config.routing.case_insensitive);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_missing_config_file_is_default() {
        let config = Config::load("definitely/not/here/dataview.toml").unwrap();
        assert!(config.routing.case_insensitive);
    }

    #[test]
    fn test_custom_routing() {
        let toml = r#"
            [routing]
            case_insensitive = false
            base_path = "/app"
            routes_file = "routes.toml"

            [logging]
            level = "debug"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.routing.case_insensitive);
        assert_eq!(config.routing.base_path.as_deref(), Some("/app"));
        assert_eq!(config.routing.routes_file.as_deref(), Some("routes.toml"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_route_file_into_table() {
        let content = r#"
            [[routes]]
            path = "/login"
            name = "Login"
            component = "LoginPage"

            [[routes]]
            path = "/mainpage"
            component = "MainPage"

            [[routes.children]]
            path = "DataAnalysis/Visualize/:id?"
            name = "Visualize"
            component = "Visualize"
        "#;
        let routing = RoutingConfig {
            base_path: Some("/app".to_string()),
            ..RoutingConfig::default()
        };
        let table = RouteFile::parse(content).unwrap().into_table(&routing).unwrap();

        assert_eq!(table.len(), 3);
        assert!(table.is_case_insensitive());
        let m = table.resolve("/app/MainPage/dataanalysis/visualize/5").unwrap();
        assert_eq!(m.name(), Some("Visualize"));
        assert_eq!(m.param("id"), Some("5"));
    }

    #[test]
    fn test_route_file_rejects_duplicate_names() {
        let content = r#"
            [[routes]]
            path = "/login"
            name = "Login"
            component = "LoginPage"

            [[routes]]
            path = "/signin"
            name = "Login"
            component = "LoginPage"
        "#;
        let err = RouteFile::parse(content)
            .unwrap()
            .into_table(&RoutingConfig::default())
            .unwrap_err();
        assert!(format!("{:#}", err).contains("route name `Login`"));
    }
}
