//! Runtime configuration for the `netaddr` binary.
//!
//! Values come from the environment, after loading a `.env` file if present.

use crate::models::Kind;
use std::error::Error;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path of the log4rs YAML file (`NETADDR_LOG_CONFIG`).
    pub log_config: String,
    /// Kind used when a command does not name one (`NETADDR_DEFAULT_KIND`).
    pub default_kind: Kind,
    /// Colored terminal output (`NETADDR_COLOR`).
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            default_kind: Kind::Inet,
            color: true,
        }
    }
}

impl Config {
    /// Load `.env` and read the `NETADDR_*` variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from a variable lookup, falling back to defaults.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Config, Box<dyn Error>> {
        let mut config = Config::default();
        if let Some(path) = get("NETADDR_LOG_CONFIG") {
            config.log_config = path;
        }
        if let Some(kind) = get("NETADDR_DEFAULT_KIND") {
            config.default_kind = kind
                .parse()
                .map_err(|e| format!("NETADDR_DEFAULT_KIND: {e}"))?;
        }
        if let Some(color) = get("NETADDR_COLOR") {
            config.color = parse_bool(&color)
                .ok_or_else(|| format!("NETADDR_COLOR: expected a boolean, got \"{color}\""))?;
        }
        log::debug!("config: {config:?}");
        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config, "log4rs.yml");
        assert_eq!(config.default_kind, Kind::Inet);
        assert!(config.color);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(lookup(&[
            ("NETADDR_LOG_CONFIG", "/etc/netaddr/log.yml"),
            ("NETADDR_DEFAULT_KIND", "cidr"),
            ("NETADDR_COLOR", "off"),
        ]))
        .unwrap();
        assert_eq!(config.log_config, "/etc/netaddr/log.yml");
        assert_eq!(config.default_kind, Kind::Cidr);
        assert!(!config.color);
    }

    #[test]
    fn test_bad_values() {
        assert!(Config::from_vars(lookup(&[("NETADDR_DEFAULT_KIND", "ipaddr")])).is_err());
        assert!(Config::from_vars(lookup(&[("NETADDR_COLOR", "maybe")])).is_err());
    }
}
