// Configuration read from the environment (and a `.env` file when present).
//
// Variables
// - WAITLIST_STORAGE_DIR: root directory of the persistent mirror (default ./data)
// - WAITLIST_NAMESPACE:   subdirectory holding this waitlist's keys (default waitlist)
// - WAITLIST_LOG:         tracing filter directive (default info)

use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_STORAGE_DIR: &str = "./data";
pub const DEFAULT_NAMESPACE: &str = "waitlist";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("namespace {0:?} must be non-empty and must not contain path separators")]
    InvalidNamespace(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistConfig {
    pub storage_dir: PathBuf,
    pub namespace: String,
    pub log_filter: String,
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            namespace: DEFAULT_NAMESPACE.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl WaitlistConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; unset variables use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            storage_dir: lookup("WAITLIST_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            namespace: lookup("WAITLIST_NAMESPACE").unwrap_or(defaults.namespace),
            log_filter: lookup("WAITLIST_LOG").unwrap_or(defaults.log_filter),
        };
        config.validate()
    }

    pub fn namespace_dir(&self) -> PathBuf {
        self.storage_dir.join(&self.namespace)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let ns = self.namespace.trim();
        if ns.is_empty() || ns == "." || ns == ".." || ns.contains(['/', '\\']) {
            return Err(ConfigError::InvalidNamespace(self.namespace));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod shell_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = WaitlistConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, WaitlistConfig::default());
        assert_eq!(config.namespace_dir(), PathBuf::from("./data/waitlist"));
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = WaitlistConfig::from_lookup(lookup_from(&[
            ("WAITLIST_STORAGE_DIR", "/var/lib/waitlist"),
            ("WAITLIST_NAMESPACE", "branch-2"),
            ("WAITLIST_LOG", "waitlist=debug"),
        ]))
        .unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("/var/lib/waitlist"));
        assert_eq!(config.namespace, "branch-2");
        assert_eq!(config.log_filter, "waitlist=debug");
        assert_eq!(
            config.namespace_dir(),
            PathBuf::from("/var/lib/waitlist/branch-2")
        );
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case("..")]
    #[case("a/b")]
    #[case("a\\b")]
    fn it_should_reject_an_invalid_namespace(#[case] namespace: &str) {
        let result =
            WaitlistConfig::from_lookup(lookup_from(&[("WAITLIST_NAMESPACE", namespace)]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidNamespace(namespace.to_string()))
        );
    }
}
