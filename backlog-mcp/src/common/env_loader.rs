//! Environment variable loading utilities
//!
//! This module provides common patterns for loading environment variables
//! with fallback defaults.

use std::env;

/// Load an environment variable with a string default
pub fn load_env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load an environment variable, treating unset and blank values as absent
pub fn load_env_non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Builder for loading multiple environment variables with consistent prefix
#[derive(Debug)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a new environment loader with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Full variable name for a suffix
    pub fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    /// Load a string value with default
    pub fn load_string(&self, suffix: &str, default: &str) -> String {
        load_env_string(&self.key(suffix), default)
    }

    /// Load a value that must be present and non-blank to count
    pub fn load_non_empty(&self, suffix: &str) -> Option<String> {
        load_env_non_empty(&self.key(suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_env_string() {
        let key = "BACKLOG_TEST_STRING_VAR";
        let default = "default_value";

        env::remove_var(key);
        assert_eq!(load_env_string(key, default), default);

        env::set_var(key, "test_value");
        assert_eq!(load_env_string(key, default), "test_value");

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_load_env_non_empty_ignores_blank() {
        let key = "BACKLOG_TEST_BLANK_VAR";

        env::set_var(key, "   ");
        assert_eq!(load_env_non_empty(key), None);

        env::set_var(key, " value ");
        assert_eq!(load_env_non_empty(key), Some("value".to_string()));

        env::remove_var(key);
        assert_eq!(load_env_non_empty(key), None);
    }

    #[test]
    #[serial]
    fn test_env_loader_prefix() {
        let loader = EnvLoader::new("BACKLOG_TEST");
        assert_eq!(loader.key("DOMAIN"), "BACKLOG_TEST_DOMAIN");

        env::set_var("BACKLOG_TEST_DOMAIN", "backlog.jp");
        assert_eq!(loader.load_string("DOMAIN", "backlog.com"), "backlog.jp");
        env::remove_var("BACKLOG_TEST_DOMAIN");
        assert_eq!(loader.load_string("DOMAIN", "backlog.com"), "backlog.com");
    }
}
