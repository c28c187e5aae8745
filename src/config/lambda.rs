use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_resource_path, Validate};
use std::env;

/// Settings read from the function's environment.
///
/// - `RESOURCE_PATH`: path the routes are mounted on (else the seed file's, else `/employee`)
/// - `SEED_CONFIG`: optional TOML file bundled with the function
#[derive(Debug, Clone, Default)]
pub struct LambdaConfig {
    pub resource_path: Option<String>,
    pub seed_config: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            resource_path: non_empty("RESOURCE_PATH"),
            seed_config: non_empty("SEED_CONFIG"),
        }
    }
}

impl ConfigProvider for LambdaConfig {
    fn resource_path(&self) -> Option<&str> {
        self.resource_path.as_deref()
    }

    fn seed_path(&self) -> Option<&str> {
        self.seed_config.as_deref()
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        if let Some(resource_path) = &self.resource_path {
            validate_resource_path("RESOURCE_PATH", resource_path)?;
        }
        if let Some(seed_config) = &self.seed_config {
            validate_path("SEED_CONFIG", seed_config)?;
        }

        tracing::debug!("Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LambdaConfig::from_lookup(lookup(&[]));
        assert!(config.resource_path().is_none());
        assert!(config.seed_path().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reads_values() {
        let config = LambdaConfig::from_lookup(lookup(&[
            ("RESOURCE_PATH", "/staff"),
            ("SEED_CONFIG", "/var/task/seed.toml"),
        ]));
        assert_eq!(config.resource_path(), Some("/staff"));
        assert_eq!(config.seed_path(), Some("/var/task/seed.toml"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = LambdaConfig::from_lookup(lookup(&[("RESOURCE_PATH", "  ")]));
        assert!(config.resource_path().is_none());
    }

    #[test]
    fn test_bad_resource_path_fails_validation() {
        let config = LambdaConfig::from_lookup(lookup(&[("RESOURCE_PATH", "staff/")]));
        assert!(config.validate().is_err());
    }
}
