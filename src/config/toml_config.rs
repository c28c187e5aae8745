use crate::core::route::DEFAULT_RESOURCE_PATH;
use crate::core::Employee;
use crate::domain::model::default_seed;
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_resource_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file config:
///
/// ```toml
/// [gateway]
/// resource_path = "/employee"
///
/// [[seed]]
/// name = "liam"
/// employee_id = 1
/// ```
///
/// A file without `[[seed]]` entries keeps the built-in seed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayToml {
    #[serde(default)]
    pub gateway: GatewaySection,
    #[serde(default)]
    pub seed: Vec<Employee>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySection {
    #[serde(default = "default_resource_path")]
    pub resource_path: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            resource_path: default_resource_path(),
        }
    }
}

fn default_resource_path() -> String {
    DEFAULT_RESOURCE_PATH.to_string()
}

impl GatewayToml {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GatewayError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GatewayToml = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Seed records for a fresh store.
    pub fn employees(&self) -> Vec<Employee> {
        if self.seed.is_empty() {
            default_seed()
        } else {
            self.seed.clone()
        }
    }
}

impl Validate for GatewayToml {
    fn validate(&self) -> Result<()> {
        validate_resource_path("gateway.resource_path", &self.gateway.resource_path)?;

        for (index, employee) in self.seed.iter().enumerate() {
            validate_non_empty_string(&format!("seed[{}].name", index), &employee.name)?;
        }

        Ok(())
    }
}
