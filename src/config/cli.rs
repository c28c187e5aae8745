use crate::config::CliConfig;
use crate::domain::event::GatewayRequest;
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_resource_path, Validate,
};
use std::collections::HashMap;
use std::path::Path;

/// clap value parser for `KEY=VALUE` flags. The value may itself contain `=`.
pub fn parse_key_val(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    if key.trim().is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

pub async fn load_event<P: AsRef<Path>>(path: P) -> Result<GatewayRequest> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| GatewayError::ConfigError {
        message: format!("Failed to read event file {}: {}", path.display(), e),
    })?;
    Ok(serde_json::from_str(&raw)?)
}

impl CliConfig {
    /// The event to dispatch: the event file when given, otherwise one
    /// assembled from the route flags.
    pub async fn to_request(&self) -> Result<GatewayRequest> {
        if let Some(path) = &self.event {
            tracing::debug!("Reading gateway event from {}", path);
            return load_event(path).await;
        }

        let to_map = |pairs: &[(String, String)]| {
            (!pairs.is_empty()).then(|| pairs.iter().cloned().collect::<HashMap<_, _>>())
        };

        Ok(GatewayRequest {
            route_key: self.route_key.clone(),
            query_string_parameters: to_map(&self.query),
            path_parameters: to_map(&self.path_params),
            body: self.body.clone(),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("route_key", &self.route_key)?;
        if let Some(resource_path) = &self.resource_path {
            validate_resource_path("resource_path", resource_path)?;
        }
        if let Some(event) = &self.event {
            validate_path("event", event)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("start=0").unwrap(),
            ("start".to_string(), "0".to_string())
        );
        assert_eq!(
            parse_key_val("q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_key_val("end=").unwrap().1, "");
        assert!(parse_key_val("start").is_err());
        assert!(parse_key_val("=1").is_err());
    }

    #[tokio::test]
    async fn test_request_from_flags() {
        let config = CliConfig::parse_from([
            "employee-gateway",
            "--query",
            "start=0",
            "--query",
            "end=2",
        ]);
        assert!(config.validate().is_ok());

        let request = config.to_request().await.unwrap();
        assert_eq!(request.route_key, "GET /employee");
        let query = request.query().unwrap();
        assert_eq!(query.get("start").map(String::as_str), Some("0"));
        assert_eq!(query.get("end").map(String::as_str), Some("2"));
        assert!(request.path_parameters.is_none());
    }

    #[tokio::test]
    async fn test_request_from_event_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("event.json");
        std::fs::write(
            &path,
            r#"{"routeKey":"POST /employee","body":"{\"name\":\"alice\",\"employee_id\":5}"}"#,
        )
        .unwrap();

        let config = CliConfig::parse_from([
            "employee-gateway",
            "--route-key",
            "GET /employee",
            "--event",
            path.to_str().unwrap(),
        ]);
        let request = config.to_request().await.unwrap();
        assert_eq!(request.route_key, "POST /employee");
        assert!(request.body.unwrap().contains("alice"));
    }

    #[tokio::test]
    async fn test_missing_event_file_is_config_error() {
        let result = load_event("/definitely/not/here.json").await;
        assert!(matches!(result, Err(GatewayError::ConfigError { .. })));
    }
}
