use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The subset of an API Gateway HTTP API (payload v2) event the handler reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    pub route_key: String,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl GatewayRequest {
    pub fn new(route_key: impl Into<String>) -> Self {
        Self {
            route_key: route_key.into(),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_path_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Query parameters, treating an empty map the same as none at all.
    pub fn query(&self) -> Option<&HashMap<String, String>> {
        self.query_string_parameters
            .as_ref()
            .filter(|params| !params.is_empty())
    }

    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl GatewayResponse {
    pub fn new(status_code: u16, body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        Self {
            status_code,
            headers,
            body,
            is_base64_encoded: false,
        }
    }

    pub fn ok(body: String) -> Self {
        Self::new(200, body)
    }
}

/// Wrapper whose `message` carries an already-serialized payload.
///
/// An absent `message` is the single "nothing found" shape and serializes as `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    pub fn with(message: String) -> Self {
        Self {
            message: Some(message),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_gateway_event() {
        let raw = r#"{
            "version": "2.0",
            "routeKey": "GET /employee/{id}",
            "rawPath": "/employee/2",
            "pathParameters": {"id": "2"},
            "requestContext": {"http": {"method": "GET"}}
        }"#;
        let request: GatewayRequest = serde_json::from_str(raw).unwrap();

        assert_eq!(request.route_key, "GET /employee/{id}");
        assert_eq!(request.path_param("id"), Some("2"));
        assert!(request.query().is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_empty_query_map_counts_as_absent() {
        let mut request = GatewayRequest::new("GET /employee");
        request.query_string_parameters = Some(HashMap::new());
        assert!(request.query().is_none());
    }

    #[test]
    fn test_envelope_shapes() {
        assert_eq!(serde_json::to_string(&Envelope::empty()).unwrap(), "{}");
        assert_eq!(
            serde_json::to_string(&Envelope::with("[]".to_string())).unwrap(),
            r#"{"message":"[]"}"#
        );
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let value = serde_json::to_value(GatewayResponse::ok("[]".to_string())).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["isBase64Encoded"], false);
        assert_eq!(value["headers"]["content-type"], "application/json");
    }
}
