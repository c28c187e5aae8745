use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee id as it arrived on the wire.
///
/// Inserts are not type-checked: `5`, `"5"`, `5.5`, `null` or a missing id are
/// all stored verbatim. Lookups go through [`EmployeeId::normalized`], which
/// only yields a value for integral ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeId {
    Int(i64),
    Text(String),
    Other(serde_json::Value),
}

impl EmployeeId {
    pub fn normalized(&self) -> Option<i64> {
        match self {
            EmployeeId::Int(id) => Some(*id),
            EmployeeId::Text(raw) => parse_id(raw),
            EmployeeId::Other(serde_json::Value::Number(number)) => {
                number.as_i64().or_else(|| number.as_f64().and_then(integral))
            }
            EmployeeId::Other(_) => None,
        }
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        EmployeeId::Other(serde_json::Value::Null)
    }
}

impl From<i64> for EmployeeId {
    fn from(id: i64) -> Self {
        EmployeeId::Int(id)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeId::Int(id) => write!(f, "{}", id),
            EmployeeId::Text(raw) => f.write_str(raw),
            EmployeeId::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Parse an id from text into the canonical integer form.
///
/// Accepts surrounding whitespace and integral decimals such as `"2.0"`.
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<i64>() {
        return Some(id);
    }

    trimmed.parse::<f64>().ok().and_then(integral)
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    #[serde(default)]
    pub employee_id: EmployeeId,
}

impl Employee {
    pub fn new(name: impl Into<String>, employee_id: impl Into<EmployeeId>) -> Self {
        Self {
            name: name.into(),
            employee_id: employee_id.into(),
        }
    }

    pub fn has_id(&self, id: i64) -> bool {
        self.employee_id.normalized() == Some(id)
    }
}

/// Records every fresh process starts with.
pub fn default_seed() -> Vec<Employee> {
    vec![
        Employee::new("liam", 1),
        Employee::new("oliver", 2),
        Employee::new("charlotte", 3),
        Employee::new("isla", 4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&Employee::new("liam", 1)).unwrap();
        assert_eq!(json, r#"{"name":"liam","employee_id":1}"#);
    }

    #[test]
    fn test_text_id_round_trips_verbatim() {
        let employee: Employee =
            serde_json::from_str(r#"{"name":"ada","employee_id":"7"}"#).unwrap();
        assert_eq!(employee.employee_id, EmployeeId::Text("7".to_string()));
        assert!(employee.has_id(7));
        assert_eq!(
            serde_json::to_string(&employee).unwrap(),
            r#"{"name":"ada","employee_id":"7"}"#
        );
    }

    #[test]
    fn test_untyped_ids_are_kept() {
        let float: Employee =
            serde_json::from_str(r#"{"name":"bob","employee_id":5.5}"#).unwrap();
        assert_eq!(float.employee_id, EmployeeId::Other(serde_json::json!(5.5)));
        assert_eq!(float.employee_id.normalized(), None);

        let flag: Employee =
            serde_json::from_str(r#"{"name":"bob","employee_id":true}"#).unwrap();
        assert_eq!(flag.employee_id.normalized(), None);

        let missing: Employee = serde_json::from_str(r#"{"name":"bob"}"#).unwrap();
        assert_eq!(missing.employee_id, EmployeeId::default());
        assert_eq!(
            serde_json::to_string(&missing).unwrap(),
            r#"{"name":"bob","employee_id":null}"#
        );
    }

    #[test]
    fn test_integral_float_id_normalizes() {
        let employee: Employee =
            serde_json::from_str(r#"{"name":"bob","employee_id":6.0}"#).unwrap();
        assert!(employee.has_id(6));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("2"), Some(2));
        assert_eq!(parse_id(" 2 "), Some(2));
        assert_eq!(parse_id("2.0"), Some(2));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("2.5"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("inf"), None);
    }

    #[test]
    fn test_default_seed_order() {
        let names: Vec<_> = default_seed().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["liam", "oliver", "charlotte", "isla"]);
    }
}
