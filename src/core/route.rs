use std::fmt;

pub const DEFAULT_RESOURCE_PATH: &str = "/employee";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Get,
    Create,
    Unknown,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Route::List => "list",
            Route::Get => "get-by-id",
            Route::Create => "create",
            Route::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Resolves gateway route keys (`"GET /employee/{id}"`) against one resource path.
#[derive(Debug, Clone)]
pub struct RouteTable {
    list_key: String,
    get_key: String,
    create_key: String,
}

impl RouteTable {
    pub fn new(resource_path: &str) -> Self {
        Self {
            list_key: format!("GET {}", resource_path),
            get_key: format!("GET {}/{{id}}", resource_path.trim_end_matches('/')),
            create_key: format!("POST {}", resource_path),
        }
    }

    pub fn resolve(&self, route_key: &str) -> Route {
        if route_key == self.list_key {
            Route::List
        } else if route_key == self.get_key {
            Route::Get
        } else if route_key == self.create_key {
            Route::Create
        } else {
            Route::Unknown
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes() {
        let table = RouteTable::default();
        assert_eq!(table.resolve("GET /employee"), Route::List);
        assert_eq!(table.resolve("GET /employee/{id}"), Route::Get);
        assert_eq!(table.resolve("POST /employee"), Route::Create);
    }

    #[test]
    fn test_unrecognized_routes() {
        let table = RouteTable::default();
        assert_eq!(table.resolve("DELETE /employee"), Route::Unknown);
        assert_eq!(table.resolve("get /employee"), Route::Unknown);
        assert_eq!(table.resolve("POST /employee/{id}"), Route::Unknown);
        assert_eq!(table.resolve("$default"), Route::Unknown);
        assert_eq!(table.resolve(""), Route::Unknown);
    }

    #[test]
    fn test_custom_resource_path() {
        let table = RouteTable::new("/v1/staff");
        assert_eq!(table.resolve("GET /v1/staff"), Route::List);
        assert_eq!(table.resolve("GET /v1/staff/{id}"), Route::Get);
        assert_eq!(table.resolve("GET /employee"), Route::Unknown);
        assert_eq!(table.resolve("POST /v1/staff"), Route::Create);
    }

    #[test]
    fn test_root_resource_path() {
        let table = RouteTable::new("/");
        assert_eq!(table.resolve("GET /"), Route::List);
        assert_eq!(table.resolve("GET /{id}"), Route::Get);
    }
}
