pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{build_dispatcher, lambda::LambdaConfig, toml_config::GatewayToml};
pub use crate::core::{dispatcher::Dispatcher, route::RouteTable, store::InMemoryStore};
pub use crate::domain::event::{GatewayRequest, GatewayResponse};
pub use crate::domain::model::{Employee, EmployeeId};
pub use crate::domain::ports::{ConfigProvider, EmployeeStore};
pub use crate::utils::error::{GatewayError, Result};
