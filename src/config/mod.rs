#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

use crate::core::dispatcher::Dispatcher;
use crate::core::route::RouteTable;
use crate::core::store::InMemoryStore;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_resource_path;
use toml_config::GatewayToml;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "employee-gateway")]
#[command(about = "Invoke the employee route handler locally with a single gateway event")]
pub struct CliConfig {
    #[arg(long, default_value = "GET /employee")]
    pub route_key: String,

    #[arg(long = "query", value_name = "KEY=VALUE", value_parser = cli::parse_key_val)]
    pub query: Vec<(String, String)>,

    #[arg(long = "path-param", value_name = "KEY=VALUE", value_parser = cli::parse_key_val)]
    pub path_params: Vec<(String, String)>,

    #[arg(long)]
    pub body: Option<String>,

    #[arg(long, help = "JSON gateway event file; replaces the route flags")]
    pub event: Option<String>,

    #[arg(long, help = "TOML file with [gateway] settings and [[seed]] records")]
    pub config: Option<String>,

    #[arg(long)]
    pub resource_path: Option<String>,

    #[arg(long, help = "Pretty-print the response")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn resource_path(&self) -> Option<&str> {
        self.resource_path.as_deref()
    }

    fn seed_path(&self) -> Option<&str> {
        self.config.as_deref()
    }
}

/// Build a dispatcher over a fresh in-memory store.
///
/// Resource path precedence: explicit setting, then the seed file's
/// `[gateway]` section, then `/employee`.
pub fn build_dispatcher<C: ConfigProvider>(config: &C) -> Result<Dispatcher<InMemoryStore>> {
    let file = match config.seed_path() {
        Some(path) => {
            tracing::info!("Loading seed config from {}", path);
            GatewayToml::from_file(path)?
        }
        None => GatewayToml::default(),
    };

    let resource_path = config
        .resource_path()
        .unwrap_or(file.gateway.resource_path.as_str());
    validate_resource_path("resource_path", resource_path)?;

    let employees = file.employees();
    tracing::info!(
        "Serving {} seeded employees under {}",
        employees.len(),
        resource_path
    );

    Ok(Dispatcher::with_routes(
        InMemoryStore::new(employees),
        RouteTable::new(resource_path),
    ))
}
