use anyhow::Context;
use clap::Parser;
use employee_gateway::utils::{logger, validation::Validate};
use employee_gateway::{build_dispatcher, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting employee-gateway local invoke");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let dispatcher = build_dispatcher(&config).context("failed to set up dispatcher")?;
    let request = config
        .to_request()
        .await
        .context("failed to build gateway event")?;

    let response = dispatcher.handle(&request).await;
    tracing::info!("📬 {} -> {}", request.route_key, response.status_code);

    let output = if config.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(())
}
