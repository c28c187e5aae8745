use employee_gateway::core::dispatcher::Dispatcher;
use employee_gateway::core::store::InMemoryStore;
use employee_gateway::utils::{logger, validation::Validate};
use employee_gateway::{build_dispatcher, GatewayRequest, GatewayResponse, LambdaConfig};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

async fn function_handler(
    dispatcher: &Dispatcher<InMemoryStore>,
    event: LambdaEvent<GatewayRequest>,
) -> Result<GatewayResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "Received gateway event");
    Ok(dispatcher.handle(&event.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env();
    config.validate()?;

    // 整個執行環境共用同一份資料
    let dispatcher = build_dispatcher(&config)?;
    let dispatcher = &dispatcher;

    tracing::info!("Employee gateway Lambda ready");
    run(service_fn(move |event: LambdaEvent<GatewayRequest>| async move {
        function_handler(dispatcher, event).await
    }))
    .await
}
