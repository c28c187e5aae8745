use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn filter_or(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Compact stderr logging so stdout stays clean for the printed response.
///
/// With `verbose`, each `request` span also logs its duration and final
/// status when it closes.
pub fn init_cli_logger(verbose: bool) {
    let (filter, span_events) = if verbose {
        (filter_or("employee_gateway=debug,info"), FmtSpan::CLOSE)
    } else {
        (filter_or("employee_gateway=info,warn"), FmtSpan::NONE)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_span_events(span_events)
                .compact(),
        )
        .init();
}

/// JSON lines for CloudWatch. Every event carries the enclosing `request`
/// span, so `route_key` and `route` are searchable fields on each line.
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(filter_or("employee_gateway=info"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time() // the Lambda log stream timestamps lines itself
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true),
        )
        .init();
}
