use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::errors::*;

// Condition transitions are logged at debug and ignored same-state updates at trace, so an
// operator running with "info" sees none of the per-pass churn.
pub const DEFAULT_ENV_FILTER: &str = "info";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogStyle {
    // Long-running operator process: file/line and span creation events
    #[default]
    Operator,

    // Short-lived tooling: no timestamps
    Cli,
}

/// Installs the formatter for `style` as the global subscriber.  Fails if the filter doesn't
/// parse or a subscriber is already installed.
pub fn setup(env_filter: &str, style: LogStyle) -> EmptyResult {
    tracing::subscriber::set_global_default(build_subscriber(env_filter, style)?)
        .map_err(|e| anyhow!("could not install log subscriber: {e}"))
}

pub fn build_subscriber(env_filter: &str, style: LogStyle) -> anyhow::Result<Box<dyn Subscriber + Send + Sync>> {
    let filter = build_env_filter(env_filter)?;
    Ok(match style {
        LogStyle::Operator => Box::new(
            tracing_subscriber::fmt()
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::NEW)
                .with_target(false)
                .with_env_filter(filter)
                .compact()
                .finish(),
        ),
        LogStyle::Cli => Box::new(
            tracing_subscriber::fmt()
                .with_target(false)
                .with_env_filter(filter)
                .without_time()
                .compact()
                .finish(),
        ),
    })
}

pub fn build_env_filter(env_filter: &str) -> anyhow::Result<EnvFilter> {
    let directives = if env_filter.trim().is_empty() { DEFAULT_ENV_FILTER } else { env_filter };
    Ok(EnvFilter::try_new(directives)?)
}
