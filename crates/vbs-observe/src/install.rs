use tracing_subscriber::{Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{LoggerClock, LoggerConfig, LoggerError, LoggerFormat, LoggerResult};

type OutputLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Build the output layer for `cfg.format`, put the level filter on top and set the result
/// as the global default.
pub(crate) fn install(cfg: &LoggerConfig) -> LoggerResult<()> {
    tracing_subscriber::registry()
        .with(output_layer(cfg)?)
        .with(cfg.level.to_env_filter())
        .try_init()
        .map_err(|_| LoggerError::AlreadyInstalled)
}

fn output_layer(cfg: &LoggerConfig) -> LoggerResult<OutputLayer> {
    let timer = LoggerClock::new(cfg.tz);
    let layer = match cfg.format {
        LoggerFormat::Text => fmt::layer()
            .with_ansi(cfg.should_use_color())
            .with_target(cfg.with_targets)
            .with_timer(timer)
            .boxed(),
        // `volume_id` and friends live on the operation span.
        LoggerFormat::Json => fmt::layer()
            .json()
            .with_ansi(false)
            .with_target(cfg.with_targets)
            .with_current_span(true)
            .with_timer(timer)
            .boxed(),
        LoggerFormat::Journald => journald_layer()?,
    };
    Ok(layer)
}

#[cfg(target_os = "linux")]
fn journald_layer() -> LoggerResult<OutputLayer> {
    tracing_journald::layer()
        .map(|layer| layer.boxed())
        .map_err(|e| LoggerError::Journald(e.to_string()))
}

#[cfg(not(target_os = "linux"))]
fn journald_layer() -> LoggerResult<OutputLayer> {
    Err(LoggerError::Journald("not supported on this platform".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdout_formats_build_a_layer() {
        for format in [LoggerFormat::Text, LoggerFormat::Json] {
            let cfg = LoggerConfig {
                format,
                use_color: false,
                ..Default::default()
            };
            assert!(output_layer(&cfg).is_ok(), "{format}");
        }
    }

    #[cfg(not(target_os = "linux"))]
    #[test]
    fn journald_needs_linux() {
        let cfg = LoggerConfig {
            format: LoggerFormat::Journald,
            ..Default::default()
        };
        assert!(matches!(output_layer(&cfg), Err(LoggerError::Journald(_))));
    }
}
