use shelfy_core::config::{AppConfig, LogFormat};
use tracing::Level;

/// Install the global subscriber from the logging config. Re-initialization
/// is tolerated so command functions stay callable from tests.
pub(crate) fn init(config: &AppConfig) {
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        LogFormat::Compact => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .compact()
                .try_init()
                .ok();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .pretty()
                .try_init()
                .ok();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .json()
                .try_init()
                .ok();
        }
    }
}
