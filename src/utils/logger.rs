use crate::utils::config::get_env_or_default;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// The log level is taken from the `LOGLEVEL` environment variable
/// (`TRACE`, `DEBUG`, `INFO`, `WARN` or `ERROR`, case-insensitive) and
/// defaults to `INFO`. Safe to call more than once; only the first call
/// installs the subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = match get_env_or_default("LOGLEVEL", "INFO".to_string())
            .to_uppercase()
            .as_str()
        {
            "TRACE" => Level::TRACE,
            "DEBUG" => Level::DEBUG,
            "WARN" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => Level::INFO,
        };
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");
    });
}
