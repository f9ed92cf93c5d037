use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::config::Settings;
use crate::error::{BackendError, ConfigurationError};

pub mod config;
pub mod data;
pub mod error;
pub mod openapi;
pub mod request;
pub mod resp;
pub mod role;
pub mod validation;

/// Log lines go to stderr so stdout stays free for command output.
fn subscriber(level: Level) -> impl tracing::Subscriber + Send + Sync + 'static {
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish()
}

pub fn init_logging(log_level: Option<Level>) {
    if let Some(l) = log_level {
        if let Err(err) = tracing::subscriber::set_global_default(subscriber(l)) {
            eprintln!("Unable to set global logger: {}", err);
        };
    }
}

/// Like [`load_settings`], with `bootstrap` as log level while the settings
/// are not known yet.
pub fn load_settings_logged(bootstrap: Option<Level>) -> Result<Settings, BackendError> {
    match bootstrap {
        Some(l) => tracing::subscriber::with_default(subscriber(l), load_settings),
        None => load_settings(),
    }
}

/// Reads `.env`, then the settings file. A missing file is replaced by the
/// defaults, which are written back for the next start.
pub fn load_settings() -> Result<Settings, BackendError> {
    tracing::info!("Reading .env file...");
    if dotenv::dotenv().is_err() {
        tracing::warn!("Unable to load .env file.");
    }

    tracing::info!("Loading configuration...");
    match Settings::load() {
        Ok(s) => {
            tracing::info!("Configuration loaded.");
            Ok(s)
        }
        Err(ConfigurationError::NotFound(dir)) => {
            tracing::info!("No configuration in '{}', using defaults.", dir.display());
            let s = Settings::default();
            if s.save().is_err() {
                tracing::warn!("Unable to save generated configuration.");
            }
            Ok(s)
        }
        Err(other) => {
            tracing::error!("Configuration error: {}", other);
            Err(other.into())
        }
    }
}
