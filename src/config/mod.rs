pub mod settings;

pub use settings::Config;

use crate::error::AnalyticsError;
use std::sync::Arc;

/// Loads the analytics configuration from the environment (and `.env` if
/// present) and rejects values the analytics cannot run with. Logging is
/// not set up yet at this point; call `Config::log_loaded` afterwards.
pub fn load_config() -> Result<Arc<Config>, AnalyticsError> {
    dotenv::dotenv().ok(); // Load .env file if present, ignore errors

    let config = Config::from_env();

    let problems = config.validation_errors();
    if !problems.is_empty() {
        return Err(AnalyticsError::Config(problems.join("; ")));
    }

    Ok(Arc::new(config))
}
