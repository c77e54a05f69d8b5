//! Environment loading for the lightbnb CLI

use tracing::debug;

/// Load environment variables from .env files
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.lightbnb/.env
///
/// Runs before tracing is initialized, so it only reports what it loaded.
pub fn load_dotenv() -> Vec<String> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path.display().to_string());
    }

    if let Some(env_file) = lightbnb_db::config::config_dir().map(|dir| dir.join(".env")) {
        // dotenvy doesn't overwrite existing vars, so this is safe
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded_from.push(env_file.display().to_string());
        }
    }

    loaded_from
}

/// Log where configuration came from, once tracing is up.
pub fn report_dotenv(loaded_from: &[String]) {
    if loaded_from.is_empty() {
        debug!("No .env files found (current dir or ~/.lightbnb)");
    } else {
        debug!("Loaded environment from: {}", loaded_from.join(", "));
    }
}
