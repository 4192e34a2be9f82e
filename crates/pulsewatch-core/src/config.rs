use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are
/// invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are
/// invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let agent_api_key = require("OPENAI_API_KEY")?;

    let log_level = or_default("PULSEWATCH_LOG_LEVEL", "info");
    let agent_base_url = or_default("PULSEWATCH_AGENT_BASE_URL", "https://api.openai.com/v1");
    let agent_model = or_default("PULSEWATCH_AGENT_MODEL", "gpt-4o-mini");
    let agent_timeout_secs = parse_u64("PULSEWATCH_AGENT_TIMEOUT_SECS", "60")?;

    let max_results = parse_usize("PULSEWATCH_MAX_RESULTS", "10")?;
    let interval_secs = parse_u64("PULSEWATCH_INTERVAL_SECS", "3600")?;
    let topic_count = parse_usize("PULSEWATCH_TOPIC_COUNT", "3")?;

    Ok(AppConfig {
        log_level,
        agent_base_url,
        agent_api_key,
        agent_model,
        agent_timeout_secs,
        max_results,
        interval_secs,
        topic_count,
    })
}
