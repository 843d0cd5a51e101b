use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
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
        let parsed = raw
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if parsed == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(parsed)
    };

    let bind_addr = parse_addr("TOWNSCOUT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("TOWNSCOUT_LOG_LEVEL", "info");
    let nominatim_base_url = or_default(
        "TOWNSCOUT_NOMINATIM_BASE_URL",
        "https://nominatim.openstreetmap.org",
    );
    let overpass_base_url = or_default(
        "TOWNSCOUT_OVERPASS_BASE_URL",
        "https://overpass-api.de/api/interpreter",
    );
    let http_timeout_secs = parse_u64("TOWNSCOUT_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("TOWNSCOUT_USER_AGENT", "townscout/0.1 (place-search)");
    let default_limit = parse_usize("TOWNSCOUT_DEFAULT_LIMIT", "20")?;
    let max_limit = parse_usize("TOWNSCOUT_MAX_LIMIT", "100")?;
    let overpass_fetch_cap = parse_usize("TOWNSCOUT_OVERPASS_FETCH_CAP", "500")?;

    if default_limit > max_limit {
        return Err(ConfigError::InvalidEnvVar {
            var: "TOWNSCOUT_DEFAULT_LIMIT".to_string(),
            reason: format!("default limit {default_limit} exceeds max limit {max_limit}"),
        });
    }

    Ok(AppConfig {
        bind_addr,
        log_level,
        nominatim_base_url,
        overpass_base_url,
        http_timeout_secs,
        user_agent,
        default_limit,
        max_limit,
        overpass_fetch_cap,
    })
}
