use crate::app_config::{AppConfig, SKU_PLACEHOLDER};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function,
/// so parsing can be tested with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let template = |var: &str, raw: String| -> Result<String, ConfigError> {
        if raw.contains(SKU_PLACEHOLDER) {
            Ok(raw)
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("template must contain {SKU_PLACEHOLDER}"),
            })
        }
    };

    let log_level = or_default("SKULOOKUP_LOG_LEVEL", &defaults.log_level);
    let page_url_template = template(
        "SKULOOKUP_PAGE_URL_TEMPLATE",
        or_default("SKULOOKUP_PAGE_URL_TEMPLATE", &defaults.page_url_template),
    )?;
    let api_url_template = match lookup("SKULOOKUP_API_URL_TEMPLATE") {
        Ok(raw) if !raw.trim().is_empty() => Some(template("SKULOOKUP_API_URL_TEMPLATE", raw)?),
        _ => None,
    };
    let referer = or_default("SKULOOKUP_REFERER", &defaults.referer);

    let request_timeout_secs =
        parse_u64("SKULOOKUP_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SKULOOKUP_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }

    let user_agents = match lookup("SKULOOKUP_USER_AGENTS") {
        Ok(raw) => parse_user_agents(&raw)?,
        Err(_) => defaults.user_agents,
    };

    let min_delay_ms = parse_u64("SKULOOKUP_MIN_DELAY_MS", defaults.min_delay_ms)?;
    let max_delay_ms = parse_u64("SKULOOKUP_MAX_DELAY_MS", defaults.max_delay_ms)?;
    if min_delay_ms > max_delay_ms {
        return Err(ConfigError::InvalidEnvVar {
            var: "SKULOOKUP_MIN_DELAY_MS".to_string(),
            reason: format!("{min_delay_ms} exceeds SKULOOKUP_MAX_DELAY_MS ({max_delay_ms})"),
        });
    }

    Ok(AppConfig {
        log_level,
        page_url_template,
        api_url_template,
        referer,
        request_timeout_secs,
        user_agents,
        min_delay_ms,
        max_delay_ms,
    })
}

/// Split a `|`-separated user-agent list, dropping blank entries.
fn parse_user_agents(raw: &str) -> Result<Vec<String>, ConfigError> {
    let agents: Vec<String> = raw
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if agents.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "SKULOOKUP_USER_AGENTS".to_string(),
            reason: "at least one user-agent is required".to_string(),
        });
    }
    Ok(agents)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
