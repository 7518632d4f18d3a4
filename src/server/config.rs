use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

pub struct Config {
    pub database_url: String,

    /// HMAC secret for signing bearer tokens.
    pub secret_key: String,
    pub token_ttl: Duration,

    /// Lowercased usernames that are given the admin role at registration.
    pub admin_usernames: Vec<String>,

    pub cors_origin: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let token_ttl_hours = match std::env::var("JWT_EXPIRATION_HOURS") {
            Ok(raw) => parse_positive_hours("JWT_EXPIRATION_HOURS", &raw)?,
            Err(_) => DEFAULT_JWT_EXPIRATION_HOURS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            secret_key: required("SECRET_KEY")?,
            token_ttl: Duration::hours(token_ttl_hours),
            admin_usernames: parse_admin_usernames(
                &std::env::var("ADMIN_USERNAMES").unwrap_or_default(),
            ),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn parse_positive_hours(name: &str, raw: &str) -> Result<i64, ConfigError> {
    match raw.trim().parse::<i64>() {
        Ok(hours) if hours > 0 => Ok(hours),
        Ok(_) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Splits a comma-separated username list, dropping blanks and lowercasing each entry.
pub fn parse_admin_usernames(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_admin_usernames_case_insensitively() {
        let names = parse_admin_usernames(" Admin, mentor ,,ROOT");

        assert_eq!(names, vec!["admin", "mentor", "root"]);
    }

    #[test]
    fn empty_admin_list_yields_no_admins() {
        assert!(parse_admin_usernames("").is_empty());
    }

    #[test]
    fn rejects_non_positive_token_lifetime() {
        assert!(matches!(
            parse_positive_hours("JWT_EXPIRATION_HOURS", "0"),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
        assert!(matches!(
            parse_positive_hours("JWT_EXPIRATION_HOURS", "soon"),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
        assert_eq!(parse_positive_hours("JWT_EXPIRATION_HOURS", "12").unwrap(), 12);
    }
}
