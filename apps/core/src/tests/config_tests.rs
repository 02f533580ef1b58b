//! Configuration Tests
//!
//! `ServerConfig::from_env` under controlled environments.

use crate::config::{
    LogFormat, ServerConfig, ENV_ALLOWED_ORIGIN, ENV_HOST, ENV_JITTER_SEED, ENV_LOG_FORMAT,
    ENV_PORT,
};
use crate::error::AppError;

/// Run `f` with every config variable unset, then with `overrides` applied
fn with_config_env<F, R>(overrides: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let mut vars: Vec<(&str, Option<&str>)> = [
        ENV_HOST,
        ENV_PORT,
        ENV_ALLOWED_ORIGIN,
        ENV_LOG_FORMAT,
        ENV_JITTER_SEED,
    ]
    .iter()
    .map(|key| (*key, None))
    .collect();

    for (key, value) in overrides {
        vars.retain(|(k, _)| k != key);
        vars.push((*key, Some(*value)));
    }

    temp_env::with_vars(vars, f)
}

#[test]
fn test_defaults() {
    let config = with_config_env(&[], ServerConfig::from_env).unwrap();

    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.addr().to_string(), "0.0.0.0:8000");
    assert_eq!(config.allowed_origin, "http://localhost:3000");
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.jitter_seed, None);
}

#[test]
fn test_overrides() {
    let config = with_config_env(
        &[
            (ENV_HOST, "127.0.0.1"),
            (ENV_PORT, "9100"),
            (ENV_ALLOWED_ORIGIN, "https://aura.example.com/"),
            (ENV_LOG_FORMAT, "json"),
            (ENV_JITTER_SEED, "1234"),
        ],
        ServerConfig::from_env,
    )
    .unwrap();

    assert_eq!(config.addr().to_string(), "127.0.0.1:9100");
    assert_eq!(config.allowed_origin, "https://aura.example.com");
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.jitter_seed, Some(1234));
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = with_config_env(&[(ENV_PORT, "  "), (ENV_HOST, "")], ServerConfig::from_env)
        .unwrap();

    assert_eq!(config.port, 8000);
}

#[test]
fn test_rejections() {
    let cases: &[(&str, &str)] = &[
        (ENV_HOST, "localhost"),
        (ENV_PORT, "eighty"),
        (ENV_PORT, "70000"),
        (ENV_ALLOWED_ORIGIN, "ftp://files.example.com"),
        (ENV_ALLOWED_ORIGIN, "not a url"),
        (ENV_LOG_FORMAT, "xml"),
        (ENV_JITTER_SEED, "-1"),
    ];

    for (key, value) in cases {
        let result = with_config_env(&[(*key, *value)], ServerConfig::from_env);
        assert!(
            matches!(result, Err(AppError::Config(_))),
            "Expected Config error for {}={}",
            key,
            value
        );
    }
}

#[test]
fn test_port_zero_fails_validation() {
    let result = with_config_env(&[(ENV_PORT, "0")], ServerConfig::from_env);
    assert!(matches!(result, Err(AppError::Validation(_))));
}
