//! Unit tests for configuration parsing
//!
//! Tests environment variable parsing and default values.
//!
//! Note: These tests modify global environment variables and must run serially.

use std::time::Duration;

use hipchat_notify::config::{Config, DEFAULT_ENDPOINT};
use rstest::rstest;
use serial_test::serial;

fn clear_env() {
    std::env::remove_var("HIPCHAT_TIMEOUT");
    std::env::remove_var("HIPCHAT_DEFAULT_ENDPOINT");
}

#[test]
#[serial]
fn test_config_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.timeout, Duration::from_secs(3));
    assert_eq!(config.default_endpoint, DEFAULT_ENDPOINT);
}

#[test]
#[serial]
fn test_config_custom_values() {
    std::env::set_var("HIPCHAT_TIMEOUT", "10");
    std::env::set_var(
        "HIPCHAT_DEFAULT_ENDPOINT",
        "https://chat.internal/v2/room/{room}/notification",
    );

    let config = Config::from_env().unwrap();

    assert_eq!(config.timeout, Duration::from_secs(10));
    assert_eq!(
        config.default_endpoint,
        "https://chat.internal/v2/room/{room}/notification"
    );

    clear_env();
}

#[test]
#[serial]
fn test_invalid_timeout_uses_default() {
    std::env::set_var("HIPCHAT_TIMEOUT", "soon");

    let config = Config::from_env().unwrap();

    assert_eq!(config.timeout, Duration::from_secs(3));

    clear_env();
}

#[test]
#[serial]
fn test_fractional_timeout() {
    std::env::set_var("HIPCHAT_TIMEOUT", "2.5");

    let config = Config::from_env().unwrap();

    assert_eq!(config.timeout, Duration::from_millis(2500));

    clear_env();
}

#[rstest]
#[case("0")]
#[case("0.0")]
#[case("-1")]
#[case("inf")]
#[case("NaN")]
#[serial]
fn test_non_positive_timeout_uses_default(#[case] value: &str) {
    std::env::set_var("HIPCHAT_TIMEOUT", value);

    let config = Config::from_env().unwrap();

    assert_eq!(config.timeout, Duration::from_secs(3));

    clear_env();
}

#[test]
#[serial]
fn test_endpoint_without_placeholder_is_rejected() {
    std::env::set_var("HIPCHAT_DEFAULT_ENDPOINT", "https://chat.internal/notify");

    let result = Config::from_env();

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("{room}"));

    clear_env();
}

#[test]
#[serial]
fn test_blank_endpoint_uses_default() {
    std::env::set_var("HIPCHAT_DEFAULT_ENDPOINT", "   ");

    let config = Config::from_env().unwrap();

    assert_eq!(config.default_endpoint, DEFAULT_ENDPOINT);

    clear_env();
}
