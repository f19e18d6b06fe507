//! Unit tests for domain error types

use nsync_domain::{Error, FailureKind};

#[test]
fn test_not_found_error() {
    let error = Error::not_found("notification n-1");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "notification n-1"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("user id cannot be empty");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "user id cannot be empty"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_network_error_display() {
    let error = Error::network("connection refused");
    assert_eq!(error.to_string(), "Network error: connection refused");
}

#[test]
fn test_network_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
    let error = Error::network_with_source("request failed", io);
    let source = std::error::Error::source(&error).expect("source should be kept");
    assert!(source.to_string().contains("timed out"));
}

#[test]
fn test_server_rejection_display() {
    let error = Error::server_rejection("dismiss", "already purged");
    assert_eq!(error.to_string(), "Server rejected dismiss: already purged");
}

#[test]
fn test_failure_kind_classification() {
    assert_eq!(
        Error::server_rejection("mark_read", "nope").failure_kind(),
        FailureKind::ServerRejection
    );
    assert_eq!(
        Error::network("unreachable").failure_kind(),
        FailureKind::NetworkFailure
    );
    assert_eq!(
        Error::internal("bug").failure_kind(),
        FailureKind::NetworkFailure
    );
}

#[test]
fn test_config_error() {
    let error = Error::config("Missing base url");
    match error {
        Error::Config { message } => assert_eq!(message, "Missing base url"),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_from_string_conversions() {
    let from_str: Error = "plain".into();
    let from_string: Error = String::from("owned").into();
    assert!(matches!(from_str, Error::String(ref s) if s == "plain"));
    assert!(matches!(from_string, Error::String(ref s) if s == "owned"));
}

#[test]
fn test_json_error_conversion() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = parse_err.into();
    assert!(error.to_string().starts_with("JSON parsing error"));
}

#[test]
fn test_infrastructure_error() {
    let error = Error::infrastructure("log directory is read-only");
    assert_eq!(
        error.to_string(),
        "Infrastructure error: log directory is read-only"
    );
    assert!(std::error::Error::source(&error).is_none());
}
