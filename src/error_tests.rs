//! Tests for AssistError type

use super::*;

#[test]
fn test_invalid_state_error_display() {
    let error = AssistError::InvalidState("simulation already running".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid state"));
    assert!(msg.contains("already running"));
}

#[test]
fn test_invalid_input_error_display() {
    let error = AssistError::InvalidInput("empty field value".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid input"));
    assert!(msg.contains("empty field value"));
}

#[test]
fn test_cancelled_error_display() {
    let error = AssistError::Cancelled;
    assert!(error.to_string().contains("cancelled"));
}

#[test]
fn test_config_error_display() {
    let error = AssistError::Config("expected integer".to_string());
    let msg = error.to_string();
    assert!(msg.contains("config"));
    assert!(msg.contains("expected integer"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let assist_err = AssistError::from(io_err);
    assert!(matches!(assist_err, AssistError::Io(_)));
    assert!(assist_err.to_string().contains("test error"));
}

#[test]
fn test_error_clone() {
    let error = AssistError::InvalidInput("test".to_string());
    let cloned = error.clone();
    assert_eq!(error, cloned);
}

#[test]
fn test_error_equality() {
    let err1 = AssistError::Io("test".to_string());
    let err2 = AssistError::Io("test".to_string());
    let err3 = AssistError::Io("different".to_string());

    assert_eq!(err1, err2);
    assert_ne!(err1, err3);
}
