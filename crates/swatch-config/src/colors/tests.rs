//! Tests for strict color parsing and validation.

use super::*;

#[test]
fn parse_hex_6_digit() {
    let c = parse_hex("#ffa500").unwrap();
    assert_eq!(c, Color::from_rgba(255, 165, 0, 255));
}

#[test]
fn parse_hex_without_hash() {
    let c = parse_hex("FFA500").unwrap();
    assert_eq!(c, Color::from_rgba(255, 165, 0, 255));
}

#[test]
fn parse_hex_8_digit_is_argb() {
    let c = parse_hex("#80ffa500").unwrap();
    assert_eq!(c, Color::from_rgba(255, 165, 0, 128));
}

#[test]
fn parse_hex_3_digit() {
    let c = parse_hex("#f00").unwrap();
    assert_eq!(c, Color::from_rgba(255, 0, 0, 255));
}

#[test]
fn parse_hex_trims_whitespace() {
    assert!(parse_hex("  #f00  ").is_ok());
}

#[test]
fn parse_hex_rejects_invalid() {
    assert!(parse_hex("").is_err());
    assert!(parse_hex("#").is_err());
    assert!(parse_hex("#xyz").is_err());
    assert!(parse_hex("#12345").is_err());
    assert!(parse_hex("##fff").is_err());
    assert!(parse_hex("orange").is_err());
}

#[test]
fn parse_hex_error_is_parse_error() {
    let err = parse_hex("nope").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
    assert!(err.to_string().contains("nope"));
}

#[test]
fn validate_hex_accepts_valid() {
    assert!(validate_hex("#fff"));
    assert!(validate_hex("FFA500"));
    assert!(validate_hex("#80FFA500"));
}

#[test]
fn validate_hex_rejects_invalid() {
    assert!(!validate_hex(""));
    assert!(!validate_hex("#ffff"));
    assert!(!validate_hex("rgba(0,0,0,1)"));
}

#[test]
fn normalize_hex_strips_hash_and_uppercases() {
    assert_eq!(normalize_hex("#ffa500").as_deref(), Some("FFA500"));
    assert_eq!(normalize_hex("f80").as_deref(), Some("F80"));
    assert_eq!(normalize_hex("#zzz"), None);
}
