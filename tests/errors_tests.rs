use std::collections::HashSet;

use bitsnip::errors::BitsnipError;

fn all_variants() -> Vec<BitsnipError> {
    vec![
        BitsnipError::validation("v"),
        BitsnipError::config("c"),
        BitsnipError::file_operation("f"),
        BitsnipError::service("s"),
        BitsnipError::transport("t"),
        BitsnipError::serialization("z"),
        BitsnipError::request_in_flight("r"),
        BitsnipError::clipboard("p"),
    ]
}

#[test]
fn test_error_codes_are_unique() {
    let codes: HashSet<&'static str> = all_variants().iter().map(|e| e.code()).collect();
    assert_eq!(codes.len(), all_variants().len());
}

#[test]
fn test_error_codes_format() {
    for err in all_variants() {
        assert!(err.code().starts_with('E'), "got: {}", err.code());
        assert_eq!(err.code().len(), 4);
    }
}

#[test]
fn test_display_uses_simple_format() {
    let err = BitsnipError::service("INVALID_ARG_LONG_URL");
    assert_eq!(format!("{}", err), "Service Error: INVALID_ARG_LONG_URL");
}

#[test]
fn test_message_preserved_verbatim() {
    let err = BitsnipError::service("MONTHLY_RATE_LIMIT_EXCEEDED");
    assert_eq!(err.message(), "MONTHLY_RATE_LIMIT_EXCEEDED");
}

#[test]
fn test_format_colored_contains_code_and_type() {
    let err = BitsnipError::transport("An unexpected error occurred.");
    let s = err.format_colored();
    assert!(s.contains("E005"), "got: {}", s);
    assert!(s.contains("Transport Error"), "got: {}", s);
    assert!(s.contains("An unexpected error occurred."), "got: {}", s);
}

#[test]
fn test_from_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: BitsnipError = io.into();
    assert!(matches!(err, BitsnipError::FileOperation(_)));
    assert!(err.message().contains("denied"));
}

#[test]
fn test_from_serde_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: BitsnipError = json_err.into();
    assert!(matches!(err, BitsnipError::Serialization(_)));
}

#[test]
fn test_error_is_std_error() {
    let err = BitsnipError::validation("empty input");
    let _: &dyn std::error::Error = &err;
}
