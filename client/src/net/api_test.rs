use super::*;

#[test]
fn decode_failure_on_ok_status_is_decode_error() {
    let err = classify_decode_failure(200, true, "expected value".into());
    assert_eq!(err, ApiError::Decode("expected value".into()));
}

#[test]
fn decode_failure_on_error_status_is_status_error() {
    assert_eq!(classify_decode_failure(502, false, "eof".into()), ApiError::Status(502));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(500).to_string(), "request failed: 500");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn endpoints_live_under_api_prefix() {
    for path in [
        LOGIN_ENDPOINT,
        PROFILE_ENDPOINT,
        CHAT_ENDPOINT,
        SCENARIOS_ENDPOINT,
        START_SCENARIO_ENDPOINT,
        RESPOND_ENDPOINT,
    ] {
        assert!(path.starts_with("/api/"), "{path}");
    }
}
