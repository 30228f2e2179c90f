use crate::RedactedPassword;

use serde::Serialize;
use zeroize::Zeroize;

/// **VALUE**: Verifies that Debug and Display never print the password.
///
/// **WHY THIS MATTERS**: Client lists are logged while building inbounds. A leaked
/// Trojan password grants proxy access to anyone reading the logs.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug replacing the manual impl.
#[test]
fn given_password_when_formatted_then_value_is_redacted() {
    // GIVEN: A password
    let password = RedactedPassword::new("4b5f2d4e-secret");

    // WHEN: Formatting with Debug and Display
    let debug = format!("{password:?}");
    let display = format!("{password}");

    // THEN: Neither contains the value
    assert!(!debug.contains("secret"));
    assert!(!display.contains("secret"));
    assert_eq!(debug, r#"RedactedPassword("[REDACTED]")"#);
    assert_eq!(display, "[REDACTED]");
}

/// **VALUE**: Verifies that implicit serialization is refused.
///
/// **BUG THIS CATCHES**: Would catch if the Serialize impl started writing the value,
/// which would leak passwords into any serialized struct that embeds one.
#[test]
fn given_password_when_serialized_implicitly_then_returns_error() {
    // GIVEN: A password
    let password = RedactedPassword::new("hunter2");

    // WHEN: Serializing directly
    let result = serde_json::to_string(&password);

    // THEN: Serialization fails with the redaction message
    let err = result.unwrap_err();
    assert!(err.to_string().contains("serialize_exposed"));
}

/// **VALUE**: Verifies the explicit serialize helper writes the plain value.
///
/// **WHY THIS MATTERS**: The engine configuration needs the real password in the
/// `clients` list; this helper is the one sanctioned path.
#[test]
fn given_password_field_with_exposed_helper_when_serialized_then_writes_plain_value() {
    // GIVEN: A struct opting in to exposure
    #[derive(Serialize)]
    struct Client {
        #[serde(serialize_with = "RedactedPassword::serialize_exposed")]
        password: RedactedPassword,
    }
    let client = Client {
        password: RedactedPassword::new("hunter2"),
    };

    // WHEN: Serializing
    let json = serde_json::to_string(&client).unwrap();

    // THEN: The value is present
    assert_eq!(json, r#"{"password":"hunter2"}"#);
}

#[test]
fn given_uuid_when_converted_then_exposed_value_matches() {
    let password = RedactedPassword::from("9f4c0b8e-1d2a-4c3b-8e7f-000000000001");

    assert_eq!(password.expose(), "9f4c0b8e-1d2a-4c3b-8e7f-000000000001");
    assert!(!password.is_empty());
}

/// **VALUE**: Verifies zeroizing wipes the password.
///
/// **WHY THIS MATTERS**: Drop calls the same routine, so client lists that go out of
/// scope after the engine config is written leave no UUIDs behind in freed memory.
///
/// **BUG THIS CATCHES**: Would catch the wipe being delegated to a copy of the value
/// instead of the buffer the password lives in.
#[test]
fn given_password_when_zeroized_then_value_is_cleared() {
    // GIVEN: A password
    let mut password = RedactedPassword::new("9f4c0b8e-secret");

    // WHEN: Zeroizing
    password.zeroize();

    // THEN: Nothing remains
    assert!(password.is_empty());
    assert_eq!(password.expose(), "");
}

/// **VALUE**: Verifies an empty password reports empty, which the engine rejects.
#[test]
fn given_empty_password_when_checked_then_reports_empty() {
    let password = RedactedPassword::new("");
    assert!(password.is_empty());
}
