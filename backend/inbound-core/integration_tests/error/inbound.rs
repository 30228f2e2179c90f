use inbound_core::error::inbound::InboundError;
use inbound_core::error::stream::StreamError;
use inbound_core::transport::{TransportKind, parse_transport_settings};
use inbound_core::{GlobalConfig, build_inbound};

use models::NodeInfo;

use std::error::Error;

/// **VALUE**: Verifies the missing-protocol error carries a location.
///
/// **WHY THIS MATTERS**: Operators see only the log line. The location tells them the
/// node was rejected by this builder rather than by the engine.
#[test]
fn given_missing_protocol_error_when_formatted_then_includes_location() {
    // GIVEN: A node without the Trojan descriptor
    let err = build_inbound(&GlobalConfig::default(), &NodeInfo::default()).unwrap_err();

    // WHEN: Formatting
    let message = err.to_string();

    // THEN: Type, protocol and file location
    assert!(message.contains("Missing Protocol Error"));
    assert!(message.contains("trojan"));
    assert!(message.contains("inbound.rs"));
}

/// **VALUE**: Verifies the missing-protocol location is the caller of `build_inbound`.
///
/// **BUG THIS CATCHES**: Would catch the location being taken inside the error
/// closure, which always reports the same line of the builder.
#[test]
fn given_missing_protocol_error_when_inspected_then_location_is_the_call_site() {
    // GIVEN: The line of the call below
    let line = line!() + 3;

    // WHEN: Building from a node without the Trojan descriptor
    let result = build_inbound(&GlobalConfig::default(), &NodeInfo::default());

    // THEN: Location is this test on that line
    match result {
        Err(InboundError::MissingProtocol { location, .. }) => {
            assert!(location.file.contains("integration_tests"), "got {location}");
            assert_eq!(location.line, line);
        }
        other => panic!("expected missing protocol, got {other:?}"),
    }
}

/// **VALUE**: Verifies the parse error keeps serde's error as its source.
///
/// **BUG THIS CATCHES**: Would catch if the source were flattened into a string,
/// losing line/column information from the JSON decoder.
#[test]
fn given_settings_parse_error_when_inspected_then_source_is_json_error() {
    let err = parse_transport_settings(&TransportKind::SplitHttp, b"{\"path\": }").unwrap_err();

    let source = err.source().expect("source");
    assert!(source.downcast_ref::<serde_json::Error>().is_some());
    assert!(matches!(err, StreamError::SettingsParse { .. }));
}
