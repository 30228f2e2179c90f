use crate::{ModelError, TrojanNodeBuilder};

/// **VALUE**: Verifies that builder validation rejects a zero port.
///
/// **WHY THIS MATTERS**: Port 0 asks the OS for an ephemeral port. An inbound on an
/// unpredictable port is unreachable for every client the panel hands the node to.
///
/// **BUG THIS CATCHES**: Would catch if the zero check is dropped during refactoring.
#[test]
fn given_zero_port_when_building_trojan_node_then_returns_validation_error() {
    // GIVEN: Builder with port zero
    let builder = TrojanNodeBuilder::default()
        .with_server_port(0)
        .with_network("tcp");

    // WHEN: Building
    let result = builder.build();

    // THEN: Validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Server port must be non-zero");
        }
    }
}

/// **VALUE**: Verifies that a missing port is reported.
#[test]
fn given_missing_port_when_building_then_returns_validation_error() {
    // GIVEN: Builder without port
    let builder = TrojanNodeBuilder::default().with_network("ws");

    // WHEN: Building
    let result = builder.build();

    // THEN: Validation error names the port
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Server port is required");
        }
    }
}

/// **VALUE**: Verifies that an empty network name is rejected.
///
/// **BUG THIS CATCHES**: Would catch if an empty string slipped through and was later
/// silently treated as an unrecognized transport.
#[test]
fn given_empty_network_when_building_then_returns_validation_error() {
    // GIVEN: Builder with empty network
    let builder = TrojanNodeBuilder::default()
        .with_server_port(443)
        .with_network("");

    // WHEN: Building
    let result = builder.build();

    // THEN: Validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Network cannot be empty");
        }
    }
}

/// **VALUE**: Verifies that a fully specified builder produces the expected node.
#[test]
fn given_all_fields_when_building_then_returns_trojan_node() {
    // GIVEN: A complete builder
    let builder = TrojanNodeBuilder::default()
        .with_server_port(8443)
        .with_network("xhttp")
        .with_network_settings(r#"{"path":"/x"}"#)
        .with_host("node.example.com")
        .with_server_name("sni.example.com");

    // WHEN: Building
    let node = builder.build().unwrap();

    // THEN: Every field is carried over
    assert_eq!(node.server_port(), 8443);
    assert_eq!(node.network, "xhttp");
    assert_eq!(node.network_settings, br#"{"path":"/x"}"#.to_vec());
    assert_eq!(node.common.host.as_deref(), Some("node.example.com"));
    assert_eq!(node.common.server_name.as_deref(), Some("sni.example.com"));
}

#[test]
fn given_no_settings_when_building_then_settings_blob_is_empty() {
    let node = TrojanNodeBuilder::default()
        .with_server_port(443)
        .with_network("tcp")
        .build()
        .unwrap();

    assert!(node.network_settings.is_empty());
}

/// **VALUE**: Verifies a validation error points at the `build()` call.
///
/// **BUG THIS CATCHES**: Would catch the location being taken inside an error closure,
/// which reports the builder's own source line for every caller.
#[test]
fn given_validation_error_when_inspected_then_location_is_the_build_call() {
    // GIVEN: The line of the build call below
    let line = line!() + 3;

    // WHEN: Building without a port
    let result = TrojanNodeBuilder::default().with_network("ws").build();

    // THEN: Location is this test on that line
    match result.unwrap_err() {
        ModelError::Validation { location, .. } => {
            assert!(location.file.contains("tests"), "got {location}");
            assert_eq!(location.file_name(), "builder.rs");
            assert_eq!(location.line, line);
        }
    }
}
