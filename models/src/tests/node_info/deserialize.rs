use crate::NodeInfo;

/// **VALUE**: Verifies control-plane JSON maps onto the Trojan descriptor.
///
/// **WHY THIS MATTERS**: The node descriptor arrives from the panel API. The settings
/// object must survive as raw bytes so it can be decoded later against the schema
/// of whichever transport the node selects.
#[test]
fn given_panel_json_when_deserialized_then_settings_kept_as_raw_json() {
    // GIVEN: A panel response for an xhttp node
    let json = r#"{
        "trojan": {
            "server_port": 443,
            "host": "node.example.com",
            "network": "xhttp",
            "networkSettings": {"path": "/GunService", "mode": "stream-up"}
        }
    }"#;

    // WHEN: Deserializing
    let node: NodeInfo = serde_json::from_str(json).unwrap();

    // THEN: Fields and raw settings are present
    let trojan = node.trojan.expect("trojan descriptor");
    assert_eq!(trojan.server_port(), 443);
    assert_eq!(trojan.network, "xhttp");
    let settings: serde_json::Value = serde_json::from_slice(&trojan.network_settings).unwrap();
    assert_eq!(settings["path"], "/GunService");
    assert_eq!(settings["mode"], "stream-up");
}

/// **VALUE**: Verifies a missing settings field becomes an empty blob.
#[test]
fn given_missing_settings_when_deserialized_then_blob_is_empty() {
    let missing = r#"{"trojan": {"server_port": 443, "network": "tcp"}}"#;

    let node: NodeInfo = serde_json::from_str(missing).unwrap();

    assert!(node.trojan.unwrap().network_settings.is_empty());
}

/// **VALUE**: Verifies an explicit `null` survives as the bytes `null`.
///
/// **WHY THIS MATTERS**: A panel that sends `null` for an xhttp node still expects
/// the transport to be configured with defaults and pinned padding. Collapsing
/// `null` into "no settings" would skip that.
///
/// **BUG THIS CATCHES**: Would catch `null` being folded into the empty blob.
#[test]
fn given_null_settings_when_deserialized_then_blob_is_null_literal() {
    // GIVEN: Settings explicitly set to null
    let with_null = r#"{"trojan": {"server_port": 443, "network": "xhttp", "networkSettings": null}}"#;

    // WHEN: Deserializing
    let node: NodeInfo = serde_json::from_str(with_null).unwrap();

    // THEN: The blob holds the null literal
    assert_eq!(node.trojan.unwrap().network_settings, b"null".to_vec());
}

#[test]
fn given_snake_case_settings_key_when_deserialized_then_alias_is_accepted() {
    let json = r#"{"trojan": {"server_port": 80, "network": "ws", "network_settings": {"path": "/ws"}}}"#;

    let node: NodeInfo = serde_json::from_str(json).unwrap();

    let trojan = node.trojan.unwrap();
    assert_eq!(trojan.network_settings, br#"{"path":"/ws"}"#.to_vec());
}

/// **VALUE**: Verifies a node without a Trojan descriptor still deserializes.
///
/// **WHY THIS MATTERS**: The inbound builder, not the decoder, owns the decision to
/// reject such nodes, so it can report a precise error.
#[test]
fn given_node_without_trojan_when_deserialized_then_trojan_is_none() {
    let node: NodeInfo = serde_json::from_str(r#"{"vless": {"server_port": 443}}"#).unwrap();

    assert!(node.trojan.is_none());
}
