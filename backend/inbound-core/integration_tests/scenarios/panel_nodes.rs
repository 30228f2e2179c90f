// End-to-end builds from control-plane JSON to engine inbound JSON

use inbound_core::engine::EngineValidator;
use inbound_core::error::inbound::InboundError;
use inbound_core::security::SecurityMode;
use inbound_core::transport::{Int32Range, TransportSettings};
use inbound_core::{CertConfig, GlobalConfig, InboundFinalizer, build_inbound, build_users, inbound_builder};

use models::{NodeInfo, UserInfo};

fn panel_node(json: &str) -> NodeInfo {
    serde_json::from_str(json).expect("panel json")
}

fn cert_config() -> GlobalConfig {
    GlobalConfig::default().with_cert(CertConfig::new("cert", "key"))
}

/// **VALUE**: xhttp node with certificate, as the panel delivers it.
///
/// **WHY THIS MATTERS**: This is the flagship deployment. Every layer of the stream
/// must come out as configured and the engine must accept the result.
#[test]
fn given_xhttp_panel_node_with_cert_when_built_then_engine_accepts_tls_xhttp_inbound() {
    // GIVEN: Panel JSON for an xhttp node and a certificate
    let node = panel_node(
        r#"{"trojan": {"server_port": 443, "network": "xhttp",
            "networkSettings": {"path": "/GunService", "mode": "stream-up"}}}"#,
    );

    // WHEN: Building and finalizing
    let handler = inbound_builder(&cert_config(), &node, &EngineValidator).unwrap();

    // THEN: Stream layers match the panel and the TLS policy
    let stream = handler.stream();
    assert_eq!(stream.network(), "xhttp");
    let split = stream
        .transport
        .as_ref()
        .and_then(TransportSettings::as_split_http)
        .expect("xhttp settings");
    assert_eq!(split.path, "/GunService");
    assert_eq!(split.mode, "stream-up");
    assert_eq!(split.x_padding_bytes, Int32Range::new(100, 200));
    assert_eq!(stream.security.mode, SecurityMode::Tls);
}

/// **VALUE**: xhttp node with `{}` settings and no certificate.
#[test]
fn given_xhttp_panel_node_without_cert_when_built_then_plain_inbound_with_padding() {
    // GIVEN: Empty settings object, no cert
    let node = panel_node(
        r#"{"trojan": {"server_port": 443, "network": "xhttp", "networkSettings": {}}}"#,
    );

    // WHEN: Building and finalizing
    let handler = inbound_builder(&GlobalConfig::default(), &node, &EngineValidator).unwrap();

    // THEN: No TLS, padding pinned
    let stream = handler.stream();
    assert_eq!(stream.security.mode, SecurityMode::None);
    assert_eq!(
        stream
            .transport
            .as_ref()
            .and_then(TransportSettings::as_split_http)
            .map(|s| s.x_padding_bytes),
        Some(Int32Range::new(100, 200))
    );
}

/// **VALUE**: xhttp node whose panel settings are `null` renders with padding.
///
/// **WHY THIS MATTERS**: The engine refuses an xhttp inbound without a padding
/// range, so a `null` from the panel must not skip normalization.
#[test]
fn given_xhttp_panel_node_with_null_settings_when_built_then_padding_is_rendered() {
    // GIVEN: Settings explicitly null
    let node = panel_node(
        r#"{"trojan": {"server_port": 8443, "network": "xhttp", "networkSettings": null}}"#,
    );

    // WHEN: Building, finalizing and rendering
    let handler = inbound_builder(&GlobalConfig::default(), &node, &EngineValidator).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&handler.to_json_pretty().unwrap()).unwrap();

    // THEN: xhttpSettings carries the pinned range
    assert_eq!(
        json["streamSettings"]["xhttpSettings"]["xPaddingBytes"],
        "100-200"
    );
}

/// **VALUE**: ws node with capitalized panel keys keeps its path.
#[test]
fn given_ws_panel_node_with_capitalized_keys_when_built_then_path_is_rendered() {
    let node = panel_node(
        r#"{"trojan": {"server_port": 80, "network": "ws", "networkSettings": {"Path": "/x"}}}"#,
    );

    let handler = inbound_builder(&GlobalConfig::default(), &node, &EngineValidator).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&handler.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["streamSettings"]["wsSettings"]["path"], "/x");
}

/// **VALUE**: node of another protocol is rejected before anything is built.
#[test]
fn given_panel_node_without_trojan_when_built_then_returns_error() {
    let node = panel_node(r#"{"shadowsocks": {"server_port": 8388}}"#);

    let result = inbound_builder(&cert_config(), &node, &EngineValidator);

    assert!(matches!(result, Err(InboundError::MissingProtocol { .. })));
}

#[test]
fn given_tcp_panel_node_with_users_when_rendered_then_clients_in_engine_json() {
    // GIVEN: A tcp node and two users
    let node = panel_node(r#"{"trojan": {"server_port": 8443, "network": "tcp"}}"#);
    let users = vec![UserInfo::new(10, "uuid-10"), UserInfo::new(11, "uuid-11")];

    // WHEN: Building, attaching users, finalizing and rendering
    let inbound = build_inbound(&cert_config(), &node).unwrap();
    let clients = build_users(&inbound.tag, &users);
    let handler = EngineValidator.finalize(inbound.with_clients(clients)).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&handler.to_json_pretty().unwrap()).unwrap();

    // THEN: Engine JSON carries both clients and no transport settings object
    assert_eq!(json["tag"], "trojan_8443");
    assert_eq!(json["port"], "8443");
    assert_eq!(json["settings"]["clients"].as_array().unwrap().len(), 2);
    assert_eq!(json["settings"]["clients"][1]["email"], "trojan_8443|11|uuid-11");
    assert_eq!(json["streamSettings"]["network"], "tcp");
    assert!(json["streamSettings"].get("tcpSettings").is_none());
}

#[test]
fn given_grpc_panel_node_with_string_settings_when_built_then_parse_error() {
    // A JSON string is valid JSON but not a grpc settings object
    let node = panel_node(
        r#"{"trojan": {"server_port": 443, "network": "grpc", "networkSettings": "GunService"}}"#,
    );

    let result = inbound_builder(&cert_config(), &node, &EngineValidator);

    assert!(matches!(result, Err(InboundError::Stream(_))));
}

/// **VALUE**: builds for distinct nodes share one config without interfering.
#[test]
fn given_shared_config_when_building_concurrently_then_each_gets_own_tag() {
    let config = cert_config();

    let tags: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (1000u16..1004)
            .map(|port| {
                let config = &config;
                scope.spawn(move || {
                    let node = panel_node(&format!(
                        r#"{{"trojan": {{"server_port": {port}, "network": "ws", "networkSettings": {{"path": "/ws"}}}}}}"#
                    ));
                    inbound_builder(config, &node, &EngineValidator)
                        .unwrap()
                        .tag()
                        .to_string()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(tags, vec!["trojan_1000", "trojan_1001", "trojan_1002", "trojan_1003"]);
}
