mod config;

use crate::config::{CertConfig, GlobalConfig};

use models::{NodeInfo, TrojanNode, TrojanNodeBuilder};

pub(crate) fn trojan_node(port: u16, network: &str, settings: &str) -> TrojanNode {
    TrojanNodeBuilder::default()
        .with_server_port(port)
        .with_network(network)
        .with_network_settings(settings)
        .build()
        .expect("valid trojan node")
}

pub(crate) fn node_info(port: u16, network: &str, settings: &str) -> NodeInfo {
    NodeInfo {
        trojan: Some(trojan_node(port, network, settings)),
    }
}

pub(crate) fn config_with_cert() -> GlobalConfig {
    GlobalConfig::default().with_cert(CertConfig::new("cert", "key"))
}
