//! Command line front end.
//!
//! Reads a node descriptor (control-plane JSON), an optional user list and the
//! process configuration, then prints the engine inbound JSON.

use crate::error::NodeError;

use common::ErrorLocation;
use inbound_core::engine::{EngineValidator, InboundFinalizer, InboundHandlerConfig};
use inbound_core::{GlobalConfig, build_inbound, build_users};
use models::{NodeInfo, UserInfo};

use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::info;
use serde_json::from_slice;

#[derive(Debug, Parser)]
#[command(name = "trojan-node")]
#[command(about = "Translate panel node descriptors into Trojan inbound configs")]
pub struct Cli {
    /// Process config (TOML). Defaults to the per-user config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the inbound and print it as engine JSON
    Build {
        /// Node info JSON as returned by the panel
        #[arg(long)]
        node: PathBuf,
        /// JSON array of `{"id", "uuid"}` users
        #[arg(long)]
        users: Option<PathBuf>,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Build and validate the inbound, printing only its tag
    Check {
        #[arg(long)]
        node: PathBuf,
    },
}

impl Cli {
    /// Resolve and load the process configuration.
    pub fn load_config(&self) -> Result<GlobalConfig, NodeError> {
        match self.config.clone().or_else(GlobalConfig::default_path) {
            Some(path) => Ok(GlobalConfig::load(&path)?),
            None => Ok(GlobalConfig::default()),
        }
    }
}

/// Run `command` against an already loaded config.
///
/// Returns the text that should be printed on stdout, if any.
pub fn run(command: &Command, config: &GlobalConfig) -> Result<Option<String>, NodeError> {
    match command {
        Command::Build {
            node,
            users,
            output,
        } => {
            let users = match users {
                Some(path) => read_users(path)?,
                None => Vec::new(),
            };
            let handler = build_from_file(config, node, &users, &EngineValidator)?;
            let json = handler.to_json_pretty()?;

            match output {
                Some(path) => {
                    fs::write(path, &json).map_err(|e| NodeError::Io {
                        path: path.clone(),
                        location: ErrorLocation::from(Location::caller()),
                        source: e,
                    })?;
                    info!("Inbound {} written to {}", handler.tag(), path.display());
                    Ok(None)
                }
                None => Ok(Some(json)),
            }
        }
        Command::Check { node } => {
            let handler = build_from_file(config, node, &[], &EngineValidator)?;
            Ok(Some(handler.tag().to_string()))
        }
    }
}

/// Build and finalize the inbound described by the node file.
pub fn build_from_file<F>(
    config: &GlobalConfig,
    node_path: &Path,
    users: &[UserInfo],
    finalizer: &F,
) -> Result<InboundHandlerConfig, NodeError>
where
    F: InboundFinalizer + ?Sized,
{
    let node: NodeInfo = read_json(node_path)?;

    let inbound = build_inbound(config, &node)?;
    let clients = build_users(&inbound.tag, users);
    info!("Inbound {} with {} clients", inbound.tag, clients.len());

    let handler = finalizer.finalize(inbound.with_clients(clients))?;
    info!(
        "Inbound {} accepted: {} on port {}",
        handler.tag(),
        handler.protocol(),
        handler.port_range()
    );

    Ok(handler)
}

pub fn read_users(path: &Path) -> Result<Vec<UserInfo>, NodeError> {
    read_json(path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, NodeError> {
    let bytes = fs::read(path).map_err(|e| NodeError::Io {
        path: path.to_path_buf(),
        location: ErrorLocation::from(Location::caller()),
        source: e,
    })?;

    from_slice(&bytes).map_err(|e| NodeError::InputParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
