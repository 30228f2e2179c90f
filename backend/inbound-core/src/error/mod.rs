pub mod config;
pub mod engine;
pub mod inbound;
pub mod stream;
