// Frameworks layer: process bootstrap and configuration sources.

pub mod config;
pub mod server;
