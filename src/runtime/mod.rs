//! HTTP transport: configuration and the hyper server loop.

mod config;
mod server;

pub use config::AppConfig;
pub use server::Server;
