// kconnect-api: Async Rust client for the Kafka Connect REST management API

pub mod client;
pub mod error;
pub mod transport;

pub use client::ConnectClient;
pub use error::Error;
pub use transport::TransportConfig;
