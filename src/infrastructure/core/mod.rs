//! Core infrastructure - transports to the SDK core and the ABI client

mod client;
mod http;
mod transport;

pub use client::AbiClient;
pub use http::{HttpTransport, HttpTransportBuilder, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use transport::CoreTransport;
