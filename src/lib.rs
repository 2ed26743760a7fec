//! Typed ABI message records for an external blockchain SDK core
//!
//! - `domain` - request/result records, value types and the error taxonomy
//! - `infrastructure` - transports to the core and the `AbiUseCase` client
//! - `config` - endpoint configuration loaded from TOML

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use domain::abi;
pub use domain::{AbiErrorCode, CoreError, Error};
pub use infrastructure::core::{AbiClient, CoreTransport, HttpTransport, HttpTransportBuilder};
