//! Domain layer - ABI message model and the core's error taxonomy

pub mod abi;
pub mod error;

pub use error::{AbiErrorCode, CoreError, Error};
