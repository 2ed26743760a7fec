//! Errors surfaced from the core
//!
//! The core reports failures as `{"code": u32, "message": String, "data": ..}`.
//! Codes from the ABI module's table become [`Error::Abi`], anything else is
//! kept as [`Error::Core`]. Codes and messages are never rewritten.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// ABI module error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbiErrorCode {
    RequiredAddressMissingForEncodeMessage,
    RequiredCallSetMissingForEncodeMessage,
    InvalidJson,
    InvalidMessage,
    EncodeDeployMessageFailed,
    EncodeRunMessageFailed,
    AttachSignatureFailed,
    InvalidTvcImage,
    RequiredPublicKeyMissingForFunctionHeader,
    InvalidSigner,
    InvalidAbi,
    InvalidFunctionId,
    InvalidData,
    EncodeInitialDataFailed,
}

impl AbiErrorCode {
    pub const ALL: [AbiErrorCode; 14] = [
        AbiErrorCode::RequiredAddressMissingForEncodeMessage,
        AbiErrorCode::RequiredCallSetMissingForEncodeMessage,
        AbiErrorCode::InvalidJson,
        AbiErrorCode::InvalidMessage,
        AbiErrorCode::EncodeDeployMessageFailed,
        AbiErrorCode::EncodeRunMessageFailed,
        AbiErrorCode::AttachSignatureFailed,
        AbiErrorCode::InvalidTvcImage,
        AbiErrorCode::RequiredPublicKeyMissingForFunctionHeader,
        AbiErrorCode::InvalidSigner,
        AbiErrorCode::InvalidAbi,
        AbiErrorCode::InvalidFunctionId,
        AbiErrorCode::InvalidData,
        AbiErrorCode::EncodeInitialDataFailed,
    ];

    pub fn code(self) -> u32 {
        match self {
            AbiErrorCode::RequiredAddressMissingForEncodeMessage => 301,
            AbiErrorCode::RequiredCallSetMissingForEncodeMessage => 302,
            AbiErrorCode::InvalidJson => 303,
            AbiErrorCode::InvalidMessage => 304,
            AbiErrorCode::EncodeDeployMessageFailed => 305,
            AbiErrorCode::EncodeRunMessageFailed => 306,
            AbiErrorCode::AttachSignatureFailed => 307,
            AbiErrorCode::InvalidTvcImage => 308,
            AbiErrorCode::RequiredPublicKeyMissingForFunctionHeader => 309,
            AbiErrorCode::InvalidSigner => 310,
            AbiErrorCode::InvalidAbi => 311,
            AbiErrorCode::InvalidFunctionId => 312,
            AbiErrorCode::InvalidData => 313,
            AbiErrorCode::EncodeInitialDataFailed => 314,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            AbiErrorCode::RequiredAddressMissingForEncodeMessage => {
                "RequiredAddressMissingForEncodeMessage"
            }
            AbiErrorCode::RequiredCallSetMissingForEncodeMessage => {
                "RequiredCallSetMissingForEncodeMessage"
            }
            AbiErrorCode::InvalidJson => "InvalidJson",
            AbiErrorCode::InvalidMessage => "InvalidMessage",
            AbiErrorCode::EncodeDeployMessageFailed => "EncodeDeployMessageFailed",
            AbiErrorCode::EncodeRunMessageFailed => "EncodeRunMessageFailed",
            AbiErrorCode::AttachSignatureFailed => "AttachSignatureFailed",
            AbiErrorCode::InvalidTvcImage => "InvalidTvcImage",
            AbiErrorCode::RequiredPublicKeyMissingForFunctionHeader => {
                "RequiredPublicKeyMissingForFunctionHeader"
            }
            AbiErrorCode::InvalidSigner => "InvalidSigner",
            AbiErrorCode::InvalidAbi => "InvalidAbi",
            AbiErrorCode::InvalidFunctionId => "InvalidFunctionId",
            AbiErrorCode::InvalidData => "InvalidData",
            AbiErrorCode::EncodeInitialDataFailed => "EncodeInitialDataFailed",
        }
    }
}

impl fmt::Display for AbiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error record as the core sends it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreError {
    pub code: u32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<Value>,
}

#[derive(Debug, Error)]
pub enum Error {
    /// Failure from the core's ABI module
    #[error("{} ({kind}): {message}", .kind.code())]
    Abi {
        kind: AbiErrorCode,
        message: String,
        data: Option<Value>,
    },

    /// Failure from another core module
    #[error("{}: {}", .0.code, .0.message)]
    Core(CoreError),

    /// The core could not be reached or answered with something unreadable
    #[error("transport error: {0:#}")]
    Transport(#[source] anyhow::Error),

    /// A request or result record did not (de)serialize
    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// ABI error code, when the failure came from the ABI module
    pub fn abi_code(&self) -> Option<AbiErrorCode> {
        match self {
            Error::Abi { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Numeric code reported by the core, if the core reported one
    pub fn core_code(&self) -> Option<u32> {
        match self {
            Error::Abi { kind, .. } => Some(kind.code()),
            Error::Core(err) => Some(err.code),
            Error::Transport(_) | Error::Json(_) => None,
        }
    }

    /// Message reported by the core, if the core reported one
    pub fn core_message(&self) -> Option<&str> {
        match self {
            Error::Abi { message, .. } => Some(message),
            Error::Core(err) => Some(&err.message),
            Error::Transport(_) | Error::Json(_) => None,
        }
    }

    pub fn transport(err: impl Into<anyhow::Error>) -> Self {
        Error::Transport(err.into())
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match AbiErrorCode::from_code(err.code) {
            Some(kind) => Error::Abi {
                kind,
                message: err.message,
                data: err.data,
            },
            None => Error::Core(err),
        }
    }
}
