//! Function call and deployment inputs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Header fields prepended to an external inbound message body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionHeader {
    /// Message expiration time, unix seconds
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expire: Option<u32>,
    /// Message creation time, unix milliseconds
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time: Option<u64>,
    /// Public key used for signature verification, hex encoded
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pubkey: Option<String>,
}

impl FunctionHeader {
    pub fn is_empty(&self) -> bool {
        self.expire.is_none() && self.time.is_none() && self.pubkey.is_none()
    }
}

/// Function to call and its arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSet {
    pub function_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub header: Option<FunctionHeader>,
    /// Arguments keyed by ABI parameter name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub input: Option<Value>,
}

impl CallSet {
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            header: None,
            input: None,
        }
    }

    pub fn with_header(mut self, header: FunctionHeader) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_input(mut self, input: Value) -> Self {
        self.input = Some(input);
        self
    }
}

/// Initial state for a deploy message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploySet {
    /// Contract image, base64 encoded TVC
    pub tvc: String,
    #[serde(default)]
    pub workchain_id: i32,
    /// Initial persistent data keyed by ABI data name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub initial_data: Option<Value>,
    /// Overrides the public key stored in the TVC
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub initial_pubkey: Option<String>,
}

impl DeploySet {
    pub fn new(tvc: impl Into<String>) -> Self {
        Self {
            tvc: tvc.into(),
            workchain_id: 0,
            initial_data: None,
            initial_pubkey: None,
        }
    }

    pub fn with_workchain(mut self, workchain_id: i32) -> Self {
        self.workchain_id = workchain_id;
        self
    }

    pub fn with_initial_data(mut self, data: Value) -> Self {
        self.initial_data = Some(data);
        self
    }

    pub fn with_initial_pubkey(mut self, pubkey: impl Into<String>) -> Self {
        self.initial_pubkey = Some(pubkey.into());
        self
    }
}
