//! ABI descriptions: the `Abi` selector and the structural contract schema

use serde::{Deserialize, Serialize};

use super::number::{FunctionId, LargeUint};

/// Opaque reference to an ABI registered inside the core
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbiHandle(pub u32);

/// How the ABI is handed to the core
///
/// Wire shape: `{"type": "<Tag>", "value": <payload>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Abi {
    /// Full structural contract description
    Contract(AbiContract),
    /// Raw ABI JSON text, parsed by the core
    Json(String),
    /// ABI previously registered in the core
    Handle(AbiHandle),
    /// Structural description in the core's serialized form
    Serialized(AbiContract),
}

impl Abi {
    pub fn contract(contract: AbiContract) -> Self {
        Abi::Contract(contract)
    }

    pub fn json(text: impl Into<String>) -> Self {
        Abi::Json(text.into())
    }

    pub fn handle(handle: AbiHandle) -> Self {
        Abi::Handle(handle)
    }

    pub fn serialized(contract: AbiContract) -> Self {
        Abi::Serialized(contract)
    }

    /// Wire discriminator of this variant
    pub fn tag(&self) -> &'static str {
        match self {
            Abi::Contract(_) => "Contract",
            Abi::Json(_) => "Json",
            Abi::Handle(_) => "Handle",
            Abi::Serialized(_) => "Serialized",
        }
    }

    /// Structural contract when this ABI carries one locally
    pub fn as_contract(&self) -> Option<&AbiContract> {
        match self {
            Abi::Contract(contract) | Abi::Serialized(contract) => Some(contract),
            Abi::Json(_) | Abi::Handle(_) => None,
        }
    }
}

/// Contract ABI schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbiContract {
    #[serde(rename = "ABI version", skip_serializing_if = "Option::is_none", default)]
    pub abi_version: Option<u32>,
    /// Semantic version string ("2.3") used by newer ABI files
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub version: Option<String>,
    /// Names of the header fields (`time`, `expire`, `pubkey`)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub header: Vec<String>,
    #[serde(default)]
    pub functions: Vec<AbiFunction>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub events: Vec<AbiEvent>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub data: Vec<AbiData>,
}

impl AbiContract {
    /// Look up a function by name
    pub fn function(&self, name: &str) -> Option<&AbiFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Look up an event by name
    pub fn event(&self, name: &str) -> Option<&AbiEvent> {
        self.events.iter().find(|e| e.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbiFunction {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<FunctionId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbiEvent {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<FunctionId>,
}

/// Persistent data item of the contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbiData {
    pub key: LargeUint,
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub components: Vec<AbiParam>,
}

/// Function, event or data parameter; `components` describe tuple members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbiParam {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub components: Vec<AbiParam>,
}

impl AbiParam {
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            components: Vec::new(),
        }
    }

    /// Tuple parameter with nested members
    pub fn tuple(name: impl Into<String>, components: Vec<AbiParam>) -> Self {
        Self {
            name: name.into(),
            param_type: "tuple".to_string(),
            components,
        }
    }
}
