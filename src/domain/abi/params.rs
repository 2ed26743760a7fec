//! Request and result records exchanged with the core
//!
//! Every `ParamsOf*` type implements [`CoreRequest`], which names the core
//! function it is sent to and the result record that comes back.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::call::{CallSet, DeploySet, FunctionHeader};
use super::contract::Abi;
use super::number::LargeUint;
use super::signer::Signer;
use super::state_init::{BocCacheType, StateInitSource};

/// Pairs a params record with its core function and result record
pub trait CoreRequest: Serialize {
    /// Function name understood by the core, e.g. `abi.encode_message`
    const FUNCTION: &'static str;

    type Result: DeserializeOwned;
}

macro_rules! core_request {
    ($params:ty => $result:ty, $function:literal) => {
        impl CoreRequest for $params {
            const FUNCTION: &'static str = $function;
            type Result = $result;
        }
    };
}

// encode_message_body

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsOfEncodeMessageBody {
    pub abi: Abi,
    pub call_set: CallSet,
    pub is_internal: bool,
    pub signer: Signer,
    /// Retry counter forwarded to the core's expiration logic
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub processing_try_index: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultOfEncodeMessageBody {
    /// Message body, base64 BOC
    pub body: String,
    /// Bytes to sign when the signer is `External`, base64
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data_to_sign: Option<String>,
}

core_request!(ParamsOfEncodeMessageBody => ResultOfEncodeMessageBody, "abi.encode_message_body");

// attach_signature_to_message_body

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsOfAttachSignatureToMessageBody {
    pub abi: Abi,
    pub public_key: String,
    /// Unsigned message body, base64 BOC
    pub message: String,
    /// Signature, hex encoded
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultOfAttachSignatureToMessageBody {
    pub body: String,
}

core_request!(
    ParamsOfAttachSignatureToMessageBody => ResultOfAttachSignatureToMessageBody,
    "abi.attach_signature_to_message_body"
);

// encode_message

/// External inbound message to encode
///
/// The core rejects a request with neither `address` nor `deploy_set`
/// (code 301) and one with neither `deploy_set` nor `call_set` (code 302).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsOfEncodeMessage {
    pub abi: Abi,
    /// Target address; derived from `deploy_set` when absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub deploy_set: Option<DeploySet>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub call_set: Option<CallSet>,
    pub signer: Signer,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub processing_try_index: Option<u8>,
}

impl ParamsOfEncodeMessage {
    pub fn new(abi: Abi, signer: Signer) -> Self {
        Self {
            abi,
            address: None,
            deploy_set: None,
            call_set: None,
            signer,
            processing_try_index: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_deploy_set(mut self, deploy_set: DeploySet) -> Self {
        self.deploy_set = Some(deploy_set);
        self
    }

    pub fn with_call_set(mut self, call_set: CallSet) -> Self {
        self.call_set = Some(call_set);
        self
    }

    pub fn with_try_index(mut self, index: u8) -> Self {
        self.processing_try_index = Some(index);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultOfEncodeMessage {
    /// Message, base64 BOC
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data_to_sign: Option<String>,
    /// Destination address
    pub address: String,
    pub message_id: String,
}

core_request!(ParamsOfEncodeMessage => ResultOfEncodeMessage, "abi.encode_message");

// encode_internal_message

/// Internal message to encode; internal messages are never signed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsOfEncodeInternalMessage {
    pub abi: Abi,
    /// Destination address
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub src_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub deploy_set: Option<DeploySet>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub call_set: Option<CallSet>,
    /// Attached value in nanotokens
    pub value: LargeUint,
    /// Core default: `true`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bounce: Option<bool>,
    /// Core default: `false`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub enable_ihr: Option<bool>,
}

impl ParamsOfEncodeInternalMessage {
    pub fn new(abi: Abi, address: impl Into<String>, value: LargeUint) -> Self {
        Self {
            abi,
            address: address.into(),
            src_address: None,
            deploy_set: None,
            call_set: None,
            value,
            bounce: None,
            enable_ihr: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultOfEncodeInternalMessage {
    pub message: String,
    pub address: String,
    pub message_id: String,
}

core_request!(
    ParamsOfEncodeInternalMessage => ResultOfEncodeInternalMessage,
    "abi.encode_internal_message"
);

// attach_signature

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsOfAttachSignature {
    pub abi: Abi,
    pub public_key: String,
    /// Unsigned message, base64 BOC
    pub message: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultOfAttachSignature {
    pub message: String,
    pub message_id: String,
}

core_request!(ParamsOfAttachSignature => ResultOfAttachSignature, "abi.attach_signature");

// decode_message / decode_message_body

/// Kind of a decoded message body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageBodyType {
    /// Function call input, external inbound
    Input,
    /// Function return value, external outbound
    Output,
    /// Call to another contract, internal outbound
    InternalOutput,
    /// Emitted event, external outbound
    Event,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedMessageBody {
    pub body_type: MessageBodyType,
    /// Function or event name
    pub name: String,
    /// Decoded parameters keyed by ABI parameter name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub header: Option<FunctionHeader>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsOfDecodeMessage {
    pub abi: Abi,
    /// Message, base64 BOC
    pub message: String,
}

core_request!(ParamsOfDecodeMessage => DecodedMessageBody, "abi.decode_message");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsOfDecodeMessageBody {
    pub abi: Abi,
    /// Message body, base64 BOC
    pub body: String,
    pub is_internal: bool,
}

core_request!(ParamsOfDecodeMessageBody => DecodedMessageBody, "abi.decode_message_body");

// encode_account

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsOfEncodeAccount {
    pub state_init: StateInitSource,
    /// Initial balance in nanotokens
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub balance: Option<LargeUint>,
    /// Logical time of the last transaction
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_trans_lt: Option<LargeUint>,
    /// Unix seconds of the last storage payment
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_paid: Option<u32>,
    /// Where the core keeps the produced account BOC; returned inline when absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub boc_cache: Option<BocCacheType>,
}

impl ParamsOfEncodeAccount {
    pub fn new(state_init: StateInitSource) -> Self {
        Self {
            state_init,
            balance: None,
            last_trans_lt: None,
            last_paid: None,
            boc_cache: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultOfEncodeAccount {
    /// Account state, base64 BOC or cache reference
    pub account: String,
    /// Account ID, hex encoded
    pub id: String,
}

core_request!(ParamsOfEncodeAccount => ResultOfEncodeAccount, "abi.encode_account");
