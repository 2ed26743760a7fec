//! Sources of a contract's initial state

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::contract::Abi;
use super::params::ParamsOfEncodeMessage;

/// Message to take the state init from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MessageSource {
    /// Already encoded message, base64 BOC
    Encoded {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        abi: Option<Abi>,
    },
    /// Parameters the core encodes the message from
    EncodingParams(ParamsOfEncodeMessage),
}

impl MessageSource {
    pub fn encoded(message: impl Into<String>, abi: Option<Abi>) -> Self {
        MessageSource::Encoded {
            message: message.into(),
            abi,
        }
    }

    pub fn encoding_params(params: ParamsOfEncodeMessage) -> Self {
        MessageSource::EncodingParams(params)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            MessageSource::Encoded { .. } => "Encoded",
            MessageSource::EncodingParams(_) => "EncodingParams",
        }
    }
}

/// Initial data applied to a TVC through its ABI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateInitParams {
    pub abi: Abi,
    pub value: Value,
}

/// Where the account's state init comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StateInitSource {
    /// Taken from a deploy message
    Message { source: MessageSource },
    /// Explicit code and data cells, base64 encoded
    StateInit {
        code: String,
        data: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        library: Option<String>,
    },
    /// Content of a TVC file, base64 encoded
    Tvc {
        tvc: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        public_key: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        init_params: Option<StateInitParams>,
    },
}

impl StateInitSource {
    pub fn message(source: MessageSource) -> Self {
        StateInitSource::Message { source }
    }

    pub fn state_init(
        code: impl Into<String>,
        data: impl Into<String>,
        library: Option<String>,
    ) -> Self {
        StateInitSource::StateInit {
            code: code.into(),
            data: data.into(),
            library,
        }
    }

    pub fn tvc(
        tvc: impl Into<String>,
        public_key: Option<String>,
        init_params: Option<StateInitParams>,
    ) -> Self {
        StateInitSource::Tvc {
            tvc: tvc.into(),
            public_key,
            init_params,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            StateInitSource::Message { .. } => "Message",
            StateInitSource::StateInit { .. } => "StateInit",
            StateInitSource::Tvc { .. } => "Tvc",
        }
    }
}

/// Cache policy for BOCs the core produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BocCacheType {
    /// Kept until every holder of `pin` unpins it
    Pinned { pin: String },
    /// Evicted under memory pressure
    Unpinned,
}

impl BocCacheType {
    pub fn pinned(pin: impl Into<String>) -> Self {
        BocCacheType::Pinned { pin: pin.into() }
    }

    pub fn unpinned() -> Self {
        BocCacheType::Unpinned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::abi::Signer;
    use serde_json::json;

    #[test]
    fn test_encoding_params_inline_beside_tag() {
        let params = ParamsOfEncodeMessage::new(Abi::json("{}"), Signer::none());
        let value = serde_json::to_value(MessageSource::encoding_params(params)).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "EncodingParams",
                "abi": {"type": "Json", "value": "{}"},
                "signer": {"type": "None"}
            })
        );
    }

    #[test]
    fn test_state_init_library_omitted() {
        let value =
            serde_json::to_value(StateInitSource::state_init("Y29kZQ==", "ZGF0YQ==", None))
                .unwrap();
        assert_eq!(
            value,
            json!({"type": "StateInit", "code": "Y29kZQ==", "data": "ZGF0YQ=="})
        );
    }

    #[test]
    fn test_boc_cache_shapes() {
        assert_eq!(
            serde_json::to_value(BocCacheType::pinned("session")).unwrap(),
            json!({"type": "Pinned", "pin": "session"})
        );
        assert_eq!(
            serde_json::to_value(BocCacheType::unpinned()).unwrap(),
            json!({"type": "Unpinned"})
        );
    }
}
