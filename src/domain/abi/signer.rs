//! Message signing options

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to a signing box owned by the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SigningBoxHandle(pub u32);

/// Ed25519 key pair, both halves hex encoded
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub public: String,
    pub secret: String,
}

impl KeyPair {
    pub fn new(public: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            public: public.into(),
            secret: secret.into(),
        }
    }
}

// Keep the secret half out of logs
impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// How a message gets authenticated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Signer {
    /// Unsigned message
    #[default]
    None,
    /// Unsigned message plus `data_to_sign`, signed later by the caller
    External { public_key: String },
    /// Signed with a local key pair
    Keys { keys: KeyPair },
    /// Signed through a signing box (HSM, hardware wallet, ...)
    SigningBox { handle: SigningBoxHandle },
}

impl Signer {
    pub fn none() -> Self {
        Signer::None
    }

    pub fn external(public_key: impl Into<String>) -> Self {
        Signer::External {
            public_key: public_key.into(),
        }
    }

    pub fn keys(keys: KeyPair) -> Self {
        Signer::Keys { keys }
    }

    pub fn signing_box(handle: SigningBoxHandle) -> Self {
        Signer::SigningBox { handle }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Signer::None => "None",
            Signer::External { .. } => "External",
            Signer::Keys { .. } => "Keys",
            Signer::SigningBox { .. } => "SigningBox",
        }
    }

    /// Public key known without asking the core, if any
    pub fn public_key(&self) -> Option<&str> {
        match self {
            Signer::External { public_key } => Some(public_key),
            Signer::Keys { keys } => Some(&keys.public),
            Signer::None | Signer::SigningBox { .. } => None,
        }
    }
}
