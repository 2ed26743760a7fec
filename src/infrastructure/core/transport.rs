//! Transport abstraction for reaching the SDK core

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::Error;

/// Delivers one JSON request to the core and returns its JSON result
///
/// `function` is the core's function name (`abi.encode_message`, ...).
/// A failure reported by the core must come back as the matching
/// `Error::Abi`/`Error::Core` with its code untouched.
#[async_trait]
pub trait CoreTransport: Send + Sync {
    async fn request(&self, function: &str, params: Value) -> Result<Value, Error>;

    /// Human readable name of the endpoint, for logs
    fn endpoint_name(&self) -> String;
}

#[async_trait]
impl<T: CoreTransport + ?Sized> CoreTransport for Box<T> {
    async fn request(&self, function: &str, params: Value) -> Result<Value, Error> {
        (**self).request(function, params).await
    }

    fn endpoint_name(&self) -> String {
        (**self).endpoint_name()
    }
}
