//! `AbiUseCase` backed by a core transport

use async_trait::async_trait;
use tracing::{debug, warn};

use super::transport::CoreTransport;
use crate::domain::abi::*;
use crate::domain::Error;

/// Sends typed ABI requests to the core and parses the typed results
pub struct AbiClient<T> {
    transport: T,
}

impl<T: CoreTransport> AbiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run one request through the transport
    ///
    /// Errors from the core pass through untouched.
    pub async fn call<P>(&self, params: P) -> Result<P::Result, Error>
    where
        P: CoreRequest + Send,
    {
        let payload = serde_json::to_value(&params)?;
        debug!(
            function = P::FUNCTION,
            endpoint = %self.transport.endpoint_name(),
            "sending request"
        );

        let value = match self.transport.request(P::FUNCTION, payload).await {
            Ok(value) => value,
            Err(err) => {
                warn!(function = P::FUNCTION, error = %err, "request failed");
                return Err(err);
            }
        };

        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl<T: CoreTransport> AbiUseCase for AbiClient<T> {
    async fn encode_message_body(
        &self,
        params: ParamsOfEncodeMessageBody,
    ) -> Result<ResultOfEncodeMessageBody, Error> {
        self.call(params).await
    }

    async fn attach_signature_to_message_body(
        &self,
        params: ParamsOfAttachSignatureToMessageBody,
    ) -> Result<ResultOfAttachSignatureToMessageBody, Error> {
        self.call(params).await
    }

    async fn encode_message(
        &self,
        params: ParamsOfEncodeMessage,
    ) -> Result<ResultOfEncodeMessage, Error> {
        self.call(params).await
    }

    async fn encode_internal_message(
        &self,
        params: ParamsOfEncodeInternalMessage,
    ) -> Result<ResultOfEncodeInternalMessage, Error> {
        self.call(params).await
    }

    async fn attach_signature(
        &self,
        params: ParamsOfAttachSignature,
    ) -> Result<ResultOfAttachSignature, Error> {
        self.call(params).await
    }

    async fn decode_message(
        &self,
        params: ParamsOfDecodeMessage,
    ) -> Result<DecodedMessageBody, Error> {
        self.call(params).await
    }

    async fn decode_message_body(
        &self,
        params: ParamsOfDecodeMessageBody,
    ) -> Result<DecodedMessageBody, Error> {
        self.call(params).await
    }

    async fn encode_account(
        &self,
        params: ParamsOfEncodeAccount,
    ) -> Result<ResultOfEncodeAccount, Error> {
        self.call(params).await
    }
}
