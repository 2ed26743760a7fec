//! ABI operations exposed by the core

use async_trait::async_trait;

use super::params::*;
use crate::domain::error::Error;

/// ABI encoding and decoding operations
///
/// Implementations forward each request to the core unchanged and return its
/// result or its error. Nothing is computed, cached or retried here.
#[async_trait]
pub trait AbiUseCase: Send + Sync {
    /// Encode a function call body without the message envelope
    async fn encode_message_body(
        &self,
        params: ParamsOfEncodeMessageBody,
    ) -> Result<ResultOfEncodeMessageBody, Error>;

    /// Combine an externally produced signature with an unsigned body
    async fn attach_signature_to_message_body(
        &self,
        params: ParamsOfAttachSignatureToMessageBody,
    ) -> Result<ResultOfAttachSignatureToMessageBody, Error>;

    /// Encode an external inbound message (deploy, run, or both)
    async fn encode_message(
        &self,
        params: ParamsOfEncodeMessage,
    ) -> Result<ResultOfEncodeMessage, Error>;

    /// Encode an unsigned internal message
    async fn encode_internal_message(
        &self,
        params: ParamsOfEncodeInternalMessage,
    ) -> Result<ResultOfEncodeInternalMessage, Error>;

    /// Combine an externally produced signature with an unsigned message
    async fn attach_signature(
        &self,
        params: ParamsOfAttachSignature,
    ) -> Result<ResultOfAttachSignature, Error>;

    async fn decode_message(&self, params: ParamsOfDecodeMessage)
        -> Result<DecodedMessageBody, Error>;

    async fn decode_message_body(
        &self,
        params: ParamsOfDecodeMessageBody,
    ) -> Result<DecodedMessageBody, Error>;

    /// Build an account state BOC from a state init source
    async fn encode_account(
        &self,
        params: ParamsOfEncodeAccount,
    ) -> Result<ResultOfEncodeAccount, Error>;
}
