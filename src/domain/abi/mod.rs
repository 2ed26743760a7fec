//! ABI message model
//!
//! Typed request and result records for the core's `abi.*` functions and the
//! value types they are built from. Sum types carry their wire discriminator
//! in the enum variant, so a record can never disagree with its `type` tag.

mod call;
mod contract;
mod number;
mod params;
mod signer;
mod state_init;
mod use_case;

pub use call::{CallSet, DeploySet, FunctionHeader};
pub use contract::{Abi, AbiContract, AbiData, AbiEvent, AbiFunction, AbiHandle, AbiParam};
pub use number::{FunctionId, LargeUint, ParseLargeUintError};
pub use params::{
    CoreRequest, DecodedMessageBody, MessageBodyType, ParamsOfAttachSignature,
    ParamsOfAttachSignatureToMessageBody, ParamsOfDecodeMessage, ParamsOfDecodeMessageBody,
    ParamsOfEncodeAccount, ParamsOfEncodeInternalMessage, ParamsOfEncodeMessage,
    ParamsOfEncodeMessageBody, ResultOfAttachSignature, ResultOfAttachSignatureToMessageBody,
    ResultOfEncodeAccount, ResultOfEncodeInternalMessage, ResultOfEncodeMessage,
    ResultOfEncodeMessageBody,
};
pub use signer::{KeyPair, Signer, SigningBoxHandle};
pub use state_init::{BocCacheType, MessageSource, StateInitParams, StateInitSource};
pub use use_case::AbiUseCase;
