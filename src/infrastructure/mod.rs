//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - The `CoreTransport` seam and its reqwest-based HTTP implementation
//! - `AbiClient`, the `AbiUseCase` implementation on top of a transport

pub mod core;
