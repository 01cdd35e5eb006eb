//! Token codec module for signing and verifying session credentials
//!
//! The codec is a pure function of its input and the configured secret:
//! it signs claim sets into compact JWTs and verifies presented tokens,
//! without interpreting the `type` claim or touching any storage.

mod codec;


pub use codec::TokenCodec;
