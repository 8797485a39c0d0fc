//! Core types and utilities for the Warranted SDK.
//!
//! This crate provides the foundational pieces shared by the Warranted client:
//!
//! - **Signature verification**: HMAC computation and constant-time comparison
//!   for `X-Warranted-Signature` webhook headers
//! - **Errors**: `WarrantedError`
//!
//! The signature primitive is pure computation with no I/O and no shared
//! state, so it is safe to call concurrently from any number of tasks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod signature;

pub use error::{Result, WarrantedError};
pub use signature::{
    compute_signature, constant_time_eq, verify_signature, HmacAlgorithm, SIGNATURE_HEADER,
};
