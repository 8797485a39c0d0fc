//! Warranted Client SDK.
//!
//! This crate provides a client library for the Warranted decision/compliance
//! API: fetching decisions, managing law enforcement requests, and validating
//! the signature on inbound webhooks.
//!
//! # Example
//!
//! ```no_run
//! use warranted_client::WarrantedClient;
//!
//! # async fn example() -> Result<(), warranted_client::ClientError> {
//! let client = WarrantedClient::new("AC123...", "your-auth-token")?;
//!
//! // List recent decisions
//! let page = client.decisions().list(Default::default()).await?;
//! for decision in &page.decisions {
//!     println!("{}: {}", decision.id, decision.decision);
//! }
//!
//! // Validate an inbound webhook
//! let authentic = client.validate_request(
//!     "<value of X-Warranted-Signature>",
//!     "https://example.com/warranted/hook",
//!     r#"{"decisionId":"..."}"#,
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{
    ClientOptions, Decisions, LawEnforcementRequests, Me, Schema, WarrantedClient,
};
pub use error::ClientError;
pub use types::*;

pub use warranted_core::{HmacAlgorithm, WarrantedError, SIGNATURE_HEADER};
