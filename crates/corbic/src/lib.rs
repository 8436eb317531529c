// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # corbic - ORB/native compatibility layer
//!
//! A compatibility layer between a remote-object protocol runtime (an ORB)
//! and Rust's native data model:
//!
//! - a **type-directed recoding engine** that walks values (scalars,
//!   sequences, records, enumerated constants) and converts string encodings
//!   on the wire/native boundary, in both directions;
//! - a **resilient naming-service client** that resolves symbolic service
//!   names to live remote-object handles under a bounded retry policy.
//!
//! The transport itself stays behind the [`orb`] traits: a real ORB binding
//! implements them, tests use in-process fakes.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use corbic::{Coding, CorbaClient, CorbaValue, NameServiceClient, Recoder};
//! # fn orb_runtime() -> Arc<dyn corbic::orb::OrbRuntime> { unimplemented!() }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Resolve the service through the naming context "fred"
//!     let mut names = NameServiceClient::new(orb_runtime(), "localhost:20000", "fred");
//!     let logger = names.get_object("Logger", "IDL:ccReg/Logger:1.0")?;
//!
//!     // Wrap it: arguments out are encoded, results in are decoded
//!     let recoder = Arc::new(Recoder::new(Coding::from_name("utf-8")?));
//!     let client = CorbaClient::new(logger, recoder);
//!     let session = client.call("createSession", vec![CorbaValue::Text("user".into())])?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Recoder`] | Bidirectional wire/native value converter |
//! | [`CorbaValue`] | Closed set of recodable value shapes |
//! | [`CorbaClient`] | Remote call wrapper (encode args, decode result, classify faults) |
//! | [`NameServiceClient`] | Lazily-connected naming service client with bounded retries |
//! | [`RetryPolicy`] | Transient-fault retry budget consulted by the transport |

pub mod client;
pub mod naming;
pub mod orb;
pub mod recode;

pub use client::{sane_repr, ClientError, CorbaClient, MAX_REPR_LEN};
pub use naming::{NameServiceClient, NamingError};
pub use orb::{
    NameComponent, NamingContext, ObjectRef, OrbRuntime, RemoteFault, RemoteObject, RetryDecision,
    RetryPolicy,
};
pub use recode::{Coding, CorbaValue, EnumItem, RecodeError, Recoder, RecoderBuilder, RecordValue};
