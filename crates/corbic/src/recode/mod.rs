// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire/native value recoding.
//!
//! # Overview
//!
//! - [`CorbaValue`]: the closed set of recodable shapes
//! - [`Coding`]: validated text codec configuration
//! - [`Recoder`]: the type-directed conversion engine
//! - [`codecs`]: ISO date/datetime record codecs
//!
//! # Example
//!
//! ```
//! use corbic::recode::{Coding, CorbaValue, Recoder};
//!
//! let recoder = Recoder::new(Coding::from_name("utf-8")?);
//! let native = recoder.decode(CorbaValue::Binary(b"caf\xc3\xa9".to_vec()))?;
//! assert_eq!(native, CorbaValue::Text("café".to_string()));
//! # Ok::<(), corbic::recode::RecodeError>(())
//! ```

pub mod codecs;
mod coding;
mod recoder;
mod registry;
mod value;

pub use coding::Coding;
pub use recoder::{Recoder, RecoderBuilder};
pub use registry::RecordRecodeFn;
pub use value::{CorbaValue, EnumItem, RecordValue};

use std::fmt;

/// Errors raised by recoder construction and by both recoding directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecodeError {
    /// The codec name given at construction is not supported. Fatal,
    /// raised immediately, never retried.
    UnsupportedEncoding(String),

    /// Wire bytes are invalid for the configured coding.
    DecodeFailed {
        coding: &'static str,
        detail: String,
    },

    /// Native text has no representation in the configured coding.
    EncodeFailed {
        coding: &'static str,
        detail: String,
    },

    /// The value does not match any recognized shape. Carries the offending
    /// value's representation.
    UnsupportedType(String),
}

impl fmt::Display for RecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedEncoding(name) => write!(f, "unsupported encoding '{}'", name),
            Self::DecodeFailed { coding, detail } => {
                write!(f, "decode failed ({}): {}", coding, detail)
            }
            Self::EncodeFailed { coding, detail } => {
                write!(f, "encode failed ({}): {}", coding, detail)
            }
            Self::UnsupportedType(repr) => write!(f, "{}", repr),
        }
    }
}

impl std::error::Error for RecodeError {}
