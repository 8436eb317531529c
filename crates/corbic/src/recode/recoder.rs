// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The recoding engine.
//!
//! Walks a [`CorbaValue`] and converts string encodings on the boundary
//! between wire and native representation, recursing into sequences and
//! records and preserving the concrete container kind. Both directions are
//! total over the recognized shape set and fail closed on anything else.

use super::coding::Coding;
use super::registry::{RecordRecodeFn, RecordRegistry};
use super::value::{CorbaValue, RecordValue};
use super::RecodeError;

/// Bidirectional wire/native value converter.
///
/// Owns exactly one [`Coding`] and one record codec registry, both fixed at
/// construction. Holds no mutable state, so a shared `Recoder` can be read
/// from any number of threads.
pub struct Recoder {
    coding: Coding,
    registry: RecordRegistry,
}

impl Recoder {
    /// Create a recoder with an empty registry: every record recodes via
    /// generic field recursion.
    pub fn new(coding: Coding) -> Self {
        Self {
            coding,
            registry: RecordRegistry::default(),
        }
    }

    /// Start a builder for a recoder with registered record codecs.
    pub fn builder(coding: Coding) -> RecoderBuilder {
        RecoderBuilder {
            recoder: Self::new(coding),
        }
    }

    pub fn coding(&self) -> Coding {
        self.coding
    }

    /// Recode a wire-form value into native form.
    pub fn decode(&self, value: CorbaValue) -> Result<CorbaValue, RecodeError> {
        match value {
            CorbaValue::Binary(bytes) => Ok(CorbaValue::Text(self.coding.decode(&bytes)?)),
            // Already native form.
            CorbaValue::Text(text) => Ok(CorbaValue::Text(text)),
            value @ (CorbaValue::Bool(_)
            | CorbaValue::Int(_)
            | CorbaValue::Float(_)
            | CorbaValue::Null
            | CorbaValue::Enum(_)) => Ok(value),
            CorbaValue::Tuple(items) => Ok(CorbaValue::Tuple(self.decode_items(items)?)),
            CorbaValue::List(items) => Ok(CorbaValue::List(self.decode_items(items)?)),
            CorbaValue::Record(record) => self.decode_record(record),
            value @ CorbaValue::Object(_) => Err(Self::unsupported(&value, "decoded")),
        }
    }

    /// Recode a native-form value into wire form.
    pub fn encode(&self, value: CorbaValue) -> Result<CorbaValue, RecodeError> {
        match value {
            CorbaValue::Text(text) => Ok(CorbaValue::Binary(self.coding.encode(&text)?)),
            // Already wire form.
            CorbaValue::Binary(bytes) => Ok(CorbaValue::Binary(bytes)),
            value @ (CorbaValue::Bool(_)
            | CorbaValue::Int(_)
            | CorbaValue::Float(_)
            | CorbaValue::Null
            | CorbaValue::Enum(_)) => Ok(value),
            CorbaValue::Tuple(items) => Ok(CorbaValue::Tuple(self.encode_items(items)?)),
            CorbaValue::List(items) => Ok(CorbaValue::List(self.encode_items(items)?)),
            CorbaValue::Record(record) => self.encode_record(record),
            value @ CorbaValue::Object(_) => Err(Self::unsupported(&value, "encoded")),
        }
    }

    fn unsupported(value: &CorbaValue, direction: &str) -> RecodeError {
        RecodeError::UnsupportedType(format!("{:?} can not be {}", value, direction))
    }

    fn decode_items(&self, items: Vec<CorbaValue>) -> Result<Vec<CorbaValue>, RecodeError> {
        items.into_iter().map(|item| self.decode(item)).collect()
    }

    fn encode_items(&self, items: Vec<CorbaValue>) -> Result<Vec<CorbaValue>, RecodeError> {
        items.into_iter().map(|item| self.encode(item)).collect()
    }

    fn decode_record(&self, record: RecordValue) -> Result<CorbaValue, RecodeError> {
        if let Some(codec) = self.registry.resolve_decode(record.type_id()) {
            return codec.as_ref()(self, record);
        }
        let (type_id, fields) = record.into_parts();
        let fields = fields
            .into_iter()
            .map(|(name, value)| Ok((name, self.decode(value)?)))
            .collect::<Result<Vec<_>, RecodeError>>()?;
        Ok(CorbaValue::Record(RecordValue::from_parts(type_id, fields)))
    }

    fn encode_record(&self, record: RecordValue) -> Result<CorbaValue, RecodeError> {
        if let Some(codec) = self.registry.resolve_encode(record.type_id()) {
            return codec.as_ref()(self, record);
        }
        let (type_id, fields) = record.into_parts();
        let fields = fields
            .into_iter()
            .map(|(name, value)| Ok((name, self.encode(value)?)))
            .collect::<Result<Vec<_>, RecodeError>>()?;
        Ok(CorbaValue::Record(RecordValue::from_parts(type_id, fields)))
    }
}

/// Fluent assembly of a [`Recoder`] with registered record codecs.
///
/// The registry is fixed once `build` returns; there is no post-construction
/// registration.
pub struct RecoderBuilder {
    recoder: Recoder,
}

impl RecoderBuilder {
    /// Register a decode/encode pair for a record type id. The exact type id
    /// always wins over any base registered via [`declare_bases`].
    ///
    /// [`declare_bases`]: Self::declare_bases
    pub fn register<D, E>(mut self, type_id: &str, decode: D, encode: E) -> Self
    where
        D: Fn(&Recoder, RecordValue) -> Result<CorbaValue, RecodeError> + Send + Sync + 'static,
        E: Fn(&Recoder, RecordValue) -> Result<CorbaValue, RecodeError> + Send + Sync + 'static,
    {
        let decode: RecordRecodeFn = std::sync::Arc::new(decode);
        let encode: RecordRecodeFn = std::sync::Arc::new(encode);
        self.recoder.registry.register(type_id, decode, encode);
        self
    }

    /// Declare the direct bases of a record type, in declaration order.
    /// A record whose own type id is unregistered dispatches to the first
    /// registered base.
    pub fn declare_bases(mut self, type_id: &str, bases: &[&str]) -> Self {
        self.recoder.registry.declare_bases(type_id, bases);
        self
    }

    pub fn build(self) -> Recoder {
        self.recoder
    }
}
