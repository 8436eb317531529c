// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The closed set of recodable value shapes.

use crate::orb::ObjectRef;
use std::sync::Arc;

/// A value crossing the wire/native boundary.
///
/// The shape set is closed: everything the recoder can touch is one of these
/// variants. `Binary` is the wire-side string form, `Text` the native-side
/// form; `Object` is a live remote reference whose internal encoding is
/// unknown, so recoding it fails closed.
#[derive(Debug, Clone)]
pub enum CorbaValue {
    /// Wire-side string: raw bytes in the configured coding.
    Binary(Vec<u8>),
    /// Native-side string.
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Null,
    /// Fixed-arity ordered sequence.
    Tuple(Vec<CorbaValue>),
    /// Variable-arity ordered sequence.
    List(Vec<CorbaValue>),
    /// Record-like value with named public fields.
    Record(RecordValue),
    /// Enumerated constant. Its identity is its wire representation, so it
    /// is never recoded.
    Enum(EnumItem),
    /// Remote object reference. Not a recodable shape.
    Object(ObjectRef),
}

impl CorbaValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Self::Record(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumItem> {
        match self {
            Self::Enum(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for CorbaValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Binary(a), Self::Binary(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Tuple(a), Self::Tuple(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            // References compare by identity, not structure.
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for CorbaValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for CorbaValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for CorbaValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for CorbaValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for CorbaValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for CorbaValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Binary(v)
    }
}

impl From<&[u8]> for CorbaValue {
    fn from(v: &[u8]) -> Self {
        Self::Binary(v.to_vec())
    }
}

/// Record-like value: a stable type id plus an ordered list of named public
/// fields.
///
/// The field list is the record's public schema. Internal transport
/// bookkeeping is simply not represented here, so there is no field-name
/// convention to filter on.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
    type_id: String,
    fields: Vec<(String, CorbaValue)>,
}

impl RecordValue {
    /// Create an empty record with the given repository-id style type tag,
    /// e.g. `"IDL:Registry/IsoDate:1.0"`.
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field (fluent form).
    pub fn field(mut self, name: impl Into<String>, value: CorbaValue) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    /// Rebuild a record from its parts, preserving field order.
    pub fn from_parts(type_id: String, fields: Vec<(String, CorbaValue)>) -> Self {
        Self { type_id, fields }
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn fields(&self) -> &[(String, CorbaValue)] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&CorbaValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Decompose into (type id, fields) for structure-preserving rebuilds.
    pub fn into_parts(self) -> (String, Vec<(String, CorbaValue)>) {
        (self.type_id, self.fields)
    }
}

/// An enumerated constant: enumeration type id, member name and ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumItem {
    enum_id: String,
    name: String,
    value: u32,
}

impl EnumItem {
    pub fn new(enum_id: impl Into<String>, name: impl Into<String>, value: u32) -> Self {
        Self {
            enum_id: enum_id.into(),
            name: name.into(),
            value,
        }
    }

    pub fn enum_id(&self) -> &str {
        &self.enum_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}
