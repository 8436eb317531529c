// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record codec registry.
//!
//! Maps record type ids to conversion-function pairs, with a declared-bases
//! table for dispatch over record subtype families. The registry is
//! assembled once by the builder and read-only afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use super::recoder::Recoder;
use super::value::{CorbaValue, RecordValue};
use super::RecodeError;

/// A registered record conversion function. Receives the recoder so it can
/// recurse into nested values.
pub type RecordRecodeFn =
    Arc<dyn Fn(&Recoder, RecordValue) -> Result<CorbaValue, RecodeError> + Send + Sync>;

/// Immutable per-type-id codec table.
///
/// Dispatch for a record scans `[type_id] ++ declared_bases(type_id)` in
/// declaration order and picks the first registered entry, so an exact
/// match always beats an inherited one. Records with no entry anywhere in
/// the chain fall back to the recoder's generic field recursion.
#[derive(Default)]
pub(crate) struct RecordRegistry {
    decode: HashMap<String, RecordRecodeFn>,
    encode: HashMap<String, RecordRecodeFn>,
    bases: HashMap<String, Vec<String>>,
}

impl RecordRegistry {
    /// Register a decode/encode pair for `type_id`. Both directions are
    /// always supplied together.
    pub(crate) fn register(&mut self, type_id: &str, decode: RecordRecodeFn, encode: RecordRecodeFn) {
        self.decode.insert(type_id.to_string(), decode);
        self.encode.insert(type_id.to_string(), encode);
    }

    /// Declare the direct bases of `type_id`, most-derived resolution order.
    pub(crate) fn declare_bases(&mut self, type_id: &str, bases: &[&str]) {
        self.bases.insert(
            type_id.to_string(),
            bases.iter().map(|b| (*b).to_string()).collect(),
        );
    }

    pub(crate) fn resolve_decode(&self, type_id: &str) -> Option<&RecordRecodeFn> {
        self.resolve(&self.decode, type_id)
    }

    pub(crate) fn resolve_encode(&self, type_id: &str) -> Option<&RecordRecodeFn> {
        self.resolve(&self.encode, type_id)
    }

    fn resolve<'a>(
        &'a self,
        table: &'a HashMap<String, RecordRecodeFn>,
        type_id: &str,
    ) -> Option<&'a RecordRecodeFn> {
        if let Some(codec) = table.get(type_id) {
            return Some(codec);
        }
        for base in self.bases.get(type_id).into_iter().flatten() {
            if let Some(codec) = table.get(base) {
                return Some(codec);
            }
        }
        None
    }
}
