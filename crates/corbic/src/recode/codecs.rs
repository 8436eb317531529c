// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! ISO date and datetime record codecs.
//!
//! The wire side carries dates as `IsoDate { value: "YYYY-MM-DD" }` and
//! timestamps as `IsoDateTime { value: <ISO-8601> }` records; the native
//! side uses chrono types. The helpers here convert between the two and can
//! be wrapped into registry entries where callers want the recoder to apply
//! them automatically.

use chrono::{DateTime, FixedOffset, NaiveDate};

use super::value::{CorbaValue, RecordValue};
use super::RecodeError;

/// Repository id of the wire date record.
pub const ISO_DATE_ID: &str = "IDL:Registry/IsoDate:1.0";

/// Repository id of the wire datetime record.
pub const ISO_DATETIME_ID: &str = "IDL:Registry/IsoDateTime:1.0";

const VALUE_FIELD: &str = "value";

/// Decode an `IsoDate` record to a date.
pub fn decode_iso_date(record: &RecordValue) -> Result<NaiveDate, RecodeError> {
    let text = record_text(record, ISO_DATE_ID)?;
    NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|e| RecodeError::DecodeFailed {
        coding: "iso-8601",
        detail: format!("'{}': {}", text, e),
    })
}

/// Encode a date into an `IsoDate` wire record.
pub fn encode_iso_date(date: NaiveDate) -> RecordValue {
    RecordValue::new(ISO_DATE_ID).field(
        VALUE_FIELD,
        CorbaValue::Binary(date.format("%Y-%m-%d").to_string().into_bytes()),
    )
}

/// Decode an `IsoDateTime` record to an offset-aware datetime.
///
/// Accepts `Z` and numeric offsets with or without a colon, with optional
/// fractional seconds.
pub fn decode_iso_datetime(record: &RecordValue) -> Result<DateTime<FixedOffset>, RecodeError> {
    let text = record_text(record, ISO_DATETIME_ID)?;
    DateTime::parse_from_rfc3339(&text)
        .or_else(|_| DateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map_err(|e| RecodeError::DecodeFailed {
            coding: "iso-8601",
            detail: format!("'{}': {}", text, e),
        })
}

/// Encode an offset-aware datetime into an `IsoDateTime` wire record.
///
/// Chrono datetimes always carry an offset, so there is no naive-datetime
/// case to reject.
pub fn encode_iso_datetime(datetime: &DateTime<FixedOffset>) -> RecordValue {
    RecordValue::new(ISO_DATETIME_ID).field(
        VALUE_FIELD,
        CorbaValue::Binary(datetime.to_rfc3339().into_bytes()),
    )
}

/// Extract the `value` field text. The wire payload is ASCII; both the
/// binary wire form and an already-decoded text form are accepted.
fn record_text(record: &RecordValue, expected_id: &str) -> Result<String, RecodeError> {
    if record.type_id() != expected_id {
        return Err(RecodeError::UnsupportedType(format!(
            "expected {} record, got {}",
            expected_id,
            record.type_id()
        )));
    }
    match record.get(VALUE_FIELD) {
        Some(CorbaValue::Text(text)) => Ok(text.clone()),
        Some(CorbaValue::Binary(bytes)) => {
            String::from_utf8(bytes.clone()).map_err(|e| RecodeError::DecodeFailed {
                coding: "iso-8601",
                detail: e.to_string(),
            })
        }
        Some(other) => Err(RecodeError::UnsupportedType(format!(
            "{} value field holds {:?}",
            expected_id, other
        ))),
        None => Err(RecodeError::UnsupportedType(format!(
            "{} record has no value field",
            expected_id
        ))),
    }
}
