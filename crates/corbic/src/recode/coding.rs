// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Text coding configuration.
//!
//! A `Coding` names the byte encoding used for wire-side strings. It is
//! validated at construction; an unsupported codec name fails immediately,
//! never at first use.

use super::RecodeError;

/// Supported wire text codings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coding {
    Utf8,
    Ascii,
    Latin1,
}

impl Coding {
    /// Look up a coding by codec name. Accepts the common aliases
    /// (case-insensitive): `utf-8`/`utf8`, `ascii`/`us-ascii`,
    /// `latin-1`/`latin1`/`iso-8859-1`.
    pub fn from_name(name: &str) -> Result<Self, RecodeError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(Self::Latin1),
            _ => Err(RecodeError::UnsupportedEncoding(name.to_string())),
        }
    }

    /// Canonical codec name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Ascii => "ascii",
            Self::Latin1 => "latin-1",
        }
    }

    /// Convert wire bytes to native text.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, RecodeError> {
        match self {
            Self::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| {
                RecodeError::DecodeFailed {
                    coding: self.name(),
                    detail: e.to_string(),
                }
            }),
            Self::Ascii => {
                if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
                    return Err(RecodeError::DecodeFailed {
                        coding: self.name(),
                        detail: format!("byte 0x{:02x} at offset {}", bytes[pos], pos),
                    });
                }
                Ok(bytes.iter().map(|&b| b as char).collect())
            }
            // Latin-1 maps bytes 0x00..=0xff directly onto U+0000..=U+00FF.
            Self::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    /// Convert native text to wire bytes.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, RecodeError> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Ascii => {
                if let Some(c) = text.chars().find(|c| !c.is_ascii()) {
                    return Err(RecodeError::EncodeFailed {
                        coding: self.name(),
                        detail: format!("character '{}' is not representable", c),
                    });
                }
                Ok(text.bytes().collect())
            }
            Self::Latin1 => {
                let mut out = Vec::with_capacity(text.len());
                for c in text.chars() {
                    let code = c as u32;
                    if code > 0xff {
                        return Err(RecodeError::EncodeFailed {
                            coding: self.name(),
                            detail: format!("character '{}' is not representable", c),
                        });
                    }
                    out.push(code as u8);
                }
                Ok(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lookup_accepts_aliases() {
        assert_eq!(Coding::from_name("UTF-8").unwrap(), Coding::Utf8);
        assert_eq!(Coding::from_name("utf8").unwrap(), Coding::Utf8);
        assert_eq!(Coding::from_name("us-ascii").unwrap(), Coding::Ascii);
        assert_eq!(Coding::from_name("ISO-8859-1").unwrap(), Coding::Latin1);
        assert_eq!(Coding::from_name(" latin1 ").unwrap(), Coding::Latin1);
    }

    #[test]
    fn name_lookup_rejects_unknown() {
        let err = Coding::from_name("invalid coding").unwrap_err();
        assert_eq!(
            err,
            RecodeError::UnsupportedEncoding("invalid coding".to_string())
        );
    }

    #[test]
    fn utf8_rejects_invalid_bytes() {
        let err = Coding::Utf8.decode(b"\xff\xfe").unwrap_err();
        assert!(matches!(err, RecodeError::DecodeFailed { coding, .. } if coding == "utf-8"));
    }

    #[test]
    fn ascii_rejects_high_bytes_and_chars() {
        assert!(Coding::Ascii.decode(b"plain").is_ok());
        assert!(Coding::Ascii.decode(b"caf\xc3\xa9").is_err());
        assert!(Coding::Ascii.encode("plain").is_ok());
        assert!(Coding::Ascii.encode("café").is_err());
    }

    #[test]
    fn latin1_round_trip() {
        assert_eq!(Coding::Latin1.decode(b"caf\xe9").unwrap(), "café");
        assert_eq!(Coding::Latin1.encode("café").unwrap(), b"caf\xe9");
        // U+010D has no latin-1 form
        assert!(Coding::Latin1.encode("č").is_err());
    }
}
