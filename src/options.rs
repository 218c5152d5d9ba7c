//! # Options Mapping Codec
//!
//! Binary codec for the canonical I2P key/value mapping.
//!
//! Mappings carry protocol parameters wherever signed structures need them.
//! Because peers sign and verify over the serialized bytes, encoding is
//! canonical: keys are emitted in ascending raw byte order, so any two
//! implementations serializing the same logical mapping produce identical
//! bytes.
//!
//! ## Wire Format
//! ```text
//! [Size(2)] ( [KeyLen(1)] [Key] '=' [ValueLen(1)] [Value] ';' )*
//! ```
//! `Size` counts the content bytes that follow it, big-endian. Each key and
//! value is at most 255 bytes. An empty mapping is the bare zero size field.
//!
//! ## Canonical Ordering
//! The mapping is stored in a [`BTreeMap`], whose byte-wise string ordering
//! is exactly the canonical serialization order. Encoding therefore walks
//! the map front to back and needs no cached serialized form; an upsert via
//! [`Options::set`] is reflected by the next encode automatically.

use crate::error::{DatagramError, Result};
use crate::limits::{MAPPING_SIZE_LEN, MAX_MAPPING_CONTENT_LEN, MAX_MAPPING_STRING_LEN};
use bytes::BufMut;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

const KEY_VALUE_SEPARATOR: u8 = b'=';
const PAIR_TERMINATOR: u8 = b';';

/// A canonical key/value mapping for datagram options.
///
/// Keys are unique; an upsert of an existing key replaces its value. Lookup
/// order is irrelevant, but serialization always walks keys in ascending
/// byte order. "No options" is modeled as the empty (default) value, which
/// every method accepts without failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    values: BTreeMap<String, String>,
}

impl Options {
    /// An empty mapping. Encodes to the 2-byte zero size field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from existing key/value pairs. Later duplicates of a
    /// key replace earlier ones.
    pub fn from_map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a mapping from the front of `data`.
    ///
    /// Returns the mapping and the number of bytes consumed, which is always
    /// `2 + size` on success so callers can skip the whole block. A duplicate
    /// key inside the block overwrites the earlier value (last write wins);
    /// stricter peers may treat that as an anomaly, so it is logged.
    pub fn from_bytes(data: &[u8]) -> Result<(Self, usize)> {
        if data.len() < MAPPING_SIZE_LEN {
            return Err(DatagramError::TooShort {
                required: MAPPING_SIZE_LEN,
                actual: data.len(),
            });
        }

        let size = usize::from(u16::from_be_bytes([data[0], data[1]]));
        if size == 0 {
            return Ok((Self::new(), MAPPING_SIZE_LEN));
        }

        let end = MAPPING_SIZE_LEN + size;
        if data.len() < end {
            return Err(DatagramError::SizeMismatch {
                declared: size,
                available: data.len() - MAPPING_SIZE_LEN,
            });
        }

        let mut values = BTreeMap::new();
        let mut pos = MAPPING_SIZE_LEN;
        while pos < end {
            let (key, after_key) = read_string(data, pos, end)?;
            if after_key >= end || data[after_key] != KEY_VALUE_SEPARATOR {
                return Err(DatagramError::MalformedPair { offset: after_key });
            }

            let (value, after_value) = read_string(data, after_key + 1, end)?;
            if after_value >= end || data[after_value] != PAIR_TERMINATOR {
                return Err(DatagramError::MalformedPair { offset: after_value });
            }

            if let Some(previous) = values.insert(key.clone(), value) {
                debug!(
                    key = %key,
                    previous = %previous,
                    offset = pos,
                    "duplicate mapping key overwritten"
                );
            }
            pos = after_value + 1;
        }

        trace!(pairs = values.len(), consumed = end, "decoded options mapping");
        Ok((Self { values }, end))
    }

    /// Encode the mapping to its canonical wire form.
    ///
    /// Fails with [`DatagramError::KeyTooLong`] or
    /// [`DatagramError::ValueTooLong`] if any entry exceeds the 255-byte
    /// string limit; the error names the offending key and nothing is
    /// emitted.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if self.values.is_empty() {
            return Ok(vec![0x00, 0x00]);
        }

        let mut content_len = 0usize;
        for (key, value) in &self.values {
            if key.len() > MAX_MAPPING_STRING_LEN {
                return Err(DatagramError::KeyTooLong { key: key.clone() });
            }
            if value.len() > MAX_MAPPING_STRING_LEN {
                return Err(DatagramError::ValueTooLong { key: key.clone() });
            }
            // len prefix + bytes + separator, for key then value
            content_len += 1 + key.len() + 1 + 1 + value.len() + 1;
        }
        if content_len > MAX_MAPPING_CONTENT_LEN {
            return Err(DatagramError::MappingTooLarge { size: content_len });
        }

        let mut buf = Vec::with_capacity(MAPPING_SIZE_LEN + content_len);
        buf.put_u16(content_len as u16);
        for (key, value) in &self.values {
            buf.put_u8(key.len() as u8);
            buf.put_slice(key.as_bytes());
            buf.put_u8(KEY_VALUE_SEPARATOR);
            buf.put_u8(value.len() as u8);
            buf.put_slice(value.as_bytes());
            buf.put_u8(PAIR_TERMINATOR);
        }
        Ok(buf)
    }

    /// Encoded length in bytes, including the 2-byte size field. Computed by
    /// encoding; mappings are protocol-bounded, so this stays cheap.
    pub fn byte_len(&self) -> Result<usize> {
        Ok(self.to_bytes()?.len())
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Insert or replace a key/value pair.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Whether the key is present.
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Whether the mapping holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of key/value pairs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A copy of the pairs as an ordinary map.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }

    /// Iterate over pairs in canonical (ascending key) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Options {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Read one length-prefixed string starting at `pos`, bounded by `end`.
/// Returns the string and the index just past its content.
fn read_string(data: &[u8], pos: usize, end: usize) -> Result<(String, usize)> {
    if pos >= end {
        return Err(DatagramError::MalformedPair { offset: pos });
    }
    let len = usize::from(data[pos]);
    let start = pos + 1;
    if start + len > end {
        // length prefix runs past the declared region
        return Err(DatagramError::MalformedPair { offset: pos });
    }
    let text = std::str::from_utf8(&data[start..start + len])
        .map_err(|_| DatagramError::MalformedPair { offset: pos })?;
    Ok((text.to_owned(), start + len))
}
