//! # Error Types
//!
//! Error taxonomy for the datagram metadata codecs.
//!
//! Every decode and encode failure in this crate is reported through
//! [`DatagramError`]. All errors are values returned to the immediate caller:
//! nothing in this crate panics on malformed input, retries internally, or
//! produces a partial result. A failed decode yields no value at all.
//!
//! ## Error Categories
//! - **Framing errors**: truncated headers or bodies, declared sizes that
//!   exceed the available bytes
//! - **Table errors**: signature-type codes absent from the static table
//! - **Grammar errors**: malformed key/value records in an options mapping
//! - **Limit errors**: encode-time violations of the 255-byte string limit
//! - **Address errors**: unparseable destination/port strings
//!
//! ## Example Usage
//! ```rust
//! use i2p_datagrams::error::{DatagramError, Result};
//! use i2p_datagrams::options::Options;
//!
//! fn parse_header(data: &[u8]) -> Result<Options> {
//!     let (opts, consumed) = Options::from_bytes(data)?;
//!     assert!(consumed <= data.len());
//!     Ok(opts)
//! }
//!
//! match parse_header(&[0x00]) {
//!     Err(DatagramError::TooShort { required, actual }) => {
//!         assert_eq!((required, actual), (2, 1));
//!     }
//!     other => panic!("expected TooShort, got {other:?}"),
//! }
//! ```

use crate::sigtype::SigTypeRole;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// DatagramError is the primary error type for all codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatagramError {
    #[error("data too short: need {required} bytes, got {actual}")]
    TooShort { required: usize, actual: usize },

    #[error("unknown {role} signature type {code}")]
    UnknownSigType { code: u16, role: SigTypeRole },

    #[error("mapping size mismatch: declared {declared} content bytes, only {available} available")]
    SizeMismatch { declared: usize, available: usize },

    #[error("malformed key/value pair at byte offset {offset}")]
    MalformedPair { offset: usize },

    #[error("mapping content of {size} bytes exceeds the 2-byte size field")]
    MappingTooLarge { size: usize },

    #[error("key {key:?} exceeds 255 encoded bytes")]
    KeyTooLong { key: String },

    #[error("value for key {key:?} exceeds 255 encoded bytes")]
    ValueTooLong { key: String },

    #[error("invalid port {segment:?}")]
    InvalidPort { segment: String },

    #[error("empty address string")]
    EmptyAddress,
}

/// Type alias for Results using DatagramError
pub type Result<T> = std::result::Result<T, DatagramError>;
