//! # I2P Addresses
//!
//! Destination-plus-port address value type and its text form.
//!
//! An I2P destination is a self-certifying identity string; ports multiplex
//! multiple logical services over one session. The text form is
//! `destination:port`, with two degenerate shapes: `:port` for an anonymous
//! or unknown sender, and a bare destination with the port defaulting to 0.
//! Destinations may themselves contain colons, so parsing splits on the
//! *last* colon.

use crate::error::{DatagramError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Displayed destinations longer than this are truncated with `...`.
const DISPLAY_DEST_LEN: usize = 16;

/// An I2P destination paired with a port.
///
/// A value type: two addresses are equal iff destination and port both
/// match. An empty destination means an unknown or anonymous sender (raw
/// datagrams); port 0 means "unspecified". Absence of an address is modeled
/// as `Option<I2PAddr>`, where `None == None` and `None` never equals a
/// present address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct I2PAddr {
    /// The destination string, typically base64. Empty for anonymous
    /// senders.
    pub destination: String,

    /// Application-level port. 0 is valid and means unspecified.
    pub port: u16,
}

impl I2PAddr {
    /// Build an address from its parts.
    pub fn new(destination: impl Into<String>, port: u16) -> Self {
        Self {
            destination: destination.into(),
            port,
        }
    }

    /// An address with no destination, as carried by raw datagrams.
    pub fn anonymous(port: u16) -> Self {
        Self {
            destination: String::new(),
            port,
        }
    }

    /// Parse an address string. See the module docs for accepted shapes.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(DatagramError::EmptyAddress);
        }

        let Some((destination, port_str)) = s.rsplit_once(':') else {
            // no colon at all: bare destination, unspecified port
            return Ok(Self {
                destination: s.to_owned(),
                port: 0,
            });
        };

        // digits only: u16::from_str alone would admit a leading '+'
        let port = if port_str.bytes().all(|b| b.is_ascii_digit()) {
            port_str.parse::<u16>().ok()
        } else {
            None
        }
        .ok_or_else(|| DatagramError::InvalidPort {
            segment: port_str.to_owned(),
        })?;

        Ok(Self {
            destination: destination.to_owned(),
            port,
        })
    }

    /// The network this address belongs to. Fixed, by analogy with socket
    /// address families.
    pub fn network(&self) -> &'static str {
        "i2p"
    }
}

impl FromStr for I2PAddr {
    type Err = DatagramError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for I2PAddr {
    /// Human-readable form. Long destinations are truncated to their first
    /// 16 bytes plus `...`; the truncated form is for display only and is
    /// not re-parseable back to the original.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.destination.is_empty() {
            return write!(f, ":{}", self.port);
        }
        if self.destination.len() > DISPLAY_DEST_LEN {
            // destinations are base64 in practice, but never split a
            // multi-byte character if one sneaks in
            let mut cut = DISPLAY_DEST_LEN;
            while !self.destination.is_char_boundary(cut) {
                cut -= 1;
            }
            write!(f, "{}...:{}", &self.destination[..cut], self.port)
        } else {
            write!(f, "{}:{}", self.destination, self.port)
        }
    }
}
