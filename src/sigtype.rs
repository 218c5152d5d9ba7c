//! # Signature Type Table
//!
//! Static lookup from I2P signature-type codes to key and signature lengths.
//!
//! Offline signature blocks carry variable-length fields whose sizes are not
//! on the wire; they are determined entirely by the 16-bit signature-type
//! codes involved. This module is the single source of truth for those
//! lengths. The table is immutable compile-time data shared read-only by all
//! callers; there is no process-wide mutable state.
//!
//! ## Known Types
//! | Code | Algorithm             | Public key | Signature |
//! |------|-----------------------|------------|-----------|
//! | 0    | DSA-SHA1              | 128        | 40        |
//! | 1    | ECDSA-SHA256-P256     | 64         | 64        |
//! | 2    | ECDSA-SHA384-P384     | 96         | 96        |
//! | 3    | ECDSA-SHA512-P521     | 132        | 132       |
//! | 7    | Ed25519-SHA512        | 32         | 64        |
//! | 11   | RedDSA-SHA512-Ed25519 | 32         | 64        |
//!
//! Any other code is unknown: both lookup functions return 0, and decoders
//! must treat 0 as a hard failure, never as a valid zero-length field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A known I2P signature algorithm.
///
/// The numeric codes and field lengths come from the I2P common structures
/// specification. Codes 4-6 (RSA) and 8-10 (experimental) are deliberately
/// absent: they are not valid for destinations in current network use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SigType {
    /// Type 0, legacy default.
    DsaSha1,
    /// Type 1.
    EcdsaSha256P256,
    /// Type 2.
    EcdsaSha384P384,
    /// Type 3.
    EcdsaSha512P521,
    /// Type 7, the modern default.
    Ed25519Sha512,
    /// Type 11, used by encrypted leasesets.
    RedDsaSha512Ed25519,
}

impl SigType {
    /// Look up a signature type by its wire code. Returns `None` for codes
    /// not in the table.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(SigType::DsaSha1),
            1 => Some(SigType::EcdsaSha256P256),
            2 => Some(SigType::EcdsaSha384P384),
            3 => Some(SigType::EcdsaSha512P521),
            7 => Some(SigType::Ed25519Sha512),
            11 => Some(SigType::RedDsaSha512Ed25519),
            _ => None,
        }
    }

    /// The wire code for this signature type.
    pub fn code(self) -> u16 {
        match self {
            SigType::DsaSha1 => 0,
            SigType::EcdsaSha256P256 => 1,
            SigType::EcdsaSha384P384 => 2,
            SigType::EcdsaSha512P521 => 3,
            SigType::Ed25519Sha512 => 7,
            SigType::RedDsaSha512Ed25519 => 11,
        }
    }

    /// Public key length in bytes.
    pub fn public_key_length(self) -> usize {
        match self {
            SigType::DsaSha1 => 128,
            SigType::EcdsaSha256P256 => 64,
            SigType::EcdsaSha384P384 => 96,
            SigType::EcdsaSha512P521 => 132,
            SigType::Ed25519Sha512 => 32,
            SigType::RedDsaSha512Ed25519 => 32,
        }
    }

    /// Signature length in bytes.
    pub fn signature_length(self) -> usize {
        match self {
            SigType::DsaSha1 => 40,
            SigType::EcdsaSha256P256 => 64,
            SigType::EcdsaSha384P384 => 96,
            SigType::EcdsaSha512P521 => 132,
            SigType::Ed25519Sha512 => 64,
            SigType::RedDsaSha512Ed25519 => 64,
        }
    }
}

/// Public key length for a raw signature-type code, 0 if unknown.
///
/// A 0 return is a sentinel for "code not in the table"; no real type has a
/// zero-length key. Decoders must fail on 0 rather than slice an empty field.
pub fn public_key_length(code: u16) -> usize {
    SigType::from_code(code).map_or(0, SigType::public_key_length)
}

/// Signature length for a raw signature-type code, 0 if unknown.
///
/// Same sentinel convention as [`public_key_length`].
pub fn signature_length(code: u16) -> usize {
    SigType::from_code(code).map_or(0, SigType::signature_length)
}

/// Which role an unknown signature-type code was used in.
///
/// An offline signature block involves two independent codes: the transient
/// key's (on the wire) and the destination's (caller-supplied context).
/// Errors name the role so callers can tell a corrupt block from a bad
/// context argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SigTypeRole {
    /// The short-lived key authorized by the block.
    Transient,
    /// The long-term identity that issued the authorization.
    Destination,
}

impl fmt::Display for SigTypeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigTypeRole::Transient => write!(f, "transient"),
            SigTypeRole::Destination => write!(f, "destination"),
        }
    }
}
