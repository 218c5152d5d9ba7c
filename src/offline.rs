//! # Offline Signature Codec
//!
//! Binary codec for the I2P offline signature block carried in Datagram2.
//!
//! An offline signature lets a long-term destination pre-authorize a
//! short-lived transient key to sign messages on its behalf, so the
//! destination's own key can stay offline. This module only frames and
//! extracts the block; cryptographic verification of the authorization
//! signature is the caller's job.
//!
//! ## Wire Format
//! ```text
//! [Expires(4)] [TransientSigType(2)] [TransientPublicKey(N)] [Signature(M)]
//! ```
//! All integers big-endian. `N` is determined by the transient signature
//! type on the wire; `M` by the destination's signature type, which is
//! caller-supplied context and never appears in the block itself.
//!
//! ## Security
//! - Field lengths come only from the static signature-type table, never
//!   from attacker-controlled data content
//! - Truncated input fails with [`DatagramError::TooShort`] before any slice
//! - Decoded fields are copied out of the input buffer, so results do not
//!   borrow from caller memory

use crate::error::{DatagramError, Result};
use crate::limits::OFFLINE_SIG_HEADER_LEN;
use crate::sigtype::{self, SigTypeRole};
use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::trace;

/// A transient-key authorization issued by a destination.
///
/// Built either by [`OfflineSignature::from_bytes`] or by direct field
/// assignment when an identity issues a fresh authorization. Immutable once
/// built. `from_bytes` guarantees the field lengths match the signature-type
/// table; directly constructed values are trusted to be consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineSignature {
    /// Expiry of the authorization, in seconds since the Unix epoch.
    /// After this time the transient key must no longer be accepted.
    pub expires: u32,

    /// Signature type code of the transient key. Determines the length of
    /// `transient_public_key`.
    pub transient_sig_type: u16,

    /// The public key authorized to sign on the destination's behalf.
    pub transient_public_key: Vec<u8>,

    /// The destination's signature over the fields above. Its length is a
    /// property of the destination's own signature type.
    pub signature: Vec<u8>,
}

impl OfflineSignature {
    /// Parse an offline signature block from the front of `data`.
    ///
    /// `dest_sig_type` is the signature type of the destination that issued
    /// the authorization; it determines the trailing signature length and is
    /// not present on the wire. Returns the parsed block and the number of
    /// bytes consumed. Trailing bytes beyond the block are left for the
    /// caller.
    pub fn from_bytes(data: &[u8], dest_sig_type: u16) -> Result<(Self, usize)> {
        if data.len() < OFFLINE_SIG_HEADER_LEN {
            return Err(DatagramError::TooShort {
                required: OFFLINE_SIG_HEADER_LEN,
                actual: data.len(),
            });
        }

        let mut header = data;
        let expires = header.get_u32();
        let transient_sig_type = header.get_u16();

        let key_len = sigtype::public_key_length(transient_sig_type);
        if key_len == 0 {
            return Err(DatagramError::UnknownSigType {
                code: transient_sig_type,
                role: SigTypeRole::Transient,
            });
        }

        let sig_len = sigtype::signature_length(dest_sig_type);
        if sig_len == 0 {
            return Err(DatagramError::UnknownSigType {
                code: dest_sig_type,
                role: SigTypeRole::Destination,
            });
        }

        let total = OFFLINE_SIG_HEADER_LEN + key_len + sig_len;
        if data.len() < total {
            return Err(DatagramError::TooShort {
                required: total,
                actual: data.len(),
            });
        }

        let key_end = OFFLINE_SIG_HEADER_LEN + key_len;
        let transient_public_key = data[OFFLINE_SIG_HEADER_LEN..key_end].to_vec();
        let signature = data[key_end..total].to_vec();

        trace!(
            expires,
            transient_sig_type,
            key_len,
            sig_len,
            consumed = total,
            "decoded offline signature block"
        );

        Ok((
            Self {
                expires,
                transient_sig_type,
                transient_public_key,
                signature,
            },
            total,
        ))
    }

    /// Encode the block to its wire form.
    ///
    /// Deterministic: always exactly [`len`](Self::len) bytes. Field lengths
    /// are taken from the structure as-is, without re-checking them against
    /// the signature-type table.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.len());
        buf.put_u32(self.expires);
        buf.put_u16(self.transient_sig_type);
        buf.put_slice(&self.transient_public_key);
        buf.put_slice(&self.signature);
        buf
    }

    /// Encoded length in bytes, without encoding. Never less than the 6-byte
    /// header.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        OFFLINE_SIG_HEADER_LEN + self.transient_public_key.len() + self.signature.len()
    }

    /// Whether the authorization has expired as of `now_secs` (seconds since
    /// the Unix epoch). Pure predicate; expiry is exclusive, so a block
    /// checked exactly at its expiry second is still valid.
    pub fn is_expired_at(&self, now_secs: u64) -> bool {
        now_secs > u64::from(self.expires)
    }

    /// Whether the authorization has expired against the system clock.
    pub fn is_expired(&self) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        self.is_expired_at(now)
    }

    /// The expiry as a [`SystemTime`].
    pub fn expires_at(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(u64::from(self.expires))
    }
}
