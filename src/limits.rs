//! Protocol limits and constants.
//!
//! Wire-format sizes and I2CP protocol numbers used across the codecs.

/// Fixed header length of an offline signature block: 4-byte expiry plus
/// 2-byte transient signature type.
pub const OFFLINE_SIG_HEADER_LEN: usize = 6;

/// Length of the size field that prefixes an options mapping.
pub const MAPPING_SIZE_LEN: usize = 2;

/// Maximum encoded length of a mapping key or value (1-byte length prefix).
pub const MAX_MAPPING_STRING_LEN: usize = 255;

/// Maximum mapping content length (2-byte size field).
pub const MAX_MAPPING_CONTENT_LEN: usize = 65535;

// === I2CP datagram protocol numbers ===

/// Datagram1: repliable, authenticated (legacy).
pub const PROTO_DATAGRAM1: u8 = 17;

/// Raw: non-repliable, unauthenticated, zero overhead.
pub const PROTO_RAW: u8 = 18;

/// Datagram2: repliable, authenticated, replay-protected.
pub const PROTO_DATAGRAM2: u8 = 19;

/// Datagram3: repliable, unauthenticated, minimal overhead.
pub const PROTO_DATAGRAM3: u8 = 20;

/// Practical upper bound for reliable datagram delivery. I2CP accepts up to
/// ~31KB, but drop probability grows sharply past this size.
pub const RECOMMENDED_MAX_DATAGRAM_SIZE: usize = 8 * 1024;
