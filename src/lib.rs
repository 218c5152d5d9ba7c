//! # i2p-datagrams
//!
//! Wire codecs for the metadata structures carried inside I2P datagrams.
//!
//! This crate is the pure transformation layer of a datagram stack: byte
//! buffers in, structured values out, and back again. It owns no sockets,
//! performs no I/O, and verifies no cryptography. The session layer above it
//! hands each decoder a raw byte slice (plus any required context, such as
//! the local identity's signature type) and gets back a value together with
//! the exact number of bytes consumed, so the remainder of the buffer can be
//! interpreted as payload.
//!
//! ## Components
//! - **[`offline`]**: the offline signature block from Datagram2, by which a
//!   long-term destination pre-authorizes a short-lived transient signing key
//! - **[`options`]**: the canonical, sorted key/value mapping used wherever
//!   signed parameter sets are exchanged
//! - **[`addr`]**: the `destination:port` address value type
//! - **[`sigtype`]**: the static signature-type length table the binary
//!   codecs resolve variable field lengths against
//!
//! ## Datagram Variants
//! I2P carries four datagram flavors over I2CP, distinguished by protocol
//! number (see [`limits`]):
//!
//! - **Raw** (18): non-repliable, unauthenticated, zero overhead
//! - **Datagram1** (17): repliable, authenticated (legacy)
//! - **Datagram2** (19): repliable, authenticated, replay-protected; this is
//!   the variant that carries offline signature blocks
//! - **Datagram3** (20): repliable, unauthenticated, minimal overhead
//!
//! ## Canonical Encoding
//! Downstream code signs and verifies over serialized bytes, so encoding is
//! deterministic: offline signature blocks have a fixed field order and
//! table-driven lengths, and options mappings always serialize their keys in
//! ascending byte order. Re-encoding a decoded value reproduces the signed
//! bytes bit for bit.
//!
//! ## Error Handling
//! Malformed or truncated input never panics. Every failure is a
//! [`DatagramError`] value returned to the caller, which decides whether to
//! drop the datagram, log, or escalate. Decoding is all-or-nothing: there is
//! no partial result.
//!
//! ## Example
//! ```rust
//! use i2p_datagrams::{I2PAddr, Options};
//!
//! // frame an options mapping and recover it
//! let mut opts = Options::new();
//! opts.set("host", "example.i2p");
//! let bytes = opts.to_bytes()?;
//! let (decoded, consumed) = Options::from_bytes(&bytes)?;
//! assert_eq!(consumed, bytes.len());
//! assert_eq!(decoded.get("host"), Some("example.i2p"));
//!
//! // parse a peer address
//! let addr: I2PAddr = "example.i2p:8080".parse()?;
//! assert_eq!(addr.port, 8080);
//! # Ok::<(), i2p_datagrams::DatagramError>(())
//! ```

pub mod addr;
pub mod error;
pub mod limits;
pub mod offline;
pub mod options;
pub mod sigtype;

pub use addr::I2PAddr;
pub use error::{DatagramError, Result};
pub use offline::OfflineSignature;
pub use options::Options;
pub use sigtype::{SigType, SigTypeRole};
