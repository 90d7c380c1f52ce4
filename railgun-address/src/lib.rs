//! Codec for RAILGUN 0zk shielded account addresses.
//!
//! A 0zk address packs an address version byte, two 32-byte public keys, and
//! an obfuscated 8-byte network identifier into a 73-byte wire record, then
//! wraps that record in a bech32m string with the human-readable prefix
//! `0zk`:
//!
//! ```text
//! 0zk1 <master public key> <network id> <viewing public key> <checksum>
//! ```
//!
//! [`parse`] and [`stringify`] convert between the string form and
//! [`AddressData`]; the [`chain`] module holds the packed network identifier
//! and its XOR obfuscation. Both conversions are pure functions over their
//! arguments: no I/O, no shared state, safe to call from any thread.
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod address;
pub mod chain;

mod error;

pub use address::{
    parse, stringify, AddressData, ADDRESS_LENGTH_LIMIT, ADDRESS_VERSION, PREFIX,
};
pub use chain::{Chain, ChainType, NetworkId, CHAIN_ID_ANY};
pub use error::AddressError;
