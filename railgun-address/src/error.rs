//! Address codec errors.

use thiserror::Error;

/// An error parsing or encoding a 0zk address.
///
/// Both [`parse`](crate::address::parse) and
/// [`stringify`](crate::address::stringify) fail at the first invalid input
/// they see, with no recovery and no partial result. Each variant carries
/// the context needed to localize the defect without re-running the codec.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum AddressError {
    /// `parse` was called with an empty string.
    #[error("no address input")]
    MissingInput,

    /// The bech32m checksum did not verify.
    ///
    /// Distinct from [`AddressError::DecodeMalformed`]: the string has the
    /// right shape, but some of its characters were mistyped or corrupted.
    #[error("invalid address checksum")]
    ChecksumInvalid,

    /// The human-readable prefix is not [`PREFIX`](crate::address::PREFIX).
    #[error("invalid address prefix: expected \"0zk\", found {found:?}")]
    PrefixMismatch {
        /// The prefix carried by the rejected string.
        found: String,
    },

    /// The bech32m layer could not parse the string at all: bad character
    /// set, mixed case, missing separator, or over the length limit.
    #[error("failed to decode bech32m address: {0}")]
    DecodeMalformed(#[from] bech32::Error),

    /// A field was not the exact required byte length.
    #[error("invalid {field} length: expected {expected} bytes, found {found}")]
    LengthInvalid {
        /// The field with the wrong length.
        field: &'static str,
        /// The required byte length.
        expected: usize,
        /// The byte length supplied or decoded.
        found: usize,
    },

    /// The version byte is not the single supported address version.
    ///
    /// This is a hard compatibility gate: no forward or backward version
    /// negotiation exists in the format.
    #[error("unsupported address version: expected 1, found {found}")]
    UnsupportedVersion {
        /// The version byte carried by the decoded record.
        found: u8,
    },

    /// A chain id at or above 2^56, which the 7-byte wire field cannot
    /// carry without truncation.
    #[error("chain id {0} does not fit in 56 bits")]
    ChainIdOutOfRange(u64),
}
