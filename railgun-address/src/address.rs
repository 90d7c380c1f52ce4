//! The 0zk address codec: 73-byte wire records wrapped in bech32m.
//!
//! The wire record layout is fixed:
//!
//! | bytes    | field                  |
//! |----------|------------------------|
//! | `0`      | version                |
//! | `1..33`  | master public key      |
//! | `33..41` | obfuscated network id  |
//! | `41..73` | viewing public key     |
//!
//! [`stringify`] builds the record and bech32m-encodes it; [`parse`] is the
//! exact inverse, validating at every boundary. Addresses produced here are
//! always exactly [`ADDRESS_LENGTH_LIMIT`] characters.

use std::{fmt, ops::Range, str::FromStr};

use bech32::{self, FromBase32, ToBase32, Variant};
use serde::{Deserialize, Serialize};

use crate::{
    chain::{Chain, NetworkId},
    error::AddressError,
};

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;
#[cfg(test)]
mod tests;

/// The human-readable prefix of every 0zk address.
pub const PREFIX: &str = "0zk";

/// The only address version this crate encodes or accepts.
pub const ADDRESS_VERSION: u8 = 1;

/// The exact length of an encoded address, and the ceiling the bech32m
/// layer is configured with.
///
/// bech32's 90-character limit is a segwit convention; 0zk addresses extend
/// it so a 73-byte record fits: 4 prefix and separator characters, 117 data
/// characters, and a 6-character checksum.
pub const ADDRESS_LENGTH_LIMIT: usize = 127;

/// The exact byte length of each public key field.
const PUBLIC_KEY_LEN: usize = 32;

/// The exact byte length of the wire record.
const RECORD_LEN: usize = 73;

/// Wire record field offsets. The version byte is at offset 0.
const MASTER_PUBLIC_KEY: Range<usize> = 1..33;
const NETWORK_ID: Range<usize> = 33..41;
const VIEWING_PUBLIC_KEY: Range<usize> = 41..73;

/// The decoded contents of a 0zk address.
///
/// The public keys are opaque byte blobs to the codec: it never interprets
/// them as curve points, and does no key derivation or signing.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct AddressData {
    /// The account's master public key, exactly 32 bytes.
    pub master_public_key: Vec<u8>,
    /// The account's viewing public key, exactly 32 bytes.
    pub viewing_public_key: Vec<u8>,
    /// The network the address is scoped to.
    ///
    /// `None` encodes as the [`Chain::ANY`] sentinel. [`parse`] always
    /// returns `Some`, decoding the sentinel bytes as `Chain::ANY`.
    pub chain: Option<Chain>,
    /// The address version; `None` encodes as [`ADDRESS_VERSION`].
    pub version: Option<u8>,
}

impl AddressData {
    /// Returns this data in the form [`parse`] produces: an absent chain
    /// replaced by [`Chain::ANY`], an absent version by
    /// [`ADDRESS_VERSION`].
    ///
    /// `parse(stringify(data)?)? == data.normalize()` for every encodable
    /// `data`.
    pub fn normalize(self) -> AddressData {
        AddressData {
            chain: self.chain.or(Some(Chain::ANY)),
            version: self.version.or(Some(ADDRESS_VERSION)),
            ..self
        }
    }
}

impl fmt::Debug for AddressData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressData")
            .field("master_public_key", &hex::encode(&self.master_public_key))
            .field("viewing_public_key", &hex::encode(&self.viewing_public_key))
            .field("chain", &self.chain)
            .field("version", &self.version)
            .finish()
    }
}

impl FromStr for AddressData {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Encodes address data as a bech32m `0zk1…` string.
///
/// The master and viewing public keys must be exactly 32 bytes each. An
/// absent chain encodes as the "any chain" sentinel, byte-identical to
/// encoding [`Chain::ANY`] explicitly; an absent version encodes as
/// [`ADDRESS_VERSION`]. The output is always exactly
/// [`ADDRESS_LENGTH_LIMIT`] characters.
pub fn stringify(data: &AddressData) -> Result<String, AddressError> {
    check_key_length("master public key", &data.master_public_key)?;
    check_key_length("viewing public key", &data.viewing_public_key)?;

    let network_id = NetworkId::try_from(data.chain)?;

    let mut record = [0u8; RECORD_LEN];
    record[0] = data.version.unwrap_or(ADDRESS_VERSION);
    record[MASTER_PUBLIC_KEY].copy_from_slice(&data.master_public_key);
    record[NETWORK_ID].copy_from_slice(&network_id.obfuscate().bytes());
    record[VIEWING_PUBLIC_KEY].copy_from_slice(&data.viewing_public_key);

    let address = bech32::encode(PREFIX, record.to_base32(), Variant::Bech32m)
        .expect("prefix is a valid bech32 human-readable part");

    debug_assert_eq!(address.len(), ADDRESS_LENGTH_LIMIT);

    Ok(address)
}

/// Decodes a bech32m `0zk1…` string into address data.
///
/// Each validation step fails with its own [`AddressError`] kind, so
/// callers can tell a typo ([`AddressError::ChecksumInvalid`]) from a
/// foreign format ([`AddressError::PrefixMismatch`],
/// [`AddressError::LengthInvalid`]) or a future record revision
/// ([`AddressError::UnsupportedVersion`]).
pub fn parse(address: &str) -> Result<AddressData, AddressError> {
    if address.is_empty() {
        return Err(AddressError::MissingInput);
    }

    // Check the prefix on the raw string, before checksum verification, so
    // a foreign prefix is reported as a prefix mismatch even when its
    // checksum does not verify either.
    if address
        .strip_prefix(PREFIX)
        .and_then(|rest| rest.strip_prefix('1'))
        .is_none()
    {
        return Err(AddressError::PrefixMismatch {
            found: found_prefix(address),
        });
    }

    // The length ceiling is part of the bech32m layer's configuration:
    // anything longer cannot be a 73-byte record.
    if address.len() > ADDRESS_LENGTH_LIMIT {
        return Err(AddressError::DecodeMalformed(bech32::Error::InvalidLength));
    }

    let (hrp, words, variant) = bech32::decode(address).map_err(|error| match error {
        bech32::Error::InvalidChecksum => AddressError::ChecksumInvalid,
        malformed => AddressError::DecodeMalformed(malformed),
    })?;

    // `bech32::decode` accepts both checksum constants; characters that
    // verify under plain bech32 are still a checksum failure for bech32m
    // data.
    if variant != Variant::Bech32m {
        return Err(AddressError::ChecksumInvalid);
    }

    // The raw check above can be fooled by a `1` inside the data part
    // ("0zk1ab1…" has the human-readable part "0zk1ab"), so compare the
    // decoded prefix as well.
    if hrp != PREFIX {
        return Err(AddressError::PrefixMismatch { found: hrp });
    }

    let bytes = Vec::<u8>::from_base32(&words)?;

    if bytes.len() != RECORD_LEN {
        return Err(AddressError::LengthInvalid {
            field: "address payload",
            expected: RECORD_LEN,
            found: bytes.len(),
        });
    }

    let mut network_id_bytes = [0u8; 8];
    network_id_bytes.copy_from_slice(&bytes[NETWORK_ID]);
    let chain = Chain::from(NetworkId::from(network_id_bytes).obfuscate());

    let version = bytes[0];
    if version != ADDRESS_VERSION {
        return Err(AddressError::UnsupportedVersion { found: version });
    }

    Ok(AddressData {
        master_public_key: bytes[MASTER_PUBLIC_KEY].to_vec(),
        viewing_public_key: bytes[VIEWING_PUBLIC_KEY].to_vec(),
        chain: Some(chain),
        version: Some(version),
    })
}

/// Returns the would-be human-readable part of `address`: everything before
/// the last `1` separator, or the whole string if there is none.
fn found_prefix(address: &str) -> String {
    match address.rfind('1') {
        Some(separator) => address[..separator].into(),
        None => address.into(),
    }
}

fn check_key_length(field: &'static str, key: &[u8]) -> Result<(), AddressError> {
    if key.len() != PUBLIC_KEY_LEN {
        return Err(AddressError::LengthInvalid {
            field,
            expected: PUBLIC_KEY_LEN,
            found: key.len(),
        });
    }

    Ok(())
}
