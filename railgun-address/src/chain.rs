//! Network identifiers for 0zk addresses.
//!
//! Every address is scoped to a [`Chain`], packed on the wire as an 8-byte
//! [`NetworkId`]: one chain type byte followed by a big-endian 56-bit chain
//! id. Addresses store the network id XORed with a fixed mask, which makes
//! the encoded text contain a recognizable substring; the transform is an
//! involution, so [`NetworkId::obfuscate`] serves both directions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AddressError;

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;

#[cfg(test)]
use proptest::prelude::*;

/// The largest chain id the wire format can carry: 2^56 − 1.
///
/// Also the chain id of the "any chain" sentinel, [`Chain::ANY`].
pub const CHAIN_ID_ANY: u64 = (1 << 56) - 1;

/// The fixed XOR mask applied to network id bytes before they enter an
/// address: the ASCII bytes of `railgun` followed by a zero byte.
///
/// Purely cosmetic, with no confidentiality guarantee.
const OBFUSCATION_MASK: [u8; 8] = *b"railgun\0";

/// The family of networks a [`Chain`] belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ChainType {
    /// EVM-compatible networks, chain type byte `0`.
    Evm,
    /// The "any chain" marker, chain type byte `255`.
    Any,
    /// Chain type bytes this crate has no name for.
    Other(u8),
}

impl From<u8> for ChainType {
    fn from(byte: u8) -> Self {
        match byte {
            0 => ChainType::Evm,
            255 => ChainType::Any,
            other => ChainType::Other(other),
        }
    }
}

impl From<ChainType> for u8 {
    fn from(chain_type: ChainType) -> Self {
        match chain_type {
            ChainType::Evm => 0,
            ChainType::Any => 255,
            ChainType::Other(other) => other,
        }
    }
}

/// The network an address is scoped to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Chain {
    /// The chain family marker.
    pub chain_type: ChainType,
    /// The chain id within that family.
    ///
    /// Must fit in 56 bits: ids at or above 2^56 are rejected at encode
    /// time rather than silently truncated.
    pub id: u64,
}

impl Chain {
    /// The "any/unspecified chain" sentinel.
    ///
    /// Encoding an absent chain produces the same bytes as encoding this
    /// value explicitly.
    pub const ANY: Chain = Chain {
        chain_type: ChainType::Any,
        id: CHAIN_ID_ANY,
    };

    /// Returns the chain for an EVM network with the given chain id.
    pub fn evm(id: u64) -> Chain {
        Chain {
            chain_type: ChainType::Evm,
            id,
        }
    }
}

/// The packed 8-byte (chain type, chain id) pair carried in an address.
///
/// Byte 0 is the chain type; bytes 1–7 are the big-endian 56-bit chain id.
/// Conversions to and from [`Chain`] operate on the plain form; the wire
/// record stores the [obfuscated](NetworkId::obfuscate) form.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct NetworkId(pub(crate) [u8; 8]);

impl NetworkId {
    /// The sentinel network id for "any chain": eight `0xff` bytes.
    pub const ANY: NetworkId = NetworkId([0xff; 8]);

    /// XORs every byte with the fixed `railgun\0` mask.
    ///
    /// The transform is an involution, `obfuscate(obfuscate(x)) == x`, so
    /// this one function obfuscates network ids on the way into an address
    /// and recovers them on the way out.
    pub fn obfuscate(self) -> NetworkId {
        let mut bytes = self.0;
        for (byte, mask) in bytes.iter_mut().zip(OBFUSCATION_MASK) {
            *byte ^= mask;
        }

        NetworkId(bytes)
    }

    /// Returns the raw network id bytes.
    pub fn bytes(&self) -> [u8; 8] {
        self.0
    }
}

impl fmt::Debug for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NetworkId")
            .field(&hex::encode(self.0))
            .finish()
    }
}

impl From<[u8; 8]> for NetworkId {
    fn from(bytes: [u8; 8]) -> Self {
        NetworkId(bytes)
    }
}

impl TryFrom<Chain> for NetworkId {
    type Error = AddressError;

    /// Packs a chain into its network id bytes.
    ///
    /// Fails with [`AddressError::ChainIdOutOfRange`] when the chain id
    /// does not fit in the 7-byte wire field.
    fn try_from(chain: Chain) -> Result<NetworkId, AddressError> {
        if chain.id > CHAIN_ID_ANY {
            return Err(AddressError::ChainIdOutOfRange(chain.id));
        }

        // The id fits in 56 bits, so its top byte is zero and the chain
        // type can take its place.
        let mut bytes = chain.id.to_be_bytes();
        bytes[0] = chain.chain_type.into();

        Ok(NetworkId(bytes))
    }
}

impl TryFrom<Option<Chain>> for NetworkId {
    type Error = AddressError;

    /// Packs an optional chain, mapping `None` to [`NetworkId::ANY`].
    fn try_from(chain: Option<Chain>) -> Result<NetworkId, AddressError> {
        match chain {
            Some(chain) => chain.try_into(),
            None => Ok(NetworkId::ANY),
        }
    }
}

impl From<NetworkId> for Chain {
    /// Unpacks network id bytes into a structured chain.
    ///
    /// The sentinel is not special-cased: eight `0xff` bytes unpack to
    /// [`Chain::ANY`] like any other value. Callers that need "any chain"
    /// semantics compare against `Chain::ANY` themselves.
    fn from(network_id: NetworkId) -> Chain {
        let mut id_bytes = network_id.0;
        id_bytes[0] = 0;

        Chain {
            chain_type: network_id.0[0].into(),
            id: u64::from_be_bytes(id_bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evm_mainnet_packs_to_wire_bytes() {
        let _init_guard = railgun_test::init();

        let network_id =
            NetworkId::try_from(Chain::evm(1)).expect("chain id 1 fits in 56 bits");

        assert_eq!(network_id.bytes(), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(Chain::from(network_id), Chain::evm(1));
    }

    #[test]
    fn sentinel_packs_to_all_ones() {
        let _init_guard = railgun_test::init();

        assert_eq!(NetworkId::try_from(Chain::ANY), Ok(NetworkId::ANY));
        assert_eq!(NetworkId::try_from(None::<Chain>), Ok(NetworkId::ANY));
        assert_eq!(Chain::from(NetworkId::ANY), Chain::ANY);
    }

    #[test]
    fn oversized_chain_id_is_rejected() {
        let _init_guard = railgun_test::init();

        assert_eq!(
            NetworkId::try_from(Chain::evm(1 << 56)),
            Err(AddressError::ChainIdOutOfRange(1 << 56)),
        );
    }

    #[test]
    fn obfuscated_sentinel_vector() {
        let _init_guard = railgun_test::init();

        assert_eq!(
            NetworkId::ANY.obfuscate().bytes(),
            [0x8d, 0x9e, 0x96, 0x93, 0x98, 0x8a, 0x91, 0xff],
        );
    }

    #[test]
    fn chain_type_bytes_round_trip() {
        let _init_guard = railgun_test::init();

        for byte in [0, 1, 2, 127, 254, 255] {
            assert_eq!(u8::from(ChainType::from(byte)), byte);
        }

        assert_eq!(ChainType::from(0), ChainType::Evm);
        assert_eq!(ChainType::from(255), ChainType::Any);
    }
}

#[cfg(test)]
proptest! {

    #[test]
    fn obfuscate_is_an_involution(bytes in any::<[u8; 8]>()) {
        let _init_guard = railgun_test::init();

        let network_id = NetworkId(bytes);

        prop_assert_eq!(network_id.obfuscate().obfuscate(), network_id);
    }

    #[test]
    fn chain_network_id_round_trip(chain in any::<Chain>()) {
        let _init_guard = railgun_test::init();

        let network_id = NetworkId::try_from(chain)
            .expect("randomized chain ids are within 56 bits");

        prop_assert_eq!(Chain::from(network_id), chain);
    }
}
