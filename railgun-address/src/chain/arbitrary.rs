//! Randomised chain and network id generation for property tests.

use proptest::prelude::*;

use super::{Chain, ChainType, NetworkId, CHAIN_ID_ANY};

impl Arbitrary for ChainType {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        // Going through `From<u8>` keeps generated values canonical:
        // `Other(0)` and `Other(255)` are unrepresentable.
        any::<u8>().prop_map(ChainType::from).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for Chain {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (any::<ChainType>(), 0..=CHAIN_ID_ANY)
            .prop_map(|(chain_type, id)| Chain { chain_type, id })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for NetworkId {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<[u8; 8]>().prop_map(NetworkId).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
