//! Randomised address data generation for property tests.

use proptest::prelude::*;

use crate::chain::Chain;

use super::{AddressData, ADDRESS_VERSION};

impl Arbitrary for AddressData {
    type Parameters = ();

    /// Generates encodable address data: 32-byte keys, in-range chain ids,
    /// and either an absent version or the supported one.
    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (
            any::<[u8; 32]>(),
            any::<[u8; 32]>(),
            any::<Option<Chain>>(),
            proptest::option::of(Just(ADDRESS_VERSION)),
        )
            .prop_map(
                |(master_public_key, viewing_public_key, chain, version)| AddressData {
                    master_public_key: master_public_key.to_vec(),
                    viewing_public_key: viewing_public_key.to_vec(),
                    chain,
                    version,
                },
            )
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
