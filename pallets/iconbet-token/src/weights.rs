//! Dispatch weights for pallet-iconbet-token.
//!
//! Placeholder constants until generated weights from benchmark runs on
//! reference hardware replace them. The `()` implementation keeps the mock
//! runtime and early deployments working.

use frame_support::weights::Weight;

pub trait WeightInfo {
    fn transfer() -> Weight;
    fn set_halt() -> Weight;
    fn set_frozen() -> Weight;
}

impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn set_halt() -> Weight {
        Weight::from_parts(10_000, 0)
    }

    fn set_frozen() -> Weight {
        Weight::from_parts(10_000, 0)
    }
}
