//! Benchmarking setup for pallet-iconbet-token

use super::*;

#[allow(unused)]
use crate::Pallet as IconbetToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        // Setup: fund the caller
        Balances::<T>::insert(&caller, 10_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount, None);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn set_halt() {
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, true);

        assert_eq!(IceAge::<T>::get(), true);
    }

    #[benchmark]
    fn set_frozen() {
        let account: T::AccountId = whitelisted_caller();
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, account.clone(), true);

        assert_eq!(Frozen::<T>::get(&account), true);
    }

    impl_benchmark_test_suite!(IconbetToken, crate::mock::new_test_ext(), crate::mock::Test);
}
