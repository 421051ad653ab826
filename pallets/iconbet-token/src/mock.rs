use std::cell::RefCell;

use crate as pallet_iconbet_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, DispatchError,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        IconbetToken: pallet_iconbet_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

parameter_types! {
    pub const OwnerAccount: u64 = 1;
}

/// The one account the mock receiver treats as a contract.
pub const CONTRACT_ACCOUNT: u64 = 7;

pub struct EnsureOwner;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureOwner {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == OwnerAccount::get() => {
                Ok(account)
            }
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(OwnerAccount::get()))
    }
}

thread_local! {
    static FALLBACK_FAILS: RefCell<bool> = RefCell::new(false);
    static FALLBACKS: RefCell<Vec<(u64, u64, u128, Vec<u8>)>> = RefCell::new(Vec::new());
}

/// Test receiver: [`CONTRACT_ACCOUNT`] is the only contract, every delivered
/// fallback is recorded, and [`set_fallback_failure`] scripts the outcome.
pub struct MockReceiver;
impl pallet_iconbet_token::TokenReceiver<u64> for MockReceiver {
    fn is_contract(who: &u64) -> bool {
        *who == CONTRACT_ACCOUNT
    }

    fn token_fallback(
        who: &u64,
        from: &u64,
        value: u128,
        memo: &[u8],
    ) -> frame_support::dispatch::DispatchResult {
        if FALLBACK_FAILS.with(|f| *f.borrow()) {
            return Err(DispatchError::Other("fallback rejected"));
        }
        FALLBACKS.with(|calls| calls.borrow_mut().push((*who, *from, value, memo.to_vec())));
        Ok(())
    }
}

pub fn set_fallback_failure(fails: bool) {
    FALLBACK_FAILS.with(|f| *f.borrow_mut() = fails);
}

pub fn recorded_fallbacks() -> Vec<(u64, u64, u128, Vec<u8>)> {
    FALLBACKS.with(|calls| calls.borrow().clone())
}

impl pallet_iconbet_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AdminOrigin = EnsureOwner;
    type TokenReceiver = MockReceiver;
    type MaxMemoLength = ConstU32<128>;
    type WeightInfo = ();
}

// Build genesis storage according to the mock runtime. The owner (account 1)
// creates the token with 1000 whole tokens at 2 decimals, so the ledger opens
// with a total supply of 100_000 units, all held by the owner.
pub fn new_test_ext() -> sp_io::TestExternalities {
    set_fallback_failure(false);
    FALLBACKS.with(|calls| calls.borrow_mut().clear());

    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_iconbet_token::GenesisConfig::<Test> {
        creator: Some(OwnerAccount::get()),
        initial_supply: 1_000,
        decimals: 2,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    t.into()
}
