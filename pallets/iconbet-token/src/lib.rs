#![cfg_attr(not(feature = "std"), no_std)]
// The read-only query surface keeps the deprecated `pallet::getter` accessors.
#![allow(deprecated)]

use frame_support::{
    dispatch::DispatchResult, ensure, pallet_prelude::*, storage::with_storage_layer,
    traits::EnsureOrigin,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "pallet-iconbet-token";

/// Token name reported by [`Pallet::name`].
pub const TOKEN_NAME: &str = "ICONBET";

/// Token symbol reported by [`Pallet::symbol`].
pub const TOKEN_SYMBOL: &str = "ICBX";

/// Upper bound on the `decimals` genesis parameter.
pub const MAX_DECIMALS: u8 = 21;

/// Memo bytes recorded when a transfer carries none.
pub const DEFAULT_MEMO: &[u8] = b"None";

/// Notification surface for transfer recipients that can execute code.
///
/// The runtime decides which accounts count as contracts and how a
/// notification reaches them. `token_fallback` runs after the recipient has
/// been credited; returning an error aborts the whole transfer.
pub trait TokenReceiver<AccountId> {
    /// Whether `who` is a contract-capable account.
    fn is_contract(who: &AccountId) -> bool;

    /// Notify `who` that `value` tokens arrived from `from`.
    fn token_fallback(
        who: &AccountId,
        from: &AccountId,
        value: u128,
        memo: &[u8],
    ) -> DispatchResult;
}

/// No account is a contract; transfers never notify.
impl<AccountId> TokenReceiver<AccountId> for () {
    fn is_contract(_who: &AccountId) -> bool {
        false
    }

    fn token_fallback(
        _who: &AccountId,
        _from: &AccountId,
        _value: u128,
        _memo: &[u8],
    ) -> DispatchResult {
        Ok(())
    }
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    /// Transfer memo, bounded by [`Config::MaxMemoLength`].
    pub type MemoOf<T> = BoundedVec<u8, <T as Config>::MaxMemoLength>;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;
        type TokenReceiver: TokenReceiver<Self::AccountId>;
        #[pallet::constant]
        type MaxMemoLength: Get<u32>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Decimal places baked into the supply, fixed at genesis
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply, fixed at genesis
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances. Accounts never written read as zero
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Global transfer halt (the "ice age")
    #[pallet::storage]
    #[pallet::getter(fn is_halted)]
    pub type IceAge<T> = StorageValue<_, bool, ValueQuery>;

    /// Frozen accounts (can neither send nor receive transfers)
    #[pallet::storage]
    #[pallet::getter(fn is_frozen)]
    pub type Frozen<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128, memo: MemoOf<T> },
        /// Global transfer halt toggled
        IceAgeSet { halted: bool },
        /// Per-account freeze flag toggled
        FrozenSet { account: T::AccountId, frozen: bool },
    }

    #[pallet::error]
    pub enum Error<T> {
        TransfersHalted,
        AccountFrozen,
        InsufficientBalance,
        BalanceOverflow,
        NotificationFailed,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(
            origin: OriginFor<T>,
            to: T::AccountId,
            amount: u128,
            memo: Option<MemoOf<T>>,
        ) -> DispatchResult {
            let from = ensure_signed(origin)?;
            let memo = memo.unwrap_or_else(|| BoundedVec::truncate_from(DEFAULT_MEMO.to_vec()));
            // An explicit layer so a failed recipient notification discards
            // the already-written debit and credit.
            with_storage_layer(|| Self::do_transfer(from, to, amount, memo))
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::set_halt())]
        pub fn set_halt(origin: OriginFor<T>, halted: bool) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            IceAge::<T>::put(halted);
            log::debug!(target: LOG_TARGET, "ice age -> {halted}");
            Self::deposit_event(Event::IceAgeSet { halted });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::set_frozen())]
        pub fn set_frozen(
            origin: OriginFor<T>,
            account: T::AccountId,
            frozen: bool,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            if frozen {
                Frozen::<T>::insert(&account, true);
            } else {
                Frozen::<T>::remove(&account);
            }
            log::debug!(target: LOG_TARGET, "freeze {account:?} -> {frozen}");
            Self::deposit_event(Event::FrozenSet { account, frozen });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Token name ("ICONBET").
        pub fn name() -> &'static str {
            TOKEN_NAME
        }

        /// Token symbol ("ICBX").
        pub fn symbol() -> &'static str {
            TOKEN_SYMBOL
        }

        fn do_transfer(
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
            memo: MemoOf<T>,
        ) -> DispatchResult {
            ensure!(!IceAge::<T>::get(), Error::<T>::TransfersHalted);
            ensure!(!Frozen::<T>::get(&from), Error::<T>::AccountFrozen);
            ensure!(!Frozen::<T>::get(&to), Error::<T>::AccountFrozen);

            let from_balance = Balances::<T>::get(&from);
            ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);
            let debited = from_balance - amount;

            // A self-transfer credits the already-debited balance, so moving
            // an entire balance to oneself is not misread as overflow.
            let to_balance = if to == from { debited } else { Balances::<T>::get(&to) };
            let credited = to_balance.checked_add(amount).ok_or(Error::<T>::BalanceOverflow)?;

            Balances::<T>::insert(&from, debited);
            Balances::<T>::insert(&to, credited);

            if T::TokenReceiver::is_contract(&to) {
                T::TokenReceiver::token_fallback(&to, &from, amount, &memo)
                    .map_err(|_| Error::<T>::NotificationFailed)?;
            }

            log::debug!(target: LOG_TARGET, "transfer {from:?} -> {to:?}, amount {amount}");
            Self::deposit_event(Event::Transferred { from, to, amount, memo });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Account credited with the entire initial supply
        pub creator: Option<T::AccountId>,
        /// Whole-token supply, scaled by `decimals` at build time
        pub initial_supply: u128,
        /// Decimal places, at most [`MAX_DECIMALS`]
        pub decimals: u8,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            assert!(self.decimals <= MAX_DECIMALS, "decimals out of range (maximum is 21)");

            // 10^21 fits u128 comfortably, so only the multiply can overflow.
            let supply = self
                .initial_supply
                .checked_mul(10u128.pow(self.decimals as u32))
                .expect("initial supply does not fit the balance width");

            Decimals::<T>::put(self.decimals);
            TotalSupply::<T>::put(supply);

            match &self.creator {
                Some(creator) => Balances::<T>::insert(creator, supply),
                None => assert!(supply == 0, "a non-zero supply requires a creator"),
            }

            log::debug!(
                target: LOG_TARGET,
                "installed: supply {supply}, decimals {}",
                self.decimals
            );
        }
    }
}
