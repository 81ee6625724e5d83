#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated weight constants for MVP (will be replaced by benchmarks post-audit)
#![allow(deprecated)]

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::UnixTime};
use frame_system::{ensure_signed, pallet_prelude::*};
use scale_info::TypeInfo;
use sp_std::prelude::*;

pub use pallet::*;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod migrations;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Smallest on-ledger quantity: the token carries 6 decimal places.
pub const UNIT: u128 = 1_000_000;

/// Supply minted to the master controller at genesis.
pub const INITIAL_SUPPLY: u128 = 10_000_000 * UNIT;

/// Per-call mint ceiling at genesis.
pub const INITIAL_MAX_MINT_PER_TRANSACTION: u128 = 10_000_000 * UNIT;

/// Total supply ceiling at genesis.
pub const INITIAL_MAX_TOTAL_SUPPLY: u128 = 1_000_000_000 * UNIT;

/// Collateralization ratio denominator: 10_000 basis points == 100%.
pub const BASIS_POINTS: u128 = 10_000;

/// Genesis role arrays are bounded to 10 entries each. Later `grant_role`
/// calls are not subject to this bound.
pub const MAX_GENESIS_ROLE_HOLDERS: usize = 10;

/// Permission classes. Each privileged extrinsic is reachable by exactly one
/// role; only `DefaultAdmin` holders may grant or revoke membership.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    RuntimeDebug,
)]
pub enum Role {
    /// Grants and revokes all roles, including other `DefaultAdmin`s.
    DefaultAdmin,
    /// Adjusts the two supply-cap parameters.
    Admin,
    /// Issues new tokens and burns via allowance.
    Minter,
    /// Maintains the compliance blacklist.
    Blacklister,
    /// Toggles the mint pause flag.
    Pauser,
    /// Maintains the reserve attestation figures.
    ReserveManager,
}

/// Snapshot of reserve backing versus circulating supply.
///
/// Exactly one of `deficit` / `surplus` is nonzero unless reserves and supply
/// are equal, in which case both are zero.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct ReserveHealth {
    pub healthy: bool,
    pub deficit: u128,
    pub surplus: u128,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    /// Compliance blacklist reason, stored alongside the flag.
    pub type ReasonText = BoundedVec<u8, ConstU32<128>>;

    /// Free-form label for the asset class backing a reserve addition.
    pub type ReserveTypeLabel = BoundedVec<u8, ConstU32<64>>;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Wall-clock source for reserve attestation timestamps.
        type Time: UnixTime;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Reserve Dollar")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "RSD")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals (6 for this ledger)
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply, updated in lockstep with every mint and burn.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending allowances: owner -> spender -> remaining amount.
    /// `u128::MAX` is the unlimited-allowance sentinel and is never decremented.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Role membership table. Many-to-many: one account may hold several
    /// roles, one role may be held by several accounts.
    #[pallet::storage]
    #[pallet::getter(fn role_members)]
    pub type Roles<T: Config> = StorageDoubleMap<
        _,
        Twox64Concat,
        Role,
        Blake2_128Concat,
        T::AccountId,
        bool,
        ValueQuery,
    >;

    /// Blacklisted accounts. Presence of a key is the flag; the value is the
    /// reason recorded by the blacklister.
    #[pallet::storage]
    #[pallet::getter(fn blacklist_entry)]
    pub type Blacklist<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, ReasonText, OptionQuery>;

    /// Largest amount a single `mint` call may issue. Always nonzero.
    #[pallet::storage]
    #[pallet::getter(fn max_mint_per_transaction)]
    pub type MaxMintPerTransaction<T> = StorageValue<_, u128, ValueQuery>;

    /// Hard ceiling on total supply. Never below the current total supply.
    #[pallet::storage]
    #[pallet::getter(fn max_total_supply)]
    pub type MaxTotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Self-reported reserve backing. Purely informational; nothing in the
    /// ledger enforces it against real-world holdings.
    #[pallet::storage]
    #[pallet::getter(fn total_reserves)]
    pub type TotalReserves<T> = StorageValue<_, u128, ValueQuery>;

    /// Unix seconds of the most recent reserve write.
    #[pallet::storage]
    #[pallet::getter(fn last_reserve_update)]
    pub type LastReserveUpdate<T> = StorageValue<_, u64, ValueQuery>;

    /// Mint pause flag. Gates `mint` only; every other operation ignores it.
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved between two live accounts
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// New tokens issued
        Minted { minter: T::AccountId, to: T::AccountId, amount: u128, new_total_supply: u128 },
        /// Tokens destroyed
        Burned { burner: T::AccountId, from: T::AccountId, amount: u128, new_total_supply: u128 },
        /// Spending allowance set
        Approved { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Account barred from ordinary transfers and from receiving mints
        Blacklisted { account: T::AccountId, reason: ReasonText },
        /// Account cleared from the blacklist
        UnBlacklisted { account: T::AccountId },
        /// Minting suspended
        Paused { by: T::AccountId },
        /// Minting resumed
        Unpaused { by: T::AccountId },
        /// Per-call mint ceiling replaced
        MaxMintPerTransactionUpdated { old: u128, new: u128 },
        /// Total supply ceiling replaced
        MaxTotalSupplyUpdated { old: u128, new: u128 },
        /// Reserve attestation refreshed; carries the derived backing ratio
        ReservesUpdated {
            total_reserves: u128,
            total_supply: u128,
            collateralization_ratio: u128,
        },
        /// Reserves increased by the given asset class
        ReservesAdded { amount: u128, reserve_type: ReserveTypeLabel },
        /// Reserves decreased
        ReservesRemoved { amount: u128, reason: ReasonText },
        /// Role membership granted
        RoleGranted { role: Role, account: T::AccountId, by: T::AccountId },
        /// Role membership revoked
        RoleRevoked { role: Role, account: T::AccountId, by: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold the role required for this call.
        Unauthorized,
        /// Minting is suspended.
        MintingPaused,
        AlreadyPaused,
        NotPaused,
        /// A positive amount is required here.
        ZeroAmount,
        ExceedsMaxMintPerTransaction,
        ExceedsMaxTotalSupply,
        /// Proposed supply ceiling is below the circulating supply.
        MaxTotalSupplyBelowCurrentSupply,
        /// Setter called with the value already in force.
        SameValue,
        InsufficientBalance,
        InsufficientAllowance,
        InsufficientReserves,
        SenderBlacklisted,
        ReceiverBlacklisted,
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Issue `amount` new tokens to `to`. Caller must hold `Minter`,
        /// minting must not be paused, and both supply caps must hold.
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let minter = ensure_signed(origin)?;
            Self::ensure_role(&minter, Role::Minter)?;
            ensure!(!Paused::<T>::get(), Error::<T>::MintingPaused);
            ensure!(amount > 0, Error::<T>::ZeroAmount);
            ensure!(
                amount <= MaxMintPerTransaction::<T>::get(),
                Error::<T>::ExceedsMaxMintPerTransaction
            );
            let new_total_supply = TotalSupply::<T>::get()
                .checked_add(amount)
                .ok_or(Error::<T>::Overflow)?;
            ensure!(
                new_total_supply <= MaxTotalSupply::<T>::get(),
                Error::<T>::ExceedsMaxTotalSupply
            );

            Self::do_transfer(None, Some(&to), amount)?;
            Self::deposit_event(Event::Minted { minter, to, amount, new_total_supply });
            Ok(())
        }

        /// Destroy `amount` of the caller's own balance. No role required and
        /// never blocked by the pause flag or the blacklist: holders can
        /// always retire their own tokens.
        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_transfer(Some(&who), None, amount)?;
            Self::deposit_event(Event::Burned {
                burner: who.clone(),
                from: who,
                amount,
                new_total_supply: TotalSupply::<T>::get(),
            });
            Ok(())
        }

        /// Destroy `amount` from `from` using the caller's spending
        /// allowance. Caller must hold `Minter`. Not gated by the pause flag
        /// or the blacklist, so sanctioned holdings stay burnable during
        /// emergency response.
        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn burn_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let minter = ensure_signed(origin)?;
            Self::ensure_role(&minter, Role::Minter)?;
            ensure!(amount > 0, Error::<T>::ZeroAmount);

            let remaining = Self::prepare_allowance(&from, &minter, amount)?;
            Self::do_transfer(Some(&from), None, amount)?;
            Self::commit_allowance(&from, &minter, remaining);

            Self::deposit_event(Event::Burned {
                burner: minter,
                from,
                amount,
                new_total_supply: TotalSupply::<T>::get(),
            });
            Ok(())
        }

        /// Move `amount` from the caller to `to`. Fails if either party is
        /// blacklisted. Unaffected by the pause flag.
        #[pallet::call_index(3)]
        #[pallet::weight(10_000)]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let from = ensure_signed(origin)?;
            Self::do_transfer(Some(&from), Some(&to), amount)?;
            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        /// Set `spender`'s allowance over the caller's balance. Passing
        /// `u128::MAX` grants an unlimited allowance that later spends do not
        /// decrement.
        #[pallet::call_index(4)]
        #[pallet::weight(10_000)]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            if amount == 0 {
                Allowances::<T>::remove(&owner, &spender);
            } else {
                Allowances::<T>::insert(&owner, &spender, amount);
            }
            Self::deposit_event(Event::Approved { owner, spender, amount });
            Ok(())
        }

        /// Move `amount` from `from` to `to`, spending the caller's
        /// allowance. Fails if either party is blacklisted.
        #[pallet::call_index(5)]
        #[pallet::weight(10_000)]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;

            let remaining = Self::prepare_allowance(&from, &spender, amount)?;
            Self::do_transfer(Some(&from), Some(&to), amount)?;
            Self::commit_allowance(&from, &spender, remaining);

            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        /// Bar `account` from ordinary transfers and from receiving mints,
        /// recording `reason`. Re-blacklisting overwrites the stored reason.
        #[pallet::call_index(6)]
        #[pallet::weight(10_000)]
        pub fn blacklist(
            origin: OriginFor<T>,
            account: T::AccountId,
            reason: ReasonText,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::Blacklister)?;
            Blacklist::<T>::insert(&account, reason.clone());
            Self::deposit_event(Event::Blacklisted { account, reason });
            Ok(())
        }

        /// Clear `account` from the blacklist, resetting flag and reason.
        /// A no-op (still emitting the event) when the account is not listed.
        #[pallet::call_index(7)]
        #[pallet::weight(10_000)]
        pub fn un_blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::Blacklister)?;
            Blacklist::<T>::remove(&account);
            Self::deposit_event(Event::UnBlacklisted { account });
            Ok(())
        }

        /// Suspend minting. Every other operation keeps working.
        #[pallet::call_index(8)]
        #[pallet::weight(10_000)]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::Pauser)?;
            ensure!(!Paused::<T>::get(), Error::<T>::AlreadyPaused);
            Paused::<T>::put(true);
            Self::deposit_event(Event::Paused { by: who });
            Ok(())
        }

        /// Resume minting.
        #[pallet::call_index(9)]
        #[pallet::weight(10_000)]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::Pauser)?;
            ensure!(Paused::<T>::get(), Error::<T>::NotPaused);
            Paused::<T>::put(false);
            Self::deposit_event(Event::Unpaused { by: who });
            Ok(())
        }

        /// Replace the per-call mint ceiling. The new limit must be nonzero
        /// and differ from the current one.
        #[pallet::call_index(10)]
        #[pallet::weight(10_000)]
        pub fn set_max_mint_per_transaction(
            origin: OriginFor<T>,
            new_limit: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::Admin)?;
            ensure!(new_limit > 0, Error::<T>::ZeroAmount);
            let old = MaxMintPerTransaction::<T>::get();
            ensure!(new_limit != old, Error::<T>::SameValue);
            MaxMintPerTransaction::<T>::put(new_limit);
            Self::deposit_event(Event::MaxMintPerTransactionUpdated { old, new: new_limit });
            Ok(())
        }

        /// Replace the total supply ceiling. The new limit must cover the
        /// circulating supply (boundary inclusive) and differ from the
        /// current one.
        #[pallet::call_index(11)]
        #[pallet::weight(10_000)]
        pub fn set_max_total_supply(origin: OriginFor<T>, new_limit: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::Admin)?;
            ensure!(
                new_limit >= TotalSupply::<T>::get(),
                Error::<T>::MaxTotalSupplyBelowCurrentSupply
            );
            let old = MaxTotalSupply::<T>::get();
            ensure!(new_limit != old, Error::<T>::SameValue);
            MaxTotalSupply::<T>::put(new_limit);
            Self::deposit_event(Event::MaxTotalSupplyUpdated { old, new: new_limit });
            Ok(())
        }

        /// Overwrite the attested reserve figure unconditionally.
        #[pallet::call_index(12)]
        #[pallet::weight(10_000)]
        pub fn update_reserves(origin: OriginFor<T>, new_amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::ReserveManager)?;
            TotalReserves::<T>::put(new_amount);
            Self::note_reserves_updated();
            Ok(())
        }

        /// Attest additional reserves of the given asset class.
        #[pallet::call_index(13)]
        #[pallet::weight(10_000)]
        pub fn add_reserves(
            origin: OriginFor<T>,
            amount: u128,
            reserve_type: ReserveTypeLabel,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::ReserveManager)?;
            ensure!(amount > 0, Error::<T>::ZeroAmount);
            let new_total = TotalReserves::<T>::get()
                .checked_add(amount)
                .ok_or(Error::<T>::Overflow)?;
            TotalReserves::<T>::put(new_total);
            Self::deposit_event(Event::ReservesAdded { amount, reserve_type });
            Self::note_reserves_updated();
            Ok(())
        }

        /// Attest a reserve reduction. `amount` may not exceed the attested
        /// total.
        #[pallet::call_index(14)]
        #[pallet::weight(10_000)]
        pub fn remove_reserves(
            origin: OriginFor<T>,
            amount: u128,
            reason: ReasonText,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::ReserveManager)?;
            ensure!(amount > 0, Error::<T>::ZeroAmount);
            let current = TotalReserves::<T>::get();
            ensure!(amount <= current, Error::<T>::InsufficientReserves);
            TotalReserves::<T>::put(current - amount);
            Self::deposit_event(Event::ReservesRemoved { amount, reason });
            Self::note_reserves_updated();
            Ok(())
        }

        /// Add `account` to `role`. Caller must hold `DefaultAdmin`.
        #[pallet::call_index(15)]
        #[pallet::weight(10_000)]
        pub fn grant_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::DefaultAdmin)?;
            Roles::<T>::insert(role, &account, true);
            Self::deposit_event(Event::RoleGranted { role, account, by: who });
            Ok(())
        }

        /// Remove `account` from `role`. Caller must hold `DefaultAdmin`.
        #[pallet::call_index(16)]
        #[pallet::weight(10_000)]
        pub fn revoke_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::DefaultAdmin)?;
            Roles::<T>::remove(role, &account);
            Self::deposit_event(Event::RoleRevoked { role, account, by: who });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Whether `account` currently holds `role`.
        pub fn has_role(account: &T::AccountId, role: Role) -> bool {
            Roles::<T>::get(role, account)
        }

        pub fn is_blacklisted(account: &T::AccountId) -> bool {
            Blacklist::<T>::contains_key(account)
        }

        /// The recorded blacklist reason; empty when the account is clear.
        pub fn blacklist_reason(account: &T::AccountId) -> Vec<u8> {
            Blacklist::<T>::get(account).map(BoundedVec::into_inner).unwrap_or_default()
        }

        /// How much supply headroom remains under the total cap.
        pub fn remaining_mint_capacity() -> u128 {
            MaxTotalSupply::<T>::get().saturating_sub(TotalSupply::<T>::get())
        }

        /// Reserve backing in basis points: `reserves * 10_000 / supply`.
        /// Defined as exactly 10_000 when the supply is zero.
        pub fn collateralization_ratio() -> u128 {
            let supply = TotalSupply::<T>::get();
            if supply == 0 {
                return BASIS_POINTS;
            }
            TotalReserves::<T>::get().saturating_mul(BASIS_POINTS) / supply
        }

        pub fn reserve_health() -> ReserveHealth {
            let supply = TotalSupply::<T>::get();
            let reserves = TotalReserves::<T>::get();
            let healthy = reserves >= supply;
            ReserveHealth {
                healthy,
                deficit: if healthy { 0 } else { supply - reserves },
                surplus: if healthy { reserves - supply } else { 0 },
            }
        }

        fn ensure_role(who: &T::AccountId, role: Role) -> DispatchResult {
            ensure!(Roles::<T>::get(role, who), Error::<T>::Unauthorized);
            Ok(())
        }

        /// Single interception point for every balance-changing operation.
        ///
        /// `from == None` is a mint credit, `to == None` a burn debit. The
        /// blacklist gate branches three ways: an ordinary transfer rejects
        /// either listed party, a mint rejects only a listed receiver, and a
        /// burn debit is never blocked.
        ///
        /// All checks run before the first storage write.
        fn do_transfer(
            from: Option<&T::AccountId>,
            to: Option<&T::AccountId>,
            amount: u128,
        ) -> DispatchResult {
            match (from, to) {
                (Some(src), Some(dst)) => {
                    ensure!(!Blacklist::<T>::contains_key(src), Error::<T>::SenderBlacklisted);
                    ensure!(!Blacklist::<T>::contains_key(dst), Error::<T>::ReceiverBlacklisted);
                }
                (None, Some(dst)) => {
                    ensure!(!Blacklist::<T>::contains_key(dst), Error::<T>::ReceiverBlacklisted);
                }
                _ => {}
            }

            let same_account = matches!((from, to), (Some(a), Some(b)) if a == b);
            if let Some(src) = from {
                ensure!(Balances::<T>::get(src) >= amount, Error::<T>::InsufficientBalance);
            }
            if let Some(dst) = to {
                if !same_account {
                    ensure!(
                        Balances::<T>::get(dst).checked_add(amount).is_some(),
                        Error::<T>::Overflow
                    );
                }
            }
            if from.is_none() {
                ensure!(
                    TotalSupply::<T>::get().checked_add(amount).is_some(),
                    Error::<T>::Overflow
                );
            }

            if let Some(src) = from {
                Balances::<T>::mutate(src, |bal| *bal = bal.saturating_sub(amount));
            }
            if let Some(dst) = to {
                Balances::<T>::mutate(dst, |bal| *bal = bal.saturating_add(amount));
            }
            match (from, to) {
                (None, Some(_)) => TotalSupply::<T>::mutate(|s| *s = s.saturating_add(amount)),
                (Some(_), None) => TotalSupply::<T>::mutate(|s| *s = s.saturating_sub(amount)),
                _ => {}
            }
            Ok(())
        }

        /// First half of an allowance spend: verifies the spender's allowance
        /// covers `amount` and returns what would remain. `None` means the
        /// unlimited sentinel is in force and nothing gets written back.
        /// No storage is touched until [`Self::commit_allowance`].
        fn prepare_allowance(
            owner: &T::AccountId,
            spender: &T::AccountId,
            amount: u128,
        ) -> Result<Option<u128>, Error<T>> {
            let current = Allowances::<T>::get(owner, spender);
            if current == u128::MAX {
                return Ok(None);
            }
            let remaining =
                current.checked_sub(amount).ok_or(Error::<T>::InsufficientAllowance)?;
            Ok(Some(remaining))
        }

        fn commit_allowance(
            owner: &T::AccountId,
            spender: &T::AccountId,
            remaining: Option<u128>,
        ) {
            match remaining {
                Some(0) => Allowances::<T>::remove(owner, spender),
                Some(remaining) => Allowances::<T>::insert(owner, spender, remaining),
                None => {}
            }
        }

        /// Stamp the attestation clock and publish the refreshed backing
        /// ratio. Every reserve write ends here.
        fn note_reserves_updated() {
            LastReserveUpdate::<T>::put(T::Time::now().as_secs());
            Self::deposit_event(Event::ReservesUpdated {
                total_reserves: TotalReserves::<T>::get(),
                total_supply: TotalSupply::<T>::get(),
                collateralization_ratio: Self::collateralization_ratio(),
            });
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Receives the initial supply plus the `DefaultAdmin` and `Admin`
        /// roles.
        pub master_controller: Option<T::AccountId>,
        /// Initial `Minter` holders (max 10)
        pub minters: Vec<T::AccountId>,
        /// Initial `Blacklister` holders (max 10)
        pub blacklisters: Vec<T::AccountId>,
        /// Initial `Pauser` holders (max 10)
        pub pausers: Vec<T::AccountId>,
        /// Initial `ReserveManager` holders (max 10)
        pub reserve_managers: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            let role_sets: [(&Vec<T::AccountId>, Role); 4] = [
                (&self.minters, Role::Minter),
                (&self.blacklisters, Role::Blacklister),
                (&self.pausers, Role::Pauser),
                (&self.reserve_managers, Role::ReserveManager),
            ];
            for (accounts, role) in role_sets {
                assert!(
                    accounts.len() <= MAX_GENESIS_ROLE_HOLDERS,
                    "at most 10 genesis holders per role"
                );
                for account in accounts {
                    Roles::<T>::insert(role, account, true);
                }
            }

            MaxMintPerTransaction::<T>::put(INITIAL_MAX_MINT_PER_TRANSACTION);
            MaxTotalSupply::<T>::put(INITIAL_MAX_TOTAL_SUPPLY);

            if let Some(ref master) = self.master_controller {
                Roles::<T>::insert(Role::DefaultAdmin, master, true);
                Roles::<T>::insert(Role::Admin, master, true);

                Balances::<T>::insert(master, INITIAL_SUPPLY);
                TotalSupply::<T>::put(INITIAL_SUPPLY);
                // The ledger starts attested as fully backed.
                TotalReserves::<T>::put(INITIAL_SUPPLY);
            }
        }
    }
}
