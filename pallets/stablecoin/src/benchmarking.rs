//! Benchmarking setup for pallet-stablecoin

use super::*;

#[allow(unused)]
use crate::Pallet as Stablecoin;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn setup_role<T: Config>(who: &T::AccountId, role: Role) {
    Roles::<T>::insert(role, who, true);
}

fn setup_caps<T: Config>() {
    MaxMintPerTransaction::<T>::put(10_000_000 * UNIT);
    MaxTotalSupply::<T>::put(1_000_000_000 * UNIT);
}

fn max_reason() -> ReasonText {
    sp_std::vec![0x41; 128].try_into().expect("fits the bound")
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let minter: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        setup_role::<T>(&minter, Role::Minter);
        setup_caps::<T>();
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        Balances::<T>::insert(&caller, 10_000_000u128);
        TotalSupply::<T>::put(10_000_000u128);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount);

        assert_eq!(Balances::<T>::get(&caller), 9_000_000);
    }

    #[benchmark]
    fn burn_from() {
        let minter: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        setup_role::<T>(&minter, Role::Minter);
        Balances::<T>::insert(&holder, 10_000_000u128);
        TotalSupply::<T>::put(10_000_000u128);
        Allowances::<T>::insert(&holder, &minter, 10_000_000u128);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), holder.clone(), amount);

        assert_eq!(Balances::<T>::get(&holder), 9_000_000);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Balances::<T>::insert(&caller, 10_000_000u128);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), amount);

        assert_eq!(Allowances::<T>::get(&caller, &spender), amount);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        Balances::<T>::insert(&owner, 10_000_000u128);
        Allowances::<T>::insert(&owner, &spender, 10_000_000u128);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(spender), owner, recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn blacklist() {
        let caller: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        setup_role::<T>(&caller, Role::Blacklister);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone(), max_reason());

        assert!(Blacklist::<T>::contains_key(&target));
    }

    #[benchmark]
    fn un_blacklist() {
        let caller: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        setup_role::<T>(&caller, Role::Blacklister);
        Blacklist::<T>::insert(&target, max_reason());

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone());

        assert!(!Blacklist::<T>::contains_key(&target));
    }

    #[benchmark]
    fn pause() {
        let caller: T::AccountId = whitelisted_caller();
        setup_role::<T>(&caller, Role::Pauser);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn unpause() {
        let caller: T::AccountId = whitelisted_caller();
        setup_role::<T>(&caller, Role::Pauser);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(Paused::<T>::get(), false);
    }

    #[benchmark]
    fn set_max_mint_per_transaction() {
        let caller: T::AccountId = whitelisted_caller();
        setup_role::<T>(&caller, Role::Admin);
        setup_caps::<T>();
        let new_limit: u128 = 5_000_000 * UNIT;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_limit);

        assert_eq!(MaxMintPerTransaction::<T>::get(), new_limit);
    }

    #[benchmark]
    fn set_max_total_supply() {
        let caller: T::AccountId = whitelisted_caller();
        setup_role::<T>(&caller, Role::Admin);
        setup_caps::<T>();
        let new_limit: u128 = 2_000_000_000 * UNIT;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_limit);

        assert_eq!(MaxTotalSupply::<T>::get(), new_limit);
    }

    #[benchmark]
    fn update_reserves() {
        let caller: T::AccountId = whitelisted_caller();
        setup_role::<T>(&caller, Role::ReserveManager);
        let amount: u128 = 15_000_000 * UNIT;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), amount);

        assert_eq!(TotalReserves::<T>::get(), amount);
    }

    #[benchmark]
    fn add_reserves() {
        let caller: T::AccountId = whitelisted_caller();
        setup_role::<T>(&caller, Role::ReserveManager);
        let reserve_type: ReserveTypeLabel =
            b"treasury-bills".to_vec().try_into().expect("fits the bound");
        let amount: u128 = 1_000_000 * UNIT;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), amount, reserve_type);

        assert!(TotalReserves::<T>::get() >= amount);
    }

    #[benchmark]
    fn remove_reserves() {
        let caller: T::AccountId = whitelisted_caller();
        setup_role::<T>(&caller, Role::ReserveManager);
        TotalReserves::<T>::put(10_000_000 * UNIT);
        let amount: u128 = 1_000_000 * UNIT;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), amount, max_reason());

        assert_eq!(TotalReserves::<T>::get(), 9_000_000 * UNIT);
    }

    #[benchmark]
    fn grant_role() {
        let caller: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        setup_role::<T>(&caller, Role::DefaultAdmin);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::Minter, target.clone());

        assert_eq!(Roles::<T>::get(Role::Minter, &target), true);
    }

    #[benchmark]
    fn revoke_role() {
        let caller: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        setup_role::<T>(&caller, Role::DefaultAdmin);
        setup_role::<T>(&target, Role::Minter);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::Minter, target.clone());

        assert_eq!(Roles::<T>::get(Role::Minter, &target), false);
    }

    impl_benchmark_test_suite!(Stablecoin, crate::mock::new_test_ext(), crate::mock::Test);
}
