use crate as pallet_stablecoin;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Stablecoin: pallet_stablecoin,
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

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<5>;
    type WeightInfo = ();
}

impl pallet_stablecoin::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Time = Timestamp;
}

// Well-known accounts used across the tests.
pub const MASTER: u64 = 1;
pub const MINTER: u64 = 2;
pub const BLACKLISTER: u64 = 3;
pub const PAUSER: u64 = 4;
pub const RESERVE_MANAGER: u64 = 5;
pub const USER: u64 = 10;
pub const USER_2: u64 = 11;

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_stablecoin::GenesisConfig::<Test> {
        token_name: b"Reserve Dollar".to_vec(),
        token_symbol: b"RSD".to_vec(),
        decimals: 6,
        master_controller: Some(MASTER),
        minters: vec![MINTER],
        blacklisters: vec![BLACKLISTER],
        pausers: vec![PAUSER],
        reserve_managers: vec![RESERVE_MANAGER],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    t.into()
}
