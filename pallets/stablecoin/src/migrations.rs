//! Storage migrations for pallet-stablecoin.
//!
//! This module provides a framework for safely upgrading storage schemas
//! during runtime upgrades. Each migration is versioned and runs exactly
//! once.
//!
//! # Migration Pattern
//!
//! When you need to migrate storage:
//!
//! 1. **Increment `STORAGE_VERSION`** in `lib.rs` (e.g., from 1 to 2)
//! 2. **Create a new migration module** (e.g., `v2::MigrateToV2`)
//! 3. **Implement the migration logic** using `OnRuntimeUpgrade`
//! 4. **Add tests** to verify the migration works correctly
//! 5. **Wire up in runtime** via `Executive` type's migration tuple
//!
//! # Example: Enriching Blacklist Entries
//!
//! If a later release records when an account was listed, the value type of
//! `Blacklist` changes from the bare reason to a struct:
//!
//! ```ignore
//! pub mod v2 {
//!     use super::*;
//!
//!     // Old storage format, kept around for decoding
//!     mod v1 {
//!         use super::*;
//!         pub type Blacklist<T: Config> =
//!             StorageMap<_, Blake2_128Concat, T::AccountId, BlacklistReason, OptionQuery>;
//!     }
//!
//!     pub struct MigrateToV2<T>(PhantomData<T>);
//!
//!     impl<T: Config> OnRuntimeUpgrade for MigrateToV2<T> {
//!         fn on_runtime_upgrade() -> Weight {
//!             let current = Pallet::<T>::on_chain_storage_version();
//!             if current < 2 {
//!                 let mut count: u64 = 0;
//!                 for (account, reason) in v1::Blacklist::<T>::drain() {
//!                     Blacklist::<T>::insert(
//!                         account,
//!                         BlacklistEntry { reason, listed_at: 0 },
//!                     );
//!                     count += 1;
//!                 }
//!                 StorageVersion::new(2).put::<Pallet<T>>();
//!                 log::info!("Migrated {count} pallet-stablecoin blacklist entries to v2");
//!                 T::DbWeight::get().reads_writes(count + 1, count + 1)
//!             } else {
//!                 T::DbWeight::get().reads(1)
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! # Wiring Migrations in Runtime
//!
//! In the runtime's `lib.rs`, add migrations to the `Executive` type:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_stablecoin::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```
//!
//! # Important Guidelines
//!
//! - **Never skip versions**: Always migrate sequentially (v1 → v2 → v3)
//! - **Idempotent migrations**: Check version before migrating to handle re-runs
//! - **Accurate weights**: Return correct `Weight` for actual DB operations
//! - **Logging**: Use `log::info!` to track migration progress

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet};

/// Migration to version 1 (initial release).
///
/// This is a no-op migration that serves as a template. Since v1 is the
/// initial storage version, there's nothing to migrate from v0. This module
/// exists to document the migration pattern and to establish the framework
/// for subsequent migrations.
pub mod v1 {
    use super::*;

    /// Migration struct for upgrading storage to version 1.
    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        /// Execute the migration.
        ///
        /// Checks the current on-chain storage version and only runs the
        /// migration if needed. The version check ensures idempotency.
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                // Version 0 → 1: Initial release, no storage changes needed.
                // Future migrations would perform actual storage
                // transformations here.
                log::info!(
                    target: "pallet-stablecoin",
                    "Running migration v0 → v1 (no-op for initial release)"
                );

                StorageVersion::new(1).put::<Pallet<T>>();

                // 1 read (version check) + 1 write (version update)
                T::DbWeight::get().reads_writes(1, 1)
            } else {
                log::info!(
                    target: "pallet-stablecoin",
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );

                T::DbWeight::get().reads(1)
            }
        }

        /// Pre-upgrade check (requires `try-runtime` feature).
        ///
        /// Runs before `on_runtime_upgrade` to validate preconditions.
        /// Returns encoded state that is passed to `post_upgrade`.
        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: "pallet-stablecoin",
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );

            Ok(on_chain_version.encode())
        }

        /// Post-upgrade check (requires `try-runtime` feature).
        ///
        /// Runs after `on_runtime_upgrade` to verify the migration succeeded.
        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: u16 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            let post_version = Pallet::<T>::on_chain_storage_version();

            log::info!(
                target: "pallet-stablecoin",
                "Post-upgrade: version changed from {} to {:?}",
                pre_version,
                post_version
            );

            if pre_version < 1 {
                frame_support::ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
            }

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{new_test_ext, Test};
    use frame_support::traits::StorageVersion;

    /// Migration updates the storage version from 0 to 1.
    #[test]
    fn migration_v1_from_v0_works() {
        new_test_ext().execute_with(|| {
            // Simulate a fresh chain with no storage version set (v0)
            StorageVersion::new(0).put::<Pallet<Test>>();
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 0);

            let _weight = v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
        });
    }

    /// Migration is idempotent (safe to run multiple times).
    #[test]
    fn migration_v1_idempotent() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(1).put::<Pallet<Test>>();

            let _weight = v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
        });
    }

    /// Migration does not run on higher versions.
    #[test]
    fn migration_v1_skipped_on_higher_version() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(5).put::<Pallet<Test>>();

            let _weight = v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 5);
        });
    }

    /// Migrated state is preserved: a ledger built before the migration is
    /// untouched by it.
    #[test]
    fn migration_preserves_ledger_state() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            let supply_before = Pallet::<Test>::total_supply();
            let reserves_before = Pallet::<Test>::total_reserves();

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::total_supply(), supply_before);
            assert_eq!(Pallet::<Test>::total_reserves(), reserves_before);
        });
    }
}
