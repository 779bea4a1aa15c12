//! # merlin-store
//!
//! Storage layer implementing the repository traits of `merlin-core` over
//! lock-guarded in-memory tables.
//!
//! ## Overview
//!
//! - `MemoryStore`: shared tables, id sequences and timestamp clocks
//! - One repository type per entity, all views over the same store
//! - Seeding of the admin account and the default command catalog
//!
//! ## Usage
//!
//! ```rust,ignore
//! use merlin_store::MemoryStore;
//! use merlin_core::traits::ServerRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MemoryStore::new();
//!     let servers = store.servers();
//!
//!     let all = servers.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod repositories;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use repositories::{
    MemActivityLogRepository, MemCommandRepository, MemGuardEventRepository,
    MemGuardSettingRepository, MemServerRepository, MemUserRepository,
};
pub use seed::{seed_initial_data, SeedSummary, DEFAULT_COMMANDS};
pub use store::{MemoryStore, Tables};
