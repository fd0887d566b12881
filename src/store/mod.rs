//! Persistence store implementations
//!
//! [`EntityStore`] is the persistence-context capability the repository is
//! bound to: typed key lookup, plan-driven fetch and count, attachment, and
//! save. The trait uses RPITIT (Return Position Impl Trait In Traits),
//! available since Rust 1.75, for ergonomic async methods without
//! `async_trait`.
//!
//! Two implementations ship with the crate:
//!
//! - [`MemoryStore`]: DashMap-backed, always available, used heavily in tests
//! - `PgStore`: sqlx/PostgreSQL-backed, behind the `postgres` feature

use std::future::Future;

use crate::entity::Entity;
use crate::error::RepositoryResult;
use crate::plan::QueryPlan;

mod memory;
#[cfg(feature = "postgres")]
mod postgres;

pub use memory::MemoryStore;
#[cfg(feature = "postgres")]
pub use postgres::PgStore;

/// The persistence-context capability for a single entity type
///
/// Stores own entity lifecycle, identity tracking, and their concurrency
/// discipline. The repository composes a [`QueryPlan`] and delegates; a plan
/// handed to [`count`] is taken mid-composition and so never carries ordering
/// or pagination.
///
/// [`count`]: EntityStore::count
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Look up a single entity by its key
    ///
    /// Returns `Ok(None)` when absent; absence is never an error.
    fn find_by_key(
        &self,
        key: &E::Key,
    ) -> impl Future<Output = RepositoryResult<Option<E>>> + Send;

    /// Fetch all entities matching the plan
    fn fetch(&self, plan: &QueryPlan) -> impl Future<Output = RepositoryResult<Vec<E>>> + Send;

    /// Count entities matching the plan's filters
    fn count(&self, plan: &QueryPlan) -> impl Future<Output = RepositoryResult<u64>> + Send;

    /// Register an existing-state entity for a later save
    ///
    /// No validation and no duplicate-key check; identity handling is the
    /// store's own.
    fn attach(&self, entity: E);

    /// Flush attached entities to the backend, returning how many were saved
    fn save_changes(&self) -> impl Future<Output = RepositoryResult<u64>> + Send;
}
