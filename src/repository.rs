//! The generic entity repository
//!
//! [`EntityRepository`] wraps a store handle and a mapper handle and exposes
//! four operations: [`add`], [`get`], [`query`], and [`paged_query`]. It owns
//! no query logic of its own; it translates a [`QuerySpec`] into a
//! [`QueryPlan`] through a handful of conditional clause attachments and
//! delegates execution to the store.
//!
//! [`add`]: EntityRepository::add
//! [`get`]: EntityRepository::get
//! [`query`]: EntityRepository::query
//! [`paged_query`]: EntityRepository::paged_query
//!
//! # Example
//!
//! ```rust,ignore
//! use entity_repository::prelude::*;
//!
//! let store: MemoryStore<Post> = MemoryStore::new();
//! let repo = EntityRepository::new(store);
//!
//! repo.add(post);
//! repo.save_changes().await?;
//!
//! let spec = QuerySpec::new()
//!     .filter(FilterCondition::eq("status", "published"))
//!     .order_by("created_at", OrderDirection::Descending)
//!     .skip(0)
//!     .take(20)
//!     .count();
//! let page = repo.paged_query(&spec).await?;
//! ```

use std::marker::PhantomData;

use crate::entity::Entity;
use crate::error::RepositoryResult;
use crate::mapper::{EntityMapper, IdentityMapper};
use crate::plan::QueryPlan;
use crate::spec::{PagedResult, QuerySpec};
use crate::store::EntityStore;

/// Generic repository over a persistence store and an entity mapper
pub struct EntityRepository<E, S, M = IdentityMapper> {
    store: S,
    mapper: M,
    _entity: PhantomData<fn() -> E>,
}

impl<E, S> EntityRepository<E, S, IdentityMapper>
where
    E: Entity,
    S: EntityStore<E>,
{
    /// Create a repository that returns entities unmapped
    pub fn new(store: S) -> Self {
        Self::with_mapper(store, IdentityMapper)
    }
}

impl<E, S, M> EntityRepository<E, S, M>
where
    E: Entity,
    S: EntityStore<E>,
    M: EntityMapper<E>,
{
    /// Create a repository with an explicit mapper
    pub fn with_mapper(store: S, mapper: M) -> Self {
        Self {
            store,
            mapper,
            _entity: PhantomData,
        }
    }

    /// The wrapped store handle
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register an existing-state entity with the store for a later save
    ///
    /// No validation and no duplicate-key check; the store's identity
    /// handling decides what attachment means.
    pub fn add(&self, item: E) {
        self.store.attach(item);
    }

    /// Look up an entity by its primary key
    ///
    /// Returns `Ok(None)` when the key does not exist; absence is never an
    /// error.
    pub async fn get(&self, key: &E::Key) -> RepositoryResult<Option<M::Output>> {
        match self.store.find_by_key(key).await? {
            Some(entity) => Ok(Some(self.mapper.map(entity)?)),
            None => Ok(None),
        }
    }

    /// Execute a specification query, returning only the items
    pub async fn query(&self, spec: &QuerySpec) -> RepositoryResult<Vec<M::Output>> {
        Ok(self.paged_query(spec).await?.into_items())
    }

    /// Execute a specification query, returning items plus total count
    ///
    /// Clauses attach in fixed order: typed includes, string includes,
    /// filters, count, ordering, pagination, tracking-disable. The count is
    /// taken before ordering and pagination attach, so `total_count` always
    /// reflects the unpaginated filtered set.
    pub async fn paged_query(&self, spec: &QuerySpec) -> RepositoryResult<PagedResult<M::Output>> {
        let mut plan = QueryPlan::new();
        for include in &spec.includes {
            plan = plan.include_path(include.path());
        }
        for path in &spec.string_includes {
            plan = plan.include_path(path.as_str());
        }
        for condition in &spec.filters {
            plan = plan.filter(condition.clone());
        }

        let total_count = if spec.perform_count {
            self.store.count(&plan).await?
        } else {
            0
        };

        if let Some((field, direction)) = &spec.order_by {
            plan = plan.order_by(field.as_str(), *direction);
        }
        if let Some(page) = spec.pagination() {
            plan = plan.page(page);
        }
        if spec.disable_tracking {
            plan = plan.without_tracking();
        }

        tracing::debug!(
            table = E::table(),
            filters = plan.filters().len(),
            includes = plan.includes().len(),
            counted = spec.perform_count,
            "executing paged query"
        );

        let rows = self.store.fetch(&plan).await?;
        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(self.mapper.map(row)?);
        }
        Ok(PagedResult::new(items, total_count))
    }

    /// Flush attached entities through the store
    pub async fn save_changes(&self) -> RepositoryResult<u64> {
        self.store.save_changes().await
    }
}
