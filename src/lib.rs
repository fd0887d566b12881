//! # entity-repository
//!
//! Specification-driven generic entity repository with pluggable persistence
//! backends.
//!
//! ## Features
//!
//! - **Generic repository**: [`EntityRepository`] with add, get, query, and
//!   paged query operations over any entity type
//! - **Specifications**: [`QuerySpec`] as an explicit value object for
//!   filters, includes, ordering, pagination, count, and tracking intent
//! - **Pluggable stores**: [`MemoryStore`] out of the box, `PgStore` over
//!   sqlx/PostgreSQL behind the `postgres` feature
//! - **Mapping seam**: [`EntityMapper`] with an identity default, so results
//!   can be projected into DTOs without touching query code
//! - **Structured errors**: [`RepositoryError`] with operation and kind
//!   context; "not found" is absence, never an error
//!
//! ## Example
//!
//! ```rust
//! use entity_repository::prelude::*;
//! use entity_repository::entity::FieldValue;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Post {
//!     id: i64,
//!     title: String,
//!     views: i64,
//! }
//!
//! impl Entity for Post {
//!     type Key = i64;
//!
//!     fn table() -> &'static str {
//!         "posts"
//!     }
//!
//!     fn key(&self) -> i64 {
//!         self.id
//!     }
//!
//!     fn columns() -> &'static [&'static str] {
//!         &["id", "title", "views"]
//!     }
//!
//!     fn field(&self, name: &str) -> Option<FieldValue> {
//!         match name {
//!             "id" => Some(self.id.into()),
//!             "title" => Some(self.title.clone().into()),
//!             "views" => Some(self.views.into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), entity_repository::error::RepositoryError> {
//! let store: MemoryStore<Post> = MemoryStore::new();
//! let repo = EntityRepository::new(store);
//!
//! repo.add(Post { id: 1, title: "hello".into(), views: 3 });
//! repo.save_changes().await?;
//!
//! let spec = QuerySpec::new()
//!     .filter(FilterCondition::gt("views", 0_i64))
//!     .order_by("views", OrderDirection::Descending)
//!     .skip(0)
//!     .take(10)
//!     .count();
//! let page = repo.paged_query(&spec).await?;
//! assert_eq!(page.total_count, 1);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "postgres")]
pub mod config;
pub mod entity;
pub mod error;
pub mod filter;
pub mod mapper;
pub mod plan;
pub mod repository;
pub mod spec;
pub mod store;

pub use entity::{Entity, Relation};
pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation, RepositoryResult};
pub use filter::{FilterCondition, FilterOperator, FilterValue};
pub use mapper::{EntityMapper, IdentityMapper, MapFn};
pub use plan::QueryPlan;
pub use repository::EntityRepository;
pub use spec::{Include, OrderDirection, PagedResult, Pagination, QuerySpec};
pub use store::{EntityStore, MemoryStore};

#[cfg(feature = "postgres")]
pub use config::StoreConfig;
#[cfg(feature = "postgres")]
pub use store::PgStore;

/// Convenient re-exports for the common path
pub mod prelude {
    pub use crate::entity::{Entity, Relation};
    pub use crate::error::{RepositoryError, RepositoryResult};
    pub use crate::filter::{FilterCondition, FilterOperator, FilterValue};
    pub use crate::mapper::{EntityMapper, IdentityMapper, MapFn};
    pub use crate::repository::EntityRepository;
    pub use crate::spec::{Include, OrderDirection, PagedResult, Pagination, QuerySpec};
    pub use crate::store::{EntityStore, MemoryStore};

    #[cfg(feature = "postgres")]
    pub use crate::config::StoreConfig;
    #[cfg(feature = "postgres")]
    pub use crate::store::PgStore;
}
