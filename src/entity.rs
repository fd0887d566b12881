//! Entity metadata trait
//!
//! Backends stay generic by asking entities for their own metadata: table
//! name, key column, per-field values, and declared relations. The in-memory
//! store evaluates filters and ordering through [`Entity::field`]; the
//! Postgres store renders the same metadata into SQL.
//!
//! # Example
//!
//! ```rust
//! use entity_repository::entity::{Entity, FieldValue, Relation};
//!
//! #[derive(Clone)]
//! struct Post {
//!     id: i64,
//!     title: String,
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
//!         &["id", "title"]
//!     }
//!
//!     fn field(&self, name: &str) -> Option<FieldValue> {
//!         match name {
//!             "id" => Some(self.id.into()),
//!             "title" => Some(self.title.clone().into()),
//!             _ => None,
//!         }
//!     }
//!
//!     fn relations() -> &'static [Relation] {
//!         &[Relation {
//!             name: "author",
//!             table: "authors",
//!             local_key: "author_id",
//!             foreign_key: "id",
//!         }]
//!     }
//! }
//! ```

use std::fmt;
use std::hash::Hash;

/// Field values exposed by entities; shares the filter value lattice
pub type FieldValue = crate::filter::FilterValue;

/// A declared relation to another table, used to resolve include paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    /// Relation name as used in include paths
    pub name: &'static str,
    /// Target table
    pub table: &'static str,
    /// Column on the owning table holding the reference
    pub local_key: &'static str,
    /// Column on the target table being referenced
    pub foreign_key: &'static str,
}

/// Metadata contract for entities managed by a repository
///
/// An entity is a caller-defined record with an identity key; its lifecycle
/// is owned by the store, not the repository.
pub trait Entity: Send + Sync + Sized + 'static {
    /// The identity key type
    type Key: Clone + Eq + Hash + fmt::Display + Send + Sync + 'static;

    /// Table (or collection) name backing this entity
    fn table() -> &'static str;

    /// Column holding the identity key
    fn key_column() -> &'static str {
        "id"
    }

    /// This entity's identity key
    fn key(&self) -> Self::Key;

    /// All column names, including the key column
    fn columns() -> &'static [&'static str];

    /// The value of a named field, or `None` if the entity has no such field
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Relations this entity declares for include resolution
    fn relations() -> &'static [Relation] {
        &[]
    }
}
