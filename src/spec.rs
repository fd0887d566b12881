//! Query specifications
//!
//! A [`QuerySpec`] is a value object encoding query intent: optional filter
//! conditions, relation includes, ordering, pagination bounds, a count flag,
//! and a tracking flag. No field has a default filtering effect when left
//! unset, pagination applies only when both skip and take are set, and
//! ordering applies only when an ordering key is set.
//!
//! # Example
//!
//! ```rust
//! use entity_repository::spec::{Include, OrderDirection, QuerySpec};
//! use entity_repository::filter::FilterCondition;
//!
//! let spec = QuerySpec::new()
//!     .filter(FilterCondition::eq("status", "published"))
//!     .include(Include::relation("author"))
//!     .order_by("created_at", OrderDirection::Descending)
//!     .skip(40)
//!     .take(20)
//!     .count();
//! ```

use std::fmt;

use serde::Serialize;

use crate::filter::FilterCondition;

/// Direction for ordering results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Sort in ascending order (A-Z, 0-9)
    #[default]
    Ascending,
    /// Sort in descending order (Z-A, 9-0)
    Descending,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// Pagination parameters in their backend-facing form
///
/// # Example
///
/// ```rust
/// use entity_repository::spec::Pagination;
///
/// let page2 = Pagination::new(20, 20);
/// assert_eq!(page2.offset, 20);
/// assert_eq!(page2.limit, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Number of results to skip
    pub offset: u64,
    /// Maximum number of results to return
    pub limit: u64,
}

impl Pagination {
    /// Create new pagination parameters
    #[must_use]
    pub const fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    /// Create pagination for the first page with the given limit
    #[must_use]
    pub const fn first_page(limit: u64) -> Self {
        Self { offset: 0, limit }
    }

    /// Create pagination for a specific page number (1-indexed)
    ///
    /// # Example
    ///
    /// ```rust
    /// use entity_repository::spec::Pagination;
    ///
    /// let page3 = Pagination::page(3, 20);
    /// assert_eq!(page3.offset, 40);
    /// ```
    #[must_use]
    pub const fn page(page_number: u64, page_size: u64) -> Self {
        let offset = page_number.saturating_sub(1) * page_size;
        Self {
            offset,
            limit: page_size,
        }
    }
}

/// A typed relation include path
///
/// Built from declared relation names; nested paths chain with [`then`].
///
/// [`then`]: Include::then
///
/// # Example
///
/// ```rust
/// use entity_repository::spec::Include;
///
/// let author = Include::relation("author");
/// let profile = Include::relation("author").then("profile");
/// assert_eq!(profile.path(), "author.profile");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include(String);

impl Include {
    /// Create an include for a declared relation name
    pub fn relation(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Append a nested relation segment
    #[must_use]
    pub fn then(mut self, name: &str) -> Self {
        self.0.push('.');
        self.0.push_str(name);
        self
    }

    /// The dotted relation path
    pub fn path(&self) -> &str {
        &self.0
    }
}

/// A value object describing query intent
///
/// See the [module docs](self) for the invariants each field carries.
#[derive(Debug, Clone, Default)]
pub struct QuerySpec {
    /// Filter conditions combined with AND (the where clause)
    pub filters: Vec<FilterCondition>,
    /// Typed relation includes to eagerly resolve
    pub includes: Vec<Include>,
    /// Raw string relation paths to eagerly resolve
    pub string_includes: Vec<String>,
    /// Ordering key and direction
    pub order_by: Option<(String, OrderDirection)>,
    /// Number of items to skip (applies only together with `take`)
    pub skip: Option<u64>,
    /// Maximum number of items to return (applies only together with `skip`)
    pub take: Option<u64>,
    /// Whether to count the unpaginated filtered set
    pub perform_count: bool,
    /// Whether fetched entities bypass the store's identity tracking
    pub disable_tracking: bool,
}

impl QuerySpec {
    /// Create an empty specification (matches everything, tracks, no count)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter condition
    #[must_use]
    pub fn filter(mut self, condition: FilterCondition) -> Self {
        self.filters.push(condition);
        self
    }

    /// Add a typed relation include
    #[must_use]
    pub fn include(mut self, include: Include) -> Self {
        self.includes.push(include);
        self
    }

    /// Add a raw string relation path include
    #[must_use]
    pub fn include_path(mut self, path: impl Into<String>) -> Self {
        self.string_includes.push(path.into());
        self
    }

    /// Set the ordering key and direction
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.order_by = Some((field.into(), direction));
        self
    }

    /// Set the number of items to skip
    #[must_use]
    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Set the maximum number of items to return
    #[must_use]
    pub fn take(mut self, take: u64) -> Self {
        self.take = Some(take);
        self
    }

    /// Request a total count of the unpaginated filtered set
    #[must_use]
    pub fn count(mut self) -> Self {
        self.perform_count = true;
        self
    }

    /// Fetch without registering results in the store's identity tracking
    #[must_use]
    pub fn without_tracking(mut self) -> Self {
        self.disable_tracking = true;
        self
    }

    /// The pagination bounds, present only when both skip and take are set
    pub fn pagination(&self) -> Option<Pagination> {
        match (self.skip, self.take) {
            (Some(skip), Some(take)) => Some(Pagination::new(skip, take)),
            _ => None,
        }
    }
}

/// A result sequence paired with the total count of the unpaginated set
///
/// `total_count` is 0 when the specification did not request a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedResult<T> {
    /// The fetched, mapped items
    pub items: Vec<T>,
    /// Cardinality of the filtered set before pagination (0 if not counted)
    pub total_count: u64,
}

impl<T> PagedResult<T> {
    /// Create a paged result
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    /// Consume the result and return only the items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
