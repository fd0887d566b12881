//! Compiled query plans
//!
//! A [`QueryPlan`] is the backend-facing form of a [`QuerySpec`]: clause
//! attachments accumulated in the order the repository applied them. The
//! repository takes its count mid-composition, so a plan handed to
//! [`EntityStore::count`] never carries ordering or pagination.
//!
//! [`QuerySpec`]: crate::spec::QuerySpec
//! [`EntityStore::count`]: crate::store::EntityStore::count

use crate::filter::FilterCondition;
use crate::spec::{OrderDirection, Pagination};

/// The compiled, backend-facing form of a query specification
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    includes: Vec<String>,
    filters: Vec<FilterCondition>,
    order: Option<(String, OrderDirection)>,
    page: Option<Pagination>,
    track: bool,
}

impl Default for QueryPlan {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            filters: Vec::new(),
            order: None,
            page: None,
            track: true,
        }
    }
}

impl QueryPlan {
    /// Create an empty plan (no clauses, tracking enabled)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a relation include path
    #[must_use]
    pub fn include_path(mut self, path: impl Into<String>) -> Self {
        self.includes.push(path.into());
        self
    }

    /// Attach a filter condition
    #[must_use]
    pub fn filter(mut self, condition: FilterCondition) -> Self {
        self.filters.push(condition);
        self
    }

    /// Attach an ordering clause
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.order = Some((field.into(), direction));
        self
    }

    /// Attach pagination bounds
    #[must_use]
    pub fn page(mut self, page: Pagination) -> Self {
        self.page = Some(page);
        self
    }

    /// Disable identity tracking for fetched entities
    #[must_use]
    pub fn without_tracking(mut self) -> Self {
        self.track = false;
        self
    }

    /// Attached include paths, in attachment order
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// Attached filter conditions
    pub fn filters(&self) -> &[FilterCondition] {
        &self.filters
    }

    /// Attached ordering clause, if any
    pub fn order(&self) -> Option<(&str, OrderDirection)> {
        self.order.as_ref().map(|(field, dir)| (field.as_str(), *dir))
    }

    /// Attached pagination bounds, if any
    pub fn pagination(&self) -> Option<Pagination> {
        self.page
    }

    /// Whether fetched entities should enter the store's identity map
    pub fn tracks(&self) -> bool {
        self.track
    }
}
