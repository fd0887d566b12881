//! Entity mapping seam
//!
//! The repository maps every fetched entity through an [`EntityMapper`]
//! before returning it. [`IdentityMapper`] is the default and passes entities
//! through unchanged; [`MapFn`] adapts a closure for projection into DTOs.
//! Mapping failures propagate unmodified to the caller.

use crate::error::RepositoryResult;

/// Maps fetched entities to the repository's output type
pub trait EntityMapper<E>: Send + Sync {
    /// The mapped output type
    type Output: Send;

    /// Map a single fetched entity
    fn map(&self, entity: E) -> RepositoryResult<Self::Output>;
}

/// Passes entities through unchanged
///
/// # Example
///
/// ```rust
/// use entity_repository::mapper::{EntityMapper, IdentityMapper};
///
/// let mapped = IdentityMapper.map(42).unwrap();
/// assert_eq!(mapped, 42);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityMapper;

impl<E: Send> EntityMapper<E> for IdentityMapper {
    type Output = E;

    fn map(&self, entity: E) -> RepositoryResult<E> {
        Ok(entity)
    }
}

/// Adapts a closure as an [`EntityMapper`]
///
/// # Example
///
/// ```rust
/// use entity_repository::mapper::{EntityMapper, MapFn};
///
/// let mapper = MapFn::new(|n: i64| Ok(n.to_string()));
/// assert_eq!(mapper.map(7).unwrap(), "7");
/// ```
#[derive(Debug, Clone)]
pub struct MapFn<F>(F);

impl<F> MapFn<F> {
    /// Wrap a mapping closure
    pub fn new(mapper: F) -> Self {
        Self(mapper)
    }
}

impl<E, Out, F> EntityMapper<E> for MapFn<F>
where
    F: Fn(E) -> RepositoryResult<Out> + Send + Sync,
    Out: Send,
{
    type Output = Out;

    fn map(&self, entity: E) -> RepositoryResult<Out> {
        (self.0)(entity)
    }
}
