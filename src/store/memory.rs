//! In-memory entity store
//!
//! Backed by DashMap so attach and fetch can run from concurrent tasks
//! without external locking. Filters and ordering are evaluated against
//! [`Entity::field`] values; include paths are accepted and ignored, since
//! plain structs carry no navigation properties to eagerly load.

use std::cmp::Ordering;

use dashmap::DashMap;

use crate::entity::Entity;
use crate::error::RepositoryResult;
use crate::plan::QueryPlan;
use crate::spec::OrderDirection;
use crate::store::EntityStore;

/// DashMap-backed store with saved rows, pending attachments, and an
/// identity map of tracked fetches
pub struct MemoryStore<E: Entity> {
    rows: DashMap<E::Key, E>,
    pending: DashMap<E::Key, E>,
    tracked: DashMap<E::Key, E>,
}

impl<E: Entity + Clone> MemoryStore<E> {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            pending: DashMap::new(),
            tracked: DashMap::new(),
        }
    }

    /// Insert entities directly as saved rows, bypassing attach/save
    pub fn seed(&self, entities: impl IntoIterator<Item = E>) {
        for entity in entities {
            self.rows.insert(entity.key(), entity);
        }
    }

    /// Number of saved rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store holds no saved rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of entities currently registered in the identity map
    pub fn tracked_len(&self) -> usize {
        self.tracked.len()
    }

    /// Whether a key is registered in the identity map
    pub fn is_tracked(&self, key: &E::Key) -> bool {
        self.tracked.contains_key(key)
    }

    fn matching(&self, plan: &QueryPlan) -> Vec<E> {
        self.rows
            .iter()
            .filter(|row| {
                plan.filters()
                    .iter()
                    .all(|condition| condition.matches(row.value().field(&condition.field).as_ref()))
            })
            .map(|row| row.value().clone())
            .collect()
    }
}

impl<E: Entity + Clone> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity + Clone> EntityStore<E> for MemoryStore<E> {
    async fn find_by_key(&self, key: &E::Key) -> RepositoryResult<Option<E>> {
        let found = self.rows.get(key).map(|row| row.value().clone());
        if let Some(ref entity) = found {
            self.tracked.insert(entity.key(), entity.clone());
        }
        Ok(found)
    }

    async fn fetch(&self, plan: &QueryPlan) -> RepositoryResult<Vec<E>> {
        let mut matched = self.matching(plan);

        if let Some((field, direction)) = plan.order() {
            matched.sort_by(|a, b| {
                let ordering = match (a.field(field), b.field(field)) {
                    (Some(left), Some(right)) => {
                        left.compare(&right).unwrap_or(Ordering::Equal)
                    }
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                };
                match direction {
                    OrderDirection::Ascending => ordering,
                    OrderDirection::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(page) = plan.pagination() {
            matched = matched
                .into_iter()
                .skip(page.offset as usize)
                .take(page.limit as usize)
                .collect();
        }

        if plan.tracks() {
            for entity in &matched {
                self.tracked.insert(entity.key(), entity.clone());
            }
        }

        Ok(matched)
    }

    async fn count(&self, plan: &QueryPlan) -> RepositoryResult<u64> {
        Ok(self.matching(plan).len() as u64)
    }

    fn attach(&self, entity: E) {
        self.pending.insert(entity.key(), entity);
    }

    async fn save_changes(&self) -> RepositoryResult<u64> {
        let keys: Vec<E::Key> = self.pending.iter().map(|row| row.key().clone()).collect();
        let mut saved = 0;
        for key in keys {
            if let Some((key, entity)) = self.pending.remove(&key) {
                self.rows.insert(key, entity);
                saved += 1;
            }
        }
        Ok(saved)
    }
}
