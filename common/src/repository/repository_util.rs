use crate::errors::AppError;
use crate::repository::owner_index::OwnerIndex;
use async_trait::async_trait;
use dashmap::DashMap;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};

pub type RepoResult<T> = Result<T, AppError>;

/// A stored row with an integer surrogate key.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    /// Key of the owner index, `None` for rows nobody owns.
    fn owner_id(&self) -> Option<i64> {
        None
    }
}

#[async_trait]
pub trait Repository<T: Entity> {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<T>>;
    /// Assigns the next id and stores the row.
    async fn insert(&self, entity: T) -> RepoResult<T>;
    /// Rows of `owner` in insertion order.
    async fn find_by_owner(&self, owner: i64) -> RepoResult<Vec<T>>;
    async fn query_all(&self) -> RepoResult<Vec<T>>;
    async fn find_where<F>(&self, filter: F) -> RepoResult<Vec<T>>
    where
        F: Fn(&T) -> bool + Send + Sync;
    async fn count_where<F>(&self, filter: F) -> RepoResult<usize>
    where
        F: Fn(&T) -> bool + Send + Sync;
    /// Applies `apply` in place; `None` when the row does not exist.
    async fn update<F>(&self, id: i64, apply: F) -> RepoResult<Option<T>>
    where
        F: FnOnce(&mut T) + Send;
    async fn delete(&self, id: i64) -> RepoResult<Option<T>>;
    /// Removes every row of `owner`, returning how many went away.
    async fn delete_by_owner(&self, owner: i64) -> RepoResult<u64>;
}

/// Process-memory repository. Ids start at 1 and are never handed out twice.
#[derive(Debug)]
pub struct MemoryRepository<T: Entity> {
    name: &'static str,
    rows: DashMap<i64, T>,
    owners: OwnerIndex,
    next_id: AtomicI64,
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new(name: &'static str) -> Self {
        Self { name, rows: DashMap::new(), owners: OwnerIndex::new(), next_id: AtomicI64::new(1) }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn sorted_by_id(mut rows: Vec<T>) -> Vec<T> {
        rows.sort_by_key(|row| row.id());
        rows
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<T>> {
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }

    async fn insert(&self, mut entity: T) -> RepoResult<T> {
        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        entity.set_id(id);
        if let Some(owner) = entity.owner_id() {
            self.owners.add(owner, id);
        }
        self.rows.insert(id, entity.clone());
        log::debug!("{}: inserted id={}", self.name, id);
        Ok(entity)
    }

    async fn find_by_owner(&self, owner: i64) -> RepoResult<Vec<T>> {
        let rows = self.owners.ids(owner).into_iter().filter_map(|id| self.rows.get(&id).map(|row| row.value().clone())).collect();
        Ok(rows)
    }

    async fn query_all(&self) -> RepoResult<Vec<T>> {
        let rows = self.rows.iter().map(|row| row.value().clone()).collect();
        Ok(Self::sorted_by_id(rows))
    }

    async fn find_where<F>(&self, filter: F) -> RepoResult<Vec<T>>
    where
        F: Fn(&T) -> bool + Send + Sync,
    {
        let rows = self.rows.iter().filter(|row| filter(row.value())).map(|row| row.value().clone()).collect();
        Ok(Self::sorted_by_id(rows))
    }

    async fn count_where<F>(&self, filter: F) -> RepoResult<usize>
    where
        F: Fn(&T) -> bool + Send + Sync,
    {
        Ok(self.rows.iter().filter(|row| filter(row.value())).count())
    }

    async fn update<F>(&self, id: i64, apply: F) -> RepoResult<Option<T>>
    where
        F: FnOnce(&mut T) + Send,
    {
        let (before, updated) = match self.rows.get_mut(&id) {
            Some(mut row) => {
                let before = row.owner_id();
                apply(row.value_mut());
                // the key is not part of the patchable state
                row.set_id(id);
                (before, row.value().clone())
            }
            None => return Ok(None),
        };
        let after = updated.owner_id();
        if before != after {
            if let Some(owner) = before {
                self.owners.remove(owner, id);
            }
            if let Some(owner) = after {
                self.owners.add(owner, id);
            }
        }
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> RepoResult<Option<T>> {
        let removed = self.rows.remove(&id).map(|(_, row)| row);
        if let Some(owner) = removed.as_ref().and_then(|row| row.owner_id()) {
            self.owners.remove(owner, id);
        }
        Ok(removed)
    }

    async fn delete_by_owner(&self, owner: i64) -> RepoResult<u64> {
        let mut removed = 0;
        for id in self.owners.take(owner) {
            if self.rows.remove(&id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// Sorts newest first by `key`, ties broken by the higher (later) id.
pub fn sort_newest_first<T, K, F>(rows: &mut [T], key: F)
where
    T: Entity,
    K: Ord,
    F: Fn(&T) -> K,
{
    rows.sort_by(|a, b| match key(b).cmp(&key(a)) {
        Ordering::Equal => b.id().cmp(&a.id()),
        other => other,
    });
}

/// Truncates to `limit` when it is present and positive.
pub fn apply_limit<T>(mut rows: Vec<T>, limit: Option<i64>) -> Vec<T> {
    if let Some(limit) = limit.filter(|l| *l > 0) {
        rows.truncate(limit as usize);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: i64,
        owner: i64,
        stamp: i64,
    }

    impl Entity for Note {
        fn id(&self) -> i64 {
            self.id
        }
        fn set_id(&mut self, id: i64) {
            self.id = id;
        }
        fn owner_id(&self) -> Option<i64> {
            Some(self.owner)
        }
    }

    fn note(owner: i64, stamp: i64) -> Note {
        Note { id: 0, owner, stamp }
    }

    #[tokio::test]
    async fn ids_are_strictly_increasing_and_never_reused() {
        let repo = MemoryRepository::new("note");
        let a = repo.insert(note(1, 0)).await.unwrap();
        let b = repo.insert(note(1, 0)).await.unwrap();
        repo.delete(b.id).await.unwrap();
        let c = repo.insert(note(1, 0)).await.unwrap();
        assert_eq!(a.id, 1);
        assert!(b.id > a.id);
        assert!(c.id > b.id);
    }

    #[tokio::test]
    async fn find_by_owner_keeps_insertion_order() {
        let repo = MemoryRepository::new("note");
        let first = repo.insert(note(7, 3)).await.unwrap();
        repo.insert(note(8, 1)).await.unwrap();
        let second = repo.insert(note(7, 1)).await.unwrap();
        let rows = repo.find_by_owner(7).await.unwrap();
        assert_eq!(rows.iter().map(|n| n.id).collect::<Vec<_>>(), vec![first.id, second.id]);
        assert!(repo.find_by_owner(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_merges_and_moves_owner_index() {
        let repo = MemoryRepository::new("note");
        let row = repo.insert(note(1, 0)).await.unwrap();
        let updated = repo
            .update(row.id, |n| {
                n.owner = 2;
                n.id = 500;
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, row.id);
        assert!(repo.find_by_owner(1).await.unwrap().is_empty());
        assert_eq!(repo.find_by_owner(2).await.unwrap().len(), 1);
        assert!(repo.update(404, |n| n.stamp = 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_by_owner_only_touches_that_owner() {
        let repo = MemoryRepository::new("note");
        repo.insert(note(1, 0)).await.unwrap();
        repo.insert(note(1, 0)).await.unwrap();
        repo.insert(note(2, 0)).await.unwrap();
        assert_eq!(repo.delete_by_owner(1).await.unwrap(), 2);
        assert_eq!(repo.len(), 1);
        assert!(repo.delete(12).await.unwrap().is_none());
    }

    #[test]
    fn newest_first_and_limit() {
        let mut rows = vec![
            Note { id: 1, owner: 1, stamp: 10 },
            Note { id: 2, owner: 1, stamp: 30 },
            Note { id: 3, owner: 1, stamp: 20 },
            Note { id: 4, owner: 1, stamp: 30 },
        ];
        sort_newest_first(&mut rows, |n| n.stamp);
        assert_eq!(rows.iter().map(|n| n.id).collect::<Vec<_>>(), vec![4, 2, 3, 1]);
        assert_eq!(apply_limit(rows.clone(), Some(2)).len(), 2);
        assert_eq!(apply_limit(rows.clone(), Some(0)).len(), 4);
        assert_eq!(apply_limit(rows.clone(), Some(-3)).len(), 4);
        assert_eq!(apply_limit(rows, None).len(), 4);
    }
}
