use dashmap::DashMap;
use std::collections::BTreeSet;

/// Secondary index: owner id -> ids of the rows it owns, ascending.
#[derive(Debug, Default)]
pub struct OwnerIndex {
    entries: DashMap<i64, BTreeSet<i64>>,
}

impl OwnerIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, owner: i64, id: i64) {
        self.entries.entry(owner).or_default().insert(id);
    }

    pub fn remove(&self, owner: i64, id: i64) {
        let emptied = match self.entries.get_mut(&owner) {
            Some(mut ids) => {
                ids.remove(&id);
                ids.is_empty()
            }
            None => false,
        };
        if emptied {
            self.entries.remove_if(&owner, |_, ids| ids.is_empty());
        }
    }

    /// Ids owned by `owner` in ascending (insertion) order.
    pub fn ids(&self, owner: i64) -> Vec<i64> {
        self.entries.get(&owner).map(|ids| ids.iter().copied().collect()).unwrap_or_default()
    }

    /// Drops the owner bucket and returns what it held.
    pub fn take(&self, owner: i64) -> Vec<i64> {
        self.entries.remove(&owner).map(|(_, ids)| ids.into_iter().collect()).unwrap_or_default()
    }
}
