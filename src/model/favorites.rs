use serde::{Deserialize, Serialize};

use super::contact::Contact;
use super::ids::Id;

/// Ordered list of favorited contact ids. Insertion order is kept and an id
/// appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Id<Contact>>", into = "Vec<Id<Contact>>")]
pub struct FavoriteSet {
    ids: Vec<Id<Contact>>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: Id<Contact>) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[Id<Contact>] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the set with `id` appended, or None if it is already present.
    pub fn with(&self, id: Id<Contact>) -> Option<Self> {
        if self.contains(id) {
            return None;
        }
        let mut ids = self.ids.clone();
        ids.push(id);
        Some(Self { ids })
    }

    /// Returns the set with `id` filtered out. Absent ids leave it unchanged.
    pub fn without(&self, id: Id<Contact>) -> Self {
        Self {
            ids: self.ids.iter().copied().filter(|&x| x != id).collect(),
        }
    }
}

impl From<Vec<Id<Contact>>> for FavoriteSet {
    fn from(raw: Vec<Id<Contact>>) -> Self {
        let mut ids = Vec::with_capacity(raw.len());
        for id in raw {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids }
    }
}

impl From<FavoriteSet> for Vec<Id<Contact>> {
    fn from(set: FavoriteSet) -> Self {
        set.ids
    }
}
