use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::DirectoryService;
use crate::db::{keys, KeyValueStore};
use crate::error::{AppError, AppResult};
use crate::model::{Contact, FavoriteSet, Id};
use crate::queries::favorites_queries;

/// The persisted set of favorited contact ids.
///
/// Mutations read the in-memory set, compute the next one, overwrite the
/// `favorites` key, and only then commit to memory. A failed write leaves
/// both the stored and in-memory sets as they were. Mutating methods take
/// `&mut self`, so a single store never has two mutations in flight.
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    favorites: FavoriteSet,
    error: Option<String>,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            favorites: FavoriteSet::new(),
            error: None,
        }
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn contains(&self, id: Id<Contact>) -> bool {
        self.favorites.contains(id)
    }

    /// Last failure message, if the most recent operation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Reads the persisted set. Missing or unreadable data yields an empty
    /// set; read and parse failures are recorded in `error()`.
    pub fn load(&mut self) -> &FavoriteSet {
        self.favorites = match self.read() {
            Ok(set) => {
                self.error = None;
                set
            }
            Err(e) => {
                warn!(error = %e, "could not load favorites; starting empty");
                self.error = Some(e.to_string());
                FavoriteSet::new()
            }
        };
        debug!(count = self.favorites.len(), "favorites loaded");
        &self.favorites
    }

    pub fn add(&mut self, id: Id<Contact>) -> AppResult<&FavoriteSet> {
        let next = match self.favorites.with(id) {
            Some(next) => next,
            None => return self.fail(AppError::AlreadyFavorited { id: id.value }),
        };
        self.commit(next)?;
        info!(%id, "added to favorites");
        Ok(&self.favorites)
    }

    /// Removing an id that is not present still succeeds and rewrites the
    /// unchanged set.
    pub fn remove(&mut self, id: Id<Contact>) -> AppResult<&FavoriteSet> {
        let next = self.favorites.without(id);
        self.commit(next)?;
        info!(%id, "removed from favorites");
        Ok(&self.favorites)
    }

    /// Removes `id` when favorited, adds it otherwise. Returns whether it is
    /// now a favorite.
    pub fn toggle(&mut self, id: Id<Contact>) -> AppResult<bool> {
        if self.contains(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    /// Lists the first directory page and keeps the favorited entries, in
    /// directory order. Independent of whatever the browser is showing.
    pub fn resolve(&self, directory: &dyn DirectoryService, limit: u64) -> AppResult<Vec<Contact>> {
        let page = directory.list(0, limit)?;
        let found: Vec<Contact> = favorites_queries::favorite_contacts(&page.items, &self.favorites)
            .into_iter()
            .cloned()
            .collect();
        debug!(found = found.len(), favorites = self.favorites.len(), "favorites resolved");
        Ok(found)
    }

    fn read(&self) -> AppResult<FavoriteSet> {
        match self.store.get(keys::FAVORITES)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::Storage(format!("favorites: {}", e))),
            None => Ok(FavoriteSet::new()),
        }
    }

    fn commit(&mut self, next: FavoriteSet) -> AppResult<()> {
        let persisted = serde_json::to_string(&next)
            .map_err(|e| AppError::Storage(format!("favorites: {}", e)))
            .and_then(|raw| self.store.set(keys::FAVORITES, &raw));
        if let Err(e) = persisted {
            return self.fail(e);
        }
        self.favorites = next;
        self.error = None;
        Ok(())
    }

    fn fail<T>(&mut self, e: AppError) -> AppResult<T> {
        self.error = Some(e.to_string());
        Err(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    /// Store whose writes always fail.
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> AppResult<Option<String>> {
            self.0.get(key)
        }
        fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::Storage("disk full".into()))
        }
        fn remove(&self, key: &str) -> AppResult<()> {
            self.0.remove(key)
        }
    }

    #[test]
    fn failed_write_keeps_previous_state() {
        let inner = MemoryStore::new();
        inner.set(keys::FAVORITES, "[1]").unwrap();
        let mut favorites = FavoritesStore::new(Arc::new(ReadOnlyStore(inner)));
        favorites.load();

        let err = favorites.add(Id::new(2)).unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(favorites.favorites().ids(), &[Id::new(1)]);
        assert_eq!(favorites.error(), Some("Storage error: disk full"));
    }

    #[test]
    fn corrupt_data_loads_empty_and_reports() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::FAVORITES, "{not json").unwrap();
        let mut favorites = FavoritesStore::new(store);

        assert!(favorites.load().is_empty());
        assert!(favorites.error().is_some());

        // still usable afterwards
        favorites.add(Id::new(4)).unwrap();
        assert!(favorites.error().is_none());
    }
}
