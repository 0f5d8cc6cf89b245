mod common;

use std::sync::Arc;

use addrbook::db::*;
use addrbook::error::{AppError, ErrorKind};
use addrbook::model::*;
use addrbook::ops::FavoritesStore;
use common::FakeDirectory;

fn setup() -> (FavoritesStore, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let mut favorites = FavoritesStore::new(store.clone());
    favorites.load();
    (favorites, store)
}

fn id(v: u64) -> Id<Contact> {
    Id::new(v)
}

fn persisted(store: &MemoryStore) -> Option<Vec<u64>> {
    store
        .get(keys::FAVORITES)
        .unwrap()
        .map(|raw| serde_json::from_str(&raw).unwrap())
}

// ==========================================================================
// LOAD
// ==========================================================================

#[test]
fn load_without_data_is_empty() {
    let (favorites, _) = setup();
    assert!(favorites.favorites().is_empty());
    assert_eq!(favorites.error(), None);
}

#[test]
fn load_reads_persisted_ids() {
    let store = Arc::new(MemoryStore::new());
    store.set(keys::FAVORITES, "[5,1,9]").unwrap();
    let mut favorites = FavoritesStore::new(store);

    let loaded: Vec<u64> = favorites.load().ids().iter().map(|i| i.value).collect();
    assert_eq!(loaded, vec![5, 1, 9]);
}

#[test]
fn load_with_wrong_shape_reports_and_degrades() {
    let store = Arc::new(MemoryStore::new());
    store.set(keys::FAVORITES, r#"{"ids":[1]}"#).unwrap();
    let mut favorites = FavoritesStore::new(store);

    assert!(favorites.load().is_empty());
    assert!(favorites.error().unwrap().starts_with("Storage error"));

    favorites.clear_error();
    assert_eq!(favorites.error(), None);
}

// ==========================================================================
// ADD / REMOVE
// ==========================================================================

#[test]
fn add_appends_and_persists() {
    let (mut favorites, store) = setup();
    favorites.add(id(3)).unwrap();
    favorites.add(id(1)).unwrap();

    assert_eq!(favorites.favorites().ids(), &[id(3), id(1)]);
    assert_eq!(persisted(&store), Some(vec![3, 1]));
}

#[test]
fn add_twice_fails_and_leaves_set_unchanged() {
    let (mut favorites, store) = setup();
    favorites.add(id(7)).unwrap();

    let err = favorites.add(id(7)).unwrap_err();

    assert!(matches!(err, AppError::AlreadyFavorited { id: 7 }));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(favorites.favorites().ids(), &[id(7)]);
    assert_eq!(persisted(&store), Some(vec![7]));
    assert_eq!(favorites.error(), Some("Contact 7 is already in favorites"));
}

#[test]
fn remove_absent_id_succeeds_and_persists_unchanged_set() {
    let (mut favorites, store) = setup();
    favorites.add(id(2)).unwrap();

    let set = favorites.remove(id(99)).unwrap();

    assert_eq!(set.ids(), &[id(2)]);
    assert_eq!(persisted(&store), Some(vec![2]));
}

#[test]
fn remove_on_empty_store_writes_empty_array() {
    let (mut favorites, store) = setup();
    favorites.remove(id(1)).unwrap();
    assert_eq!(persisted(&store), Some(vec![]));
}

#[test]
fn remove_filters_id_out() {
    let (mut favorites, store) = setup();
    for v in [1, 2, 3] {
        favorites.add(id(v)).unwrap();
    }
    favorites.remove(id(2)).unwrap();
    assert_eq!(persisted(&store), Some(vec![1, 3]));
    assert!(!favorites.contains(id(2)));
}

#[test]
fn toggle_flips_membership() {
    let (mut favorites, _) = setup();
    assert!(favorites.toggle(id(4)).unwrap());
    assert!(favorites.contains(id(4)));
    assert!(!favorites.toggle(id(4)).unwrap());
    assert!(!favorites.contains(id(4)));
}

#[test]
fn persisted_set_never_holds_duplicates() {
    let (mut favorites, store) = setup();
    let script: [(bool, u64); 12] = [
        (true, 1), (true, 2), (true, 1), (false, 3), (true, 3), (true, 2),
        (false, 1), (true, 1), (true, 1), (false, 2), (true, 2), (true, 3),
    ];

    for (add, v) in script {
        let _ = if add { favorites.add(id(v)) } else { favorites.remove(id(v)) };
        let mut saved = persisted(&store).unwrap_or_default();
        let before = saved.len();
        saved.sort_unstable();
        saved.dedup();
        assert_eq!(saved.len(), before, "duplicate after {:?}", (add, v));
    }
    assert_eq!(persisted(&store), Some(vec![3, 1, 2]));
}

#[test]
fn favorites_survive_reopen_through_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.db");

    {
        let store = Arc::new(SqliteStore::open(&path).unwrap());
        let mut favorites = FavoritesStore::new(store);
        favorites.load();
        favorites.add(id(11)).unwrap();
        favorites.add(id(12)).unwrap();
    }

    let store = Arc::new(SqliteStore::open(&path).unwrap());
    let mut favorites = FavoritesStore::new(store);
    assert_eq!(favorites.load().ids(), &[id(11), id(12)]);
}

// ==========================================================================
// RESOLVE
// ==========================================================================

#[test]
fn resolve_lists_first_page_in_directory_order() {
    let (mut favorites, _) = setup();
    let directory = FakeDirectory::with_size(100);
    for v in [12, 3, 250] {
        favorites.add(id(v)).unwrap();
    }

    let found: Vec<u64> = favorites
        .resolve(&directory, 30)
        .unwrap()
        .iter()
        .map(|c| c.id.value)
        .collect();

    assert_eq!(found, vec![3, 12]);
    assert_eq!(directory.calls(), vec!["list 0 30"]);
}

#[test]
fn resolve_reports_directory_failure() {
    let (mut favorites, _) = setup();
    favorites.add(id(1)).unwrap();
    let directory = FakeDirectory::with_size(5);
    directory.fail_next();

    let err = favorites.resolve(&directory, 30).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(favorites.contains(id(1)));
}
