use crate::model::{Contact, FavoriteSet};

/// Favorited contacts among `contacts`, in list order. Favorites that are
/// not in the list are not reported.
pub fn favorite_contacts<'a>(contacts: &'a [Contact], favorites: &FavoriteSet) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|c| favorites.contains(c.id))
        .collect()
}

/// Favorited ids that do not appear in `contacts`.
pub fn missing_favorites(contacts: &[Contact], favorites: &FavoriteSet) -> Vec<u64> {
    favorites
        .ids()
        .iter()
        .filter(|id| !contacts.iter().any(|c| c.id == **id))
        .map(|id| id.value)
        .collect()
}
