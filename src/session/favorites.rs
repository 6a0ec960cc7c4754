use crate::constants::FAVORITES_STORAGE_KEY;
use crate::schema::{Recipe, RecipeId};
use crate::store::KeyValueStore;

/// Owns the persisted favorites set. Views go through this service instead of
/// touching the store directly; every mutation is written back immediately.
///
/// Membership is unique, insertion order is preserved. A missing or corrupt
/// stored payload loads as an empty set.
pub struct Favorites<S: KeyValueStore> {
    store: S,
    entries: Vec<RecipeId>,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn load(store: S) -> Self {
        let entries = store
            .get(FAVORITES_STORAGE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        Self { store, entries }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry == id)
    }

    /// Favorite ids in insertion order.
    pub fn ids(&self) -> &[RecipeId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the id was newly added.
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.entries.push(id.to_string());
        self.persist();
        true
    }

    /// Returns true if the id was present and removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != id);
        if self.entries.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Flips membership and returns whether the recipe is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id);
            true
        }
    }

    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.entries.clear();
        self.persist();
    }

    /// Favorite recipes in table order, as the favorites page lists them.
    /// Ids with no matching recipe are skipped.
    pub fn recipes<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes
            .iter()
            .filter(|recipe| self.contains(&recipe.id))
            .collect()
    }

    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.entries) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to serialize favorites: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(FAVORITES_STORAGE_KEY, &raw) {
            log::warn!("failed to persist favorites: {e}");
        }
    }
}
