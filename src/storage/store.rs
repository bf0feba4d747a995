use super::{IdPolicy, Seed, builtin_seed, load_seed_file};
use crate::{
    config::BookqlConfig,
    error::Result,
    model::{Author, Book, Entity},
};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// The store behind the one lock every request goes through.
pub type SharedStore = Arc<Mutex<EntityStore>>;

/// One ordered collection of records of a single kind.
#[derive(Debug, Clone)]
pub struct Collection<E> {
    items: Vec<E>,
    /// Highest id this collection has ever held, deleted records included.
    highest_seen: i32,
}

impl<E: Entity> Collection<E> {
    pub fn new(items: Vec<E>) -> Self {
        let highest_seen = items.iter().map(Entity::id).max().unwrap_or(0);
        Self {
            items,
            highest_seen,
        }
    }

    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find(&self, id: i32) -> Option<&E> {
        self.items.iter().find(|e| e.id() == id)
    }

    fn find_mut(&mut self, id: i32) -> Option<&mut E> {
        self.items.iter_mut().find(|e| e.id() == id)
    }

    fn push(&mut self, entity: E) -> &E {
        self.highest_seen = self.highest_seen.max(entity.id());
        self.items.push(entity);
        &self.items[self.items.len() - 1]
    }

    fn remove_first(&mut self, id: i32) -> Option<E> {
        let pos = self.items.iter().position(|e| e.id() == id)?;
        Some(self.items.remove(pos))
    }
}

impl<E: Entity> Default for Collection<E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Selects the collection that holds a given entity kind.
pub trait Stored: Entity {
    fn collection(store: &EntityStore) -> &Collection<Self>;
    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self>;
}

impl Stored for Author {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.authors
    }

    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self> {
        &mut store.authors
    }
}

impl Stored for Book {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.books
    }

    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self> {
        &mut store.books
    }
}

/// Authors and books, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    authors: Collection<Author>,
    books: Collection<Book>,
    id_policy: IdPolicy,
}

impl EntityStore {
    pub fn new(id_policy: IdPolicy) -> Self {
        Self {
            id_policy,
            ..Self::default()
        }
    }

    pub fn from_seed(seed: Seed, id_policy: IdPolicy) -> Self {
        Self {
            authors: Collection::new(seed.authors),
            books: Collection::new(seed.books),
            id_policy,
        }
    }

    /// Store holding the built-in dataset.
    pub fn seeded(id_policy: IdPolicy) -> Self {
        Self::from_seed(builtin_seed(), id_policy)
    }

    /// Builds the store described by the `store` section of the config.
    /// A relative seed path is resolved against `project_root`.
    pub fn open(config: &BookqlConfig, project_root: &Path) -> Result<Self> {
        let settings = &config.store;
        let store = if settings.empty {
            Self::new(settings.id_policy)
        } else if let Some(seed_path) = &settings.seed {
            let seed = load_seed_file(&project_root.join(seed_path))?;
            Self::from_seed(seed, settings.id_policy)
        } else {
            Self::seeded(settings.id_policy)
        };
        tracing::debug!(
            authors = store.authors.len(),
            books = store.books.len(),
            id_policy = %store.id_policy,
            "Entity store ready"
        );
        Ok(store)
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn find_by_id<E: Stored>(&self, id: i32) -> Option<&E> {
        E::collection(self).find(id)
    }

    pub fn find_by_id_mut<E: Stored>(&mut self, id: i32) -> Option<&mut E> {
        E::collection_mut(self).find_mut(id)
    }

    pub fn all<E: Stored>(&self) -> &[E] {
        E::collection(self).as_slice()
    }

    pub fn len<E: Stored>(&self) -> usize {
        E::collection(self).len()
    }

    /// Id the next `append` of this kind will assign.
    pub fn next_id<E: Stored>(&self) -> i32 {
        let collection = E::collection(self);
        self.id_policy
            .next_id(collection.len(), collection.highest_seen)
    }

    /// Assigns the next id to `entity`, whatever id it carried, and appends it.
    pub fn append<E: Stored>(&mut self, mut entity: E) -> &E {
        let id = self.next_id::<E>();
        entity.set_id(id);
        tracing::info!(kind = %E::KIND, id, "Appending entity");
        E::collection_mut(self).push(entity)
    }

    /// Removes the first record with `id`; later records keep their order.
    pub fn remove_first_matching<E: Stored>(&mut self, id: i32) -> Option<E> {
        let removed = E::collection_mut(self).remove_first(id);
        if removed.is_some() {
            tracing::info!(kind = %E::KIND, id, "Removed entity");
        }
        removed
    }

    pub fn filter<E: Stored>(&self, predicate: impl Fn(&E) -> bool) -> Vec<&E> {
        E::collection(self)
            .as_slice()
            .iter()
            .filter(|e| predicate(e))
            .collect()
    }
}
