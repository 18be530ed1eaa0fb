use std::sync::Arc;

use crate::model::Entity;

/// Ordered collection of one kind of entity.
///
/// `EntityStore` is responsible for:
/// - Keeping entities in insertion order (which is also their z-order)
/// - Addressing entities by id
/// - Replacing the whole collection on every mutation
///
/// # Change detection
///
/// The backing `Vec` sits behind an `Arc` and is never mutated in place. Every
/// `add`, successful `update` and successful `remove` installs a fresh
/// collection, so a consumer holding an earlier [`EntityStore::snapshot`] can
/// detect a change with [`EntityStore::changed_since`] (pointer comparison)
/// without diffing entities.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    items: Arc<Vec<T>>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(Vec::new()),
        }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in insertion (z) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.find(id).is_some()
    }

    /// Appends an entity on top of the z-order.
    pub fn add(&mut self, entity: T) {
        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.extend(self.items.iter().cloned());
        next.push(entity);
        self.items = Arc::new(next);
    }

    /// Replaces the entity with `id` by `patch(current)`.
    ///
    /// Returns `false` (and leaves the collection untouched) when no entity has
    /// that id. The patched entity keeps its slot in the z-order.
    pub fn update<F>(&mut self, id: T::Id, patch: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        let Some(index) = self.items.iter().position(|e| e.id() == id) else {
            return false;
        };

        let patched = patch(&self.items[index]);
        debug_assert_eq!(patched.id(), id, "patcher must not change the entity id");

        let mut next: Vec<T> = self.items.as_ref().clone();
        next[index] = patched;
        self.items = Arc::new(next);
        true
    }

    /// Removes and returns the entity with `id`, if present.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.items.iter().position(|e| e.id() == id)?;
        let mut next: Vec<T> = self.items.as_ref().clone();
        let removed = next.remove(index);
        self.items = Arc::new(next);
        Some(removed)
    }

    /// The current collection. Cheap: clones the `Arc`, not the entities.
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.items)
    }

    /// True when the store has been mutated since `earlier` was taken.
    pub fn changed_since(&self, earlier: &Arc<Vec<T>>) -> bool {
        !Arc::ptr_eq(&self.items, earlier)
    }
}

impl<'a, T: Entity> IntoIterator for &'a EntityStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
