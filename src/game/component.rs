//! Component Storage
//!
//! `ComponentStorage<T>` is a sparse array indexed by entity slot. A run
//! never has more than a few hundred live objects, so a flat `Vec<Option<T>>`
//! per component type is plenty.

use super::entity::Entity;

pub struct ComponentStorage<T> {
    data: Vec<Option<T>>,
}

impl<T> ComponentStorage<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn ensure_capacity(&mut self, index: usize) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
    }

    /// Insert or replace the component for an entity
    pub fn insert(&mut self, entity: Entity, component: T) {
        let idx = entity.index() as usize;
        self.ensure_capacity(idx);
        self.data[idx] = Some(component);
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.data.get(entity.index() as usize).and_then(|opt| opt.as_ref())
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.data.get_mut(entity.index() as usize).and_then(|opt| opt.as_mut())
    }

    #[cfg(test)]
    pub fn contains(&self, entity: Entity) -> bool {
        self.get(entity).is_some()
    }

    /// Iterate over (slot index, component). Liveness is the caller's concern.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(idx, opt)| opt.as_ref().map(|c| (idx as u32, c)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (u32, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, opt)| opt.as_mut().map(|c| (idx as u32, c)))
    }

    pub fn clear_slot(&mut self, index: u32) {
        if let Some(slot) = self.data.get_mut(index as usize) {
            *slot = None;
        }
    }
}

impl<T> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_clear() {
        let mut storage: ComponentStorage<i32> = ComponentStorage::new();
        let entity = Entity::new(5, 0);

        storage.insert(entity, 42);
        assert_eq!(storage.get(entity), Some(&42));
        storage.clear_slot(entity.index());
        assert!(!storage.contains(entity));
        assert_eq!(storage.get(Entity::new(99, 0)), None);
    }

    #[test]
    fn test_sparse_iteration() {
        let mut storage: ComponentStorage<&str> = ComponentStorage::new();
        storage.insert(Entity::new(1, 0), "platform");
        storage.insert(Entity::new(7, 0), "enemy");

        let indices: Vec<u32> = storage.iter().map(|(idx, _)| idx).collect();
        assert_eq!(indices, vec![1, 7]);

        storage.clear_slot(1);
        let indices: Vec<u32> = storage.iter().map(|(idx, _)| idx).collect();
        assert_eq!(indices, vec![7]);
    }
}
