//! Entity handles with generational indices
//!
//! Enemies, pickups and platforms come and go constantly in an endless run.
//! A handle kept by a timer or a collision pair must not silently start
//! pointing at whatever reused the slot, so every slot carries a generation
//! that is bumped when it is freed.

/// A handle to something living in the `World`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index (for component storage access)
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// "No entity"
    pub const NULL: Entity = Entity { index: u32::MAX, generation: 0 };

    pub fn is_null(&self) -> bool {
        self.index == u32::MAX
    }
}

impl Default for Entity {
    fn default() -> Self {
        Entity::NULL
    }
}

/// Hands out entity slots and recycles freed ones.
pub struct EntityAllocator {
    generations: Vec<u32>,
    /// LIFO free list
    free_indices: Vec<u32>,
    alive: Vec<bool>,
    alive_count: u32,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            free_indices: Vec::new(),
            alive: Vec::new(),
            alive_count: 0,
        }
    }

    pub fn allocate(&mut self) -> Entity {
        self.alive_count += 1;

        if let Some(index) = self.free_indices.pop() {
            self.alive[index as usize] = true;
            Entity::new(index, self.generations[index as usize])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            self.alive.push(true);
            Entity::new(index, 0)
        }
    }

    /// Free an entity. Returns false if it was already dead.
    pub fn free(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        let idx = entity.index as usize;
        self.generations[idx] = self.generations[idx].wrapping_add(1);
        self.alive[idx] = false;
        self.free_indices.push(entity.index);
        self.alive_count -= 1;
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        if entity.is_null() {
            return false;
        }
        let idx = entity.index as usize;
        idx < self.generations.len() && self.alive[idx] && self.generations[idx] == entity.generation
    }

    pub fn alive_count(&self) -> u32 {
        self.alive_count
    }

    /// Handle for whatever currently lives in `index`, if anything
    pub fn entity_at(&self, index: u32) -> Option<Entity> {
        let idx = index as usize;
        if idx < self.alive.len() && self.alive[idx] {
            Some(Entity::new(index, self.generations[idx]))
        } else {
            None
        }
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
