//! Game World
//!
//! The World owns every entity of a run and its components:
//! - entity allocation and liveness
//! - typed component storages (known at compile time, no type registry)
//! - deferred despawn so systems can queue removals while iterating

use macroquad::math::Vec2;

use super::component::ComponentStorage;
use super::components::*;
use super::entity::{Entity, EntityAllocator};

pub struct World {
    entities: EntityAllocator,

    /// Entities queued for removal at the end of the step
    despawn_queue: Vec<Entity>,

    // =========================================================================
    // Core
    // =========================================================================

    pub bodies: ComponentStorage<Body>,
    pub sprites: ComponentStorage<Sprite>,

    // =========================================================================
    // Kinds
    // =========================================================================

    pub platforms: ComponentStorage<Platform>,
    pub enemies: ComponentStorage<Enemy>,
    pub pickups: ComponentStorage<HealthPickup>,
    pub labels: ComponentStorage<FloatingText>,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: EntityAllocator::new(),
            despawn_queue: Vec::new(),
            bodies: ComponentStorage::new(),
            sprites: ComponentStorage::new(),
            platforms: ComponentStorage::new(),
            enemies: ComponentStorage::new(),
            pickups: ComponentStorage::new(),
            labels: ComponentStorage::new(),
        }
    }

    // =========================================================================
    // Entity Management
    // =========================================================================

    pub fn spawn(&mut self) -> Entity {
        self.entities.allocate()
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    #[cfg(test)]
    pub fn entity_count(&self) -> u32 {
        self.entities.alive_count()
    }

    /// Queue an entity for removal at the end of the step
    pub fn despawn(&mut self, entity: Entity) {
        if self.is_alive(entity) && !self.despawn_queue.contains(&entity) {
            self.despawn_queue.push(entity);
        }
    }

    pub fn despawn_immediate(&mut self, entity: Entity) {
        if !self.entities.free(entity) {
            return;
        }

        let idx = entity.index();
        self.bodies.clear_slot(idx);
        self.sprites.clear_slot(idx);
        self.platforms.clear_slot(idx);
        self.enemies.clear_slot(idx);
        self.pickups.clear_slot(idx);
        self.labels.clear_slot(idx);
    }

    pub fn flush_despawns(&mut self) {
        let queue = std::mem::take(&mut self.despawn_queue);
        for entity in queue {
            self.despawn_immediate(entity);
        }
    }

    /// Live entities that carry a component in `storage`
    fn collect<T>(&self, storage: &ComponentStorage<T>) -> Vec<Entity> {
        storage
            .iter()
            .filter_map(|(idx, _)| self.entities.entity_at(idx))
            .collect()
    }

    pub fn platform_entities(&self) -> Vec<Entity> {
        self.collect(&self.platforms)
    }

    pub fn enemy_entities(&self) -> Vec<Entity> {
        self.collect(&self.enemies)
    }

    pub fn pickup_entities(&self) -> Vec<Entity> {
        self.collect(&self.pickups)
    }

    pub fn label_entities(&self) -> Vec<Entity> {
        self.collect(&self.labels)
    }

    /// Remove every enemy right away (game over, scene shutdown)
    pub fn clear_enemies(&mut self) {
        for enemy in self.enemy_entities() {
            self.despawn_immediate(enemy);
        }
    }

    // =========================================================================
    // Spawning helpers
    // =========================================================================

    /// Static ground segment with its top-left corner at `top_left`
    pub fn spawn_platform(&mut self, top_left: Vec2, size: Vec2) -> Entity {
        let entity = self.spawn();
        let body = Body::from_top_left(top_left, size).without_gravity();
        self.bodies.insert(entity, body);
        self.sprites.insert(entity, Sprite::new("platform", size, [0x6b, 0x5a, 0x48]));
        self.platforms.insert(entity, Platform);
        entity
    }

    pub fn spawn_enemy(&mut self, kind: EnemyKind, body: Body) -> Entity {
        let entity = self.spawn();
        self.sprites.insert(entity, Sprite::new(kind.texture(), body.size, [0x8a, 0x1c, 0x1c]));
        self.bodies.insert(entity, body);
        self.enemies.insert(entity, Enemy { kind });
        entity
    }

    pub fn spawn_pickup(&mut self, body: Body, pickup: HealthPickup) -> Entity {
        let entity = self.spawn();
        self.sprites.insert(entity, Sprite::new("health", body.size, [0xe0, 0x20, 0x40]));
        self.bodies.insert(entity, body);
        self.pickups.insert(entity, pickup);
        entity
    }

    pub fn spawn_label(&mut self, label: FloatingText) -> Entity {
        let entity = self.spawn();
        self.labels.insert(entity, label);
        entity
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    fn enemy_body() -> Body {
        Body::new(vec2(900.0, 340.0), vec2(70.0, 100.0))
    }

    #[test]
    fn test_spawn_helpers_attach_components() {
        let mut world = World::new();
        let platform = world.spawn_platform(vec2(0.0, 500.0), vec2(128.0, 150.0));
        let enemy = world.spawn_enemy(EnemyKind::Muko, enemy_body());

        assert!(world.platforms.contains(platform));
        assert!(!world.bodies.get(platform).unwrap().allow_gravity);
        assert_eq!(world.sprites.get(enemy).unwrap().texture, "muko");
        assert_eq!(world.enemy_entities(), vec![enemy]);
    }

    #[test]
    fn test_deferred_despawn() {
        let mut world = World::new();
        let enemy = world.spawn_enemy(EnemyKind::Kader, enemy_body());

        world.despawn(enemy);
        world.despawn(enemy);
        assert!(world.is_alive(enemy));

        world.flush_despawns();
        assert!(!world.is_alive(enemy));
        assert!(world.bodies.get(enemy).is_none());
        assert!(world.enemy_entities().is_empty());
    }

    #[test]
    fn test_stale_handle_does_not_see_new_entity() {
        let mut world = World::new();
        let enemy = world.spawn_enemy(EnemyKind::Ugur, enemy_body());
        world.despawn_immediate(enemy);

        let platform = world.spawn_platform(vec2(0.0, 500.0), vec2(128.0, 150.0));
        assert_eq!(platform.index(), enemy.index());
        assert!(!world.is_alive(enemy));
        assert!(world.enemy_entities().is_empty());
    }

    #[test]
    fn test_clear_enemies_keeps_platforms() {
        let mut world = World::new();
        world.spawn_platform(vec2(0.0, 500.0), vec2(128.0, 150.0));
        world.spawn_enemy(EnemyKind::Zehra, enemy_body());
        world.spawn_enemy(EnemyKind::Hursit, enemy_body());

        world.clear_enemies();
        assert!(world.enemy_entities().is_empty());
        assert_eq!(world.platform_entities().len(), 1);
        assert_eq!(world.entity_count(), 1);
    }
}
