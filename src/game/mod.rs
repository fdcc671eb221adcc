//! Game Foundation Module
//!
//! A small ECS-flavoured core for the endless runner, plus the pieces a
//! browser game engine would normally provide: arcade physics, timers,
//! tweens, pooling and a follow camera.
//!
//! Key concepts:
//! - Entity: Generational index for safe entity references
//! - Component: Plain data structs attached to entities
//! - World: Container for all entities and their components
//! - Event: What happened during a step, for the scene to react to
//! - RunState: One run of the game, advanced in fixed steps
//!
//! Nothing here touches the window except `renderer`, so the simulation is
//! tested headless.

pub mod camera;
pub mod component;
pub mod components;
pub mod difficulty;
pub mod entity;
pub mod event;
pub mod physics;
pub mod platforms;
pub mod pool;
pub mod renderer;
pub mod runtime;
pub mod timer;
pub mod tween;
pub mod world;

// Re-export main types
pub use components::EnemyKind;
pub use entity::Entity;
pub use event::Events;
pub use runtime::RunState;
pub use world::World;
