//! Run State
//!
//! Everything that happens during one run of the gameplay scene: player
//! movement, ground streaming, enemy and pickup spawning, shooting,
//! scoring and difficulty, lives and invulnerability, and game over.
//! It never touches macroquad's drawing or audio; the scene draws from the
//! accessors and reacts to `events`.

use macroquad::math::{vec2, Vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::characters::Character;
use crate::config::GameConfig;
use crate::input::Controls;

use super::camera::FollowCamera;
use super::components::*;
use super::difficulty::Difficulty;
use super::event::*;
use super::physics;
use super::platforms::PlatformGenerator;
use super::pool::Pool;
use super::timer::{SceneClock, TimerEvent, Timers};
use super::{Entity, Events, World};

/// Never run more than this many fixed steps for one rendered frame
const MAX_STEPS_PER_FRAME: u32 = 5;

pub const LIFE_GAINED_TEXT: &str = "+1 Life!";

pub struct RunState {
    config: GameConfig,
    character: Character,

    pub world: World,
    pub events: Events,
    clock: SceneClock,
    timers: Timers,
    rng: SmallRng,

    player: Entity,
    platforms: PlatformGenerator,
    bullets: Pool<Bullet>,
    difficulty: Difficulty,
    camera: FollowCamera,

    lives: u32,
    distance_score: u32,
    kill_score: u32,
    score: u32,
    invulnerable: bool,
    game_over: bool,

    next_enemy_spawn: f64,
    next_health_spawn: f64,
    last_shot: f64,
    background_offset: f32,

    /// Unsimulated time carried over between frames (seconds)
    accumulator: f32,
}

impl RunState {
    /// Set up a fresh run: ground, player, camera, counters
    pub fn new(config: &GameConfig, character: Character, seed: u64) -> Self {
        let config = config.clone();
        let camera = FollowCamera::new(
            vec2(config.canvas.width, config.canvas.height),
            (0.0, 0.0, config.world.width, config.canvas.height),
        );

        let mut run = Self {
            character,
            world: World::new(),
            events: Events::new(),
            clock: SceneClock::new(),
            timers: Timers::new(),
            rng: SmallRng::seed_from_u64(seed),
            player: Entity::NULL,
            platforms: PlatformGenerator::new(&config.platforms),
            bullets: Pool::with_capacity(config.bullets.pool_size),
            difficulty: Difficulty::new(&config),
            camera,
            lives: config.player.start_lives,
            distance_score: 0,
            kill_score: 0,
            score: 0,
            invulnerable: false,
            game_over: false,
            next_enemy_spawn: 0.0,
            next_health_spawn: 0.0,
            last_shot: 0.0,
            background_offset: 0.0,
            accumulator: 0.0,
            config,
        };

        let segments = run.platforms.generate_initial(&run.config.platforms, &mut run.rng);
        run.spawn_platforms(&segments);
        run.spawn_player();
        run.camera.follow(run.player_position());
        run
    }

    fn spawn_player(&mut self) {
        let cfg = &self.config.player;
        let size = vec2(cfg.size.0, cfg.size.1);
        let body = Body::new(vec2(cfg.spawn.0, cfg.spawn.1), size).with_extra_gravity(cfg.extra_gravity);

        let player = self.world.spawn();
        self.world.bodies.insert(player, body);
        self.world.sprites.insert(player, Sprite::new(self.character.sprite, size, [0x3a, 0x6e, 0xa5]));
        self.player = player;
    }

    fn spawn_platforms(&mut self, segments: &[f32]) {
        let (w, h) = self.config.platforms.segment;
        for &x in segments {
            self.world.spawn_platform(vec2(x, self.config.world.ground_y), vec2(w, h));
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn character(&self) -> Character {
        self.character
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn player_body(&self) -> Body {
        self.world.bodies.get(self.player).copied().unwrap_or_else(|| {
            Body::new(vec2(self.config.player.spawn.0, self.config.player.spawn.1), Vec2::ZERO)
        })
    }

    pub fn player_position(&self) -> Vec2 {
        self.player_body().position
    }

    fn player_body_mut(&mut self) -> Option<&mut Body> {
        self.world.bodies.get_mut(self.player)
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[cfg(test)]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn background_offset(&self) -> f32 {
        self.background_offset
    }

    pub fn bullets(&self) -> &Pool<Bullet> {
        &self.bullets
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    #[cfg(test)]
    pub fn last_platform_x(&self) -> f32 {
        self.platforms.last_x()
    }

    fn in_void(&self, body: &Body) -> bool {
        body.position.y > self.config.world.void_y
    }

    // =========================================================================
    // Frame driving
    // =========================================================================

    /// Run as many fixed steps as `frame_dt` seconds cover
    pub fn update(&mut self, controls: Controls, frame_dt: f32) -> u32 {
        let step = self.config.physics.step_seconds();
        self.accumulator += frame_dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= step && steps < MAX_STEPS_PER_FRAME {
            self.tick(controls, step);
            self.accumulator -= step;
            steps += 1;
        }

        // Drop the backlog after a long stall instead of fast-forwarding
        if steps == MAX_STEPS_PER_FRAME {
            self.accumulator = 0.0;
        }
        steps
    }

    /// One fixed simulation step of `dt` seconds
    pub fn tick(&mut self, controls: Controls, dt: f32) {
        let dt_ms = dt as f64 * 1000.0;
        self.clock.advance(dt_ms);
        self.advance_labels(dt_ms);

        if self.game_over {
            self.world.flush_despawns();
            return;
        }

        let now = self.clock.now();

        self.update_player(controls);
        self.stream_platforms();
        self.update_distance_score();
        self.update_enemy_spawning(now);
        self.update_enemies();
        if self.game_over {
            self.world.flush_despawns();
            return;
        }
        self.update_pickups(now, dt_ms);
        if controls.shoot {
            self.shoot(now);
        }

        self.step_physics(dt);
        if !self.game_over {
            self.resolve_overlaps();
        }

        for event in self.timers.tick(now) {
            self.on_timer(event);
        }
        self.update_bullets(now, dt_ms);
        self.cull_behind();

        self.camera.follow(self.player_position());
        self.background_offset = self.difficulty.parallax(self.camera.scroll().x);

        self.world.flush_despawns();
    }

    // =========================================================================
    // Player
    // =========================================================================

    fn update_player(&mut self, controls: Controls) {
        let void_y = self.config.world.void_y;
        let void_floor = self.config.world.void_floor_y;
        let speed = self.difficulty.speed();
        let jump = self.difficulty.jump_velocity();

        let Some(body) = self.world.bodies.get_mut(self.player) else { return };

        // Fallen through a gap: pinned to the floor of the void. A jump
        // never clears the ground line again.
        if body.position.y > void_y {
            body.position.y = void_floor;
            body.velocity.y = 0.0;
            if controls.up {
                body.velocity.y = jump;
            }
        }

        let facing_right = if controls.left {
            body.velocity.x = -speed;
            Some(false)
        } else if controls.right {
            body.velocity.x = speed;
            Some(true)
        } else {
            body.velocity.x = 0.0;
            None
        };

        if controls.up && body.position.y <= void_y && body.touching.down {
            body.velocity.y = jump;
        }

        if let (Some(right), Some(sprite)) = (facing_right, self.world.sprites.get_mut(self.player)) {
            sprite.flip_x = right;
        }
    }

    fn stream_platforms(&mut self) {
        let x = self.player_position().x;
        if self.platforms.needs_more(x, self.config.platforms.lookahead) {
            let segments = self.platforms.generate_more(self.config.platforms.chunk, &mut self.rng);
            self.spawn_platforms(&segments);
        }
    }

    /// Lose a life unless protected; the last one ends the run
    pub fn hit_player(&mut self, in_void: bool) {
        if self.game_over || self.invulnerable {
            return;
        }

        self.lives = self.lives.saturating_sub(1);
        self.events.player_hit.send(PlayerHitEvent { lives_left: self.lives, in_void });

        if self.lives == 0 {
            self.end_run();
            return;
        }

        let now = self.clock.now();
        let cfg = &self.config.player;
        self.invulnerable = true;
        self.timers.add_event(now, cfg.flash_interval_ms, cfg.flash_repeats, TimerEvent::FlashPlayer);
        self.timers.delayed_call(now, cfg.invulnerable_ms, TimerEvent::EndInvulnerability);
        if let Some(sprite) = self.world.sprites.get_mut(self.player) {
            sprite.alpha = 0.5;
        }
    }

    fn on_timer(&mut self, event: TimerEvent) {
        let Some(sprite) = self.world.sprites.get_mut(self.player) else { return };
        match event {
            TimerEvent::FlashPlayer => {
                sprite.alpha = if sprite.alpha >= 1.0 { 0.5 } else { 1.0 };
            }
            TimerEvent::EndInvulnerability => {
                self.invulnerable = false;
                sprite.alpha = 1.0;
            }
        }
    }

    fn end_run(&mut self) {
        self.game_over = true;
        self.lives = 0;

        if let Some(body) = self.player_body_mut() {
            body.velocity = Vec2::ZERO;
            body.allow_gravity = false;
        }
        self.world.clear_enemies();
        self.bullets.clear();
        self.events.game_over.send(GameOverEvent { score: self.score });
    }

    // =========================================================================
    // Scoring
    // =========================================================================

    fn update_distance_score(&mut self) {
        let unit = self.config.scoring.distance_unit.max(1.0);
        let distance = (self.player_position().x / unit).floor().max(0.0) as u32;
        if distance != self.distance_score {
            self.distance_score = distance;
            self.refresh_score();
        }
    }

    fn refresh_score(&mut self) {
        self.score = self.distance_score + self.kill_score;
        self.difficulty.update(self.score);

        let velocity = self.difficulty.enemy_velocity();
        for enemy in self.world.enemy_entities() {
            if let Some(body) = self.world.bodies.get_mut(enemy) {
                body.velocity.x = velocity;
            }
        }

        self.events.score_changed.send(ScoreChangedEvent { score: self.score });
    }

    // =========================================================================
    // Enemies
    // =========================================================================

    fn update_enemy_spawning(&mut self, now: f64) {
        if now > self.next_enemy_spawn {
            self.spawn_enemy();
            self.next_enemy_spawn = now + self.difficulty.enemy_interval_ms();
        }
    }

    fn spawn_enemy(&mut self) -> Option<Entity> {
        let cfg = &self.config.enemies;
        if cfg.kinds.is_empty() {
            return None;
        }
        let kind = cfg.kinds[self.rng.gen_range(0..cfg.kinds.len())];
        let (w, h) = if kind.is_wide() { cfg.wide_size } else { cfg.size };

        let x = self.player_position().x + cfg.spawn_ahead;
        let body = Body::new(vec2(x, cfg.spawn_y), vec2(w, h))
            .with_extra_gravity(cfg.extra_gravity)
            .with_velocity(vec2(self.difficulty.enemy_velocity(), 0.0));

        Some(self.world.spawn_enemy(kind, body))
    }

    fn update_enemies(&mut self) {
        let player = self.player_body();
        let player_in_void = self.in_void(&player);
        let walk = self.difficulty.enemy_velocity();
        let cfg = self.config.enemies.clone();
        let void_y = self.config.world.void_y;
        let void_floor = self.config.world.void_floor_y;

        let mut void_hit = false;
        for enemy in self.world.enemy_entities() {
            let Some(body) = self.world.bodies.get_mut(enemy) else { continue };

            if body.position.y > void_y {
                body.position.y = void_floor;
                body.velocity.y = 0.0;

                if self.rng.gen::<f64>() < cfg.void_wander_chance {
                    let speed = cfg.void_wander_speed.round() as i32;
                    body.velocity.x = self.rng.gen_range(-speed..=speed) as f32;
                }

                if player_in_void
                    && physics::distance(player.position, body.position) < cfg.void_hit_distance
                {
                    void_hit = true;
                }
            } else {
                body.velocity.x = walk;
            }
        }

        if void_hit {
            self.hit_player(true);
        }
    }

    // =========================================================================
    // Health pickups
    // =========================================================================

    fn update_pickups(&mut self, now: f64, dt_ms: f64) {
        if now > self.next_health_spawn {
            self.spawn_pickup();
            self.next_health_spawn = now + self.config.pickups.spawn_interval_ms;
        }

        for (_, pickup) in self.world.pickups.iter_mut() {
            pickup.bob.advance(dt_ms);
        }
    }

    fn spawn_pickup(&mut self) -> Entity {
        let cfg = &self.config.pickups;
        let lo = cfg.ahead_min.min(cfg.ahead_max).round() as i32;
        let hi = cfg.ahead_min.max(cfg.ahead_max).round() as i32;
        let x = self.player_position().x + self.rng.gen_range(lo..=hi) as f32;

        let body = Body::new(vec2(x, cfg.spawn_y), vec2(cfg.size, cfg.size))
            .with_bounce(cfg.bounce)
            .with_velocity(vec2(cfg.drift_speed, 0.0))
            .with_extra_gravity(cfg.extra_gravity);
        let pickup = HealthPickup::new(cfg.bob_height, cfg.bob_ms);

        self.world.spawn_pickup(body, pickup)
    }

    fn collect_health(&mut self, pickup: Entity) {
        self.world.despawn(pickup);

        if self.lives < self.config.player.max_lives {
            self.lives += 1;
            self.events.life_gained.send(LifeGainedEvent { lives: self.lives });

            let at = self.player_position();
            self.world.spawn_label(FloatingText::rising(LIFE_GAINED_TEXT, at.x, at.y - 50.0, 50.0, 1000.0));
        }
    }

    fn advance_labels(&mut self, dt_ms: f64) {
        let mut finished = Vec::new();
        for (idx, label) in self.world.labels.iter_mut() {
            label.advance(dt_ms);
            if label.is_finished() {
                finished.push(idx);
            }
        }
        for entity in self.world.label_entities() {
            if finished.contains(&entity.index()) {
                self.world.despawn(entity);
            }
        }
    }

    // =========================================================================
    // Shooting
    // =========================================================================

    fn shoot(&mut self, now: f64) {
        let cfg = &self.config.bullets;
        if now - self.last_shot < cfg.cooldown_ms {
            return;
        }

        // Stones always fly right, towards oncoming enemies
        let from = self.player_position() + vec2(cfg.muzzle_offset, 0.0);
        let mut body = Body::new(from, vec2(cfg.size, cfg.size)).with_velocity(vec2(cfg.speed, 0.0));
        if !cfg.affected_by_gravity {
            body = body.without_gravity();
        }

        let bullet = Bullet::new(body, cfg.spin_ms, now + cfg.lifetime_ms);
        if self.bullets.acquire(bullet).is_some() {
            self.last_shot = now;
        }
    }

    fn update_bullets(&mut self, now: f64, dt_ms: f64) {
        self.bullets.retain(|bullet| now < bullet.expires_at_ms);
        for (_, bullet) in self.bullets.iter_mut() {
            bullet.spin.advance(dt_ms);
        }
    }

    // =========================================================================
    // Physics
    // =========================================================================

    fn step_physics(&mut self, dt: f32) {
        let gravity = self.config.physics.gravity;

        let mut movers = self.world.enemy_entities();
        movers.extend(self.world.pickup_entities());
        movers.push(self.player);

        // Only ground near something that moves can be hit this step
        let margin = self.config.platforms.segment.0;
        let (lo, hi) = movers
            .iter()
            .filter_map(|&e| self.world.bodies.get(e))
            .fold((f32::MAX, f32::MIN), |(lo, hi), body| (lo.min(body.left()), hi.max(body.right())));
        let solids: Vec<Body> = self
            .world
            .platform_entities()
            .into_iter()
            .filter_map(|p| self.world.bodies.get(p).copied())
            .filter(|body| body.right() >= lo - margin && body.left() <= hi + margin)
            .collect();

        for entity in movers {
            if let Some(body) = self.world.bodies.get_mut(entity) {
                physics::integrate(body, gravity, dt);
                physics::collide_static(body, &solids);
            }
        }

        for (_, bullet) in self.bullets.iter_mut() {
            physics::integrate(&mut bullet.body, gravity, dt);
        }
    }

    fn resolve_overlaps(&mut self) {
        let player = self.player_body();

        // Player against enemies
        let touching_enemy = self.world.enemy_entities().into_iter().any(|enemy| {
            self.world.bodies.get(enemy).is_some_and(|body| player.overlaps(body))
        });
        if touching_enemy && !self.invulnerable {
            self.hit_player(false);
        }
        if self.game_over {
            return;
        }

        // Player against pickups
        for pickup in self.world.pickup_entities() {
            let hit = self.world.bodies.get(pickup).is_some_and(|body| player.overlaps(body));
            if hit {
                self.collect_health(pickup);
            }
        }

        // Stones against enemies
        let mut killed: Vec<Entity> = Vec::new();
        let mut spent: Vec<usize> = Vec::new();
        for (slot, bullet) in self.bullets.iter() {
            let target = self.world.enemy_entities().into_iter().find(|enemy| {
                !killed.contains(enemy)
                    && self.world.bodies.get(*enemy).is_some_and(|body| bullet.body.overlaps(body))
            });
            if let Some(enemy) = target {
                killed.push(enemy);
                spent.push(slot);
            }
        }

        for slot in spent {
            self.bullets.release(slot);
        }
        for enemy in killed {
            self.kill_enemy(enemy);
        }
    }

    fn kill_enemy(&mut self, enemy: Entity) {
        let kind = self.world.enemies.get(enemy).map(|e| e.kind);
        let position = self.world.bodies.get(enemy).map(|b| b.position);
        self.world.despawn(enemy);

        if let (Some(kind), Some(at)) = (kind, position) {
            self.events.enemy_killed.send(EnemyKilledEvent { kind, x: at.x, y: at.y });
        }

        self.kill_score += self.config.scoring.kill_bonus;
        self.refresh_score();
    }

    /// Drop enemies and pickups that fell too far behind the player.
    /// Ground stays so the player can always walk back.
    fn cull_behind(&mut self) {
        let limit = self.player_position().x - self.config.world.despawn_behind;

        for entity in self.world.enemy_entities().into_iter().chain(self.world.pickup_entities()) {
            if self.world.bodies.get(entity).is_some_and(|body| body.position.x < limit) {
                self.world.despawn(entity);
            }
        }
    }

    /// Scene shutdown: stop timers and clear enemies
    pub fn shutdown(&mut self) {
        self.timers.remove_all();
        self.world.clear_enemies();
        self.bullets.clear();
        self.invulnerable = false;
        self.game_over = false;
        self.lives = self.config.player.start_lives;
        self.next_enemy_spawn = 0.0;
        self.next_health_spawn = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn run() -> RunState {
        RunState::new(&GameConfig::default(), Character::default(), 42)
    }

    /// Run without enemies or pickups getting in the way
    fn quiet_run() -> RunState {
        let mut config = GameConfig::default();
        config.enemies.spawn_interval_ms = 1.0e12;
        config.pickups.spawn_interval_ms = 1.0e12;
        config.platforms.gap_chance = 0.0;
        let mut run = RunState::new(&config, Character::default(), 42);
        // First spawn happens on the first step; push both timers out
        run.next_enemy_spawn = 1.0e12;
        run.next_health_spawn = 1.0e12;
        run
    }

    fn idle() -> Controls {
        Controls::default()
    }

    fn settle(run: &mut RunState) {
        for _ in 0..120 {
            run.tick(idle(), DT);
        }
    }

    #[test]
    fn test_new_run_starts_clean() {
        let run = run();
        assert_eq!(run.lives(), 3);
        assert_eq!(run.score(), 0);
        assert!(!run.is_game_over());
        assert!(run.last_platform_x() >= 2000.0);
        assert_eq!(run.player_position(), vec2(100.0, 350.0));
        assert_eq!(run.world.sprites.get(run.player()).unwrap().texture, "sila");
    }

    #[test]
    fn test_player_lands_on_ground() {
        let mut run = quiet_run();
        settle(&mut run);
        let body = run.player_body();
        assert!(body.touching.down);
        assert!((body.bottom() - 500.0).abs() < 0.5);
    }

    #[test]
    fn test_moving_right_scores_distance() {
        let mut run = quiet_run();
        settle(&mut run);

        let right = Controls { right: true, ..Default::default() };
        for _ in 0..60 {
            run.tick(right, DT);
        }
        // 250 px/s for one second from x = 100
        let x = run.player_position().x;
        assert!((x - 350.0).abs() < 1.0, "x = {}", x);
        assert_eq!(run.score(), 3);
        assert!(run.world.sprites.get(run.player()).unwrap().flip_x);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut run = quiet_run();
        let jump = Controls { up: true, ..Default::default() };

        // Still falling from the spawn point
        run.tick(jump, DT);
        assert!(run.player_body().velocity.y > 0.0);

        settle(&mut run);
        run.tick(jump, DT);
        let vy = run.player_body().velocity.y;
        assert!(vy < -500.0, "vy = {}", vy);
    }

    #[test]
    fn test_void_pins_player_and_allows_jump() {
        let mut run = quiet_run();
        let player = run.player();
        run.world.bodies.get_mut(player).unwrap().position = vec2(50_000.0, 620.0);

        run.tick(idle(), DT);
        assert!(run.player_body().position.y > 500.0);
        assert!(run.player_body().position.y < 551.0);

        run.tick(Controls { up: true, ..Default::default() }, DT);
        assert!(run.player_body().velocity.y < 0.0);
    }

    #[test]
    fn test_platforms_stream_ahead_of_player() {
        let mut run = quiet_run();
        let before = run.last_platform_x();
        let player = run.player();
        run.world.bodies.get_mut(player).unwrap().position.x = before - 900.0;

        run.tick(idle(), DT);
        assert!(run.last_platform_x() >= before + 1000.0);
    }

    #[test]
    fn test_first_step_spawns_enemy_and_pickup() {
        let mut run = run();
        run.tick(idle(), DT);
        assert_eq!(run.world.enemy_entities().len(), 1);
        assert_eq!(run.world.pickup_entities().len(), 1);

        let enemy = run.world.enemy_entities()[0];
        let body = run.world.bodies.get(enemy).unwrap();
        assert!((body.position.x - 900.0).abs() < 10.0);
        assert_eq!(body.velocity.x, -187.5);
    }

    #[test]
    fn test_enemy_contact_costs_a_life_then_invulnerable() {
        let mut run = quiet_run();
        settle(&mut run);

        let at = run.player_position();
        run.world.spawn_enemy(EnemyKind::Kader, Body::new(at, vec2(70.0, 100.0)).without_gravity());

        run.tick(idle(), DT);
        assert_eq!(run.lives(), 2);
        assert!(run.is_invulnerable());
        assert_eq!(run.events.player_hit.len(), 1);

        // Still overlapping, but protected
        run.tick(idle(), DT);
        assert_eq!(run.lives(), 2);
    }

    #[test]
    fn test_invulnerability_wears_off() {
        let mut run = quiet_run();
        settle(&mut run);
        run.hit_player(false);
        assert!(run.is_invulnerable());
        assert_eq!(run.world.sprites.get(run.player()).unwrap().alpha, 0.5);

        for _ in 0..100 {
            run.tick(idle(), DT);
        }
        assert!(!run.is_invulnerable());
        assert_eq!(run.world.sprites.get(run.player()).unwrap().alpha, 1.0);
    }

    #[test]
    fn test_last_life_ends_the_run() {
        let mut run = quiet_run();
        settle(&mut run);
        run.world.spawn_enemy(EnemyKind::Ugur, Body::new(vec2(2000.0, 425.0), vec2(70.0, 100.0)));

        for _ in 0..3 {
            run.invulnerable = false;
            run.hit_player(false);
        }

        assert!(run.is_game_over());
        assert_eq!(run.lives(), 0);
        assert_eq!(run.events.game_over.len(), 1);
        assert!(run.world.enemy_entities().is_empty());
        assert!(!run.player_body().allow_gravity);

        // Frozen from now on
        let before = run.player_position();
        run.tick(Controls { right: true, ..Default::default() }, DT);
        assert_eq!(run.player_position(), before);
    }

    #[test]
    fn test_health_pickup_restores_a_life_up_to_max() {
        let mut run = quiet_run();
        settle(&mut run);
        run.lives = 2;

        let at = run.player_position();
        run.world.spawn_pickup(Body::new(at, vec2(40.0, 40.0)).without_gravity(), HealthPickup::new(20.0, 1000.0));
        run.tick(idle(), DT);

        assert_eq!(run.lives(), 3);
        assert!(run.world.pickup_entities().is_empty());
        assert_eq!(run.world.label_entities().len(), 1);

        run.lives = 5;
        run.world.spawn_pickup(Body::new(at, vec2(40.0, 40.0)).without_gravity(), HealthPickup::new(20.0, 1000.0));
        run.tick(idle(), DT);
        assert_eq!(run.lives(), 5);
        assert!(run.world.pickup_entities().is_empty());
    }

    #[test]
    fn test_life_label_fades_out() {
        let mut run = quiet_run();
        settle(&mut run);
        run.lives = 1;
        run.collect_health(Entity::NULL);
        assert_eq!(run.world.label_entities().len(), 1);

        for _ in 0..61 {
            run.tick(idle(), DT);
        }
        assert!(run.world.label_entities().is_empty());
    }

    #[test]
    fn test_shooting_respects_cooldown_and_pool() {
        let mut config = GameConfig::default();
        config.bullets.pool_size = 2;
        config.bullets.cooldown_ms = 0.0;
        let mut run = RunState::new(&config, Character::default(), 1);

        run.shoot(10.0);
        run.shoot(20.0);
        run.shoot(30.0);
        assert_eq!(run.bullets().active_count(), 2);

        let mut run = quiet_run();
        run.shoot(300.0);
        run.shoot(400.0);
        assert_eq!(run.bullets().active_count(), 1);
        run.shoot(550.0);
        assert_eq!(run.bullets().active_count(), 2);
    }

    #[test]
    fn test_bullets_expire() {
        let mut run = quiet_run();
        settle(&mut run);
        run.tick(Controls { shoot: true, ..Default::default() }, DT);
        assert_eq!(run.bullets().active_count(), 1);

        for _ in 0..91 {
            run.tick(idle(), DT);
        }
        assert_eq!(run.bullets().active_count(), 0);
    }

    #[test]
    fn test_stone_kills_enemy_and_scores_bonus() {
        let mut run = quiet_run();
        settle(&mut run);

        let at = run.player_position() + vec2(300.0, 0.0);
        let enemy = run.world.spawn_enemy(EnemyKind::Zehra, Body::new(at, vec2(150.0, 100.0)).without_gravity());
        let bullet = Bullet::new(Body::new(at, vec2(30.0, 30.0)).without_gravity(), 500.0, 1.0e9);
        run.bullets.acquire(bullet);

        run.tick(idle(), DT);
        assert!(!run.world.is_alive(enemy));
        assert_eq!(run.bullets().active_count(), 0);
        assert_eq!(run.score(), 10 + run.distance_score);
        assert_eq!(run.events.enemy_killed.len(), 1);
    }

    #[test]
    fn test_score_speeds_up_enemies() {
        let mut run = quiet_run();
        let enemy = run.world.spawn_enemy(EnemyKind::Muko, Body::new(vec2(900.0, 100.0), vec2(70.0, 100.0)));
        run.kill_score = 50;
        run.refresh_score();

        assert!((run.difficulty().multiplier() - 1.2).abs() < 1e-4);
        let vx = run.world.bodies.get(enemy).unwrap().velocity.x;
        assert!((vx + 225.0).abs() < 1e-3);
    }

    #[test]
    fn test_far_behind_objects_are_culled() {
        let mut run = quiet_run();
        settle(&mut run);
        let behind = run.player_position() - vec2(1500.0, 0.0);
        let enemy = run.world.spawn_enemy(EnemyKind::Kader, Body::new(behind, vec2(70.0, 100.0)).without_gravity());
        let player = run.player();
        run.world.bodies.get_mut(player).unwrap().position.x = 1500.0;

        run.tick(idle(), DT);
        assert!(!run.world.is_alive(enemy));
    }

    #[test]
    fn test_ground_behind_survives_a_long_run() {
        let mut run = quiet_run();
        settle(&mut run);

        let right = Controls { right: true, ..Default::default() };
        for _ in 0..900 {
            run.tick(right, DT);
            if run.player_position().x >= 3000.0 {
                break;
            }
        }
        assert!(run.player_position().x >= 3000.0);

        let left = Controls { left: true, ..Default::default() };
        for _ in 0..900 {
            run.tick(left, DT);
            let body = run.player_body();
            assert!(body.bottom() < 500.5, "fell at x = {}", body.position.x);
            if body.position.x <= 100.0 {
                break;
            }
        }
        assert!(run.player_position().x <= 100.0);
        assert!(run.player_body().touching.down);
    }

    #[test]
    fn test_enemy_falling_into_a_gap_is_pinned() {
        let mut run = quiet_run();
        settle(&mut run);
        // No ground out here
        let enemy = run.world.spawn_enemy(EnemyKind::Muko, Body::new(vec2(50_000.0, 340.0), vec2(70.0, 100.0)));

        for _ in 0..120 {
            run.tick(idle(), DT);
        }
        let body = *run.world.bodies.get(enemy).unwrap();
        assert!((body.position.y - 550.0).abs() < 1.0, "y = {}", body.position.y);
        assert!(body.velocity.y < 20.0);
        assert!(body.velocity.x.abs() <= 200.0);
    }

    #[test]
    fn test_enemy_in_void_wanders() {
        let mut run = quiet_run();
        settle(&mut run);
        let enemy = run.world.spawn_enemy(EnemyKind::Kader, Body::new(vec2(50_000.0, 550.0), vec2(70.0, 100.0)));

        let mut wandered = false;
        for _ in 0..600 {
            run.tick(idle(), DT);
            let vx = run.world.bodies.get(enemy).unwrap().velocity.x;
            assert!(vx.abs() <= 200.0);
            assert_eq!(vx, vx.round());
            if vx != 0.0 {
                wandered = true;
                break;
            }
        }
        assert!(wandered);
    }

    #[test]
    fn test_ground_enemy_walks_at_enemy_speed() {
        let mut run = quiet_run();
        settle(&mut run);
        // Held in the air so ground contact never touches its velocity
        let at = run.player_position() + vec2(600.0, -150.0);
        let enemy = run.world.spawn_enemy(EnemyKind::Hursit, Body::new(at, vec2(70.0, 100.0)).without_gravity());

        for _ in 0..30 {
            run.tick(idle(), DT);
            assert_eq!(run.world.bodies.get(enemy).unwrap().velocity.x, run.difficulty().enemy_velocity());
        }
        assert_eq!(run.difficulty().enemy_velocity(), -187.5);
    }

    #[test]
    fn test_void_enemy_close_to_player_hits() {
        let mut run = quiet_run();
        settle(&mut run);
        let player = run.player();
        run.world.bodies.get_mut(player).unwrap().position = vec2(50_000.0, 550.0);
        run.world.spawn_enemy(EnemyKind::Ugur, Body::new(vec2(50_200.0, 550.0), vec2(70.0, 100.0)));

        run.tick(idle(), DT);
        assert_eq!(run.lives(), 3);

        run.world.spawn_enemy(EnemyKind::Ugur, Body::new(vec2(50_030.0, 550.0), vec2(70.0, 100.0)));
        run.tick(idle(), DT);
        assert_eq!(run.lives(), 2);
        let hits: Vec<_> = run.events.player_hit.drain().collect();
        assert_eq!(hits, vec![PlayerHitEvent { lives_left: 2, in_void: true }]);
    }

    #[test]
    fn test_void_hit_ending_the_run_fires_no_stone() {
        let mut run = quiet_run();
        settle(&mut run);
        run.lives = 1;
        let player = run.player();
        run.world.bodies.get_mut(player).unwrap().position = vec2(50_000.0, 550.0);
        run.world.spawn_enemy(EnemyKind::Zehra, Body::new(vec2(50_010.0, 550.0), vec2(150.0, 100.0)));

        run.tick(Controls { shoot: true, ..Default::default() }, DT);
        assert!(run.is_game_over());
        assert_eq!(run.bullets().active_count(), 0);
    }

    #[test]
    fn test_pickup_spawns_within_ahead_range() {
        let mut run = quiet_run();
        settle(&mut run);
        let from = run.player_position().x;
        for _ in 0..50 {
            let pickup = run.spawn_pickup();
            let x = run.world.bodies.get(pickup).unwrap().position.x;
            let ahead = x - from;
            assert!((400.0..=800.0).contains(&ahead), "ahead = {}", ahead);
            assert_eq!(ahead, ahead.round());
        }
    }

    #[test]
    fn test_update_runs_fixed_steps() {
        let mut run = quiet_run();
        assert_eq!(run.update(idle(), 0.5 / 60.0), 0);
        assert_eq!(run.update(idle(), 1.6 / 60.0), 2);
        // Long stalls are capped
        assert_eq!(run.update(idle(), 2.0), MAX_STEPS_PER_FRAME);
    }

    #[test]
    fn test_shutdown_resets_state() {
        let mut run = run();
        run.tick(idle(), DT);
        run.hit_player(false);
        run.shutdown();

        assert_eq!(run.lives(), 3);
        assert!(!run.is_invulnerable());
        assert!(run.world.enemy_entities().is_empty());
    }
}
