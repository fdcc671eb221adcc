//! Arcade Physics
//!
//! Axis-aligned boxes, gravity and static separation, which is all an
//! endless runner needs. Each step:
//! 1. `integrate` applies gravity and velocity and clears touching flags
//! 2. `collide_static` pushes a body out of solid boxes along the axis of
//!    least penetration and records which side touched
//! 3. overlap checks (`Body::overlaps`) drive the gameplay callbacks

use macroquad::math::Vec2;

use super::components::{Body, Touching};

/// Below this vertical speed a bounce settles instead of jittering forever
const REST_SPEED: f32 = 30.0;

/// Apply gravity and velocity for one step of `dt` seconds
pub fn integrate(body: &mut Body, world_gravity: f32, dt: f32) {
    body.touching = Touching::default();

    if body.allow_gravity {
        body.velocity.y += (world_gravity + body.extra_gravity) * dt;
    }
    body.position += body.velocity * dt;
}

/// Push `body` out of `solid`. Returns the side of `body` that touched,
/// or `None` when they do not overlap.
pub fn separate(body: &mut Body, solid: &Body) -> Option<Touching> {
    if !body.overlaps(solid) {
        return None;
    }

    let push_left = body.right() - solid.left();
    let push_right = solid.right() - body.left();
    let push_up = body.bottom() - solid.top();
    let push_down = solid.bottom() - body.top();

    let overlap_x = push_left.min(push_right);
    let overlap_y = push_up.min(push_down);

    let mut touched = Touching::default();

    if overlap_y <= overlap_x {
        if push_up <= push_down {
            // Landed on top
            body.position.y -= push_up;
            touched.down = true;
            if body.velocity.y > 0.0 {
                body.velocity.y = settle(-body.velocity.y * body.bounce);
            }
        } else {
            // Bumped a ceiling
            body.position.y += push_down;
            touched.up = true;
            if body.velocity.y < 0.0 {
                body.velocity.y = settle(-body.velocity.y * body.bounce);
            }
        }
    } else if push_left <= push_right {
        body.position.x -= push_left;
        touched.right = true;
        body.velocity.x = body.velocity.x.min(0.0);
    } else {
        body.position.x += push_right;
        touched.left = true;
        body.velocity.x = body.velocity.x.max(0.0);
    }

    Some(touched)
}

fn settle(velocity: f32) -> f32 {
    if velocity.abs() < REST_SPEED { 0.0 } else { velocity }
}

/// Separate `body` from every solid and merge the touching flags into it
pub fn collide_static<'a>(body: &mut Body, solids: impl IntoIterator<Item = &'a Body>) {
    for solid in solids {
        if let Some(touched) = separate(body, solid) {
            body.touching.up |= touched.up;
            body.touching.down |= touched.down;
            body.touching.left |= touched.left;
            body.touching.right |= touched.right;
        }
    }
}

pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
