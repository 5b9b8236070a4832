//! Player Kinematics (§4.D) — translation with axis-independent wall
//! sliding, and matrix-based view rotation. Grounded on the teacher's
//! `world/camera.rs` (rotation, `step`) and `sim/collision.rs` (slide
//! against solid geometry), simplified from segment-based collision to the
//! grid `blocked(a, b)` contract spec.md §4.D specifies.

use glam::Vec2;

use crate::input::Intents;
use crate::world::{Grid, PlayerState};

/// Movement/turn speed constants, expressed per tick (§4.D).
#[derive(Clone, Copy, Debug)]
pub struct KinematicsConfig {
    pub move_speed: f32,
    pub rotate_speed: f32,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            rotate_speed: 2.0,
        }
    }
}

/// Derives `(dx, dy, theta)` for one tick from the current intent set,
/// forward/back along `dir`, strafe along `plane`'s direction, turn by
/// ±rotate_speed (§4.D `input_to_intents`).
pub fn input_to_intents(
    player: &PlayerState,
    intents: Intents,
    cfg: KinematicsConfig,
    dt: f32,
) -> (f32, f32, f32) {
    let mut move_dir = Vec2::ZERO;
    if intents.contains(Intents::FORWARD) {
        move_dir += player.dir;
    }
    if intents.contains(Intents::BACK) {
        move_dir -= player.dir;
    }
    let strafe_dir = player.plane.normalize_or_zero();
    if intents.contains(Intents::STRAFE_RIGHT) {
        move_dir += strafe_dir;
    }
    if intents.contains(Intents::STRAFE_LEFT) {
        move_dir -= strafe_dir;
    }
    let delta = move_dir * cfg.move_speed * dt;

    let mut turn = 0.0f32;
    if intents.contains(Intents::TURN_LEFT) {
        turn -= cfg.rotate_speed * dt;
    }
    if intents.contains(Intents::TURN_RIGHT) {
        turn += cfg.rotate_speed * dt;
    }

    (delta.x, delta.y, turn)
}

/// `true` if the cell containing world point `(x, y)` is a wall, or
/// out-of-bounds (§4.D `blocked`).
fn blocked(grid: &Grid, x: f32, y: f32) -> bool {
    grid.is_wall(x.floor() as i32, y.floor() as i32)
}

/// Attempts to move the player by `(dx, dy)` in world space, applying
/// axis-independent wall sliding (§4.D translation contract).
pub fn translate(player: &mut PlayerState, grid: &Grid, dx: f32, dy: f32) {
    if dx == 0.0 && dy == 0.0 {
        return;
    }

    let px = player.pos.x;
    let py = player.pos.y;
    let tx = px + dx;
    let ty = py + dy;

    let bx = blocked(grid, tx, py);
    let by = blocked(grid, px, ty);
    let bd = blocked(grid, tx, ty);

    let mut new_pos = player.pos;

    if dx != 0.0 && dy != 0.0 {
        if bd {
            if !bx {
                new_pos.x = tx;
            } else if !by {
                new_pos.y = ty;
            }
        } else {
            if !bx {
                new_pos.x = tx;
            }
            if !by {
                new_pos.y = ty;
            }
        }
    } else if dx != 0.0 {
        if !bx {
            new_pos.x = tx;
        }
    } else if !by {
        new_pos.y = ty;
    }

    // Post-condition guard (§4.D step 6): defense-in-depth against ending
    // up inside a wall.
    if blocked(grid, new_pos.x, new_pos.y) {
        return;
    }
    player.pos = new_pos;
}

/// Rotates both `dir` and `plane` by `theta` radians (positive =
/// counter-clockwise in screen coordinates), preserving `|plane|`/`|dir|`
/// and their perpendicularity (§4.D rotation algorithm).
pub fn rotate(player: &mut PlayerState, theta: f32) {
    let (s, c) = theta.sin_cos();

    let old_dir_x = player.dir.x;
    player.dir.x = player.dir.x * c - player.dir.y * s;
    player.dir.y = old_dir_x * s + player.dir.y * c;

    let old_plane_x = player.plane.x;
    player.plane.x = player.plane.x * c - player.plane.y * s;
    player.plane.y = old_plane_x * s + player.plane.y * c;
}
