//! Player state (§3 Data Model) — the only part of the world mutated after
//! `Ready` (§5), and then only by [`crate::kinematics`] during a tick's
//! intent-application phase.

use glam::{Vec2, vec2};

/// The glyph a SPAWN cell carried in the grid before the World Model
/// rewrote it to OPEN (§4.C).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnDir {
    North,
    South,
    East,
    West,
}

/// Half the horizontal field-of-view tangent, fixed per spec.md §3
/// (`|plane| = 0.66`, FOV ≈ 66°).
pub const PLANE_LENGTH: f32 = 0.66;

impl SpawnDir {
    /// Initial `(dir, plane)` pair for this glyph, per the table in §3.
    pub fn initial_vectors(self) -> (Vec2, Vec2) {
        match self {
            SpawnDir::North => (vec2(0.0, -1.0), vec2(PLANE_LENGTH, 0.0)),
            SpawnDir::South => (vec2(0.0, 1.0), vec2(-PLANE_LENGTH, 0.0)),
            SpawnDir::East => (vec2(1.0, 0.0), vec2(0.0, PLANE_LENGTH)),
            SpawnDir::West => (vec2(-1.0, 0.0), vec2(0.0, -PLANE_LENGTH)),
        }
    }
}

/// Continuous player pose. `pos` is in cell units; `y` grows downward to
/// match the grid's row axis.
#[derive(Clone, Copy, Debug)]
pub struct PlayerState {
    pub pos: Vec2,
    pub dir: Vec2,
    pub plane: Vec2,
}

impl PlayerState {
    /// Spawns at the cell center (`column + 0.5, row + 0.5`) of `(col,
    /// row)`, facing `spawn_dir`. spec.md §9 flags that some original
    /// parser variants seeded the raw row/col instead of the cell center,
    /// lodging the player on a wall boundary — this mandates the
    /// cell-center fix.
    pub fn spawn(col: usize, row: usize, spawn_dir: SpawnDir) -> Self {
        let (dir, plane) = spawn_dir.initial_vectors();
        Self {
            pos: vec2(col as f32 + 0.5, row as f32 + 0.5),
            dir,
            plane,
        }
    }
}
