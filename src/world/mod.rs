//! World Model (§4.C) — in-memory, immutable-after-load representation of
//! the grid, textures, and colors, plus the one mutable piece of state:
//! [`PlayerState`].

pub mod color;
pub mod grid;
pub mod player;
pub mod texture;

pub use color::ColorPair;
pub use grid::{CellKind, Grid};
pub use player::{PLANE_LENGTH, PlayerState, SpawnDir};
pub use texture::{Face, Texture, TextureError, TextureSet};

use crate::level::ValidatedLevel;

/// The assembled, playable level: read-only geometry/assets plus the one
/// mutable field, `player`. Built once after validation (§3 Lifecycle);
/// thereafter the Frame Driver mutates only `player`, and only during a
/// tick's intent-application phase.
pub struct World {
    pub grid: Grid,
    pub textures: TextureSet,
    pub colors: ColorPair,
    pub player: PlayerState,
}

impl World {
    /// Assembles the world from a validated descriptor and already-decoded
    /// textures. Rewrites the SPAWN cell to OPEN so the raycaster and
    /// kinematics see a uniform open interior (§4.C).
    pub fn build(mut level: ValidatedLevel, textures: TextureSet) -> Self {
        level
            .grid
            .set(level.spawn_col, level.spawn_row, CellKind::Open);
        let player = PlayerState::spawn(level.spawn_col, level.spawn_row, level.spawn_dir);
        let colors = ColorPair::new(level.ceiling, level.floor);
        World {
            grid: level.grid,
            textures,
            colors,
            player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{parse_descriptor, validate};

    fn checker(side: usize) -> Texture {
        Texture::new(side, vec![0xFF_FFFF; side * side]).unwrap()
    }

    #[test]
    fn build_rewrites_spawn_to_open() {
        let text = "\
NO ./n.xpm
SO ./s.xpm
WE ./w.xpm
EA ./e.xpm
F 220,100,0
C 225,30,0

111
1N1
111
";
        let raw = parse_descriptor(text.as_bytes()).unwrap();
        let validated = validate(raw).unwrap();
        let textures = TextureSet::new(checker(4), checker(4), checker(4), checker(4)).unwrap();
        let world = World::build(validated, textures);
        assert_eq!(world.grid.get(1, 1), Some(CellKind::Open));
        assert_eq!(world.player.pos, glam::vec2(1.5, 1.5));
    }
}
