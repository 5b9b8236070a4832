//! Minimap Overlay (§4.H) — top-down grid view with the player marked as a
//! dot, repainted once in full and thereafter only where a cell's paint
//! actually changes. Grounded on `minimap.c`'s `draw_minimap_display` /
//! `update_minimap_player_position` incremental-repaint split.

use crate::world::{CellKind, World};

const COLOR_WALL: u32 = 0x00_0000;
const COLOR_VOID: u32 = 0x55_5555;
const COLOR_PLAYER: u32 = 0xFF_0000;

/// Renders the minimap into its own `scale*width` x `scale*height` buffer,
/// tracking the player's last-painted cell so only two cells (old, new) are
/// touched on a repaint instead of the whole grid (§4.H.2-3).
pub struct Minimap {
    scale: usize,
    grid_w: usize,
    grid_h: usize,
    buf: Vec<u32>,
    last_cell: Option<(usize, usize)>,
}

impl Minimap {
    pub fn new(world: &World, scale: usize) -> Self {
        let grid_w = world.grid.width();
        let grid_h = world.grid.height();
        let mut minimap = Self {
            scale,
            grid_w,
            grid_h,
            buf: vec![0; grid_w * scale * grid_h * scale],
            last_cell: None,
        };
        minimap.paint_all(world);
        minimap
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid_w * self.scale
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid_h * self.scale
    }

    pub fn buffer(&self) -> &[u32] {
        &self.buf
    }

    fn cell_color(world: &World, x: usize, y: usize) -> u32 {
        match world.grid.get(x, y) {
            Some(CellKind::Wall) => COLOR_WALL,
            Some(CellKind::Open) | Some(CellKind::Spawn(_)) => world.colors.ceiling_rgb(),
            Some(CellKind::Void) | None => COLOR_VOID,
        }
    }

    fn paint_cell(&mut self, x: usize, y: usize, color: u32) {
        let x0 = x * self.scale;
        let y0 = y * self.scale;
        for row in 0..self.scale {
            let start = (y0 + row) * self.width() + x0;
            self.buf[start..start + self.scale].fill(color);
        }
    }

    /// Initial full repaint, by cell type (§4.H.1).
    fn paint_all(&mut self, world: &World) {
        for y in 0..self.grid_h {
            for x in 0..self.grid_w {
                self.paint_cell(x, y, Self::cell_color(world, x, y));
            }
        }
    }

    /// Repaints only the cells whose paint actually changed: the player's
    /// previous cell (restored to its terrain color) and current cell
    /// (marked as the player), and only when the floored player position
    /// has moved to a new cell since the last call (§4.H.2-3).
    pub fn update(&mut self, world: &World) {
        let cur = (
            world.player.pos.x.floor() as usize,
            world.player.pos.y.floor() as usize,
        );
        if self.last_cell == Some(cur) {
            return;
        }
        if let Some((px, py)) = self.last_cell {
            self.paint_cell(px, py, Self::cell_color(world, px, py));
        }
        self.paint_cell(cur.0, cur.1, COLOR_PLAYER);
        self.last_cell = Some(cur);
    }
}
