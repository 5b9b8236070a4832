//! Column Renderer (§4.F) — draws one vertical wall slice per screen
//! column from a [`HitRecord`], plus the ceiling/floor background fill.
//! Grounded on `raycasting.c`'s `perp_wall_dist` usage and the teacher's
//! `renderer/software.rs` column-cursor style (here there is exactly one
//! column per ray, so no cursor-stepping across a span is needed).

use crate::raycaster::{HitRecord, HitSide, cast_ray};
use crate::world::World;

/// Renders one full frame into `frame` (row-major, `0x00RRGGBB` per pixel,
/// `width * height` long) from the current `world.player` pose (§4.F.1-6).
pub fn draw_frame(frame: &mut [u32], width: usize, height: usize, world: &World) {
    debug_assert_eq!(frame.len(), width * height);

    let ceiling = world.colors.ceiling_rgb();
    let floor = world.colors.floor_rgb();
    let half = height / 2;
    for y in 0..height {
        let color = if y < half { ceiling } else { floor };
        frame[y * width..(y + 1) * width].fill(color);
    }

    for x in 0..width {
        let hit = cast_ray(
            &world.grid,
            world.player.pos,
            world.player.dir,
            world.player.plane,
            x,
            width,
        );
        draw_column(frame, width, height, x, &hit, world);
    }
}

fn draw_column(frame: &mut [u32], width: usize, height: usize, x: usize, hit: &HitRecord, world: &World) {
    let perp_dist = hit.perp_dist.max(1e-4);
    let line_h = ((height as f32 / perp_dist) as i32).max(1);

    let draw_start = (-line_h / 2 + height as i32 / 2).max(0);
    let draw_end = (line_h / 2 + height as i32 / 2).min(height as i32 - 1);
    if draw_start > draw_end {
        return;
    }

    // Exact wall-hit coordinate along the struck edge, in [0, 1) (§4.F.4).
    let wall_u = match hit.hit_side {
        HitSide::Vertical => {
            let wy = world.player.pos.y + hit.perp_dist * hit.ray_dir.y;
            wy - wy.floor()
        }
        HitSide::Horizontal => {
            let wx = world.player.pos.x + hit.perp_dist * hit.ray_dir.x;
            wx - wx.floor()
        }
    };

    let texture = world.textures.face(hit.face());
    let side = texture.side;
    let mut tex_x = (wall_u * side as f32) as usize;

    // Flip so textures read the same direction regardless of which side of
    // the wall the ray approached from. Only the vertical (X) axis flips,
    // and only for an eastbound ray (§4.F.4 flip rule, scenario S6).
    let flip = matches!(hit.hit_side, HitSide::Vertical) && hit.ray_dir.x > 0.0;
    if flip {
        tex_x = side - 1 - tex_x;
    }
    tex_x = tex_x.min(side - 1);

    let mask = side - 1;
    let step = side as f32 / line_h as f32;
    let mut tex_pos = (draw_start - height as i32 / 2 + line_h / 2) as f32 * step;

    for y in draw_start..=draw_end {
        let tex_y = (tex_pos as usize) & mask;
        frame[y as usize * width + x] = texture.texel(tex_x, tex_y);
        tex_pos += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{parse_descriptor, validate};
    use crate::world::{Texture, TextureSet};
    use glam::Vec2;

    fn minimal_world() -> crate::world::World {
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
        let tex = Texture::new(64, vec![0xFF_FFFF; 64 * 64]).unwrap();
        let textures = TextureSet::new(tex.clone(), tex.clone(), tex.clone(), tex).unwrap();
        crate::world::World::build(validated, textures)
    }

    #[test]
    fn scenario_s1_center_ray_hits_north_at_half_distance() {
        let world = minimal_world();
        let width = 640;
        let hit = cast_ray(
            &world.grid,
            world.player.pos,
            world.player.dir,
            world.player.plane,
            width / 2,
            width,
        );
        assert!((hit.perp_dist - 0.5).abs() < 1e-4);
        assert_eq!(hit.face(), crate::world::Face::North);
    }

    #[test]
    fn scenario_s6_texture_flip_rule() {
        // wallU = 0.25, T = 64 -> pre-flip texX = 16.
        let wall_u = 0.25f32;
        let side = 64usize;
        let pre_flip = (wall_u * side as f32) as usize;
        assert_eq!(pre_flip, 16);

        // North (Horizontal, rdir.y < 0): no flip.
        let north = HitRecord {
            map_x: 0,
            map_y: 0,
            hit_side: HitSide::Horizontal,
            ray_dir: Vec2::new(0.0, -1.0),
            step_x: 1,
            step_y: -1,
            perp_dist: 1.0,
        };
        assert!(!(matches!(north.hit_side, HitSide::Vertical) && north.ray_dir.x > 0.0));

        // South (Horizontal, rdir.y > 0): no flip.
        let south = HitRecord {
            ray_dir: Vec2::new(0.0, 1.0),
            step_y: 1,
            ..north
        };
        assert!(!(matches!(south.hit_side, HitSide::Vertical) && south.ray_dir.x > 0.0));

        // West (Vertical, rdir.x < 0): no flip.
        let west = HitRecord {
            hit_side: HitSide::Vertical,
            ray_dir: Vec2::new(-1.0, 0.0),
            step_x: -1,
            ..north
        };
        assert!(!(matches!(west.hit_side, HitSide::Vertical) && west.ray_dir.x > 0.0));

        // East (Vertical, rdir.x > 0): flip -> texX = T - 1 - 16 = 47.
        let east = HitRecord {
            hit_side: HitSide::Vertical,
            ray_dir: Vec2::new(1.0, 0.0),
            step_x: 1,
            ..north
        };
        let flip = matches!(east.hit_side, HitSide::Vertical) && east.ray_dir.x > 0.0;
        assert!(flip);
        assert_eq!(side - 1 - pre_flip, 47);
    }
}
