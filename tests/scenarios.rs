//! Integration tests for the boundary scenarios in the design (S1-S6):
//! parsing/validation through to raycasting and kinematics, exercised
//! through the public API only.

use raydoom::kinematics;
use raydoom::level::{LevelValidationError, parse_descriptor, validate};
use raydoom::raycaster::{HitSide, cast_ray};
use raydoom::world::{Face, Texture, TextureSet, World};

fn checker_textures() -> TextureSet {
    let tex = Texture::new(64, vec![0xFF_FFFF; 64 * 64]).unwrap();
    TextureSet::new(tex.clone(), tex.clone(), tex.clone(), tex).unwrap()
}

#[test]
fn s1_minimal_valid_map_spawns_and_casts_correctly() {
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
    let world = World::build(validated, checker_textures());

    assert_eq!(world.player.pos, glam::vec2(1.5, 1.5));
    assert_eq!(world.player.dir, glam::vec2(0.0, -1.0));
    assert_eq!(world.player.plane, glam::vec2(0.66, 0.0));

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
    let line_h = (768.0 / hit.perp_dist) as i32;
    assert_eq!(line_h, 2 * 768);
    assert_eq!(hit.face(), Face::North);
}

#[test]
fn s2_non_enclosed_map_is_rejected() {
    let text = "\
NO a
SO a
WE a
EA a
F 0,0,0
C 0,0,0

111
101
110
";
    let raw = parse_descriptor(text.as_bytes()).unwrap();
    let err = validate(raw).unwrap_err();
    assert!(matches!(err, LevelValidationError::GridNotEnclosed(_, _)));
}

#[test]
fn s3_two_spawns_is_rejected() {
    let text = "\
NO a
SO a
WE a
EA a
F 0,0,0
C 0,0,0

111
1N1
1S1
111
";
    let raw = parse_descriptor(text.as_bytes()).unwrap();
    let err = validate(raw).unwrap_err();
    assert_eq!(err, LevelValidationError::MultipleSpawns);
}

#[test]
fn s4_wall_sliding_blocks_diagonal_move_entirely() {
    let text = "\
NO a
SO a
WE a
EA a
F 0,0,0
C 0,0,0

111
1N1
101
111
";
    let raw = parse_descriptor(text.as_bytes()).unwrap();
    let validated = validate(raw).unwrap();
    let mut world = World::build(validated, checker_textures());

    // The north neighbor (1, 0) and east neighbor (2, 1) of the spawn cell
    // are both WALL, so a diagonal move toward that corner is blocked on
    // both axes and the player doesn't move at all.
    kinematics::translate(&mut world.player, &world.grid, 0.6, -0.6);
    assert_eq!(world.player.pos, glam::vec2(1.5, 1.5));
}

#[test]
fn s5_rotation_preserves_perpendicularity_and_length() {
    let mut player = raydoom::world::PlayerState {
        pos: glam::vec2(0.0, 0.0),
        dir: glam::vec2(1.0, 0.0),
        plane: glam::vec2(0.0, 0.66),
    };
    kinematics::rotate(&mut player, std::f32::consts::FRAC_PI_4);
    assert!((player.dir - glam::vec2(0.7071, 0.7071)).length() < 1e-3);
    assert!((player.plane - glam::vec2(-0.4667, 0.4667)).length() < 1e-3);
    assert!(player.dir.dot(player.plane).abs() < 1e-5);
    assert!((player.plane.length() - 0.66).abs() < 1e-5);
}

#[test]
fn s6_texture_orientation_flip_rule() {
    let wall_u = 0.25f32;
    let side = 64usize;
    let pre_flip = (wall_u * side as f32) as usize;
    assert_eq!(pre_flip, 16);

    // Vertical (X) hits flip only when heading east; horizontal (Y) hits
    // never flip, regardless of heading.
    let flip = |hit_side: HitSide, rdir_x: f32| matches!(hit_side, HitSide::Vertical) && rdir_x > 0.0;

    assert!(!flip(HitSide::Horizontal, 0.0)); // north-facing, rdir.y<0 case
    assert!(!flip(HitSide::Horizontal, 0.0)); // south-facing, rdir.y>0 case
    assert!(!flip(HitSide::Vertical, -1.0)); // west-facing
    assert!(flip(HitSide::Vertical, 1.0)); // east-facing
    assert_eq!(side - 1 - pre_flip, 47);
}
