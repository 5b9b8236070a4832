//! Frame Driver (§4.G) — owns the `Loading → Validating → Ready → Running
//! → Shutdown` lifecycle (§3) and the per-frame tick: poll input, turn
//! intents into motion, advance the player, recolor the minimap, rasterize,
//! present. Grounded on the teacher's `sim/tic.rs` `TicRunner::pump`, fixed
//! to one tick per presented frame since this renderer has no separate
//! fixed-rate simulation clock.

use std::time::Instant;

use tracing::{debug, info};

use crate::display::{Display, InputSource};
use crate::input::Intents;
use crate::kinematics::{self, KinematicsConfig};
use crate::render::{Minimap, blit_at, draw_frame};
use crate::world::World;

/// Lifecycle states (§3). The driver only ever moves forward through
/// `Loading`/`Validating`/`Ready` once at startup; `Running`/`Shutdown`
/// alternate each call to [`FrameDriver::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Loading,
    Validating,
    Ready,
    Running,
    Shutdown,
}

pub struct FrameDriverConfig {
    pub width: usize,
    pub height: usize,
    pub minimap_scale: usize,
    pub kinematics: KinematicsConfig,
}

impl Default for FrameDriverConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            minimap_scale: 8,
            kinematics: KinematicsConfig::default(),
        }
    }
}

pub struct FrameDriver {
    world: World,
    frame: Vec<u32>,
    minimap: Minimap,
    cfg: FrameDriverConfig,
    state: Lifecycle,
    last_tick: Instant,
}

impl FrameDriver {
    /// Assembles the driver from an already-validated, already-decoded
    /// `World` (§3: `Loading`/`Validating` happen before this is called, in
    /// `main`). Construction itself represents the `Ready` transition.
    pub fn new(world: World, cfg: FrameDriverConfig) -> Self {
        info!(width = cfg.width, height = cfg.height, "frame driver ready");
        let frame = vec![0u32; cfg.width * cfg.height];
        let minimap = Minimap::new(&world, cfg.minimap_scale);
        Self {
            world,
            frame,
            minimap,
            cfg,
            state: Lifecycle::Ready,
            last_tick: Instant::now(),
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// Runs the `Running` loop until the display closes or a quit intent
    /// arrives, then transitions to `Shutdown` (§3/§4.G).
    pub fn run(&mut self, display: &mut (impl Display + InputSource)) -> anyhow::Result<()> {
        self.state = Lifecycle::Running;
        self.last_tick = Instant::now();

        while display.is_open() {
            let now = Instant::now();
            let dt = now.duration_since(self.last_tick).as_secs_f32();
            self.last_tick = now;

            let intents = display.poll().to_intents();
            if intents.contains(Intents::QUIT) {
                break;
            }
            self.tick(intents, dt);
            display.present(&self.frame)?;
        }

        self.state = Lifecycle::Shutdown;
        info!("shutting down");
        Ok(())
    }

    /// One tick: apply intents, render, update the minimap overlay (§4.G).
    fn tick(&mut self, intents: Intents, dt: f32) {
        let dt = dt.min(MAX_DT);
        let (dx, dy, dtheta) =
            kinematics::input_to_intents(&self.world.player, intents, self.cfg.kinematics, dt);
        kinematics::translate(&mut self.world.player, &self.world.grid, dx, dy);
        kinematics::rotate(&mut self.world.player, dtheta);

        draw_frame(&mut self.frame, self.cfg.width, self.cfg.height, &self.world);
        self.minimap.update(&self.world);
        blit_at(
            &mut self.frame,
            self.cfg.width,
            &self.minimap,
            MINIMAP_MARGIN,
            MINIMAP_MARGIN,
        );
        debug!(dt, dx, dy, dtheta, "tick");
    }
}

/// Clamps the per-tick delta so a stalled window (e.g. minimized, or a
/// debugger pause) doesn't fling the player through a wall on resume.
const MAX_DT: f32 = 0.1;

/// Fixed top-left pixel offset for the minimap overlay (§6).
const MINIMAP_MARGIN: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::test_support::FakeDisplay;
    use crate::level::{parse_descriptor, validate};
    use crate::world::{Texture, TextureSet};

    fn sample_world() -> World {
        let text = "\
NO ./n.xpm
SO ./s.xpm
WE ./w.xpm
EA ./e.xpm
F 220,100,0
C 225,30,0

111111
1N0001
111111
";
        let raw = parse_descriptor(text.as_bytes()).unwrap();
        let validated = validate(raw).unwrap();
        let tex = Texture::new(2, vec![0xFF_FFFF; 4]).unwrap();
        let textures = TextureSet::new(tex.clone(), tex.clone(), tex.clone(), tex).unwrap();
        World::build(validated, textures)
    }

    #[test]
    fn run_exits_on_quit_intent_without_crashing() {
        let world = sample_world();
        let mut driver = FrameDriver::new(
            world,
            FrameDriverConfig {
                width: 16,
                height: 16,
                minimap_scale: 2,
                kinematics: KinematicsConfig::default(),
            },
        );
        let mut display = FakeDisplay::open_with_quit();
        driver.run(&mut display).unwrap();
        assert_eq!(driver.state(), Lifecycle::Shutdown);
    }
}
