//! Display/Input abstraction (§4.G) — isolates the Frame Driver from
//! `minifb` so the lifecycle state machine and tick logic stay testable
//! without a real window. Grounded on the teacher's `src/bin/view_sw.rs`
//! key-polling style.

use minifb::{Key, Window, WindowOptions};

use crate::input::KeyState;

/// A frame sink: presents an `0x00RRGGBB` pixel buffer and reports whether
/// the window is still open.
pub trait Display {
    fn present(&mut self, frame: &[u32]) -> anyhow::Result<()>;
    fn is_open(&self) -> bool;
}

/// Polls raw key state once per tick.
pub trait InputSource {
    fn poll(&self) -> KeyState;
}

/// `minifb`-backed window, the only concrete [`Display`]/[`InputSource`]
/// this crate ships.
pub struct MinifbWindow {
    window: Window,
    width: usize,
    height: usize,
}

impl MinifbWindow {
    pub fn new(title: &str, width: usize, height: usize, target_fps: usize) -> anyhow::Result<Self> {
        let mut window = Window::new(title, width, height, WindowOptions::default())?;
        window.set_target_fps(target_fps);
        Ok(Self {
            window,
            width,
            height,
        })
    }
}

impl Display for MinifbWindow {
    fn present(&mut self, frame: &[u32]) -> anyhow::Result<()> {
        self.window
            .update_with_buffer(frame, self.width, self.height)?;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }
}

impl InputSource for MinifbWindow {
    fn poll(&self) -> KeyState {
        KeyState {
            forward: self.window.is_key_down(Key::Up) || self.window.is_key_down(Key::W),
            back: self.window.is_key_down(Key::Down) || self.window.is_key_down(Key::S),
            strafe_left: self.window.is_key_down(Key::A),
            strafe_right: self.window.is_key_down(Key::D),
            turn_left: self.window.is_key_down(Key::Left),
            turn_right: self.window.is_key_down(Key::Right),
            quit: self.window.is_key_down(Key::Escape),
        }
    }
}

/// A headless [`Display`]/[`InputSource`] stand-in so the Frame Driver's
/// lifecycle logic can be exercised without opening a real window. Shared
/// across this module's and `driver`'s tests.
#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub struct FakeDisplay {
        pub open: bool,
        pub frames_presented: usize,
        pub keys: KeyState,
    }

    impl FakeDisplay {
        /// Starts open, but reports a quit key on the first poll so a
        /// driver's `run` loop exits after exactly one tick.
        pub fn open_with_quit() -> Self {
            Self {
                open: true,
                frames_presented: 0,
                keys: KeyState {
                    quit: true,
                    ..Default::default()
                },
            }
        }
    }

    impl Display for FakeDisplay {
        fn present(&mut self, _frame: &[u32]) -> anyhow::Result<()> {
            self.frames_presented += 1;
            Ok(())
        }

        fn is_open(&self) -> bool {
            self.open
        }
    }

    impl InputSource for FakeDisplay {
        fn poll(&self) -> KeyState {
            self.keys
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::FakeDisplay;
    use crate::input::Intents;

    #[test]
    fn fake_display_reports_quit_via_intents() {
        use crate::display::InputSource;
        let display = FakeDisplay::open_with_quit();
        assert!(display.poll().to_intents().contains(Intents::QUIT));
    }
}
