//! Input Intent Mapper (§4.D/§4.I) — translates raw key state into a
//! frame-rate-independent set of movement/turn/quit intents. Grounded on
//! the teacher's `defs/flags.rs` `LinedefFlags` bitflags pattern.

use bitflags::bitflags;

bitflags! {
    /// One bit per discrete intent a frame can carry. Several bits may be
    /// set at once (e.g. forward + strafe-right for a diagonal step).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Intents: u8 {
        const FORWARD      = 1 << 0;
        const BACK         = 1 << 1;
        const STRAFE_LEFT  = 1 << 2;
        const STRAFE_RIGHT = 1 << 3;
        const TURN_LEFT    = 1 << 4;
        const TURN_RIGHT   = 1 << 5;
        const QUIT         = 1 << 6;
    }
}

/// Raw, polled key state for the keys this renderer understands. Decoupled
/// from any particular windowing backend so [`crate::display`] is the only
/// module that knows about `minifb::Key`.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyState {
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub quit: bool,
}

impl KeyState {
    /// Folds raw key state into an [`Intents`] bitset (§4.D `input_to_intents`
    /// preprocessing step).
    pub fn to_intents(self) -> Intents {
        let mut intents = Intents::empty();
        intents.set(Intents::FORWARD, self.forward);
        intents.set(Intents::BACK, self.back);
        intents.set(Intents::STRAFE_LEFT, self.strafe_left);
        intents.set(Intents::STRAFE_RIGHT, self.strafe_right);
        intents.set(Intents::TURN_LEFT, self.turn_left);
        intents.set(Intents::TURN_RIGHT, self.turn_right);
        intents.set(Intents::QUIT, self.quit);
        intents
    }
}
