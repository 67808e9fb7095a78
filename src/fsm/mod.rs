//! Device state machine - the single authoritative transition function.
//!
//! Four states arranged in a cycle; a right press rotates one way, a
//! left press the other. Both physical buttons and remote serial
//! commands inject the same [`Event`]s, so every state change goes
//! through [`transition`] no matter where it originated.

pub mod projection;


/// The four device states.
///
/// [`code`](DeviceState::code) yields the 2-bit encoding shared by the
/// LED pattern and the status line digit: bit 1 drives LED-1, bit 0
/// drives LED-2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    One,
    Two,
    Three,
    Four,
}

impl DeviceState {
    /// 2-bit wire/LED encoding (`0b00..=0b11`).
    pub const fn code(self) -> u8 {
        match self {
            DeviceState::One => 0b00,
            DeviceState::Two => 0b01,
            DeviceState::Three => 0b10,
            DeviceState::Four => 0b11,
        }
    }
}

/// Input events, produced by the debounce gate or the command decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    LeftPress,
    RightPress,
}

/// Advance the state machine by one event.
///
/// `RightPress` rotates One → Two → Three → Four → One; `LeftPress`
/// rotates the opposite direction, so the two events are inverses from
/// every state. The match is exhaustive over both enums - no input can
/// reach an undefined transition.
pub const fn transition(state: DeviceState, event: Event) -> DeviceState {
    use DeviceState::*;

    match (state, event) {
        (One, Event::LeftPress) => Four,
        (One, Event::RightPress) => Two,
        (Two, Event::LeftPress) => One,
        (Two, Event::RightPress) => Three,
        (Three, Event::LeftPress) => Two,
        (Three, Event::RightPress) => Four,
        (Four, Event::LeftPress) => Three,
        (Four, Event::RightPress) => One,
    }
}
