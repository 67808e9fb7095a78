//! Pure mapping from device state to observable output.
//!
//! Nothing here touches hardware: the caller pushes the projected LED
//! levels to the pins and the message to the serial link. Recomputed on
//! every transition, never stored.

use super::DeviceState;

/// Everything one transition makes observable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Projection {
    /// Level for LED-1 (bit 1 of the state code).
    pub led1: bool,
    /// Level for LED-2 (bit 0 of the state code).
    pub led2: bool,
    /// Fixed status line for this state. The line terminator is added
    /// by the serial writer, not here.
    pub message: &'static str,
}

/// Project a state onto its LED pattern and status message.
pub const fn project(state: DeviceState) -> Projection {
    let code = state.code();
    Projection {
        led1: code & 0b10 != 0,
        led2: code & 0b01 != 0,
        message: match state {
            DeviceState::One => "Device state: 1",
            DeviceState::Two => "Device state: 2",
            DeviceState::Three => "Device state: 3",
            DeviceState::Four => "Device state: 4",
        },
    }
}
