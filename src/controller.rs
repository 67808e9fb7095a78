//! Device controller - owns the state machine and pushes every
//! transition out to the LEDs and the serial link.
//!
//! Exactly one `Controller` exists; the dispatch loop in `main.rs`
//! drives it, so the device state has a single writer. Button presses
//! and remote commands both funnel through
//! [`handle_event`](Controller::handle_event), which renders once per
//! accepted event.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::config::INVALID_COMMAND_REPLY;
use crate::error::Error;
use crate::fsm::{self, projection, DeviceState, Event};
use crate::input::{ButtonId, DebounceGate};
use crate::serial::{self, CommandQueue, SerialLink};

/// Owns the device state and the output peripherals.
pub struct Controller<L1, L2, S> {
    state: DeviceState,
    led1: L1,
    led2: L2,
    link: S,
}

impl<L1, L2, S> Controller<L1, L2, S>
where
    L1: OutputPin,
    L2: OutputPin,
    S: SerialLink,
{
    /// Create the controller in the boot state.
    ///
    /// Boot state is `One` (code 0b00): both LEDs stay dark and nothing
    /// goes out on the wire until the first accepted event, matching
    /// the hardware's power-on appearance.
    pub fn new(led1: L1, led2: L2, link: S) -> Self {
        Self {
            state: DeviceState::One,
            led1,
            led2,
            link,
        }
    }

    /// Current device state.
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Borrow the serial link, e.g. to inspect a mock in host tests.
    pub fn link(&self) -> &S {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut S {
        &mut self.link
    }

    /// Tear down, handing back the LED pins and the serial link.
    pub fn release(self) -> (L1, L2, S) {
        (self.led1, self.led2, self.link)
    }

    /// Apply one confirmed event: advance the state machine, then
    /// render LED levels and the status line.
    ///
    /// Renders exactly once per call, even if a future table revision
    /// were to map some (state, event) pair back onto the same state.
    pub fn handle_event(&mut self, event: Event) -> Result<(), Error> {
        self.state = fsm::transition(self.state, event);
        self.render()
    }

    /// Decode one inbound serial byte.
    ///
    /// Recognized commands inject the same events as physical presses;
    /// anything else gets the fixed invalid-command reply and leaves
    /// the state untouched.
    pub fn handle_serial_byte(&mut self, byte: u8) -> Result<(), Error> {
        match serial::decode_byte(byte) {
            Some(event) => self.handle_event(event),
            None => {
                // Reply carries its own terminator.
                serial::send_str(&mut self.link, INVALID_COMMAND_REPLY);
                Ok(())
            }
        }
    }

    /// One dispatch pass over the pending-press flags.
    ///
    /// Left is checked before Right and at most one button is serviced
    /// per call; the caller re-checks both on its next loop iteration.
    /// Returns whether a flag was consumed (whether or not the press
    /// survived debouncing).
    pub fn service_buttons<LP, RP, D>(
        &mut self,
        gate: &DebounceGate,
        left: &mut LP,
        right: &mut RP,
        delay: &mut D,
    ) -> Result<bool, Error>
    where
        LP: InputPin,
        RP: InputPin,
        D: DelayNs,
    {
        if gate.is_pending(ButtonId::Left) {
            if let Some(event) = gate.poll_and_confirm(ButtonId::Left, left, delay)? {
                self.handle_event(event)?;
            }
            return Ok(true);
        }

        if gate.is_pending(ButtonId::Right) {
            if let Some(event) = gate.poll_and_confirm(ButtonId::Right, right, delay)? {
                self.handle_event(event)?;
            }
            return Ok(true);
        }

        Ok(false)
    }

    /// Feed every byte buffered by the receive side into the decoder.
    pub fn drain_commands(&mut self, queue: &mut CommandQueue) -> Result<(), Error> {
        while let Some(byte) = queue.dequeue() {
            self.handle_serial_byte(byte)?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), Error> {
        let view = projection::project(self.state);

        self.led1
            .set_state(PinState::from(view.led1))
            .map_err(|_| Error::LedWrite)?;
        self.led2
            .set_state(PinState::from(view.led2))
            .map_err(|_| Error::LedWrite)?;

        serial::send_status_line(&mut self.link, view.message);
        Ok(())
    }
}
