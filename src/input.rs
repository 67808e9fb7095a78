//! Debounced push-button input.
//!
//! Edge interrupts only mark a button as pending; the dispatch loop
//! later runs the slow part - wait out the settle window, re-sample
//! the pin - from its own context. A pin that has gone back high by
//! the recheck is bounce noise and is dropped without comment.
//!
//! The two pending flags are the only state shared between interrupt
//! and dispatch context, one atomic bool each.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::DEBOUNCE_SETTLE_US;
use crate::error::Error;
use crate::fsm::Event;

/// The two physical buttons. Both sit behind internal pull-ups, so
/// pressed = pin low.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Left,
    Right,
}

impl ButtonId {
    /// The event a confirmed press of this button injects.
    pub const fn event(self) -> Event {
        match self {
            ButtonId::Left => Event::LeftPress,
            ButtonId::Right => Event::RightPress,
        }
    }
}

/// Pending-press flags shared between edge context and the dispatch
/// loop.
///
/// [`on_edge_detected`](Self::on_edge_detected) is the only entry point
/// meant for interrupt priority; it just marks the button and returns.
pub struct DebounceGate {
    left_pending: AtomicBool,
    right_pending: AtomicBool,
}

impl DebounceGate {
    pub const fn new() -> Self {
        Self {
            left_pending: AtomicBool::new(false),
            right_pending: AtomicBool::new(false),
        }
    }

    fn flag(&self, button: ButtonId) -> &AtomicBool {
        match button {
            ButtonId::Left => &self.left_pending,
            ButtonId::Right => &self.right_pending,
        }
    }

    /// Record a falling edge on `button`. Non-blocking; safe to call at
    /// interrupt priority.
    pub fn on_edge_detected(&self, button: ButtonId) {
        self.flag(button).store(true, Ordering::Release);
    }

    /// Whether a press on `button` is waiting for confirmation.
    pub fn is_pending(&self, button: ButtonId) -> bool {
        self.flag(button).load(Ordering::Acquire)
    }

    /// Confirm or reject a pending press.
    ///
    /// Clears the pending flag, waits `DEBOUNCE_SETTLE_US`, then
    /// re-samples the pin. Returns the button's event if the pin still
    /// reads pressed (low); `None` if the flag was not set or the press
    /// did not survive the recheck.
    pub fn poll_and_confirm<P, D>(
        &self,
        button: ButtonId,
        pin: &mut P,
        delay: &mut D,
    ) -> Result<Option<Event>, Error>
    where
        P: InputPin,
        D: DelayNs,
    {
        if !self.flag(button).swap(false, Ordering::AcqRel) {
            return Ok(None);
        }

        delay.delay_us(DEBOUNCE_SETTLE_US);

        let pressed = pin.is_low().map_err(|_| Error::ButtonRead)?;
        if pressed {
            Ok(Some(button.event()))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockPin};

    #[test]
    fn edge_marks_only_the_reported_button() {
        let gate = DebounceGate::new();
        assert!(!gate.is_pending(ButtonId::Left));
        assert!(!gate.is_pending(ButtonId::Right));

        gate.on_edge_detected(ButtonId::Left);
        assert!(gate.is_pending(ButtonId::Left));
        assert!(!gate.is_pending(ButtonId::Right));
    }

    #[test]
    fn confirm_returns_event_while_pin_still_pressed() {
        let gate = DebounceGate::new();
        let mut pin = MockPin::pressed();
        let mut delay = MockDelay::new();

        gate.on_edge_detected(ButtonId::Right);
        let event = gate
            .poll_and_confirm(ButtonId::Right, &mut pin, &mut delay)
            .unwrap();

        assert_eq!(event, Some(Event::RightPress));
        assert!(!gate.is_pending(ButtonId::Right));
    }

    #[test]
    fn confirm_drops_press_released_during_settle() {
        let gate = DebounceGate::new();
        let mut pin = MockPin::released();
        let mut delay = MockDelay::new();

        gate.on_edge_detected(ButtonId::Left);
        let event = gate
            .poll_and_confirm(ButtonId::Left, &mut pin, &mut delay)
            .unwrap();

        assert_eq!(event, None);
        assert!(!gate.is_pending(ButtonId::Left));
    }

    #[test]
    fn confirm_without_pending_flag_never_samples() {
        let gate = DebounceGate::new();
        let mut pin = MockPin::pressed();
        let mut delay = MockDelay::new();

        let event = gate
            .poll_and_confirm(ButtonId::Left, &mut pin, &mut delay)
            .unwrap();

        assert_eq!(event, None);
        assert_eq!(pin.reads(), 0);
        assert_eq!(delay.total_us(), 0);
    }

    #[test]
    fn confirm_waits_the_settle_window() {
        let gate = DebounceGate::new();
        let mut pin = MockPin::pressed();
        let mut delay = MockDelay::new();

        gate.on_edge_detected(ButtonId::Left);
        gate.poll_and_confirm(ButtonId::Left, &mut pin, &mut delay)
            .unwrap();

        assert_eq!(delay.total_us(), DEBOUNCE_SETTLE_US);
    }
}
