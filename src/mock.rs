//! Mock hardware for host-side tests.
//!
//! In-memory stand-ins for the pin, delay, and serial seams so the
//! debounce and dispatch paths can be exercised without an nRF52840
//! attached. Each mock tracks just enough state for test verification.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use heapless::Vec;

use crate::serial::SerialLink;

/// Simulated button pin. Active-low, like the real switches.
#[derive(Debug)]
pub struct MockPin {
    low: bool,
    reads: u32,
}

impl MockPin {
    /// New pin in the released (high) state.
    pub const fn released() -> Self {
        Self {
            low: false,
            reads: 0,
        }
    }

    /// New pin in the pressed (low) state.
    pub const fn pressed() -> Self {
        Self {
            low: true,
            reads: 0,
        }
    }

    /// Drive the simulated level: `true` = pressed (low).
    pub fn set_pressed(&mut self, pressed: bool) {
        self.low = pressed;
    }

    /// How many times the pin has been sampled.
    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.reads += 1;
        Ok(!self.low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.reads += 1;
        Ok(self.low)
    }
}

/// Simulated status LED; remembers the last driven level.
#[derive(Debug)]
pub struct MockLed {
    on: bool,
}

impl MockLed {
    /// New LED, dark.
    pub const fn new() -> Self {
        Self { on: false }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl ErrorType for MockLed {
    type Error = Infallible;
}

impl OutputPin for MockLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.on = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.on = true;
        Ok(())
    }
}

/// Delay that only records what was asked of it.
#[derive(Debug)]
pub struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    pub const fn new() -> Self {
        Self { total_ns: 0 }
    }

    /// Total settle time requested so far, in microseconds.
    pub fn total_us(&self) -> u32 {
        (self.total_ns / 1_000) as u32
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// Capture-everything serial link.
///
/// `with_busy_polls(n)` makes `transmit_ready` report not-ready `n`
/// times before every byte, to exercise the transmit busy-wait.
#[derive(Debug)]
pub struct MockSerial {
    tx: Vec<u8, 2048>,
    busy_polls: u32,
    remaining_busy: u32,
    ready_polls: u32,
}

impl MockSerial {
    pub const fn new() -> Self {
        Self {
            tx: Vec::new(),
            busy_polls: 0,
            remaining_busy: 0,
            ready_polls: 0,
        }
    }

    /// Link that reports not-ready `n` times before each byte.
    pub const fn with_busy_polls(n: u32) -> Self {
        Self {
            tx: Vec::new(),
            busy_polls: n,
            remaining_busy: n,
            ready_polls: 0,
        }
    }

    /// Everything transmitted so far.
    pub fn tx(&self) -> &[u8] {
        &self.tx
    }

    /// Number of `transmit_ready` polls observed, ready or not.
    pub fn ready_polls(&self) -> u32 {
        self.ready_polls
    }

    /// Forget captured traffic (poll counters keep running).
    pub fn clear(&mut self) {
        self.tx.clear();
    }
}

impl SerialLink for MockSerial {
    fn transmit_ready(&mut self) -> bool {
        self.ready_polls += 1;
        if self.remaining_busy > 0 {
            self.remaining_busy -= 1;
            false
        } else {
            true
        }
    }

    fn transmit_byte(&mut self, byte: u8) {
        // Capture buffer overflow just truncates; tests size it amply.
        let _ = self.tx.push(byte);
        self.remaining_busy = self.busy_polls;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_pin_levels_and_read_count() {
        let mut pin = MockPin::released();
        assert!(pin.is_high().unwrap());

        pin.set_pressed(true);
        assert!(pin.is_low().unwrap());
        assert_eq!(pin.reads(), 2);
    }

    #[test]
    fn mock_led_tracks_last_level() {
        let mut led = MockLed::new();
        assert!(!led.is_on());

        led.set_high().unwrap();
        assert!(led.is_on());

        led.set_low().unwrap();
        assert!(!led.is_on());
    }

    #[test]
    fn mock_serial_busy_window_resets_per_byte() {
        let mut link = MockSerial::with_busy_polls(2);

        assert!(!link.transmit_ready());
        assert!(!link.transmit_ready());
        assert!(link.transmit_ready());
        link.transmit_byte(b'a');

        // Next byte has to wait out the window again.
        assert!(!link.transmit_ready());
        assert_eq!(link.tx(), b"a");
    }
}
