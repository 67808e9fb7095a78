//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// Debounce

/// Settle time between clearing a pending press and re-sampling the
/// pin (µs). Sized for low-bounce tactile switches; a pin that has
/// gone back high after this window is treated as noise.
pub const DEBOUNCE_SETTLE_US: u32 = 20;

// Serial link

/// UART baud rate. The link runs 8 data bits, no parity, 1 stop bit.
pub const SERIAL_BAUD: u32 = 115_200;

/// Hard cap on a single outbound write (bytes). Bounds the transmit
/// loop even if a caller hands it garbage.
pub const TX_MAX_LEN: usize = 512;

/// Backing size of the inbound command byte queue. The SPSC queue
/// keeps one slot free, so usable depth is one less.
pub const RX_QUEUE_LEN: usize = 16;

// Remote commands

/// Command byte equivalent to a left button press.
pub const CMD_LEFT: u8 = b'l';

/// Command byte equivalent to a right button press.
pub const CMD_RIGHT: u8 = b'r';

// Wire strings

/// Terminator appended after every status line.
pub const STATUS_LINE_TERMINATOR: &str = "\n ";

/// Reply sent when an inbound byte is not a recognized command.
pub const INVALID_COMMAND_REPLY: &str = "COMMAND is INVALID \r\n";

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button LEFT    → P0.11  (internal pull-up, pressed = low)
//   Button RIGHT   → P0.12
//   LED 1          → P0.13  (onboard, active-low)
//   LED 2          → P0.14
//   UART TX        → P0.06
//   UART RX        → P0.08
