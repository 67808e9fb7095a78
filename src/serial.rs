//! Serial command channel - inbound command decoding and the outbound
//! status path.
//!
//! Inbound: the receive side only pushes raw bytes into a
//! [`CommandQueue`]; the dispatch loop drains and decodes them, so
//! remote commands and physical buttons reach the state machine
//! through the same single writer. Unrecognized bytes get a fixed
//! reply and change nothing.
//!
//! Outbound: per-byte busy-wait writes against the peripheral's
//! transmit-ready flag, bounded by an embedded NUL or
//! [`TX_MAX_LEN`](crate::config::TX_MAX_LEN) bytes.

use heapless::spsc::Queue;

use crate::config::{CMD_LEFT, CMD_RIGHT, RX_QUEUE_LEN, STATUS_LINE_TERMINATOR, TX_MAX_LEN};
use crate::fsm::Event;

/// Byte-level UART transmit surface.
///
/// Mirrors the two hardware primitives the outbound path needs: a
/// transmit-ready poll and a single-byte write. Implemented by the
/// UARTE wrapper in `main.rs` and by [`MockSerial`](crate::mock::MockSerial)
/// for host tests.
pub trait SerialLink {
    /// True when the peripheral can accept the next byte.
    fn transmit_ready(&mut self) -> bool;

    /// Write one byte. Only called after `transmit_ready` returned true.
    fn transmit_byte(&mut self, byte: u8);
}

/// Decode one inbound byte into a button-equivalent event.
///
/// Anything other than the two command bytes decodes to `None`; the
/// caller is responsible for the invalid-command reply.
pub const fn decode_byte(byte: u8) -> Option<Event> {
    match byte {
        CMD_LEFT => Some(Event::LeftPress),
        CMD_RIGHT => Some(Event::RightPress),
        _ => None,
    }
}

/// Write `text` one byte at a time, spinning on `transmit_ready`
/// before each byte.
///
/// Stops at an embedded NUL or after `TX_MAX_LEN` bytes, whichever
/// comes first.
pub fn send_str<S: SerialLink>(link: &mut S, text: &str) {
    for &byte in text.as_bytes().iter().take(TX_MAX_LEN) {
        if byte == 0 {
            break;
        }
        while !link.transmit_ready() {
            core::hint::spin_loop();
        }
        link.transmit_byte(byte);
    }
}

/// Write a status line: the message followed by the line terminator.
pub fn send_status_line<S: SerialLink>(link: &mut S, message: &str) {
    send_str(link, message);
    send_str(link, STATUS_LINE_TERMINATOR);
}

/// Fixed-capacity FIFO carrying raw inbound bytes from the receive
/// context to the dispatch loop.
///
/// A full queue rejects the newest byte, keeping the receive side
/// non-blocking; the embedded caller logs the drop.
pub struct CommandQueue {
    inner: Queue<u8, RX_QUEUE_LEN>,
}

impl CommandQueue {
    pub const fn new() -> Self {
        Self {
            inner: Queue::new(),
        }
    }

    /// Push an inbound byte; `Err` hands the byte back when the queue
    /// is full.
    pub fn enqueue(&mut self, byte: u8) -> Result<(), u8> {
        self.inner.enqueue(byte)
    }

    /// Pop the oldest buffered byte.
    pub fn dequeue(&mut self) -> Option<u8> {
        self.inner.dequeue()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::INVALID_COMMAND_REPLY;
    use crate::mock::MockSerial;

    #[test]
    fn decode_recognizes_the_two_command_bytes() {
        assert_eq!(decode_byte(b'l'), Some(Event::LeftPress));
        assert_eq!(decode_byte(b'r'), Some(Event::RightPress));
    }

    #[test]
    fn decode_rejects_everything_else() {
        assert_eq!(decode_byte(b'x'), None);
        assert_eq!(decode_byte(b'L'), None);
        assert_eq!(decode_byte(b'R'), None);
        assert_eq!(decode_byte(0x00), None);
        assert_eq!(decode_byte(0xFF), None);
    }

    #[test]
    fn send_str_writes_every_byte_in_order() {
        let mut link = MockSerial::new();
        send_str(&mut link, "Device state: 3");
        assert_eq!(link.tx(), b"Device state: 3");
    }

    #[test]
    fn send_str_spins_until_transmit_ready() {
        // Not-ready three times before each byte: 4 polls per byte, and
        // every byte still lands exactly once.
        let mut link = MockSerial::with_busy_polls(3);
        send_str(&mut link, "ok");

        assert_eq!(link.tx(), b"ok");
        assert_eq!(link.ready_polls(), 8);
    }

    #[test]
    fn send_str_stops_at_embedded_nul() {
        let mut link = MockSerial::new();
        send_str(&mut link, "AB\0CD");
        assert_eq!(link.tx(), b"AB");
    }

    #[test]
    fn send_str_caps_at_tx_max_len() {
        let long = [b'A'; TX_MAX_LEN + 100];
        let text = core::str::from_utf8(&long).unwrap();

        let mut link = MockSerial::new();
        send_str(&mut link, text);
        assert_eq!(link.tx().len(), TX_MAX_LEN);
    }

    #[test]
    fn status_line_carries_the_wire_terminator() {
        let mut link = MockSerial::new();
        send_status_line(&mut link, "Device state: 2");
        assert_eq!(link.tx(), b"Device state: 2\n ");
    }

    #[test]
    fn invalid_reply_constant_matches_the_wire_format() {
        // The reply carries its own terminator; it is sent raw, not as
        // a status line.
        assert_eq!(INVALID_COMMAND_REPLY, "COMMAND is INVALID \r\n");
    }

    #[test]
    fn command_queue_is_fifo() {
        let mut queue = CommandQueue::new();
        queue.enqueue(b'r').unwrap();
        queue.enqueue(b'l').unwrap();
        queue.enqueue(b'z').unwrap();

        assert_eq!(queue.dequeue(), Some(b'r'));
        assert_eq!(queue.dequeue(), Some(b'l'));
        assert_eq!(queue.dequeue(), Some(b'z'));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn command_queue_rejects_overflow() {
        let mut queue = CommandQueue::new();

        // The SPSC queue keeps one slot free.
        for i in 0..RX_QUEUE_LEN as u8 - 1 {
            queue.enqueue(i).unwrap();
        }
        assert_eq!(queue.enqueue(0xEE), Err(0xEE));

        // Earlier bytes are untouched.
        assert_eq!(queue.dequeue(), Some(0));
    }
}
