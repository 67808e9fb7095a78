//! statebox - four-state device controller.
//!
//! Two debounced push-buttons and single-byte serial commands drive a
//! four-state machine; every transition is reflected on two status
//! LEDs and reported as a line on the serial link.
//!
//! The crate is dual-target:
//! - this library holds the pure logic and the hardware trait seams,
//!   and builds for the host (`cargo test`) as well as the target;
//! - `main.rs` (feature `embedded`) wires it to the nRF52840 with
//!   Embassy.
//!
//! ## Module map
//!
//! - [`fsm`] - state machine core and output projection
//! - [`input`] - edge-to-event debounce gate
//! - [`serial`] - command decode, RX byte queue, outbound status path
//! - [`controller`] - device state owner and dispatch helpers
//! - [`config`] / [`error`] - constants and the crate error type
//! - [`mock`] - host-test stand-ins for the hardware seams

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod controller;
pub mod error;
pub mod fsm;
pub mod input;
pub mod mock;
pub mod serial;
