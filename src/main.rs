//! nRF52840 firmware entry point.
//!
//! Wires the controller to real hardware: two active-low buttons on
//! GPIOTE falling edges, the two status LEDs, and UARTE0 at
//! 115200-8N1. A single dispatch task owns all of it - button edges
//! and received bytes wake the task, which then services the debounce
//! gate and drains the command queue, so device state only ever has
//! one writer.
//!
//! Pin map (nRF52840-DK): see `config.rs`.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{select3, Either3};
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pin, Pull};
use embassy_nrf::{bind_interrupts, peripherals, uarte};
use embassy_time::Delay;
use embedded_hal::digital::{ErrorType, OutputPin};
use {defmt_rtt as _, panic_probe as _};

use statebox::controller::Controller;
use statebox::input::{ButtonId, DebounceGate};
use statebox::serial::{CommandQueue, SerialLink};

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
});

/// Status LED behind an inverter: the DK LEDs light when driven low.
struct ActiveLowLed<O>(O);

impl<O: OutputPin> ErrorType for ActiveLowLed<O> {
    type Error = O::Error;
}

impl<O: OutputPin> OutputPin for ActiveLowLed<O> {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set_low()
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set_high()
    }
}

/// UARTE-backed transmit surface.
///
/// EasyDMA writes block until the byte has left the peripheral, so the
/// link is always ready for the next one.
struct UarteLink {
    tx: uarte::UarteTx<'static, peripherals::UARTE0>,
}

impl SerialLink for UarteLink {
    fn transmit_ready(&mut self) -> bool {
        true
    }

    fn transmit_byte(&mut self, byte: u8) {
        // 1-byte stack buffer: EasyDMA needs the data in RAM.
        let _ = self.tx.blocking_write(&[byte]);
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    let mut left = Input::new(p.P0_11.degrade(), Pull::Up);
    let mut right = Input::new(p.P0_12.degrade(), Pull::Up);

    // LEDs start dark (pins high = off on the DK).
    let led1 = ActiveLowLed(Output::new(
        p.P0_13.degrade(),
        Level::High,
        OutputDrive::Standard,
    ));
    let led2 = ActiveLowLed(Output::new(
        p.P0_14.degrade(),
        Level::High,
        OutputDrive::Standard,
    ));

    // 115200-8N1, matching the operator side.
    let mut uart_config = uarte::Config::default();
    uart_config.parity = uarte::Parity::EXCLUDED;
    uart_config.baudrate = uarte::Baudrate::BAUD115200;
    let uart = uarte::Uarte::new(p.UARTE0, Irqs, p.P0_08, p.P0_06, uart_config);
    let (tx, mut rx) = uart.split();

    let gate = DebounceGate::new();
    let mut queue = CommandQueue::new();
    let mut delay = Delay;
    let mut controller = Controller::new(led1, led2, UarteLink { tx });

    info!("statebox up, state {}", controller.state());

    loop {
        let mut byte = [0u8; 1];

        // Bind first so the select future (and its borrow of `byte`)
        // is gone before the arms run.
        let wake = select3(
            left.wait_for_falling_edge(),
            right.wait_for_falling_edge(),
            rx.read(&mut byte),
        )
        .await;

        match wake {
            Either3::First(()) => gate.on_edge_detected(ButtonId::Left),
            Either3::Second(()) => gate.on_edge_detected(ButtonId::Right),
            Either3::Third(Ok(())) => {
                if let Err(dropped) = queue.enqueue(byte[0]) {
                    warn!("rx queue full, dropping {=u8:a}", dropped);
                }
            }
            Either3::Third(Err(e)) => warn!("uart rx error: {}", e),
        }

        match controller.service_buttons(&gate, &mut left, &mut right, &mut delay) {
            Ok(true) => info!("button serviced, state {}", controller.state()),
            Ok(false) => {}
            Err(e) => warn!("button service failed: {}", e),
        }

        if let Err(e) = controller.drain_commands(&mut queue) {
            warn!("command dispatch failed: {}", e);
        }
    }
}
