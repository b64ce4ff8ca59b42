//! Prints debug output over UART0 (TX on GPIO 0) from a Raspberry Pi Pico board.
//!
//! Connect a USB serial adapter at 115200 baud to see the output. Build without the `debug`
//! feature of `serial-debug` and the prints, along with the counter updates inside them, are
//! compiled out.

#![no_std]
#![no_main]

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{self, UartTx};
use embassy_time::{Instant, Timer};
use rp_samples::UartSerial;
use serial_debug::{debug_print, debug_println, set_serial};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    let tx = UartTx::new_blocking(p.UART0, p.PIN_0, uart::Config::default());
    let serial = unwrap!(cortex_m::singleton!(
        : UartSerial<'static, UART0> = UartSerial::new(tx)
    ));
    set_serial(serial);

    info!("Serial debug output attached");
    debug_println!("ready");

    let mut count: u32 = 0;
    loop {
        debug_print!("x=");
        debug_println!("{} at {}ms", next(&mut count), Instant::now().as_millis());
        Timer::after_secs(1).await;
    }
}

/// Advances the counter. Only called from debug prints.
fn next(count: &mut u32) -> u32 {
    *count = count.wrapping_add(1);
    *count
}
