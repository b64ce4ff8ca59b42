#![no_std]

use core::fmt;

use embassy_rp::uart::{self, Blocking, UartTx};
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("UART error: {0:?}")]
    UartError(uart::Error),
}

impl From<uart::Error> for Error {
    fn from(e: uart::Error) -> Self {
        Error::UartError(e)
    }
}

/// Sends debug output through the transmit half of a blocking UART.
pub struct UartSerial<'a, T: uart::Instance> {
    tx: UartTx<'a, T, Blocking>,
}

impl<'a, T: uart::Instance> UartSerial<'a, T> {
    pub fn new(tx: UartTx<'a, T, Blocking>) -> Self {
        Self { tx }
    }

    /// Writes the bytes, blocking until they have all been queued in the TX FIFO.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.tx.blocking_write(bytes)?;
        Ok(())
    }
}

impl<T: uart::Instance> fmt::Write for UartSerial<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes()).map_err(|e| {
            defmt::warn!("Debug UART write failed: {}", defmt::Display2Format(&e));
            fmt::Error
        })
    }
}
