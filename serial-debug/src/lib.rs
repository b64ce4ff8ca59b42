//! Debug print macros for an embedded device's serial output.
//!
//! [`debug_print!`] and [`debug_println!`] take the same arguments as [core::format_args]. With
//! the `debug` feature enabled they forward to the serial output registered with [set_serial].
//! Without it they compile to nothing: the arguments are never evaluated, so expressions with side
//! effects inside a debug print do not run in release firmware.
//!
//! Toggling the feature never requires changes at the call sites.
//!
//! ## Registering the serial output
//!
//! Any `core::fmt::Write + Send` type can be used as a [SerialOut]. Register one with a `'static`
//! lifetime early in `main`:
//!
//! ```rust
//! use core::fmt;
//!
//! use serial_debug::{debug_println, set_serial};
//!
//! struct Uart;
//!
//! impl fmt::Write for Uart {
//!     fn write_str(&mut self, _s: &str) -> fmt::Result {
//!         // Push the bytes out of the hardware port here.
//!         Ok(())
//!     }
//! }
//!
//! static mut UART: Uart = Uart;
//!
//! // Only called once, before any debug prints.
//! set_serial(unsafe { &mut *core::ptr::addr_of_mut!(UART) });
//! debug_println!("ready");
//! ```
//!
//! Prints made before an output is registered are dropped.
//!
//! ## Features
//!
//! - `debug`: compile the debug prints in.
//! - `defmt`, `log`: report the crate's own diagnostics (attaching and detaching the output,
//!   an output replaced during a print) through `defmt` or `log`.
#![no_std]

#[cfg(test)]
extern crate std;

mod log;
mod macros;
mod serial;
#[cfg(test)]
mod testing;

pub use serial::{set_serial, take_serial, SerialOut, LINE_TERMINATOR};

#[doc(hidden)]
pub use serial::{print as __print, println as __println};
