use core::{cell::RefCell, fmt};

use critical_section::Mutex;

use crate::log::{debug, warn_log};

/// Written by [SerialOut::println] after the formatted output.
pub const LINE_TERMINATOR: &str = "\r\n";

/// A serial output primitive, usually a UART, that debug prints are forwarded to.
///
/// Any [core::fmt::Write] type implements this already, so most hardware only needs a
/// `write_str` that pushes bytes out of the port. Errors from the port are discarded.
pub trait SerialOut: Send {
    /// Writes the formatted output with no line terminator.
    fn print(&mut self, args: fmt::Arguments<'_>);

    /// Writes the formatted output followed by exactly one [LINE_TERMINATOR].
    fn println(&mut self, args: fmt::Arguments<'_>) {
        self.print(args);
        self.print(format_args!("{}", LINE_TERMINATOR));
    }
}

impl<W: fmt::Write + Send> SerialOut for W {
    fn print(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.write_fmt(args);
    }
}

static SERIAL: Mutex<RefCell<Option<&'static mut dyn SerialOut>>> =
    Mutex::new(RefCell::new(None));

/// Registers the serial output used by `debug_print!` and `debug_println!`.
///
/// Returns the previously registered output, if any.
pub fn set_serial(serial: &'static mut dyn SerialOut) -> Option<&'static mut dyn SerialOut> {
    debug!("Attaching serial debug output");
    critical_section::with(|cs| SERIAL.borrow_ref_mut(cs).replace(serial))
}

/// Removes the registered serial output. Debug prints are dropped until a new one is set.
pub fn take_serial() -> Option<&'static mut dyn SerialOut> {
    debug!("Detaching serial debug output");
    critical_section::with(|cs| SERIAL.borrow_ref_mut(cs).take())
}

/// Forwards to the registered output's [SerialOut::print].
pub fn print(args: fmt::Arguments<'_>) {
    with_serial(|serial| serial.print(args));
}

/// Forwards to the registered output's [SerialOut::println].
pub fn println(args: fmt::Arguments<'_>) {
    with_serial(|serial| serial.println(args));
}

/// Runs `f` with the registered output moved out of the registry.
///
/// The critical section only covers moving the output in and out, so a slow port never writes
/// with interrupts masked. A print made while the output is out, from the output itself or from an
/// interrupt, finds the registry empty and is dropped.
fn with_serial(f: impl FnOnce(&mut (dyn SerialOut + 'static))) {
    // Nothing registered: the output goes nowhere, same as an unopened port.
    let Some(serial) = critical_section::with(|cs| SERIAL.borrow_ref_mut(cs).take()) else {
        return;
    };

    f(&mut *serial);

    critical_section::with(|cs| {
        let mut slot = SERIAL.borrow_ref_mut(cs);
        if slot.is_none() {
            *slot = Some(serial);
        } else {
            warn_log!("Serial debug output was replaced during a print, keeping the new one");
        }
    });
}
