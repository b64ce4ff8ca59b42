//! Captures debug output in host tests.

use core::fmt;
use std::{
    boxed::Box,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{set_serial, take_serial, SerialOut};

pub(crate) type Output = heapless::String<128>;

// The registry is global, so tests touching it run one at a time.
static SERIAL_LOCK: Mutex<()> = Mutex::new(());

pub(crate) fn lock_serial() -> MutexGuard<'static, ()> {
    SERIAL_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Capture {
    out: Arc<Mutex<Output>>,
}

impl fmt::Write for Capture {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.lock().unwrap().push_str(s).map_err(|_| fmt::Error)
    }
}

/// Registers a capture that appends to `out`.
pub(crate) fn install_capture(out: Arc<Mutex<Output>>) -> Option<&'static mut dyn SerialOut> {
    set_serial(Box::leak(Box::new(Capture { out })))
}

/// A registered serial output that records everything written to it.
///
/// Holds the registry lock, and detaches the output when dropped.
pub(crate) struct CapturedSerial {
    out: Arc<Mutex<Output>>,
    lock: Option<MutexGuard<'static, ()>>,
}

impl CapturedSerial {
    pub(crate) fn attach() -> Self {
        let lock = lock_serial();
        let serial = Self {
            out: Arc::new(Mutex::new(Output::new())),
            lock: Some(lock),
        };
        serial.install();
        serial
    }

    /// Creates a capture without registering it or taking the lock.
    pub(crate) fn detached() -> Self {
        Self {
            out: Arc::new(Mutex::new(Output::new())),
            lock: None,
        }
    }

    pub(crate) fn install(&self) -> Option<&'static mut dyn SerialOut> {
        install_capture(self.output_handle())
    }

    pub(crate) fn output_handle(&self) -> Arc<Mutex<Output>> {
        self.out.clone()
    }

    pub(crate) fn output(&self) -> Output {
        self.out.lock().unwrap().clone()
    }
}

impl Drop for CapturedSerial {
    fn drop(&mut self) {
        if self.lock.is_some() {
            take_serial();
        }
    }
}
