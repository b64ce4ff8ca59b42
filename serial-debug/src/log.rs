//! Crate diagnostics for `defmt` or `log`, never sent to the registered serial output.

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);

        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    };
}

macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);

        #[cfg(feature = "log")]
        log::warn!($($arg)*);
    };
}

pub(crate) use {debug, warn_log};
