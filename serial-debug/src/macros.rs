//! The debug print switch.
//!
//! With the `debug` feature, the public macros forward to the registered serial output. Without
//! it they expand to a `false` branch: the arguments are still type checked, so call sites build
//! the same way in both configurations, but nothing inside is ever evaluated and the branch is
//! compiled out.

#[doc(hidden)]
#[macro_export]
macro_rules! __serial_print {
    ($($arg:tt)*) => {
        $crate::__print(::core::format_args!($($arg)*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __serial_println {
    () => {
        $crate::__println(::core::format_args!(""))
    };
    ($($arg:tt)*) => {
        $crate::__println(::core::format_args!($($arg)*))
    };
}

/// Prints to the serial output, without a line terminator.
///
/// Takes the same arguments as [core::format_args].
///
/// ```
/// use serial_debug::debug_print;
///
/// let x = 5;
/// debug_print!("x={}", x);
/// ```
#[cfg(feature = "debug")]
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {
        $crate::__serial_print!($($arg)*)
    };
}

/// Prints to the serial output, without a line terminator.
///
/// The `debug` feature is disabled, so this does nothing and its arguments are not evaluated.
///
/// ```
/// use serial_debug::debug_print;
///
/// let x = 5;
/// debug_print!("x={}", x);
/// ```
#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {
        if false {
            $crate::__serial_print!($($arg)*)
        }
    };
}

/// Prints to the serial output, followed by a line terminator.
///
/// With no arguments, only the terminator is printed.
///
/// ```
/// use serial_debug::debug_println;
///
/// debug_println!("ready");
/// debug_println!();
/// ```
#[cfg(feature = "debug")]
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        $crate::__serial_println!($($arg)*)
    };
}

/// Prints to the serial output, followed by a line terminator.
///
/// The `debug` feature is disabled, so this does nothing and its arguments are not evaluated.
///
/// ```
/// use serial_debug::debug_println;
///
/// debug_println!("ready");
/// debug_println!();
/// ```
#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if false {
            $crate::__serial_println!($($arg)*)
        }
    };
}
