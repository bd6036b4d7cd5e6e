//! The logging facade used by the `splitmix64` crates.
//!
//! Messages are filtered against a global verbosity ceiling before they are formatted, so
//! disabled messages cost a single atomic load.

use std::fmt::Arguments;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg_attr(target_arch = "wasm32", path = "wasm.rs")]
#[cfg_attr(not(target_arch = "wasm32"), path = "std.rs")]
mod imp;

/// A verbosity level for a [`Message`].
///
/// # Remarks
///
/// The ordering of the verbosity levels is in *increasing verbosity*, meaning that
/// [`Error`] is the *least verbose*, and [`Trace`] is the *most verbose*.
///
/// [`Error`]: Verbosity::Error
/// [`Trace`]: Verbosity::Trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Verbosity {
    /// Something went wrong and the caller could not get what it asked for.
    Error,
    /// Something went wrong, but a fallback was used.
    Warning,
    /// A notable event that does not indicate a problem.
    Info,
    /// Fine-grained information only useful when debugging.
    Trace,
}

impl Verbosity {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Error,
            1 => Self::Warning,
            2 => Self::Info,
            _ => Self::Trace,
        }
    }
}

/// The most verbose level that is currently emitted.
static MAX_VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Warning as u8);

/// Sets the most verbose level that will be emitted.
///
/// Messages with a higher verbosity than `verbosity` are discarded. The default is
/// [`Verbosity::Warning`].
pub fn set_max_verbosity(verbosity: Verbosity) {
    MAX_VERBOSITY.store(verbosity as u8, Ordering::Relaxed);
}

/// Returns the most verbose level that is currently emitted.
pub fn max_verbosity() -> Verbosity {
    Verbosity::from_u8(MAX_VERBOSITY.load(Ordering::Relaxed))
}

/// Returns whether a message with the provided verbosity would be emitted.
#[inline]
pub fn enabled(verbosity: Verbosity) -> bool {
    verbosity <= max_verbosity()
}

/// A message that can be logged.
pub struct Message<'a> {
    /// The name of the file in which the message was logged.
    pub file: &'static str,
    /// The line at which the message was logged.
    pub line: u32,
    /// The column at which the message was logged.
    pub column: u32,
    /// The verbosity level of the message.
    pub verbosity: Verbosity,
    /// The module in which the message was logged.
    pub module: &'static str,
    /// The message itself.
    pub message: Arguments<'a>,
}

impl<'a> Message<'a> {
    /// Logs this message, unless its verbosity is above the current ceiling.
    pub fn log(self) {
        if enabled(self.verbosity) {
            imp::log(self);
        }
    }
}

/// Creates a [`Message`] instance with the current invoking location.
#[macro_export]
macro_rules! message {
    ($verbosity:expr, $($args:tt)*) => {
        $crate::Message {
            file: ::core::file!(),
            line: ::core::line!(),
            column: ::core::column!(),
            verbosity: $verbosity,
            module: ::core::module_path!(),
            message: ::core::format_args!($($args)*),
        }
    };
}

/// Logs a message with the current invoking location.
///
/// The arguments are not evaluated when the verbosity is filtered out.
#[macro_export]
macro_rules! log {
    ($verbosity:expr, $($args:tt)*) => {{
        let verbosity: $crate::Verbosity = $verbosity;
        if $crate::enabled(verbosity) {
            $crate::Message::log($crate::message!(verbosity, $($args)*))
        }
    }};
}

/// Logs a message with a verbosity level of [`Verbosity::Error`].
#[macro_export]
macro_rules! error {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Error, $($args)*)
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Warning`].
#[macro_export]
macro_rules! warning {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Warning, $($args)*)
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Info`].
#[macro_export]
macro_rules! info {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Info, $($args)*)
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Trace`].
#[macro_export]
macro_rules! trace {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Trace, $($args)*)
    };
}
