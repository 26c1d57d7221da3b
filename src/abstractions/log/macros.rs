//! Macros for generating log messages.
//!
//! Every public macro accepts an optional leading verbosity threshold. All of them expand to `log_event!`, which
//! makes sure the logger is initialized before the event is recorded.

#[doc(hidden)]
#[macro_export]
macro_rules! log_event {
    ($level:expr, critical, $threshold:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            $crate::tracing::event!(
                $level,
                critical = true,
                threshold = $threshold,
                message = format_args!($($arg)+)
            );
        }
    };
    ($level:expr, $threshold:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            $crate::tracing::event!(
                $level,
                threshold = $threshold,
                message = format_args!($($arg)+)
            );
        }
    };
}

#[macro_export]
macro_rules! critical {
    ($threshold:expr, $($arg:tt)+) => { $crate::log_event!($crate::tracing::Level::ERROR, critical, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_event!($crate::tracing::Level::ERROR, critical, 0, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($threshold:expr, $($arg:tt)+) => { $crate::log_event!($crate::tracing::Level::ERROR, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_event!($crate::tracing::Level::ERROR, 0, $($arg)+) };
}

#[macro_export]
macro_rules! warning {
    ($threshold:expr, $($arg:tt)+) => { $crate::log_event!($crate::tracing::Level::WARN, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_event!($crate::tracing::Level::WARN, 0, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($threshold:expr, $($arg:tt)+) => { $crate::log_event!($crate::tracing::Level::INFO, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_event!($crate::tracing::Level::INFO, 0, $($arg)+) };
}

#[macro_export]
macro_rules! debug {
    ($threshold:expr, $($arg:tt)+) => { $crate::log_event!($crate::tracing::Level::DEBUG, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_event!($crate::tracing::Level::DEBUG, 0, $($arg)+) };
}

#[macro_export]
macro_rules! trace {
    ($threshold:expr, $($arg:tt)+) => { $crate::log_event!($crate::tracing::Level::TRACE, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_event!($crate::tracing::Level::TRACE, 0, $($arg)+) };
}


// The following makes the macros importable directly from the `log` module.
pub use {critical, error, warning, info, debug, trace};
