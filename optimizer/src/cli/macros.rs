//! log macro's for command line logging

/// Writes a debug! message to the app::cli logger
#[macro_export]
macro_rules! cli_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::cli", $($arg)+)
    };
}

/// Writes an info! message to the app::cli logger
#[macro_export]
macro_rules! cli_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::cli", $($arg)+)
    };
}

/// Writes an warn! message to the app::cli logger
#[macro_export]
macro_rules! cli_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::cli", $($arg)+)
    };
}

/// Writes an error! message to the app::cli logger
#[macro_export]
macro_rules! cli_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::cli", $($arg)+)
    };
}
