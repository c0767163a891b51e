/// Writes an error! message to the app::report logger
#[macro_export]
macro_rules! report_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::report", $($arg)+);
    };
}

/// Writes a debug! message to the app::report logger
#[macro_export]
macro_rules! report_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::report", $($arg)+);
    };
}
