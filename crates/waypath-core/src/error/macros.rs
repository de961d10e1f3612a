//! Error macros for waypath

/// Macro for returning invalid argument errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::WaypathError::invalid_argument(
            $context, $value,
        ))
    };
}

/// Macro for returning invalid state errors
#[macro_export]
macro_rules! bail_state {
    ($msg:expr) => {
        return Err($crate::error::WaypathError::invalid_state($msg))
    };
}
