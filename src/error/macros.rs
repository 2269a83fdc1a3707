//! Error macros for navgraph

/// Macro for returning an invalid value error
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::NavError::invalid_value($context, $value))
    };
}

/// Macro for returning a not found error
#[macro_export]
macro_rules! bail_not_found {
    ($context:expr, $value:expr) => {
        return Err($crate::error::NavError::not_found($context, $value))
    };
}
