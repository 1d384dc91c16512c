//! Assertion levels for the contracts of the search engine.
//!
//! Simple assertions are always on since they protect the undo bookkeeping of the driver; the
//! more expensive levels are only enabled with the `debug-checks` feature.

#[cfg(not(feature = "debug-checks"))]
pub const CSP_ASSERT_LEVEL_DEFINITION: u8 = CSP_ASSERT_SIMPLE;

#[cfg(feature = "debug-checks")]
pub const CSP_ASSERT_LEVEL_DEFINITION: u8 = CSP_ASSERT_ADVANCED;

pub const CSP_ASSERT_SIMPLE: u8 = 1;
pub const CSP_ASSERT_MODERATE: u8 = 2;
pub const CSP_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! csp_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CSP_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CSP_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! csp_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CSP_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CSP_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! csp_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::CSP_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CSP_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! csp_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::CSP_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CSP_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
