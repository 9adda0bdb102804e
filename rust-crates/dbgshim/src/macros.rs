// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Macros capturing the call site implicitly.
//!
//! All logging macros accept three payload forms:
//!
//! - `format!`-style arguments: `debug!("read {} bytes", n)`
//! - `?expr` for the [`Debug`](std::fmt::Debug) representation
//! - `%expr` for the [`Display`](std::fmt::Display) representation
//!
//! Arguments are only evaluated when [`ENABLED`](crate::ENABLED) is `true`.

/// Name of the enclosing function, without its module path.
///
/// Closures and async blocks resolve to the function they are defined in.
///
/// ```
/// fn connect() -> &'static str {
///     dbgshim::function_name!()
/// }
/// assert_eq!(connect(), "connect");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        $crate::__enclosing_function(::core::any::type_name_of_val(&__here))
    }};
}

/// Capture a [`CallSite`](crate::CallSite) for the current location.
///
/// With an argument, it replaces the function name.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            ::core::file!(),
            $crate::function_name!(),
            ::core::line!(),
        )
    };
    ($function:expr) => {
        $crate::CallSite::new(::core::file!(), $function, ::core::line!())
    };
}

/// Print a line at the given [`Level`](crate::Level).
///
/// ```
/// use dbgshim::Level;
/// dbgshim::log!(Level::Warning, "retrying in {}ms", 250);
/// dbgshim::log!(Level::Debug, ?Some(3));
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, ? $value:expr) => {
        $crate::log!($level, "{:?}", $value)
    };
    ($level:expr, % $value:expr) => {
        $crate::log!($level, "{}", $value)
    };
    ($level:expr, $($arg:tt)+) => {
        if $crate::ENABLED {
            $crate::log(
                $level,
                ::core::format_args!($($arg)+),
                $crate::call_site!(),
            );
        }
    };
}

/// Print a debug line. See [`log!`](crate::log!) for the payload forms.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Print a warning line. See [`log!`](crate::log!) for the payload forms.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warning, $($arg)+)
    };
}

/// Print an error line. See [`log!`](crate::log!) for the payload forms.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Abort the process with a reason and a call stack dump.
///
/// `fail!(reason...)` always fails, `fail!(if condition, reason...)` only
/// when the condition is true. The reason takes `format!`-style arguments.
/// Neither the condition nor the reason is evaluated in inert builds.
///
/// ```no_run
/// let state = 3;
/// dbgshim::fail!(if state > 2, "unexpected state {state}");
/// dbgshim::fail!("unreachable");
/// ```
#[macro_export]
macro_rules! fail {
    (if $condition:expr, $($reason:tt)+) => {
        if $crate::ENABLED && $condition {
            $crate::fail(
                true,
                ::core::format_args!($($reason)+),
                $crate::call_site!(),
            );
        }
    };
    ($($reason:tt)+) => {
        $crate::fail!(if true, $($reason)+)
    };
}

/// Time the enclosing scope. Returns `Option<ScopeTimer>`.
///
/// Bind the result to a named variable: `let _ = ...` drops it immediately.
///
/// ```
/// fn rebuild_index() {
///     let _timer = dbgshim::scope_timer!();
///     // ...
/// }
/// rebuild_index();
///
/// let _timer = dbgshim::scope_timer!("warmup");
/// ```
#[macro_export]
macro_rules! scope_timer {
    () => {
        $crate::scope_timer($crate::call_site!())
    };
    ($function:expr) => {
        $crate::scope_timer($crate::call_site!($function))
    };
}
