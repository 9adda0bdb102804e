// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod callsite;
mod level;
mod macros;

// The shim is active with debug assertions or `force-enable`, unless
// `force-disable` is set. `ENABLED` below mirrors this condition.
#[cfg(all(
    any(debug_assertions, feature = "force-enable"),
    not(feature = "force-disable")
))]
#[path = "active.rs"]
mod imp;
#[cfg(not(all(
    any(debug_assertions, feature = "force-enable"),
    not(feature = "force-disable")
)))]
#[path = "inert.rs"]
mod imp;

pub use callsite::CallSite;
pub use imp::{debug, error, fail, log, scope_timer, warning, ScopeTimer};
pub use level::{Level, ParseLevelError};

#[doc(hidden)]
pub use callsite::enclosing_function as __enclosing_function;

/// Whether this build of the crate actually prints anything.
///
/// Decided at compile time from `debug_assertions` and the `force-enable` /
/// `force-disable` features. The macros branch on this constant, so when it
/// is `false` their arguments are never evaluated and the whole call is
/// removed by the optimizer.
pub const ENABLED: bool = cfg!(all(
    any(debug_assertions, feature = "force-enable"),
    not(feature = "force-disable")
));
