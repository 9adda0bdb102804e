// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! No-op implementation, compiled in when the shim is inactive.
//!
//! Mirrors the public surface of the active implementation with empty,
//! always-inlined bodies so that calls vanish from optimized builds.

use crate::{CallSite, Level};
use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

/// Does nothing in this build.
#[inline(always)]
pub fn log(_level: Level, _payload: impl fmt::Display, _site: CallSite<'_>) {}

/// Does nothing in this build.
#[inline(always)]
pub fn debug(_payload: impl fmt::Display, _site: CallSite<'_>) {}

/// Does nothing in this build.
#[inline(always)]
pub fn warning(_payload: impl fmt::Display, _site: CallSite<'_>) {}

/// Does nothing in this build.
#[inline(always)]
pub fn error(_payload: impl fmt::Display, _site: CallSite<'_>) {}

/// Does nothing in this build, whatever the condition.
#[inline(always)]
pub fn fail(_condition: bool, _reason: impl fmt::Display, _site: CallSite<'_>) {}

/// Always `None` in this build.
#[inline(always)]
#[must_use = "the timer reports when dropped; bind it with `let _timer = ...`"]
pub fn scope_timer(_site: CallSite<'_>) -> Option<ScopeTimer<'_>> {
    None
}

/// Scope timer placeholder. Never constructed in this build.
#[derive(Debug)]
pub struct ScopeTimer<'a> {
    _site: PhantomData<CallSite<'a>>,
}

impl ScopeTimer<'_> {
    /// Always zero in this build.
    pub fn elapsed(&self) -> Duration {
        Duration::ZERO
    }
}
