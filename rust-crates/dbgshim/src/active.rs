// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Real implementation, compiled in when the shim is active.

use crate::{CallSite, Level};
use record::Record;
use std::io::{self, Write as _};
use std::time::{Duration, Instant};
use std::{fmt, process};

// Loaded through `#[path]`, so these live next to this file.
mod record;
mod stack;

/// Repeated around the reason of a hard failure.
const FAIL_MARKER: &str = "❗❗❗";

/// Render `record` plus newline.
///
/// This runs the payload's `Display` impl, i.e. caller code, so it must
/// happen before stdout is locked.
fn render<P>(record: &Record<'_, P>) -> String
where
    P: fmt::Display + ?Sized,
{
    format!("{record}\n")
}

/// Write an already rendered line in one go.
///
/// Errors are dropped: losing stdout must not take the program down.
fn write_line(out: &mut impl io::Write, line: &str) {
    let _ = out.write_all(line.as_bytes());
}

fn emit(level: Level, site: CallSite<'_>, payload: &dyn fmt::Display) {
    let line = render(&Record::now(level, site, payload));
    let mut out = io::stdout().lock();
    write_line(&mut out, &line);
    let _ = out.flush();
}

/// Print `payload` at the given level.
pub fn log(level: Level, payload: impl fmt::Display, site: CallSite<'_>) {
    emit(level, site, &payload);
}

/// Print `payload` at [`Level::Debug`].
pub fn debug(payload: impl fmt::Display, site: CallSite<'_>) {
    emit(Level::Debug, site, &payload);
}

/// Print `payload` at [`Level::Warning`].
pub fn warning(payload: impl fmt::Display, site: CallSite<'_>) {
    emit(Level::Warning, site, &payload);
}

/// Print `payload` at [`Level::Error`].
pub fn error(payload: impl fmt::Display, site: CallSite<'_>) {
    emit(Level::Error, site, &payload);
}

/// Abort the process if `condition` holds.
///
/// Prints `reason` as an error line, dumps the current call stack one frame
/// per line and then calls [`process::abort`]. Does nothing if `condition` is
/// `false`.
pub fn fail(condition: bool, reason: impl fmt::Display, site: CallSite<'_>) {
    if !condition {
        return;
    }

    let message = format!("{FAIL_MARKER} fail: {reason}{FAIL_MARKER}");
    let line = render(&Record::now(Level::Error, site, message.as_str()));
    let frames = stack::frames();

    // Hold the lock for the whole report so other threads can't cut into it.
    let mut out = io::stdout().lock();
    write_line(&mut out, &line);
    for frame in frames {
        let _ = writeln!(out, "{frame}");
    }
    let _ = out.flush();

    process::abort();
}

/// Start timing the current scope.
///
/// Prints `Start <function>` right away and returns a guard that prints
/// `Finished <function> in <seconds>` when dropped. Always `Some` in active
/// builds.
#[must_use = "the timer reports when dropped; bind it with `let _timer = ...`"]
pub fn scope_timer(site: CallSite<'_>) -> Option<ScopeTimer<'_>> {
    Some(ScopeTimer::start(site))
}

/// Guard that logs how long it was alive.
///
/// The finish line is printed from [`Drop`], so it also appears when the
/// scope is left early through `return`, `?`, a panic unwinding through it
/// or an async task being cancelled.
#[derive(Debug)]
#[must_use = "the timer reports when dropped; bind it with `let _timer = ...`"]
pub struct ScopeTimer<'a> {
    site: CallSite<'a>,
    started: Instant,
}

impl<'a> ScopeTimer<'a> {
    fn start(site: CallSite<'a>) -> Self {
        let started = Instant::now();
        emit(Level::Debug, site, &format_args!("Start {}", site.function));
        Self { site, started }
    }

    /// Time since the timer was acquired.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for ScopeTimer<'_> {
    fn drop(&mut self) {
        let secs = self.elapsed().as_secs_f64();
        emit(
            Level::Debug,
            self.site,
            &format_args!("Finished {} in {secs}", self.site.function),
        );
    }
}
