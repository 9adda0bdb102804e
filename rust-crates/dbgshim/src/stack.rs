// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Call stack dumps for the hard-fail path.

use std::backtrace::{Backtrace, BacktraceStatus};

/// Printed instead of frames when the platform can't unwind.
const UNAVAILABLE: &str = "<call stack unavailable>";

/// Capture the current call stack as one line per frame.
///
/// Always returns at least one line.
pub fn frames() -> Vec<String> {
    let trace = Backtrace::force_capture();
    if trace.status() != BacktraceStatus::Captured {
        return vec![UNAVAILABLE.to_owned()];
    }

    let folded = fold(&trace.to_string());
    if folded.is_empty() {
        vec![UNAVAILABLE.to_owned()]
    } else {
        folded
    }
}

/// Merge the `at <file>:<line>` continuation lines of a rendered backtrace
/// into the frame line they belong to.
fn fold(rendered: &str) -> Vec<String> {
    let mut frames: Vec<String> = Vec::new();

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with("at ") {
            if let Some(frame) = frames.last_mut() {
                frame.push(' ');
                frame.push_str(trimmed);
                continue;
            }
        }
        frames.push(trimmed.to_owned());
    }

    frames
}
