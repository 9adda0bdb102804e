// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Formatting of individual log lines.

use crate::{CallSite, Level};
use chrono::{Local, NaiveTime};
use std::fmt;

/// `strftime`-style format of the timestamp column.
const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// One log line, ready to be rendered via [`fmt::Display`].
///
/// Rendering does not include the trailing newline.
pub struct Record<'a, P: ?Sized> {
    pub level: Level,
    pub time: NaiveTime,
    pub site: CallSite<'a>,
    pub payload: &'a P,
}

impl<'a, P: fmt::Display + ?Sized> Record<'a, P> {
    /// Create a record stamped with the current local time.
    ///
    /// Whole seconds and milliseconds come from the same clock read, so the
    /// two columns can't drift apart.
    pub fn now(level: Level, site: CallSite<'a>, payload: &'a P) -> Self {
        Self {
            level,
            time: Local::now().time(),
            site,
            payload,
        }
    }
}

impl<P: fmt::Display + ?Sized> fmt::Display for Record<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}] : {:<4} ~~ {}",
            self.level.marker(),
            self.time.format(TIME_FORMAT),
            self.site.file_stem(),
            self.site.function,
            self.site.line,
            self.payload,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(h, m, s, ms).unwrap()
    }

    #[test]
    fn layout() {
        let record = Record {
            level: Level::Debug,
            time: at(9, 5, 7, 42),
            site: CallSite::new("/src/ui/widget.rs", "render", 42),
            payload: "hello",
        };
        assert_eq!(
            record.to_string(),
            "💬 09:05:07.042 widget [render] : 42   ~~ hello"
        );
    }

    #[test]
    fn markers_follow_level() {
        let site = CallSite::new("a.rs", "f", 1);
        for level in Level::ALL {
            let record = Record {
                level,
                time: at(23, 59, 59, 999),
                site,
                payload: &17,
            };
            let line = record.to_string();
            assert!(line.starts_with(&format!("{} 23:59:59.999 a [f]", level.marker())));
            assert!(line.ends_with(" ~~ 17"));
        }
    }

    #[test]
    fn wide_line_numbers_and_empty_fields() {
        let record = Record {
            level: Level::Error,
            time: at(0, 0, 0, 0),
            site: CallSite::new("", "", 123456),
            payload: "",
        };
        assert_eq!(record.to_string(), "❌ 00:00:00.000  [] : 123456 ~~ ");
    }

    #[test]
    fn timestamp_shape() {
        let record = Record::now(Level::Warning, CallSite::new("x.rs", "g", 3), "p");
        let line = record.to_string();
        let time = line.split(' ').nth(1).unwrap();
        assert_eq!(time.len(), "00:00:00.000".len());
        assert_eq!(time.as_bytes()[2], b':');
        assert_eq!(time.as_bytes()[8], b'.');
    }
}
