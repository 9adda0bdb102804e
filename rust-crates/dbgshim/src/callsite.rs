// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Call-site descriptors.

/// Where a logging call originated: source file, function and line.
///
/// Usually captured with [`call_site!`](crate::call_site), but it can also be
/// built by hand, e.g. to attribute a message to a caller further up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite<'a> {
    /// Path of the source file, as produced by `file!()`.
    pub file: &'a str,
    /// Name of the enclosing function or scope.
    pub function: &'a str,
    /// 1-based line number.
    pub line: u32,
}

impl<'a> CallSite<'a> {
    /// Construct a call-site descriptor.
    pub const fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Base name of [`Self::file`] with its last extension removed.
    ///
    /// Both `/` and `\` count as separators so that paths recorded on another
    /// host still shorten properly. Malformed paths degrade to an empty or
    /// partial name instead of failing.
    ///
    /// ```
    /// # use dbgshim::CallSite;
    /// assert_eq!(CallSite::new("src/net/conn.rs", "f", 1).file_stem(), "conn");
    /// assert_eq!(CallSite::new("", "f", 1).file_stem(), "");
    /// ```
    pub fn file_stem(&self) -> &'a str {
        let base = self.file.rsplit(['/', '\\']).next().unwrap_or_default();
        match base.rfind('.') {
            // A leading dot marks a hidden file, not an extension.
            Some(0) | None => base,
            Some(dot) => &base[..dot],
        }
    }
}

/// Reduce a `type_name` of a function item declared inside another function
/// to the bare name of that enclosing function.
///
/// `crate::module::outer::{{closure}}::__here` becomes `outer`. Used by
/// [`function_name!`](crate::function_name).
pub fn enclosing_function(path: &'static str) -> &'static str {
    let mut path = path.rsplit_once("::").map_or("", |(parent, _)| parent);
    while let Some(parent) = path.strip_suffix("::{{closure}}") {
        path = parent;
    }
    path.rsplit("::").next().unwrap_or_default()
}
