// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::fmt::Write;

#[cfg(feature = "colored")]
use colored::Color;
#[cfg(feature = "colored")]
use colored::ColoredString;
#[cfg(feature = "colored")]
use colored::Colorize;
use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::Context;
use crate::Error;
use crate::Severity;
use crate::context::Visitor;
use crate::print::Formatter;

/// A formatter that renders entries as timestamped text.
///
/// Output format:
///
/// ```text
/// 2024-08-11T22:44:57.172105+08:00   ERROR app::db: db.rs:51:5 connection lost shard=3
/// 2024-08-11T22:44:57.172219+08:00 WARNING app::db: db.rs:52:5 retrying
/// 2024-08-11T22:44:57.172276+08:00    INFO app::db: db.rs:53:5 connected
/// ```
///
/// The module path is only shown when the call site captured one. Extra key/value pairs of
/// the context follow the message.
///
/// With the `colored` feature, severities are colored unless
/// [`no_color`](TextFormatter::no_color) is set.
///
/// You can customize the timezone of the timestamp with [`timezone`](TextFormatter::timezone).
/// Otherwise, the system timezone is used.
///
/// # Examples
///
/// ```
/// use logsite::print::Formatted;
/// use logsite::print::TextFormatter;
///
/// let printer = Formatted::new(TextFormatter::default());
/// ```
#[derive(Debug, Clone)]
pub struct TextFormatter {
    #[cfg(feature = "colored")]
    colors: SeverityColor,
    #[cfg(feature = "colored")]
    no_color: bool,
    timezone: TimeZone,
    timestamp_format: Option<fn(Timestamp, &TimeZone) -> String>,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            #[cfg(feature = "colored")]
            colors: SeverityColor::default(),
            #[cfg(feature = "colored")]
            no_color: false,
            timezone: TimeZone::system(),
            timestamp_format: None,
        }
    }
}

#[cfg(feature = "colored")]
#[cfg_attr(docsrs, doc(cfg(feature = "colored")))]
impl TextFormatter {
    /// Customize the color of a severity.
    ///
    /// Defaults are bright red, red, yellow, green, blue and magenta, from fatal to
    /// verbose. No effect if `no_color` is set.
    pub fn color(mut self, severity: Severity, color: Color) -> Self {
        self.colors.0[severity.index()] = color;
        self
    }

    /// Disable colored output.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }
}

impl TextFormatter {
    /// Set the timezone for timestamps.
    ///
    /// Defaults to the system timezone if not set.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use logsite::print::TextFormatter;
    ///
    /// let formatter = TextFormatter::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = tz;
        self
    }

    /// Set a user-defined timestamp format function.
    ///
    /// Default to formatting the timestamp with offset as ISO 8601. See the example below.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::Timestamp;
    /// use jiff::tz::TimeZone;
    /// use logsite::print::TextFormatter;
    ///
    /// // This is equivalent to the default timestamp format.
    /// let formatter = TextFormatter::default()
    ///     .timestamp_format(|ts, tz| format!("{:.6}", ts.display_with_offset(tz.to_offset(ts))));
    /// ```
    pub fn timestamp_format(mut self, format: fn(Timestamp, &TimeZone) -> String) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    #[cfg(feature = "colored")]
    fn severity(&self, severity: Severity) -> ColoredString {
        let text = ColoredString::from(severity.as_str());
        if self.no_color {
            text
        } else {
            text.color(self.colors.0[severity.index()])
        }
    }

    #[cfg(not(feature = "colored"))]
    fn severity(&self, severity: Severity) -> Severity {
        severity
    }
}

struct KvWriter<'a> {
    text: &'a mut String,
}

impl Visitor for KvWriter<'_> {
    fn visit(&mut self, key: &str, value: &dyn fmt::Display) -> Result<(), Error> {
        write!(self.text, " {key}={value}")?;
        Ok(())
    }
}

fn default_timestamp_format(ts: Timestamp, tz: &TimeZone) -> String {
    let offset = tz.to_offset(ts);
    format!("{:.6}", ts.display_with_offset(offset))
}

impl Formatter for TextFormatter {
    fn format<C: Context>(&self, ctx: &C, message: &str, out: &mut String) -> Result<(), Error> {
        let ts = Timestamp::now();
        let time = match self.timestamp_format {
            Some(format) => format(ts, &self.timezone),
            None => default_timestamp_format(ts, &self.timezone),
        };

        let severity = self.severity(ctx.severity());
        let location = ctx.location();
        let file = location.filename();
        let line = location.line();
        let column = location.column();

        write!(out, "{time} {severity:>7} ")?;
        if let Some(module) = location.module_path() {
            write!(out, "{module}: ")?;
        }
        write!(out, "{file}:{line}:{column} {message}")?;
        ctx.visit(&mut KvWriter { text: out })
    }
}

#[cfg(feature = "colored")]
#[derive(Debug, Clone)]
struct SeverityColor([Color; 6]);

#[cfg(feature = "colored")]
impl Default for SeverityColor {
    fn default() -> Self {
        Self([
            Color::BrightRed,
            Color::Red,
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Magenta,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CallContext;
    use crate::ContextExt;
    use crate::Location;

    fn formatter() -> TextFormatter {
        let formatter = TextFormatter::default()
            .timezone(TimeZone::UTC)
            .timestamp_format(|_, _| "T".to_string());
        #[cfg(feature = "colored")]
        let formatter = formatter.no_color();
        formatter
    }

    #[test]
    fn renders_module_location_and_fields() {
        let location = Location::new("src/db.rs", 3, 5).with_module_path("app::db");
        let ctx = CallContext::new(Severity::Info, location).with_field("shard", &3);

        let mut out = String::new();
        formatter().format(&ctx, "connected", &mut out).unwrap();
        assert_eq!(out, "T    INFO app::db: db.rs:3:5 connected shard=3");
    }

    #[test]
    fn module_is_optional() {
        let ctx = CallContext::new(Severity::Warning, Location::new("main.rs", 1, 1));

        let mut out = String::new();
        formatter().format(&ctx, "retrying", &mut out).unwrap();
        assert_eq!(out, "T WARNING main.rs:1:1 retrying");
    }

    #[test]
    fn default_timestamp_is_iso8601() {
        let ts: Timestamp = "2024-08-11T14:44:57.172105Z".parse().unwrap();
        assert_eq!(
            default_timestamp_format(ts, &TimeZone::UTC),
            "2024-08-11T14:44:57.172105+00:00"
        );
    }
}
