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

//! Message severities.

use std::fmt;
use std::str::FromStr;

/// The severity of a log message.
///
/// Variants are declared from most to least severe. The derived ordering follows the
/// declaration, so a *more* severe value compares *less* than a less severe one:
///
/// ```
/// use logsite::Severity;
///
/// assert!(Severity::Fatal < Severity::Verbose);
/// assert!(Severity::Error.is_at_least(Severity::Warning));
/// ```
#[repr(usize)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Severity {
    /// The application cannot continue.
    Fatal = 100,
    /// An operation failed.
    Error = 200,
    /// Something unexpected happened but the operation went on.
    Warning = 300,
    /// Useful information.
    Info = 400,
    /// Lower priority information for developers.
    Debug = 500,
    /// Very low priority, often extremely noisy, information.
    Verbose = 600,
}

impl Severity {
    /// All severities, from most to least severe.
    pub const ALL: [Severity; 6] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
        Severity::Verbose,
    ];

    /// Return the string representation of the `Severity`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Verbose => "VERBOSE",
        }
    }

    /// Position of this severity in [`Severity::ALL`].
    pub fn index(&self) -> usize {
        (*self as usize) / 100 - 1
    }

    /// Whether `self` is as severe as `other` or more.
    pub fn is_at_least(&self, other: Severity) -> bool {
        *self <= other
    }

    /// The closest `log` crate level.
    ///
    /// `log` has no fatal level; both `Fatal` and `Error` become [`log::Level::Error`].
    pub fn to_log_level(&self) -> log::Level {
        match self {
            Severity::Fatal | Severity::Error => log::Level::Error,
            Severity::Warning => log::Level::Warn,
            Severity::Info => log::Level::Info,
            Severity::Debug => log::Level::Debug,
            Severity::Verbose => log::Level::Trace,
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug => Severity::Debug,
            log::Level::Trace => Severity::Verbose,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A threshold on [`Severity`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum SeverityFilter {
    /// Disable all messages.
    Off,
    /// Enable messages at least as severe as the given severity.
    AtLeast(Severity),
    /// Enable all messages.
    All,
}

impl SeverityFilter {
    /// Whether a message of `severity` passes this threshold.
    pub fn matches(&self, severity: Severity) -> bool {
        match self {
            SeverityFilter::Off => false,
            SeverityFilter::AtLeast(threshold) => severity.is_at_least(*threshold),
            SeverityFilter::All => true,
        }
    }

    /// The equivalent `log` crate filter.
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            SeverityFilter::Off => log::LevelFilter::Off,
            SeverityFilter::AtLeast(severity) => severity.to_log_level().to_level_filter(),
            SeverityFilter::All => log::LevelFilter::Trace,
        }
    }
}

impl From<Severity> for SeverityFilter {
    fn from(severity: Severity) -> Self {
        SeverityFilter::AtLeast(severity)
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityFilter::Off => f.pad("OFF"),
            SeverityFilter::AtLeast(severity) => fmt::Display::fmt(severity, f),
            SeverityFilter::All => f.pad("ALL"),
        }
    }
}

/// The type returned by `from_str` when the string doesn't match any severity.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseSeverityError {}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("malformed severity")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Severity, Self::Err> {
        for (name, severity) in [
            ("fatal", Severity::Fatal),
            ("error", Severity::Error),
            ("warning", Severity::Warning),
            ("warn", Severity::Warning),
            ("info", Severity::Info),
            ("debug", Severity::Debug),
            ("verbose", Severity::Verbose),
            ("trace", Severity::Verbose),
        ] {
            if s.eq_ignore_ascii_case(name) {
                return Ok(severity);
            }
        }

        Err(ParseSeverityError {})
    }
}

impl FromStr for SeverityFilter {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<SeverityFilter, Self::Err> {
        if s.eq_ignore_ascii_case("off") {
            Ok(SeverityFilter::Off)
        } else if s.eq_ignore_ascii_case("all") {
            Ok(SeverityFilter::All)
        } else {
            Severity::from_str(s).map(SeverityFilter::AtLeast)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_runs_from_most_to_least_severe() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].is_at_least(pair[1]));
            assert!(!pair[1].is_at_least(pair[0]));
        }
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(severity.index(), i);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("VERBOSE".parse::<Severity>(), Ok(Severity::Verbose));
        assert_eq!("fatal".parse::<Severity>(), Ok(Severity::Fatal));
        assert!("loud".parse::<Severity>().is_err());

        assert_eq!("off".parse::<SeverityFilter>(), Ok(SeverityFilter::Off));
        assert_eq!("All".parse::<SeverityFilter>(), Ok(SeverityFilter::All));
        assert_eq!(
            "info".parse::<SeverityFilter>(),
            Ok(SeverityFilter::AtLeast(Severity::Info))
        );
    }

    #[test]
    fn threshold_matches() {
        let filter = SeverityFilter::AtLeast(Severity::Warning);
        assert!(filter.matches(Severity::Fatal));
        assert!(filter.matches(Severity::Warning));
        assert!(!filter.matches(Severity::Info));
        assert!(!SeverityFilter::Off.matches(Severity::Fatal));
        assert!(SeverityFilter::All.matches(Severity::Verbose));
    }

    #[test]
    fn display_pads() {
        assert_eq!(format!("{:>7}", Severity::Info), "   INFO");
        assert_eq!(Severity::Warning.to_string(), "WARNING");
    }

    #[test]
    fn log_level_conversions() {
        assert_eq!(Severity::Fatal.to_log_level(), log::Level::Error);
        assert_eq!(Severity::from(log::Level::Trace), Severity::Verbose);
        assert_eq!(
            SeverityFilter::AtLeast(Severity::Info).to_log_level_filter(),
            log::LevelFilter::Info
        );
    }
}
