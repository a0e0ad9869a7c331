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

use crate::Context;
use crate::ContextExt;
use crate::Location;
use crate::Severity;
use crate::default_logger;

const UNKNOWN_FILE: &str = "<unknown>";

// A call context whose filter target is the `log` target, which need not be static.
struct LogContext<'a> {
    severity: Severity,
    location: Location,
    target: &'a str,
}

impl Context for LogContext<'_> {
    fn severity(&self) -> Severity {
        self.severity
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn target(&self) -> &str {
        self.target
    }
}

struct LogCrateLogger(());

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        let ctx = LogContext {
            severity: metadata.level().into(),
            location: Location::new(UNKNOWN_FILE, 0, 0),
            target: metadata.target(),
        };
        default_logger().enabled(&ctx)
    }

    fn log(&self, record: &log::Record) {
        let file = record.file_static().unwrap_or(UNKNOWN_FILE);
        let line = record.line().unwrap_or_default();
        // The log crate does not record columns.
        let mut location = Location::new(file, line, 0);
        if let Some(module_path) = record.module_path_static() {
            location = location.with_module_path(module_path);
        }

        let target = record.target();
        let ctx = LogContext {
            severity: record.level().into(),
            location,
            target,
        };
        if record.module_path() == Some(target) {
            default_logger().log(&ctx, *record.args());
        } else {
            let ctx = ctx.with_field("target", &target);
            default_logger().log(&ctx, *record.args());
        }
    }

    fn flush(&self) {}
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] to set up a proxy, and all logs from the log
/// crate will be forwarded to the [default logger](crate::default_logger).
///
/// The log crate has no fatal level: its errors arrive as
/// [`Severity::Error`](crate::Severity::Error), and its trace level as
/// [`Severity::Verbose`](crate::Severity::Verbose).
///
/// Filters see the `log` target through [`Context::target`](crate::Context::target), so
/// [`EnvFilter`](crate::filter::EnvFilter) directives match it the same way as in
/// `log::log_enabled!`.
///
/// This function will set the global maximum log level to `Trace`. To override this, call
/// [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// if let Err(err) = logsite::bridge::try_setup_log_crate() {
///     eprintln!("failed to setup log crate: {err}");
/// }
/// ```
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: LogCrateLogger = LogCrateLogger(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// See [`try_setup_log_crate`].
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// logsite::bridge::setup_log_crate();
/// log::info!("forwarded to logsite");
/// ```
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "logsite::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}
