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
use std::sync::Arc;
use std::sync::OnceLock;

use crate::CallContext;
use crate::Context;
use crate::Logger;
use crate::Severity;
use crate::dispatch::interpolate;

/// The object-safe face of a logger, as stored in the process-wide default.
///
/// [`Logger`] implements it for every component table; [`Chain`](crate::Chain) fans one
/// message out to several loggers.
pub trait Log: fmt::Debug + Send + Sync {
    /// Whether a message with context `ctx` would be written.
    fn enabled(&self, ctx: &dyn Context) -> bool;

    /// Write an already formatted message, subject to the filter.
    fn write(&self, ctx: &dyn Context, message: &str);

    /// Interpolate `args` and write the result, unless the filter rejects `ctx`.
    fn log(&self, ctx: &dyn Context, args: fmt::Arguments) {
        if self.enabled(ctx) {
            self.write(ctx, &interpolate(args));
        }
    }
}

impl<L: Log + ?Sized> Log for &L {
    fn enabled(&self, ctx: &dyn Context) -> bool {
        (**self).enabled(ctx)
    }

    fn write(&self, ctx: &dyn Context, message: &str) {
        (**self).write(ctx, message)
    }

    fn log(&self, ctx: &dyn Context, args: fmt::Arguments) {
        (**self).log(ctx, args)
    }
}

impl<L: Log + ?Sized> Log for Box<L> {
    fn enabled(&self, ctx: &dyn Context) -> bool {
        (**self).enabled(ctx)
    }

    fn write(&self, ctx: &dyn Context, message: &str) {
        (**self).write(ctx, message)
    }

    fn log(&self, ctx: &dyn Context, args: fmt::Arguments) {
        (**self).log(ctx, args)
    }
}

impl<L: Log + ?Sized> Log for Arc<L> {
    fn enabled(&self, ctx: &dyn Context) -> bool {
        (**self).enabled(ctx)
    }

    fn write(&self, ctx: &dyn Context, message: &str) {
        (**self).write(ctx, message)
    }

    fn log(&self, ctx: &dyn Context, args: fmt::Arguments) {
        (**self).log(ctx, args)
    }
}

static DEFAULT_LOGGER: OnceLock<Box<dyn Log>> = OnceLock::new();

/// Return the process-wide default logger.
///
/// If none has been installed, a [`Logger::default()`] is installed now: every severity goes
/// to stderr, one message per line. From then on the default can no longer change.
pub fn default_logger() -> &'static dyn Log {
    let logger = DEFAULT_LOGGER.get_or_init(|| {
        let logger: Logger = Logger::default();
        Box::new(logger)
    });
    logger.as_ref()
}

/// Install `logger` as the process-wide default.
///
/// The default is replaced as a whole, never patched per severity. See also
/// [`LoggerBuilder::apply`](crate::LoggerBuilder::apply).
///
/// # Errors
///
/// Return the rejected logger if a default logger has already been set, or if
/// [`default_logger`] has already been called.
pub fn set_default_logger(logger: impl Log + 'static) -> Result<(), Box<dyn Log>> {
    DEFAULT_LOGGER.set(Box::new(logger))
}

/// Log a [`Severity::Fatal`] message through the default logger.
///
/// The arguments are always evaluated. Prefer [`fatal!`](crate::fatal) to skip that for
/// suppressed messages.
///
/// # Examples
///
/// ```
/// logsite::log_fatal(format_args!("cannot open {}", "config.toml"));
/// ```
#[track_caller]
pub fn log_fatal(args: fmt::Arguments) {
    default_logger().log(&CallContext::caller(Severity::Fatal), args)
}

/// Log a [`Severity::Error`] message through the default logger.
#[track_caller]
pub fn log_error(args: fmt::Arguments) {
    default_logger().log(&CallContext::caller(Severity::Error), args)
}

/// Log a [`Severity::Warning`] message through the default logger.
#[track_caller]
pub fn log_warn(args: fmt::Arguments) {
    default_logger().log(&CallContext::caller(Severity::Warning), args)
}

/// Log a [`Severity::Info`] message through the default logger.
#[track_caller]
pub fn log_info(args: fmt::Arguments) {
    default_logger().log(&CallContext::caller(Severity::Info), args)
}

/// Log a [`Severity::Debug`] message through the default logger.
#[track_caller]
pub fn log_debug(args: fmt::Arguments) {
    default_logger().log(&CallContext::caller(Severity::Debug), args)
}

/// Log a [`Severity::Verbose`] message through the default logger.
#[track_caller]
pub fn log_verbose(args: fmt::Arguments) {
    default_logger().log(&CallContext::caller(Severity::Verbose), args)
}
