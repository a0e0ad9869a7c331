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

use crate::CallContext;
use crate::Components;
use crate::Context;
use crate::DefaultBundle;
use crate::Severity;
use crate::logger::ComponentTable;
use crate::logger::Log;
use crate::logger::Uniform;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// A logger instance: a severity-keyed component table plus a trap for failures.
///
/// Any number of loggers may coexist. Use one directly through its methods or the `logger:`
/// argument of the logging macros, or install one as the process-wide default with
/// [`set_default_logger`](crate::set_default_logger).
///
/// # Examples
///
/// ```
/// use logsite::Components;
/// use logsite::Logger;
/// use logsite::print::PlainPrinter;
///
/// let logger = logsite::builder()
///     .bundle(Components::defaults().with_printer(PlainPrinter::default().with_location()))
///     .build();
/// logger.info(format_args!("listening on {}", 8080));
/// logsite::info!(logger: logger, "listening on {}", 8080);
/// ```
pub struct Logger<T = Uniform<DefaultBundle>> {
    table: T,
    trap: Box<dyn Trap>,
}

impl<T> fmt::Debug for Logger<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("trap", &self.trap)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(Uniform::new(Components::defaults()))
    }
}

impl<T: ComponentTable> Logger<T> {
    pub(super) fn with_parts(table: T, trap: Box<dyn Trap>) -> Self {
        Self { table, trap }
    }

    /// Create a logger over `table` that reports failures to [`DefaultTrap`].
    pub fn new(table: T) -> Self {
        Self::with_parts(table, Box::new(DefaultTrap::default()))
    }

    /// The component table.
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Whether a message with context `ctx` would be written.
    pub fn enabled<C: Context>(&self, ctx: &C) -> bool {
        self.table.enabled(ctx)
    }

    /// Write an already formatted message.
    pub fn write<C: Context>(&self, ctx: &C, message: &str) {
        self.table.write(self.trap.as_ref(), ctx, message)
    }

    /// Interpolate `args` and write the result, unless the filter rejects `ctx`.
    pub fn log<C: Context>(&self, ctx: &C, args: fmt::Arguments) {
        self.table.log(self.trap.as_ref(), ctx, args)
    }

    /// Log a [`Severity::Fatal`] message at the caller's location.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments) {
        self.log(&CallContext::caller(Severity::Fatal), args)
    }

    /// Log a [`Severity::Error`] message at the caller's location.
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments) {
        self.log(&CallContext::caller(Severity::Error), args)
    }

    /// Log a [`Severity::Warning`] message at the caller's location.
    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments) {
        self.log(&CallContext::caller(Severity::Warning), args)
    }

    /// Log a [`Severity::Info`] message at the caller's location.
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments) {
        self.log(&CallContext::caller(Severity::Info), args)
    }

    /// Log a [`Severity::Debug`] message at the caller's location.
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments) {
        self.log(&CallContext::caller(Severity::Debug), args)
    }

    /// Log a [`Severity::Verbose`] message at the caller's location.
    #[track_caller]
    pub fn verbose(&self, args: fmt::Arguments) {
        self.log(&CallContext::caller(Severity::Verbose), args)
    }
}

impl<T> Log for Logger<T>
where
    T: ComponentTable + Send + Sync,
{
    fn enabled(&self, ctx: &dyn Context) -> bool {
        Self::enabled(self, &ctx)
    }

    fn write(&self, ctx: &dyn Context, message: &str) {
        Self::write(self, &ctx, message)
    }

    fn log(&self, ctx: &dyn Context, args: fmt::Arguments) {
        Self::log(self, &ctx, args)
    }
}
