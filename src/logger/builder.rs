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

use crate::Bundle;
use crate::Components;
use crate::DefaultBundle;
use crate::Logger;
use crate::logger::ComponentTable;
use crate::logger::Log;
use crate::logger::Uniform;
use crate::logger::set_default_logger;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// Create a new [`LoggerBuilder`] starting from the default components.
///
/// # Examples
///
/// ```
/// use logsite::Components;
/// use logsite::Severity;
/// use logsite::SeverityFilter;
///
/// let logger = logsite::builder()
///     .bundle(Components::defaults().with_filter(SeverityFilter::AtLeast(Severity::Info)))
///     .build();
/// ```
pub fn builder() -> LoggerBuilder<Uniform<DefaultBundle>> {
    LoggerBuilder {
        table: Uniform::new(Components::defaults()),
        trap: Box::new(DefaultTrap::default()),
    }
}

/// A builder for configuring a [`Logger`] and optionally installing it as the default.
///
/// # Examples
///
/// ```
/// use logsite::trap::SilentTrap;
///
/// logsite::builder().trap(SilentTrap::default()).apply();
/// ```
#[must_use = "call `apply` to set the default logger or `build` to construct a logger instance"]
#[derive(Debug)]
pub struct LoggerBuilder<T> {
    table: T,
    trap: Box<dyn Trap>,
}

impl<T: ComponentTable> LoggerBuilder<T> {
    /// Use `bundle` for every severity.
    pub fn bundle<B: Bundle>(self, bundle: B) -> LoggerBuilder<Uniform<B>> {
        self.table(Uniform::new(bundle))
    }

    /// Use a severity-keyed table, such as a [`SeverityTable`](crate::SeverityTable).
    pub fn table<T2: ComponentTable>(self, table: T2) -> LoggerBuilder<T2> {
        LoggerBuilder {
            table,
            trap: self.trap,
        }
    }

    /// Report logging failures to `trap`. Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Build the [`Logger`].
    pub fn build(self) -> Logger<T> {
        Logger::with_parts(self.table, self.trap)
    }
}

impl<T> LoggerBuilder<T>
where
    T: ComponentTable + Send + Sync + 'static,
{
    /// Install the logger as the process-wide default.
    ///
    /// This should be called early in the execution of a Rust program. The default logger
    /// is fixed at its first use; messages logged before this call go to the logger that
    /// was in place then.
    ///
    /// # Errors
    ///
    /// Return the rejected logger if a default logger has already been set or used.
    ///
    /// # Examples
    ///
    /// ```
    /// if logsite::builder().try_apply().is_err() {
    ///     eprintln!("failed to set logger");
    /// }
    /// ```
    pub fn try_apply(self) -> Result<(), Box<dyn Log>> {
        set_default_logger(self.build())
    }

    /// Install the logger as the process-wide default.
    ///
    /// # Panics
    ///
    /// Panic if a default logger has already been set or used.
    ///
    /// # Examples
    ///
    /// ```
    /// logsite::builder().apply();
    /// ```
    pub fn apply(self) {
        self.try_apply()
            .expect("LoggerBuilder::apply must be called before the default logger is used");
    }
}
