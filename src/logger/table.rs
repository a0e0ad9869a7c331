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

use crate::Bundle;
use crate::Context;
use crate::Severity;
use crate::dispatch;
use crate::trap::Trap;

/// A severity-keyed set of bundles that a [`Logger`](crate::Logger) dispatches through.
///
/// The table picks the bundle for the context's severity and runs the dispatch core with
/// that bundle's own types, so entries for different severities may use entirely different
/// filters, providers and printers.
pub trait ComponentTable {
    /// Whether the bundle for `ctx` accepts the message.
    fn enabled<C: Context>(&self, ctx: &C) -> bool;

    /// Write `message` to the targets of the bundle for `ctx`, skipping the filter.
    fn emit<C: Context>(&self, trap: &dyn Trap, ctx: &C, message: &str);

    /// Write an already formatted message, subject to the filter.
    fn write<C: Context>(&self, trap: &dyn Trap, ctx: &C, message: &str) {
        if self.enabled(ctx) {
            self.emit(trap, ctx, message);
        }
    }

    /// Interpolate `args` and write the result, unless the filter rejects `ctx`.
    fn log<C: Context>(&self, trap: &dyn Trap, ctx: &C, args: fmt::Arguments) {
        if self.enabled(ctx) {
            self.emit(trap, ctx, &dispatch::interpolate(args));
        }
    }
}

/// A table that uses one bundle for every severity.
#[derive(Debug, Clone, Default)]
pub struct Uniform<B> {
    bundle: B,
}

impl<B: Bundle> Uniform<B> {
    /// Use `bundle` for every severity.
    pub fn new(bundle: B) -> Self {
        Self { bundle }
    }

    /// The shared bundle.
    pub fn bundle(&self) -> &B {
        &self.bundle
    }

    /// Take the bundle back.
    pub fn into_inner(self) -> B {
        self.bundle
    }
}

impl<B: Bundle> ComponentTable for Uniform<B> {
    fn enabled<C: Context>(&self, ctx: &C) -> bool {
        dispatch::enabled(&self.bundle, ctx)
    }

    fn emit<C: Context>(&self, trap: &dyn Trap, ctx: &C, message: &str) {
        dispatch::emit(&self.bundle, trap, ctx, message)
    }
}

/// A table with one entry per severity, all of the same bundle type.
///
/// Every entry starts as a copy of the default bundle; [`with`](SeverityTable::with)
/// overrides a single severity. Use [`PerSeverity`] when severities need different
/// component types.
///
/// # Examples
///
/// ```
/// use logsite::Components;
/// use logsite::Severity;
/// use logsite::SeverityFilter;
/// use logsite::SeverityTable;
///
/// // Suppress verbose messages, keep the defaults for everything else.
/// let table = SeverityTable::new(Components::defaults().with_filter(SeverityFilter::All))
///     .with(
///         Severity::Verbose,
///         Components::defaults().with_filter(SeverityFilter::Off),
///     );
/// ```
#[derive(Debug, Clone)]
pub struct SeverityTable<B> {
    entries: [B; 6],
}

impl<B: Bundle + Clone> SeverityTable<B> {
    /// Use `default` for every severity.
    pub fn new(default: B) -> Self {
        Self {
            entries: std::array::from_fn(|_| default.clone()),
        }
    }
}

impl<B: Bundle> SeverityTable<B> {
    /// Replace the entry for `severity`.
    pub fn with(mut self, severity: Severity, bundle: B) -> Self {
        self.entries[severity.index()] = bundle;
        self
    }

    /// The entry for `severity`.
    pub fn get(&self, severity: Severity) -> &B {
        &self.entries[severity.index()]
    }
}

impl<B: Bundle> ComponentTable for SeverityTable<B> {
    fn enabled<C: Context>(&self, ctx: &C) -> bool {
        dispatch::enabled(self.get(ctx.severity()), ctx)
    }

    fn emit<C: Context>(&self, trap: &dyn Trap, ctx: &C, message: &str) {
        dispatch::emit(self.get(ctx.severity()), trap, ctx, message)
    }
}

/// A table with an independently typed bundle for each severity.
///
/// Start from [`PerSeverity::new`], which copies one bundle into every slot, then replace
/// slots one at a time. Each setter changes the table's type.
///
/// # Examples
///
/// ```
/// use logsite::Components;
/// use logsite::PerSeverity;
/// use logsite::print::Formatted;
/// use logsite::print::TextFormatter;
/// use logsite::provider::Fixed;
/// use logsite::target::Shared;
///
/// let file = tempfile::tempfile().unwrap();
/// let table = PerSeverity::new(Components::defaults()).with_debug(
///     Components::defaults()
///         .with_provider(Fixed::new((Shared::new(file),)))
///         .with_printer(Formatted::new(TextFormatter::default())),
/// );
/// let logger = logsite::builder().table(table).build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct PerSeverity<Fa, Er, Wa, In, De, Ve> {
    fatal: Fa,
    error: Er,
    warning: Wa,
    info: In,
    debug: De,
    verbose: Ve,
}

impl<B: Bundle + Clone> PerSeverity<B, B, B, B, B, B> {
    /// Use `default` for every severity.
    pub fn new(default: B) -> Self {
        Self {
            fatal: default.clone(),
            error: default.clone(),
            warning: default.clone(),
            info: default.clone(),
            debug: default.clone(),
            verbose: default,
        }
    }
}

impl<Fa, Er, Wa, In, De, Ve> PerSeverity<Fa, Er, Wa, In, De, Ve> {
    /// Replace the [`Severity::Fatal`] entry.
    pub fn with_fatal<B: Bundle>(self, fatal: B) -> PerSeverity<B, Er, Wa, In, De, Ve> {
        let Self {
            error,
            warning,
            info,
            debug,
            verbose,
            ..
        } = self;
        PerSeverity {
            fatal,
            error,
            warning,
            info,
            debug,
            verbose,
        }
    }

    /// Replace the [`Severity::Error`] entry.
    pub fn with_error<B: Bundle>(self, error: B) -> PerSeverity<Fa, B, Wa, In, De, Ve> {
        let Self {
            fatal,
            warning,
            info,
            debug,
            verbose,
            ..
        } = self;
        PerSeverity {
            fatal,
            error,
            warning,
            info,
            debug,
            verbose,
        }
    }

    /// Replace the [`Severity::Warning`] entry.
    pub fn with_warning<B: Bundle>(self, warning: B) -> PerSeverity<Fa, Er, B, In, De, Ve> {
        let Self {
            fatal,
            error,
            info,
            debug,
            verbose,
            ..
        } = self;
        PerSeverity {
            fatal,
            error,
            warning,
            info,
            debug,
            verbose,
        }
    }

    /// Replace the [`Severity::Info`] entry.
    pub fn with_info<B: Bundle>(self, info: B) -> PerSeverity<Fa, Er, Wa, B, De, Ve> {
        let Self {
            fatal,
            error,
            warning,
            debug,
            verbose,
            ..
        } = self;
        PerSeverity {
            fatal,
            error,
            warning,
            info,
            debug,
            verbose,
        }
    }

    /// Replace the [`Severity::Debug`] entry.
    pub fn with_debug<B: Bundle>(self, debug: B) -> PerSeverity<Fa, Er, Wa, In, B, Ve> {
        let Self {
            fatal,
            error,
            warning,
            info,
            verbose,
            ..
        } = self;
        PerSeverity {
            fatal,
            error,
            warning,
            info,
            debug,
            verbose,
        }
    }

    /// Replace the [`Severity::Verbose`] entry.
    pub fn with_verbose<B: Bundle>(self, verbose: B) -> PerSeverity<Fa, Er, Wa, In, De, B> {
        let Self {
            fatal,
            error,
            warning,
            info,
            debug,
            ..
        } = self;
        PerSeverity {
            fatal,
            error,
            warning,
            info,
            debug,
            verbose,
        }
    }
}

// Bind the entry for `$severity` to `$bundle` and evaluate `$body` with its concrete type.
macro_rules! with_entry {
    ($table:expr, $severity:expr, |$bundle:ident| $body:expr) => {
        match $severity {
            Severity::Fatal => {
                let $bundle = &$table.fatal;
                $body
            }
            Severity::Error => {
                let $bundle = &$table.error;
                $body
            }
            Severity::Warning => {
                let $bundle = &$table.warning;
                $body
            }
            Severity::Info => {
                let $bundle = &$table.info;
                $body
            }
            Severity::Debug => {
                let $bundle = &$table.debug;
                $body
            }
            Severity::Verbose => {
                let $bundle = &$table.verbose;
                $body
            }
        }
    };
}

impl<Fa, Er, Wa, In, De, Ve> ComponentTable for PerSeverity<Fa, Er, Wa, In, De, Ve>
where
    Fa: Bundle,
    Er: Bundle,
    Wa: Bundle,
    In: Bundle,
    De: Bundle,
    Ve: Bundle,
{
    fn enabled<C: Context>(&self, ctx: &C) -> bool {
        with_entry!(self, ctx.severity(), |bundle| dispatch::enabled(bundle, ctx))
    }

    fn emit<C: Context>(&self, trap: &dyn Trap, ctx: &C, message: &str) {
        with_entry!(self, ctx.severity(), |bundle| {
            dispatch::emit(bundle, trap, ctx, message)
        })
    }
}
