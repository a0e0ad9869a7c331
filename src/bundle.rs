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

//! Component bundles: the filter, provider and printer of one severity.

use std::io;
use std::sync::Arc;

use crate::Context;
use crate::Error;
use crate::filter::AlwaysLog;
use crate::filter::Filter;
use crate::print::PlainPrinter;
use crate::print::Printer;
use crate::provider::ToStderr;
use crate::provider::TargetProvider;
use crate::target::TargetGroup;

/// The three roles that decide what happens to a message.
///
/// Each accessor returns `None` when the bundle does not supply that role. An absent filter
/// lets every message through; an absent provider or printer makes dispatch a no-op.
pub trait Bundle {
    /// The filter type.
    type Filter: Filter;
    /// The target provider type.
    type Provider: TargetProvider;
    /// The printer type.
    type Printer: Printer;

    /// The filter, if supplied.
    fn filter(&self) -> Option<&Self::Filter>;

    /// The target provider, if supplied.
    fn provider(&self) -> Option<&Self::Provider>;

    /// The printer, if supplied.
    fn printer(&self) -> Option<&Self::Printer>;
}

impl<B: Bundle + ?Sized> Bundle for &B {
    type Filter = B::Filter;
    type Provider = B::Provider;
    type Printer = B::Printer;

    fn filter(&self) -> Option<&Self::Filter> {
        (**self).filter()
    }

    fn provider(&self) -> Option<&Self::Provider> {
        (**self).provider()
    }

    fn printer(&self) -> Option<&Self::Printer> {
        (**self).printer()
    }
}

impl<B: Bundle + ?Sized> Bundle for Arc<B> {
    type Filter = B::Filter;
    type Provider = B::Provider;
    type Printer = B::Printer;

    fn filter(&self) -> Option<&Self::Filter> {
        (**self).filter()
    }

    fn provider(&self) -> Option<&Self::Provider> {
        (**self).provider()
    }

    fn printer(&self) -> Option<&Self::Printer> {
        (**self).printer()
    }
}

/// The type of a role a bundle does not supply.
///
/// It satisfies every role so that [`Components`] type-checks before all roles are set, but
/// [`Components`] never hands it out.
#[derive(Default, Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Absent {}

impl Filter for Absent {
    fn filter<C: Context>(&self, _: &C) -> bool {
        true
    }
}

impl TargetProvider for Absent {
    fn targets<C: Context>(&self, _: &C) -> impl TargetGroup {}
}

impl Printer for Absent {
    fn print<W: io::Write, C: Context>(&self, _: &mut W, _: &C, _: &str) -> Result<(), Error> {
        Ok(())
    }
}

/// The bundle used when nothing is configured: log everything to stderr, one message per
/// line.
pub type DefaultBundle = Components<AlwaysLog, ToStderr, PlainPrinter>;

/// A bundle assembled from individually chosen roles.
///
/// Start from [`Components::new`] with every role absent, or from [`Components::defaults`],
/// then replace roles one at a time. Each setter changes the bundle's type, so the whole
/// configuration is known at compile time.
///
/// # Examples
///
/// ```
/// use logsite::Components;
/// use logsite::Severity;
/// use logsite::SeverityFilter;
/// use logsite::print::PlainPrinter;
///
/// let bundle = Components::defaults()
///     .with_filter(SeverityFilter::AtLeast(Severity::Info))
///     .with_printer(PlainPrinter::default().with_location());
/// ```
#[derive(Debug, Clone)]
pub struct Components<F = Absent, P = Absent, R = Absent> {
    filter: Option<F>,
    provider: Option<P>,
    printer: Option<R>,
}

impl Components {
    /// A bundle with every role absent. Dispatching through it writes nothing.
    pub fn new() -> Self {
        Components {
            filter: None,
            provider: None,
            printer: None,
        }
    }

    /// The default roles: [`AlwaysLog`], [`ToStderr`] and [`PlainPrinter`].
    pub fn defaults() -> DefaultBundle {
        Components {
            filter: Some(AlwaysLog::default()),
            provider: Some(ToStderr::default()),
            printer: Some(PlainPrinter::default()),
        }
    }
}

impl Default for Components {
    fn default() -> Self {
        Components::new()
    }
}

impl<F, P, R> Components<F, P, R> {
    /// Replace the filter.
    pub fn with_filter<F2: Filter>(self, filter: F2) -> Components<F2, P, R> {
        Components {
            filter: Some(filter),
            provider: self.provider,
            printer: self.printer,
        }
    }

    /// Replace the target provider.
    pub fn with_provider<P2: TargetProvider>(self, provider: P2) -> Components<F, P2, R> {
        Components {
            filter: self.filter,
            provider: Some(provider),
            printer: self.printer,
        }
    }

    /// Replace the printer.
    pub fn with_printer<R2: Printer>(self, printer: R2) -> Components<F, P, R2> {
        Components {
            filter: self.filter,
            provider: self.provider,
            printer: Some(printer),
        }
    }

    /// Remove the filter, so that every message passes.
    pub fn without_filter(self) -> Components<Absent, P, R> {
        Components {
            filter: None,
            provider: self.provider,
            printer: self.printer,
        }
    }
}

impl<F, P, R> Bundle for Components<F, P, R>
where
    F: Filter,
    P: TargetProvider,
    R: Printer,
{
    type Filter = F;
    type Provider = P;
    type Printer = R;

    fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    fn printer(&self) -> Option<&R> {
        self.printer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;
    use crate::SeverityFilter;

    #[test]
    fn new_supplies_nothing() {
        let bundle = Components::new();
        assert!(bundle.filter().is_none());
        assert!(bundle.provider().is_none());
        assert!(bundle.printer().is_none());
    }

    #[test]
    fn defaults_supply_every_role() {
        let bundle = Components::defaults();
        assert!(bundle.filter().is_some());
        assert!(bundle.provider().is_some());
        assert!(bundle.printer().is_some());
    }

    #[test]
    fn setters_replace_one_role() {
        let bundle =
            Components::defaults().with_filter(SeverityFilter::AtLeast(Severity::Error));
        assert_eq!(
            bundle.filter(),
            Some(&SeverityFilter::AtLeast(Severity::Error))
        );
        assert!(bundle.provider().is_some());

        let bundle = bundle.without_filter();
        assert!(bundle.filter().is_none());
    }
}
