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

use std::borrow::Cow;

use crate::Context;
use crate::filter::Filter;

pub use env_filter::Builder as EnvFilterBuilder;

const DEFAULT_FILTER_ENV: &str = "RUST_LOG";

/// A filter that respects the `RUST_LOG` environment variable.
///
/// Directives are matched against the module path of the call site, or the source file
/// when the module path was not captured. `Fatal` is treated as `error` and `Verbose` as
/// `trace`.
///
/// Read [the `env_logger` documentation](https://docs.rs/env_logger/#enabling-logging) for the
/// directive syntax.
#[derive(Debug)]
pub struct EnvFilter(env_filter::Filter);

impl EnvFilter {
    /// Initializes the filter from the environment using default variable name `RUST_LOG`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logsite::filter::EnvFilter;
    /// let filter = EnvFilter::from_default_env();
    /// ```
    pub fn from_default_env() -> Self {
        EnvFilter::from_env(DEFAULT_FILTER_ENV)
    }

    /// Initializes the filter from `RUST_LOG`, falling back to `default` when unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use logsite::filter::EnvFilter;
    /// let filter = EnvFilter::from_default_env_or("info");
    /// ```
    pub fn from_default_env_or<'a, V>(default: V) -> Self
    where
        V: Into<Cow<'a, str>>,
    {
        EnvFilter::from_env_or(DEFAULT_FILTER_ENV, default)
    }

    /// Initializes the filter from the environment variable `name`.
    ///
    /// When the variable is unset no directive is configured and every message is
    /// rejected, matching `env_logger`.
    pub fn from_env<'a, E>(name: E) -> Self
    where
        E: Into<Cow<'a, str>>,
    {
        let mut builder = EnvFilterBuilder::new();
        let name = name.into();
        if let Ok(s) = std::env::var(&*name) {
            builder.parse(&s);
        }
        EnvFilter::new(builder)
    }

    /// Initializes the filter from the environment variable `name`, falling back to
    /// `default` when unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use logsite::filter::EnvFilter;
    /// let filter = EnvFilter::from_env_or("MY_LOG", "info,my_crate::storage=debug");
    /// ```
    pub fn from_env_or<'a, 'b, E, V>(name: E, default: V) -> Self
    where
        E: Into<Cow<'a, str>>,
        V: Into<Cow<'b, str>>,
    {
        let mut builder = EnvFilterBuilder::new();
        let name = name.into();
        let default = default.into();
        match std::env::var(&*name) {
            Ok(s) => builder.parse(&s),
            Err(_) => builder.parse(&default),
        };
        EnvFilter::new(builder)
    }

    /// Initializes the filter from the [`EnvFilterBuilder`].
    pub fn new(mut builder: EnvFilterBuilder) -> Self {
        EnvFilter(builder.build())
    }
}

impl From<&str> for EnvFilter {
    fn from(spec: &str) -> Self {
        let mut builder = EnvFilterBuilder::new();
        builder.parse(spec);
        EnvFilter::new(builder)
    }
}

impl Filter for EnvFilter {
    fn filter<C: Context>(&self, ctx: &C) -> bool {
        let metadata = log::MetadataBuilder::new()
            .level(ctx.severity().to_log_level())
            .target(ctx.target())
            .build();
        self.0.enabled(&metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CallContext;
    use crate::Location;
    use crate::Severity;

    fn ctx(severity: Severity, module: &'static str) -> CallContext {
        CallContext::new(
            severity,
            Location::new("src/lib.rs", 1, 1).with_module_path(module),
        )
    }

    #[test]
    fn directives_match_module_path() {
        let filter = EnvFilter::from("warn,app::storage=debug");

        assert!(filter.filter(&ctx(Severity::Warning, "app::net")));
        assert!(!filter.filter(&ctx(Severity::Info, "app::net")));
        assert!(filter.filter(&ctx(Severity::Debug, "app::storage::page")));
        assert!(!filter.filter(&ctx(Severity::Verbose, "app::storage")));
    }

    #[test]
    fn fatal_counts_as_error() {
        let filter = EnvFilter::from("error");
        assert!(filter.filter(&ctx(Severity::Fatal, "app")));
        assert!(!filter.filter(&ctx(Severity::Warning, "app")));
    }

    #[test]
    fn fallback_applies_when_unset() {
        let filter = EnvFilter::from_env_or("LOGSITE_TEST_SURELY_UNSET_VARIABLE", "info");
        assert!(filter.filter(&ctx(Severity::Info, "app")));
        assert!(!filter.filter(&ctx(Severity::Debug, "app")));
    }
}
