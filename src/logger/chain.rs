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

use crate::Context;
use crate::dispatch::interpolate;
use crate::logger::Log;

/// A logger that forwards every message to several loggers, in order.
///
/// The message is interpolated once and handed to each logger whose filter accepts it.
///
/// # Examples
///
/// ```
/// use logsite::Chain;
/// use logsite::Components;
/// use logsite::Severity;
/// use logsite::SeverityFilter;
///
/// let errors_only = Components::defaults().with_filter(SeverityFilter::AtLeast(Severity::Error));
/// let chain = Chain::new()
///     .with(logsite::builder().build())
///     .with(logsite::builder().bundle(errors_only).build());
/// logsite::warn!(logger: chain, "disk {}% full", 91);
/// ```
#[derive(Debug, Default)]
pub struct Chain {
    loggers: Vec<Box<dyn Log>>,
}

impl Chain {
    /// An empty chain. It accepts nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `logger` to the chain.
    pub fn with(mut self, logger: impl Log + 'static) -> Self {
        self.loggers.push(Box::new(logger));
        self
    }
}

impl Log for Chain {
    fn enabled(&self, ctx: &dyn Context) -> bool {
        self.loggers.iter().any(|logger| logger.enabled(ctx))
    }

    fn write(&self, ctx: &dyn Context, message: &str) {
        for logger in &self.loggers {
            logger.write(ctx, message);
        }
    }

    fn log(&self, ctx: &dyn Context, args: fmt::Arguments) {
        if self.enabled(ctx) {
            let message = interpolate(args);
            self.write(ctx, &message);
        }
    }
}
