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
use crate::filter::Filter;

type FilterFunction = dyn Fn(&dyn Context) -> bool + Send + Sync + 'static;

/// A filter backed by a closure.
///
/// The closure receives the call context and returns whether the message should be
/// emitted. For example:
///
/// ```
/// use logsite::Context;
/// use logsite::Severity;
/// use logsite::filter::CustomFilter;
///
/// let filter = CustomFilter::new(|ctx: &dyn Context| {
///     ctx.severity() != Severity::Debug
///         || ctx.location().module_path() == Some("my_crate::storage")
/// });
/// ```
pub struct CustomFilter {
    f: Box<FilterFunction>,
}

impl fmt::Debug for CustomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomFilter {{ ... }}")
    }
}

impl CustomFilter {
    /// Create a new filter from a closure.
    pub fn new(filter: impl Fn(&dyn Context) -> bool + Send + Sync + 'static) -> Self {
        CustomFilter {
            f: Box::new(filter),
        }
    }
}

impl Filter for CustomFilter {
    fn filter<C: Context>(&self, ctx: &C) -> bool {
        let ctx: &dyn Context = ctx;
        (self.f)(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CallContext;
    use crate::ContextExt;
    use crate::Severity;

    #[test]
    fn closure_sees_the_context() {
        let filter = CustomFilter::new(|ctx: &dyn Context| ctx.severity() != Severity::Debug);
        assert!(filter.filter(&CallContext::caller(Severity::Info)));
        assert!(!filter.filter(&CallContext::caller(Severity::Debug)));
    }

    #[test]
    fn extended_contexts_are_accepted() {
        let filter = CustomFilter::new(|ctx: &dyn Context| ctx.severity() == Severity::Error);
        let ctx = CallContext::caller(Severity::Error).with_field("module", &"net");
        assert!(filter.filter(&ctx));
    }
}
