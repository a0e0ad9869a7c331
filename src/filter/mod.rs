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

//! Filters decide whether a log call proceeds.

use std::sync::Arc;

use crate::Context;

mod custom;
mod env;
mod severity;

pub use self::custom::CustomFilter;
pub use self::env::EnvFilter;
pub use self::env::EnvFilterBuilder;

/// Decide whether a message should be emitted.
///
/// A filter runs before any formatting or target resolution, so it must be cheap, free of
/// side effects, and must not panic.
pub trait Filter {
    /// Return `true` to let the message through, `false` to suppress it.
    fn filter<C: Context>(&self, ctx: &C) -> bool;
}

/// A filter that lets every message through.
#[derive(Default, Debug, Clone, Copy)]
#[non_exhaustive]
pub struct AlwaysLog {}

impl Filter for AlwaysLog {
    fn filter<C: Context>(&self, _: &C) -> bool {
        true
    }
}

impl<F: Filter + ?Sized> Filter for &F {
    fn filter<C: Context>(&self, ctx: &C) -> bool {
        (**self).filter(ctx)
    }
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn filter<C: Context>(&self, ctx: &C) -> bool {
        (**self).filter(ctx)
    }
}

impl<F: Filter + ?Sized> Filter for Arc<F> {
    fn filter<C: Context>(&self, ctx: &C) -> bool {
        (**self).filter(ctx)
    }
}

// A tuple of filters lets a message through only when every member does. Evaluation
// stops at the first rejection.
macro_rules! impl_filter_for_tuple {
    ($($name:ident)+) => {
        impl<$($name: Filter),+> Filter for ($($name,)+) {
            #[allow(non_snake_case)]
            fn filter<C: Context>(&self, ctx: &C) -> bool {
                let ($($name,)+) = self;
                $($name.filter(ctx))&&+
            }
        }
    };
}

impl_filter_for_tuple!(A);
impl_filter_for_tuple!(A B);
impl_filter_for_tuple!(A B D);
impl_filter_for_tuple!(A B D E);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CallContext;
    use crate::Severity;
    use crate::SeverityFilter;

    #[test]
    fn always_log_accepts_everything() {
        for severity in Severity::ALL {
            assert!(AlwaysLog::default().filter(&CallContext::caller(severity)));
        }
    }

    #[test]
    fn tuple_requires_every_member() {
        let ctx = CallContext::caller(Severity::Info);
        let both = (AlwaysLog::default(), SeverityFilter::AtLeast(Severity::Info));
        assert!(both.filter(&ctx));

        let strict = (AlwaysLog::default(), SeverityFilter::AtLeast(Severity::Error));
        assert!(!strict.filter(&ctx));
    }

    #[test]
    fn pointers_forward() {
        let ctx = CallContext::caller(Severity::Debug);
        let filter = Arc::new(SeverityFilter::Off);
        assert!(!filter.filter(&ctx));
        assert!(!(&filter).filter(&ctx));
    }
}
