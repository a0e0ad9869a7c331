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

//! Target providers resolve the targets of one log call.

use std::fmt;
use std::sync::Arc;

use crate::Context;
use crate::target::Stderr;
use crate::target::TargetGroup;

/// Supply the targets a message is written to.
///
/// The provider is consulted once per emitted message, after the filter accepted it, and
/// receives the same context the filter saw. It owns whatever resources the targets need;
/// the dispatch core only borrows the returned group for the duration of the call.
///
/// Resolution cannot fail. A provider with nothing to offer returns an empty group.
pub trait TargetProvider {
    /// Return the ordered targets for this call.
    fn targets<C: Context>(&self, ctx: &C) -> impl TargetGroup;
}

impl<P: TargetProvider + ?Sized> TargetProvider for &P {
    fn targets<C: Context>(&self, ctx: &C) -> impl TargetGroup {
        (**self).targets(ctx)
    }
}

impl<P: TargetProvider + ?Sized> TargetProvider for Box<P> {
    fn targets<C: Context>(&self, ctx: &C) -> impl TargetGroup {
        (**self).targets(ctx)
    }
}

impl<P: TargetProvider + ?Sized> TargetProvider for Arc<P> {
    fn targets<C: Context>(&self, ctx: &C) -> impl TargetGroup {
        (**self).targets(ctx)
    }
}

/// The default provider: a single standard error target.
#[derive(Default, Debug, Clone, Copy)]
#[non_exhaustive]
pub struct ToStderr {}

impl TargetProvider for ToStderr {
    fn targets<C: Context>(&self, _: &C) -> impl TargetGroup {
        (Stderr::default(),)
    }
}

/// A provider that never yields a target.
#[derive(Default, Debug, Clone, Copy)]
#[non_exhaustive]
pub struct NoTargets {}

impl TargetProvider for NoTargets {
    fn targets<C: Context>(&self, _: &C) -> impl TargetGroup {}
}

/// A provider that owns a fixed group and lends it to every call.
///
/// # Examples
///
/// ```
/// use logsite::provider::Fixed;
/// use logsite::target::Shared;
/// use logsite::target::Stderr;
///
/// let file = tempfile::tempfile().unwrap();
/// let provider = Fixed::new((Stderr::default(), Shared::new(file)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fixed<G> {
    group: G,
}

impl<G> Fixed<G>
where
    for<'a> &'a G: TargetGroup,
{
    /// Own `group` and hand out a borrow of it on every call.
    pub fn new(group: G) -> Self {
        Self { group }
    }
}

impl<G> Fixed<G> {
    /// The owned group.
    pub fn group(&self) -> &G {
        &self.group
    }
}

impl<G> TargetProvider for Fixed<G>
where
    for<'a> &'a G: TargetGroup,
{
    fn targets<C: Context>(&self, _: &C) -> impl TargetGroup {
        &self.group
    }
}

/// A provider backed by a closure over the call context.
///
/// The closure may route by severity, location or any other context data.
///
/// # Examples
///
/// ```
/// use logsite::Severity;
/// use logsite::provider::from_fn;
/// use logsite::target::Stderr;
///
/// // Only errors and worse reach stderr.
/// let provider = from_fn(|ctx| {
///     ctx.severity()
///         .is_at_least(Severity::Error)
///         .then(Stderr::default)
/// });
/// ```
pub struct FnProvider<F> {
    f: F,
}

impl<F> fmt::Debug for FnProvider<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnProvider {{ ... }}")
    }
}

/// Build a [`FnProvider`] from a closure.
pub fn from_fn<F, G>(f: F) -> FnProvider<F>
where
    F: Fn(&dyn Context) -> G,
    G: TargetGroup,
{
    FnProvider { f }
}

impl<F, G> TargetProvider for FnProvider<F>
where
    F: Fn(&dyn Context) -> G,
    G: TargetGroup,
{
    fn targets<C: Context>(&self, ctx: &C) -> impl TargetGroup {
        let ctx: &dyn Context = ctx;
        (self.f)(ctx)
    }
}
