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

//! The dispatch core.
//!
//! [`write`] and [`log`] run one message through a [`Bundle`]:
//!
//! 1. the filter decides whether the message proceeds;
//! 2. the provider resolves the targets for this call;
//! 3. for every target, in group order, the printer renders the entry into a
//!    [`SyncStream`], which commits it to the target in one piece.
//!
//! Each target receives the entry exactly once. Failures go to a [`Trap`] and never reach
//! the caller; the remaining targets are still written.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

use crate::Bundle;
use crate::Context;
use crate::Error;
use crate::filter::Filter;
use crate::print::Printer;
use crate::provider::TargetProvider;
use crate::target::SyncStream;
use crate::target::Target;
use crate::target::TargetGroup;
use crate::target::TargetVisitor;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// Whether `bundle` accepts a message with context `ctx`.
///
/// A bundle without a filter accepts everything.
pub fn enabled<B, C>(bundle: &B, ctx: &C) -> bool
where
    B: Bundle + ?Sized,
    C: Context,
{
    bundle.filter().is_none_or(|filter| filter.filter(ctx))
}

/// Write an already formatted message through `bundle`, reporting failures to
/// [`DefaultTrap`].
///
/// # Examples
///
/// ```
/// use logsite::CallContext;
/// use logsite::Components;
/// use logsite::Severity;
/// use logsite::dispatch;
///
/// let bundle = Components::defaults();
/// dispatch::write(&bundle, &CallContext::caller(Severity::Info), "ready");
/// ```
pub fn write<B, C>(bundle: &B, ctx: &C, message: &str)
where
    B: Bundle + ?Sized,
    C: Context,
{
    write_with_trap(bundle, &DefaultTrap::default(), ctx, message)
}

/// Write an already formatted message through `bundle`, reporting failures to `trap`.
pub fn write_with_trap<B, T, C>(bundle: &B, trap: &T, ctx: &C, message: &str)
where
    B: Bundle + ?Sized,
    T: Trap + ?Sized,
    C: Context,
{
    if enabled(bundle, ctx) {
        emit(bundle, trap, ctx, message);
    }
}

/// Interpolate `args` and write the result through `bundle`.
///
/// The filter runs first. A rejected message is never formatted, and a message without
/// placeholders is written without allocating.
pub fn log<B, T, C>(bundle: &B, trap: &T, ctx: &C, args: fmt::Arguments)
where
    B: Bundle + ?Sized,
    T: Trap + ?Sized,
    C: Context,
{
    if enabled(bundle, ctx) {
        emit(bundle, trap, ctx, &interpolate(args));
    }
}

/// Write `message` to every target of `bundle` without consulting the filter.
///
/// A bundle lacking a provider or a printer writes nothing.
pub fn emit<B, T, C>(bundle: &B, trap: &T, ctx: &C, message: &str)
where
    B: Bundle + ?Sized,
    T: Trap + ?Sized,
    C: Context,
{
    let (Some(provider), Some(printer)) = (bundle.provider(), bundle.printer()) else {
        return;
    };

    let mut visitor = PrintEach {
        printer,
        trap,
        ctx,
        message,
    };
    provider.targets(ctx).for_each_target(&mut visitor);
}

pub(crate) fn interpolate(args: fmt::Arguments) -> Cow<'static, str> {
    match args.as_str() {
        Some(message) => Cow::Borrowed(message),
        None => Cow::Owned(args.to_string()),
    }
}

struct PrintEach<'a, R: ?Sized, T: ?Sized, C> {
    printer: &'a R,
    trap: &'a T,
    ctx: &'a C,
    message: &'a str,
}

impl<R, T, C> TargetVisitor for PrintEach<'_, R, T, C>
where
    R: Printer + ?Sized,
    T: Trap + ?Sized,
    C: Context,
{
    fn visit<X: Target + ?Sized>(&mut self, target: &X) {
        let mut stream = SyncStream::new(target);
        let result = match self.printer.print(&mut stream, self.ctx, self.message) {
            Ok(()) => stream.commit().map_err(Error::from_io_error),
            Err(err) => {
                stream.discard();
                Err(err)
            }
        };

        if let Err(err) = result {
            let err = err
                .with_context("target", type_name::<X>())
                .with_context("severity", self.ctx.severity());
            self.trap.trap(&err);
        }
    }
}
