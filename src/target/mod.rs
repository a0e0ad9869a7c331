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

//! Output targets and the groups a provider resolves them into.
//!
//! A [`Target`] is a sink that accepts one complete rendered entry at a time. A
//! [`TargetGroup`] is the ordered collection a [`TargetProvider`](crate::TargetProvider)
//! hands back for one log call: a tuple of differently typed elements, or a homogeneous
//! sequence. Every element is a [`TargetSource`]: either a target itself or a [`Deferred`]
//! closure that produces one when the entry is written.

use std::io;
use std::sync::Arc;

mod group;
mod shared;
mod stdio;
mod sync;
mod testing;

pub use self::group::Sequence;
pub use self::group::sequence;
pub use self::shared::Shared;
pub use self::stdio::Stderr;
pub use self::stdio::Stdout;
pub use self::sync::SyncStream;
pub use self::testing::Testing;

/// A sink for rendered log entries.
///
/// `commit` receives one whole entry. Implementations must make each commit atomic with
/// respect to other commits to the same target, so that entries from concurrent callers
/// never interleave.
pub trait Target {
    /// Write one complete entry.
    fn commit(&self, entry: &[u8]) -> io::Result<()>;

    /// Flush buffered entries.
    ///
    /// Default to a no-op.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: Target + ?Sized> Target for &T {
    fn commit(&self, entry: &[u8]) -> io::Result<()> {
        (**self).commit(entry)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<T: Target + ?Sized> Target for Box<T> {
    fn commit(&self, entry: &[u8]) -> io::Result<()> {
        (**self).commit(entry)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<T: Target + ?Sized> Target for Arc<T> {
    fn commit(&self, entry: &[u8]) -> io::Result<()> {
        (**self).commit(entry)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Receives the concrete targets of a group, one at a time, in group order.
pub trait TargetVisitor {
    /// Visit one target.
    fn visit<T: Target + ?Sized>(&mut self, target: &T);
}

/// An element of a [`TargetGroup`].
///
/// Every [`Target`] is a source of itself. [`Deferred`] wraps a closure that builds the
/// target on demand.
pub trait TargetSource {
    /// Resolve this element and hand the target to `visitor`.
    fn resolve<V: TargetVisitor>(&self, visitor: &mut V);
}

impl<T: Target + ?Sized> TargetSource for T {
    fn resolve<V: TargetVisitor>(&self, visitor: &mut V) {
        visitor.visit(self)
    }
}

/// A target produced by a zero-argument closure each time an entry is written.
///
/// # Examples
///
/// ```
/// use logsite::target::Stderr;
/// use logsite::target::deferred;
///
/// let group = (deferred(|| Stderr::default()),);
/// ```
#[derive(Clone, Copy)]
pub struct Deferred<F>(F);

impl<F> std::fmt::Debug for Deferred<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Deferred {{ ... }}")
    }
}

impl<F, T> TargetSource for Deferred<F>
where
    F: Fn() -> T,
    T: Target,
{
    fn resolve<V: TargetVisitor>(&self, visitor: &mut V) {
        let target = (self.0)();
        visitor.visit(&target)
    }
}

/// Wrap a closure as a [`Deferred`] target source.
pub fn deferred<F, T>(f: F) -> Deferred<F>
where
    F: Fn() -> T,
    T: Target,
{
    Deferred(f)
}

/// The ordered targets of one log call.
///
/// Groups are consumed by [`for_each_target`](TargetGroup::for_each_target), which visits
/// every element in order. Sequences are neither reordered nor deduplicated.
pub trait TargetGroup {
    /// Visit every element in order.
    fn for_each_target<V: TargetVisitor>(self, visitor: &mut V);
}
