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

use std::iter::Empty;

use crate::target::TargetGroup;
use crate::target::TargetSource;
use crate::target::TargetVisitor;

// Tuples are the fixed-arity heterogeneous groups: each element may be a different type.
macro_rules! impl_group_for_tuple {
    ($($name:ident)*) => {
        impl<$($name: TargetSource),*> TargetGroup for ($($name,)*) {
            #[allow(non_snake_case, unused_variables)]
            fn for_each_target<V: TargetVisitor>(self, visitor: &mut V) {
                let ($($name,)*) = self;
                $($name.resolve(visitor);)*
            }
        }

        impl<'a, $($name: TargetSource),*> TargetGroup for &'a ($($name,)*) {
            #[allow(non_snake_case, unused_variables)]
            fn for_each_target<V: TargetVisitor>(self, visitor: &mut V) {
                let ($($name,)*) = self;
                $($name.resolve(visitor);)*
            }
        }
    };
}

impl_group_for_tuple!();
impl_group_for_tuple!(A);
impl_group_for_tuple!(A B);
impl_group_for_tuple!(A B D);
impl_group_for_tuple!(A B D E);
impl_group_for_tuple!(A B D E G);
impl_group_for_tuple!(A B D E G H);
impl_group_for_tuple!(A B D E G H I);
impl_group_for_tuple!(A B D E G H I J);

impl<S: TargetSource> TargetGroup for Vec<S> {
    fn for_each_target<V: TargetVisitor>(self, visitor: &mut V) {
        self.as_slice().for_each_target(visitor)
    }
}

impl<S: TargetSource> TargetGroup for &Vec<S> {
    fn for_each_target<V: TargetVisitor>(self, visitor: &mut V) {
        self.as_slice().for_each_target(visitor)
    }
}

impl<S: TargetSource> TargetGroup for &[S] {
    fn for_each_target<V: TargetVisitor>(self, visitor: &mut V) {
        for source in self {
            source.resolve(visitor);
        }
    }
}

impl<S: TargetSource, const N: usize> TargetGroup for [S; N] {
    fn for_each_target<V: TargetVisitor>(self, visitor: &mut V) {
        self.as_slice().for_each_target(visitor)
    }
}

impl<S: TargetSource, const N: usize> TargetGroup for &[S; N] {
    fn for_each_target<V: TargetVisitor>(self, visitor: &mut V) {
        self.as_slice().for_each_target(visitor)
    }
}

impl<S: TargetSource> TargetGroup for Option<S> {
    fn for_each_target<V: TargetVisitor>(self, visitor: &mut V) {
        if let Some(source) = self {
            source.resolve(visitor);
        }
    }
}

impl<S: TargetSource> TargetGroup for &Option<S> {
    fn for_each_target<V: TargetVisitor>(self, visitor: &mut V) {
        if let Some(source) = self {
            source.resolve(visitor);
        }
    }
}

impl<S: TargetSource> TargetGroup for Empty<S> {
    fn for_each_target<V: TargetVisitor>(self, _: &mut V) {}
}

/// A lazily produced sequence of target sources.
///
/// Use [`sequence`] to build one from any iterable. Elements are produced and visited one
/// at a time, in iteration order.
#[derive(Debug, Clone)]
pub struct Sequence<I>(I);

/// Wrap an iterable of target sources as a [`TargetGroup`].
///
/// # Examples
///
/// ```
/// use logsite::target::Stderr;
/// use logsite::target::sequence;
///
/// let targets = sequence((0..2).map(|_| Stderr::default()));
/// ```
pub fn sequence<I>(iter: I) -> Sequence<I::IntoIter>
where
    I: IntoIterator,
    I::Item: TargetSource,
{
    Sequence(iter.into_iter())
}

impl<I> TargetGroup for Sequence<I>
where
    I: Iterator,
    I::Item: TargetSource,
{
    fn for_each_target<V: TargetVisitor>(self, visitor: &mut V) {
        for source in self.0 {
            source.resolve(visitor);
        }
    }
}
