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

//! Traps receive the failures the dispatch core swallows.
//!
//! A log call never returns an error to its caller. When a printer or a target fails, the
//! error is handed to the logger's [`Trap`] instead, and the remaining targets still
//! receive the entry.

use std::fmt;
use std::io;
use std::io::Write;

use crate::Error;

/// An out-of-band handler for logging failures.
pub trait Trap: fmt::Debug + Send + Sync + 'static {
    /// Handle one failure. Must not panic.
    fn trap(&self, err: &Error);
}

impl<T: Trap> From<T> for Box<dyn Trap> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// The default trap: write the error to stderr.
///
/// A failure to write to stderr is ignored.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct DefaultTrap {}

impl Trap for DefaultTrap {
    fn trap(&self, err: &Error) {
        let _ = writeln!(io::stderr(), "{err}");
    }
}

/// A trap that discards every failure.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct SilentTrap {}

impl Trap for SilentTrap {
    fn trap(&self, _: &Error) {}
}
