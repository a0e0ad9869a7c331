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
use std::io;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::target::Target;

/// A target over any [`io::Write`], serialized by a mutex.
///
/// Use this for an open file, a socket, or an in-memory buffer. The provider that owns a
/// `Shared` decides how long the underlying writer lives.
///
/// # Examples
///
/// ```
/// use logsite::target::Shared;
///
/// let file = tempfile::tempfile().unwrap();
/// let target = Shared::new(file);
/// ```
pub struct Shared<W> {
    writer: Mutex<W>,
}

impl<W> fmt::Debug for Shared<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shared {{ ... }}")
    }
}

impl<W: Default> Default for Shared<W> {
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> Shared<W> {
    /// Wrap `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Run `f` with exclusive access to the writer.
    pub fn with<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.lock())
    }

    /// Take the writer back.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A panic while holding the lock leaves at worst a partial entry behind; keep writing.
    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: io::Write> Target for Shared<W> {
    fn commit(&self, entry: &[u8]) -> io::Result<()> {
        self.lock().write_all(entry)
    }

    fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }
}
