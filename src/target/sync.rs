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

use crate::target::Target;

/// A buffered writer that commits everything written to it as one entry.
///
/// Printers write into a `SyncStream` piece by piece; nothing reaches the target until
/// [`commit`](SyncStream::commit) is called, at which point the whole buffer is handed to
/// [`Target::commit`] in a single call and the target is flushed. Entries from concurrent
/// callers therefore never interleave on a target whose commit is atomic.
///
/// A stream dropped without `commit`, including one unwound by a panicking printer,
/// discards its buffer.
pub struct SyncStream<'a, T: Target + ?Sized> {
    target: &'a T,
    buf: Vec<u8>,
}

impl<T: Target + ?Sized> fmt::Debug for SyncStream<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncStream")
            .field("buffered", &self.buf.len())
            .finish_non_exhaustive()
    }
}

impl<'a, T: Target + ?Sized> SyncStream<'a, T> {
    /// Open a stream over `target`.
    pub fn new(target: &'a T) -> Self {
        Self {
            target,
            buf: Vec::new(),
        }
    }

    /// The bytes written so far and not yet committed.
    pub fn buffered(&self) -> &[u8] {
        &self.buf
    }

    /// Commit the buffered entry to the target and flush it.
    ///
    /// An empty buffer commits nothing.
    pub fn commit(self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.target.commit(&self.buf)?;
        self.target.flush()
    }

    /// Drop the buffered bytes without committing them.
    pub fn discard(self) {}
}

impl<T: Target + ?Sized> io::Write for SyncStream<'_, T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.buf.extend_from_slice(buf);
        Ok(())
    }

    // The entry is committed as a whole; flushing mid-entry would split it.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::target::Shared;

    #[test]
    fn pieces_are_committed_once() {
        let target = Shared::new(Vec::new());
        let mut stream = SyncStream::new(&target);
        write!(stream, "value=").unwrap();
        write!(stream, "{}", 42).unwrap();
        stream.write_all(b"\n").unwrap();
        stream.flush().unwrap();
        assert!(target.with(|buf| buf.is_empty()));
        assert_eq!(stream.buffered(), b"value=42\n");

        stream.commit().unwrap();
        assert_eq!(target.into_inner(), b"value=42\n");
    }

    #[test]
    fn uncommitted_bytes_are_dropped() {
        let target = Shared::new(Vec::new());
        {
            let mut stream = SyncStream::new(&target);
            stream.write_all(b"dropped\n").unwrap();
        }
        assert!(target.into_inner().is_empty());
    }

    #[test]
    fn discarded_bytes_never_arrive() {
        let target = Shared::new(Vec::new());
        let mut stream = SyncStream::new(&target);
        stream.write_all(b"half an ent").unwrap();
        stream.discard();
        assert!(target.into_inner().is_empty());
    }

    #[test]
    fn empty_stream_commits_nothing() {
        #[derive(Default)]
        struct Counting(std::cell::Cell<usize>);

        impl Target for Counting {
            fn commit(&self, _: &[u8]) -> io::Result<()> {
                self.0.set(self.0.get() + 1);
                Ok(())
            }
        }

        let target = Counting::default();
        SyncStream::new(&target).commit().unwrap();
        assert_eq!(target.0.get(), 0);
    }
}
