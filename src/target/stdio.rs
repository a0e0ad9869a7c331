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

use std::io;
use std::io::Write;

use crate::target::Target;

/// A target that writes entries to stdout.
///
/// Each entry is written while holding the stdout lock.
#[derive(Default, Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Stdout {}

impl Target for Stdout {
    fn commit(&self, entry: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(entry)
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// A target that writes entries to stderr.
///
/// Each entry is written while holding the stderr lock.
#[derive(Default, Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Stderr {}

impl Target for Stderr {
    fn commit(&self, entry: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(entry)
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().flush()
    }
}
