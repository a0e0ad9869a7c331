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

use crate::target::Target;

/// A target whose output is captured by a test harness (like `cargo test`), and thus is
/// suppressed unless `--nocapture` or `--show-output` is specified.
///
/// # Examples
///
/// ```
/// use logsite::target::Testing;
///
/// let target = Testing::default();
/// ```
#[derive(Default, Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Testing {}

impl Target for Testing {
    fn commit(&self, entry: &[u8]) -> io::Result<()> {
        eprint!("{}", String::from_utf8_lossy(entry));
        Ok(())
    }
}
