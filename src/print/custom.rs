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

use crate::Context;
use crate::Error;
use crate::print::Formatter;
use crate::print::Printer;

type PrintFunction =
    dyn Fn(&mut dyn io::Write, &dyn Context, &str) -> io::Result<()> + Send + Sync + 'static;

type FormatFunction =
    dyn Fn(&dyn Context, &str, &mut String) -> fmt::Result + Send + Sync + 'static;

/// A printer backed by a closure.
///
/// The closure writes the whole entry, line terminator included.
///
/// # Examples
///
/// ```
/// use logsite::print::CustomPrinter;
///
/// let printer = CustomPrinter::new(|out, ctx, message| {
///     writeln!(out, "[{}] {message}", ctx.severity())
/// });
/// ```
pub struct CustomPrinter {
    f: Box<PrintFunction>,
}

impl fmt::Debug for CustomPrinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomPrinter {{ ... }}")
    }
}

impl CustomPrinter {
    /// Create a printer from `print`.
    pub fn new(
        print: impl Fn(&mut dyn io::Write, &dyn Context, &str) -> io::Result<()>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        CustomPrinter { f: Box::new(print) }
    }
}

impl Printer for CustomPrinter {
    fn print<W: io::Write, C: Context>(
        &self,
        out: &mut W,
        ctx: &C,
        message: &str,
    ) -> Result<(), Error> {
        (self.f)(out, ctx, message).map_err(Error::from_io_error)
    }
}

/// A formatter backed by a closure.
///
/// # Examples
///
/// ```
/// use std::fmt::Write;
///
/// use logsite::print::CustomFormatter;
///
/// let formatter = CustomFormatter::new(|ctx, message, out| {
///     write!(out, "{} - {message}", ctx.severity())
/// });
/// ```
pub struct CustomFormatter {
    f: Box<FormatFunction>,
}

impl fmt::Debug for CustomFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomFormatter {{ ... }}")
    }
}

impl CustomFormatter {
    /// Create a formatter from `format`.
    pub fn new(
        format: impl Fn(&dyn Context, &str, &mut String) -> fmt::Result + Send + Sync + 'static,
    ) -> Self {
        CustomFormatter {
            f: Box::new(format),
        }
    }
}

impl Formatter for CustomFormatter {
    fn format<C: Context>(&self, ctx: &C, message: &str, out: &mut String) -> Result<(), Error> {
        (self.f)(ctx, message, out).map_err(Error::from_fmt_error)
    }
}
