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

//! Printers and formatters render a message into an entry.
//!
//! A [`Printer`] writes the complete entry, line terminator included, to the stream the
//! dispatch core hands it. A [`Formatter`] only builds the text; wrap it in [`Formatted`] to
//! use it as a printer, which appends the terminator.

use std::io;
use std::sync::Arc;

use crate::Context;
use crate::Error;

mod custom;
mod text;

pub use self::custom::CustomFormatter;
pub use self::custom::CustomPrinter;
pub use self::text::TextFormatter;

/// Render one entry onto an output stream.
///
/// The printer writes the whole entry including its line terminator; the dispatch core
/// adds nothing. The stream buffers the entry for a single target, so partial output of a
/// failed print never reaches the sink.
pub trait Printer {
    /// Write the entry for `message` to `out`.
    fn print<W: io::Write, C: Context>(
        &self,
        out: &mut W,
        ctx: &C,
        message: &str,
    ) -> Result<(), Error>;
}

impl<P: Printer + ?Sized> Printer for &P {
    fn print<W: io::Write, C: Context>(
        &self,
        out: &mut W,
        ctx: &C,
        message: &str,
    ) -> Result<(), Error> {
        (**self).print(out, ctx, message)
    }
}

impl<P: Printer + ?Sized> Printer for Box<P> {
    fn print<W: io::Write, C: Context>(
        &self,
        out: &mut W,
        ctx: &C,
        message: &str,
    ) -> Result<(), Error> {
        (**self).print(out, ctx, message)
    }
}

impl<P: Printer + ?Sized> Printer for Arc<P> {
    fn print<W: io::Write, C: Context>(
        &self,
        out: &mut W,
        ctx: &C,
        message: &str,
    ) -> Result<(), Error> {
        (**self).print(out, ctx, message)
    }
}

/// Render one entry into a string, without the line terminator.
pub trait Formatter {
    /// Append the text for `message` to `out`.
    fn format<C: Context>(&self, ctx: &C, message: &str, out: &mut String) -> Result<(), Error>;
}

impl<F: Formatter + ?Sized> Formatter for &F {
    fn format<C: Context>(&self, ctx: &C, message: &str, out: &mut String) -> Result<(), Error> {
        (**self).format(ctx, message, out)
    }
}

impl<F: Formatter + ?Sized> Formatter for Arc<F> {
    fn format<C: Context>(&self, ctx: &C, message: &str, out: &mut String) -> Result<(), Error> {
        (**self).format(ctx, message, out)
    }
}

/// The default printer: the message followed by a newline.
///
/// Output format:
///
/// ```text
/// connected to primary
/// ```
///
/// With [`with_location`](PlainPrinter::with_location):
///
/// ```text
/// src/db.rs:42:9 connected to primary
/// ```
#[derive(Default, Debug, Clone, Copy)]
pub struct PlainPrinter {
    location: bool,
}

impl PlainPrinter {
    /// Prefix every entry with `file:line:column `.
    pub fn with_location(mut self) -> Self {
        self.location = true;
        self
    }
}

impl Printer for PlainPrinter {
    fn print<W: io::Write, C: Context>(
        &self,
        out: &mut W,
        ctx: &C,
        message: &str,
    ) -> Result<(), Error> {
        if self.location {
            write!(out, "{} ", ctx.location())?;
        }
        out.write_all(message.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

/// Adapt a [`Formatter`] into a [`Printer`] that ends each entry with a newline.
///
/// # Examples
///
/// ```
/// use logsite::print::Formatted;
/// use logsite::print::TextFormatter;
///
/// let printer = Formatted::new(TextFormatter::default());
/// ```
#[derive(Default, Debug, Clone)]
pub struct Formatted<F> {
    formatter: F,
}

impl<F: Formatter> Formatted<F> {
    /// Wrap `formatter`.
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }
}

impl<F: Formatter> Printer for Formatted<F> {
    fn print<W: io::Write, C: Context>(
        &self,
        out: &mut W,
        ctx: &C,
        message: &str,
    ) -> Result<(), Error> {
        let mut text = String::new();
        self.formatter.format(ctx, message, &mut text)?;
        text.push('\n');
        out.write_all(text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CallContext;
    use crate::Location;
    use crate::Severity;

    fn ctx() -> CallContext {
        CallContext::new(Severity::Info, Location::new("src/db.rs", 42, 9))
    }

    fn print(printer: impl Printer, message: &str) -> String {
        let mut out = Vec::new();
        printer.print(&mut out, &ctx(), message).unwrap();
        String::from_utf8(out).unwrap()
    }

    struct Shout;

    impl Formatter for Shout {
        fn format<C: Context>(
            &self,
            ctx: &C,
            message: &str,
            out: &mut String,
        ) -> Result<(), Error> {
            out.push_str(ctx.severity().as_str());
            out.push(' ');
            out.push_str(&message.to_uppercase());
            Ok(())
        }
    }

    #[test]
    fn plain_appends_a_newline() {
        assert_eq!(print(PlainPrinter::default(), "value=42"), "value=42\n");
        assert_eq!(print(PlainPrinter::default(), ""), "\n");
    }

    #[test]
    fn plain_with_location() {
        assert_eq!(
            print(PlainPrinter::default().with_location(), "hello"),
            "src/db.rs:42:9 hello\n"
        );
    }

    #[test]
    fn formatted_terminates_the_line() {
        assert_eq!(print(Formatted::new(Shout), "hello"), "INFO HELLO\n");
        assert_eq!(print(&Formatted::new(&Shout), "a"), "INFO A\n");
    }
}
