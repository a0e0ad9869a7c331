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

//! Call-site contexts threaded through a log call.

use std::fmt;

use crate::Error;
use crate::Severity;

/// The source position of a log call.
///
/// Use the [`location!`](crate::location) macro to capture the position of the current
/// expression, including the enclosing function and module, or [`Location::caller`] from a
/// `#[track_caller]` function.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Location {
    file: &'static str,
    line: u32,
    column: u32,
    function: Option<&'static str>,
    module_path: Option<&'static str>,
}

impl Location {
    /// Create a location from its file, line and column.
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self {
            file,
            line,
            column,
            function: None,
            module_path: None,
        }
    }

    /// The location of the caller of the enclosing `#[track_caller]` function.
    ///
    /// The function name and module path are not available this way.
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self::new(location.file(), location.line(), location.column())
    }

    /// Set the name of the enclosing function.
    pub const fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }

    /// Set the module path of the call site.
    pub const fn with_module_path(mut self, module_path: &'static str) -> Self {
        self.module_path = Some(module_path);
        self
    }

    /// The source file path.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// The last component of [`file`](Location::file).
    pub fn filename(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }

    /// The 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The 1-based column number.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The path of the enclosing function, if captured.
    pub fn function(&self) -> Option<&'static str> {
        self.function
    }

    /// The module path of the call site, if captured.
    pub fn module_path(&self) -> Option<&'static str> {
        self.module_path
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A visitor over the extra key/value pairs a [`Context`] carries.
pub trait Visitor {
    /// Visit one key/value pair.
    fn visit(&mut self, key: &str, value: &dyn fmt::Display) -> Result<(), Error>;
}

/// Everything the filter, the target provider and the printer learn about a log call.
///
/// A context is built once at the call site and passed by shared reference through the
/// whole dispatch path. Implement this trait to carry extra metadata; [`WithField`] covers
/// the common case of attaching a few key/value pairs to an existing context.
pub trait Context {
    /// The severity of the message.
    fn severity(&self) -> Severity;

    /// The source position of the call.
    fn location(&self) -> &Location;

    /// The name module-scoped filter directives are matched against.
    ///
    /// Default to the module path of the call site, or its file if the module path is
    /// unknown.
    fn target(&self) -> &str {
        let location = self.location();
        location.module_path().unwrap_or(location.file())
    }

    /// Walk the extra key/value pairs attached to this context.
    ///
    /// Default to none.
    fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), Error> {
        let _ = visitor;
        Ok(())
    }
}

impl<C: Context + ?Sized> Context for &C {
    fn severity(&self) -> Severity {
        (**self).severity()
    }

    fn location(&self) -> &Location {
        (**self).location()
    }

    fn target(&self) -> &str {
        (**self).target()
    }

    fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), Error> {
        (**self).visit(visitor)
    }
}

/// The standard context: a severity and a source position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CallContext {
    severity: Severity,
    location: Location,
}

impl CallContext {
    /// Create a new context.
    pub const fn new(severity: Severity, location: Location) -> Self {
        Self { severity, location }
    }

    /// A context for a message of `severity` logged by the caller of the enclosing
    /// `#[track_caller]` function.
    #[track_caller]
    pub fn caller(severity: Severity) -> Self {
        Self::new(severity, Location::caller())
    }
}

impl Context for CallContext {
    fn severity(&self) -> Severity {
        self.severity
    }

    fn location(&self) -> &Location {
        &self.location
    }
}

/// A context extended with one extra key/value pair.
///
/// # Examples
///
/// ```
/// use logsite::CallContext;
/// use logsite::ContextExt;
/// use logsite::Severity;
///
/// let ctx = CallContext::caller(Severity::Info)
///     .with_field("module", &"storage")
///     .with_field("shard", &3);
/// ```
pub struct WithField<'a, C> {
    inner: C,
    key: &'a str,
    value: &'a dyn fmt::Display,
}

impl<C: fmt::Debug> fmt::Debug for WithField<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithField")
            .field("inner", &self.inner)
            .field("key", &self.key)
            .field("value", &format_args!("{}", self.value))
            .finish()
    }
}

impl<C: Context> Context for WithField<'_, C> {
    fn severity(&self) -> Severity {
        self.inner.severity()
    }

    fn location(&self) -> &Location {
        self.inner.location()
    }

    fn target(&self) -> &str {
        self.inner.target()
    }

    fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), Error> {
        self.inner.visit(visitor)?;
        visitor.visit(self.key, self.value)
    }
}

/// Extension methods for every [`Context`].
pub trait ContextExt: Context + Sized {
    /// Attach a key/value pair to this context.
    fn with_field<'a>(self, key: &'a str, value: &'a dyn fmt::Display) -> WithField<'a, Self> {
        WithField {
            inner: self,
            key,
            value,
        }
    }
}

impl<C: Context> ContextExt for C {}

// Strip the helper item and closure frames from a `type_name` taken inside `location!`.
pub(crate) fn function_name(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__f").unwrap_or(raw);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Collect(Vec<String>);

    impl Visitor for Collect {
        fn visit(&mut self, key: &str, value: &dyn fmt::Display) -> Result<(), Error> {
            self.0.push(format!("{key}={value}"));
            Ok(())
        }
    }

    #[test]
    fn caller_points_at_this_file() {
        let line = line!() + 1;
        let ctx = CallContext::caller(Severity::Debug);
        assert_eq!(ctx.severity(), Severity::Debug);
        assert_eq!(ctx.location().line(), line);
        assert!(ctx.location().file().ends_with("context.rs"));
        assert_eq!(ctx.location().filename(), "context.rs");
        assert_eq!(ctx.location().function(), None);
        assert_eq!(ctx.target(), ctx.location().file());
    }

    #[test]
    fn fields_are_visited_in_attach_order() {
        let ctx = CallContext::new(Severity::Info, Location::new("src/main.rs", 3, 5))
            .with_field("module", &"storage")
            .with_field("shard", &3);

        let mut collect = Collect(vec![]);
        ctx.visit(&mut collect).unwrap();
        assert_eq!(collect.0, ["module=storage", "shard=3"]);
        assert_eq!(ctx.severity(), Severity::Info);
        assert_eq!(ctx.location().to_string(), "src/main.rs:3:5");

        let ctx = CallContext::new(
            Severity::Info,
            Location::new("src/main.rs", 3, 5).with_module_path("app::db"),
        )
        .with_field("shard", &3);
        assert_eq!(ctx.target(), "app::db");
    }

    #[test]
    fn function_name_strips_helpers() {
        assert_eq!(function_name("app::run::__f"), "app::run");
        assert_eq!(
            function_name("app::run::{{closure}}::{{closure}}::__f"),
            "app::run"
        );
        assert_eq!(function_name("app"), "app");
    }
}
