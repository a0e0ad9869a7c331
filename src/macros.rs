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

/// Capture the source position of the macro invocation.
///
/// Besides file, line and column, the returned [`Location`](crate::Location) carries the
/// module path and the path of the enclosing function.
///
/// # Examples
///
/// ```
/// fn connect() -> logsite::Location {
///     logsite::location!()
/// }
///
/// let location = connect();
/// assert!(location.function().unwrap().ends_with("::connect"));
/// ```
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(file!(), line!(), column!())
            .with_module_path(module_path!())
            .with_function($crate::__private_api::function_name({
                fn __f() {}
                ::core::any::type_name_of_val(&__f)
            }))
    };
}

/// Log a message at the given severity.
///
/// The message goes to the default logger, or to the logger given as `logger:`. The
/// arguments are only evaluated and interpolated if the logger accepts the message.
///
/// # Examples
///
/// ```
/// use logsite::Severity;
///
/// let logger = logsite::builder().build();
/// logsite::log!(Severity::Info, "{} + {} = {}", 1, 2, 3);
/// logsite::log!(logger: logger, Severity::Debug, "cache miss for {:?}", "users/42");
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $severity:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let ctx = $crate::CallContext::new($severity, $crate::location!());
        if $crate::__private_api::enabled(logger, &ctx) {
            $crate::__private_api::log(logger, &ctx, format_args!($($arg)+));
        }
    }};
    ($severity:expr, $($arg:tt)+) => {
        $crate::log!(logger: $crate::__private_api::default_logger(), $severity, $($arg)+)
    };
}

/// Log a message at [`Severity::Fatal`](crate::Severity::Fatal).
///
/// Logging a fatal message does not stop the program.
///
/// # Examples
///
/// ```
/// logsite::fatal!("cannot bind port {}", 80);
/// ```
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Fatal, $($arg)+)
    };
}

/// Log a message at [`Severity::Error`](crate::Severity::Error).
///
/// # Examples
///
/// ```
/// let err = "connection reset";
/// logsite::error!("request failed: {err}");
/// ```
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Error, $($arg)+)
    };
}

/// Log a message at [`Severity::Warning`](crate::Severity::Warning).
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Warning, $($arg)+)
    };
}

/// Log a message at [`Severity::Info`](crate::Severity::Info).
///
/// # Examples
///
/// ```
/// logsite::info!("value={}", 42);
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Info, $($arg)+)
    };
}

/// Log a message at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Debug, $($arg)+)
    };
}

/// Log a message at [`Severity::Verbose`](crate::Severity::Verbose).
#[macro_export]
macro_rules! verbose {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Verbose, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Verbose, $($arg)+)
    };
}

#[doc(hidden)]
pub mod __private_api {
    use std::fmt;

    use crate::CallContext;
    use crate::logger::Log;

    pub use crate::logger::default_logger;

    pub fn function_name(raw: &'static str) -> &'static str {
        crate::context::function_name(raw)
    }

    pub fn enabled<L: Log + ?Sized>(logger: &L, ctx: &CallContext) -> bool {
        logger.enabled(ctx)
    }

    pub fn log<L: Log + ?Sized>(logger: &L, ctx: &CallContext, args: fmt::Arguments) {
        logger.write(ctx, &crate::dispatch::interpolate(args))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::Arc;

    use crate::Components;
    use crate::Severity;
    use crate::SeverityFilter;
    use crate::provider::Fixed;
    use crate::target::Shared;

    fn here() -> crate::Location {
        crate::location!()
    }

    #[test]
    fn location_names_the_enclosing_function() {
        let location = here();
        assert_eq!(location.function(), Some("logsite::macros::tests::here"));
        assert_eq!(location.module_path(), Some("logsite::macros::tests"));
        assert_eq!(location.filename(), "macros.rs");

        let in_closure = (|| crate::location!())();
        assert_eq!(
            in_closure.function(),
            Some("logsite::macros::tests::location_names_the_enclosing_function")
        );
    }

    #[test]
    fn suppressed_arguments_are_not_evaluated() {
        let sink = Arc::new(Shared::new(Vec::<u8>::new()));
        let logger = crate::builder()
            .bundle(
                Components::defaults()
                    .with_filter(SeverityFilter::AtLeast(Severity::Info))
                    .with_provider(Fixed::new((sink.clone(),))),
            )
            .build();

        let evaluated = Cell::new(0);
        let count = || {
            evaluated.set(evaluated.get() + 1);
            "arg"
        };
        crate::debug!(logger: logger, "{}", count());
        crate::verbose!(logger: logger, "{}", count());
        crate::info!(logger: logger, "{}", count());
        crate::log!(logger: &logger, Severity::Error, "{} {}", count(), 2);

        assert_eq!(evaluated.get(), 2);
        let written = sink.with(|buf| String::from_utf8(buf.clone()).unwrap());
        assert_eq!(written, "arg\narg 2\n");
    }
}
