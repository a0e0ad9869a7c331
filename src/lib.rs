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

//! A logging facade whose behavior is assembled from statically typed components.
//!
//! # Overview
//!
//! Every log call carries a [`Severity`] and a call-site [`Context`]. A logger maps each
//! severity to a [`Bundle`] of three roles:
//!
//! * a [`Filter`] decides whether the message proceeds;
//! * a [`TargetProvider`] resolves the [targets](target) the message is written to;
//! * a [`Printer`] renders the entry onto each target.
//!
//! The message is interpolated only when the filter accepts it. Each target receives the
//! whole entry exactly once, and entries from concurrent callers never interleave on a
//! shared target. Failures are handed to a [`Trap`](trap::Trap), never to the caller.
//!
//! Out of the box every severity is written to stderr, one message per line.
//!
//! # Examples
//!
//! Log through the default logger:
//!
//! ```
//! logsite::info!("value={}", 42);
//! logsite::warn!("disk {}% full", 91);
//! ```
//!
//! Replace the default with custom components:
//!
//! ```
//! use logsite::Components;
//! use logsite::Severity;
//! use logsite::SeverityFilter;
//! use logsite::print::Formatted;
//! use logsite::print::TextFormatter;
//! use logsite::provider::Fixed;
//! use logsite::target::Shared;
//! use logsite::target::Stderr;
//!
//! let file = tempfile::tempfile().unwrap();
//! logsite::builder()
//!     .bundle(
//!         Components::defaults()
//!             .with_filter(SeverityFilter::AtLeast(Severity::Info))
//!             .with_provider(Fixed::new((Stderr::default(), Shared::new(file))))
//!             .with_printer(Formatted::new(TextFormatter::default())),
//!     )
//!     .apply();
//!
//! logsite::error!("Error message.");
//! logsite::debug!("Suppressed message.");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "bridge-log")]
#[cfg_attr(docsrs, doc(cfg(feature = "bridge-log")))]
pub mod bridge;
pub mod context;
pub mod dispatch;
pub mod filter;
pub mod print;
pub mod provider;
pub mod target;
pub mod trap;

mod bundle;
mod error;
mod logger;
mod macros;
mod severity;

pub use self::bundle::Absent;
pub use self::bundle::Bundle;
pub use self::bundle::Components;
pub use self::bundle::DefaultBundle;
pub use self::context::CallContext;
pub use self::context::Context;
pub use self::context::ContextExt;
pub use self::context::Location;
pub use self::error::Error;
pub use self::filter::Filter;
pub use self::logger::*;
pub use self::print::Formatter;
pub use self::print::Printer;
pub use self::provider::TargetProvider;
pub use self::severity::ParseSeverityError;
pub use self::severity::Severity;
pub use self::severity::SeverityFilter;
pub use self::target::Target;

#[doc(hidden)]
pub use self::macros::__private_api;
