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

//! Logger instances, the process-wide default and the convenience call surface.

mod builder;
pub use self::builder::LoggerBuilder;
pub use self::builder::builder;

mod chain;
pub use self::chain::Chain;

mod global;
pub use self::global::Log;
pub use self::global::default_logger;
pub use self::global::log_debug;
pub use self::global::log_error;
pub use self::global::log_fatal;
pub use self::global::log_info;
pub use self::global::log_verbose;
pub use self::global::log_warn;
pub use self::global::set_default_logger;

mod log_impl;
pub use self::log_impl::Logger;

mod table;
pub use self::table::ComponentTable;
pub use self::table::PerSeverity;
pub use self::table::SeverityTable;
pub use self::table::Uniform;
