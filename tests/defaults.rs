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

use std::any::type_name;
use std::io;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use logsite::Bundle;
use logsite::CallContext;
use logsite::Components;
use logsite::Logger;
use logsite::Severity;
use logsite::Target;
use logsite::TargetProvider;
use logsite::dispatch;
use logsite::provider::Fixed;
use logsite::target::Stderr;
use logsite::target::TargetGroup;
use logsite::target::TargetVisitor;

#[derive(Debug, Default)]
struct Counting(AtomicUsize);

impl Counting {
    fn commits(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl Target for Counting {
    fn commit(&self, _: &[u8]) -> io::Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
struct TypeNames(Vec<&'static str>);

impl TargetVisitor for TypeNames {
    fn visit<T: Target + ?Sized>(&mut self, _: &T) {
        self.0.push(type_name::<T>());
    }
}

#[test]
fn default_bundle_resolves_to_one_stderr_target() {
    let bundle = Components::defaults();
    for severity in Severity::ALL {
        let ctx = CallContext::caller(severity);
        assert!(dispatch::enabled(&bundle, &ctx));
        assert!(bundle.printer().is_some());

        let mut names = TypeNames::default();
        bundle
            .provider()
            .unwrap()
            .targets(&ctx)
            .for_each_target(&mut names);
        assert_eq!(names.0, [type_name::<Stderr>()], "{severity}");
    }
}

#[test]
fn default_configuration_leaves_user_sinks_alone() {
    let sink = Arc::new(Counting::default());
    let custom: Logger<_> = logsite::builder()
        .bundle(Components::defaults().with_provider(Fixed::new((sink.clone(),))))
        .build();
    let default: Logger = Logger::default();

    for severity in Severity::ALL {
        default.log(&CallContext::caller(severity), format_args!("{severity}"));
    }
    logsite::fatal!("fatal {}", 1);
    logsite::error!("error {}", 2);
    logsite::warn!("warn {}", 3);
    logsite::info!("info {}", 4);
    logsite::debug!("debug {}", 5);
    logsite::verbose!("verbose {}", 6);

    logsite::log_fatal(format_args!("fatal {}", 1));
    logsite::log_error(format_args!("error {}", 2));
    logsite::log_warn(format_args!("warn {}", 3));
    logsite::log_info(format_args!("info {}", 4));
    logsite::log_debug(format_args!("debug {}", 5));
    logsite::log_verbose(format_args!("verbose {}", 6));

    for severity in Severity::ALL {
        assert!(logsite::default_logger().enabled(&CallContext::caller(severity)));
    }
    assert_eq!(sink.commits(), 0);

    for severity in Severity::ALL {
        custom.log(&CallContext::caller(severity), format_args!("{severity}"));
    }
    assert_eq!(sink.commits(), Severity::ALL.len());
}

#[test]
fn default_logger_is_fixed_after_first_use() {
    logsite::info!("first use");
    let logger: Logger = Default::default();
    let rejected = logsite::set_default_logger(logger);
    assert!(rejected.is_err());
    assert!(logsite::builder().try_apply().is_err());
}

#[test]
fn absent_components_write_nothing() {
    let sink = Counting::default();
    let no_printer = Components::new().with_provider(Fixed::new((&sink,)));
    let bundle = Components::new();
    for severity in Severity::ALL {
        let ctx = CallContext::caller(severity);
        assert!(dispatch::enabled(&bundle, &ctx));
        dispatch::write(&bundle, &ctx, "nowhere");
        dispatch::write(&no_printer, &ctx, "nowhere");
    }
    assert_eq!(sink.commits(), 0);
}
