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

use std::sync::Arc;

use logsite::Components;
use logsite::Context;
use logsite::Severity;
use logsite::SeverityFilter;
use logsite::SeverityTable;
use logsite::filter::CustomFilter;
use logsite::provider::Fixed;
use logsite::target::Shared;

fn written_lines(sink: &Shared<Vec<u8>>) -> usize {
    sink.with(|buf| buf.iter().filter(|b| **b == b'\n').count())
}

#[test]
fn debug_rejecting_filter_keeps_warnings() {
    let sink = Arc::new(Shared::new(Vec::<u8>::new()));
    let logger = logsite::builder()
        .bundle(
            Components::defaults()
                .with_filter(CustomFilter::new(|ctx: &dyn Context| {
                    ctx.severity() != Severity::Debug
                }))
                .with_provider(Fixed::new((sink.clone(),))),
        )
        .build();

    for i in 0..10 {
        logsite::debug!(logger: logger, "debug {i}");
        logsite::warn!(logger: logger, "warn {i}");
    }

    assert_eq!(written_lines(&sink), 10);
    assert!(sink.with(|buf| !String::from_utf8_lossy(buf).contains("debug")));
}

#[test]
fn per_severity_override_silences_one_severity() {
    let sink = Arc::new(Shared::new(Vec::<u8>::new()));
    let to_sink = Components::defaults().with_provider(Fixed::new((sink.clone(),)));
    let table = SeverityTable::new(to_sink.clone().with_filter(SeverityFilter::All))
        .with(Severity::Debug, to_sink.with_filter(SeverityFilter::Off));
    let logger = logsite::builder().table(table).build();

    for severity in Severity::ALL {
        logsite::log!(logger: logger, severity, "{severity}");
    }

    assert_eq!(written_lines(&sink), 5);
}
