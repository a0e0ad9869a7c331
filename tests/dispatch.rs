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
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use logsite::CallContext;
use logsite::Components;
use logsite::Context;
use logsite::Error;
use logsite::Printer;
use logsite::Severity;
use logsite::Target;
use logsite::dispatch;
use logsite::filter::CustomFilter;
use logsite::provider::Fixed;
use logsite::provider::from_fn;
use logsite::target::Shared;
use logsite::target::deferred;
use logsite::target::sequence;
use logsite::trap::SilentTrap;

#[derive(Default)]
struct CountingPrinter(AtomicUsize);

impl Printer for CountingPrinter {
    fn print<W: io::Write, C: Context>(
        &self,
        out: &mut W,
        _: &C,
        message: &str,
    ) -> Result<(), Error> {
        self.0.fetch_add(1, Ordering::SeqCst);
        writeln!(out, "{message}")?;
        Ok(())
    }
}

#[derive(Clone, Default)]
struct Journal(Arc<Mutex<Vec<String>>>);

struct Tagged {
    tag: &'static str,
    journal: Journal,
}

impl Target for Tagged {
    fn commit(&self, entry: &[u8]) -> io::Result<()> {
        let entry = String::from_utf8_lossy(entry);
        let mut journal = self.journal.0.lock().unwrap();
        journal.push(format!("{}:{}", self.tag, entry.trim_end()));
        Ok(())
    }
}

fn tagged(tag: &'static str, journal: &Journal) -> Tagged {
    Tagged {
        tag,
        journal: journal.clone(),
    }
}

#[test]
fn rejecting_filter_prints_nothing() {
    let printer = Arc::new(CountingPrinter::default());
    let journal = Journal::default();
    let bundle = Components::new()
        .with_filter(CustomFilter::new(|_| false))
        .with_provider(Fixed::new((tagged("a", &journal),)))
        .with_printer(printer.clone());

    for severity in Severity::ALL {
        let ctx = CallContext::caller(severity);
        dispatch::write(&bundle, &ctx, "never");
        dispatch::log(&bundle, &SilentTrap::default(), &ctx, format_args!("{}", 1));
    }

    assert_eq!(printer.0.load(Ordering::SeqCst), 0);
    assert!(journal.0.lock().unwrap().is_empty());
}

#[test]
fn every_target_prints_once_in_group_order() {
    let printer = Arc::new(CountingPrinter::default());
    let journal = Journal::default();
    let bundle = Components::defaults()
        .with_provider(Fixed::new((
            tagged("first", &journal),
            tagged("second", &journal),
            tagged("third", &journal),
        )))
        .with_printer(printer.clone());

    dispatch::write(&bundle, &CallContext::caller(Severity::Info), "hello");

    assert_eq!(printer.0.load(Ordering::SeqCst), 3);
    assert_eq!(
        *journal.0.lock().unwrap(),
        ["first:hello", "second:hello", "third:hello"]
    );
}

#[test]
fn sequences_and_deferred_targets() {
    let journal = Journal::default();
    let resolved = Arc::new(AtomicUsize::new(0));
    let bundle = Components::defaults().with_provider(from_fn({
        let journal = journal.clone();
        let resolved = resolved.clone();
        move |_| {
            let journal = journal.clone();
            let resolved = resolved.clone();
            sequence(["x", "y", "x"].into_iter().map(move |tag| {
                let journal = journal.clone();
                let resolved = resolved.clone();
                deferred(move || {
                    resolved.fetch_add(1, Ordering::SeqCst);
                    tagged(tag, &journal)
                })
            }))
        }
    }));

    dispatch::write(&bundle, &CallContext::caller(Severity::Debug), "m");

    assert_eq!(resolved.load(Ordering::SeqCst), 3);
    assert_eq!(*journal.0.lock().unwrap(), ["x:m", "y:m", "x:m"]);
}

#[test]
fn placeholders_are_interpolated_once_left_to_right() {
    let order = Mutex::new(Vec::new());
    let next = |value: &'static str| {
        order.lock().unwrap().push(value);
        value
    };

    let sink = Arc::new(Shared::new(Vec::<u8>::new()));
    let logger = logsite::builder()
        .bundle(Components::defaults().with_provider(Fixed::new((sink.clone(), sink.clone()))))
        .build();

    logsite::info!(logger: logger, "{}-{}-{}", next("a"), next("b"), next("c"));

    assert_eq!(*order.lock().unwrap(), ["a", "b", "c"]);
    let written = sink.with(|buf| String::from_utf8(buf.clone()).unwrap());
    assert_eq!(written, "a-b-c\na-b-c\n");
}
