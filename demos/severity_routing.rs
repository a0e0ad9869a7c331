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

use logsite::Components;
use logsite::ContextExt;
use logsite::Severity;
use logsite::SeverityFilter;
use logsite::Target;
use logsite::print::Formatted;
use logsite::print::TextFormatter;
use logsite::provider::from_fn;
use logsite::target::Stderr;
use logsite::target::Stdout;
use logsite::target::sequence;

fn main() {
    // Warnings and worse go to stderr, the rest to stdout.
    let provider = from_fn(|ctx| {
        let severe = ctx.severity().is_at_least(Severity::Warning);
        let stderr = severe.then(|| Box::new(Stderr::default()) as Box<dyn Target>);
        let stdout = (!severe).then(|| Box::new(Stdout::default()) as Box<dyn Target>);
        sequence(stderr.into_iter().chain(stdout))
    });

    let logger = logsite::builder()
        .bundle(
            Components::defaults()
                .with_filter(SeverityFilter::AtLeast(Severity::Debug))
                .with_provider(provider)
                .with_printer(Formatted::new(TextFormatter::default())),
        )
        .build();

    logsite::error!(logger: logger, "Hello error!");
    logsite::warn!(logger: logger, "Hello warn!");
    logsite::info!(logger: logger, "Hello info!");
    logsite::debug!(logger: logger, "Hello debug!");
    logsite::verbose!(logger: logger, "Hello verbose!");

    let ctx = logsite::CallContext::caller(Severity::Info)
        .with_field("shard", &3)
        .with_field("role", &"primary");
    logger.write(&ctx, "Hello fields!");
}
