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

use std::fs;
use std::fs::File;

use logsite::Components;
use logsite::provider::Fixed;
use logsite::target::Shared;

#[test]
fn formatted_value_lands_in_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");

    let logger = logsite::builder()
        .bundle(
            Components::defaults()
                .with_provider(Fixed::new((Shared::new(File::create(&path).unwrap()),))),
        )
        .build();
    logsite::info!(logger: logger, "value={}", 42);

    assert_eq!(fs::read_to_string(&path).unwrap(), "value=42\n");
}

#[test]
fn entries_are_visible_before_the_logger_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");

    let logger = logsite::builder()
        .bundle(
            Components::defaults()
                .with_provider(Fixed::new((Shared::new(File::create(&path).unwrap()),))),
        )
        .build();
    logger.warn(format_args!("first"));
    logger.error(format_args!("second {}", 2));

    assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond 2\n");
    drop(logger);
}
