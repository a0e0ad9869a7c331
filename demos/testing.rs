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

fn main() {
    println!(
        r#"Run this example with:

1. `cargo test --example testing -- --show-output`
2. `cargo test --example testing -- --nocapture`
3. `cargo test --example testing`

Compare the output of the three commands."#
    );
}

#[cfg(test)]
mod tests {
    use logsite::Components;
    use logsite::provider::Fixed;
    use logsite::target::Testing;

    #[test]
    fn testing() {
        logsite::builder()
            .bundle(Components::defaults().with_provider(Fixed::new((Testing::default(),))))
            .apply();

        logsite::fatal!("Hello fatal!");
        logsite::error!("Hello error!");
        logsite::warn!("Hello warn!");
        logsite::info!("Hello info!");
        logsite::debug!("Hello debug!");
        logsite::verbose!("Hello verbose!");
    }
}
