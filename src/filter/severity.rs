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

use crate::Context;
use crate::SeverityFilter;
use crate::filter::Filter;

/// Passes messages that meet the threshold.
///
/// If the threshold is `AtLeast(Severity::Warning)`, `Fatal`, `Error` and `Warning`
/// messages pass. `Off` rejects everything.
impl Filter for SeverityFilter {
    fn filter<C: Context>(&self, ctx: &C) -> bool {
        self.matches(ctx.severity())
    }
}

#[cfg(test)]
mod tests {
    use crate::CallContext;
    use crate::Severity;
    use crate::SeverityFilter;
    use crate::filter::Filter;

    #[test]
    fn threshold_is_inclusive() {
        let filter = SeverityFilter::AtLeast(Severity::Warning);
        let passed: Vec<_> = Severity::ALL
            .into_iter()
            .filter(|severity| filter.filter(&CallContext::caller(*severity)))
            .collect();
        assert_eq!(
            passed,
            [Severity::Fatal, Severity::Error, Severity::Warning]
        );
    }
}
