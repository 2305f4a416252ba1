// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use regex::Regex;

pub(super) struct PhoneNumberRegExps {
    /// Greedy run of up to three digits. Matching it repeatedly from the left
    /// yields the generic grouping, with a shorter trailing group when the
    /// length is not a multiple of three.
    pub generic_group_pattern: Regex,

    /// Any run of characters in a rendered national number that is not a
    /// digit: spaces, parentheses and hyphens.
    pub separator_pattern: Regex,
}

impl PhoneNumberRegExps {
    pub fn new() -> Self {
        Self {
            generic_group_pattern: Regex::new("[0-9]{1,3}").unwrap(),
            separator_pattern: Regex::new("[^0-9]+").unwrap(),
        }
    }
}
