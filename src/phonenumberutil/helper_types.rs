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

use crate::countryregistry::CountryEntry;

/// Outcome of dial-code disambiguation over a digit-only string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'r, 'd> {
    /// `national` is the part of the input after `entry.dial_code`; its
    /// length is within the entry's bound.
    Matched {
        entry: &'r CountryEntry,
        national: &'d str,
    },
    Unmatched,
}

impl<'r, 'd> Resolution<'r, 'd> {
    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }
}
