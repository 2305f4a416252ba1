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

use std::cmp::Reverse;

use log::trace;

use super::{helper_constants::MIN_DIGITS_FOR_PARSE, helper_types::Resolution};
use crate::countryregistry::{CountryEntry, CountryRegistry};

/// Attributes a digit-only string (no plus sign, no separators) to a
/// registry entry.
///
/// Candidates are the entries whose dial code prefixes `digits`, tried from
/// the longest dial code to the shortest; equal lengths keep table order.
/// The first candidate leaving between one and `max_national_length` digits
/// wins. Shared blocks such as `1242` inside `1` therefore always take
/// priority over the wider code when both would fit.
///
/// There is no fallback: if no candidate's remainder fits, the result is
/// [`Resolution::Unmatched`]. So is any input shorter than
/// [`MIN_DIGITS_FOR_PARSE`].
pub fn resolve<'r, 'd>(registry: &'r CountryRegistry, digits: &'d str) -> Resolution<'r, 'd> {
    if digits.len() < MIN_DIGITS_FOR_PARSE {
        trace!("Input of {} digits is below the parse floor", digits.len());
        return Resolution::Unmatched;
    }

    let mut candidates: Vec<&CountryEntry> = registry.entries_prefixing(digits).collect();
    // sort_by_key is stable, so table order breaks ties.
    candidates.sort_by_key(|entry| Reverse(entry.dial_code.len()));

    for entry in candidates {
        let national = &digits[entry.dial_code.len()..];
        if entry.accepts_national_length(national.len()) {
            trace!("Resolved {} to dial code {}", digits, entry.dial_code);
            return Resolution::Matched { entry, national };
        }
        trace!(
            "Dial code {} leaves {} national digits, allowed at most {}",
            entry.dial_code,
            national.len(),
            entry.max_national_length
        );
    }
    Resolution::Unmatched
}
