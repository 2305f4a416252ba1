// Copyright (C) 2009 The Libphonenumber Authors
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

use strum::EnumIter;

use super::helper_constants::{NANPA_DIAL_CODE, PLUS_SIGN, UK_DIAL_CODE};

/// Output forms for a resolved number.
///
/// For a Washington D.C. number:
/// - **E164**: `+12025551234`
/// - **INTERNATIONAL**: `+1 (202) 555-1234`
/// - **NATIONAL**: `(202) 555-1234`
/// - **RFC3966**: `tel:+1-202-555-1234`
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// Digits only after a single leading `+`. This is the canonical form
    /// used for storage and interchange.
    E164,
    /// Dial code with plus sign, a space, then the national grouping.
    International,
    /// National grouping only.
    National,
    /// `tel:` URI with every separator replaced by a hyphen.
    RFC3966,
}

/// Grouping rule applied to national digits, chosen by exact dial code.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormattingRule {
    /// `(AAA) BBB-CCCC`, used for the shared dial code `1` only. Members of
    /// the plan with their own four digit entry fall back to `Generic`.
    Nanpa,
    /// `AAAA BBB CCCC`.
    UnitedKingdom,
    /// Greedy groups of three from the left.
    Generic,
}

impl FormattingRule {
    pub fn for_dial_code(dial_code: &str) -> Self {
        match dial_code.strip_prefix(PLUS_SIGN).unwrap_or(dial_code) {
            NANPA_DIAL_CODE => FormattingRule::Nanpa,
            UK_DIAL_CODE => FormattingRule::UnitedKingdom,
            _ => FormattingRule::Generic,
        }
    }
}
