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

use crate::phonenumberutil::errors::InvalidEntryError;

/// The longest dial code (country calling code plus any shared-block
/// extension, e.g. `1242`) an entry may carry.
pub const MAX_LENGTH_DIAL_CODE: usize = 4;

/// A single row of the dial-code table.
///
/// Several entries may carry dial codes that are numeric prefixes of one
/// another. For example the North American Numbering Plan members share the
/// country calling code `1`, so the table holds both `1` (US/Canada) and
/// `1242` (Bahamas). Resolving which one a number belongs to is the job of the
/// disambiguator, not of the entry itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryEntry {
    /// One to four ASCII digits without a leading zero and without `+`.
    pub dial_code: &'static str,
    /// Human readable label, never used for canonicalization.
    pub display_name: &'static str,
    /// Maximum count of digits accepted after the dial code.
    pub max_national_length: usize,
}

impl CountryEntry {
    pub const fn new(
        dial_code: &'static str,
        display_name: &'static str,
        max_national_length: usize,
    ) -> Self {
        Self { dial_code, display_name, max_national_length }
    }

    /// Checks the shape of the entry. Uniqueness is checked by the registry.
    pub fn validate(&self) -> Result<(), InvalidEntryError> {
        let code = self.dial_code;
        if code.is_empty() || code.len() > MAX_LENGTH_DIAL_CODE {
            return Err(InvalidEntryError::DialCodeLength(code.to_owned()));
        }
        if !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidEntryError::NonDigitDialCode(code.to_owned()));
        }
        if code.starts_with('0') {
            return Err(InvalidEntryError::LeadingZero(code.to_owned()));
        }
        if self.max_national_length == 0 {
            return Err(InvalidEntryError::ZeroMaxLength(code.to_owned()));
        }
        Ok(())
    }

    /// Returns the dial code with the leading plus sign, e.g. `+44`.
    pub fn dial_code_with_plus(&self) -> String {
        fast_cat::concat_str!(crate::phonenumberutil::helper_constants::PLUS_SIGN, self.dial_code)
    }

    /// Whether `national_digits` fits this entry's length bound.
    pub fn accepts_national_length(&self, national_len: usize) -> bool {
        national_len >= 1 && national_len <= self.max_national_length
    }
}
