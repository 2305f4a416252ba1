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

use std::fmt;

use super::{errors::CanonicalError, helper_constants::PLUS_SIGN};
use crate::countryregistry::CountryEntry;

/// A phone number attributed to a registry entry.
///
/// The national digits always satisfy `1 <= len <= entry.max_national_length`;
/// there is no way to build a value that breaks this. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalNumber<'a> {
    entry: &'a CountryEntry,
    national_digits: String,
}

impl<'a> CanonicalNumber<'a> {
    /// Fails if `national_digits` is empty, longer than the entry allows, or
    /// contains anything but ASCII digits.
    pub fn new(
        entry: &'a CountryEntry,
        national_digits: impl Into<String>,
    ) -> Result<Self, CanonicalError> {
        let national_digits = national_digits.into();
        if !national_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CanonicalError::NonDigitNationalNumber(national_digits));
        }
        if !entry.accepts_national_length(national_digits.len()) {
            return Err(CanonicalError::NationalDigitsOutOfBounds {
                dial_code: entry.dial_code,
                len: national_digits.len(),
                max: entry.max_national_length,
            });
        }
        Ok(Self { entry, national_digits })
    }

    /// Wraps a national part the disambiguator already checked against
    /// `entry`'s bound.
    pub(super) fn from_resolved(entry: &'a CountryEntry, national_digits: &str) -> Self {
        debug_assert!(entry.accepts_national_length(national_digits.len()));
        Self { entry, national_digits: national_digits.to_owned() }
    }

    pub fn entry(&self) -> &'a CountryEntry {
        self.entry
    }

    pub fn dial_code(&self) -> &'a str {
        self.entry.dial_code
    }

    pub fn national_digits(&self) -> &str {
        &self.national_digits
    }

    /// The E.164 form, e.g. `+12025551234`.
    pub fn to_e164(&self) -> String {
        fast_cat::concat_str!(PLUS_SIGN, self.entry.dial_code, &self.national_digits)
    }
}

impl fmt::Display for CanonicalNumber<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", PLUS_SIGN, self.entry.dial_code, self.national_digits)
    }
}
