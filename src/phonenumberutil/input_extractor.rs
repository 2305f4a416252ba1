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

use super::{
    errors::ExtractError,
    helper_constants::{DEFAULT_MAX_NATIONAL_LENGTH, MIN_DIGITS_FOR_COMMIT},
};
use crate::{countryregistry::CountryEntry, string_util::strip_non_digits};

/// Turns raw keystroke text into national digits for the selected entry.
///
/// Input with fewer than [`MIN_DIGITS_FOR_COMMIT`] digits is not committed.
/// Longer input is truncated to the entry's bound, or to
/// [`DEFAULT_MAX_NATIONAL_LENGTH`] without an entry, never rejected.
pub fn extract(entry: Option<&CountryEntry>, raw: &str) -> Result<String, ExtractError> {
    let digits = strip_non_digits(raw);
    if digits.len() < MIN_DIGITS_FOR_COMMIT {
        return Err(ExtractError::TooShortPartial { digits: digits.len() });
    }
    let bound = entry.map_or(DEFAULT_MAX_NATIONAL_LENGTH, |entry| entry.max_national_length);

    let mut digits = digits.into_owned();
    digits.truncate(bound);
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::extract;
    use crate::countryregistry::CountryEntry;
    use crate::phonenumberutil::errors::ExtractError;

    const US: CountryEntry = CountryEntry::new("1", "United States / Canada", 10);

    #[test]
    fn truncates_to_entry_bound() {
        assert_eq!(extract(Some(&US), "2025551234567").unwrap(), "2025551234");
        assert_eq!(extract(Some(&US), "(202) 555-1234 ext").unwrap(), "2025551234");
        assert_eq!(extract(Some(&US), "2025").unwrap(), "2025");
    }

    #[test]
    fn falls_back_to_fifteen_digits() {
        assert_eq!(
            extract(None, "12345678901234567890").unwrap(),
            "123456789012345"
        );
    }

    #[test]
    fn short_partial_input_is_not_committed() {
        assert_eq!(extract(Some(&US), "12"), Err(ExtractError::TooShortPartial { digits: 2 }));
        assert_eq!(extract(Some(&US), "(20) -"), Err(ExtractError::TooShortPartial { digits: 2 }));
        assert_eq!(extract(None, ""), Err(ExtractError::TooShortPartial { digits: 0 }));
    }
}
