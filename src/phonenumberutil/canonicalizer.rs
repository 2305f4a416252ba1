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

use log::trace;

use super::{
    canonical_number::CanonicalNumber,
    disambiguator,
    errors::{CanonicalError, NoMatchError, ParseError},
    helper_constants::{MIN_DIGITS_FOR_PARSE, PLUS_SIGN},
    helper_types::Resolution,
};
use crate::{
    countryregistry::{CountryEntry, CountryRegistry},
    string_util::strip_non_digits,
};

/// Builds `+<dial code><digits>`. Non-digit characters of `national` are
/// dropped; the length is not checked against the entry.
pub fn to_canonical(entry: &CountryEntry, national: &str) -> Result<String, CanonicalError> {
    to_canonical_from_parts(entry.dial_code, national)
}

/// Same as [`to_canonical`] with the dial code given as text, with or without
/// a plus sign. The dial code does not have to be registered.
pub fn to_canonical_from_parts(dial_code: &str, national: &str) -> Result<String, CanonicalError> {
    let digits = strip_non_digits(national);
    if digits.is_empty() {
        return Err(CanonicalError::EmptyDigits);
    }
    let code = strip_non_digits(dial_code);
    if code.is_empty() {
        return Err(CanonicalError::InvalidDialCode(dial_code.to_owned()));
    }
    Ok(fast_cat::concat_str!(PLUS_SIGN, &code, &digits))
}

/// Parses free-form text into a [`CanonicalNumber`].
///
/// Every non-digit is discarded, including the plus sign wherever it
/// appears, so `+12025551234`, `12025551234` and `+1 (202) 555-1234` are the
/// same input.
pub fn parse<'r>(registry: &'r CountryRegistry, raw: &str) -> Result<CanonicalNumber<'r>, ParseError> {
    let digits = strip_non_digits(raw);
    if digits.len() < MIN_DIGITS_FOR_PARSE {
        trace!("Rejecting {:?}: only {} digits", raw, digits.len());
        return Err(NoMatchError::TooFewDigits.into());
    }
    match disambiguator::resolve(registry, &digits) {
        Resolution::Matched { entry, national } => Ok(CanonicalNumber::from_resolved(entry, national)),
        Resolution::Unmatched => Err(NoMatchError::NoDialCodeFits.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, to_canonical, to_canonical_from_parts};
    use crate::countryregistry::{CountryRegistry, TEST_COUNTRY_ENTRIES};
    use crate::phonenumberutil::errors::{CanonicalError, NoMatchError, ParseError};

    fn get_test_registry() -> CountryRegistry {
        CountryRegistry::new_for_entries(TEST_COUNTRY_ENTRIES.iter().copied())
            .expect("Test table should be valid")
    }

    #[test]
    fn to_canonical_concatenates_sanitized_digits() {
        let registry = get_test_registry();
        let uk = registry.find_by_dial_code("44").unwrap();
        assert_eq!(to_canonical(uk, "20 7946-0958").unwrap(), "+442079460958");
        // No length check at this boundary.
        assert_eq!(to_canonical(uk, "1234567890123456").unwrap(), "+441234567890123456");
        assert_eq!(to_canonical(uk, " - "), Err(CanonicalError::EmptyDigits));
        assert_eq!(to_canonical(uk, ""), Err(CanonicalError::EmptyDigits));
    }

    #[test]
    fn to_canonical_from_parts_accepts_plus_on_dial_code() {
        assert_eq!(to_canonical_from_parts("+1", "(202) 555-1234").unwrap(), "+12025551234");
        assert_eq!(to_canonical_from_parts("1242", "5551234").unwrap(), "+12425551234");
        assert_eq!(
            to_canonical_from_parts("+", "5551234"),
            Err(CanonicalError::InvalidDialCode("+".to_owned()))
        );
        // Empty digits are reported before the dial code is looked at.
        assert_eq!(to_canonical_from_parts("", ""), Err(CanonicalError::EmptyDigits));
    }

    #[test]
    fn parse_ignores_plus_and_separators() {
        let registry = get_test_registry();
        let with_plus = parse(&registry, "+12025551234").unwrap();
        let bare = parse(&registry, "12025551234").unwrap();
        let decorated = parse(&registry, "+1 (202) 555-1234").unwrap();
        assert_eq!(with_plus, bare);
        assert_eq!(with_plus, decorated);
        assert_eq!(with_plus.dial_code(), "1");
        assert_eq!(with_plus.national_digits(), "2025551234");
        // The plus sign is not positional.
        assert_eq!(parse(&registry, "1202+5551234").unwrap(), bare);
    }

    #[test]
    fn parse_prefers_shared_block_code() {
        let registry = get_test_registry();
        let number = parse(&registry, "+12425551234").unwrap();
        assert_eq!(number.dial_code(), "1242");
        assert_eq!(number.national_digits(), "5551234");
        assert_eq!(number.entry().display_name, "Bahamas");
    }

    #[test]
    fn parse_errors() {
        let registry = get_test_registry();
        assert_eq!(
            parse(&registry, "123456"),
            Err(ParseError::NoMatch(NoMatchError::TooFewDigits))
        );
        assert_eq!(
            parse(&registry, "+33 12"),
            Err(ParseError::NoMatch(NoMatchError::TooFewDigits))
        );
        assert_eq!(
            parse(&registry, "no digits here"),
            Err(ParseError::NoMatch(NoMatchError::TooFewDigits))
        );
        assert_eq!(
            parse(&registry, "+800 1234 5678"),
            Err(ParseError::NoMatch(NoMatchError::NoDialCodeFits))
        );
        assert_eq!(
            parse(&registry, "+33 6 12 34 56 78 90"),
            Err(ParseError::NoMatch(NoMatchError::NoDialCodeFits))
        );
    }
}
