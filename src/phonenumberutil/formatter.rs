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

use std::borrow::Cow;

use log::trace;

use super::{
    canonical_number::CanonicalNumber,
    canonicalizer,
    enums::{FormattingRule, PhoneNumberFormat},
    helper_constants::{PLUS_SIGN, RFC3966_PREFIX, RFC3966_VISUAL_SEPARATOR},
    phone_number_regexps::PhoneNumberRegExps,
};
use crate::{countryregistry::CountryRegistry, string_util::strip_non_digits};

/// Renders national digits with the grouping of `dial_code`'s rule.
///
/// Works on partial input too, so it can be called on every keystroke.
/// Non-digits in `digits` are ignored and empty input gives an empty string.
pub(super) fn format_national(reg_exps: &PhoneNumberRegExps, dial_code: &str, digits: &str) -> String {
    let digits = strip_non_digits(digits);
    match FormattingRule::for_dial_code(dial_code) {
        FormattingRule::Nanpa => format_nanpa(&digits),
        FormattingRule::UnitedKingdom => format_uk(&digits),
        FormattingRule::Generic => format_generic(reg_exps, &digits),
    }
}

// (AAA) BBB-CCCC, digits past the tenth are dropped.
fn format_nanpa(digits: &str) -> String {
    match digits.len() {
        0..=3 => digits.to_owned(),
        4..=6 => fast_cat::concat_str!("(", &digits[..3], ") ", &digits[3..]),
        len => fast_cat::concat_str!(
            "(",
            &digits[..3],
            ") ",
            &digits[3..6],
            "-",
            &digits[6..len.min(10)]
        ),
    }
}

// AAAA BBB CCCC, digits past the eleventh are dropped.
fn format_uk(digits: &str) -> String {
    match digits.len() {
        0..=4 => digits.to_owned(),
        5..=7 => fast_cat::concat_str!(&digits[..4], " ", &digits[4..]),
        len => fast_cat::concat_str!(
            &digits[..4],
            " ",
            &digits[4..7],
            " ",
            &digits[7..len.min(11)]
        ),
    }
}

fn format_generic(reg_exps: &PhoneNumberRegExps, digits: &str) -> String {
    reg_exps
        .generic_group_pattern
        .find_iter(digits)
        .map(|group| group.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a resolved number in the requested form.
pub(super) fn format(
    reg_exps: &PhoneNumberRegExps,
    number: &CanonicalNumber<'_>,
    number_format: PhoneNumberFormat,
) -> String {
    let dial_code = number.dial_code();
    if let PhoneNumberFormat::E164 = number_format {
        return number.to_e164();
    }
    let national = format_national(reg_exps, dial_code, number.national_digits());

    match number_format {
        PhoneNumberFormat::National => national,
        PhoneNumberFormat::International => {
            if national.is_empty() {
                fast_cat::concat_str!(PLUS_SIGN, dial_code)
            } else {
                fast_cat::concat_str!(PLUS_SIGN, dial_code, " ", &national)
            }
        }
        PhoneNumberFormat::RFC3966 => {
            // Leading punctuation such as the NANPA "(" is consumed first, then
            // every remaining separator run becomes a single hyphen.
            let national = national.trim_start_matches(|c: char| !c.is_ascii_digit());
            let national = reg_exps
                .separator_pattern
                .replace_all(national, RFC3966_VISUAL_SEPARATOR);
            if national.is_empty() {
                fast_cat::concat_str!(RFC3966_PREFIX, PLUS_SIGN, dial_code)
            } else {
                fast_cat::concat_str!(
                    RFC3966_PREFIX,
                    PLUS_SIGN,
                    dial_code,
                    RFC3966_VISUAL_SEPARATOR,
                    &national
                )
            }
        }
        // here code is already returned
        PhoneNumberFormat::E164 => number.to_e164(),
    }
}

/// Display projection of a stored value. Never fails: input that does not
/// parse is handed back untouched.
pub(super) fn format_for_display<'a>(
    registry: &CountryRegistry,
    reg_exps: &PhoneNumberRegExps,
    canonical: &'a str,
) -> Cow<'a, str> {
    match canonicalizer::parse(registry, canonical) {
        Ok(number) => Cow::Owned(format(reg_exps, &number, PhoneNumberFormat::International)),
        Err(err) => {
            trace!("Displaying {:?} as is: {}", canonical, err);
            Cow::Borrowed(canonical)
        }
    }
}
