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

/// Removes every character that is not an ASCII digit. Other unicode
/// decimal digits (full-width, Arabic-Indic, ...) are first converted to
/// their ASCII equivalent, so `"＋４４"` becomes `"44"`.
///
/// Returns the input borrowed when it already consists of ASCII digits only.
pub fn strip_non_digits(s: &str) -> Cow<'_, str> {
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(s);
    }
    let normalized = dec_from_char::normalize_decimals(s);
    Cow::Owned(normalized.chars().filter(char::is_ascii_digit).collect())
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::strip_non_digits;

    #[test]
    fn strip_non_digits_borrows_clean_input() {
        assert!(matches!(strip_non_digits("2025551234"), Cow::Borrowed(_)));
        assert!(matches!(strip_non_digits(""), Cow::Borrowed("")));
    }

    #[test]
    fn strip_non_digits_drops_separators() {
        assert_eq!(strip_non_digits("+1 (202) 555-1234"), "12025551234");
        assert_eq!(strip_non_digits("+44\u{2013}20.7946.0958"), "442079460958");
        assert_eq!(strip_non_digits("abc"), "");
        assert_eq!(strip_non_digits("+"), "");
    }

    #[test]
    fn strip_non_digits_normalizes_wide_digits() {
        assert_eq!(strip_non_digits("\u{FF0B}\u{FF14}\u{FF14}"), "44");
        assert_eq!(strip_non_digits("+33 ６12 345 678"), "33612345678");
    }
}
