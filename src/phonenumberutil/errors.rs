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

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("No match: {0}")]
    NoMatch(#[from] NoMatchError),
}

/// Reasons a digit sequence could not be attributed to a registered entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NoMatchError {
    /// Fewer digits than the parse floor; the number is treated as still
    /// being typed.
    #[error("Too few digits to resolve a dial code")]
    TooFewDigits,
    /// Some dial codes may prefix the input, but none leaves a national part
    /// within its length bound.
    #[error("No dial code fits within its national length bound")]
    NoDialCodeFits,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonicalError {
    #[error("No digits left after removing non-digit characters")]
    EmptyDigits,
    #[error("Dial code {0:?} contains no digits")]
    InvalidDialCode(String),
    #[error("National number {0:?} contains non-digit characters")]
    NonDigitNationalNumber(String),
    #[error("National number of {len} digits is outside 1..={max} for dial code {dial_code}")]
    NationalDigitsOutOfBounds {
        dial_code: &'static str,
        len: usize,
        max: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ExtractError {
    /// The partial input has not reached the commit threshold yet.
    #[error("Partial input is too short ({digits} digits)")]
    TooShortPartial { digits: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEntryError {
    #[error("Dial code {0:?} must have from 1 to 4 digits")]
    DialCodeLength(String),
    #[error("Dial code {0:?} must contain only ASCII digits")]
    NonDigitDialCode(String),
    #[error("Dial code {0:?} must not start with zero")]
    LeadingZero(String),
    #[error("Entry for dial code {0:?} must accept at least one national digit")]
    ZeroMaxLength(String),
    #[error("Dial code {0:?} is declared more than once")]
    DuplicateDialCode(String),
}
