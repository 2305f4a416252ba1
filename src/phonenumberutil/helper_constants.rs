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

pub const PLUS_SIGN: &str = "+";
pub const RFC3966_PREFIX: &str = "tel:";
pub const RFC3966_VISUAL_SEPARATOR: &str = "-";

// Inputs with fewer digits than this (dial code included) are considered
// incomplete and are never resolved.
pub const MIN_DIGITS_FOR_PARSE: usize = 7;
// Partial national input shorter than this is not committed by the extractor.
pub const MIN_DIGITS_FOR_COMMIT: usize = 4;
// The ITU caps the national significant number at 15 digits. Used when the
// extractor has no entry to bound against.
pub const DEFAULT_MAX_NATIONAL_LENGTH: usize = 15;

pub const NANPA_DIAL_CODE: &str = "1";
pub const UK_DIAL_CODE: &str = "44";
