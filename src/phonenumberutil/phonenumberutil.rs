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

use log::warn;

use super::{
    canonical_number::CanonicalNumber,
    canonicalizer, disambiguator,
    enums::PhoneNumberFormat,
    errors::{CanonicalError, ExtractError, InvalidEntryError, ParseError},
    formatter,
    helper_types::Resolution,
    input_extractor,
    phone_number_regexps::PhoneNumberRegExps,
};
use crate::countryregistry::{CountryEntry, CountryRegistry};

pub struct PhoneNumberUtil {
    /// The dial-code table every lookup and resolution runs against.
    registry: CountryRegistry,

    /// Helper struct holding precompiled regular expressions.
    reg_exps: PhoneNumberRegExps,
}

impl PhoneNumberUtil {
    pub(super) fn new() -> Self {
        Self {
            registry: CountryRegistry::new(),
            reg_exps: PhoneNumberRegExps::new(),
        }
    }

    /// Creates an instance over a custom table instead of the compiled-in one.
    pub fn new_for_entries(
        entries: impl IntoIterator<Item = CountryEntry>,
    ) -> Result<Self, InvalidEntryError> {
        Ok(Self {
            registry: CountryRegistry::new_for_entries(entries)?,
            reg_exps: PhoneNumberRegExps::new(),
        })
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    /// Supported entries in table order, e.g. to populate a selector.
    pub fn list_entries(&self) -> &[CountryEntry] {
        self.registry.all_entries()
    }

    pub fn find_by_dial_code(&self, dial_code: &str) -> Option<&CountryEntry> {
        self.registry.find_by_dial_code(dial_code)
    }

    pub fn get_entry_for_country_code(&self, country_code: i32) -> Option<&CountryEntry> {
        self.registry.find_by_country_code(country_code)
    }

    /// Resolves a digit-only string to an entry and its national part. See
    /// [`disambiguator::resolve`] for the precedence rules.
    pub fn resolve<'d>(&self, digits: &'d str) -> Resolution<'_, 'd> {
        disambiguator::resolve(&self.registry, digits)
    }

    /// Parses free-form text such as `+1 (242) 555-1234` or `12425551234`.
    pub fn parse(&self, raw: &str) -> Result<CanonicalNumber<'_>, ParseError> {
        canonicalizer::parse(&self.registry, raw)
    }

    /// Whether `raw` parses to a registered entry.
    pub fn is_viable_input(&self, raw: &str) -> bool {
        self.parse(raw).is_ok()
    }

    /// `+<dial code><digits>` for an entry chosen elsewhere.
    pub fn to_canonical(&self, entry: &CountryEntry, national: &str) -> Result<String, CanonicalError> {
        canonicalizer::to_canonical(entry, national)
    }

    /// `+<dial code><digits>`. The dial code may be written with or without
    /// the plus sign and is not checked against the table.
    pub fn to_canonical_from_parts(&self, dial_code: &str, national: &str) -> Result<String, CanonicalError> {
        canonicalizer::to_canonical_from_parts(dial_code, national)
    }

    pub fn format(&self, number: &CanonicalNumber<'_>, number_format: PhoneNumberFormat) -> String {
        formatter::format(&self.reg_exps, number, number_format)
    }

    /// Human readable form of a stored canonical value, e.g.
    /// `+1 (202) 555-1234`. Returns the input itself when it does not parse.
    pub fn format_for_display<'a>(&self, canonical: &'a str) -> Cow<'a, str> {
        formatter::format_for_display(&self.registry, &self.reg_exps, canonical)
    }

    /// Progressive national grouping for `dial_code`, suitable for partial
    /// input.
    pub fn format_national(&self, dial_code: &str, digits: &str) -> String {
        formatter::format_national(&self.reg_exps, dial_code, digits)
    }

    /// Bounded national digits for the selected dial code. An unknown dial
    /// code falls back to the default bound.
    pub fn extract_bounded(&self, dial_code: &str, raw: &str) -> Result<String, ExtractError> {
        let entry = self.registry.find_by_dial_code(dial_code);
        if entry.is_none() {
            warn!("Unknown dial code {:?}, using the default national length bound", dial_code);
        }
        input_extractor::extract(entry, raw)
    }
}
