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

use std::collections::{HashMap, HashSet};

use log::{trace, warn};

use super::{CountryEntry, COUNTRY_ENTRIES};
use crate::phonenumberutil::{errors::InvalidEntryError, helper_constants::PLUS_SIGN};

/// Read-only table of dial-code entries.
///
/// Built once and never mutated afterwards, so a shared reference can be
/// handed to any number of threads.
#[derive(Debug)]
pub struct CountryRegistry {
    /// Entries in declaration order.
    entries: Vec<CountryEntry>,

    /// A mapping from an exact dial code (without plus sign) to the index of
    /// its entry in `entries`.
    dial_code_to_index_map: HashMap<&'static str, usize>,
}

impl CountryRegistry {
    /// Builds the registry from the compiled-in table.
    ///
    /// # Panics
    /// If the built-in table is malformed. This indicates a library bug.
    pub fn new() -> Self {
        match Self::new_for_entries(COUNTRY_ENTRIES.iter().copied()) {
            Ok(registry) => registry,
            Err(err) => {
                let err_message = format!("Compiled-in dial-code table is invalid: {}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    /// Builds a registry for a custom table, validating every entry.
    pub fn new_for_entries(
        entries: impl IntoIterator<Item = CountryEntry>,
    ) -> Result<Self, InvalidEntryError> {
        let entries: Vec<CountryEntry> = entries.into_iter().collect();
        let mut dial_code_to_index_map = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if dial_code_to_index_map.insert(entry.dial_code, index).is_some() {
                return Err(InvalidEntryError::DuplicateDialCode(entry.dial_code.to_owned()));
            }
        }
        trace!("Loaded dial-code table with {} entries", entries.len());

        Ok(Self { entries, dial_code_to_index_map })
    }

    /// Exact lookup. A single leading plus sign is tolerated, so `"+44"` and
    /// `"44"` find the same entry. Prefix matching is never attempted here.
    pub fn find_by_dial_code(&self, dial_code: &str) -> Option<&CountryEntry> {
        let code = dial_code.strip_prefix(PLUS_SIGN).unwrap_or(dial_code);
        self.dial_code_to_index_map
            .get(code)
            .map(|&index| &self.entries[index])
    }

    /// Numeric variant of [`Self::find_by_dial_code`].
    pub fn find_by_country_code(&self, country_code: i32) -> Option<&CountryEntry> {
        if country_code <= 0 {
            warn!("Invalid country calling code provided: {}", country_code);
            return None;
        }
        let mut buf = itoa::Buffer::new();
        self.find_by_dial_code(buf.format(country_code))
    }

    /// All entries in declaration order.
    pub fn all_entries(&self) -> &[CountryEntry] {
        &self.entries
    }

    pub fn supported_dial_codes(&self) -> HashSet<&str> {
        self.entries.iter().map(|entry| entry.dial_code).collect()
    }

    /// Entries whose dial code is a string prefix of `digits`, in declaration
    /// order.
    pub(crate) fn entries_prefixing<'a>(
        &'a self,
        digits: &str,
    ) -> impl Iterator<Item = &'a CountryEntry> {
        self.entries
            .iter()
            .filter(move |entry| digits.starts_with(entry.dial_code))
    }
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
