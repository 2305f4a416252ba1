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

use super::CountryEntry;

/// Small table for unit tests. `97`/`972` are synthetic: the longer code has a
/// tighter bound than the shorter one, so both resolution branches are
/// reachable.
pub static TEST_COUNTRY_ENTRIES: &[CountryEntry] = &[
    CountryEntry::new("1", "United States / Canada", 10),
    CountryEntry::new("1242", "Bahamas", 7),
    CountryEntry::new("1876", "Jamaica", 7),
    CountryEntry::new("7", "Russia", 10),
    CountryEntry::new("33", "France", 9),
    CountryEntry::new("44", "United Kingdom", 10),
    CountryEntry::new("49", "Germany", 11),
    CountryEntry::new("97", "Test Wide Block", 10),
    CountryEntry::new("972", "Test Narrow Block", 8),
];
