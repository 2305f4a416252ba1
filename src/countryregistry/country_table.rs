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

macro_rules! entries {
    ($(($code:literal, $name:literal, $max:literal)),* $(,)?) => {
        &[$(CountryEntry::new($code, $name, $max)),*]
    };
}

/// Built-in dial-code table. Declaration order is the iteration order exposed
/// to callers and the tie-break order of the disambiguator.
///
/// North American Numbering Plan members that own an area code block are
/// listed as four digit dial codes next to the shared `1`.
pub static COUNTRY_ENTRIES: &[CountryEntry] = entries![
    ("1", "United States / Canada", 10),
    ("1242", "Bahamas", 7),
    ("1246", "Barbados", 7),
    ("1264", "Anguilla", 7),
    ("1268", "Antigua and Barbuda", 7),
    ("1284", "British Virgin Islands", 7),
    ("1340", "U.S. Virgin Islands", 7),
    ("1345", "Cayman Islands", 7),
    ("1441", "Bermuda", 7),
    ("1473", "Grenada", 7),
    ("1649", "Turks and Caicos Islands", 7),
    ("1664", "Montserrat", 7),
    ("1670", "Northern Mariana Islands", 7),
    ("1671", "Guam", 7),
    ("1684", "American Samoa", 7),
    ("1721", "Sint Maarten", 7),
    ("1758", "Saint Lucia", 7),
    ("1767", "Dominica", 7),
    ("1784", "Saint Vincent and the Grenadines", 7),
    ("1787", "Puerto Rico", 7),
    ("1809", "Dominican Republic", 7),
    ("1868", "Trinidad and Tobago", 7),
    ("1869", "Saint Kitts and Nevis", 7),
    ("1876", "Jamaica", 7),
    ("7", "Russia", 10),
    ("20", "Egypt", 10),
    ("27", "South Africa", 9),
    ("30", "Greece", 10),
    ("31", "Netherlands", 9),
    ("32", "Belgium", 9),
    ("33", "France", 9),
    ("34", "Spain", 9),
    ("36", "Hungary", 9),
    ("39", "Italy", 10),
    ("40", "Romania", 9),
    ("41", "Switzerland", 9),
    ("43", "Austria", 13),
    ("44", "United Kingdom", 10),
    ("45", "Denmark", 8),
    ("46", "Sweden", 9),
    ("47", "Norway", 8),
    ("48", "Poland", 9),
    ("49", "Germany", 11),
    ("51", "Peru", 9),
    ("52", "Mexico", 10),
    ("53", "Cuba", 8),
    ("54", "Argentina", 10),
    ("55", "Brazil", 11),
    ("56", "Chile", 9),
    ("57", "Colombia", 10),
    ("58", "Venezuela", 10),
    ("60", "Malaysia", 10),
    ("61", "Australia", 9),
    ("62", "Indonesia", 12),
    ("63", "Philippines", 10),
    ("64", "New Zealand", 10),
    ("65", "Singapore", 8),
    ("66", "Thailand", 9),
    ("81", "Japan", 10),
    ("82", "South Korea", 10),
    ("84", "Vietnam", 10),
    ("86", "China", 11),
    ("90", "Turkey", 10),
    ("91", "India", 10),
    ("92", "Pakistan", 10),
    ("93", "Afghanistan", 9),
    ("94", "Sri Lanka", 9),
    ("95", "Myanmar", 10),
    ("98", "Iran", 10),
    ("212", "Morocco", 9),
    ("213", "Algeria", 9),
    ("216", "Tunisia", 8),
    ("233", "Ghana", 9),
    ("234", "Nigeria", 10),
    ("254", "Kenya", 9),
    ("255", "Tanzania", 9),
    ("256", "Uganda", 9),
    ("351", "Portugal", 9),
    ("352", "Luxembourg", 11),
    ("353", "Ireland", 9),
    ("354", "Iceland", 9),
    ("358", "Finland", 10),
    ("359", "Bulgaria", 9),
    ("370", "Lithuania", 8),
    ("371", "Latvia", 8),
    ("372", "Estonia", 8),
    ("380", "Ukraine", 9),
    ("381", "Serbia", 9),
    ("385", "Croatia", 9),
    ("420", "Czech Republic", 9),
    ("421", "Slovakia", 9),
    ("852", "Hong Kong", 8),
    ("886", "Taiwan", 9),
    ("966", "Saudi Arabia", 9),
    ("971", "United Arab Emirates", 9),
    ("972", "Israel", 9),
    ("974", "Qatar", 8),
];
