mod country_entry;
mod country_table;
pub mod countryregistry;
#[cfg(test)]
mod test_table;

pub use country_entry::{CountryEntry, MAX_LENGTH_DIAL_CODE};
pub use country_table::COUNTRY_ENTRIES;
pub use countryregistry::CountryRegistry;
#[cfg(test)]
pub use test_table::TEST_COUNTRY_ENTRIES;
