//! Canonicalization of user-typed phone numbers into E.164 and back into a
//! country-aware display form.
//!
//! ```
//! use rdialcode::{PHONE_NUMBER_UTIL, PhoneNumberFormat};
//!
//! let number = PHONE_NUMBER_UTIL.parse("+1 242 555 1234").unwrap();
//! assert_eq!(number.dial_code(), "1242");
//! assert_eq!(PHONE_NUMBER_UTIL.format(&number, PhoneNumberFormat::E164), "+12425551234");
//! assert_eq!(PHONE_NUMBER_UTIL.format_for_display("+12025551234"), "+1 (202) 555-1234");
//! ```

mod countryregistry;
mod phonenumberutil;
pub(crate) mod string_util;


pub use countryregistry::{CountryEntry, CountryRegistry, COUNTRY_ENTRIES, MAX_LENGTH_DIAL_CODE};
pub use phonenumberutil::{
    errors,
    helper_constants,
    phonenumberutil::PhoneNumberUtil,
    to_canonical, to_canonical_from_parts, extract,
    CanonicalNumber, FormattingRule, PhoneNumberFormat, Resolution, PHONE_NUMBER_UTIL,
};
