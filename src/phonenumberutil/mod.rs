mod canonical_number;
mod canonicalizer;
mod disambiguator;
mod formatter;
mod input_extractor;
mod phone_number_regexps;
pub mod enums;
pub mod errors;
pub mod helper_constants;
pub mod helper_types;
pub mod phonenumberutil;

use std::sync::LazyLock;

pub use canonical_number::CanonicalNumber;
pub use canonicalizer::{to_canonical, to_canonical_from_parts};
pub use enums::{FormattingRule, PhoneNumberFormat};
pub use helper_types::Resolution;
pub use input_extractor::extract;
use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});
