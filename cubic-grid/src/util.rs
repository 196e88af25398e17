//! Formatting and diagnostic helpers shared by the rest of the crate.

mod custom_format;
pub use custom_format::*;

mod log;
pub use self::log::standard_filter;

#[cfg(any(feature = "std", test))]
mod multi_failure;
#[doc(hidden)] // test helper, not stable API
#[cfg(any(feature = "std", test))]
pub use multi_failure::MultiFailure;
