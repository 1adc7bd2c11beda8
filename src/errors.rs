//! Error types.

use core::fmt;

/// The error type returned when a timestamp or duration computation would
/// overflow the representable range.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OverflowError(pub(crate) ());

impl fmt::Display for OverflowError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        "result out of representable range".fmt(fmt)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OverflowError {}
