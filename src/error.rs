//! Unified error type for statebox.
//!
//! We avoid `alloc` - variants carry no data. The only fallible
//! surfaces are the pin seams; noise and invalid remote commands are
//! handled in-band (dropped, or answered on the wire) and never become
//! errors.

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Sampling a button pin failed.
    ButtonRead,

    /// Driving a status LED pin failed.
    LedWrite,
}
