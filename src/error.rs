//! Error handling for the strview library
//!
//! Most operations in this crate report failure in-band: out-of-range
//! indices saturate, and "not found" is the haystack length. The error type
//! here covers the two cases that cannot be expressed that way: an absent
//! (null) reference handed to a raw-pointer entry point, and the strict
//! bounds-checked accessors.

use thiserror::Error;

/// Main error type for the strview library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A raw-pointer input was null where a readable reference was required
    #[error("Absent input: {context}")]
    AbsentInput {
        /// Which input was absent
        context: &'static str,
    },

    /// Index out of bounds access from a strict (non-saturating) accessor
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },
}

impl ViewError {
    /// Create an absent input error
    pub fn absent_input(context: &'static str) -> Self {
        Self::AbsentInput { context }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::AbsentInput { .. } => "absent",
            Self::OutOfBounds { .. } => "bounds",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ViewError>;

/// Assert that a position lies within a view of `size` bytes (inclusive end)
#[inline]
pub fn check_pos(pos: usize, size: usize) -> Result<()> {
    if pos > size {
        Err(ViewError::out_of_bounds(pos, size))
    } else {
        Ok(())
    }
}
