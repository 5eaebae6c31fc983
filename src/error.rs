//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! By default the only runtime error is a failed transport write; arguments
//! outside the display are ignored or clipped. With
//! [`Builder::strict`](crate::config::Builder::strict) enabled, those
//! arguments are reported as [`Error::InvalidPosition`], [`Error::InvalidRow`]
//! or [`Error::InvalidBrightness`] before anything is sent.
//!
//! ## Example
//!
//! ```
//! use serlcd::{Builder, BuilderError, command::SERLCD, command::Protocol};
//!
//! let inverted = Protocol { backlight_min: 10, backlight_max: 5, ..SERLCD };
//! let result = Builder::new().protocol(inverted).build();
//! assert!(matches!(result, Err(BuilderError::InvalidBrightnessRange { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when driving the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (serial write)
    ///
    /// Wraps the underlying error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Cell outside the 2x16 grid (strict mode only)
    InvalidPosition {
        /// Requested row, 1-based
        row: u8,
        /// Requested column, 1-based
        column: u8,
    },
    /// Row other than 1 or 2 (strict mode only)
    InvalidRow {
        /// Requested row
        row: u8,
    },
    /// Brightness above 100% (strict mode only)
    InvalidBrightness {
        /// Requested percentage
        percent: u8,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::InvalidPosition { row, column } => {
                write!(f, "Invalid position: row {row}, column {column}")
            }
            Self::InvalidRow { row } => write!(f, "Invalid row: {row}"),
            Self::InvalidBrightness { percent } => {
                write!(f, "Invalid brightness: {percent}% (max 100%)")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Backlight payload range is inverted
    InvalidBrightnessRange {
        /// Payload for 0%
        min: u8,
        /// Payload for 100%
        max: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidBrightnessRange { min, max } => {
                write!(f, "Invalid backlight range {min}..={max}")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
