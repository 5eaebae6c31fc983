//! Driver configuration types and builder

use crate::command::{Protocol, SERLCD};
pub use crate::error::BuilderError;

/// Default pause after every command, in milliseconds
///
/// The display firmware needs this long to digest a command before the next
/// byte arrives.
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 5;

/// Default pause between steps of [`Display::scroll_right`] and
/// [`Display::scroll_left`], in milliseconds
///
/// [`Display::scroll_right`]: crate::Display::scroll_right
/// [`Display::scroll_left`]: crate::Display::scroll_left
pub const DEFAULT_SCROLL_DELAY_MS: u32 = 100;

/// Driver configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Command table used to encode every operation
    pub protocol: Protocol,
    /// Pause after each command pair
    pub settle_delay_ms: u32,
    /// Inter-step pause for the default-delay scroll operations
    pub scroll_delay_ms: u32,
    /// Report out-of-range arguments as errors instead of ignoring them
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protocol: SERLCD,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
            strict: false,
        }
    }
}

/// Builder for constructing driver configuration
///
/// # Example
///
/// ```
/// use serlcd::Builder;
///
/// let config = match Builder::new().scroll_delay_ms(250).strict(true).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.settle_delay_ms, 5);
/// assert!(config.strict);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the command table
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.config.protocol = protocol;
        self
    }

    /// Set the pause after each command pair
    ///
    /// Lowering this below what the module needs makes it drop commands.
    pub fn settle_delay_ms(mut self, ms: u32) -> Self {
        self.config.settle_delay_ms = ms;
        self
    }

    /// Set the inter-step pause used by `scroll_left`/`scroll_right`
    pub fn scroll_delay_ms(mut self, ms: u32) -> Self {
        self.config.scroll_delay_ms = ms;
        self
    }

    /// Enable strict argument checking
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidBrightnessRange` if the protocol's
    /// backlight minimum is above its maximum
    pub fn build(self) -> Result<Config, BuilderError> {
        let protocol = &self.config.protocol;
        if protocol.backlight_min > protocol.backlight_max {
            return Err(BuilderError::InvalidBrightnessRange {
                min: protocol.backlight_min,
                max: protocol.backlight_max,
            });
        }
        Ok(self.config)
    }
}
