//! SerLCD 2x16 Character Display Driver
//!
//! A driver for 2-line, 16-character LCD modules fitted with a SerLCD-style
//! serial backpack: one RX line at 9600 baud, two-byte commands, no read-back.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 delays, `embedded-io` serial writers
//! - Cursor positioning, text printing with clipping at the row end
//! - Line and range clearing, display scrolling, cursor movement
//! - Display/cursor modes, entry modes, backlight brightness
//! - `core::fmt::Write` for formatted output at the cursor
//! - Swappable command table for other backpack firmwares
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use serlcd::{Builder, Display, Interface};
//!
//! # struct MockUart;
//! # impl embedded_io::ErrorType for MockUart { type Error = Infallible; }
//! # impl embedded_io::Write for MockUart {
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let uart = MockUart;
//! # let delay = MockDelay;
//! let interface = Interface::new(uart);
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut lcd = Display::new(interface, delay, config);
//! let _ = lcd.clear();
//! let _ = lcd.set_brightness(80);
//! let _ = lcd.set_display(true, true, false);
//! let _ = lcd.print(1, 3, "Hello World");
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// SerLCD command definitions and protocol table
pub mod command;
/// Driver configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Display geometry and cursor addressing
pub mod position;

pub use command::{Command, Direction, Protocol, SERLCD};
pub use config::{Builder, Config, DEFAULT_SCROLL_DELAY_MS, DEFAULT_SETTLE_DELAY_MS};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use interface::InterfaceError;
pub use interface::{BAUD_RATE, DisplayInterface, Interface};
pub use position::{COLUMNS, Position, ROWS};
