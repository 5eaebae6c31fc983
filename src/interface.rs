//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for talking to the display over a serial line.
//!
//! ## Hardware Requirements
//!
//! The display has a single RX line and no way to answer. It needs:
//! - a UART (hardware or bit-banged) transmitting at [`BAUD_RATE`], 8N1
//!
//! The UART is configured by the HAL before it is handed to [`Interface`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use serlcd::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # struct MockUart;
//! # impl embedded_io::ErrorType for MockUart { type Error = Infallible; }
//! # impl embedded_io::Write for MockUart {
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut interface = Interface::new(MockUart);
//!
//! // Clear display
//! let _ = interface.send_bytes(&[0xFE, 0x01]);
//!
//! // Raw character
//! let _ = interface.send_byte(b'A');
//! ```

use core::fmt::Debug;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Baud rate the display firmware listens at
pub const BAUD_RATE: u32 = 9600;

/// Trait for the byte channel to the display
///
/// This trait abstracts over different transports, allowing the
/// [`Display`](crate::display::Display) to work with any UART, a bit-banged
/// line, or a recording mock in tests.
///
/// ## Implementing
///
/// For most cases, wrap an [`embedded_io::Write`] with [`Interface`]. Bytes
/// must be delivered in order; the display has no framing and a lost byte
/// desynchronises the prefix/payload pairing.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send bytes to the display, in order, without interleaving
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    #[allow(clippy::type_complexity)]
    fn send_bytes(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send a single byte to the display
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    #[allow(clippy::type_complexity)]
    fn send_byte(&mut self, byte: u8) -> InterfaceResult<(), Self::Error> {
        self.send_bytes(&[byte])
    }
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<E> {
    /// Serial write error
    Write(E),
}

impl<E: Debug> core::fmt::Display for InterfaceError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Write(e) => write!(f, "Serial write error: {e:?}"),
        }
    }
}

impl<E: Debug> core::error::Error for InterfaceError<E> {}

/// Serial interface implementation
///
/// Implements [`DisplayInterface`] for any [`embedded_io::Write`], which
/// most HAL UART transmitters provide.
///
/// ## Type Parameters
///
/// * `W` - Serial transmitter implementing [`embedded_io::Write`]
#[derive(Debug)]
pub struct Interface<W> {
    /// Serial transmitter, already configured for [`BAUD_RATE`]
    serial: W,
}

impl<W> Interface<W>
where
    W: embedded_io::Write,
{
    /// Create a new Interface
    ///
    /// The transmitter must already run at [`BAUD_RATE`].
    pub fn new(serial: W) -> Self {
        Self { serial }
    }

    /// Baud rate the transmitter is expected to run at
    pub fn baud_rate(&self) -> u32 {
        BAUD_RATE
    }

    /// Release the serial transmitter
    pub fn release(self) -> W {
        self.serial
    }
}

impl<W> DisplayInterface for Interface<W>
where
    W: embedded_io::Write,
{
    type Error = InterfaceError<W::Error>;

    fn send_bytes(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.serial.write_all(data).map_err(InterfaceError::Write)?;
        self.serial.flush().map_err(InterfaceError::Write)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct MockUart {
        written: Vec<u8>,
        flushes: usize,
        fail: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_io::Error for MockError {
        fn kind(&self) -> embedded_io::ErrorKind {
            embedded_io::ErrorKind::Other
        }
    }

    impl embedded_io::ErrorType for MockUart {
        type Error = MockError;
    }

    impl embedded_io::Write for MockUart {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            // Accept at most two bytes per call to exercise write_all
            let n = buf.len().min(2);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_baud_rate() {
        let interface = Interface::new(MockUart::default());
        assert_eq!(BAUD_RATE, 9600);
        assert_eq!(interface.baud_rate(), 9600);
    }

    #[test]
    fn test_send_bytes_writes_everything_in_order() {
        let mut interface = Interface::new(MockUart::default());
        interface.send_bytes(&[0xFE, 0x80, b'H', b'i', b'!']).unwrap();
        let uart = interface.release();
        assert_eq!(uart.written, [0xFE, 0x80, b'H', b'i', b'!']);
        assert_eq!(uart.flushes, 1);
    }

    #[test]
    fn test_send_byte() {
        let mut interface = Interface::new(MockUart::default());
        interface.send_byte(b' ').unwrap();
        assert_eq!(interface.release().written, [b' ']);
    }

    #[test]
    fn test_write_error_is_wrapped() {
        let mut interface = Interface::new(MockUart {
            fail: true,
            ..MockUart::default()
        });
        let result = interface.send_bytes(&[0xFE, 0x01]);
        assert!(matches!(result, Err(InterfaceError::Write(MockError))));
    }
}
