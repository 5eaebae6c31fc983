//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::command::{Command, Direction};
use crate::config::Config;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::position::{COLUMNS, Position, is_valid_row, print_span};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Blank row used by [`Display::clear_line`]
const BLANK_ROW: [u8; COLUMNS as usize] = [b' '; COLUMNS as usize];

/// Driver for a 2x16 serial character display
///
/// Every operation is blocking: each command pair is followed by the
/// configured settle delay. The display cannot be read back, so the driver
/// keeps no state about cursor or contents.
///
/// Out-of-range rows, columns and brightness values are ignored unless
/// [`Config::strict`] is set, in which case they are returned as errors
/// before anything is sent.
pub struct Display<I, D>
where
    I: DisplayInterface,
    D: DelayNs,
{
    /// Serial interface
    interface: I,
    /// Delay provider for settle and scroll timing
    delay: D,
    /// Driver configuration
    config: Config,
}

impl<I, D> Display<I, D>
where
    I: DisplayInterface,
    D: DelayNs,
{
    /// Create a new Display instance
    pub fn new(interface: I, delay: D, config: Config) -> Self {
        Self {
            interface,
            delay,
            config,
        }
    }

    /// Create a new Display instance with the default configuration
    pub fn with_defaults(interface: I, delay: D) -> Self {
        Self::new(interface, delay, Config::default())
    }

    /// Move the cursor to `row` (1..=2), `column` (1..=16)
    ///
    /// Any other coordinate is ignored.
    pub fn set_position(&mut self, row: u8, column: u8) -> DisplayResult<I> {
        if self.config.strict && Position::new(row, column).is_none() {
            return Err(Error::InvalidPosition { row, column });
        }
        self.goto(row, usize::from(column))
    }

    /// Return the cursor to row 1, column 1 and undo any display shift
    pub fn home(&mut self) -> DisplayResult<I> {
        self.send_command(self.config.protocol.home())
    }

    /// Clear all characters and return the cursor to row 1, column 1
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.send_command(self.config.protocol.clear())
    }

    /// Blank a whole row and leave the cursor at its first column
    pub fn clear_line(&mut self, row: u8) -> DisplayResult<I> {
        if !self.check_row(row)? {
            return Ok(());
        }
        self.goto(row, 1)?;
        self.write_bytes(&BLANK_ROW)?;
        self.goto(row, 1)
    }

    /// Blank `count` cells starting at (`row`, `column`)
    ///
    /// Cells past column 16 are skipped by the positioning step, but a space
    /// is still written for them at wherever the display cursor sits, which
    /// is off-screen after column 16.
    pub fn clear_range(&mut self, row: u8, column: u8, count: u8) -> DisplayResult<I> {
        if self.config.strict && Position::new(row, column).is_none() {
            return Err(Error::InvalidPosition { row, column });
        }
        for i in 0..usize::from(count) {
            self.goto(row, usize::from(column) + i)?;
            self.write_bytes(b" ")?;
        }
        Ok(())
    }

    /// Print text starting at (`row`, `column`)
    ///
    /// Accepts anything that views as bytes: `&str`, byte strings, or arrays
    /// of CGRAM glyph codes. Text is clipped at column 16; each character is
    /// individually positioned before it is written.
    pub fn print<T>(&mut self, row: u8, column: u8, text: T) -> DisplayResult<I>
    where
        T: AsRef<[u8]>,
    {
        if self.config.strict && Position::new(row, column).is_none() {
            return Err(Error::InvalidPosition { row, column });
        }
        let text = text.as_ref();
        let span = print_span(column, text.len());
        if span < text.len() {
            debug!(
                "clipping print at row {row}, column {column}: {span} of {} bytes",
                text.len()
            );
        }
        for (i, byte) in text.iter().take(span).enumerate() {
            self.goto(row, usize::from(column) + i)?;
            self.write_bytes(&[*byte])?;
        }
        Ok(())
    }

    /// Move the cursor to the first column of `row`
    pub fn move_to_start(&mut self, row: u8) -> DisplayResult<I> {
        if !self.check_row(row)? {
            return Ok(());
        }
        self.goto(row, 1)
    }

    /// Set display on/off, underline cursor and blinking cursor
    pub fn set_display(
        &mut self,
        display_on: bool,
        cursor_on: bool,
        blink_on: bool,
    ) -> DisplayResult<I> {
        let cmd = self
            .config
            .protocol
            .display_control(display_on, cursor_on, blink_on);
        self.send_command(cmd)
    }

    /// Shift the display right `count` times, pausing `delay_ms` between steps
    pub fn display_scroll_right(&mut self, count: u16, delay_ms: u32) -> DisplayResult<I> {
        self.scroll(Direction::Right, count, delay_ms)
    }

    /// Shift the display left `count` times, pausing `delay_ms` between steps
    pub fn display_scroll_left(&mut self, count: u16, delay_ms: u32) -> DisplayResult<I> {
        self.scroll(Direction::Left, count, delay_ms)
    }

    /// Shift the display right using [`Config::scroll_delay_ms`]
    pub fn scroll_right(&mut self, count: u16) -> DisplayResult<I> {
        self.scroll(Direction::Right, count, self.config.scroll_delay_ms)
    }

    /// Shift the display left using [`Config::scroll_delay_ms`]
    pub fn scroll_left(&mut self, count: u16) -> DisplayResult<I> {
        self.scroll(Direction::Left, count, self.config.scroll_delay_ms)
    }

    /// Move the cursor left `count` cells
    pub fn cursor_move_left(&mut self, count: u16) -> DisplayResult<I> {
        self.move_cursor(Direction::Left, count)
    }

    /// Move the cursor right `count` cells
    pub fn cursor_move_right(&mut self, count: u16) -> DisplayResult<I> {
        self.move_cursor(Direction::Right, count)
    }

    /// Advance the cursor rightwards after each character
    ///
    /// With `move_display`, the display shifts instead of the cursor.
    pub fn set_entry_mode_right(&mut self, move_display: bool) -> DisplayResult<I> {
        let cmd = self
            .config
            .protocol
            .entry_mode(Direction::Right, move_display);
        self.send_command(cmd)
    }

    /// Advance the cursor leftwards after each character
    ///
    /// With `move_display`, the display shifts instead of the cursor.
    pub fn set_entry_mode_left(&mut self, move_display: bool) -> DisplayResult<I> {
        let cmd = self
            .config
            .protocol
            .entry_mode(Direction::Left, move_display);
        self.send_command(cmd)
    }

    /// Set backlight brightness, 0..=100 percent
    pub fn set_brightness(&mut self, percent: u8) -> DisplayResult<I> {
        match self.config.protocol.brightness(percent) {
            Some(cmd) => self.send_command(cmd),
            None if self.config.strict => Err(Error::InvalidBrightness { percent }),
            None => {
                debug!("ignoring brightness {percent}%");
                Ok(())
            }
        }
    }

    /// Write raw display data at the current cursor position
    ///
    /// No positioning and no settle delay; the display interprets every byte
    /// as a character or glyph code.
    pub fn write_bytes(&mut self, data: &[u8]) -> DisplayResult<I> {
        trace!("data {data:02X?}");
        self.interface.send_bytes(data).map_err(Error::Interface)
    }

    /// Send a command pair followed by the settle delay
    pub fn send_command(&mut self, cmd: Command) -> DisplayResult<I> {
        trace!("command {:02X} {:02X}", cmd.prefix, cmd.payload);
        self.interface
            .send_bytes(&cmd.bytes())
            .map_err(Error::Interface)?;
        self.delay.delay_ms(self.config.settle_delay_ms);
        Ok(())
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the interface
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Release the interface and delay provider
    pub fn release(self) -> (I, D) {
        (self.interface, self.delay)
    }

    /// Position the cursor, ignoring cells outside the grid
    fn goto(&mut self, row: u8, column: usize) -> DisplayResult<I> {
        match Position::from_wide(row, column) {
            Some(pos) => {
                let address = pos.ddram_address(&self.config.protocol.row_offsets);
                self.send_command(self.config.protocol.set_ddram_address(address))
            }
            None => {
                debug!("ignoring position row {row}, column {column}");
                Ok(())
            }
        }
    }

    /// `Ok(true)` if `row` is usable, `Ok(false)` if it should be ignored
    fn check_row(&self, row: u8) -> core::result::Result<bool, Error<I>> {
        if is_valid_row(row) {
            Ok(true)
        } else if self.config.strict {
            Err(Error::InvalidRow { row })
        } else {
            debug!("ignoring row {row}");
            Ok(false)
        }
    }

    fn scroll(&mut self, direction: Direction, count: u16, delay_ms: u32) -> DisplayResult<I> {
        let cmd = self.config.protocol.display_shift(direction);
        for step in 0..count {
            if step > 0 {
                self.delay.delay_ms(delay_ms);
            }
            self.send_command(cmd)?;
        }
        Ok(())
    }

    fn move_cursor(&mut self, direction: Direction, count: u16) -> DisplayResult<I> {
        let cmd = self.config.protocol.cursor_shift(direction);
        for _ in 0..count {
            self.send_command(cmd)?;
        }
        Ok(())
    }
}

impl<I, D> core::fmt::Write for Display<I, D>
where
    I: DisplayInterface,
    D: DelayNs,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_bytes(s.as_bytes()).map_err(|_| core::fmt::Error)
    }
}
