//! SerLCD command definitions
//!
//! Every command understood by the display firmware is exactly two bytes: a
//! prefix byte selecting the command category, followed by a payload byte.
//! The standard prefix (0xFE) forwards the payload to the HD44780-compatible
//! controller behind the serial backpack; the special prefix (0x7C) is handled
//! by the backpack itself and is used for the backlight.
//!
//! Bytes that are *not* preceded by a prefix are shown as characters at the
//! current cursor position.
//!
//! ## Protocol table
//!
//! All bytes and masks live in a [`Protocol`] table. [`SERLCD`] is the table
//! for the SparkFun-style backpack; a display with a different command set can
//! be driven by building another table and passing it to
//! [`Builder::protocol`](crate::config::Builder::protocol).
//!
//! ## Example
//!
//! ```
//! use serlcd::command::{Command, SERLCD};
//!
//! // Cursor to row 2, column 1
//! let cmd = SERLCD.set_ddram_address(0x40);
//! assert_eq!(cmd.bytes(), [0xFE, 0xC0]);
//!
//! // Full backlight
//! assert_eq!(SERLCD.brightness(100), Some(Command::new(0x7C, 157)));
//! ```

// Prefixes

/// Special command prefix (0x7C), handled by the serial backpack
pub const SPECIAL_COMMAND: u8 = 0x7C;

/// Standard command prefix (0xFE), forwarded to the LCD controller
pub const COMMAND: u8 = 0xFE;

// Standard payloads

/// Clear display (0x01)
///
/// Clears all characters and returns the cursor to row 1, column 1.
pub const CLEAR_DISPLAY: u8 = 0x01;

/// Return home (0x02)
///
/// Moves the cursor to row 1, column 1 and undoes any display shift.
pub const RETURN_HOME: u8 = 0x02;

/// Set DDRAM address base (0x80)
///
/// OR'd with the 7-bit DDRAM address of the target cell.
pub const SET_DDRAM_ADDRESS: u8 = 0x80;

/// Display control base (0x08)
///
/// OR'd with [`DISPLAY_ON`], [`CURSOR_ON`] and [`BLINK_ON`].
pub const DISPLAY_CONTROL: u8 = 0x08;

/// Display on flag for [`DISPLAY_CONTROL`]
pub const DISPLAY_ON: u8 = 0x04;

/// Underline cursor flag for [`DISPLAY_CONTROL`]
pub const CURSOR_ON: u8 = 0x02;

/// Blinking block cursor flag for [`DISPLAY_CONTROL`]
pub const BLINK_ON: u8 = 0x01;

/// Shift the whole display right by one cell (0x1C)
pub const DISPLAY_SHIFT_RIGHT: u8 = 0x1C;

/// Shift the whole display left by one cell (0x18)
pub const DISPLAY_SHIFT_LEFT: u8 = 0x18;

/// Move the cursor right by one cell (0x14)
pub const CURSOR_SHIFT_RIGHT: u8 = 0x14;

/// Move the cursor left by one cell (0x10)
pub const CURSOR_SHIFT_LEFT: u8 = 0x10;

/// Entry mode, cursor advances to the right after each write (0x06)
pub const ENTRY_MODE_RIGHT: u8 = 0x06;

/// Entry mode, cursor advances to the left after each write (0x04)
pub const ENTRY_MODE_LEFT: u8 = 0x04;

/// Entry mode flag: shift the display instead of the cursor on write
pub const ENTRY_SHIFT_DISPLAY: u8 = 0x01;

// Backlight

/// Lowest backlight payload (off)
pub const BACKLIGHT_MIN: u8 = 128;

/// Highest backlight payload (fully on)
pub const BACKLIGHT_MAX: u8 = 157;

/// DDRAM base address of each display row (row 1, row 2)
pub const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// A two-byte command: prefix followed by payload
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    /// Category selector ([`COMMAND`] or [`SPECIAL_COMMAND`])
    pub prefix: u8,
    /// Operation and flags
    pub payload: u8,
}

impl Command {
    /// Create a command from raw bytes
    pub const fn new(prefix: u8, payload: u8) -> Self {
        Self { prefix, payload }
    }

    /// Wire representation, prefix first
    pub const fn bytes(&self) -> [u8; 2] {
        [self.prefix, self.payload]
    }
}

/// Direction of a display or cursor shift
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher columns
    Right,
    /// Towards lower columns
    Left,
}

/// Byte table describing a serial LCD command set
///
/// The driver logic only ever builds commands through this table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Protocol {
    /// Prefix for standard (controller) commands
    pub command_prefix: u8,
    /// Prefix for special (backpack) commands
    pub special_prefix: u8,
    /// Clear display payload
    pub clear: u8,
    /// Return home payload
    pub home: u8,
    /// Set DDRAM address base
    pub set_ddram: u8,
    /// DDRAM base address for each row
    pub row_offsets: [u8; 2],
    /// Display control base
    pub display_control: u8,
    /// Display on flag
    pub display_on: u8,
    /// Cursor on flag
    pub cursor_on: u8,
    /// Cursor blink flag
    pub blink_on: u8,
    /// Display shift right payload
    pub display_shift_right: u8,
    /// Display shift left payload
    pub display_shift_left: u8,
    /// Cursor shift right payload
    pub cursor_shift_right: u8,
    /// Cursor shift left payload
    pub cursor_shift_left: u8,
    /// Entry mode (right) base
    pub entry_right: u8,
    /// Entry mode (left) base
    pub entry_left: u8,
    /// Entry mode "shift display on write" flag
    pub entry_shift_display: u8,
    /// Backlight payload for 0%
    pub backlight_min: u8,
    /// Backlight payload for 100%
    pub backlight_max: u8,
}

/// Command table for SerLCD-compatible backpacks on HD44780 2x16 modules
pub const SERLCD: Protocol = Protocol {
    command_prefix: COMMAND,
    special_prefix: SPECIAL_COMMAND,
    clear: CLEAR_DISPLAY,
    home: RETURN_HOME,
    set_ddram: SET_DDRAM_ADDRESS,
    row_offsets: ROW_OFFSETS,
    display_control: DISPLAY_CONTROL,
    display_on: DISPLAY_ON,
    cursor_on: CURSOR_ON,
    blink_on: BLINK_ON,
    display_shift_right: DISPLAY_SHIFT_RIGHT,
    display_shift_left: DISPLAY_SHIFT_LEFT,
    cursor_shift_right: CURSOR_SHIFT_RIGHT,
    cursor_shift_left: CURSOR_SHIFT_LEFT,
    entry_right: ENTRY_MODE_RIGHT,
    entry_left: ENTRY_MODE_LEFT,
    entry_shift_display: ENTRY_SHIFT_DISPLAY,
    backlight_min: BACKLIGHT_MIN,
    backlight_max: BACKLIGHT_MAX,
};

impl Default for Protocol {
    fn default() -> Self {
        SERLCD
    }
}

impl Protocol {
    const fn standard(&self, payload: u8) -> Command {
        Command::new(self.command_prefix, payload)
    }

    /// Clear display
    pub const fn clear(&self) -> Command {
        self.standard(self.clear)
    }

    /// Return home
    pub const fn home(&self) -> Command {
        self.standard(self.home)
    }

    /// Set the DDRAM address (cursor position)
    pub const fn set_ddram_address(&self, address: u8) -> Command {
        self.standard(self.set_ddram | address)
    }

    /// Display on/off, cursor underline and cursor blink in one command
    pub const fn display_control(&self, display_on: bool, cursor_on: bool, blink_on: bool) -> Command {
        let mut payload = self.display_control;
        if display_on {
            payload |= self.display_on;
        }
        if cursor_on {
            payload |= self.cursor_on;
        }
        if blink_on {
            payload |= self.blink_on;
        }
        self.standard(payload)
    }

    /// Shift the display contents one cell
    pub const fn display_shift(&self, direction: Direction) -> Command {
        match direction {
            Direction::Right => self.standard(self.display_shift_right),
            Direction::Left => self.standard(self.display_shift_left),
        }
    }

    /// Move the cursor one cell
    pub const fn cursor_shift(&self, direction: Direction) -> Command {
        match direction {
            Direction::Right => self.standard(self.cursor_shift_right),
            Direction::Left => self.standard(self.cursor_shift_left),
        }
    }

    /// Entry mode for the given text direction
    pub const fn entry_mode(&self, direction: Direction, shift_display: bool) -> Command {
        let mut payload = match direction {
            Direction::Right => self.entry_right,
            Direction::Left => self.entry_left,
        };
        if shift_display {
            payload |= self.entry_shift_display;
        }
        self.standard(payload)
    }

    /// Backlight command for a percentage, `None` if `percent > 100`
    ///
    /// The percentage is mapped linearly onto
    /// `backlight_min..=backlight_max`, rounding down.
    pub const fn brightness(&self, percent: u8) -> Option<Command> {
        if percent > 100 {
            return None;
        }
        let span = self.backlight_max.saturating_sub(self.backlight_min) as u16;
        let offset = (percent as u16 * span) / 100;
        Some(Command::new(
            self.special_prefix,
            self.backlight_min + offset as u8,
        ))
    }
}
