//! Text rendering and line layout over the fixed-width bitmap font.
//!
//! The glyphs are 7 columns wide, so a 132-column page holds 18 of them. Layout relies on the
//! controller auto-incrementing its column pointer as glyph columns are written; the driver's
//! logical cursor is only moved when a wrap re-homes it. Wrapping runs *upward*: the page index
//! decrements, cycling from page 0 back to page 7 and overwriting whatever was rendered there.
//! That matches the controller's page numbering growing downward on common modules, but it means
//! long text cycles over itself rather than scrolling.

use embedded_hal::blocking::delay::DelayMs;

use super::Display;
use crate::command::consts::*;
use crate::font::{FONT, GLYPH_WIDTH};
use crate::interface;
use crate::Error;

/// How many glyphs fit on one line: `132 / 7`.
pub const LINE_WRAP_INTERVAL: usize = (NUM_COLUMNS / GLYPH_WIDTH) as usize;

/// Settle time after each glyph column byte, giving the controller time to latch the write.
const GLYPH_SETTLE_MS: u8 = 1;

impl<DI, D> Display<DI, D>
where
    DI: interface::DisplayInterface,
    D: DelayMs<u8>,
{
    /// Render one glyph at the current cursor as 7 single-byte data frames, one per column, each
    /// followed by a short settle delay.
    ///
    /// The controller's column pointer auto-increments past the glyph; the driver's logical
    /// cursor is deliberately *not* advanced, so wrap accounting stays with the layout routines.
    /// Codes outside the font table are rejected without emitting anything.
    pub fn write_glyph(&mut self, code: u16) -> Result<(), Error> {
        let glyph = FONT.get(code as usize).ok_or(Error::InvalidGlyph)?;
        for &column in glyph.iter() {
            self.interface()
                .send_data(&[column])
                .map_err(|_| Error::Interface)?;
            self.delay_ms(GLYPH_SETTLE_MS);
        }
        Ok(())
    }

    /// Render a string that must fit on a single line. Strings longer than
    /// `LINE_WRAP_INTERVAL` characters are rejected whole; nothing is partially rendered. No
    /// cursor repositioning happens between characters.
    pub fn print_line(&mut self, s: &str) -> Result<(), Error> {
        if s.len() > LINE_WRAP_INTERVAL {
            return Err(Error::TooLong);
        }
        for b in s.bytes() {
            self.write_glyph(u16::from(b))?;
        }
        Ok(())
    }

    /// Render a string with fixed-interval character wrapping: the cursor is re-homed to column
    /// 0 of the current page first, and after every 18th character the line wraps upward.
    pub fn display_string(&mut self, s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Ok(());
        }
        let page = self.position().page;
        self.set_cursor(page, 0)?;
        for (i, b) in s.bytes().enumerate() {
            if i != 0 && i % LINE_WRAP_INTERVAL == 0 {
                self.wrap_upward()?;
            }
            self.write_glyph(u16::from(b))?;
        }
        Ok(())
    }

    /// Render a string with greedy word wrapping: the input is split on single spaces (empty
    /// tokens collapse), and a token that would cross the 18-character line boundary wraps the
    /// line upward before any of its characters are rendered. Tokens are never split, so a token
    /// longer than a whole line overflows past the wrap width from column 0. Every token is
    /// followed by one synthesized space, including the last.
    pub fn display_text(&mut self, s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Ok(());
        }
        let cursor = self.position();
        self.set_cursor(cursor.page, cursor.column)?;
        let mut position = 0usize;
        for token in s.split(' ').filter(|t| !t.is_empty()) {
            if position + token.len() > LINE_WRAP_INTERVAL {
                self.wrap_upward()?;
                position = 0;
            }
            for b in token.bytes() {
                self.write_glyph(u16::from(b))?;
                position += 1;
            }
            self.write_glyph(u16::from(b' '))?;
            position += 1;
        }
        Ok(())
    }

    /// Move the cursor to column 0 of the page above, cycling from page 0 around to the bottom
    /// page.
    fn wrap_upward(&mut self) -> Result<(), Error> {
        let page = match self.position().page {
            0 => PAGE_MAX,
            page => page - 1,
        };
        self.set_cursor(page, 0)
    }
}
