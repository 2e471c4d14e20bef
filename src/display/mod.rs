//! The main API to the display driver. It provides a builder API to configure the display at
//! init, cursor addressing in page/column space, and the text and graphics operations in the
//! `text` and `graphics` submodules.


pub mod graphics;
pub mod text;

use embedded_hal::blocking::delay::DelayMs;

use crate::command::consts::*;
use crate::command::{Command, PixelSource};
use crate::config::Config;
use crate::interface;
use crate::Error;

/// The logical write position, tracked by the driver in unbiased page/column space. It mirrors
/// the controller's internal RAM pointer except for the column bias, and except that data writes
/// auto-increment the controller's pointer without moving the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub page: u8,
    pub column: u8,
}

/// A driver for an SH1106 display.
///
/// The driver owns the bus interface and a delay provider, and is strictly synchronous: every
/// operation blocks until its frames have been handed to the interface. Nothing here is
/// internally synchronized; a single caller must serialize access.
pub struct Display<DI, D>
where
    DI: interface::DisplayInterface,
    D: DelayMs<u8>,
{
    iface: DI,
    delay: D,
    cursor: Cursor,
}

impl<DI, D> Display<DI, D>
where
    DI: interface::DisplayInterface,
    D: DelayMs<u8>,
{
    /// Construct a new display driver for a display connected to the interface `iface`, using
    /// `delay` for the settle time between glyph column writes. The cursor starts at page 0,
    /// column 0.
    pub fn new(iface: DI, delay: D) -> Self {
        Display {
            iface,
            delay,
            cursor: Cursor { page: 0, column: 0 },
        }
    }

    /// Initialize the display with a config message. The display drive is left off; call `on`
    /// separately once initialization (and any further RAM setup such as `clear`) is done.
    pub fn init(&mut self, config: Config) -> Result<(), Error> {
        config.send(&mut self.iface)
    }

    /// Turn the display drive on, showing the RAM contents.
    pub fn on(&mut self) -> Result<(), Error> {
        Command::SetPixelSource(PixelSource::RamContent).send(&mut self.iface)?;
        Command::SetDisplayOn(true).send(&mut self.iface)
    }

    /// Turn the display drive on with every pixel forced lit, ignoring the RAM contents.
    pub fn all_on(&mut self) -> Result<(), Error> {
        Command::SetPixelSource(PixelSource::AllOn).send(&mut self.iface)?;
        Command::SetDisplayOn(true).send(&mut self.iface)
    }

    /// Turn the display drive off. The RAM contents are retained.
    pub fn off(&mut self) -> Result<(), Error> {
        Command::SetDisplayOn(false).send(&mut self.iface)
    }

    /// Zero the entire display RAM, one page-sized data frame per page. Leaves the cursor at the
    /// start of the last page.
    pub fn clear(&mut self) -> Result<(), Error> {
        for page in 0..NUM_PAGES {
            self.set_page(page)?;
            self.set_column(0)?;
            self.iface
                .send_data(&[0u8; NUM_COLUMNS as usize])
                .map_err(|_| Error::Interface)?;
        }
        Ok(())
    }

    /// Set the page register. Rejects pages past the last without emitting anything or touching
    /// the cursor.
    pub fn set_page(&mut self, page: u8) -> Result<(), Error> {
        if page > PAGE_MAX {
            return Err(Error::OutOfBounds);
        }
        Command::SetPageAddress(page).send(&mut self.iface)?;
        self.cursor.page = page;
        Ok(())
    }

    /// Set the column register to an unbiased column. Rejects columns past the last without
    /// emitting anything or touching the cursor.
    pub fn set_column(&mut self, column: u8) -> Result<(), Error> {
        if column > COLUMN_MAX {
            return Err(Error::OutOfBounds);
        }
        Command::SetColumnAddress(column).send(&mut self.iface)?;
        self.cursor.column = column;
        Ok(())
    }

    /// Set the full cursor position, page first, then column.
    pub fn set_cursor(&mut self, page: u8, column: u8) -> Result<(), Error> {
        self.set_page(page)?;
        self.set_column(column)
    }

    /// The cursor position the driver believes the controller is at. Data writes auto-increment
    /// the controller's column pointer without updating this.
    pub fn position(&self) -> Cursor {
        self.cursor
    }

    /// Send one raw command frame. For controller features the typed API does not cover.
    pub fn write_command(&mut self, command: u8) -> Result<(), Error> {
        self.iface
            .send_commands(&[command])
            .map_err(|_| Error::Interface)
    }

    /// Send one raw data frame at the current cursor. Useful for callers that compose column
    /// bytes themselves, e.g. to merge pixels that share a column byte (see
    /// `Display::set_pixel`). A frame holds at most one full page of column bytes; longer
    /// slices are rejected without emitting anything.
    pub fn write_data(&mut self, buf: &[u8]) -> Result<(), Error> {
        if buf.len() > NUM_COLUMNS as usize {
            return Err(Error::OutOfBounds);
        }
        self.iface.send_data(buf).map_err(|_| Error::Interface)
    }

    pub(crate) fn interface(&mut self) -> &mut DI {
        &mut self.iface
    }

    pub(crate) fn delay_ms(&mut self, ms: u8) {
        self.delay.delay_ms(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::{NoDelay, Sent, TestSpyInterface};

    fn new_display(di: &TestSpyInterface) -> Display<TestSpyInterface, NoDelay> {
        Display::new(di.split(), NoDelay)
    }

    #[test]
    fn init_defaults() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.init(Config::new()).unwrap();
        di.check_multi(frames!(
            cmd [0xAE],       // display off
            cmd [0xA8, 0x3F], // multiplex ratio 64 lines
            cmd [0xD3, 0x00], // display offset 0
            cmd [0x40],       // start line 0
            cmd [0xA1],       // segment remap reversed
            cmd [0xC0],       // COM scan row 0 first
            cmd [0xDA, 0x12], // COM pins alternative
            cmd [0x81, 0x7F], // contrast
            cmd [0xD5, 0xA0], // clock divide
            cmd [0x8D, 0x14], // charge pump on
            cmd [0x20, 0x00], // horizontal addressing
            cmd [0xD9, 0x22], // precharge period
            cmd [0xDB, 0x20], // VCOMH deselect level
            cmd [0xA6],       // normal polarity
            cmd [0xA4],       // pixels from RAM
            cmd [0x2E]        // deactivate scroll
        ));
    }

    #[test]
    fn init_overridden_options() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        let cfg = Config::new()
            .multiplex_ratio(32)
            .display_offset(16)
            .contrast(0xCD)
            .charge_pump(false);
        disp.init(cfg).unwrap();
        di.check_multi(frames!(
            cmd [0xAE],
            cmd [0xA8, 0x1F], // multiplex ratio 32 lines
            cmd [0xD3, 0x10], // display offset 16
            cmd [0x40],
            cmd [0xA1],
            cmd [0xC0],
            cmd [0xDA, 0x12],
            cmd [0x81, 0xCD], // contrast
            cmd [0xD5, 0xA0],
            cmd [0x8D, 0x10], // charge pump off
            cmd [0x20, 0x00],
            cmd [0xD9, 0x22],
            cmd [0xDB, 0x20],
            cmd [0xA6],
            cmd [0xA4],
            cmd [0x2E]
        ));
    }

    #[test]
    fn power_toggles() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.on().unwrap();
        disp.all_on().unwrap();
        disp.off().unwrap();
        di.check_multi(frames!(
            cmd [0xA4], cmd [0xAF],
            cmd [0xA5], cmd [0xAF],
            cmd [0xAE]
        ));
    }

    #[test]
    fn set_page_updates_cursor_and_emits_one_frame() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.set_page(3).unwrap();
        di.check_multi(frames!(cmd[0xB3]));
        assert_eq!(disp.position(), Cursor { page: 3, column: 0 });
    }

    #[test]
    fn set_page_out_of_bounds_leaves_cursor_and_bus_untouched() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.set_cursor(2, 40).unwrap();
        di.clear();
        for page in 8..=255u8 {
            assert_eq!(disp.set_page(page), Err(Error::OutOfBounds));
        }
        assert_eq!(di.frame_count(), 0);
        assert_eq!(disp.position(), Cursor { page: 2, column: 40 });
    }

    #[test]
    fn set_column_biases_and_splits_nibbles() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.set_column(100).unwrap();
        // 100 + 2 = 102 = 0x66.
        di.check_multi(frames!(cmd[0x06], cmd[0x16]));
        assert_eq!(disp.position(), Cursor { page: 0, column: 100 });

        assert_eq!(disp.set_column(132), Err(Error::OutOfBounds));
        assert_eq!(disp.position(), Cursor { page: 0, column: 100 });
    }

    #[test]
    fn set_cursor_is_page_then_column() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.set_cursor(7, 0).unwrap();
        di.check_multi(frames!(cmd[0xB7], cmd[0x02], cmd[0x10]));
        assert_eq!(disp.position(), Cursor { page: 7, column: 0 });
    }

    #[test]
    fn clear_writes_every_page() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.clear().unwrap();
        let sent = di.sent();
        // Per page: page select, two column nibbles, one full-page data frame.
        assert_eq!(sent.len(), 8 * 4);
        for page in 0..8usize {
            assert_eq!(sent[page * 4], Sent::Cmd(vec![0xB0 + page as u8]));
            assert_eq!(sent[page * 4 + 1], Sent::Cmd(vec![0x02]));
            assert_eq!(sent[page * 4 + 2], Sent::Cmd(vec![0x10]));
            assert_eq!(sent[page * 4 + 3], Sent::Data(vec![0u8; 132]));
        }
        assert_eq!(disp.position(), Cursor { page: 7, column: 0 });
    }

    #[test]
    fn raw_passthroughs() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.write_command(0xA7).unwrap();
        disp.write_data(&[0xAA, 0x55]).unwrap();
        di.check_multi(frames!(cmd[0xA7], data[0xAA, 0x55]));
    }

    #[test]
    fn write_data_caps_at_one_page() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.write_data(&[0xFFu8; 132]).unwrap();
        assert_eq!(di.frame_count(), 1);

        di.clear();
        assert_eq!(disp.write_data(&[0xFFu8; 133]), Err(Error::OutOfBounds));
        assert_eq!(di.frame_count(), 0);
    }
}
