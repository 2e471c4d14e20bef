//! The command set for the SH1106.
//!
//! Note 1: The display RAM of the SH1106 is arranged in 8 pages of 132 columns, where each column
//! is one byte driving 8 vertically-stacked pixels in that page. There is no random pixel-level
//! access; image data always writes whole column bytes. The RAM is actually 132 columns wide but
//! common 128-column modules leave 2 columns hidden on either side, which is why the column
//! address carries a fixed bias (see `consts::COLUMN_BIAS`).

use crate::interface::DisplayInterface;
use crate::Error;

pub mod consts {
    //! Constants describing the geometry of the SH1106 display RAM and the driver's text layout.

    /// Number of byte-addressable columns in each page.
    pub const NUM_COLUMNS: u8 = 132;
    /// Number of 8-pixel-tall pages.
    pub const NUM_PAGES: u8 = 8;
    /// Width of the displayable area in pixels.
    pub const PIXEL_WIDTH: u8 = NUM_COLUMNS;
    /// Height of the displayable area in pixels.
    pub const PIXEL_HEIGHT: u8 = NUM_PAGES * 8;
    pub const COLUMN_MAX: u8 = NUM_COLUMNS - 1;
    pub const PAGE_MAX: u8 = NUM_PAGES - 1;
    /// Offset added to every column address before transmission, accounting for the two RAM
    /// columns on the left edge that do not drive any pixels.
    pub const COLUMN_BIAS: u8 = 2;
}

use self::consts::*;

/// Setting of segment (column driver) remapping. Changing this setting will mirror the image
/// horizontally.
#[derive(Clone, Copy)]
pub enum SegmentRemap {
    /// Column address 0 maps to segment 0.
    Forward,
    /// Column address 0 maps to segment 131.
    Reverse,
}

/// Setting of the COM line scanning of rows. Changing this setting will flip the image
/// vertically.
#[derive(Clone, Copy)]
pub enum ComScanDirection {
    /// COM lines scan row addresses top to bottom, so that row address 0 is the first row of the
    /// display.
    RowZeroFirst,
    /// COM lines scan row addresses bottom to top, so that row address 0 is the last row of the
    /// display.
    RowZeroLast,
}

/// Setting of the COM pin hardware configuration. This is dictated by how the display module
/// wires the OLED matrix to the driver chip; the wrong value interleaves or halves the image.
/// See the display module datasheet for the correct value.
#[derive(Clone, Copy)]
pub enum ComPinsConfig {
    /// Sequential COM pin arrangement.
    Sequential,
    /// Alternative (interleaved) COM pin arrangement. This is the power-on default and matches
    /// most 64-row modules.
    Alternative,
}

/// The address increment orientation when writing image data.
#[derive(Clone, Copy)]
pub enum AddressingMode {
    /// The column address increments as image data is written, wrapping to the next page at the
    /// end of each page.
    Horizontal,
    /// The page address increments as image data is written.
    Vertical,
    /// The column address increments and wraps within the current page.
    Page,
}

/// Setting of the display polarity.
#[derive(Clone, Copy)]
pub enum DisplayMode {
    /// RAM bits set to 1 light their pixel.
    Normal,
    /// RAM bits set to 0 light their pixel.
    Inverse,
}

/// Setting of the source of pixel illumination.
#[derive(Clone, Copy)]
pub enum PixelSource {
    /// Pixels are driven by the display RAM contents.
    RamContent,
    /// Every pixel is driven on regardless of the display RAM (a lamp-test mode).
    AllOn,
}

#[derive(Clone, Copy)]
pub enum Command {
    /// Set the page register for page addressing. The following data writes land in this page.
    /// Range is 0-7.
    SetPageAddress(u8),
    /// Set the column register for the current page, as an *unbiased* displayable column. Range
    /// is 0-131. The controller splits the (biased) column address across two 4-bit registers,
    /// so this is the one command that is transmitted as two command frames: low nibble first,
    /// then high nibble. (Note 1)
    SetColumnAddress(u8),
    /// Set the contrast (segment drive current). Range 0-255.
    SetContrast(u8),
    /// Set the MUX ratio, which controls how many COM lines are scanned and thus how many pixel
    /// rows are active. Range 1-64.
    SetMultiplexRatio(u8),
    /// Set the display COM line offset, rolling the displayed image vertically. Range 0-63.
    SetDisplayOffset(u8),
    /// Set the display start line, mapping RAM row `line` to the first displayed row. Range
    /// 0-63.
    SetStartLine(u8),
    /// Set segment remapping. See enum for details.
    SetSegmentRemap(SegmentRemap),
    /// Set the COM scan direction. See enum for details.
    SetComScanDirection(ComScanDirection),
    /// Set the COM pin hardware configuration. See enum for details.
    SetComPinsConfig(ComPinsConfig),
    /// Set the display clock divide ratio and oscillator frequency. The low nibble is the divide
    /// ratio minus one and the high nibble selects the oscillator frequency; the raw register
    /// value is passed through.
    SetClockDivide(u8),
    /// Enable or disable the internal charge pump regulator. Must be configured before the
    /// display is turned on.
    SetChargePump(bool),
    /// Set the direction of display address auto-increment during image data writes. See enum
    /// for details.
    SetAddressingMode(AddressingMode),
    /// Set the pre-charge (discharge) period. The raw register value is passed through.
    SetPrechargePeriod(u8),
    /// Set the VCOMH deselect level. The raw register value is passed through.
    SetVcomhDeselectLevel(u8),
    /// Set the display polarity. See enum for details.
    SetDisplayMode(DisplayMode),
    /// Set whether pixels are driven from RAM or forced on. See enum for details.
    SetPixelSource(PixelSource),
    /// Turn the display drive on or off.
    SetDisplayOn(bool),
    /// Stop any active scrolling set up by a prior scroll command.
    DeactivateScroll,
}

macro_rules! ok_frame {
    ($buf:ident, [$($byte:expr),*]) => {{
        let mut len = 0;
        $(
            $buf[len] = $byte;
            len += 1;
        )*
        Ok(&$buf[..len])
    }};
}

impl Command {
    /// Transmit the command encoded by `self` to the display via interface `iface`. Each command
    /// occupies exactly one command frame, except `SetColumnAddress` which occupies two.
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        let mut arg_buf = [0u8; 2];
        let frame = match self {
            // The split column register is the odd one out: two frames, and the bias applied.
            Command::SetColumnAddress(column) => {
                if column > COLUMN_MAX {
                    return Err(Error::OutOfBounds);
                }
                let biased = column + COLUMN_BIAS;
                iface
                    .send_commands(&[0x00 | (biased & 0x0F)])
                    .map_err(|_| Error::Interface)?;
                return iface
                    .send_commands(&[0x10 | ((biased >> 4) & 0x0F)])
                    .map_err(|_| Error::Interface);
            }
            Command::SetPageAddress(page) => match page {
                0..=PAGE_MAX => ok_frame!(arg_buf, [0xB0 + page]),
                _ => Err(Error::OutOfBounds),
            },
            Command::SetContrast(contrast) => ok_frame!(arg_buf, [0x81, contrast]),
            Command::SetMultiplexRatio(ratio) => match ratio {
                1..=64 => ok_frame!(arg_buf, [0xA8, ratio - 1]),
                _ => Err(Error::OutOfBounds),
            },
            Command::SetDisplayOffset(line) => match line {
                0..=63 => ok_frame!(arg_buf, [0xD3, line]),
                _ => Err(Error::OutOfBounds),
            },
            Command::SetStartLine(line) => match line {
                0..=63 => ok_frame!(arg_buf, [0x40 | line]),
                _ => Err(Error::OutOfBounds),
            },
            Command::SetSegmentRemap(remap) => ok_frame!(
                arg_buf,
                [match remap {
                    SegmentRemap::Forward => 0xA0,
                    SegmentRemap::Reverse => 0xA1,
                }]
            ),
            Command::SetComScanDirection(direction) => ok_frame!(
                arg_buf,
                [match direction {
                    ComScanDirection::RowZeroFirst => 0xC0,
                    ComScanDirection::RowZeroLast => 0xC8,
                }]
            ),
            Command::SetComPinsConfig(config) => ok_frame!(
                arg_buf,
                [
                    0xDA,
                    match config {
                        ComPinsConfig::Sequential => 0x02,
                        ComPinsConfig::Alternative => 0x12,
                    }
                ]
            ),
            Command::SetClockDivide(value) => ok_frame!(arg_buf, [0xD5, value]),
            Command::SetChargePump(ena) => ok_frame!(
                arg_buf,
                [
                    0x8D,
                    match ena {
                        true => 0x14,
                        false => 0x10,
                    }
                ]
            ),
            Command::SetAddressingMode(mode) => ok_frame!(
                arg_buf,
                [
                    0x20,
                    match mode {
                        AddressingMode::Horizontal => 0x00,
                        AddressingMode::Vertical => 0x01,
                        AddressingMode::Page => 0x02,
                    }
                ]
            ),
            Command::SetPrechargePeriod(value) => ok_frame!(arg_buf, [0xD9, value]),
            Command::SetVcomhDeselectLevel(value) => ok_frame!(arg_buf, [0xDB, value]),
            Command::SetDisplayMode(mode) => ok_frame!(
                arg_buf,
                [match mode {
                    DisplayMode::Normal => 0xA6,
                    DisplayMode::Inverse => 0xA7,
                }]
            ),
            Command::SetPixelSource(source) => ok_frame!(
                arg_buf,
                [match source {
                    PixelSource::RamContent => 0xA4,
                    PixelSource::AllOn => 0xA5,
                }]
            ),
            Command::SetDisplayOn(ena) => ok_frame!(
                arg_buf,
                [match ena {
                    true => 0xAF,
                    false => 0xAE,
                }]
            ),
            Command::DeactivateScroll => ok_frame!(arg_buf, [0x2E]),
        }?;
        iface.send_commands(frame).map_err(|_| Error::Interface)
    }
}
