//! Pixel and line drawing on top of the page/column addressing model.
//!
//! CAREFUL: the controller has no partial-byte write, so setting one pixel strobes the whole
//! 8-pixel column byte at its page with only that pixel's bit set. Two pixels written in
//! sequence into the same (page, column) cell do not accumulate; the second write erases the
//! first. Callers that need composition must merge bits themselves and use
//! `Display::write_data`.

use embedded_hal::blocking::delay::DelayMs;

use super::Display;
use crate::command::consts::*;
use crate::interface;
use crate::Error;

impl<DI, D> Display<DI, D>
where
    DI: interface::DisplayInterface,
    D: DelayMs<u8>,
{
    /// Light the single pixel at `(x, y)`, overwriting the 7 other pixels that share its column
    /// byte. Coordinates outside the displayable area are rejected without emitting anything.
    pub fn set_pixel(&mut self, x: u8, y: u8) -> Result<(), Error> {
        if x >= PIXEL_WIDTH || y >= PIXEL_HEIGHT {
            return Err(Error::OutOfBounds);
        }
        self.plot(x, y)
    }

    /// Draw a straight line from `(x0, y0)` to `(x1, y1)` inclusive, one pixel write per step
    /// using the integer midpoint (Bresenham) algorithm. Inherits the whole-byte overwrite
    /// behavior of `set_pixel`, so a line crossing a previously written column byte replaces it.
    /// Any endpoint outside the displayable area rejects the whole line before any pixel is
    /// written.
    pub fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), Error> {
        if x0 >= PIXEL_WIDTH || x1 >= PIXEL_WIDTH || y0 >= PIXEL_HEIGHT || y1 >= PIXEL_HEIGHT {
            return Err(Error::OutOfBounds);
        }

        let mut x = i16::from(x0);
        let mut y = i16::from(y0);
        let x1 = i16::from(x1);
        let y1 = i16::from(y1);
        let dx = (x1 - x).abs();
        let dy = (y1 - y).abs();
        let step_x = if x < x1 { 1 } else { -1 };
        let step_y = if y < y1 { 1 } else { -1 };
        let mut error = dx - dy;

        // Each iteration advances at least one axis toward the endpoint, so this terminates
        // exactly when (x, y) reaches (x1, y1).
        loop {
            self.plot(x as u8, y as u8)?;
            if x == x1 && y == y1 {
                return Ok(());
            }
            let e2 = 2 * error;
            if e2 > -dy {
                error -= dy;
                x += step_x;
            }
            if e2 < dx {
                error += dx;
                y += step_y;
            }
        }
    }

    /// Position the cursor at the pixel's (page, column) cell and strobe its bit mask as the
    /// full column byte. Bounds are the caller's responsibility.
    fn plot(&mut self, x: u8, y: u8) -> Result<(), Error> {
        let page = y / 8;
        let mask = 1 << (y % 8);
        self.set_cursor(page, x)?;
        self.write_data(&[mask])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Cursor;
    use crate::interface::test_spy::{NoDelay, Sent, TestSpyInterface};

    fn new_display(di: &TestSpyInterface) -> Display<TestSpyInterface, NoDelay> {
        Display::new(di.split(), NoDelay)
    }

    /// Decode the spy recording as a sequence of single-pixel writes: (page, biased column
    /// reassembled, mask).
    fn pixel_writes(sent: &[Sent]) -> Vec<(u8, u8, u8)> {
        assert_eq!(sent.len() % 4, 0);
        sent.chunks(4)
            .map(|chunk| match chunk {
                [Sent::Cmd(page), Sent::Cmd(lo), Sent::Cmd(hi), Sent::Data(mask)] => (
                    page[0] - 0xB0,
                    (((hi[0] & 0x0F) << 4) | (lo[0] & 0x0F)) - COLUMN_BIAS,
                    mask[0],
                ),
                _ => panic!("unexpected frame shape: {:?}", chunk),
            })
            .collect()
    }

    #[test]
    fn set_pixel_addresses_page_and_masks_bit() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.set_pixel(10, 19).unwrap();
        // y = 19: page 2, bit 3.
        di.check_multi(frames!(cmd[0xB2], cmd[0x0C], cmd[0x10], data[0b0000_1000]));
        assert_eq!(disp.position(), Cursor { page: 2, column: 10 });
    }

    #[test]
    fn set_pixel_overwrites_shared_column_byte() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        // Two pixels in the same (page, column) cell: the second write carries only its own
        // mask, erasing the first on the device.
        disp.set_pixel(5, 16).unwrap();
        disp.set_pixel(5, 23).unwrap();
        let writes = pixel_writes(&di.sent());
        assert_eq!(writes, vec![(2, 5, 0x01), (2, 5, 0x80)]);
    }

    #[test]
    fn set_pixel_rejects_out_of_bounds() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        assert_eq!(disp.set_pixel(132, 0), Err(Error::OutOfBounds));
        assert_eq!(disp.set_pixel(0, 64), Err(Error::OutOfBounds));
        assert_eq!(disp.set_pixel(255, 255), Err(Error::OutOfBounds));
        assert_eq!(di.frame_count(), 0);
    }

    #[test]
    fn draw_line_degenerate_point() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.draw_line(0, 0, 0, 0).unwrap();
        let writes = pixel_writes(&di.sent());
        assert_eq!(writes, vec![(0, 0, 0x01)]);
    }

    #[test]
    fn draw_line_horizontal() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.draw_line(0, 0, 5, 0).unwrap();
        let writes = pixel_writes(&di.sent());
        let expect: Vec<_> = (0..=5).map(|x| (0, x, 0x01)).collect();
        assert_eq!(writes, expect);
    }

    #[test]
    fn draw_line_vertical_crosses_pages() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.draw_line(66, 4, 66, 11).unwrap();
        let writes = pixel_writes(&di.sent());
        let expect: Vec<_> = (4..=11u8)
            .map(|y| (y / 8, 66, 1 << (y % 8)))
            .collect();
        assert_eq!(writes, expect);
    }

    #[test]
    fn draw_line_diagonal_advances_both_axes() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.draw_line(0, 0, 5, 5).unwrap();
        let writes = pixel_writes(&di.sent());
        let expect: Vec<_> = (0..=5u8).map(|i| (i / 8, i, 1 << (i % 8))).collect();
        assert_eq!(writes, expect);
    }

    #[test]
    fn draw_line_endpoint_ordering_is_symmetric_in_extent() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        disp.draw_line(10, 20, 3, 8).unwrap();
        let writes = pixel_writes(&di.sent());
        assert_eq!(writes.first().copied(), Some((2, 10, 1 << 4)));
        assert_eq!(writes.last().copied(), Some((1, 3, 1 << 0)));
        // Steeper than 45 degrees: one write per row.
        assert_eq!(writes.len(), 13);
    }

    #[test]
    fn draw_line_rejects_any_endpoint_out_of_bounds() {
        let di = TestSpyInterface::new();
        let mut disp = new_display(&di);
        assert_eq!(disp.draw_line(0, 0, 132, 10), Err(Error::OutOfBounds));
        assert_eq!(disp.draw_line(132, 10, 0, 0), Err(Error::OutOfBounds));
        assert_eq!(disp.draw_line(0, 64, 5, 5), Err(Error::OutOfBounds));
        assert_eq!(disp.draw_line(5, 5, 0, 64), Err(Error::OutOfBounds));
        assert_eq!(di.frame_count(), 0);
    }
}
