//! The bus interface to the display.
//!
//! Every interaction with the SH1106 is one *frame*: a control byte saying whether the payload is
//! configuration commands or display RAM data, followed by the payload, sent as a single atomic
//! bus write.

pub trait DisplayInterface {
    /// Send one command frame containing the given command bytes.
    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), ()>;
    /// Send one data frame containing the given display RAM bytes.
    fn send_data(&mut self, buf: &[u8]) -> Result<(), ()>;
}

pub mod i2c {
    //! The I2C interface supports the SH1106's protocol where each transmission begins with a
    //! control byte: 0x00 introduces command bytes and 0x40 introduces display RAM data. The
    //! SH1106 also supports SPI wiring, but the control byte framing only exists on I2C; an SPI
    //! interface would instead drive an A0 GPIO.

    use embedded_hal as hal;
    use hal::blocking::i2c::Write;

    use super::DisplayInterface;
    use crate::command::consts::NUM_COLUMNS;

    const CONTROL_COMMAND: u8 = 0x00;
    const CONTROL_DATA: u8 = 0x40;

    /// The largest frame the driver ever sends is one full page of data, plus the control byte.
    const FRAME_BUF_LEN: usize = NUM_COLUMNS as usize + 1;

    pub struct I2cInterface<I2C> {
        /// The I2C master device connected to the SH1106.
        i2c: I2C,
        /// The display's 7-bit I2C address, usually 0x3C or 0x3D depending on the SA0 strap.
        address: u8,
    }

    impl<I2C> I2cInterface<I2C>
    where
        I2C: Write,
    {
        /// Create a new I2C interface to communicate with the display driver. `i2c` is the I2C
        /// master device, and `address` is the display's 7-bit device address. Any timeout or
        /// bounded-time guarantee on transfers is the property of the supplied `i2c`
        /// implementation.
        pub fn new(i2c: I2C, address: u8) -> Self {
            Self { i2c, address }
        }

        fn send(&mut self, control: u8, payload: &[u8]) -> Result<(), ()> {
            if payload.len() >= FRAME_BUF_LEN {
                return Err(());
            }
            let mut buf = [0u8; FRAME_BUF_LEN];
            buf[0] = control;
            buf[1..1 + payload.len()].copy_from_slice(payload);
            self.i2c
                .write(self.address, &buf[..1 + payload.len()])
                .map_err(|_| ())
        }
    }

    impl<I2C> DisplayInterface for I2cInterface<I2C>
    where
        I2C: Write,
    {
        fn send_commands(&mut self, cmds: &[u8]) -> Result<(), ()> {
            self.send(CONTROL_COMMAND, cmds)
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), ()> {
            self.send(CONTROL_DATA, buf)
        }
    }
}

#[cfg(test)]
pub mod test_spy {
    //! An interface for use in unit tests to spy on whatever was sent to it.

    use super::DisplayInterface;
    use embedded_hal::blocking::delay::DelayMs;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    /// One recorded frame, preserving frame boundaries so tests can assert on exactly how many
    /// frames an operation emitted and what each contained.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Sent {
        Cmd(Vec<u8>),
        Data(Vec<u8>),
    }

    pub struct TestSpyInterface {
        sent: Rc<RefCell<Vec<Sent>>>,
    }

    impl TestSpyInterface {
        pub fn new() -> Self {
            TestSpyInterface {
                sent: Rc::new(RefCell::new(Vec::new())),
            }
        }

        /// Make a second handle on the same recording, so a test can keep one while the display
        /// under test consumes the other.
        pub fn split(&self) -> Self {
            TestSpyInterface {
                sent: self.sent.clone(),
            }
        }

        pub fn clear(&self) {
            self.sent.borrow_mut().clear()
        }

        pub fn sent(&self) -> Vec<Sent> {
            self.sent.borrow().clone()
        }

        pub fn frame_count(&self) -> usize {
            self.sent.borrow().len()
        }

        pub fn check_multi(&self, expect: &[Sent]) {
            assert_eq!(self.sent.borrow().as_slice(), expect);
        }
    }

    impl DisplayInterface for TestSpyInterface {
        fn send_commands(&mut self, cmds: &[u8]) -> Result<(), ()> {
            self.sent.borrow_mut().push(Sent::Cmd(cmds.to_vec()));
            Ok(())
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), ()> {
            self.sent.borrow_mut().push(Sent::Data(buf.to_vec()));
            Ok(())
        }
    }

    /// A delay provider that returns immediately, for tests that don't care about glyph settle
    /// timing.
    pub struct NoDelay;

    impl DelayMs<u8> for NoDelay {
        fn delay_ms(&mut self, _ms: u8) {}
    }
}
