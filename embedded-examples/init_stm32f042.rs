//! Full example code for setting up an SH1106 display. This runs on an STM32F042K6, using a
//! generic 1.3" 132x64 OLED module connected to I2C1 on PB6 (SCL) and PB7 (SDA), display address
//! 0x3C.

#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate cortex_m;
extern crate cortex_m_rt;
extern crate panic_halt;
extern crate sh1106_pages;
extern crate stm32f0xx_hal as hal;

use cortex_m_rt::entry;
use hal::delay::Delay;
use hal::i2c::I2c;
use hal::prelude::*;
use sh1106_pages as oled;

#[entry]
fn main() -> ! {
    // Get peripherals and set up clocks.
    let cp = cortex_m::Peripherals::take().unwrap();
    let mut dp = hal::pac::Peripherals::take().unwrap();

    let mut rcc = dp.RCC.configure().sysclk(48.mhz()).freeze(&mut dp.FLASH);
    let delay = Delay::new(cp.SYST, &rcc);

    // Get GPIO B where the display is connected, and put PB6/PB7 into their I2C1 alternate
    // function.
    let gpiob = dp.GPIOB.split(&mut rcc);
    let (scl, sda) = cortex_m::interrupt::free(|cs| {
        (
            gpiob.pb6.into_alternate_af1(cs),
            gpiob.pb7.into_alternate_af1(cs),
        )
    });

    let disp_i2c = I2c::i2c1(dp.I2C1, (scl, sda), 400.khz(), &mut rcc);

    // Create the I2cInterface and Display. The delay provider paces the glyph column writes.
    let mut disp = oled::Display::new(oled::I2cInterface::new(disp_i2c, 0x3C), delay);

    // Initialize with the defaults for a 64-row charge-pump module, zero the display RAM, and
    // only then turn the drive on.
    disp.init(oled::Config::new()).unwrap();
    disp.clear().unwrap();
    disp.on().unwrap();

    // Lay out a greeting with word wrap from the bottom page, and underline it.
    disp.set_cursor(1, 0).unwrap();
    disp.display_text("hello from the SH1106 page state machine").unwrap();
    disp.draw_line(0, 16, 131, 16).unwrap();

    loop {
        cortex_m::asm::wfi();
    }
}
