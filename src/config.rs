//! The initialization-time register values for the display, with builder methods to override the
//! power-on defaults.

use crate::command::*;
use crate::interface;
use crate::Error;

/// A configuration for the display.
///
/// `Config::new` seeds every register with the value it should carry on a typical 132x64 module
/// (these match the POR values except where a module conventionally needs otherwise, e.g. the
/// charge pump). Builder methods override individual registers declaratively. The full sequence
/// is always transmitted at init, in the fixed order the controller expects.
pub struct Config {
    multiplex_ratio: u8,
    display_offset: u8,
    start_line: u8,
    segment_remap: SegmentRemap,
    com_scan_direction: ComScanDirection,
    com_pins: ComPinsConfig,
    contrast: u8,
    clock_divide: u8,
    charge_pump: bool,
    addressing_mode: AddressingMode,
    precharge_period: u8,
    vcomh_deselect_level: u8,
}

impl Config {
    /// Create a new configuration carrying the defaults for a 64-row module with the internal
    /// charge pump: all 64 COM lines multiplexed, no offset, start line 0, segments reversed,
    /// alternative COM pin wiring, mid-scale contrast, and horizontal address auto-increment.
    pub fn new() -> Self {
        Config {
            multiplex_ratio: 64,
            display_offset: 0,
            start_line: 0,
            segment_remap: SegmentRemap::Reverse,
            com_scan_direction: ComScanDirection::RowZeroFirst,
            com_pins: ComPinsConfig::Alternative,
            contrast: 0x7F,
            clock_divide: 0xA0,
            charge_pump: true,
            addressing_mode: AddressingMode::Horizontal,
            precharge_period: 0x22,
            vcomh_deselect_level: 0x20,
        }
    }

    /// Extend this `Config` to set the MUX ratio. See `Command::SetMultiplexRatio`.
    pub fn multiplex_ratio(self, ratio: u8) -> Self {
        Self {
            multiplex_ratio: ratio,
            ..self
        }
    }

    /// Extend this `Config` to set the COM line offset. See `Command::SetDisplayOffset`.
    pub fn display_offset(self, line: u8) -> Self {
        Self {
            display_offset: line,
            ..self
        }
    }

    /// Extend this `Config` to set the display start line. See `Command::SetStartLine`.
    pub fn start_line(self, line: u8) -> Self {
        Self {
            start_line: line,
            ..self
        }
    }

    /// Extend this `Config` to set segment remapping. See `Command::SetSegmentRemap`.
    pub fn segment_remap(self, remap: SegmentRemap) -> Self {
        Self {
            segment_remap: remap,
            ..self
        }
    }

    /// Extend this `Config` to set the COM scan direction. See `Command::SetComScanDirection`.
    pub fn com_scan_direction(self, direction: ComScanDirection) -> Self {
        Self {
            com_scan_direction: direction,
            ..self
        }
    }

    /// Extend this `Config` to set the COM pin wiring. See `Command::SetComPinsConfig`.
    pub fn com_pins(self, config: ComPinsConfig) -> Self {
        Self {
            com_pins: config,
            ..self
        }
    }

    /// Extend this `Config` to set the contrast. See `Command::SetContrast`.
    pub fn contrast(self, contrast: u8) -> Self {
        Self { contrast, ..self }
    }

    /// Extend this `Config` to set the raw clock divide register. See `Command::SetClockDivide`.
    pub fn clock_divide(self, value: u8) -> Self {
        Self {
            clock_divide: value,
            ..self
        }
    }

    /// Extend this `Config` to enable or disable the charge pump. See `Command::SetChargePump`.
    pub fn charge_pump(self, ena: bool) -> Self {
        Self {
            charge_pump: ena,
            ..self
        }
    }

    /// Extend this `Config` to set the address auto-increment mode. See
    /// `Command::SetAddressingMode`.
    pub fn addressing_mode(self, mode: AddressingMode) -> Self {
        Self {
            addressing_mode: mode,
            ..self
        }
    }

    /// Extend this `Config` to set the raw pre-charge period register. See
    /// `Command::SetPrechargePeriod`.
    pub fn precharge_period(self, value: u8) -> Self {
        Self {
            precharge_period: value,
            ..self
        }
    }

    /// Extend this `Config` to set the raw VCOMH deselect level register. See
    /// `Command::SetVcomhDeselectLevel`.
    pub fn vcomh_deselect_level(self, value: u8) -> Self {
        Self {
            vcomh_deselect_level: value,
            ..self
        }
    }

    /// Transmit commands to the display at `iface` necessary to put that display into the
    /// configuration encoded in `self`. The display drive is switched off first and left off;
    /// turning it on is a separate operation.
    pub(crate) fn send<DI>(&self, iface: &mut DI) -> Result<(), Error>
    where
        DI: interface::DisplayInterface,
    {
        Command::SetDisplayOn(false).send(iface)?;
        Command::SetMultiplexRatio(self.multiplex_ratio).send(iface)?;
        Command::SetDisplayOffset(self.display_offset).send(iface)?;
        Command::SetStartLine(self.start_line).send(iface)?;
        Command::SetSegmentRemap(self.segment_remap).send(iface)?;
        Command::SetComScanDirection(self.com_scan_direction).send(iface)?;
        Command::SetComPinsConfig(self.com_pins).send(iface)?;
        Command::SetContrast(self.contrast).send(iface)?;
        Command::SetClockDivide(self.clock_divide).send(iface)?;
        Command::SetChargePump(self.charge_pump).send(iface)?;
        Command::SetAddressingMode(self.addressing_mode).send(iface)?;
        Command::SetPrechargePeriod(self.precharge_period).send(iface)?;
        Command::SetVcomhDeselectLevel(self.vcomh_deselect_level).send(iface)?;
        Command::SetDisplayMode(DisplayMode::Normal).send(iface)?;
        Command::SetPixelSource(PixelSource::RamContent).send(iface)?;
        Command::DeactivateScroll.send(iface)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
