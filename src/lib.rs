//! Driver library for the Sino Wealth SH1106 dot matrix OLED display controller.
//!
//! The SH1106 drives a 132x64 monochrome panel whose display RAM is arranged in 8 "pages" of 8
//! vertical pixels each; every write strobes a whole column byte within the current page. This
//! crate bridges that page/column addressing model to logical operations: cursor positioning,
//! bitmap-font text with line wrapping, and pixel/line drawing.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod command;
pub mod config;
pub mod display;
pub mod font;
pub mod interface;

/// The ways an operation on the display can be refused.
///
/// The controller itself gives no feedback, so all of these are detected by the driver before
/// anything is put on the bus, except `Interface` which reports a failed bus transfer. An
/// operation that returns an error other than `Interface` has emitted no frames for the rejected
/// element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A page, column, or pixel coordinate was outside the addressable area.
    OutOfBounds,
    /// A string did not fit within a single display line.
    TooLong,
    /// A glyph code outside the domain of the font table.
    InvalidGlyph,
    /// The bus interface reported a failed transfer.
    Interface,
}

// Re-exports for primary API.
pub use crate::command::{consts, Command};
pub use crate::config::Config;
pub use crate::display::Display;
pub use crate::interface::i2c::I2cInterface;
