//! Seven-segment text on a multi-digit display driven through a shift-register chain.
//!
//! [`SYMBOL_TABLE`] maps printable ASCII to segment patterns, [`Frame`] renders text and
//! numbers for every digit, [`ShiftRegister`] shifts frames out over five GPIO lines, and
//! [`ShiftDisplay`] runs the chain in the background with refresh and blinking.
#![no_std]

pub mod config;
mod display;
mod error;
mod frame;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod rp;
pub mod serial_text;
mod shift_register;
pub mod symbol_table;

// Re-export commonly used items
pub use display::{BlinkState, ShiftDisplay, ShiftDisplayStatic, device_loop};
pub use error::{Error, Result};
pub use frame::Frame;
pub use serial_text::{LineBuffer, read_line};
pub use shift_register::{NoClearPin, ShiftRegister};
pub use symbol_table::{SYMBOL_TABLE, Segments, symbol, symbol_for_char, symbol_or_blank, try_symbol};
