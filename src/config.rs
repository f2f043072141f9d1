//! Compile-time settings for the shift-register display.
//!
//! Pin numbers are GPIO numbers on the board. The RP wiring in [`crate::rp`] (features
//! `pico1`/`pico2`) uses the same numbers.

use embassy_time::Duration;

/// The number of symbols (digits) on the display.
/// Each digit has its own 8-bit shift register in the chain.
pub const DISPLAY_SYMBOL_COUNT: usize = 8;

/// The baud rate of the serial interface that feeds text to the display.
pub const SERIAL_BAUDRATE: u32 = 9600;

/// The delay between automatic refreshes of the display.
/// The current frame is shifted out again after this long without a new command.
pub const AUTOREFRESH_DELAY: Duration = Duration::from_millis(1000);

/// Whether the SRCLR (shift register clear) pin is wired.
/// Without it, clearing shifts out blank bytes instead.
pub const SRCLR_AVAILABLE: bool = false;

/// Output enable, active low.
pub const PIN_OE: u8 = 3;
/// Storage register clock (latch).
pub const PIN_RCLK: u8 = 4;
/// Shift register clear, active low. Only used when [`SRCLR_AVAILABLE`] is set.
pub const PIN_SRCLR: u8 = 5;
/// Shift register clock.
pub const PIN_SRCLK: u8 = 6;
/// Serial data into the first shift register.
pub const PIN_SER: u8 = 7;

/// Delay for the "on" state during blinking.
pub const BLINK_ON_DELAY: Duration = Duration::from_millis(150);

/// Delay for the "off" state during blinking.
pub const BLINK_OFF_DELAY: Duration = Duration::from_millis(50);

/// Capacity, in bytes, of one line of serial text.
pub const SERIAL_LINE_CAPACITY: usize = 64;

/// The pins that drive the shift-register chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShiftRegisterPins {
    pub oe: u8,
    pub rclk: u8,
    pub srclr: Option<u8>,
    pub srclk: u8,
    pub ser: u8,
}

/// The configured pin assignment.
pub const PINS: ShiftRegisterPins = ShiftRegisterPins {
    oe: PIN_OE,
    rclk: PIN_RCLK,
    srclr: if SRCLR_AVAILABLE { Some(PIN_SRCLR) } else { None },
    srclk: PIN_SRCLK,
    ser: PIN_SER,
};

impl ShiftRegisterPins {
    /// Reports whether every signal has a pin of its own.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "Both indexes stay below `count`, which is at most the array length"
    )]
    pub const fn is_distinct(&self) -> bool {
        let mut pins = [self.oe, self.rclk, self.srclk, self.ser, 0];
        let count = if let Some(srclr) = self.srclr {
            pins[4] = srclr;
            5
        } else {
            4
        };
        let mut i = 0;
        while i < count {
            let mut j = i + 1;
            while j < count {
                if pins[i] == pins[j] {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }
}

const _: () = assert!(PINS.is_distinct(), "shift register pins must not overlap");
