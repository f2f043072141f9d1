//! Driver for a daisy-chained 8-bit serial-in, parallel-out shift register chain
//! (74HC595 style), one register per digit.
//!
//! See [`ShiftRegister`] for usage.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

use crate::frame::Frame;
use crate::symbol_table::Segments;
use crate::{Error, Result};

/// Stand-in for an SRCLR pin that is not wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClearPin;

impl ErrorType for NoClearPin {
    type Error = Infallible;
}

impl OutputPin for NoClearPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A chain of shift registers driven over five control lines.
///
/// Bits go out most significant first, so with the `ABCDEFGP` layout segment A is
/// shifted first and ends up on the register's last output (QH) after eight clocks,
/// and the decimal point ends up on QA.
///
/// # Example
///
/// ```
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::{ErrorType, OutputPin};
/// # struct Pin;
/// # impl ErrorType for Pin { type Error = Infallible; }
/// # impl OutputPin for Pin {
/// #     fn set_low(&mut self) -> Result<(), Infallible> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Infallible> { Ok(()) }
/// # }
/// use shiftseg::{Frame, ShiftRegister};
///
/// let mut shift_register = ShiftRegister::new(Pin, Pin, Pin, Pin);
/// shift_register.write_frame(&Frame::<8>::from_text("HELLO")?)?;
/// shift_register.enable_output()?;
/// # Ok::<(), shiftseg::Error>(())
/// ```
pub struct ShiftRegister<Ser, Srclk, Rclk, Oe, Srclr = NoClearPin> {
    ser: Ser,
    srclk: Srclk,
    rclk: Rclk,
    oe: Oe,
    srclr: Option<Srclr>,
}

impl<Ser, Srclk, Rclk, Oe> ShiftRegister<Ser, Srclk, Rclk, Oe, NoClearPin>
where
    Ser: OutputPin,
    Srclk: OutputPin,
    Rclk: OutputPin,
    Oe: OutputPin,
{
    /// Creates a driver for a chain without an SRCLR line.
    pub const fn new(ser: Ser, srclk: Srclk, rclk: Rclk, oe: Oe) -> Self {
        Self {
            ser,
            srclk,
            rclk,
            oe,
            srclr: None,
        }
    }
}

impl<Ser, Srclk, Rclk, Oe, Srclr> ShiftRegister<Ser, Srclk, Rclk, Oe, Srclr>
where
    Ser: OutputPin,
    Srclk: OutputPin,
    Rclk: OutputPin,
    Oe: OutputPin,
    Srclr: OutputPin,
{
    /// Creates a driver for a chain whose SRCLR line is wired.
    pub const fn with_clear_pin(ser: Ser, srclk: Srclk, rclk: Rclk, oe: Oe, srclr: Srclr) -> Self {
        Self::from_parts(ser, srclk, rclk, oe, Some(srclr))
    }

    /// Creates a driver whose SRCLR line may or may not be wired.
    pub const fn from_parts(
        ser: Ser,
        srclk: Srclk,
        rclk: Rclk,
        oe: Oe,
        srclr: Option<Srclr>,
    ) -> Self {
        Self {
            ser,
            srclk,
            rclk,
            oe,
            srclr,
        }
    }

    /// Reports whether [`clear`](Self::clear) can use the SRCLR line.
    pub const fn has_clear_pin(&self) -> bool {
        self.srclr.is_some()
    }

    /// Shifts one byte into the chain, most significant bit first. Does not latch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin cannot be driven.
    #[expect(clippy::shadow_reuse, reason = "Consuming the bits one at a time")]
    pub fn shift_byte(&mut self, bits: u8) -> Result<()> {
        let mut bits = bits;
        for _ in 0..u8::BITS {
            set(&mut self.ser, bits & 0b_1000_0000 != 0)?;
            pulse(&mut self.srclk)?;
            bits <<= 1;
        }
        Ok(())
    }

    /// Copies the shifted bits to the register outputs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if RCLK cannot be driven.
    pub fn latch(&mut self) -> Result<()> {
        pulse(&mut self.rclk)
    }

    /// Shifts a whole frame out and latches it.
    ///
    /// The last digit goes first, so digit 0 ends up in the register nearest the
    /// microcontroller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin cannot be driven.
    pub fn write_frame<const N: usize>(&mut self, frame: &Frame<N>) -> Result<()> {
        for &bits in frame.iter().rev() {
            self.shift_byte(bits)?;
        }
        self.latch()
    }

    /// Blanks `N` digits and latches.
    ///
    /// Pulses SRCLR when it is wired; otherwise shifts blank bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin cannot be driven.
    pub fn clear<const N: usize>(&mut self) -> Result<()> {
        if let Some(srclr) = self.srclr.as_mut() {
            // SRCLR is active low.
            set(srclr, false)?;
            set(srclr, true)?;
            return self.latch();
        }
        for _ in 0..N {
            self.shift_byte(Segments::BLANK)?;
        }
        self.latch()
    }

    /// Drives OE low so the latched patterns light up.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if OE cannot be driven.
    pub fn enable_output(&mut self) -> Result<()> {
        set(&mut self.oe, false)
    }

    /// Drives OE high, darkening every digit without losing the latched patterns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if OE cannot be driven.
    pub fn disable_output(&mut self) -> Result<()> {
        set(&mut self.oe, true)
    }

    /// Gives the pins back.
    pub fn release(self) -> (Ser, Srclk, Rclk, Oe, Option<Srclr>) {
        (self.ser, self.srclk, self.rclk, self.oe, self.srclr)
    }
}

#[inline]
fn set<P: OutputPin>(pin: &mut P, high: bool) -> Result<()> {
    let state = if high { pin.set_high() } else { pin.set_low() };
    state.map_err(|_| Error::CannotSetOutputState)
}

#[inline]
fn pulse<P: OutputPin>(pin: &mut P) -> Result<()> {
    set(pin, true)?;
    set(pin, false)
}
