//! A device abstraction for a multi-digit 7-segment display behind a shift-register chain.
//!
//! See [`ShiftDisplay`] for usage.

use core::convert::Infallible;

use embassy_futures::select::{Either, select};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::OutputPin;

use crate::config::{AUTOREFRESH_DELAY, BLINK_OFF_DELAY, BLINK_ON_DELAY};
use crate::frame::Frame;
use crate::shift_register::ShiftRegister;
use crate::Result;
#[cfg(feature = "display-trace")]
use defmt::info;

/// Blinking behavior for the display.
///
/// Blinking toggles OE, so the latched patterns are not re-sent on every blink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkState {
    #[default]
    Solid,
    BlinkingAndOn,
    BlinkingButOff,
}

impl BlinkState {
    /// The state after the current blink phase runs out.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Solid => Self::Solid,
            Self::BlinkingAndOn => Self::BlinkingButOff,
            Self::BlinkingButOff => Self::BlinkingAndOn,
        }
    }

    /// How long the current phase lasts, or `None` if it lasts until the next command.
    #[must_use]
    pub const fn delay(self) -> Option<Duration> {
        match self {
            Self::Solid => None,
            Self::BlinkingAndOn => Some(BLINK_ON_DELAY),
            Self::BlinkingButOff => Some(BLINK_OFF_DELAY),
        }
    }

    /// Whether the digits are lit during this phase.
    #[must_use]
    pub const fn is_lit(self) -> bool {
        !matches!(self, Self::BlinkingButOff)
    }
}

/// Static for the [`ShiftDisplay`] device.
pub struct ShiftDisplayStatic<const N: usize>(Signal<CriticalSectionRawMutex, (BlinkState, Frame<N>)>);

impl<const N: usize> ShiftDisplayStatic<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self(Signal::new())
    }

    fn signal(&self, command: (BlinkState, Frame<N>)) {
        self.0.signal(command);
    }

    async fn wait(&self) -> (BlinkState, Frame<N>) {
        self.0.wait().await
    }

    /// Takes the pending command, if any, without waiting.
    pub fn try_take(&self) -> Option<(BlinkState, Frame<N>)> {
        self.0.try_take()
    }
}

impl<const N: usize> Default for ShiftDisplayStatic<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// A device abstraction for an `N`-digit 7-segment display driven through shift registers.
///
/// The handle only queues commands. [`device_loop`] owns the [`ShiftRegister`] and does the
/// shifting. Only the latest command is kept; a newer one replaces an unread older one.
///
/// # Example
///
/// ```
/// use shiftseg::{BlinkState, ShiftDisplay, ShiftDisplayStatic};
///
/// static DISPLAY_STATIC: ShiftDisplayStatic<8> = ShiftDisplay::new_static();
/// let display = ShiftDisplay::new(&DISPLAY_STATIC);
/// display.write_text(BlinkState::Solid, "rUSt 8.8.")?;
/// # Ok::<(), shiftseg::Error>(())
/// ```
pub struct ShiftDisplay<'a, const N: usize>(&'a ShiftDisplayStatic<N>);

impl<'a, const N: usize> ShiftDisplay<'a, N> {
    /// Creates static channel resources for the display.
    #[must_use]
    pub const fn new_static() -> ShiftDisplayStatic<N> {
        ShiftDisplayStatic::new()
    }

    /// Creates a handle. Run [`device_loop`] with the same static to drive the hardware.
    #[must_use]
    pub const fn new(display_static: &'a ShiftDisplayStatic<N>) -> Self {
        Self(display_static)
    }

    /// Sends a ready-made frame to the display.
    pub fn write_frame(&self, blink_state: BlinkState, frame: Frame<N>) {
        #[cfg(feature = "display-trace")]
        info!("blink_state: {:?}, frame: {:?}", blink_state, frame);
        self.0.signal((blink_state, frame));
    }

    /// Sends text to the display with optional blinking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TextTooLong`](crate::Error::TextTooLong) if the text does not fit.
    /// Nothing is sent in that case.
    pub fn write_text(&self, blink_state: BlinkState, text: &str) -> Result<()> {
        self.write_frame(blink_state, Frame::from_text(text)?);
        Ok(())
    }

    /// Sends a right-aligned number to the display with blank padding.
    pub fn write_number(&self, blink_state: BlinkState, number: u32) {
        self.write_frame(blink_state, Frame::from_number(number, 0));
    }
}

/// Drives the shift register from the commands sent through `display_static`.
///
/// Shows a blank display until the first command. Re-sends the current frame every
/// [`AUTOREFRESH_DELAY`], blinking or not, and toggles OE while blinking. Returns only
/// if a pin fails.
///
/// # Errors
///
/// Returns [`Error::CannotSetOutputState`](crate::Error::CannotSetOutputState) if a pin
/// cannot be driven.
#[expect(
    clippy::arithmetic_side_effects,
    reason = "Instant plus a short delay stays far below u64 ticks"
)]
pub async fn device_loop<Ser, Srclk, Rclk, Oe, Srclr, const N: usize>(
    mut shift_register: ShiftRegister<Ser, Srclk, Rclk, Oe, Srclr>,
    display_static: &ShiftDisplayStatic<N>,
) -> Result<Infallible>
where
    Ser: OutputPin,
    Srclk: OutputPin,
    Rclk: OutputPin,
    Oe: OutputPin,
    Srclr: OutputPin,
{
    shift_register.clear::<N>()?;
    shift_register.enable_output()?;

    let mut blink_state = BlinkState::default();
    let mut frame = Frame::<N>::blank();
    loop {
        #[cfg(feature = "display-trace")]
        info!("frame: {:?}, blink_state: {:?}", frame, blink_state);
        shift_register.write_frame(&frame)?;
        let start = Instant::now();
        let mut refresh_at = start + AUTOREFRESH_DELAY;
        let mut blink_at = blink_state.delay().map(|delay| start + delay);

        // Wait out blink phases and refreshes until a new command arrives.
        loop {
            if blink_state.is_lit() {
                shift_register.enable_output()?;
            } else {
                shift_register.disable_output()?;
            }
            let deadline = blink_at.map_or(refresh_at, |at| at.min(refresh_at));
            match select(display_static.wait(), Timer::at(deadline)).await {
                Either::First(command) => {
                    (blink_state, frame) = command;
                    break;
                }
                Either::Second(()) => {
                    let now = Instant::now();
                    if now >= refresh_at {
                        shift_register.write_frame(&frame)?;
                        refresh_at = now + AUTOREFRESH_DELAY;
                    }
                    if blink_at.is_some_and(|at| now >= at) {
                        blink_state = blink_state.next();
                        blink_at = blink_state.delay().map(|delay| now + delay);
                    }
                }
            }
        }
    }
}
