//! RP2040/RP2350 wiring for the shift-register display.
//!
//! The GPIO numbers match [`crate::config`]: OE on GPIO3, RCLK on GPIO4, SRCLR on GPIO5,
//! SRCLK on GPIO6 and SER on GPIO7.

use embassy_executor::Spawner;
use embassy_rp::Peri;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{PIN_3, PIN_4, PIN_5, PIN_6, PIN_7};

use crate::Result;
use crate::config::{DISPLAY_SYMBOL_COUNT, SRCLR_AVAILABLE};
use crate::display::{ShiftDisplay, ShiftDisplayStatic, device_loop};
use crate::shift_register::ShiftRegister;

/// Shift register chain on RP GPIO outputs.
pub type RpShiftRegister = ShiftRegister<
    Output<'static>,
    Output<'static>,
    Output<'static>,
    Output<'static>,
    Output<'static>,
>;

/// Static for the [`RpDisplay`] device.
pub type RpDisplayStatic = ShiftDisplayStatic<DISPLAY_SYMBOL_COUNT>;

/// Pins for the shift-register chain.
pub struct RpShiftRegisterPins {
    pub oe: Peri<'static, PIN_3>,
    pub rclk: Peri<'static, PIN_4>,
    pub srclr: Peri<'static, PIN_5>,
    pub srclk: Peri<'static, PIN_6>,
    pub ser: Peri<'static, PIN_7>,
}

impl RpShiftRegisterPins {
    /// Configures the pins as outputs with the display dark (OE high).
    ///
    /// GPIO5 is only claimed when [`SRCLR_AVAILABLE`] is set.
    #[must_use]
    pub fn into_shift_register(self) -> RpShiftRegister {
        let srclr = SRCLR_AVAILABLE.then(|| Output::new(self.srclr, Level::High));
        ShiftRegister::from_parts(
            Output::new(self.ser, Level::Low),
            Output::new(self.srclk, Level::Low),
            Output::new(self.rclk, Level::Low),
            Output::new(self.oe, Level::High),
            srclr,
        )
    }
}

/// The display on RP hardware, with its background task.
pub struct RpDisplay(ShiftDisplay<'static, DISPLAY_SYMBOL_COUNT>);

impl RpDisplay {
    /// Creates static channel resources for the display.
    #[must_use]
    pub const fn new_static() -> RpDisplayStatic {
        ShiftDisplayStatic::new()
    }

    /// Creates the display device and spawns its background task.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be spawned.
    #[must_use = "Must be used to manage the spawned task"]
    pub fn new(
        display_static: &'static RpDisplayStatic,
        pins: RpShiftRegisterPins,
        spawner: Spawner,
    ) -> Result<Self> {
        let token = device_task(pins.into_shift_register(), display_static)?;
        spawner.spawn(token);
        Ok(Self(ShiftDisplay::new(display_static)))
    }

    /// The handle for sending text, numbers and frames.
    #[must_use]
    pub const fn display(&self) -> &ShiftDisplay<'static, DISPLAY_SYMBOL_COUNT> {
        &self.0
    }
}

#[embassy_executor::task]
async fn device_task(
    shift_register: RpShiftRegister,
    display_static: &'static RpDisplayStatic,
) -> ! {
    let Err(err) = device_loop(shift_register, display_static).await;
    panic!("{err}");
}
