//! Shows each line of text received on UART0 (GPIO1, 9600 baud) on the 8-digit display.
//!
//! Runs on a Raspberry Pi Pico. Text that does not fit blinks "too LonG" instead.
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "Single-threaded")]

use defmt::{info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{self, BufferedInterruptHandler, BufferedUartRx};
use panic_probe as _;
use shiftseg::config::{PINS, SERIAL_BAUDRATE, SERIAL_LINE_CAPACITY};
use shiftseg::rp::{RpDisplay, RpDisplayStatic, RpShiftRegisterPins};
use shiftseg::{BlinkState, Error, LineBuffer, Result, read_line};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    let Err(err) = inner_main(spawner).await;
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<core::convert::Infallible> {
    let p = embassy_rp::init(embassy_rp::config::Config::default());
    info!("shift register pins: {:?}", PINS);

    static DISPLAY_STATIC: RpDisplayStatic = RpDisplay::new_static();
    let pins = RpShiftRegisterPins {
        oe: p.PIN_3,
        rclk: p.PIN_4,
        srclr: p.PIN_5,
        srclk: p.PIN_6,
        ser: p.PIN_7,
    };
    let rp_display = RpDisplay::new(&DISPLAY_STATIC, pins, spawner)?;
    let display = rp_display.display();
    display.write_text(BlinkState::Solid, "rEAdY")?;

    static RX_BUFFER: StaticCell<[u8; 64]> = StaticCell::new();
    let rx_buffer = &mut RX_BUFFER.init([0; 64])[..];
    let mut uart_config = uart::Config::default();
    uart_config.baudrate = SERIAL_BAUDRATE;
    let mut rx = BufferedUartRx::new(p.UART0, Irqs, p.PIN_1, rx_buffer, uart_config);

    let mut line_buffer = LineBuffer::<SERIAL_LINE_CAPACITY>::new();
    loop {
        match read_line(&mut rx, &mut line_buffer).await {
            Ok(line) => {
                info!("line: {}", line);
                if let Err(err) = display.write_text(BlinkState::Solid, line) {
                    warn!("{}", err);
                    display.write_text(BlinkState::BlinkingAndOn, "too LonG")?;
                }
            }
            Err(err @ Error::LineTooLong) => {
                warn!("{}", err);
                display.write_text(BlinkState::BlinkingAndOn, "too LonG")?;
            }
            Err(err) => return Err(err),
        }
    }
}
