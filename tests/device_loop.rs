//! Host-level tests for the display device loop, stepped by hand against a mock clock.
//!
//! The mock clock is global, so this file holds a single test.

mod common;

use core::pin::{Pin, pin};
use core::task::{Context, Poll, Waker};

use common::{Chain, without_clear};
use embassy_time::{Duration, MockDriver};
use shiftseg::config::{AUTOREFRESH_DELAY, BLINK_OFF_DELAY, BLINK_ON_DELAY};
use shiftseg::{BlinkState, Frame, Result, Segments, ShiftDisplay, ShiftDisplayStatic, device_loop};

fn poll_once<F: Future>(future: Pin<&mut F>) -> Poll<F::Output> {
    future.poll(&mut Context::from_waker(Waker::noop()))
}

fn advance_and_poll<F: Future>(future: Pin<&mut F>, duration: Duration) -> Poll<F::Output> {
    MockDriver::get().advance(duration);
    poll_once(future)
}

#[test]
fn device_loop_refreshes_blinks_and_follows_commands() -> Result<()> {
    let chain = Chain::<2>::new();
    let display_static = ShiftDisplayStatic::<2>::new();
    let display = ShiftDisplay::new(&display_static);
    let mut device = pin!(device_loop(without_clear(&chain), &display_static));

    // Cleared, then the blank frame, with the outputs on.
    assert!(poll_once(device.as_mut()).is_pending());
    {
        let chain = chain.borrow();
        assert_eq!(chain.latched, [Segments::BLANK; 2]);
        assert_eq!(chain.latches, 2);
        assert!(!chain.oe);
    }

    // A solid frame is re-sent once the refresh delay has passed.
    let almost = AUTOREFRESH_DELAY - Duration::from_millis(1);
    assert!(advance_and_poll(device.as_mut(), almost).is_pending());
    assert_eq!(chain.borrow().latches, 2);
    assert!(advance_and_poll(device.as_mut(), Duration::from_millis(1)).is_pending());
    assert_eq!(chain.borrow().latches, 3);

    display.write_text(BlinkState::Solid, "12")?;
    assert!(poll_once(device.as_mut()).is_pending());
    {
        let chain = chain.borrow();
        assert_eq!(chain.latched, *Frame::<2>::from_text("12")?.as_bytes());
        assert_eq!(chain.latches, 4);
        assert!(!chain.oe);
    }

    // Blinking toggles OE without re-sending the frame.
    let blinking = Frame::<2>::from_text("8.8.")?;
    display.write_frame(BlinkState::BlinkingAndOn, blinking);
    assert!(poll_once(device.as_mut()).is_pending());
    assert_eq!(chain.borrow().latched, *blinking.as_bytes());
    assert_eq!(chain.borrow().latches, 5);
    assert!(!chain.borrow().oe);

    assert!(advance_and_poll(device.as_mut(), BLINK_ON_DELAY).is_pending());
    assert!(chain.borrow().oe, "dark after the on phase");
    assert!(advance_and_poll(device.as_mut(), BLINK_OFF_DELAY).is_pending());
    assert!(!chain.borrow().oe, "lit after the off phase");
    assert_eq!(chain.borrow().latches, 5);

    // Refresh still happens while blinking: four more blink periods reach the refresh delay.
    for _ in 0..4 {
        assert!(advance_and_poll(device.as_mut(), BLINK_ON_DELAY).is_pending());
        assert!(chain.borrow().oe);
        assert_eq!(chain.borrow().latches, 5);
        assert!(advance_and_poll(device.as_mut(), BLINK_OFF_DELAY).is_pending());
        assert!(!chain.borrow().oe);
    }
    assert_eq!(chain.borrow().latches, 6);
    assert_eq!(chain.borrow().latched, *blinking.as_bytes());

    // A new command mid-wait replaces the frame and stops blinking.
    assert!(advance_and_poll(device.as_mut(), BLINK_ON_DELAY).is_pending());
    assert!(chain.borrow().oe);
    display.write_number(BlinkState::Solid, 7);
    assert!(poll_once(device.as_mut()).is_pending());
    {
        let chain = chain.borrow();
        assert_eq!(chain.latched, *Frame::<2>::from_number(7, Segments::BLANK).as_bytes());
        assert_eq!(chain.latches, 7);
        assert!(!chain.oe);
    }
    Ok(())
}
