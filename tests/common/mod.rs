//! Simulated 74HC595 chain shared by the host-level tests.
#![allow(dead_code, reason = "Each test binary uses a different part of the simulator")]

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};
use shiftseg::{NoClearPin, ShiftRegister};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Ser,
    Srclk,
    Rclk,
    Oe,
    Srclr,
}

/// `N` registers; bit 7 of each byte is QH, bit 0 is QA. Register 0 is fed by SER.
pub struct Chain<const N: usize> {
    pub ser: bool,
    pub srclk: bool,
    pub rclk: bool,
    pub oe: bool,
    pub srclr: bool,
    pub shift: [u8; N],
    pub latched: [u8; N],
    pub srclk_pulses: usize,
    pub latches: usize,
    pub clears: usize,
}

impl<const N: usize> Chain<N> {
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            ser: false,
            srclk: false,
            rclk: false,
            oe: true,
            srclr: true,
            shift: [0; N],
            latched: [0; N],
            srclk_pulses: 0,
            latches: 0,
            clears: 0,
        }))
    }

    fn drive(&mut self, line: Line, high: bool) {
        match line {
            Line::Ser => self.ser = high,
            Line::Srclk => {
                if high && !self.srclk {
                    self.shift_in();
                }
                self.srclk = high;
            }
            Line::Rclk => {
                if high && !self.rclk {
                    self.latched = self.shift;
                    self.latches += 1;
                }
                self.rclk = high;
            }
            Line::Oe => self.oe = high,
            Line::Srclr => {
                if !high && self.srclr {
                    self.shift = [0; N];
                    self.clears += 1;
                }
                self.srclr = high;
            }
        }
    }

    fn shift_in(&mut self) {
        let mut carry = u8::from(self.ser);
        for register in &mut self.shift {
            let out = *register >> 7;
            *register = (*register << 1) | carry;
            carry = out;
        }
        self.srclk_pulses += 1;
    }
}

pub struct SimPin<const N: usize> {
    pub line: Line,
    chain: Rc<RefCell<Chain<N>>>,
}

impl<const N: usize> ErrorType for SimPin<N> {
    type Error = Infallible;
}

impl<const N: usize> OutputPin for SimPin<N> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.chain.borrow_mut().drive(self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.chain.borrow_mut().drive(self.line, true);
        Ok(())
    }
}

pub type SimShiftRegister<const N: usize, Srclr> =
    ShiftRegister<SimPin<N>, SimPin<N>, SimPin<N>, SimPin<N>, Srclr>;

pub fn pin<const N: usize>(chain: &Rc<RefCell<Chain<N>>>, line: Line) -> SimPin<N> {
    SimPin {
        line,
        chain: Rc::clone(chain),
    }
}

pub fn without_clear<const N: usize>(chain: &Rc<RefCell<Chain<N>>>) -> SimShiftRegister<N, NoClearPin> {
    ShiftRegister::new(
        pin(chain, Line::Ser),
        pin(chain, Line::Srclk),
        pin(chain, Line::Rclk),
        pin(chain, Line::Oe),
    )
}

pub fn with_clear<const N: usize>(chain: &Rc<RefCell<Chain<N>>>) -> SimShiftRegister<N, SimPin<N>> {
    ShiftRegister::with_clear_pin(
        pin(chain, Line::Ser),
        pin(chain, Line::Srclk),
        pin(chain, Line::Rclk),
        pin(chain, Line::Oe),
        pin(chain, Line::Srclr),
    )
}
