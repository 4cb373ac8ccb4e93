//! Shared hardware doubles for unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

/// Shared view of a bank of four simulated coil pins.
#[derive(Clone, Default)]
pub struct CoilLog {
    states: Rc<RefCell<[bool; 4]>>,
    writes: Rc<Cell<u32>>,
    failing: Rc<Cell<bool>>,
}

impl CoilLog {
    pub fn current(&self) -> [bool; 4] {
        *self.states.borrow()
    }

    pub fn writes(&self) -> u32 {
        self.writes.get()
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing.set(failing);
    }
}

/// Output pin that records its level into a [`CoilLog`].
pub struct SimPin {
    index: usize,
    log: CoilLog,
}

impl ErrorType for SimPin {
    type Error = ErrorKind;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

impl SimPin {
    fn write(&mut self, level: bool) -> Result<(), ErrorKind> {
        if self.log.failing.get() {
            return Err(ErrorKind::Other);
        }
        self.log.states.borrow_mut()[self.index] = level;
        self.log.writes.set(self.log.writes.get() + 1);
        Ok(())
    }
}

/// Four simulated pins sharing one log.
pub fn coil_bank() -> ([SimPin; 4], CoilLog) {
    let log = CoilLog::default();
    let pins = core::array::from_fn(|index| SimPin {
        index,
        log: log.clone(),
    });
    (pins, log)
}

/// Delay provider that only accumulates the requested time.
#[derive(Clone, Default)]
pub struct CountingDelay {
    total_ns: Rc<Cell<u64>>,
    calls: Rc<Cell<u32>>,
}

impl CountingDelay {
    pub fn total_ns(&self) -> u64 {
        self.total_ns.get()
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }

    fn record(&mut self, ns: u64) {
        self.total_ns.set(self.total_ns.get() + ns);
        self.calls.set(self.calls.get() + 1);
    }
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        self.record(us as u64 * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(ms as u64 * 1_000_000);
    }
}
