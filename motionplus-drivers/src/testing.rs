//! Register-map fake for the I2C bus

use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};
use embedded_hal_async::i2c::I2c;

struct State {
    regs: [u8; 256],
    pointer: u8,
    writes: Vec<Vec<u8>>,
    fail: Option<ErrorKind>,
}

/// A single device on a fake bus
///
/// The first byte of every write selects the register pointer, later bytes
/// are stored with auto-increment, and reads continue from the pointer.
/// Clones share the same register file so tests can poke values while a
/// driver owns the bus.
#[derive(Clone)]
pub struct FakeI2c {
    address: u8,
    state: Rc<RefCell<State>>,
}

impl FakeI2c {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            state: Rc::new(RefCell::new(State {
                regs: [0; 256],
                pointer: 0,
                writes: Vec::new(),
                fail: None,
            })),
        }
    }

    pub fn set(&self, register: u8, value: u8) {
        self.state.borrow_mut().regs[register as usize] = value;
    }

    pub fn get(&self, register: u8) -> u8 {
        self.state.borrow().regs[register as usize]
    }

    /// Every write payload seen so far
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.state.borrow().writes.clone()
    }

    pub fn clear_writes(&self) {
        self.state.borrow_mut().writes.clear();
    }

    /// Fail every following transaction with `kind` (or stop failing)
    pub fn fail_with(&self, kind: Option<ErrorKind>) {
        self.state.borrow_mut().fail = kind;
    }
}

impl ErrorType for FakeI2c {
    type Error = ErrorKind;
}

impl I2c for FakeI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if let Some(kind) = state.fail {
            return Err(kind);
        }
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    state.writes.push(bytes.to_vec());
                    if let Some((&register, data)) = bytes.split_first() {
                        state.pointer = register;
                        for &byte in data {
                            let at = state.pointer as usize;
                            state.regs[at] = byte;
                            state.pointer = state.pointer.wrapping_add(1);
                        }
                    }
                }
                Operation::Read(buf) => {
                    for byte in buf.iter_mut() {
                        *byte = state.regs[state.pointer as usize];
                        state.pointer = state.pointer.wrapping_add(1);
                    }
                }
            }
        }

        Ok(())
    }
}
