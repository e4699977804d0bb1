//! Serial port register storage.
//!
//! Link-cable transfer is an explicit non-goal: no other machine is ever
//! connected, so a transfer started here would never complete on real
//! hardware either. We keep SB/SC as plain readable/writable registers
//! and never raise the serial interrupt, rather than modeling clock
//! timing for a peer that can't exist.

use crate::regs::SerialCtrl;

#[derive(Default, bincode::Encode, bincode::Decode)]
pub(crate) struct Serial {
    pub(crate) sc: SerialCtrl,
    pub(crate) sb: u8,
}

impl Serial {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}
