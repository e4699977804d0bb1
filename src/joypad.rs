//! Joypad matrix: two rows (D-pad, action buttons) of 4 active-low bits,
//! selected through the P1 register.

use crate::regs::{ActionButtons, DPad, JoyPad};

#[derive(Default, bincode::Encode, bincode::Decode)]
pub(crate) struct Joypad {
    p1: JoyPad,
    dpad: DPad,
    buttons: ActionButtons,
}

impl Joypad {
    pub(crate) fn new() -> Self {
        Default::default()
    }

    pub(crate) fn write_select(&mut self, val: u8) {
        self.p1.write(val);
    }

    /// Sets the live button state from the front end's 8-bit active-high
    /// mask, bits {right, left, up, down, A, B, select, start}.
    pub(crate) fn set_buttons(&mut self, mask: u8) {
        self.dpad = DPad {
            right: (mask & 0x01 != 0) as u8,
            left: (mask & 0x02 != 0) as u8,
            up: (mask & 0x04 != 0) as u8,
            down: (mask & 0x08 != 0) as u8,
        };
        self.buttons = ActionButtons {
            a: (mask & 0x10 != 0) as u8,
            b: (mask & 0x20 != 0) as u8,
            select: (mask & 0x40 != 0) as u8,
            start: (mask & 0x80 != 0) as u8,
        };
    }

    /// Reads P1: the selected row's bits are OR-ed (active-low) into the
    /// low nibble. Both rows selected reads 0x0F in the low nibble, our
    /// best-effort guess at undocumented real-hardware behavior.
    pub(crate) fn read(&self) -> u8 {
        let select = self.p1.read();
        let dpad_sel = self.p1.select_dpad == 0;
        let btn_sel = self.p1.select_buttons == 0;

        let low = match (dpad_sel, btn_sel) {
            (true, false) => !self.dpad.read() & 0x0F,
            (false, true) => !self.buttons.read() & 0x0F,
            (true, true) => !(self.dpad.read() | self.buttons.read()) & 0x0F,
            (false, false) => 0x0F,
        };

        0xC0 | select | low
    }

    /// True if any currently-selected row has a pressed (active) bit,
    /// used by the memory map to decide whether to raise a joypad
    /// interrupt on a button-press notification.
    pub(crate) fn any_selected_pressed(&self) -> bool {
        let dpad_sel = self.p1.select_dpad == 0;
        let btn_sel = self.p1.select_buttons == 0;
        (dpad_sel && self.dpad.read() != 0) || (btn_sel && self.buttons.read() != 0)
    }
}
