//! Cartridge mapper ("MBC") bank-switching state machine.

use bincode::{Decode, Encode};

use crate::{error::Error, info};

use super::rtc::Mbc3Rtc;

#[derive(Encode, Decode)]
pub(crate) struct Mbc {
    pub(crate) kind: MbcKind,
    pub(crate) ram_enabled: bool,
    pub(crate) rtc: Mbc3Rtc,
    rumble: Rumble,

    ram_mask: usize,
    rom_mask: usize,
    ram_bank: usize,
    rom0_bank: usize,
    rom1_bank: usize,
}

#[derive(Debug, Encode, Decode, Clone, Copy)]
pub(crate) enum MbcKind {
    None,
    Mbc1 {
        rom_bank_lo: usize,
        rom_bank_hi: usize,
        bank_mode: bool,
    },
    Mbc2 {
        rom_bank: usize,
    },
    Mbc3 {
        rom_bank: usize,
        ram_rtc_bank: usize,
    },
    Mbc5 {
        rom_bank_lo: usize,
        rom_bank_hi: usize,
        ram_bank: usize,
        has_rumble: bool,
    },
}

impl MbcKind {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            MbcKind::None => "None",
            MbcKind::Mbc1 { .. } => "MBC1",
            MbcKind::Mbc2 { .. } => "MBC2",
            MbcKind::Mbc3 { .. } => "MBC3",
            MbcKind::Mbc5 { .. } => "MBC5",
        }
    }

    /// MBC3 RTC register selected by the RAM-bank-or-RTC-register field,
    /// if a RTC register (rather than a RAM bank) is currently selected.
    pub(crate) fn get_mbc3_rtc_reg_if_set(&self) -> Option<usize> {
        match self {
            Self::Mbc3 {
                ram_rtc_bank: addr @ 0x8..=0xC,
                ..
            } => Some(*addr),
            _ => None,
        }
    }
}

/// MBC5 rumble motor model: averages pulses over a short window rather
/// than forwarding every write, so the front end sees a stable 0..=3
/// level instead of a buzz of individual motor-on/off edges.
#[derive(Default, Encode, Decode)]
struct Rumble {
    pending_pulses: u32,
    cycles_since_update: u32,
    cycles_since_pulse: u32,
    asserted_level: u8,
}

const RUMBLE_UPDATE_CYCLES: u32 = 60_000;
const RUMBLE_IDLE_CYCLES: u32 = 80_000;

impl Rumble {
    fn pulse(&mut self) {
        self.pending_pulses += 1;
        self.cycles_since_pulse = 0;
    }

    /// Returns `Some(level)` only on a transition, per the interface
    /// contract (rumble updates are emitted, not polled).
    fn clock(&mut self, cycles: u32) -> Option<u8> {
        self.cycles_since_update += cycles;
        self.cycles_since_pulse += cycles;

        let mut new_level = None;

        if self.cycles_since_update >= RUMBLE_UPDATE_CYCLES {
            let level = self.pending_pulses.min(3) as u8;
            self.pending_pulses = 0;
            self.cycles_since_update = 0;
            if level != self.asserted_level {
                self.asserted_level = level;
                new_level = Some(level);
            }
        }

        if self.cycles_since_pulse > RUMBLE_IDLE_CYCLES && self.asserted_level != 0 {
            self.asserted_level = 0;
            new_level = Some(0);
        }

        new_level
    }
}

impl Mbc {
    pub(crate) fn new(mbc_id: u8) -> Result<Self, Error> {
        let kind = match mbc_id {
            0x00 | 0x08 | 0x09 => MbcKind::None,
            0x01..=0x03 => MbcKind::Mbc1 {
                rom_bank_lo: 1,
                rom_bank_hi: 0,
                bank_mode: false,
            },
            0x05 | 0x06 => MbcKind::Mbc2 { rom_bank: 1 },
            0x0F..=0x13 => MbcKind::Mbc3 {
                rom_bank: 1,
                ram_rtc_bank: 0,
            },
            0x19..=0x1E => MbcKind::Mbc5 {
                rom_bank_lo: 1,
                rom_bank_hi: 0,
                ram_bank: 0,
                has_rumble: matches!(mbc_id, 0x1C..=0x1E),
            },
            _ => return Err(Error::UnknownMapper),
        };
        let (rom_mask, ram_mask) = get_rom_ram_addr_mask(kind);

        Ok(Self {
            kind,
            ram_enabled: false,
            rtc: Mbc3Rtc::new(),
            rumble: Default::default(),
            ram_mask,
            rom_mask,
            ram_bank: 0,
            rom0_bank: 0,
            rom1_bank: 1,
        })
    }

    pub(crate) fn write(&mut self, addr: usize, v: u8) {
        let v = v as usize;
        let is_0xa = v & mask(4) == 0xA;

        // In some cartridges a ROM bank write of 0 is translated to 1.
        let fix_bank_num = |b: &mut usize| {
            if *b == 0 {
                *b = 1;
            }
        };

        (self.ram_bank, self.rom0_bank, self.rom1_bank) = match &mut self.kind {
            MbcKind::None => (0, 0, 1),

            MbcKind::Mbc1 {
                rom_bank_lo,
                rom_bank_hi,
                bank_mode,
            } => {
                match addr {
                    0x0000..=0x1FFF => self.ram_enabled = is_0xa,
                    0x2000..=0x3FFF => *rom_bank_lo = v & mask(5),
                    0x4000..=0x5FFF => *rom_bank_hi = v & mask(2),
                    0x6000..=0x7FFF => *bank_mode = v & 1 == 1,
                    _ => (),
                }

                // rom_bank_hi doubles as the RAM bank number and the upper
                // bits of the ROM-1 bank number, selected by bank_mode.
                fix_bank_num(rom_bank_lo);
                let bank0 = if *bank_mode { *rom_bank_hi } else { 0 };
                (bank0, bank0 << 5, *rom_bank_lo | *rom_bank_hi << 5)
            }

            MbcKind::Mbc2 { rom_bank } => {
                match addr {
                    0x0000..=0x00FF => self.ram_enabled = is_0xa,
                    0x0100..=0x3FFF => *rom_bank = v & mask(4),
                    _ => (),
                }

                fix_bank_num(rom_bank);
                (0, 0, *rom_bank)
            }

            MbcKind::Mbc3 {
                rom_bank,
                ram_rtc_bank,
            } => {
                match addr {
                    0x0000..=0x1FFF => self.ram_enabled = is_0xa,
                    0x2000..=0x3FFF => *rom_bank = v & mask(7),
                    0x4000..=0x5FFF => *ram_rtc_bank = v & mask(4),
                    // Writing 0 then 1 latches the RTC's counters.
                    0x6000..=0x7FFF => match v {
                        0 => self.rtc.set_latching(false),
                        1 => self.rtc.set_latching(true),
                        _ => (),
                    },
                    _ => (),
                }

                fix_bank_num(rom_bank);
                (*ram_rtc_bank, 0, *rom_bank)
            }

            MbcKind::Mbc5 {
                rom_bank_lo,
                rom_bank_hi,
                ram_bank,
                has_rumble,
            } => {
                match addr {
                    0x0000..=0x1FFF => self.ram_enabled = is_0xa,
                    0x2000..=0x2FFF => *rom_bank_lo = v,
                    0x3000..=0x3FFF => *rom_bank_hi = v & 1,
                    0x4000..=0x5FFF => {
                        if *has_rumble && v & 0x08 != 0 {
                            self.rumble.pulse();
                        }
                        *ram_bank = v & mask(if *has_rumble { 3 } else { 4 });
                    }
                    _ => (),
                }

                (*ram_bank, 0, *rom_bank_lo | *rom_bank_hi << 8)
            }
        };
    }

    /// Advances cycle-driven state: for MBC5, the rumble-averaging window.
    /// The MBC3 RTC has no dot-driven state of its own; it syncs to host
    /// wall-clock on its own reads and latch writes instead. Returns a
    /// rumble level update when the asserted level changes.
    pub(crate) fn clock(&mut self, dots: u32) -> Option<u8> {
        match self.kind {
            MbcKind::Mbc5 { has_rumble: true, .. } => self.rumble.clock(dots),
            _ => None,
        }
    }

    /// Index of the bank currently mapped into the switchable ROM1 window.
    pub(crate) fn current_high_bank(&self) -> usize {
        self.rom1_bank
    }

    #[inline]
    pub(crate) fn ram_addr(&self, addr: usize) -> usize {
        (addr & self.ram_mask) | (self.ram_bank * info::SIZE_EXT_RAM)
    }

    #[inline]
    pub(crate) fn rom0_addr(&self, addr: usize) -> usize {
        (addr & self.rom_mask) | (self.rom0_bank * info::SIZE_ROM_BANK)
    }

    #[inline]
    pub(crate) fn rom1_addr(&self, addr: usize) -> usize {
        (addr & self.rom_mask) | (self.rom1_bank * info::SIZE_ROM_BANK)
    }
}

#[inline(always)]
const fn mask(bits: u32) -> usize {
    if bits == usize::BITS {
        !0
    } else {
        !(!0 << bits)
    }
}

fn get_rom_ram_addr_mask(mbc: MbcKind) -> (usize, usize) {
    match mbc {
        MbcKind::Mbc2 { .. } => (info::SIZE_ROM_BANK - 1, mask(9)),
        _ => (info::SIZE_ROM_BANK - 1, info::SIZE_EXT_RAM - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mbc1_0x20_0x40_0x60_alias_identically() {
        // All three values have a zero low-5-bit field, so ROM1 bank
        // selection collapses to the same result regardless of bank_mode.
        let mut a = Mbc::new(0x01).unwrap();
        let mut b = Mbc::new(0x01).unwrap();
        a.write(0x2000, 0x20);
        b.write(0x2000, 0x40);
        assert_eq!(a.rom1_addr(0), b.rom1_addr(0));
    }

    #[test]
    fn mbc5_rumble_pulses_average_into_a_level() {
        let mut m = Mbc::new(0x1C).unwrap();
        for _ in 0..3 {
            m.write(0x4000, 0x08);
        }
        let update = m.clock(RUMBLE_UPDATE_CYCLES);
        assert_eq!(update, Some(3));
    }

    #[test]
    fn rumble_drops_to_zero_after_idle() {
        let mut m = Mbc::new(0x1C).unwrap();
        m.write(0x4000, 0x08);
        m.clock(RUMBLE_UPDATE_CYCLES);
        let update = m.clock(RUMBLE_IDLE_CYCLES + 1);
        assert_eq!(update, Some(0));
    }

    #[test]
    fn unknown_mapper_id_is_rejected() {
        assert!(Mbc::new(0x20).is_err());
    }
}
