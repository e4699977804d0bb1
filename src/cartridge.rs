//! The cartridge: fixed ROM image, on-demand external RAM, and the
//! mapper that bank-switches both into the CPU's address space.

mod mbc;
mod rtc;

use crate::{error::Error, info::*, log, macros::match_range};

#[derive(bincode::Encode, bincode::Decode)]
pub(crate) struct Cartridge {
    pub(crate) is_cgb: bool,
    mbc: mbc::Mbc,

    /// Cartridge ROM, fixed size for the session's lifetime.
    rom: Box<[u8]>,
    /// External RAM, allocated on demand as banks are switched to.
    ram: Vec<u8>,
}

impl Cartridge {
    /// Validates the header and builds a cartridge from a ROM image.
    pub(crate) fn new(rom: &[u8]) -> Result<Self, Error> {
        if rom.len() < CART_ROM_SIZE || !crate::header::check_logo(rom) {
            return Err(Error::WrongLogo);
        }
        if rom.len() % SIZE_ROM_BANK != 0 {
            log::warn("cartridge: ROM size is not a multiple of 16KiB");
        }

        let is_cgb = matches!(rom[CART_CGB_FLAG], CART_CGB_TOO | CART_CGB_ONLY);
        let mapper_id = crate::header::get_mapper(rom)?;
        let mbc = mbc::Mbc::new(mapper_id)?;

        let mut cart = Self {
            is_cgb,
            mbc,
            rom: rom.to_vec().into_boxed_slice(),
            ram: Vec::new(),
        };
        cart.alloc_ram(1);

        Ok(cart)
    }

    pub(crate) fn read(&mut self, addr: usize) -> u8 {
        match_range! { v@addr {
            // Some ROM images aren't a whole number of banks; such reads
            // past the end of the image read as open-bus 0xFF.
            ADDR_ROM0 => { let a = self.mbc.rom0_addr(v); self.rom.get(a).copied().unwrap_or(0xFF) }
            ADDR_ROM1 => { let a = self.mbc.rom1_addr(v); self.rom.get(a).copied().unwrap_or(0xFF) }
            ADDR_EXT_RAM => {
                if self.mbc.ram_enabled {
                    self.read_ext(v)
                } else {
                    0xFF
                }
            }
            _ => { 0xFF }
        }}
    }

    pub(crate) fn write(&mut self, addr: usize, val: u8) {
        match_range! { v@addr {
            ADDR_ROM0 => { self.mbc.write(addr, val) }
            ADDR_ROM1 => { self.mbc.write(addr, val) }
            ADDR_EXT_RAM => {
                if self.mbc.ram_enabled {
                    self.write_ext(v, val);
                }
            }
            _ => {}
        }}
    }

    fn read_ext(&mut self, offset: usize) -> u8 {
        if let Some(reg) = self.mbc.kind.get_mbc3_rtc_reg_if_set() {
            return self.mbc.rtc.read(reg);
        }
        self.ram[self.mbc.ram_addr(offset)]
    }

    fn write_ext(&mut self, offset: usize, val: u8) {
        if let Some(reg) = self.mbc.kind.get_mbc3_rtc_reg_if_set() {
            self.mbc.rtc.write(reg, val);
            return;
        }
        let a = self.mbc.ram_addr(offset);
        self.alloc_ram(a / SIZE_EXT_RAM);
        self.ram[a] = val;
    }

    /// Advances the MBC5 rumble-averaging window; the RTC no longer ticks
    /// here, it syncs to host wall-clock lazily on its own register
    /// accesses instead. Returns a rumble level update on a transition.
    pub(crate) fn clock(&mut self, dots: u32) -> Option<u8> {
        self.mbc.clock(dots)
    }

    /// Index of the bank currently mapped into the switchable ROM1 window.
    pub(crate) fn current_high_bank(&self) -> usize {
        self.mbc.current_high_bank()
    }

    pub(crate) fn mapper_name(&self) -> &'static str {
        self.mbc.kind.name()
    }

    /// Battery-backed external RAM, for the front end to load/persist at
    /// session boundaries.
    pub(crate) fn external_ram(&mut self) -> &mut [u8] {
        &mut self.ram
    }

    /// Grows external RAM to at least `size` bytes so the front end's
    /// lent buffer and ours agree on length from the start of a session.
    pub(crate) fn ensure_ram_capacity(&mut self, size: usize) {
        if size > self.ram.len() {
            self.ram.resize(size, 0);
        }
    }

    /// The fixed ROM image, as originally loaded.
    pub(crate) fn rom(&self) -> &[u8] {
        &self.rom
    }

    /// Allocates RAM if insufficient for a given bank index.
    fn alloc_ram(&mut self, bank: usize) {
        // Figuring out the exact RAM size a cartridge needs up front is
        // unreliable across header quirks, so banks grow on demand.
        let size = (bank + 1) * SIZE_EXT_RAM;
        if size > self.ram.len() {
            self.ram.resize(size, 0);
        }
    }
}
