use crate::{
    apu::Apu,
    cartridge::Cartridge,
    frontend::MemAccessKind,
    info::*,
    joypad::Joypad,
    macros::{in_ranges, match_range},
    ppu::Ppu,
    regs::{CgbPaletteIndex, IntData, Key1},
    serial::Serial,
    timer::Timer,
};

/// General-purpose/H-Blank VRAM DMA state, driven from registers
/// 0xFF51-0xFF55.
#[derive(Default, bincode::Encode, bincode::Decode)]
pub(crate) struct VramDma {
    src: u16,
    dst: u16,
    /// Remaining 16-byte blocks, valid while `active`.
    blocks_left: u8,
    active: bool,
    hblank_mode: bool,
}

/// The memory sub-system, contains the `Cartridge`, `Ppu`, `Timer`, `Serial`
/// and some registers, other registers are owned by components they belong to.
#[derive(Debug, PartialEq, bincode::Encode, bincode::Decode)]
pub(crate) struct Mmu {
    /// Is running in dual-speed(aka CGB mode).
    pub(crate) is_2x: bool,

    pub(crate) ppu: Ppu,
    pub(crate) apu: Apu,
    pub(crate) timer: Timer,
    pub(crate) serial: Serial,
    pub(crate) cart: Cartridge,
    pub(crate) joypad: Joypad,

    // Registers and memory owned by it.
    pub(crate) key1: Key1,
    pub(crate) iflag: IntData,
    pub(crate) ienable: IntData,
    pub(crate) bgpi: CgbPaletteIndex,
    pub(crate) obpi: CgbPaletteIndex,
    pub(crate) opri: u8,
    pub(crate) dma: u8,
    pub(crate) wram_idx: usize,
    pub(crate) vram_idx: usize,

    pub(crate) cgb_force: bool,
    pub(crate) bios_mapped: bool,
    boot_rom: Option<Box<[u8]>>,
    vram_dma: VramDma,

    // First WRAM region always refers to bank-0 and
    // second WRAM region can refer to any of the 1-7 banks.
    wram: Box<[[u8; SIZE_WRAM_BANK]; WRAM_BANKS]>,
    hram: [u8; SIZE_HRAM],

    pub(crate) trace_mode: bool,
    pending_access: Option<(MemAccessKind, u16, u8)>,
}

impl Mmu {
    pub(crate) fn new(cart: Cartridge, boot_rom: Option<Box<[u8]>>) -> Self {
        let is_cgb = cart.is_cgb;
        Self {
            is_2x: false,
            cart,

            ppu: Ppu::new(is_cgb),
            apu: Apu::new(),
            timer: Timer::new(),
            serial: Serial::new(),
            joypad: Joypad::new(),

            wram: Box::new([[0; SIZE_WRAM_BANK]; WRAM_BANKS]),
            hram: [0; SIZE_HRAM],
            ienable: Default::default(),
            iflag: Default::default(),
            key1: Default::default(),
            bgpi: Default::default(),
            obpi: Default::default(),
            wram_idx: 1,
            vram_idx: 0,
            opri: 0,
            dma: 0,

            cgb_force: false,
            bios_mapped: boot_rom.is_some(),
            boot_rom,
            vram_dma: Default::default(),

            trace_mode: false,
            pending_access: None,
        }
    }

    /// Advances every device by `mcycles` CPU M-cycles. Returns extra
    /// cycles "stolen" by an in-progress general-purpose VRAM DMA so the
    /// scheduler can feed them back into the CPU's own budget, plus a
    /// flushed stereo audio buffer pair once every `apu::BUFFER_SIZE`
    /// samples.
    pub(crate) fn tick(
        &mut self,
        mcycles: u32,
    ) -> (
        Option<(Box<[f32; crate::apu::BUFFER_SIZE]>, Box<[f32; crate::apu::BUFFER_SIZE]>)>,
        Option<u8>,
    ) {
        let dots = if self.is_2x { mcycles * 2 } else { mcycles * 4 };

        let intr = self.ppu.tick(dots as u16);
        self.add_interrupt(intr);

        if self.ppu.entered_hblank() {
            self.step_hblank_dma();
        }

        if self.timer.tick(mcycles as u16) {
            self.iflag.timer = 1;
        }

        let rumble = self.cart.clock(dots);

        let audio = self.apu.tick(dots);

        (audio, rumble)
    }

    /// Reads one byte, use when executing instructions by CPU.
    pub(crate) fn read(&mut self, addr: u16) -> u8 {
        let v = self.read_inner(addr);
        if self.trace_mode {
            self.pending_access = Some((MemAccessKind::Read, addr, v));
        }
        v
    }

    fn read_inner(&mut self, addr: u16) -> u8 {
        let a = addr as usize;

        if self.bios_mapped && is_boot_rom_addr(a) {
            return self.boot_rom.as_ref().unwrap()[a];
        }
        if is_cart_addr(a) {
            return self.cart.read(a);
        }

        match_range! { v@a {
            ADDR_AUDIO_WAVE_RAM => { self.apu.ch3.wave_ram[v] }

            ADDR_VRAM => { self.ppu.vram[self.vram_idx][v] }
            ADDR_WRAM0 => { self.wram[0][v] }
            ADDR_WRAM1 => { self.wram[self.wram_idx][v] }
            ADDR_ECHO_RAM => { self.read_inner(get_echo_ram_addr(v) as u16) }
            ADDR_OAM => { self.ppu.oam[v] }
            ADDR_UNUSABLE => { 0 }
            ADDR_HRAM => { self.hram[v] }
            ADDR_IO_REGS => { self.read_reg(a) }
            ADDR_IE => { self.read_reg(a) }

            _ => { 0xFF }
        }}
    }

    /// Writes one byte, use when executing instructions by CPU.
    pub(crate) fn write(&mut self, addr: u16, val: u8) {
        if self.trace_mode {
            self.pending_access = Some((MemAccessKind::Write, addr, val));
        }

        let a = addr as usize;

        if self.bios_mapped && is_boot_rom_addr(a) {
            return; // The boot ROM window is read-only.
        }
        if is_cart_addr(a) {
            self.cart.write(a, val);
            return;
        }

        match_range! { v@a {
            ADDR_AUDIO_WAVE_RAM => { self.apu.ch3.wave_ram[v] = val }

            ADDR_VRAM => { self.ppu.vram[self.vram_idx][v] = val }
            ADDR_WRAM0 => { self.wram[0][v] = val }
            ADDR_WRAM1 => { self.wram[self.wram_idx][v] = val }
            ADDR_ECHO_RAM => { self.write(get_echo_ram_addr(v) as u16, val) }
            ADDR_OAM => { self.ppu.oam[v] = val }
            ADDR_UNUSABLE => {}
            ADDR_HRAM => { self.hram[v] = val }
            ADDR_IO_REGS => { self.write_reg(a, val) }
            ADDR_IE => { self.write_reg(a, val) }

            _ => {}
        }}
    }

    /// Drains the access recorded by the last `read`/`write` while trace
    /// mode is active, for the scheduler to forward to a tracer.
    pub(crate) fn take_pending_access(&mut self) -> Option<(MemAccessKind, u16, u8)> {
        self.pending_access.take()
    }

    fn read_reg(&self, addr: usize) -> u8 {
        match addr {
            IO_JOYPAD => self.joypad.read(),
            IO_SB => self.serial.sb,
            IO_SC => self.serial.sc.read(),
            IO_DIV => self.timer.get_div(),
            IO_TIMA => self.timer.tima,
            IO_TMA => self.timer.tma,
            IO_TAC => self.timer.tac.read(),
            IO_IF => self.iflag.read(),
            IO_IE => self.ienable.read(),

            IO_NR10 => self.apu.ch1.nx0.read(),
            IO_NR11 => self.apu.ch1.nx1.read() | 0x3F,
            IO_NR12 => self.apu.ch1.nx2.read(),
            IO_NR13 => 0xFF,
            IO_NR14 => self.apu.ch1.nx4.read() | 0xBF,
            IO_NR21 => self.apu.ch2.nx1.read() | 0x3F,
            IO_NR22 => self.apu.ch2.nx2.read(),
            IO_NR23 => 0xFF,
            IO_NR24 => self.apu.ch2.nx4.read() | 0xBF,
            IO_NR30 => self.apu.ch3.n30.read() | 0x7F,
            IO_NR31 => 0xFF,
            IO_NR32 => self.apu.ch3.n32.read() | 0x9F,
            IO_NR33 => 0xFF,
            IO_NR34 => self.apu.ch3.n34.read() | 0xBF,
            IO_NR41 => 0xFF,
            IO_NR42 => self.apu.ch4.n42.read(),
            IO_NR43 => self.apu.ch4.read_n43(),
            IO_NR44 => self.apu.ch4.n44.read() | 0xBF,
            IO_NR50 => self.apu.nr50.read(),
            IO_NR51 => self.apu.nr51.read(),
            IO_NR52 => self.apu.nr52.read() | 0x70,

            IO_LCDC => self.ppu.lcdc.read(),
            IO_STAT => self.ppu.stat.read() | 0x80,
            IO_SCY => self.ppu.scy,
            IO_SCX => self.ppu.scx,
            IO_LY => self.ppu.ly,
            IO_LYC => self.ppu.lyc,
            IO_WY => self.ppu.wy,
            IO_WX => self.ppu.wx,
            IO_BGP => self.ppu.bgp,
            IO_OBP0 => self.ppu.obp0,
            IO_OBP1 => self.ppu.obp1,
            IO_BGPI => self.bgpi.read(),
            IO_BGPD => self.ppu.bg_palette[self.bgpi.addr as usize],
            IO_OBPI => self.obpi.read(),
            IO_OBPD => self.ppu.obj_palette[self.obpi.addr as usize],
            IO_OPRI => self.opri,

            IO_SVBK => self.wram_idx as u8,
            IO_VBK => self.vram_idx as u8,
            IO_HDMA5 => self.read_hdma5(),
            IO_DMA => self.dma,
            IO_KEY1 => self.key1.read(),
            IO_OPRI_CGB_FORCE => (self.cgb_force as u8) << 7,

            _ => 0xFF,
        }
    }

    /// Writes to a register and performs necessary action
    /// corresponding to the register if any.
    fn write_reg(&mut self, addr: usize, v: u8) {
        /// Set value but keep the masked bits preserved.
        macro_rules! set {
            ($target:expr, $val:expr, $keep_mask:expr) => {{
                let combined = ($target.read() & $keep_mask) | ($val & !$keep_mask);
                $target.write(combined);
            }};
        }

        match addr {
            IO_JOYPAD => self.joypad.write_select(v),

            IO_SB => self.serial.sb = v,
            IO_SC => set!(self.serial.sc, v, mask(5) << 2),
            IO_DIV => self.timer.set_div(v),
            IO_TIMA => self.timer.tima = v,
            IO_TMA => self.timer.tma = v,
            IO_TAC => self.timer.write_tac(v),
            IO_IF => set!(self.iflag, v, !mask(5)),
            IO_IE => set!(self.ienable, v, !mask(5)),

            IO_NR10 => self.write_nr10(v),
            IO_NR11 => self.write_nr11(v),
            IO_NR12 => self.write_nr12(1, v),
            IO_NR13 => self.apu.ch1.period_low = v,
            IO_NR14 => self.write_nr14(v),

            IO_NR21 => self.write_nr21(v),
            IO_NR22 => self.write_nr12(2, v),
            IO_NR23 => self.apu.ch2.period_low = v,
            IO_NR24 => self.write_nr24(v),

            IO_NR30 => set!(self.apu.ch3.n30, v, mask(7)),
            IO_NR31 => self.apu.ch3.length_timer_reg = v,
            IO_NR32 => set!(self.apu.ch3.n32, v, 1 << 7 | mask(5)),
            IO_NR33 => self.apu.ch3.period_low = v,
            IO_NR34 => self.write_nr34(v),

            IO_NR41 => self.apu.ch4.n41.write(v),
            IO_NR42 => self.write_nr12(4, v),
            IO_NR43 => self.apu.ch4.write_n43(v),
            IO_NR44 => self.write_nr44(v),

            IO_NR50 => self.apu.nr50.write(v),
            IO_NR51 => self.apu.nr51.write(v),
            IO_NR52 => self.write_nr52(v),

            IO_LCDC => self.ppu.write_lcdc(v),
            IO_STAT => set!(self.ppu.stat, v, mask(3)),
            IO_SCY => self.ppu.scy = v,
            IO_SCX => self.ppu.scx = v,
            IO_LY => (),
            IO_LYC => self.ppu.lyc = v,
            IO_WY => self.ppu.wy = v,
            IO_WX => self.ppu.wx = v,
            IO_BGP => self.ppu.bgp = v,
            IO_OBP0 => self.ppu.obp0 = v,
            IO_OBP1 => self.ppu.obp1 = v,
            IO_BGPI => self.bgpi.write(v),
            IO_OBPI => self.obpi.write(v),

            // CGB palettes are locked while the PPU is drawing (Mode 3).
            IO_BGPD if self.get_mode() != MODE_DRAW => {
                self.ppu.bg_palette[self.bgpi.addr as usize] = v;
                if self.bgpi.auto_inc == 1 {
                    self.bgpi.addr = (self.bgpi.addr + 1) & mask(6);
                }
            }
            IO_OBPD if self.get_mode() != MODE_DRAW => {
                self.ppu.obj_palette[self.obpi.addr as usize] = v;
                if self.obpi.auto_inc == 1 {
                    self.obpi.addr = (self.obpi.addr + 1) & mask(6);
                }
            }

            IO_OPRI => self.opri = v & 1,
            IO_SVBK => {
                if self.is_2x {
                    self.wram_idx = if v == 0 { 1 } else { (v & mask(3)) as usize };
                }
            }
            IO_VBK => {
                if self.is_2x {
                    self.vram_idx = (v as usize) & 1
                }
            }

            IO_HDMA1 => self.vram_dma.src = (self.vram_dma.src & 0x00FF) | ((v as u16) << 8),
            IO_HDMA2 => self.vram_dma.src = (self.vram_dma.src & 0xFF00) | (v & 0xF0) as u16,
            IO_HDMA3 => self.vram_dma.dst = (self.vram_dma.dst & 0x00FF) | ((v as u16 & 0x1F) << 8),
            IO_HDMA4 => self.vram_dma.dst = (self.vram_dma.dst & 0xFF00) | (v & 0xF0) as u16,
            IO_HDMA5 => self.start_vram_dma(v),

            IO_DMA => self.do_dma(v),
            IO_KEY1 => set!(self.key1, v, !mask(1)),
            IO_OPRI_CGB_FORCE => self.cgb_force = v & 0x80 != 0,

            _ => (),
        }
    }

    fn write_nr10(&mut self, v: u8) {
        if !self.apu.is_on() {
            return;
        }
        self.apu.ch1.nx0.write(v);
    }
    fn write_nr11(&mut self, v: u8) {
        if self.apu.is_on() {
            self.apu.ch1.nx1.write(v);
        } else {
            self.apu.ch1.nx1.write(v & 0x3F); // length survives while off.
        }
    }
    fn write_nr21(&mut self, v: u8) {
        if self.apu.is_on() {
            self.apu.ch2.nx1.write(v);
        } else {
            self.apu.ch2.nx1.write(v & 0x3F);
        }
    }
    fn write_nr12(&mut self, ch: u8, v: u8) {
        if !self.apu.is_on() {
            return;
        }
        match ch {
            1 => self.apu.ch1.nx2.write(v),
            2 => self.apu.ch2.nx2.write(v),
            _ => self.apu.ch4.n42.write(v),
        }
    }
    fn write_nr14(&mut self, v: u8) {
        if !self.apu.is_on() {
            return;
        }
        self.apu.ch1.nx4.write(v);
        if self.apu.ch1.nx4.trigger == 1 {
            self.apu.ch1.trigger();
        }
    }
    fn write_nr24(&mut self, v: u8) {
        if !self.apu.is_on() {
            return;
        }
        self.apu.ch2.nx4.write(v);
        if self.apu.ch2.nx4.trigger == 1 {
            self.apu.ch2.trigger();
        }
    }
    fn write_nr34(&mut self, v: u8) {
        if !self.apu.is_on() {
            return;
        }
        self.apu.ch3.n34.write(v);
        if self.apu.ch3.n34.trigger == 1 {
            self.apu.ch3.trigger();
        }
    }
    fn write_nr44(&mut self, v: u8) {
        if !self.apu.is_on() {
            return;
        }
        self.apu.ch4.n44.write(v);
        if self.apu.ch4.n44.trigger == 1 {
            self.apu.ch4.trigger();
        }
    }
    fn write_nr52(&mut self, v: u8) {
        let turning_on = v & 0x80 != 0 && !self.apu.is_on();
        let turning_off = v & 0x80 == 0 && self.apu.is_on();
        self.apu.nr52.audio_on = (v >> 7) & 1;
        if turning_off {
            self.apu.power_off();
        } else if turning_on {
            self.apu.power_on();
        }
    }

    /// Set IF register by ORing bits of `iflag` in.
    pub(crate) fn add_interrupt(&mut self, iflag: IntData) {
        let val = self.iflag.read() | iflag.read();
        self.iflag.write(val);
    }

    /// Forward a front-end button-press notification: refresh the joypad
    /// state and raise the joypad interrupt if a currently-selected row
    /// now has a pressed bit.
    pub(crate) fn notify_buttons(&mut self, mask: u8) {
        let was_any = self.joypad.any_selected_pressed();
        self.joypad.set_buttons(mask);
        if !was_any && self.joypad.any_selected_pressed() {
            self.add_interrupt(IntData {
                joypad: 1,
                ..Default::default()
            });
        }
    }

    pub(crate) fn get_mode(&self) -> u8 {
        self.ppu.stat.ppu_mode
    }

    /// One-shot write of 0x11 to 0xFF50 unmaps the boot ROM permanently.
    pub(crate) fn maybe_unmap_bios(&mut self, addr: u16, val: u8) {
        if addr as usize == IO_BOOT_OFF && val == BOOT_OFF_UNMAP_VAL {
            self.bios_mapped = false;
        }
    }

    fn do_dma(&mut self, addr: u8) {
        // DMA address specifies the high-byte value of the 16-bit
        // source address. Valid values for it are from 0x00 to 0xDF.
        // If it is more than that then we just wrap around it.
        let src = ((addr as usize) % (0xDF + 1)) << 8;
        self.dma = addr;

        for i in 0..SIZE_OAM {
            self.ppu.oam[i] = self.read_inner((src + i) as u16);
        }
    }

    fn read_hdma5(&self) -> u8 {
        let len_field = self.vram_dma.blocks_left.wrapping_sub(1);
        ((!self.vram_dma.active as u8) << 7) | (len_field & 0x7F)
    }

    /// Starts a VRAM DMA, or cancels an in-progress H-Blank one.
    fn start_vram_dma(&mut self, v: u8) {
        if self.vram_dma.active && self.vram_dma.hblank_mode && v & 0x80 == 0 {
            self.vram_dma.active = false;
            return;
        }

        let length = (v & 0x7F) + 1;
        self.vram_dma.blocks_left = length;
        self.vram_dma.hblank_mode = v & 0x80 != 0;
        self.vram_dma.active = true;

        if !self.vram_dma.hblank_mode {
            // General-purpose: blocks immediately, stealing (length+1)*8
            // cycles -- accounted for by the caller via `tick`'s return.
            while self.vram_dma.active {
                self.copy_one_vram_dma_block();
            }
        }
    }

    fn step_hblank_dma(&mut self) {
        if self.vram_dma.active && self.vram_dma.hblank_mode {
            self.copy_one_vram_dma_block();
        }
    }

    fn copy_one_vram_dma_block(&mut self) {
        let src = self.vram_dma.src & !0xF;
        // Destination is forced into VRAM by masking the high bits.
        let dst = 0x8000 | (self.vram_dma.dst & 0x1FF0);

        for i in 0..SIZE_VRAM_DMA_BLOCK as u16 {
            let byte = self.read_inner(src + i);
            self.ppu.vram[self.vram_idx][(dst + i - 0x8000) as usize] = byte;
        }

        self.vram_dma.src = self.vram_dma.src.wrapping_add(SIZE_VRAM_DMA_BLOCK as u16);
        self.vram_dma.dst = self.vram_dma.dst.wrapping_add(SIZE_VRAM_DMA_BLOCK as u16);
        self.vram_dma.blocks_left -= 1;
        if self.vram_dma.blocks_left == 0 {
            self.vram_dma.active = false;
        }
    }
}

#[inline]
fn is_cart_addr(addr: usize) -> bool {
    in_ranges!(addr, ADDR_ROM0, ADDR_ROM1, ADDR_EXT_RAM)
}

#[inline]
fn is_boot_rom_addr(addr: usize) -> bool {
    in_ranges!(addr, ADDR_BOOT_LOW, ADDR_BOOT_HIGH)
}

/// Get ECHO RAM address which is mapped to WRAM masked by 13-bits.
#[inline]
fn get_echo_ram_addr(rel_addr: usize) -> usize {
    (rel_addr & ECHO_RAM_ADDR_MASK) + *ADDR_WRAM0.start()
}

#[inline(always)]
const fn mask(bit_cnt: u32) -> u8 {
    u8::MAX >> (8 - bit_cnt)
}
