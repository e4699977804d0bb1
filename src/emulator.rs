//! Front-end-agnostic scheduler. Drives the CPU one atomic step at a
//! time and, once enough cycles have piled up, polls the front end for
//! input and hands it a completed frame.

use crate::{
    cartridge::Cartridge, cpu::Cpu, error::Error, frontend::Frontend, header, info, log,
    mem::Mmu, savestate,
};

/// Owns the emulator core and the front end it drives. `F` is whatever
/// the host provides for a window, an audio device, and persistence.
pub struct Emulator<F: Frontend> {
    cpu: Cpu,
    frontend: F,
    poll_acc: u64,
    stop_requested: bool,
}

impl<F: Frontend> Emulator<F> {
    /// Validates and loads a ROM, seeding external RAM from whatever the
    /// front end already has for it (a fresh session if empty).
    pub fn new(rom: &[u8], boot_rom: Option<Box<[u8]>>, mut frontend: F) -> Result<Self, Error> {
        let mut cart = Cartridge::new(rom)?;
        let ram_size = header::get_ram_size(rom)?;
        cart.ensure_ram_capacity(ram_size);

        let lent = frontend.get_external_ram();
        let n = lent.len().min(cart.external_ram().len());
        cart.external_ram()[..n].copy_from_slice(&lent[..n]);

        let cpu = Cpu::new(Mmu::new(cart, boot_rom));

        Ok(Self {
            cpu,
            frontend,
            poll_acc: 0,
            stop_requested: false,
        })
    }

    /// Rebuilds a session from a previously saved state, falling back to
    /// a fresh, already-stopped session and surfacing a warning to the
    /// front end on failure.
    pub fn from_save_state(data: &[u8], mut frontend: F) -> Self {
        match savestate::decode(data) {
            Ok(cpu) => Self {
                cpu,
                frontend,
                poll_acc: 0,
                stop_requested: false,
            },
            Err(e) => {
                frontend.warning(&format!("save state failed to load: {e}"));
                let mut rom = vec![0u8; 2 * info::SIZE_ROM_BANK];
                rom[info::CART_LOGO].copy_from_slice(&info::CART_LOGO_VAL);
                let cart = Cartridge::new(&rom).expect("built-in blank ROM is always valid");
                Self {
                    cpu: Cpu::new(Mmu::new(cart, None)),
                    frontend,
                    poll_acc: 0,
                    stop_requested: true,
                }
            }
        }
    }

    /// Extracts just the cartridge ROM from a saved state.
    pub fn rom_from_save_state(data: &[u8]) -> Result<Vec<u8>, Error> {
        savestate::extract_rom(data)
    }

    /// Serializes the current session, ROM included, for later resume.
    pub fn save_state(&self) -> Vec<u8> {
        savestate::encode(&self.cpu)
    }

    /// Runs one scheduler iteration: an instruction or interrupt dispatch,
    /// fanned out to the LCD/APU/mapper/timers, with a front-end poll at
    /// the accumulated-cycle boundary. Returns the M-cycles consumed.
    pub fn iter(&mut self) -> u32 {
        let pc_before = self.cpu.pc.0;
        let bank_before = self.cpu.mmu.cart.current_high_bank();

        let (mcycles, audio, rumble) = self.cpu.step();

        if let Some((left, right)) = audio {
            self.frontend.play_sound(&left, &right);
        }
        if let Some(level) = rumble {
            self.frontend.update_rumble(level);
        }
        if self.cpu.mmu.cart.current_high_bank() != bank_before {
            self.frontend.mapper_changed();
        }
        if self.cpu.mmu.trace_mode {
            if let Some((kind, addr, data)) = self.cpu.mmu.take_pending_access() {
                self.frontend.mem_access(kind, addr, data);
            }
            self.frontend.cpu_step(mcycles, pc_before);
        }

        // Devices run at the dot clock, not the M-cycle one; double-speed
        // mode halves the dots a given M-cycle budget is worth.
        let dots = if self.cpu.mmu.is_2x { mcycles * 2 } else { mcycles * 4 };
        self.poll_acc += dots as u64;
        if self.poll_acc >= info::FRONTEND_POLL_CYCLES {
            self.poll_acc -= info::FRONTEND_POLL_CYCLES;
            self.poll_frontend();
        }

        mcycles
    }

    fn poll_frontend(&mut self) {
        let (stop, buttons, directions) = self.frontend.check();
        self.cpu.mmu.notify_buttons(buttons | directions);
        self.frontend.update_screen(self.cpu.mmu.ppu.framebuffer());
        self.stop_requested = stop;
    }

    /// Runs until the front end asks to stop via `check`.
    pub fn run(&mut self) {
        self.stop_requested = false;
        while !self.stop_requested {
            self.iter();
        }
    }

    /// True while the boot ROM is still mapped over the low cartridge
    /// window.
    pub fn is_bios_mapped(&self) -> bool {
        self.cpu.mmu.bios_mapped
    }

    /// Index of the bank currently mapped into the switchable ROM window.
    pub fn current_high_bank(&self) -> usize {
        self.cpu.mmu.cart.current_high_bank()
    }

    pub fn mapper_name(&self) -> &'static str {
        self.cpu.mmu.cart.mapper_name()
    }

    pub fn vram_bank(&self, bank: usize) -> &[u8; info::SIZE_VRAM_BANK] {
        &self.cpu.mmu.ppu.vram[bank]
    }

    pub fn bg_palette(&self) -> &[u8; info::SIZE_CGB_PALETTE] {
        &self.cpu.mmu.ppu.bg_palette
    }

    pub fn obj_palette(&self) -> &[u8; info::SIZE_CGB_PALETTE] {
        &self.cpu.mmu.ppu.obj_palette
    }

    /// Reports every memory access and CPU step to the front end's
    /// tracer hooks; off by default since it costs a callback per access.
    pub fn set_trace_mode(&mut self, enabled: bool) {
        self.cpu.mmu.trace_mode = enabled;
    }

    /// Dumps a line of disassembly-adjacent state to stderr per
    /// instruction; a debugging aid independent of the tracer hooks.
    pub fn set_debug_print(&mut self, enabled: bool) {
        self.cpu.trace_execution = enabled;
    }

    /// Persists external RAM back to the front end and releases it for
    /// the caller to do with as it pleases (e.g. flush a save file).
    pub fn shutdown(mut self) -> F {
        let ram = self.cpu.mmu.cart.external_ram().to_vec();
        let dst = self.frontend.get_external_ram();
        let n = ram.len().min(dst.len());
        dst[..n].copy_from_slice(&ram[..n]);
        log::info("emulator: session closed");
        self.frontend
    }
}
