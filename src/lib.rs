//! Cycle-accurate core for an 8-bit handheld console with a "Color"
//! successor mode: CPU, pixel pipeline, four-channel APU, cartridge
//! mappers and their batteries/timers/rumble, and the registers that
//! wire them together. The core never touches a window, an audio
//! device, or a filesystem; see [`Frontend`] for that boundary.

mod apu;
mod cartridge;
mod counter;
mod cpu;
mod emulator;
mod error;
mod frontend;
mod header;
mod info;
mod joypad;
mod log;
mod macros;
mod mem;
mod ppu;
mod regs;
mod savestate;
mod serial;
mod timer;

pub use apu::BUFFER_SIZE;
pub use emulator::Emulator;
pub use error::Error;
pub use frontend::{Frontend, MemAccessKind};
pub use info::{FREQUENCY, FREQUENCY_2X, SCREEN_RESOLUTION};
