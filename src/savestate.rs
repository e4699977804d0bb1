//! Versioned save-state blob: a short magic/version header followed by a
//! bincode-encoded snapshot of the whole `Cpu`. The `Cpu` owns the `Mmu`,
//! which owns the `Cartridge`, which owns the ROM image itself, so a
//! decoded state recovers the entire session, not just register values.

use bincode::config;

use crate::{cpu::Cpu, error::Error, log};

const MAGIC: &[u8; 9] = b"GBCSTATE\n";
const VERSION: u8 = 1;

pub(crate) fn encode(cpu: &Cpu) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(MAGIC);
    out.push(VERSION);
    out.extend(bincode::encode_to_vec(cpu, config::standard()).expect("in-memory encode"));
    out
}

pub(crate) fn decode(data: &[u8]) -> Result<Cpu, Error> {
    let header_len = MAGIC.len() + 1;
    if data.len() < header_len || &data[..MAGIC.len()] != MAGIC {
        log::warn("savestate: not a recognized save file");
        return Err(Error::StateLoadFailure);
    }
    if data[MAGIC.len()] != VERSION {
        log::warn("savestate: save file version is not supported");
        return Err(Error::StateLoadFailure);
    }

    bincode::decode_from_slice(&data[header_len..], config::standard())
        .map(|(cpu, _)| cpu)
        .map_err(|_| Error::StateLoadFailure)
}

/// Pulls the cartridge ROM back out of a save state without resuming the
/// rest of the session.
pub(crate) fn extract_rom(data: &[u8]) -> Result<Vec<u8>, Error> {
    decode(data).map(|cpu| cpu.mmu.cart.rom().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cartridge::Cartridge, mem::Mmu};

    fn sample_rom() -> Vec<u8> {
        let mut rom = vec![0u8; 2 * crate::info::SIZE_ROM_BANK];
        rom[crate::info::CART_LOGO].copy_from_slice(&crate::info::CART_LOGO_VAL);
        rom
    }

    #[test]
    fn round_trips_cpu_state() {
        let rom = sample_rom();
        let cart = Cartridge::new(&rom).unwrap();
        let cpu = Cpu::new(Mmu::new(cart, None));

        let blob = encode(&cpu);
        let restored = decode(&blob).unwrap();
        assert_eq!(restored.mmu.cart.rom(), cpu.mmu.cart.rom());
    }

    #[test]
    fn rejects_truncated_or_foreign_data() {
        assert_eq!(decode(b"not a save file"), Err(Error::StateLoadFailure));
    }

    #[test]
    fn extracts_rom_without_full_decode_failure() {
        let rom = sample_rom();
        let cart = Cartridge::new(&rom).unwrap();
        let cpu = Cpu::new(Mmu::new(cart, None));
        let blob = encode(&cpu);
        assert_eq!(extract_rom(&blob).unwrap(), rom);
    }
}
