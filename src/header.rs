//! ROM header inspection: checksums, logo, and the fields needed to pick a
//! mapper and allocate external RAM. Used only for diagnostics and at
//! cartridge-insert time, not on the hot path.

use crate::error::Error;
use crate::info::*;

#[derive(Debug, Clone)]
pub struct Header {
    pub title: String,
    pub manufacturer_code: String,
    pub is_cgb: bool,
    pub is_sgb: bool,
    pub mapper_id: u8,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
    pub version: u8,
    pub header_checksum: u8,
    pub global_checksum: u16,
}

/// `sum(bytes[0x134..=0x14C]) + header_byte[0x14D] == 0 (mod 256)`.
pub fn check_header_checksum(rom: &[u8]) -> bool {
    let sum = rom[0x134..=0x14C]
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_sub(b).wrapping_sub(1));
    sum == rom[CART_HEADER_CSUM]
}

/// Sum of every byte except the two global-checksum bytes themselves,
/// compared mod 65536 to the stored big-endian 16-bit checksum.
pub fn check_global_checksum(rom: &[u8]) -> bool {
    let (lo, hi) = (rom[*CART_GLOBAL_CSUM.start()], rom[*CART_GLOBAL_CSUM.end()]);
    let stored = u16::from_be_bytes([lo, hi]);

    let sum = rom
        .iter()
        .enumerate()
        .filter(|(i, _)| !CART_GLOBAL_CSUM.contains(i))
        .fold(0u16, |acc, (_, &b)| acc.wrapping_add(b as u16));

    sum == stored
}

/// Only the first 24 of the 48 logo bytes are checked by real hardware.
pub fn check_logo(rom: &[u8]) -> bool {
    rom[CART_LOGO][..CART_LOGO_CHECKED_LEN] == CART_LOGO_VAL[..CART_LOGO_CHECKED_LEN]
}

pub fn get_mapper(rom: &[u8]) -> Result<u8, Error> {
    let id = rom[CART_TYPE];
    match id {
        0x00 | 0x01..=0x03 | 0x05 | 0x06 | 0x08 | 0x09 | 0x0F..=0x13 | 0x19..=0x1E => Ok(id),
        _ => Err(Error::UnknownMapper),
    }
}

pub fn get_ram_size(rom: &[u8]) -> Result<usize, Error> {
    let code = rom[CART_RAM_SIZE] as usize;
    RAM_SIZE_KB_TABLE
        .get(code)
        .copied()
        .flatten()
        .map(|kb| kb * KB)
        .ok_or(Error::WrongRamSize)
}

pub fn get_header(rom: &[u8]) -> Header {
    let title_bytes = &rom[CART_TITLE];
    let title = String::from_utf8_lossy(title_bytes)
        .trim_end_matches('\0')
        .to_string();
    let manufacturer_code = String::from_utf8_lossy(&rom[0x13F..=0x142])
        .trim_end_matches('\0')
        .to_string();

    Header {
        title,
        manufacturer_code,
        is_cgb: matches!(rom[CART_CGB_FLAG], CART_CGB_TOO | CART_CGB_ONLY),
        is_sgb: rom[CART_SGB_FLAG] == 0x03,
        mapper_id: rom[CART_TYPE],
        rom_size_code: rom[CART_ROM_SIZE],
        ram_size_code: rom[CART_RAM_SIZE],
        version: rom[0x14C],
        header_checksum: rom[CART_HEADER_CSUM],
        global_checksum: u16::from_be_bytes([
            rom[*CART_GLOBAL_CSUM.start()],
            rom[*CART_GLOBAL_CSUM.end()],
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rom() -> Vec<u8> {
        let mut rom = vec![0u8; 2 * SIZE_ROM_BANK];
        rom[CART_LOGO].copy_from_slice(&CART_LOGO_VAL);
        rom[CART_TITLE]
            .iter_mut()
            .zip(b"NINTENDO\0GB\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0".iter())
            .for_each(|(d, s)| *d = *s);
        rom[CART_HEADER_CSUM] = 0x66;
        rom
    }

    #[test]
    fn header_checksum_known_vector() {
        let rom = sample_rom();
        assert!(check_header_checksum(&rom));
    }

    #[test]
    fn logo_check_matches_fixed_reference() {
        let rom = sample_rom();
        assert!(check_logo(&rom));
    }

    #[test]
    fn global_checksum_round_trips() {
        let mut rom = sample_rom();
        let sum: u16 = rom
            .iter()
            .enumerate()
            .filter(|(i, _)| !CART_GLOBAL_CSUM.contains(i))
            .fold(0u16, |acc, (_, &b)| acc.wrapping_add(b as u16));
        let bytes = sum.to_be_bytes();
        rom[*CART_GLOBAL_CSUM.start()] = bytes[0];
        rom[*CART_GLOBAL_CSUM.end()] = bytes[1];
        assert!(check_global_checksum(&rom));
    }

    #[test]
    fn unknown_mapper_id_is_rejected() {
        let mut rom = sample_rom();
        rom[CART_TYPE] = 0x20;
        assert_eq!(get_mapper(&rom), Err(Error::UnknownMapper));
    }
}
