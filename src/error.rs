//! Crate-level error taxonomy.
//!
//! Kept as a flat discriminated enum rather than one type per failure,
//! with a hand-written `Display`/`Error` impl instead of a derive crate.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Cartridge header names a mapper id we don't support.
    UnknownMapper,
    /// Nintendo logo bytes don't match the fixed reference pattern.
    WrongLogo,
    /// Header or global checksum doesn't match the stored value.
    WrongChecksum,
    /// RAM size byte in the header is out of the known table, or the
    /// mapper's RAM requirement doesn't match what the header declares.
    WrongRamSize,
    /// ROM byte length isn't a multiple of the 16 KiB bank size, or
    /// doesn't match the bank count implied by the header.
    WrongRomSize,
    /// Save-state blob failed a bounds check, had a bad magic, or its
    /// embedded checksum doesn't match.
    StateLoadFailure,
    /// Catch-all for conditions that should never occur (e.g. allocation
    /// failure on the cartridge-RAM path).
    InternalFatal,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::UnknownMapper => "unknown or unsupported mapper id",
            Error::WrongLogo => "Nintendo logo bytes did not match",
            Error::WrongChecksum => "header or global checksum mismatch",
            Error::WrongRamSize => "unknown or mismatched RAM size",
            Error::WrongRomSize => "ROM size does not match header/bank layout",
            Error::StateLoadFailure => "save state failed validation",
            Error::InternalFatal => "internal fatal error",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}
