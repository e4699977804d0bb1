//! Contains decoded instruction indexed by opcodes.
//! This provides us with constant time decoding given how
//! non-uniformly operands are encoded in different instructions and
//! have different number of cycles.
//! This does not require any complex logic to decode and is simple to understand.

use crate::cpu::isa::{Cond, Instruction, Arg, Mnemonic, Reg};

/// Builds a non-branching entry. The leading argument is always the
/// M-cycle count; branch-taken cycles just mirror it since the branch
/// never diverges from the unconditional path.
macro_rules! instr {
    ($mc:expr, $op:expr) => {
        Instruction {
            op: $op,
            op1: Arg::Absent,
            op2: Arg::Absent,
            mcycles: $mc,
            branch_mcycles: $mc,
        }
    };
    ($mc:expr, $op:expr, $op1:expr) => {
        Instruction {
            op: $op,
            op1: $op1,
            op2: Arg::Absent,
            mcycles: $mc,
            branch_mcycles: $mc,
        }
    };
    ($mc:expr, $op:expr, $op1:expr, $op2:expr) => {
        Instruction {
            op: $op,
            op1: $op1,
            op2: $op2,
            mcycles: $mc,
            branch_mcycles: $mc,
        }
    };
}

/// Builds an entry whose branch-taken cost differs from the fallthrough
/// cost (JR/JP/CALL/RET on a condition).
macro_rules! branch_instr {
    ($mc:expr, $bmc:expr, $op:expr, $op1:expr) => {
        Instruction {
            op: $op,
            op1: $op1,
            op2: Arg::Absent,
            mcycles: $mc,
            branch_mcycles: $bmc,
        }
    };
    ($mc:expr, $bmc:expr, $op:expr, $op1:expr, $op2:expr) => {
        Instruction {
            op: $op,
            op1: $op1,
            op2: $op2,
            mcycles: $mc,
            branch_mcycles: $bmc,
        }
    };
}

use Mnemonic::*;
type Op = Arg;

// Generated by: gen/genins.py
pub(crate) const OPCODE_TABLE: [Instruction; 256] = {
    let mut a = [instr!(1, Illegal); 256];
    a[0x00] = instr!(1, Nop); // #[4]
    a[0x01] = instr!(3, Ld, Op::Reg(Reg::BC), Op::U16(0)); // #[12]
    a[0x02] = instr!(2, Ld, Op::RegMem(Reg::BC), Op::Reg(Reg::A)); // #[8]
    a[0x03] = instr!(2, Inc, Op::Reg(Reg::BC)); // #[8]
    a[0x04] = instr!(1, Inc, Op::Reg(Reg::B)); // #[4]
    a[0x05] = instr!(1, Dec, Op::Reg(Reg::B)); // #[4]
    a[0x06] = instr!(2, Ld, Op::Reg(Reg::B), Op::U8(0)); // #[8]
    a[0x07] = instr!(1, Rlca); // #[4]
    a[0x08] = instr!(5, Ld, Op::A16(0), Op::Reg(Reg::SP)); // #[20]
    a[0x09] = instr!(2, Add, Op::Reg(Reg::HL), Op::Reg(Reg::BC)); // #[8]
    a[0x0A] = instr!(2, Ld, Op::Reg(Reg::A), Op::RegMem(Reg::BC)); // #[8]
    a[0x0B] = instr!(2, Dec, Op::Reg(Reg::BC)); // #[8]
    a[0x0C] = instr!(1, Inc, Op::Reg(Reg::C)); // #[4]
    a[0x0D] = instr!(1, Dec, Op::Reg(Reg::C)); // #[4]
    a[0x0E] = instr!(2, Ld, Op::Reg(Reg::C), Op::U8(0)); // #[8]
    a[0x0F] = instr!(1, Rrca); // #[4]
    a[0x10] = instr!(1, Stop, Op::U8(0)); // #[4]
    a[0x11] = instr!(3, Ld, Op::Reg(Reg::DE), Op::U16(0)); // #[12]
    a[0x12] = instr!(2, Ld, Op::RegMem(Reg::DE), Op::Reg(Reg::A)); // #[8]
    a[0x13] = instr!(2, Inc, Op::Reg(Reg::DE)); // #[8]
    a[0x14] = instr!(1, Inc, Op::Reg(Reg::D)); // #[4]
    a[0x15] = instr!(1, Dec, Op::Reg(Reg::D)); // #[4]
    a[0x16] = instr!(2, Ld, Op::Reg(Reg::D), Op::U8(0)); // #[8]
    a[0x17] = instr!(1, Rla); // #[4]
    a[0x18] = instr!(3, Jr, Op::I8(0)); // #[12]
    a[0x19] = instr!(2, Add, Op::Reg(Reg::HL), Op::Reg(Reg::DE)); // #[8]
    a[0x1A] = instr!(2, Ld, Op::Reg(Reg::A), Op::RegMem(Reg::DE)); // #[8]
    a[0x1B] = instr!(2, Dec, Op::Reg(Reg::DE)); // #[8]
    a[0x1C] = instr!(1, Inc, Op::Reg(Reg::E)); // #[4]
    a[0x1D] = instr!(1, Dec, Op::Reg(Reg::E)); // #[4]
    a[0x1E] = instr!(2, Ld, Op::Reg(Reg::E), Op::U8(0)); // #[8]
    a[0x1F] = instr!(1, Rra); // #[4]
    a[0x20] = branch_instr!(2, 3, Jr, Op::Cond(Cond::NZ), Op::I8(0)); // #[12, 8]
    a[0x21] = instr!(3, Ld, Op::Reg(Reg::HL), Op::U16(0)); // #[12]
    a[0x22] = instr!(2, Ld, Op::RegMem(Reg::HLinc), Op::Reg(Reg::A)); // #[8]
    a[0x23] = instr!(2, Inc, Op::Reg(Reg::HL)); // #[8]
    a[0x24] = instr!(1, Inc, Op::Reg(Reg::H)); // #[4]
    a[0x25] = instr!(1, Dec, Op::Reg(Reg::H)); // #[4]
    a[0x26] = instr!(2, Ld, Op::Reg(Reg::H), Op::U8(0)); // #[8]
    a[0x27] = instr!(1, Daa); // #[4]
    a[0x28] = branch_instr!(2, 3, Jr, Op::Cond(Cond::Z), Op::I8(0)); // #[12, 8]
    a[0x29] = instr!(2, Add, Op::Reg(Reg::HL), Op::Reg(Reg::HL)); // #[8]
    a[0x2A] = instr!(2, Ld, Op::Reg(Reg::A), Op::RegMem(Reg::HLinc)); // #[8]
    a[0x2B] = instr!(2, Dec, Op::Reg(Reg::HL)); // #[8]
    a[0x2C] = instr!(1, Inc, Op::Reg(Reg::L)); // #[4]
    a[0x2D] = instr!(1, Dec, Op::Reg(Reg::L)); // #[4]
    a[0x2E] = instr!(2, Ld, Op::Reg(Reg::L), Op::U8(0)); // #[8]
    a[0x2F] = instr!(1, Cpl); // #[4]
    a[0x30] = branch_instr!(2, 3, Jr, Op::Cond(Cond::NC), Op::I8(0)); // #[12, 8]
    a[0x31] = instr!(3, Ld, Op::Reg(Reg::SP), Op::U16(0)); // #[12]
    a[0x32] = instr!(2, Ld, Op::RegMem(Reg::HLdec), Op::Reg(Reg::A)); // #[8]
    a[0x33] = instr!(2, Inc, Op::Reg(Reg::SP)); // #[8]
    a[0x34] = instr!(3, Inc, Op::RegMem(Reg::HL)); // #[12]
    a[0x35] = instr!(3, Dec, Op::RegMem(Reg::HL)); // #[12]
    a[0x36] = instr!(3, Ld, Op::RegMem(Reg::HL), Op::U8(0)); // #[12]
    a[0x37] = instr!(1, Scf); // #[4]
    a[0x38] = branch_instr!(2, 3, Jr, Op::Cond(Cond::C), Op::I8(0)); // #[12, 8]
    a[0x39] = instr!(2, Add, Op::Reg(Reg::HL), Op::Reg(Reg::SP)); // #[8]
    a[0x3A] = instr!(2, Ld, Op::Reg(Reg::A), Op::RegMem(Reg::HLdec)); // #[8]
    a[0x3B] = instr!(2, Dec, Op::Reg(Reg::SP)); // #[8]
    a[0x3C] = instr!(1, Inc, Op::Reg(Reg::A)); // #[4]
    a[0x3D] = instr!(1, Dec, Op::Reg(Reg::A)); // #[4]
    a[0x3E] = instr!(2, Ld, Op::Reg(Reg::A), Op::U8(0)); // #[8]
    a[0x3F] = instr!(1, Ccf); // #[4]
    a[0x40] = instr!(1, Ld, Op::Reg(Reg::B), Op::Reg(Reg::B)); // #[4]
    a[0x41] = instr!(1, Ld, Op::Reg(Reg::B), Op::Reg(Reg::C)); // #[4]
    a[0x42] = instr!(1, Ld, Op::Reg(Reg::B), Op::Reg(Reg::D)); // #[4]
    a[0x43] = instr!(1, Ld, Op::Reg(Reg::B), Op::Reg(Reg::E)); // #[4]
    a[0x44] = instr!(1, Ld, Op::Reg(Reg::B), Op::Reg(Reg::H)); // #[4]
    a[0x45] = instr!(1, Ld, Op::Reg(Reg::B), Op::Reg(Reg::L)); // #[4]
    a[0x46] = instr!(2, Ld, Op::Reg(Reg::B), Op::RegMem(Reg::HL)); // #[8]
    a[0x47] = instr!(1, Ld, Op::Reg(Reg::B), Op::Reg(Reg::A)); // #[4]
    a[0x48] = instr!(1, Ld, Op::Reg(Reg::C), Op::Reg(Reg::B)); // #[4]
    a[0x49] = instr!(1, Ld, Op::Reg(Reg::C), Op::Reg(Reg::C)); // #[4]
    a[0x4A] = instr!(1, Ld, Op::Reg(Reg::C), Op::Reg(Reg::D)); // #[4]
    a[0x4B] = instr!(1, Ld, Op::Reg(Reg::C), Op::Reg(Reg::E)); // #[4]
    a[0x4C] = instr!(1, Ld, Op::Reg(Reg::C), Op::Reg(Reg::H)); // #[4]
    a[0x4D] = instr!(1, Ld, Op::Reg(Reg::C), Op::Reg(Reg::L)); // #[4]
    a[0x4E] = instr!(2, Ld, Op::Reg(Reg::C), Op::RegMem(Reg::HL)); // #[8]
    a[0x4F] = instr!(1, Ld, Op::Reg(Reg::C), Op::Reg(Reg::A)); // #[4]
    a[0x50] = instr!(1, Ld, Op::Reg(Reg::D), Op::Reg(Reg::B)); // #[4]
    a[0x51] = instr!(1, Ld, Op::Reg(Reg::D), Op::Reg(Reg::C)); // #[4]
    a[0x52] = instr!(1, Ld, Op::Reg(Reg::D), Op::Reg(Reg::D)); // #[4]
    a[0x53] = instr!(1, Ld, Op::Reg(Reg::D), Op::Reg(Reg::E)); // #[4]
    a[0x54] = instr!(1, Ld, Op::Reg(Reg::D), Op::Reg(Reg::H)); // #[4]
    a[0x55] = instr!(1, Ld, Op::Reg(Reg::D), Op::Reg(Reg::L)); // #[4]
    a[0x56] = instr!(2, Ld, Op::Reg(Reg::D), Op::RegMem(Reg::HL)); // #[8]
    a[0x57] = instr!(1, Ld, Op::Reg(Reg::D), Op::Reg(Reg::A)); // #[4]
    a[0x58] = instr!(1, Ld, Op::Reg(Reg::E), Op::Reg(Reg::B)); // #[4]
    a[0x59] = instr!(1, Ld, Op::Reg(Reg::E), Op::Reg(Reg::C)); // #[4]
    a[0x5A] = instr!(1, Ld, Op::Reg(Reg::E), Op::Reg(Reg::D)); // #[4]
    a[0x5B] = instr!(1, Ld, Op::Reg(Reg::E), Op::Reg(Reg::E)); // #[4]
    a[0x5C] = instr!(1, Ld, Op::Reg(Reg::E), Op::Reg(Reg::H)); // #[4]
    a[0x5D] = instr!(1, Ld, Op::Reg(Reg::E), Op::Reg(Reg::L)); // #[4]
    a[0x5E] = instr!(2, Ld, Op::Reg(Reg::E), Op::RegMem(Reg::HL)); // #[8]
    a[0x5F] = instr!(1, Ld, Op::Reg(Reg::E), Op::Reg(Reg::A)); // #[4]
    a[0x60] = instr!(1, Ld, Op::Reg(Reg::H), Op::Reg(Reg::B)); // #[4]
    a[0x61] = instr!(1, Ld, Op::Reg(Reg::H), Op::Reg(Reg::C)); // #[4]
    a[0x62] = instr!(1, Ld, Op::Reg(Reg::H), Op::Reg(Reg::D)); // #[4]
    a[0x63] = instr!(1, Ld, Op::Reg(Reg::H), Op::Reg(Reg::E)); // #[4]
    a[0x64] = instr!(1, Ld, Op::Reg(Reg::H), Op::Reg(Reg::H)); // #[4]
    a[0x65] = instr!(1, Ld, Op::Reg(Reg::H), Op::Reg(Reg::L)); // #[4]
    a[0x66] = instr!(2, Ld, Op::Reg(Reg::H), Op::RegMem(Reg::HL)); // #[8]
    a[0x67] = instr!(1, Ld, Op::Reg(Reg::H), Op::Reg(Reg::A)); // #[4]
    a[0x68] = instr!(1, Ld, Op::Reg(Reg::L), Op::Reg(Reg::B)); // #[4]
    a[0x69] = instr!(1, Ld, Op::Reg(Reg::L), Op::Reg(Reg::C)); // #[4]
    a[0x6A] = instr!(1, Ld, Op::Reg(Reg::L), Op::Reg(Reg::D)); // #[4]
    a[0x6B] = instr!(1, Ld, Op::Reg(Reg::L), Op::Reg(Reg::E)); // #[4]
    a[0x6C] = instr!(1, Ld, Op::Reg(Reg::L), Op::Reg(Reg::H)); // #[4]
    a[0x6D] = instr!(1, Ld, Op::Reg(Reg::L), Op::Reg(Reg::L)); // #[4]
    a[0x6E] = instr!(2, Ld, Op::Reg(Reg::L), Op::RegMem(Reg::HL)); // #[8]
    a[0x6F] = instr!(1, Ld, Op::Reg(Reg::L), Op::Reg(Reg::A)); // #[4]
    a[0x70] = instr!(2, Ld, Op::RegMem(Reg::HL), Op::Reg(Reg::B)); // #[8]
    a[0x71] = instr!(2, Ld, Op::RegMem(Reg::HL), Op::Reg(Reg::C)); // #[8]
    a[0x72] = instr!(2, Ld, Op::RegMem(Reg::HL), Op::Reg(Reg::D)); // #[8]
    a[0x73] = instr!(2, Ld, Op::RegMem(Reg::HL), Op::Reg(Reg::E)); // #[8]
    a[0x74] = instr!(2, Ld, Op::RegMem(Reg::HL), Op::Reg(Reg::H)); // #[8]
    a[0x75] = instr!(2, Ld, Op::RegMem(Reg::HL), Op::Reg(Reg::L)); // #[8]
    a[0x76] = instr!(1, Halt); // #[4]
    a[0x77] = instr!(2, Ld, Op::RegMem(Reg::HL), Op::Reg(Reg::A)); // #[8]
    a[0x78] = instr!(1, Ld, Op::Reg(Reg::A), Op::Reg(Reg::B)); // #[4]
    a[0x79] = instr!(1, Ld, Op::Reg(Reg::A), Op::Reg(Reg::C)); // #[4]
    a[0x7A] = instr!(1, Ld, Op::Reg(Reg::A), Op::Reg(Reg::D)); // #[4]
    a[0x7B] = instr!(1, Ld, Op::Reg(Reg::A), Op::Reg(Reg::E)); // #[4]
    a[0x7C] = instr!(1, Ld, Op::Reg(Reg::A), Op::Reg(Reg::H)); // #[4]
    a[0x7D] = instr!(1, Ld, Op::Reg(Reg::A), Op::Reg(Reg::L)); // #[4]
    a[0x7E] = instr!(2, Ld, Op::Reg(Reg::A), Op::RegMem(Reg::HL)); // #[8]
    a[0x7F] = instr!(1, Ld, Op::Reg(Reg::A), Op::Reg(Reg::A)); // #[4]
    a[0x80] = instr!(1, Add, Op::Reg(Reg::A), Op::Reg(Reg::B)); // #[4]
    a[0x81] = instr!(1, Add, Op::Reg(Reg::A), Op::Reg(Reg::C)); // #[4]
    a[0x82] = instr!(1, Add, Op::Reg(Reg::A), Op::Reg(Reg::D)); // #[4]
    a[0x83] = instr!(1, Add, Op::Reg(Reg::A), Op::Reg(Reg::E)); // #[4]
    a[0x84] = instr!(1, Add, Op::Reg(Reg::A), Op::Reg(Reg::H)); // #[4]
    a[0x85] = instr!(1, Add, Op::Reg(Reg::A), Op::Reg(Reg::L)); // #[4]
    a[0x86] = instr!(2, Add, Op::Reg(Reg::A), Op::RegMem(Reg::HL)); // #[8]
    a[0x87] = instr!(1, Add, Op::Reg(Reg::A), Op::Reg(Reg::A)); // #[4]
    a[0x88] = instr!(1, Adc, Op::Reg(Reg::A), Op::Reg(Reg::B)); // #[4]
    a[0x89] = instr!(1, Adc, Op::Reg(Reg::A), Op::Reg(Reg::C)); // #[4]
    a[0x8A] = instr!(1, Adc, Op::Reg(Reg::A), Op::Reg(Reg::D)); // #[4]
    a[0x8B] = instr!(1, Adc, Op::Reg(Reg::A), Op::Reg(Reg::E)); // #[4]
    a[0x8C] = instr!(1, Adc, Op::Reg(Reg::A), Op::Reg(Reg::H)); // #[4]
    a[0x8D] = instr!(1, Adc, Op::Reg(Reg::A), Op::Reg(Reg::L)); // #[4]
    a[0x8E] = instr!(2, Adc, Op::Reg(Reg::A), Op::RegMem(Reg::HL)); // #[8]
    a[0x8F] = instr!(1, Adc, Op::Reg(Reg::A), Op::Reg(Reg::A)); // #[4]
    a[0x90] = instr!(1, Sub, Op::Reg(Reg::A), Op::Reg(Reg::B)); // #[4]
    a[0x91] = instr!(1, Sub, Op::Reg(Reg::A), Op::Reg(Reg::C)); // #[4]
    a[0x92] = instr!(1, Sub, Op::Reg(Reg::A), Op::Reg(Reg::D)); // #[4]
    a[0x93] = instr!(1, Sub, Op::Reg(Reg::A), Op::Reg(Reg::E)); // #[4]
    a[0x94] = instr!(1, Sub, Op::Reg(Reg::A), Op::Reg(Reg::H)); // #[4]
    a[0x95] = instr!(1, Sub, Op::Reg(Reg::A), Op::Reg(Reg::L)); // #[4]
    a[0x96] = instr!(2, Sub, Op::Reg(Reg::A), Op::RegMem(Reg::HL)); // #[8]
    a[0x97] = instr!(1, Sub, Op::Reg(Reg::A), Op::Reg(Reg::A)); // #[4]
    a[0x98] = instr!(1, Sbc, Op::Reg(Reg::A), Op::Reg(Reg::B)); // #[4]
    a[0x99] = instr!(1, Sbc, Op::Reg(Reg::A), Op::Reg(Reg::C)); // #[4]
    a[0x9A] = instr!(1, Sbc, Op::Reg(Reg::A), Op::Reg(Reg::D)); // #[4]
    a[0x9B] = instr!(1, Sbc, Op::Reg(Reg::A), Op::Reg(Reg::E)); // #[4]
    a[0x9C] = instr!(1, Sbc, Op::Reg(Reg::A), Op::Reg(Reg::H)); // #[4]
    a[0x9D] = instr!(1, Sbc, Op::Reg(Reg::A), Op::Reg(Reg::L)); // #[4]
    a[0x9E] = instr!(2, Sbc, Op::Reg(Reg::A), Op::RegMem(Reg::HL)); // #[8]
    a[0x9F] = instr!(1, Sbc, Op::Reg(Reg::A), Op::Reg(Reg::A)); // #[4]
    a[0xA0] = instr!(1, And, Op::Reg(Reg::A), Op::Reg(Reg::B)); // #[4]
    a[0xA1] = instr!(1, And, Op::Reg(Reg::A), Op::Reg(Reg::C)); // #[4]
    a[0xA2] = instr!(1, And, Op::Reg(Reg::A), Op::Reg(Reg::D)); // #[4]
    a[0xA3] = instr!(1, And, Op::Reg(Reg::A), Op::Reg(Reg::E)); // #[4]
    a[0xA4] = instr!(1, And, Op::Reg(Reg::A), Op::Reg(Reg::H)); // #[4]
    a[0xA5] = instr!(1, And, Op::Reg(Reg::A), Op::Reg(Reg::L)); // #[4]
    a[0xA6] = instr!(2, And, Op::Reg(Reg::A), Op::RegMem(Reg::HL)); // #[8]
    a[0xA7] = instr!(1, And, Op::Reg(Reg::A), Op::Reg(Reg::A)); // #[4]
    a[0xA8] = instr!(1, Xor, Op::Reg(Reg::A), Op::Reg(Reg::B)); // #[4]
    a[0xA9] = instr!(1, Xor, Op::Reg(Reg::A), Op::Reg(Reg::C)); // #[4]
    a[0xAA] = instr!(1, Xor, Op::Reg(Reg::A), Op::Reg(Reg::D)); // #[4]
    a[0xAB] = instr!(1, Xor, Op::Reg(Reg::A), Op::Reg(Reg::E)); // #[4]
    a[0xAC] = instr!(1, Xor, Op::Reg(Reg::A), Op::Reg(Reg::H)); // #[4]
    a[0xAD] = instr!(1, Xor, Op::Reg(Reg::A), Op::Reg(Reg::L)); // #[4]
    a[0xAE] = instr!(2, Xor, Op::Reg(Reg::A), Op::RegMem(Reg::HL)); // #[8]
    a[0xAF] = instr!(1, Xor, Op::Reg(Reg::A), Op::Reg(Reg::A)); // #[4]
    a[0xB0] = instr!(1, Or, Op::Reg(Reg::A), Op::Reg(Reg::B)); // #[4]
    a[0xB1] = instr!(1, Or, Op::Reg(Reg::A), Op::Reg(Reg::C)); // #[4]
    a[0xB2] = instr!(1, Or, Op::Reg(Reg::A), Op::Reg(Reg::D)); // #[4]
    a[0xB3] = instr!(1, Or, Op::Reg(Reg::A), Op::Reg(Reg::E)); // #[4]
    a[0xB4] = instr!(1, Or, Op::Reg(Reg::A), Op::Reg(Reg::H)); // #[4]
    a[0xB5] = instr!(1, Or, Op::Reg(Reg::A), Op::Reg(Reg::L)); // #[4]
    a[0xB6] = instr!(2, Or, Op::Reg(Reg::A), Op::RegMem(Reg::HL)); // #[8]
    a[0xB7] = instr!(1, Or, Op::Reg(Reg::A), Op::Reg(Reg::A)); // #[4]
    a[0xB8] = instr!(1, Cp, Op::Reg(Reg::A), Op::Reg(Reg::B)); // #[4]
    a[0xB9] = instr!(1, Cp, Op::Reg(Reg::A), Op::Reg(Reg::C)); // #[4]
    a[0xBA] = instr!(1, Cp, Op::Reg(Reg::A), Op::Reg(Reg::D)); // #[4]
    a[0xBB] = instr!(1, Cp, Op::Reg(Reg::A), Op::Reg(Reg::E)); // #[4]
    a[0xBC] = instr!(1, Cp, Op::Reg(Reg::A), Op::Reg(Reg::H)); // #[4]
    a[0xBD] = instr!(1, Cp, Op::Reg(Reg::A), Op::Reg(Reg::L)); // #[4]
    a[0xBE] = instr!(2, Cp, Op::Reg(Reg::A), Op::RegMem(Reg::HL)); // #[8]
    a[0xBF] = instr!(1, Cp, Op::Reg(Reg::A), Op::Reg(Reg::A)); // #[4]
    a[0xC0] = branch_instr!(2, 5, Ret, Op::Cond(Cond::NZ)); // #[20, 8]
    a[0xC1] = instr!(3, Pop, Op::Reg(Reg::BC)); // #[12]
    a[0xC2] = branch_instr!(3, 4, Jp, Op::Cond(Cond::NZ), Op::U16(0)); // #[16, 12]
    a[0xC3] = instr!(4, Jp, Op::U16(0)); // #[16]
    a[0xC4] = branch_instr!(3, 6, Call, Op::Cond(Cond::NZ), Op::U16(0)); // #[24, 12]
    a[0xC5] = instr!(4, Push, Op::Reg(Reg::BC)); // #[16]
    a[0xC6] = instr!(2, Add, Op::Reg(Reg::A), Op::U8(0)); // #[8]
    a[0xC7] = instr!(4, Rst, Op::Tgt(0x00)); // #[16]
    a[0xC8] = branch_instr!(2, 5, Ret, Op::Cond(Cond::Z)); // #[20, 8]
    a[0xC9] = instr!(4, Ret); // #[16]
    a[0xCA] = branch_instr!(3, 4, Jp, Op::Cond(Cond::Z), Op::U16(0)); // #[16, 12]
    a[0xCB] = instr!(1, Prefix); // #[4]
    a[0xCC] = branch_instr!(3, 6, Call, Op::Cond(Cond::Z), Op::U16(0)); // #[24, 12]
    a[0xCD] = instr!(6, Call, Op::U16(0)); // #[24]
    a[0xCE] = instr!(2, Adc, Op::Reg(Reg::A), Op::U8(0)); // #[8]
    a[0xCF] = instr!(4, Rst, Op::Tgt(0x08)); // #[16]
    a[0xD0] = branch_instr!(2, 5, Ret, Op::Cond(Cond::NC)); // #[20, 8]
    a[0xD1] = instr!(3, Pop, Op::Reg(Reg::DE)); // #[12]
    a[0xD2] = branch_instr!(3, 4, Jp, Op::Cond(Cond::NC), Op::U16(0)); // #[16, 12]
    a[0xD3] = instr!(1, Illegal); // #[4]
    a[0xD4] = branch_instr!(3, 6, Call, Op::Cond(Cond::NC), Op::U16(0)); // #[24, 12]
    a[0xD5] = instr!(4, Push, Op::Reg(Reg::DE)); // #[16]
    a[0xD6] = instr!(2, Sub, Op::Reg(Reg::A), Op::U8(0)); // #[8]
    a[0xD7] = instr!(4, Rst, Op::Tgt(0x10)); // #[16]
    a[0xD8] = branch_instr!(2, 5, Ret, Op::Cond(Cond::C)); // #[20, 8]
    a[0xD9] = instr!(4, Reti); // #[16]
    a[0xDA] = branch_instr!(3, 4, Jp, Op::Cond(Cond::C), Op::U16(0)); // #[16, 12]
    a[0xDB] = instr!(1, Illegal); // #[4]
    a[0xDC] = branch_instr!(3, 6, Call, Op::Cond(Cond::C), Op::U16(0)); // #[24, 12]
    a[0xDD] = instr!(1, Illegal); // #[4]
    a[0xDE] = instr!(2, Sbc, Op::Reg(Reg::A), Op::U8(0)); // #[8]
    a[0xDF] = instr!(4, Rst, Op::Tgt(0x18)); // #[16]
    a[0xE0] = instr!(3, Ldh, Op::A8(0), Op::Reg(Reg::A)); // #[12]
    a[0xE1] = instr!(3, Pop, Op::Reg(Reg::HL)); // #[12]
    a[0xE2] = instr!(2, Ld, Op::RegMem(Reg::C), Op::Reg(Reg::A)); // #[8]
    a[0xE3] = instr!(1, Illegal); // #[4]
    a[0xE4] = instr!(1, Illegal); // #[4]
    a[0xE5] = instr!(4, Push, Op::Reg(Reg::HL)); // #[16]
    a[0xE6] = instr!(2, And, Op::Reg(Reg::A), Op::U8(0)); // #[8]
    a[0xE7] = instr!(4, Rst, Op::Tgt(0x20)); // #[16]
    a[0xE8] = instr!(4, Add, Op::Reg(Reg::SP), Op::I8(0)); // #[16]
    a[0xE9] = instr!(1, Jp, Op::Reg(Reg::HL)); // #[4]
    a[0xEA] = instr!(4, Ld, Op::A16(0), Op::Reg(Reg::A)); // #[16]
    a[0xEB] = instr!(1, Illegal); // #[4]
    a[0xEC] = instr!(1, Illegal); // #[4]
    a[0xED] = instr!(1, Illegal); // #[4]
    a[0xEE] = instr!(2, Xor, Op::Reg(Reg::A), Op::U8(0)); // #[8]
    a[0xEF] = instr!(4, Rst, Op::Tgt(0x28)); // #[16]
    a[0xF0] = instr!(3, Ldh, Op::Reg(Reg::A), Op::A8(0)); // #[12]
    a[0xF1] = instr!(3, Pop, Op::Reg(Reg::AF)); // #[12]
    a[0xF2] = instr!(2, Ld, Op::Reg(Reg::A), Op::RegMem(Reg::C)); // #[8]
    a[0xF3] = instr!(1, Di); // #[4]
    a[0xF4] = instr!(1, Illegal); // #[4]
    a[0xF5] = instr!(4, Push, Op::Reg(Reg::AF)); // #[16]
    a[0xF6] = instr!(2, Or, Op::Reg(Reg::A), Op::U8(0)); // #[8]
    a[0xF7] = instr!(4, Rst, Op::Tgt(0x30)); // #[16]
    a[0xF8] = instr!(3, Ld, Op::Reg(Reg::HL), Op::SPplusI8(0)); // #[12]
    a[0xF9] = instr!(2, Ld, Op::Reg(Reg::SP), Op::Reg(Reg::HL)); // #[8]
    a[0xFA] = instr!(4, Ld, Op::Reg(Reg::A), Op::A16(0)); // #[16]
    a[0xFB] = instr!(1, Ei); // #[4]
    a[0xFC] = instr!(1, Illegal); // #[4]
    a[0xFD] = instr!(1, Illegal); // #[4]
    a[0xFE] = instr!(2, Cp, Op::Reg(Reg::A), Op::U8(0)); // #[8]
    a[0xFF] = instr!(4, Rst, Op::Tgt(0x38)); // #[16]

    a
};

// Generated by: gen/genins.py
pub(crate) const CB_OPCODE_TABLE: [Instruction; 256] = {
    let mut a = [instr!(1, Illegal); 256];
    a[0x00] = instr!(2, Rlc, Op::Reg(Reg::B)); // #[8]
    a[0x01] = instr!(2, Rlc, Op::Reg(Reg::C)); // #[8]
    a[0x02] = instr!(2, Rlc, Op::Reg(Reg::D)); // #[8]
    a[0x03] = instr!(2, Rlc, Op::Reg(Reg::E)); // #[8]
    a[0x04] = instr!(2, Rlc, Op::Reg(Reg::H)); // #[8]
    a[0x05] = instr!(2, Rlc, Op::Reg(Reg::L)); // #[8]
    a[0x06] = instr!(4, Rlc, Op::RegMem(Reg::HL)); // #[16]
    a[0x07] = instr!(2, Rlc, Op::Reg(Reg::A)); // #[8]
    a[0x08] = instr!(2, Rrc, Op::Reg(Reg::B)); // #[8]
    a[0x09] = instr!(2, Rrc, Op::Reg(Reg::C)); // #[8]
    a[0x0A] = instr!(2, Rrc, Op::Reg(Reg::D)); // #[8]
    a[0x0B] = instr!(2, Rrc, Op::Reg(Reg::E)); // #[8]
    a[0x0C] = instr!(2, Rrc, Op::Reg(Reg::H)); // #[8]
    a[0x0D] = instr!(2, Rrc, Op::Reg(Reg::L)); // #[8]
    a[0x0E] = instr!(4, Rrc, Op::RegMem(Reg::HL)); // #[16]
    a[0x0F] = instr!(2, Rrc, Op::Reg(Reg::A)); // #[8]
    a[0x10] = instr!(2, Rl, Op::Reg(Reg::B)); // #[8]
    a[0x11] = instr!(2, Rl, Op::Reg(Reg::C)); // #[8]
    a[0x12] = instr!(2, Rl, Op::Reg(Reg::D)); // #[8]
    a[0x13] = instr!(2, Rl, Op::Reg(Reg::E)); // #[8]
    a[0x14] = instr!(2, Rl, Op::Reg(Reg::H)); // #[8]
    a[0x15] = instr!(2, Rl, Op::Reg(Reg::L)); // #[8]
    a[0x16] = instr!(4, Rl, Op::RegMem(Reg::HL)); // #[16]
    a[0x17] = instr!(2, Rl, Op::Reg(Reg::A)); // #[8]
    a[0x18] = instr!(2, Rr, Op::Reg(Reg::B)); // #[8]
    a[0x19] = instr!(2, Rr, Op::Reg(Reg::C)); // #[8]
    a[0x1A] = instr!(2, Rr, Op::Reg(Reg::D)); // #[8]
    a[0x1B] = instr!(2, Rr, Op::Reg(Reg::E)); // #[8]
    a[0x1C] = instr!(2, Rr, Op::Reg(Reg::H)); // #[8]
    a[0x1D] = instr!(2, Rr, Op::Reg(Reg::L)); // #[8]
    a[0x1E] = instr!(4, Rr, Op::RegMem(Reg::HL)); // #[16]
    a[0x1F] = instr!(2, Rr, Op::Reg(Reg::A)); // #[8]
    a[0x20] = instr!(2, Sla, Op::Reg(Reg::B)); // #[8]
    a[0x21] = instr!(2, Sla, Op::Reg(Reg::C)); // #[8]
    a[0x22] = instr!(2, Sla, Op::Reg(Reg::D)); // #[8]
    a[0x23] = instr!(2, Sla, Op::Reg(Reg::E)); // #[8]
    a[0x24] = instr!(2, Sla, Op::Reg(Reg::H)); // #[8]
    a[0x25] = instr!(2, Sla, Op::Reg(Reg::L)); // #[8]
    a[0x26] = instr!(4, Sla, Op::RegMem(Reg::HL)); // #[16]
    a[0x27] = instr!(2, Sla, Op::Reg(Reg::A)); // #[8]
    a[0x28] = instr!(2, Sra, Op::Reg(Reg::B)); // #[8]
    a[0x29] = instr!(2, Sra, Op::Reg(Reg::C)); // #[8]
    a[0x2A] = instr!(2, Sra, Op::Reg(Reg::D)); // #[8]
    a[0x2B] = instr!(2, Sra, Op::Reg(Reg::E)); // #[8]
    a[0x2C] = instr!(2, Sra, Op::Reg(Reg::H)); // #[8]
    a[0x2D] = instr!(2, Sra, Op::Reg(Reg::L)); // #[8]
    a[0x2E] = instr!(4, Sra, Op::RegMem(Reg::HL)); // #[16]
    a[0x2F] = instr!(2, Sra, Op::Reg(Reg::A)); // #[8]
    a[0x30] = instr!(2, Swap, Op::Reg(Reg::B)); // #[8]
    a[0x31] = instr!(2, Swap, Op::Reg(Reg::C)); // #[8]
    a[0x32] = instr!(2, Swap, Op::Reg(Reg::D)); // #[8]
    a[0x33] = instr!(2, Swap, Op::Reg(Reg::E)); // #[8]
    a[0x34] = instr!(2, Swap, Op::Reg(Reg::H)); // #[8]
    a[0x35] = instr!(2, Swap, Op::Reg(Reg::L)); // #[8]
    a[0x36] = instr!(4, Swap, Op::RegMem(Reg::HL)); // #[16]
    a[0x37] = instr!(2, Swap, Op::Reg(Reg::A)); // #[8]
    a[0x38] = instr!(2, Srl, Op::Reg(Reg::B)); // #[8]
    a[0x39] = instr!(2, Srl, Op::Reg(Reg::C)); // #[8]
    a[0x3A] = instr!(2, Srl, Op::Reg(Reg::D)); // #[8]
    a[0x3B] = instr!(2, Srl, Op::Reg(Reg::E)); // #[8]
    a[0x3C] = instr!(2, Srl, Op::Reg(Reg::H)); // #[8]
    a[0x3D] = instr!(2, Srl, Op::Reg(Reg::L)); // #[8]
    a[0x3E] = instr!(4, Srl, Op::RegMem(Reg::HL)); // #[16]
    a[0x3F] = instr!(2, Srl, Op::Reg(Reg::A)); // #[8]
    a[0x40] = instr!(2, Bit, Op::B3(0), Op::Reg(Reg::B)); // #[8]
    a[0x41] = instr!(2, Bit, Op::B3(0), Op::Reg(Reg::C)); // #[8]
    a[0x42] = instr!(2, Bit, Op::B3(0), Op::Reg(Reg::D)); // #[8]
    a[0x43] = instr!(2, Bit, Op::B3(0), Op::Reg(Reg::E)); // #[8]
    a[0x44] = instr!(2, Bit, Op::B3(0), Op::Reg(Reg::H)); // #[8]
    a[0x45] = instr!(2, Bit, Op::B3(0), Op::Reg(Reg::L)); // #[8]
    a[0x46] = instr!(3, Bit, Op::B3(0), Op::RegMem(Reg::HL)); // #[12]
    a[0x47] = instr!(2, Bit, Op::B3(0), Op::Reg(Reg::A)); // #[8]
    a[0x48] = instr!(2, Bit, Op::B3(1), Op::Reg(Reg::B)); // #[8]
    a[0x49] = instr!(2, Bit, Op::B3(1), Op::Reg(Reg::C)); // #[8]
    a[0x4A] = instr!(2, Bit, Op::B3(1), Op::Reg(Reg::D)); // #[8]
    a[0x4B] = instr!(2, Bit, Op::B3(1), Op::Reg(Reg::E)); // #[8]
    a[0x4C] = instr!(2, Bit, Op::B3(1), Op::Reg(Reg::H)); // #[8]
    a[0x4D] = instr!(2, Bit, Op::B3(1), Op::Reg(Reg::L)); // #[8]
    a[0x4E] = instr!(3, Bit, Op::B3(1), Op::RegMem(Reg::HL)); // #[12]
    a[0x4F] = instr!(2, Bit, Op::B3(1), Op::Reg(Reg::A)); // #[8]
    a[0x50] = instr!(2, Bit, Op::B3(2), Op::Reg(Reg::B)); // #[8]
    a[0x51] = instr!(2, Bit, Op::B3(2), Op::Reg(Reg::C)); // #[8]
    a[0x52] = instr!(2, Bit, Op::B3(2), Op::Reg(Reg::D)); // #[8]
    a[0x53] = instr!(2, Bit, Op::B3(2), Op::Reg(Reg::E)); // #[8]
    a[0x54] = instr!(2, Bit, Op::B3(2), Op::Reg(Reg::H)); // #[8]
    a[0x55] = instr!(2, Bit, Op::B3(2), Op::Reg(Reg::L)); // #[8]
    a[0x56] = instr!(3, Bit, Op::B3(2), Op::RegMem(Reg::HL)); // #[12]
    a[0x57] = instr!(2, Bit, Op::B3(2), Op::Reg(Reg::A)); // #[8]
    a[0x58] = instr!(2, Bit, Op::B3(3), Op::Reg(Reg::B)); // #[8]
    a[0x59] = instr!(2, Bit, Op::B3(3), Op::Reg(Reg::C)); // #[8]
    a[0x5A] = instr!(2, Bit, Op::B3(3), Op::Reg(Reg::D)); // #[8]
    a[0x5B] = instr!(2, Bit, Op::B3(3), Op::Reg(Reg::E)); // #[8]
    a[0x5C] = instr!(2, Bit, Op::B3(3), Op::Reg(Reg::H)); // #[8]
    a[0x5D] = instr!(2, Bit, Op::B3(3), Op::Reg(Reg::L)); // #[8]
    a[0x5E] = instr!(3, Bit, Op::B3(3), Op::RegMem(Reg::HL)); // #[12]
    a[0x5F] = instr!(2, Bit, Op::B3(3), Op::Reg(Reg::A)); // #[8]
    a[0x60] = instr!(2, Bit, Op::B3(4), Op::Reg(Reg::B)); // #[8]
    a[0x61] = instr!(2, Bit, Op::B3(4), Op::Reg(Reg::C)); // #[8]
    a[0x62] = instr!(2, Bit, Op::B3(4), Op::Reg(Reg::D)); // #[8]
    a[0x63] = instr!(2, Bit, Op::B3(4), Op::Reg(Reg::E)); // #[8]
    a[0x64] = instr!(2, Bit, Op::B3(4), Op::Reg(Reg::H)); // #[8]
    a[0x65] = instr!(2, Bit, Op::B3(4), Op::Reg(Reg::L)); // #[8]
    a[0x66] = instr!(3, Bit, Op::B3(4), Op::RegMem(Reg::HL)); // #[12]
    a[0x67] = instr!(2, Bit, Op::B3(4), Op::Reg(Reg::A)); // #[8]
    a[0x68] = instr!(2, Bit, Op::B3(5), Op::Reg(Reg::B)); // #[8]
    a[0x69] = instr!(2, Bit, Op::B3(5), Op::Reg(Reg::C)); // #[8]
    a[0x6A] = instr!(2, Bit, Op::B3(5), Op::Reg(Reg::D)); // #[8]
    a[0x6B] = instr!(2, Bit, Op::B3(5), Op::Reg(Reg::E)); // #[8]
    a[0x6C] = instr!(2, Bit, Op::B3(5), Op::Reg(Reg::H)); // #[8]
    a[0x6D] = instr!(2, Bit, Op::B3(5), Op::Reg(Reg::L)); // #[8]
    a[0x6E] = instr!(3, Bit, Op::B3(5), Op::RegMem(Reg::HL)); // #[12]
    a[0x6F] = instr!(2, Bit, Op::B3(5), Op::Reg(Reg::A)); // #[8]
    a[0x70] = instr!(2, Bit, Op::B3(6), Op::Reg(Reg::B)); // #[8]
    a[0x71] = instr!(2, Bit, Op::B3(6), Op::Reg(Reg::C)); // #[8]
    a[0x72] = instr!(2, Bit, Op::B3(6), Op::Reg(Reg::D)); // #[8]
    a[0x73] = instr!(2, Bit, Op::B3(6), Op::Reg(Reg::E)); // #[8]
    a[0x74] = instr!(2, Bit, Op::B3(6), Op::Reg(Reg::H)); // #[8]
    a[0x75] = instr!(2, Bit, Op::B3(6), Op::Reg(Reg::L)); // #[8]
    a[0x76] = instr!(3, Bit, Op::B3(6), Op::RegMem(Reg::HL)); // #[12]
    a[0x77] = instr!(2, Bit, Op::B3(6), Op::Reg(Reg::A)); // #[8]
    a[0x78] = instr!(2, Bit, Op::B3(7), Op::Reg(Reg::B)); // #[8]
    a[0x79] = instr!(2, Bit, Op::B3(7), Op::Reg(Reg::C)); // #[8]
    a[0x7A] = instr!(2, Bit, Op::B3(7), Op::Reg(Reg::D)); // #[8]
    a[0x7B] = instr!(2, Bit, Op::B3(7), Op::Reg(Reg::E)); // #[8]
    a[0x7C] = instr!(2, Bit, Op::B3(7), Op::Reg(Reg::H)); // #[8]
    a[0x7D] = instr!(2, Bit, Op::B3(7), Op::Reg(Reg::L)); // #[8]
    a[0x7E] = instr!(3, Bit, Op::B3(7), Op::RegMem(Reg::HL)); // #[12]
    a[0x7F] = instr!(2, Bit, Op::B3(7), Op::Reg(Reg::A)); // #[8]
    a[0x80] = instr!(2, Res, Op::B3(0), Op::Reg(Reg::B)); // #[8]
    a[0x81] = instr!(2, Res, Op::B3(0), Op::Reg(Reg::C)); // #[8]
    a[0x82] = instr!(2, Res, Op::B3(0), Op::Reg(Reg::D)); // #[8]
    a[0x83] = instr!(2, Res, Op::B3(0), Op::Reg(Reg::E)); // #[8]
    a[0x84] = instr!(2, Res, Op::B3(0), Op::Reg(Reg::H)); // #[8]
    a[0x85] = instr!(2, Res, Op::B3(0), Op::Reg(Reg::L)); // #[8]
    a[0x86] = instr!(4, Res, Op::B3(0), Op::RegMem(Reg::HL)); // #[16]
    a[0x87] = instr!(2, Res, Op::B3(0), Op::Reg(Reg::A)); // #[8]
    a[0x88] = instr!(2, Res, Op::B3(1), Op::Reg(Reg::B)); // #[8]
    a[0x89] = instr!(2, Res, Op::B3(1), Op::Reg(Reg::C)); // #[8]
    a[0x8A] = instr!(2, Res, Op::B3(1), Op::Reg(Reg::D)); // #[8]
    a[0x8B] = instr!(2, Res, Op::B3(1), Op::Reg(Reg::E)); // #[8]
    a[0x8C] = instr!(2, Res, Op::B3(1), Op::Reg(Reg::H)); // #[8]
    a[0x8D] = instr!(2, Res, Op::B3(1), Op::Reg(Reg::L)); // #[8]
    a[0x8E] = instr!(4, Res, Op::B3(1), Op::RegMem(Reg::HL)); // #[16]
    a[0x8F] = instr!(2, Res, Op::B3(1), Op::Reg(Reg::A)); // #[8]
    a[0x90] = instr!(2, Res, Op::B3(2), Op::Reg(Reg::B)); // #[8]
    a[0x91] = instr!(2, Res, Op::B3(2), Op::Reg(Reg::C)); // #[8]
    a[0x92] = instr!(2, Res, Op::B3(2), Op::Reg(Reg::D)); // #[8]
    a[0x93] = instr!(2, Res, Op::B3(2), Op::Reg(Reg::E)); // #[8]
    a[0x94] = instr!(2, Res, Op::B3(2), Op::Reg(Reg::H)); // #[8]
    a[0x95] = instr!(2, Res, Op::B3(2), Op::Reg(Reg::L)); // #[8]
    a[0x96] = instr!(4, Res, Op::B3(2), Op::RegMem(Reg::HL)); // #[16]
    a[0x97] = instr!(2, Res, Op::B3(2), Op::Reg(Reg::A)); // #[8]
    a[0x98] = instr!(2, Res, Op::B3(3), Op::Reg(Reg::B)); // #[8]
    a[0x99] = instr!(2, Res, Op::B3(3), Op::Reg(Reg::C)); // #[8]
    a[0x9A] = instr!(2, Res, Op::B3(3), Op::Reg(Reg::D)); // #[8]
    a[0x9B] = instr!(2, Res, Op::B3(3), Op::Reg(Reg::E)); // #[8]
    a[0x9C] = instr!(2, Res, Op::B3(3), Op::Reg(Reg::H)); // #[8]
    a[0x9D] = instr!(2, Res, Op::B3(3), Op::Reg(Reg::L)); // #[8]
    a[0x9E] = instr!(4, Res, Op::B3(3), Op::RegMem(Reg::HL)); // #[16]
    a[0x9F] = instr!(2, Res, Op::B3(3), Op::Reg(Reg::A)); // #[8]
    a[0xA0] = instr!(2, Res, Op::B3(4), Op::Reg(Reg::B)); // #[8]
    a[0xA1] = instr!(2, Res, Op::B3(4), Op::Reg(Reg::C)); // #[8]
    a[0xA2] = instr!(2, Res, Op::B3(4), Op::Reg(Reg::D)); // #[8]
    a[0xA3] = instr!(2, Res, Op::B3(4), Op::Reg(Reg::E)); // #[8]
    a[0xA4] = instr!(2, Res, Op::B3(4), Op::Reg(Reg::H)); // #[8]
    a[0xA5] = instr!(2, Res, Op::B3(4), Op::Reg(Reg::L)); // #[8]
    a[0xA6] = instr!(4, Res, Op::B3(4), Op::RegMem(Reg::HL)); // #[16]
    a[0xA7] = instr!(2, Res, Op::B3(4), Op::Reg(Reg::A)); // #[8]
    a[0xA8] = instr!(2, Res, Op::B3(5), Op::Reg(Reg::B)); // #[8]
    a[0xA9] = instr!(2, Res, Op::B3(5), Op::Reg(Reg::C)); // #[8]
    a[0xAA] = instr!(2, Res, Op::B3(5), Op::Reg(Reg::D)); // #[8]
    a[0xAB] = instr!(2, Res, Op::B3(5), Op::Reg(Reg::E)); // #[8]
    a[0xAC] = instr!(2, Res, Op::B3(5), Op::Reg(Reg::H)); // #[8]
    a[0xAD] = instr!(2, Res, Op::B3(5), Op::Reg(Reg::L)); // #[8]
    a[0xAE] = instr!(4, Res, Op::B3(5), Op::RegMem(Reg::HL)); // #[16]
    a[0xAF] = instr!(2, Res, Op::B3(5), Op::Reg(Reg::A)); // #[8]
    a[0xB0] = instr!(2, Res, Op::B3(6), Op::Reg(Reg::B)); // #[8]
    a[0xB1] = instr!(2, Res, Op::B3(6), Op::Reg(Reg::C)); // #[8]
    a[0xB2] = instr!(2, Res, Op::B3(6), Op::Reg(Reg::D)); // #[8]
    a[0xB3] = instr!(2, Res, Op::B3(6), Op::Reg(Reg::E)); // #[8]
    a[0xB4] = instr!(2, Res, Op::B3(6), Op::Reg(Reg::H)); // #[8]
    a[0xB5] = instr!(2, Res, Op::B3(6), Op::Reg(Reg::L)); // #[8]
    a[0xB6] = instr!(4, Res, Op::B3(6), Op::RegMem(Reg::HL)); // #[16]
    a[0xB7] = instr!(2, Res, Op::B3(6), Op::Reg(Reg::A)); // #[8]
    a[0xB8] = instr!(2, Res, Op::B3(7), Op::Reg(Reg::B)); // #[8]
    a[0xB9] = instr!(2, Res, Op::B3(7), Op::Reg(Reg::C)); // #[8]
    a[0xBA] = instr!(2, Res, Op::B3(7), Op::Reg(Reg::D)); // #[8]
    a[0xBB] = instr!(2, Res, Op::B3(7), Op::Reg(Reg::E)); // #[8]
    a[0xBC] = instr!(2, Res, Op::B3(7), Op::Reg(Reg::H)); // #[8]
    a[0xBD] = instr!(2, Res, Op::B3(7), Op::Reg(Reg::L)); // #[8]
    a[0xBE] = instr!(4, Res, Op::B3(7), Op::RegMem(Reg::HL)); // #[16]
    a[0xBF] = instr!(2, Res, Op::B3(7), Op::Reg(Reg::A)); // #[8]
    a[0xC0] = instr!(2, Set, Op::B3(0), Op::Reg(Reg::B)); // #[8]
    a[0xC1] = instr!(2, Set, Op::B3(0), Op::Reg(Reg::C)); // #[8]
    a[0xC2] = instr!(2, Set, Op::B3(0), Op::Reg(Reg::D)); // #[8]
    a[0xC3] = instr!(2, Set, Op::B3(0), Op::Reg(Reg::E)); // #[8]
    a[0xC4] = instr!(2, Set, Op::B3(0), Op::Reg(Reg::H)); // #[8]
    a[0xC5] = instr!(2, Set, Op::B3(0), Op::Reg(Reg::L)); // #[8]
    a[0xC6] = instr!(4, Set, Op::B3(0), Op::RegMem(Reg::HL)); // #[16]
    a[0xC7] = instr!(2, Set, Op::B3(0), Op::Reg(Reg::A)); // #[8]
    a[0xC8] = instr!(2, Set, Op::B3(1), Op::Reg(Reg::B)); // #[8]
    a[0xC9] = instr!(2, Set, Op::B3(1), Op::Reg(Reg::C)); // #[8]
    a[0xCA] = instr!(2, Set, Op::B3(1), Op::Reg(Reg::D)); // #[8]
    a[0xCB] = instr!(2, Set, Op::B3(1), Op::Reg(Reg::E)); // #[8]
    a[0xCC] = instr!(2, Set, Op::B3(1), Op::Reg(Reg::H)); // #[8]
    a[0xCD] = instr!(2, Set, Op::B3(1), Op::Reg(Reg::L)); // #[8]
    a[0xCE] = instr!(4, Set, Op::B3(1), Op::RegMem(Reg::HL)); // #[16]
    a[0xCF] = instr!(2, Set, Op::B3(1), Op::Reg(Reg::A)); // #[8]
    a[0xD0] = instr!(2, Set, Op::B3(2), Op::Reg(Reg::B)); // #[8]
    a[0xD1] = instr!(2, Set, Op::B3(2), Op::Reg(Reg::C)); // #[8]
    a[0xD2] = instr!(2, Set, Op::B3(2), Op::Reg(Reg::D)); // #[8]
    a[0xD3] = instr!(2, Set, Op::B3(2), Op::Reg(Reg::E)); // #[8]
    a[0xD4] = instr!(2, Set, Op::B3(2), Op::Reg(Reg::H)); // #[8]
    a[0xD5] = instr!(2, Set, Op::B3(2), Op::Reg(Reg::L)); // #[8]
    a[0xD6] = instr!(4, Set, Op::B3(2), Op::RegMem(Reg::HL)); // #[16]
    a[0xD7] = instr!(2, Set, Op::B3(2), Op::Reg(Reg::A)); // #[8]
    a[0xD8] = instr!(2, Set, Op::B3(3), Op::Reg(Reg::B)); // #[8]
    a[0xD9] = instr!(2, Set, Op::B3(3), Op::Reg(Reg::C)); // #[8]
    a[0xDA] = instr!(2, Set, Op::B3(3), Op::Reg(Reg::D)); // #[8]
    a[0xDB] = instr!(2, Set, Op::B3(3), Op::Reg(Reg::E)); // #[8]
    a[0xDC] = instr!(2, Set, Op::B3(3), Op::Reg(Reg::H)); // #[8]
    a[0xDD] = instr!(2, Set, Op::B3(3), Op::Reg(Reg::L)); // #[8]
    a[0xDE] = instr!(4, Set, Op::B3(3), Op::RegMem(Reg::HL)); // #[16]
    a[0xDF] = instr!(2, Set, Op::B3(3), Op::Reg(Reg::A)); // #[8]
    a[0xE0] = instr!(2, Set, Op::B3(4), Op::Reg(Reg::B)); // #[8]
    a[0xE1] = instr!(2, Set, Op::B3(4), Op::Reg(Reg::C)); // #[8]
    a[0xE2] = instr!(2, Set, Op::B3(4), Op::Reg(Reg::D)); // #[8]
    a[0xE3] = instr!(2, Set, Op::B3(4), Op::Reg(Reg::E)); // #[8]
    a[0xE4] = instr!(2, Set, Op::B3(4), Op::Reg(Reg::H)); // #[8]
    a[0xE5] = instr!(2, Set, Op::B3(4), Op::Reg(Reg::L)); // #[8]
    a[0xE6] = instr!(4, Set, Op::B3(4), Op::RegMem(Reg::HL)); // #[16]
    a[0xE7] = instr!(2, Set, Op::B3(4), Op::Reg(Reg::A)); // #[8]
    a[0xE8] = instr!(2, Set, Op::B3(5), Op::Reg(Reg::B)); // #[8]
    a[0xE9] = instr!(2, Set, Op::B3(5), Op::Reg(Reg::C)); // #[8]
    a[0xEA] = instr!(2, Set, Op::B3(5), Op::Reg(Reg::D)); // #[8]
    a[0xEB] = instr!(2, Set, Op::B3(5), Op::Reg(Reg::E)); // #[8]
    a[0xEC] = instr!(2, Set, Op::B3(5), Op::Reg(Reg::H)); // #[8]
    a[0xED] = instr!(2, Set, Op::B3(5), Op::Reg(Reg::L)); // #[8]
    a[0xEE] = instr!(4, Set, Op::B3(5), Op::RegMem(Reg::HL)); // #[16]
    a[0xEF] = instr!(2, Set, Op::B3(5), Op::Reg(Reg::A)); // #[8]
    a[0xF0] = instr!(2, Set, Op::B3(6), Op::Reg(Reg::B)); // #[8]
    a[0xF1] = instr!(2, Set, Op::B3(6), Op::Reg(Reg::C)); // #[8]
    a[0xF2] = instr!(2, Set, Op::B3(6), Op::Reg(Reg::D)); // #[8]
    a[0xF3] = instr!(2, Set, Op::B3(6), Op::Reg(Reg::E)); // #[8]
    a[0xF4] = instr!(2, Set, Op::B3(6), Op::Reg(Reg::H)); // #[8]
    a[0xF5] = instr!(2, Set, Op::B3(6), Op::Reg(Reg::L)); // #[8]
    a[0xF6] = instr!(4, Set, Op::B3(6), Op::RegMem(Reg::HL)); // #[16]
    a[0xF7] = instr!(2, Set, Op::B3(6), Op::Reg(Reg::A)); // #[8]
    a[0xF8] = instr!(2, Set, Op::B3(7), Op::Reg(Reg::B)); // #[8]
    a[0xF9] = instr!(2, Set, Op::B3(7), Op::Reg(Reg::C)); // #[8]
    a[0xFA] = instr!(2, Set, Op::B3(7), Op::Reg(Reg::D)); // #[8]
    a[0xFB] = instr!(2, Set, Op::B3(7), Op::Reg(Reg::E)); // #[8]
    a[0xFC] = instr!(2, Set, Op::B3(7), Op::Reg(Reg::H)); // #[8]
    a[0xFD] = instr!(2, Set, Op::B3(7), Op::Reg(Reg::L)); // #[8]
    a[0xFE] = instr!(4, Set, Op::B3(7), Op::RegMem(Reg::HL)); // #[16]
    a[0xFF] = instr!(2, Set, Op::B3(7), Op::Reg(Reg::A)); // #[8]

    a
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconditional_branches_have_equal_taken_and_fallthrough_cost() {
        let jp = OPCODE_TABLE[0xC3];
        assert!(matches!(jp.op, Mnemonic::Jp));
        assert_eq!(jp.mcycles, jp.branch_mcycles);
        assert_eq!(jp.mcycles, 4);
    }

    #[test]
    fn conditional_branches_cost_more_when_taken() {
        let jr_nz = OPCODE_TABLE[0x20];
        assert!(matches!(jr_nz.op, Mnemonic::Jr));
        assert_eq!(jr_nz.mcycles, 2);
        assert_eq!(jr_nz.branch_mcycles, 3);

        let call_z = OPCODE_TABLE[0xCC];
        assert_eq!(call_z.mcycles, 3);
        assert_eq!(call_z.branch_mcycles, 6);

        let ret_c = OPCODE_TABLE[0xD8];
        assert_eq!(ret_c.mcycles, 2);
        assert_eq!(ret_c.branch_mcycles, 5);
    }

    #[test]
    fn memory_operand_widens_cycle_count_over_register_form() {
        let inc_hl_mem = CB_OPCODE_TABLE[0x06]; // RLC [HL]
        let inc_reg = CB_OPCODE_TABLE[0x00]; // RLC B
        assert!(inc_hl_mem.mcycles > inc_reg.mcycles);
    }

    #[test]
    fn prefix_opcode_routes_through_the_cb_table() {
        assert!(matches!(OPCODE_TABLE[0xCB].op, Mnemonic::Prefix));
    }
}