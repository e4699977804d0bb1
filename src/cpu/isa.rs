use core::fmt;
use std::fmt::Debug;

/// A fully decoded instruction, with any immediate operands already
/// resolved and its timing looked up from the opcode table.
///
/// Every opcode costs at least one M-cycle for its own fetch; immediate
/// operands and register-indirect memory accesses each cost one more,
/// since an M-cycle is one memory access wide (4 T-cycles). Conditional
/// branches (`JR`/`JP`/`CALL`/`RET`) cost more when taken than when
/// fallen through, since the hardware spends extra cycles loading the
/// new PC — see `mcycles`/`branch_mcycles` below.
#[derive(Clone, Copy)]
pub(crate) struct Instruction {
    pub(crate) op: Mnemonic,
    pub(crate) op1: Arg,
    pub(crate) op2: Arg,
    /// M-cycles consumed when no branch is taken (or for non-branching
    /// instructions, unconditionally).
    pub(crate) mcycles: u8,
    /// M-cycles consumed instead of `mcycles` when a conditional branch
    /// (JR/JP/CALL/RET) is actually taken.
    pub(crate) branch_mcycles: u8,
}

impl Default for Instruction {
    fn default() -> Self {
        Instruction {
            op: Mnemonic::Nop,
            op1: Arg::Absent,
            op2: Arg::Absent,
            mcycles: 1,
            branch_mcycles: 1,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let opcode = format!("{:?}", self.op).to_ascii_uppercase();
        match (
            !matches!(self.op1, Arg::Absent),
            !matches!(self.op2, Arg::Absent),
        ) {
            (true, true) => write!(f, "{} {}, {}", opcode, self.op1, self.op2),
            (true, false) => write!(f, "{} {}", opcode, self.op1),
            (false, false) => write!(f, "{}", opcode),
            (false, true) => panic!("invalid: first operand absent but second present"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Arg {
    /// No operand
    Absent,
    /// Register value
    Reg(Reg),
    /// Register value as memory address
    RegMem(Reg),
    /// Branch condition
    Cond(Cond),
    /// Bit Index
    B3(u8),
    /// RST target vector value
    Tgt(u8),
    /// Unsigned 8-bit imm
    U8(u8),
    /// Signed 8-bit imm
    I8(i8),
    /// Unsigned 16-bit imme
    U16(u16),
    /// 8-bit imm as memory address
    A8(u8),
    /// 16-bit imm as memory address
    A16(u16),
    /// For the operand `SP + i8`
    SPplusI8(i8),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arg::Absent => write!(f, "<?>"),
            Arg::Reg(r) => write!(f, "{r:?}"),
            Arg::RegMem(r) => write!(f, "[{r:?}]"),
            Arg::Cond(c) => write!(f, "{c:?}"),
            Arg::B3(b) => write!(f, "{b}"),
            Arg::Tgt(t) => write!(f, "${t:04X}"),
            Arg::U8(u) => write!(f, "${u:02X}"),
            Arg::I8(i) => write!(f, "#{i:+}"),
            Arg::U16(u) => write!(f, "${u:04X}"),
            Arg::A8(a) => write!(f, "[$FF00 + ${a:02X}]"),
            Arg::A16(a) => write!(f, "[${a:04X}]"),
            Arg::SPplusI8(i) => write!(f, "SP + ${i:02X}"),
        }
    }
}

// Operation to perform for an instrution.
// These values do not correspond in any way the actual opcodes.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Mnemonic {
    // Memory
    Ld,
    Ldh, // Adds 0xFF00 to its address operand
    Push,
    Pop,

    // Arithmetic
    Inc,
    Dec,
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,

    // Bit Shift and Rotations
    Rla,
    Rlca,
    Rra,
    Rrca,
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Srl,
    Swap,
    Bit,
    Res,
    Set,

    // Branch
    Jr,
    Jp,
    Call,
    Ret,
    Reti,
    Rst,

    // Interrupt and system control
    Di,
    Ei,
    Halt,
    Stop,

    // Misc
    Cpl,
    Ccf,
    Scf,
    Nop,
    Daa,
    Prefix,

    Illegal,
}

/// All register names present in r8, r16, r16mem and r16stk are
/// represented by a single type for simplicity.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reg {
    A,
    // F, // never needed
    B,
    C,
    D,
    E,
    H,
    L,
    AF,
    BC,
    DE,
    HL,
    HLinc,
    HLdec,
    SP,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Cond {
    NZ,
    Z,
    NC,
    C,
}
