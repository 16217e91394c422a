// crates/logix-export/src/logic/mnemonics.rs

//! Fixed instruction tables for ladder text analysis.

/// Ladder instruction mnemonics that are never reported as tag references.
///
/// Compared case-insensitively against the base of each token (the part
/// before the first `.` or `[`).
pub static INSTRUCTION_MNEMONICS: &[&str] = &[
    // Bit conditions and one-shots
    "XIC", "XIO", "ONS", "OSR", "OSF",
    // Outputs
    "OTE", "OTL", "OTU",
    // Timers and counters
    "TON", "TOF", "RTO", "TONR", "TOFR", "RTOR", "CTU", "CTD", "CTUD", "RES",
    // Compare
    "EQU", "NEQ", "LES", "LEQ", "GRT", "GEQ", "LIM", "MEQ", "CMP",
    // Math
    "ADD", "SUB", "MUL", "DIV", "MOD", "SQR", "SQRT", "NEG", "ABS", "CPT",
    "SIN", "COS", "TAN", "ASN", "ACS", "ATN", "LN", "LOG", "XPY",
    // Logical
    "AND", "OR", "XOR", "NOT", "BAND", "BOR", "BXOR", "BNOT",
    // Move and copy
    "MOV", "MVM", "COP", "CPS", "FLL", "CLR", "SWPB", "BTD", "BTDT", "DEG", "RAD",
    "TOD", "FRD", "TRN",
    // File, shift and sequencer
    "FAL", "FSC", "FFL", "FFU", "LFL", "LFU", "BSL", "BSR", "SQO", "SQI", "SQL", "SIZE",
    // Program control
    "JSR", "RET", "SBR", "JMP", "LBL", "JXR", "MCR", "AFI", "NOP", "TND", "UID", "UIE",
    "EVENT", "FOR", "BRK",
    // Messaging and system
    "MSG", "GSV", "SSV", "IOT",
    // Process
    "PID", "PIDE", "ALM", "ALMD", "ALMA", "SCL", "SCP",
];

/// True if `token` (already reduced to its base) is an instruction mnemonic.
pub fn is_instruction_mnemonic(token: &str) -> bool {
    INSTRUCTION_MNEMONICS
        .iter()
        .any(|m| m.eq_ignore_ascii_case(token))
}

/// Which operand of an instruction call a pattern looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSlot {
    /// The operand at this index must be exactly the tag.
    Position(usize),
    /// The tag must appear as a token inside the operand at this index.
    Expression(usize),
}

/// A mnemonic plus the operand slot that carries the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandPattern {
    pub mnemonic: &'static str,
    pub slot: OperandSlot,
}

const fn at(mnemonic: &'static str, index: usize) -> OperandPattern {
    OperandPattern {
        mnemonic,
        slot: OperandSlot::Position(index),
    }
}

const fn within(mnemonic: &'static str, index: usize) -> OperandPattern {
    OperandPattern {
        mnemonic,
        slot: OperandSlot::Expression(index),
    }
}

/// Destination operands: outputs, move/arithmetic destinations, copy/fill
/// destinations, and clear.
pub static WRITE_PATTERNS: &[OperandPattern] = &[
    at("OTE", 0),
    at("OTL", 0),
    at("OTU", 0),
    at("MOV", 1),
    at("MVM", 2),
    at("ADD", 2),
    at("SUB", 2),
    at("MUL", 2),
    at("DIV", 2),
    at("MOD", 2),
    at("SQR", 1),
    at("SQRT", 1),
    at("NEG", 1),
    at("ABS", 1),
    at("CPT", 0),
    at("COP", 1),
    at("CPS", 1),
    at("FLL", 1),
    at("CLR", 0),
];

/// Condition and compare operands.
pub static READ_PATTERNS: &[OperandPattern] = &[
    at("XIC", 0),
    at("XIO", 0),
    at("EQU", 0),
    at("EQU", 1),
    at("NEQ", 0),
    at("NEQ", 1),
    at("LES", 0),
    at("LES", 1),
    at("LEQ", 0),
    at("LEQ", 1),
    at("GRT", 0),
    at("GRT", 1),
    at("GEQ", 0),
    at("GEQ", 1),
    at("LIM", 0),
    at("LIM", 1),
    at("LIM", 2),
    at("MEQ", 0),
    at("MEQ", 1),
    at("MEQ", 2),
    within("CMP", 0),
];
