// crates/logix-export/src/logic/usage.rs

//! Read/write classification of a tag within one rung.

use super::mnemonics::{OperandPattern, OperandSlot, READ_PATTERNS, WRITE_PATTERNS};
use super::references::{extract_tag_references, tokens};
use crate::text::find_matching;
use crate::types::UsageType;
use alloc::vec::Vec;

/// An instruction call found in ladder text, e.g. `MOV(Src,Dest)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionCall<'a> {
    pub mnemonic: &'a str,
    pub operands: Vec<&'a str>,
}

/// Classifies how `text` uses `tag`.
///
/// The tag is a write if it sits in a destination slot of any
/// [`WRITE_PATTERNS`] entry and a read if it sits in a slot of any
/// [`READ_PATTERNS`] entry. Matching both gives [`UsageType::Both`]; matching
/// neither falls back to [`UsageType::Read`].
pub fn classify_usage(text: &str, tag: &str) -> UsageType {
    let calls = instruction_calls(text);
    let writes = matches_any(&calls, tag, WRITE_PATTERNS);
    let reads = matches_any(&calls, tag, READ_PATTERNS);

    match (reads, writes) {
        (true, true) => UsageType::Both,
        (false, true) => UsageType::Write,
        _ => UsageType::Read,
    }
}

/// Every `NAME(operands)` call in `text`, including calls nested inside
/// operands, in order of appearance.
pub fn instruction_calls(text: &str) -> Vec<InstructionCall<'_>> {
    let mut calls = Vec::new();

    for (start, token) in tokens(text) {
        let end = start + token.len();
        let after = text[end..].trim_start();
        if !after.starts_with('(') {
            continue;
        }
        let Some(close) = find_matching(after, '(', ')') else {
            continue;
        };
        calls.push(InstructionCall {
            mnemonic: token,
            operands: split_operands(&after[1..close]),
        });
    }
    calls
}

/// Splits an operand list at top-level commas, trimming each operand.
fn split_operands(inner: &str) -> Vec<&str> {
    let mut operands = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, b) in inner.bytes().enumerate() {
        match b {
            b'(' | b'[' => depth += 1,
            b')' | b']' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                operands.push(inner[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    if !inner.trim().is_empty() || !operands.is_empty() {
        operands.push(inner[start..].trim());
    }
    operands
}

fn matches_any(calls: &[InstructionCall<'_>], tag: &str, patterns: &[OperandPattern]) -> bool {
    calls.iter().any(|call| {
        patterns
            .iter()
            .filter(|p| p.mnemonic.eq_ignore_ascii_case(call.mnemonic))
            .any(|p| slot_holds(call, p.slot, tag))
    })
}

fn slot_holds(call: &InstructionCall<'_>, slot: OperandSlot, tag: &str) -> bool {
    match slot {
        OperandSlot::Position(i) => call.operands.get(i).is_some_and(|op| *op == tag),
        OperandSlot::Expression(i) => call
            .operands
            .get(i)
            .is_some_and(|op| extract_tag_references(op).iter().any(|t| t == tag)),
    }
}
