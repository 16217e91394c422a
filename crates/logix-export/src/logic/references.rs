// crates/logix-export/src/logic/references.rs

//! Lexical scan of ladder text for candidate tag names.

use super::mnemonics::is_instruction_mnemonic;
use crate::text::find_matching;
use alloc::string::String;
use alloc::vec::Vec;

/// Returns the distinct tag-like tokens of a rung, in first-appearance order.
///
/// A token is an identifier (letter or underscore, then letters, digits or
/// underscores) with any chain of `.member`, `[index]` and `:segment`
/// suffixes, kept in full, so `Local:1:I.Data.0` is one token. Tokens whose
/// base is an instruction mnemonic are dropped. Numeric literals (`16#FF`,
/// `1.5E3`) and quoted strings are skipped whole.
///
/// This is a lexical heuristic: a tag named like a mnemonic cannot be found.
pub fn extract_tag_references(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for (_, token) in tokens(text) {
        if is_instruction_mnemonic(token_base(token)) {
            continue;
        }
        if !found.iter().any(|t| t == token) {
            found.push(String::from(token));
        }
    }
    found
}

/// The part of a token before its first `.` or `[`.
pub fn token_base(token: &str) -> &str {
    let end = token.find(['.', '[']).unwrap_or(token.len());
    &token[..end]
}

/// Iterates every identifier-like token (mnemonics included) with its byte
/// offset in `text`.
pub(crate) fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let bytes = text.as_bytes();
    let mut idx = 0;

    core::iter::from_fn(move || {
        while idx < bytes.len() {
            let b = bytes[idx];

            if b == b'"' || b == b'\'' {
                idx = skip_quoted(bytes, idx);
            } else if b.is_ascii_digit() {
                while idx < bytes.len() && is_literal_byte(bytes[idx]) {
                    idx += 1;
                }
            } else if is_ident_start(b) {
                let start = idx;
                idx = scan_token(text, idx);
                return Some((start, &text[start..idx]));
            } else {
                idx += 1;
            }
        }
        None
    })
}

/// Scans an identifier and its `.member` / `[index]` / `:segment` chain
/// starting at `start`.
fn scan_token(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut idx = skip_word(bytes, start);

    loop {
        match bytes.get(idx) {
            Some(b'.' | b':') if bytes.get(idx + 1).is_some_and(|b| is_word_byte(*b)) => {
                idx = skip_word(bytes, idx + 1);
            }
            Some(b'[') => match find_matching(&text[idx..], '[', ']') {
                Some(close) if close > 1 => idx += close + 1,
                _ => break,
            },
            _ => break,
        }
    }
    idx
}

fn skip_word(bytes: &[u8], mut idx: usize) -> usize {
    while idx < bytes.len() && is_word_byte(bytes[idx]) {
        idx += 1;
    }
    idx
}

fn skip_quoted(bytes: &[u8], open: usize) -> usize {
    let quote = bytes[open];
    let mut idx = open + 1;
    while idx < bytes.len() && bytes[idx] != quote {
        idx += 1;
    }
    (idx + 1).min(bytes.len())
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_literal_byte(b: u8) -> bool {
    is_word_byte(b) || b == b'.' || b == b'#'
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_simple_rung() {
        assert_eq!(
            extract_tag_references("XIC(Start)OTE(Motor1)"),
            vec![String::from("Start"), String::from("Motor1")]
        );
    }

    #[test]
    fn test_dedup_keeps_first_appearance() {
        assert_eq!(
            extract_tag_references("XIC(B)XIC(C)XIO(B)OTE(D)"),
            vec![String::from("B"), String::from("C"), String::from("D")]
        );
    }

    #[test]
    fn test_member_and_index_suffixes() {
        let refs = extract_tag_references("XIC(Timer1.DN)MOV(Recipe[Idx].Speed,Drive.Cmd.Speed)OTE(Word.5)");
        assert_eq!(
            refs,
            vec![
                String::from("Timer1.DN"),
                String::from("Recipe[Idx].Speed"),
                String::from("Drive.Cmd.Speed"),
                String::from("Word.5"),
            ]
        );
    }

    #[test]
    fn test_mnemonic_base_case_insensitive() {
        // A token whose base is a mnemonic is dropped even with a member suffix.
        let refs = extract_tag_references("xic(A)ote(B)TON(T1,?,?)");
        assert_eq!(refs, vec![String::from("A"), String::from("B"), String::from("T1")]);
        assert_eq!(extract_tag_references("MOV.X"), Vec::<String>::new());
    }

    #[test]
    fn test_literals_are_skipped() {
        let refs = extract_tag_references("MOV(16#FF,Mask)MUL(Gain,1.5E3,Out)EQU(Mode,'AUTO')");
        assert_eq!(
            refs,
            vec![String::from("Mask"), String::from("Gain"), String::from("Out"), String::from("Mode")]
        );
    }

    #[test]
    fn test_branches_and_underscores() {
        let refs = extract_tag_references("[XIC(_Aux1) ,XIO(Fault_2) ]OTE(Run)");
        assert_eq!(
            refs,
            vec![String::from("_Aux1"), String::from("Fault_2"), String::from("Run")]
        );
    }

    #[test]
    fn test_module_addressed_operands() {
        let refs = extract_tag_references("XIC(Local:1:I.Data.0)OTE(Local:2:O.Data[3])");
        assert_eq!(
            refs,
            vec![String::from("Local:1:I.Data.0"), String::from("Local:2:O.Data[3]")]
        );
    }

    #[test]
    fn test_token_base() {
        assert_eq!(token_base("Tank[3].Level"), "Tank");
        assert_eq!(token_base("Pump.Run"), "Pump");
        assert_eq!(token_base("Plain"), "Plain");
    }
}
