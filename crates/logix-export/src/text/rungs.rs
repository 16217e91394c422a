// crates/logix-export/src/text/rungs.rs

//! Splits a ladder routine body into rungs.

use super::find_matching;
use crate::logic::mnemonics::is_instruction_mnemonic;
use crate::logic::usage::instruction_calls;
use alloc::string::String;
use alloc::vec::Vec;

/// One rung as it appears in the L5K text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RungText {
    /// Encounter order within the routine, starting at 0.
    pub number: u32,
    pub comment: Option<String>,
    /// Ladder text without the comment and without the trailing `;`.
    pub content: String,
}

const RUNG_MARKER: &str = "N:";
const RUNG_COMMENT_MARKER: &str = "RC:";

/// Splits a routine body at `N:` markers.
///
/// The literal `N` is a record marker, not a rung label, so rungs are
/// numbered by encounter order. A rung's text runs until the next marker or
/// the end of the body. A leading `[...]` group, which may span lines, is
/// taken as the rung comment. An `RC: "..."` record ends the current rung
/// and supplies the comment of the next rung when that rung has no `[...]`
/// comment of its own.
pub fn split_rungs(body: &str) -> Vec<RungText> {
    let mut rungs = Vec::new();
    let mut current: Option<(String, Option<String>)> = None;
    let mut pending_comment: Option<String> = None;

    for line in body.lines() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix(RUNG_MARKER) {
            if let Some((raw, rc)) = current.take() {
                push_rung(&mut rungs, &raw, rc);
            }
            current = Some((String::from(rest.trim()), pending_comment.take()));
        } else if let Some(rest) = line.strip_prefix(RUNG_COMMENT_MARKER) {
            if let Some((raw, rc)) = current.take() {
                push_rung(&mut rungs, &raw, rc);
            }
            pending_comment = parse_rung_comment_record(rest);
        } else if let Some((raw, _)) = current.as_mut() {
            if !line.is_empty() {
                raw.push('\n');
                raw.push_str(line);
            }
        }
    }

    if let Some((raw, rc)) = current.take() {
        push_rung(&mut rungs, &raw, rc);
    }
    rungs
}

/// Separates a leading `[...]` comment from the ladder text.
///
/// Returns `(comment, remainder)`. An unbalanced `[` is not a comment, and
/// neither is a group holding an instruction call: that is a parallel
/// branch such as `[XIC(A) ,XIC(B) ]OTE(C)`.
pub fn strip_leading_comment(raw: &str) -> (Option<String>, &str) {
    let text = raw.trim_start();
    if text.starts_with('[') {
        if let Some(close) = find_matching(text, '[', ']') {
            let inner = &text[1..close];
            if is_branch(inner) {
                return (None, text);
            }
            let comment = inner.trim();
            let comment = (!comment.is_empty()).then(|| String::from(comment));
            return (comment, &text[close + 1..]);
        }
    }
    (None, text)
}

fn is_branch(inner: &str) -> bool {
    instruction_calls(inner)
        .iter()
        .any(|call| is_instruction_mnemonic(call.mnemonic))
}

fn push_rung(rungs: &mut Vec<RungText>, raw: &str, record_comment: Option<String>) {
    let (comment, remainder) = strip_leading_comment(raw);

    rungs.push(RungText {
        number: rungs.len() as u32,
        comment: comment.or(record_comment),
        content: normalize_rung_text(remainder),
    });
}

/// Joins the non-blank lines of a rung with single spaces and drops the
/// trailing `;`.
pub fn normalize_rung_text(raw: &str) -> String {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let joined = lines.join(" ");
    let content = joined.trim_end();
    let content = content.strip_suffix(';').unwrap_or(content).trim_end();
    String::from(content)
}

/// `RC: "text";` → `text`.
fn parse_rung_comment_record(rest: &str) -> Option<String> {
    let text = rest.trim();
    let text = text.strip_suffix(';').unwrap_or(text).trim_end();
    let text = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text);
    let text = text.trim();
    (!text.is_empty()).then(|| text.replace("\"\"", "\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_rungs_with_bracket_comment() {
        let body = "\n    N: XIC(A)OTE(B);\n    N: [Note]XIC(B)XIC(C)OTE(D);\n";
        let rungs = split_rungs(body);
        assert_eq!(rungs.len(), 2);

        assert_eq!(rungs[0].number, 0);
        assert_eq!(rungs[0].content, "XIC(A)OTE(B)");
        assert_eq!(rungs[0].comment, None);

        assert_eq!(rungs[1].number, 1);
        assert_eq!(rungs[1].content, "XIC(B)XIC(C)OTE(D)");
        assert_eq!(rungs[1].comment.as_deref(), Some("Note"));
    }

    #[test]
    fn test_numbering_ignores_source_digits() {
        // Digits in the text are never used as rung numbers.
        let body = "N: XIC(Rung7)OTE(X);\nN: XIC(Rung3)OTE(Y);\nN: NOP();";
        let numbers: Vec<u32> = split_rungs(body).iter().map(|r| r.number).collect();
        assert_eq!(numbers, [0, 1, 2]);
    }

    #[test]
    fn test_multiline_rung_and_comment() {
        let body = "N: [First line\n   second line]\n   XIC(A)\n   OTE(B);";
        let rungs = split_rungs(body);
        assert_eq!(rungs.len(), 1);
        assert_eq!(rungs[0].comment.as_deref(), Some("First line\nsecond line"));
        assert_eq!(rungs[0].content, "XIC(A) OTE(B)");
    }

    #[test]
    fn test_rung_comment_record() {
        let body = "RC: \"Start the pump\";\nN: XIC(Start)OTE(Pump);\nN: XIC(Stop)OTU(Pump);";
        let rungs = split_rungs(body);
        assert_eq!(rungs.len(), 2);
        assert_eq!(rungs[0].comment.as_deref(), Some("Start the pump"));
        assert_eq!(rungs[0].content, "XIC(Start)OTE(Pump)");
        assert_eq!(rungs[1].comment, None);
    }

    #[test]
    fn test_bracket_comment_wins_over_record() {
        let body = "RC: \"record\";\nN: [inline]XIC(A)OTE(B);";
        let rungs = split_rungs(body);
        assert_eq!(rungs[0].comment.as_deref(), Some("inline"));
    }

    #[test]
    fn test_text_before_first_marker_is_ignored() {
        let rungs = split_rungs("stray text\nN: OTE(A);");
        assert_eq!(rungs.len(), 1);
        assert_eq!(rungs[0].content, "OTE(A)");
    }

    #[test]
    fn test_unbalanced_bracket_is_content() {
        let (comment, rest) = strip_leading_comment("[XIC(A) OTE(B);");
        assert_eq!(comment, None);
        assert_eq!(rest, "[XIC(A) OTE(B);");
    }

    #[test]
    fn test_leading_branch_is_not_a_comment() {
        let rungs = split_rungs("N: [XIC(Start) ,XIC(Motor) ]XIO(Stop)OTE(Motor);");
        assert_eq!(rungs[0].comment, None);
        assert_eq!(rungs[0].content, "[XIC(Start) ,XIC(Motor) ]XIO(Stop)OTE(Motor)");

        let (comment, _) = strip_leading_comment("[Check pump (P-101) first]XIC(A)OTE(B)");
        assert_eq!(comment.as_deref(), Some("Check pump (P-101) first"));
    }

    #[test]
    fn test_empty_body() {
        assert!(split_rungs("").is_empty());
        assert!(split_rungs("\n   \n").is_empty());
    }

    #[test]
    fn test_normalize_rung_text() {
        assert_eq!(normalize_rung_text("\n  XIC(A)\n\n   OTE(B) ;\n"), "XIC(A) OTE(B)");
        assert_eq!(normalize_rung_text("NOP();"), "NOP()");
        assert_eq!(normalize_rung_text("  "), "");
    }
}
