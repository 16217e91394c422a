// crates/logix-export/src/text/mod.rs

//! Lexical building blocks for the L5K plaintext grammar.
//!
//! Everything here works on borrowed `&str` slices and knows nothing about
//! the project model; the L5K orchestrator in `crate::l5k` composes them.

pub mod attributes;
pub mod blocks;
pub mod declaration;
pub mod header;
pub mod rungs;

/// Given `input` starting with `open`, returns the byte offset of the
/// matching `close`, honoring nesting and double-quoted strings.
pub(crate) fn find_matching(input: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_quote = false;
    let mut chars = input.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if in_quote {
            match c {
                '\\' if matches!(chars.peek(), Some((_, '"'))) => {
                    chars.next();
                }
                '"' => in_quote = false,
                _ => {}
            }
            continue;
        }

        if c == '"' {
            in_quote = true;
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}
