//! Code extraction - turn raw model output into a clean source string
//!
//! Models wrap code in Markdown fences more often than not, and sometimes
//! interleave several fenced regions with prose. Extraction keeps the fenced
//! regions and drops everything else; when no fence is present the whole
//! output is assumed to be code.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Non-greedy so multiple fenced regions in one output stay separate.
    // The optional `\w+\n` swallows a language tag on the opening line.
    static ref FENCED_BLOCK: Regex =
        Regex::new(r"(?s)```(?:\w+\n)?(.*?)```").expect("fenced block regex is valid");
}

/// Extract clean code from raw model output.
///
/// Every fenced region is trimmed, empty regions are dropped, and the
/// survivors are joined with a blank line. If the output carries no fence at
/// all, the entire output is returned trimmed — absence of markup is not an
/// error. This function never fails; an output with nothing usable in it
/// yields an empty string.
pub fn extract(raw: &str) -> String {
    let mut found_fence = false;
    let mut blocks: Vec<&str> = Vec::new();

    for captures in FENCED_BLOCK.captures_iter(raw) {
        found_fence = true;
        let block = captures
            .get(1)
            .map(|m| m.as_str().trim())
            .unwrap_or_default();
        if !block.is_empty() {
            blocks.push(block);
        }
    }

    if found_fence {
        blocks.join("\n\n")
    } else {
        raw.trim().to_string()
    }
}
