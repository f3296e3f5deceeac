//! Splitting of prompt text into plain and math spans.
//!
//! Question text may embed `$inline$` and `$$block$$` math. The UI only
//! styles those spans differently; this module just does the pure split.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathSegment<'a> {
    Text(&'a str),
    Inline(&'a str),
    Block(&'a str),
}

/// Splits `text` on `$…$` / `$$…$$` delimiters. An unclosed delimiter is
/// treated as plain text to the end of the string.
pub fn split_math(text: &str) -> Vec<MathSegment<'_>> {
    let mut segments = Vec::new();
    let mut pos = 0;

    while let Some(start) = text[pos..].find('$').map(|i| pos + i) {
        let block = text[start..].starts_with("$$");
        let delim = if block { "$$" } else { "$" };
        let body_start = start + delim.len();

        let Some(end) = text[body_start..].find(delim).map(|i| body_start + i) else {
            break;
        };

        if start > pos {
            segments.push(MathSegment::Text(&text[pos..start]));
        }
        let body = &text[body_start..end];
        segments.push(if block {
            MathSegment::Block(body)
        } else {
            MathSegment::Inline(body)
        });
        pos = end + delim.len();
    }

    if pos < text.len() {
        segments.push(MathSegment::Text(&text[pos..]));
    }
    segments
}
