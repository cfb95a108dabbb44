//! Top-level block segmentation.
//!
//! A single left-to-right pass splits the source on blank lines, except where the blank line
//! falls inside a protected region: a fenced code block, an HTML comment, an open HTML element,
//! or a table (including a table annotated by the HTML comment right before it).
//!
//! Region tracking is a single slot rather than a stack. Nested elements that share a tag name
//! (`<div><div>..</div></div>`) close at the first matching `</div>`, and a closer that never
//! matches keeps the region open until the end of input. Both behaviors are relied upon by
//! existing documents and are kept as is.

use std::ops::Range;

use crate::scan::{
    fence_length, html_closing_tag_end, html_comment_end, html_tag_info, is_block_whitespace,
    should_protect_separator,
};

/// Scanner state for one segmentation pass.
///
/// HTML comments never persist as a state: a terminated comment is consumed in one step and an
/// unterminated `<!--` is ordinary text.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState<'a> {
    Normal,
    /// Inside a fenced code block; holds the exact fence run that closes it.
    InFence(&'a str),
    /// Inside an open HTML element; holds its lowercased name.
    InHtmlTag(String),
}

fn trimmed_range(src: &str, range: Range<usize>) -> Option<Range<usize>> {
    let text = &src[range.clone()];
    let trimmed_start = text.trim_start_matches(is_block_whitespace);
    if trimmed_start.is_empty() {
        return None;
    }
    let start = range.start + (text.len() - trimmed_start.len());
    let end = start + trimmed_start.trim_end_matches(is_block_whitespace).len();
    Some(start..end)
}

fn skip_newlines(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i] == b'\n' {
        i += 1;
    }
    i
}

/// Split `src` into trimmed block byte ranges.
///
/// Every returned range is non-empty and trimmed of surrounding [`is_block_whitespace`]
/// characters (a leading byte order mark included). Ranges are ordered and non-overlapping.
pub fn segment_spans(src: &str) -> Vec<Range<usize>> {
    let bytes = src.as_bytes();
    let mut spans = Vec::new();
    let mut state = ScanState::Normal;
    // The block under construction is always the contiguous slice `src[block_start..i]`.
    let mut block_start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];

        match &state {
            ScanState::InFence(fence) => {
                if bytes[i..].starts_with(fence.as_bytes()) {
                    i += fence.len();
                    state = ScanState::Normal;
                } else {
                    i += 1;
                }
                continue;
            }
            ScanState::InHtmlTag(name) => {
                if bytes[i..].starts_with(b"</") {
                    if let Some(end) = html_closing_tag_end(src, i, name) {
                        i = end;
                        state = ScanState::Normal;
                        continue;
                    }
                }
                i += 1;
                continue;
            }
            ScanState::Normal => {}
        }

        if b == b'`' || b == b'~' {
            let len = fence_length(src, i, b as char);
            if len >= 3 {
                state = ScanState::InFence(&src[i..i + len]);
                i += len;
                continue;
            }
        }

        if bytes[i..].starts_with(b"<!--") {
            if let Some(end) = html_comment_end(src, i) {
                i = end;
                continue;
            }
        }

        if b == b'<' {
            if let Some(tag) = html_tag_info(src, i) {
                i = tag.end;
                if !tag.self_closing {
                    state = ScanState::InHtmlTag(tag.name);
                }
                continue;
            }
        }

        if bytes[i..].starts_with(b"\n\n") {
            if should_protect_separator(src, i, &src[block_start..i]) {
                i = skip_newlines(bytes, i + 2);
                continue;
            }
            spans.extend(trimmed_range(src, block_start..i));
            i = skip_newlines(bytes, i + 2);
            block_start = i;
            continue;
        }

        i += 1;
    }

    if state != ScanState::Normal {
        log::debug!(
            "segmentation ended inside {state:?}; trailing block runs to end of input ({} bytes)",
            src.len() - block_start
        );
    }
    spans.extend(trimmed_range(src, block_start..src.len()));
    spans
}

/// Split `src` into trimmed top-level blocks.
///
/// Returns borrowed views into `src`. Empty or whitespace-only input yields no blocks.
///
/// ```
/// let blocks = mdblocks::segment("# Title\n\nParagraph 1\n\nParagraph 2");
/// assert_eq!(blocks, ["# Title", "Paragraph 1", "Paragraph 2"]);
/// ```
pub fn segment(src: &str) -> Vec<&str> {
    segment_spans(src)
        .into_iter()
        .map(|range| &src[range])
        .collect()
}
