//! Low-level scanners used by the block segmenter.
//!
//! All functions operate on byte offsets into the source. Delimiters are ASCII and whitespace is
//! skipped a whole character at a time, so any offset they return lies on a UTF-8 character
//! boundary.

/// Number of preceding lines inspected when deciding whether a blank line sits inside a table.
const TABLE_LOOKBACK_LINES: usize = 5;

/// An opening (or self-closing) HTML tag recognized at a given position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTag {
    /// Tag name, ASCII-lowercased.
    pub name: String,
    /// Byte offset immediately after the terminating `>` or `/>`.
    pub end: usize,
    pub self_closing: bool,
}

/// Whitespace as block trimming sees it: Unicode `White_Space` plus the U+FEFF byte order mark,
/// minus U+0085 (NEL), which editors treat as an ordinary character.
pub fn is_block_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Trim [`is_block_whitespace`] characters from both ends of `s`.
pub fn trim_block_whitespace(s: &str) -> &str {
    s.trim_matches(is_block_whitespace)
}

fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Count consecutive `fence_char` bytes starting at `pos`.
///
/// Returns 0 when `pos` is out of range or the byte there does not match. Non-ASCII fence
/// characters never match.
pub fn fence_length(src: &str, pos: usize, fence_char: char) -> usize {
    if !fence_char.is_ascii() {
        return 0;
    }
    let ch = fence_char as u8;
    src.as_bytes()
        .get(pos..)
        .map_or(0, |rest| rest.iter().take_while(|&&b| b == ch).count())
}

/// Find the end of an HTML comment that opens at `pos`.
///
/// Returns the offset immediately after the first `-->` following the `<!--` opener, or `None`
/// when `pos` does not start a comment or the comment is never closed.
pub fn html_comment_end(src: &str, pos: usize) -> Option<usize> {
    let rest = src.get(pos..)?;
    if !rest.starts_with("<!--") {
        return None;
    }
    rest[4..].find("-->").map(|rel| pos + 4 + rel + 3)
}

/// Parse an opening HTML tag starting at the `<` at `pos`.
///
/// Quoted attribute values are skipped, so a `>` inside `title="a > b"` does not end the tag.
/// A quote preceded by a backslash does not toggle the quote state.
///
/// Returns `None` for closing tags, tags without a name, and tags that are never terminated.
pub fn html_tag_info(src: &str, pos: usize) -> Option<HtmlTag> {
    let bytes = src.as_bytes();
    if bytes.get(pos) != Some(&b'<') {
        return None;
    }

    let name_start = pos + 1;
    if bytes.get(name_start) == Some(&b'/') {
        return None;
    }
    let mut i = name_start;
    while i < bytes.len() && is_tag_name_byte(bytes[i]) {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name = src[name_start..i].to_ascii_lowercase();

    let mut quote: Option<u8> = None;
    while i < bytes.len() {
        let b = bytes[i];
        if (b == b'"' || b == b'\'') && bytes[i - 1] != b'\\' {
            match quote {
                None => quote = Some(b),
                Some(q) if q == b => quote = None,
                Some(_) => {}
            }
        }

        if quote.is_none() {
            if b == b'>' {
                return Some(HtmlTag {
                    name,
                    end: i + 1,
                    self_closing: false,
                });
            }
            if b == b'/' && bytes.get(i + 1) == Some(&b'>') {
                return Some(HtmlTag {
                    name,
                    end: i + 2,
                    self_closing: true,
                });
            }
        }
        i += 1;
    }
    None
}

/// Match a closing tag for `tag_name` starting at the `</` at `pos`.
///
/// The name is compared ASCII case-insensitively; any [`is_block_whitespace`] run (including
/// newlines, NBSP and vertical tab) is allowed before the `>`. Returns the offset immediately
/// after `>`.
pub fn html_closing_tag_end(src: &str, pos: usize, tag_name: &str) -> Option<usize> {
    let rest = src.as_bytes().get(pos..)?;
    if !rest.starts_with(b"</") {
        return None;
    }
    let name_end = 2 + tag_name.len();
    let candidate = rest.get(2..name_end)?;
    if !candidate.eq_ignore_ascii_case(tag_name.as_bytes()) {
        return None;
    }

    let after_name = src.get(pos + name_end..)?;
    let tail = after_name.trim_start_matches(is_block_whitespace);
    let close = pos + name_end + (after_name.len() - tail.len());
    tail.starts_with('>').then_some(close + 1)
}

/// Returns `true` if the trimmed line starts and ends with `|`.
pub fn is_table_row(line: &str) -> bool {
    let line = trim_block_whitespace(line);
    line.starts_with('|') && line.ends_with('|')
}

/// Decide whether the blank-line separator at `separator_index` must be kept inside the block.
///
/// `separator_index` points at the first `\n` of a `\n\n` pair and `current_block` is the text
/// accumulated so far. The separator is protected when the next non-newline content is a table
/// row and either the block ends with an HTML comment (a chart/table annotation) or one of its
/// last few lines is already a table row.
pub fn should_protect_separator(src: &str, separator_index: usize, current_block: &str) -> bool {
    let bytes = src.as_bytes();
    let mut next = separator_index.saturating_add(2);
    while next < bytes.len() && bytes[next] == b'\n' {
        next += 1;
    }
    if bytes.get(next) != Some(&b'|') {
        return false;
    }

    let trimmed = trim_block_whitespace(current_block);
    if trimmed.ends_with("-->") && trimmed.contains("<!--") {
        return true;
    }

    current_block
        .split('\n')
        .rev()
        .take(TABLE_LOOKBACK_LINES)
        .any(is_table_row)
}
