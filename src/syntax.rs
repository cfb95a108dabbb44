//! Line predicates used to classify segmented blocks.

fn strip_up_to_three_leading_spaces(line: &str) -> &str {
    let mut s = line;
    let mut spaces = 0usize;
    while spaces < 3 && s.starts_with(' ') {
        s = &s[1..];
        spaces += 1;
    }
    s
}

pub(crate) fn is_heading(line: &str) -> bool {
    let s = strip_up_to_three_leading_spaces(line);
    let hashes = s.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return false;
    }
    s[hashes..].is_empty() || s[hashes..].starts_with([' ', '\t'])
}

pub(crate) fn is_setext_underline(line: &str) -> bool {
    let s = strip_up_to_three_leading_spaces(line).trim_end();
    let Some(first) = s.chars().next() else {
        return false;
    };
    (first == '=' || first == '-') && s.chars().all(|c| c == first)
}

pub(crate) fn is_thematic_break(line: &str) -> bool {
    // Up to 3 leading spaces, then 3+ of one of '-', '*', '_' with optional spaces/tabs between.
    let s = strip_up_to_three_leading_spaces(line);
    let mut marker = None;
    let mut count = 0usize;
    for c in s.chars() {
        match c {
            ' ' | '\t' => continue,
            '-' | '*' | '_' if marker.is_none_or(|m| m == c) => {
                marker = Some(c);
                count += 1;
            }
            _ => return false,
        }
    }
    count >= 3
}

/// Fence character and run length of a code fence opening line.
pub(crate) fn code_fence_start(line: &str) -> Option<(char, usize)> {
    let s = strip_up_to_three_leading_spaces(line);
    let first = s.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }
    let len = s.chars().take_while(|&c| c == first).count();
    (len >= 3).then_some((first, len))
}

pub(crate) fn is_blockquote_start(line: &str) -> bool {
    strip_up_to_three_leading_spaces(line).starts_with('>')
}

pub(crate) fn is_list_item_start(line: &str) -> bool {
    let bytes = line.trim_start().as_bytes();
    match bytes.first() {
        Some(b'-' | b'+' | b'*') => matches!(bytes.get(1), Some(b' ' | b'\t')),
        Some(b'0'..=b'9') => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            digits <= 9
                && matches!(bytes.get(digits), Some(b'.' | b')'))
                && matches!(bytes.get(digits + 1), Some(b' ' | b'\t'))
        }
        _ => false,
    }
}

pub(crate) fn is_html_comment_start(line: &str) -> bool {
    strip_up_to_three_leading_spaces(line).starts_with("<!--")
}

pub(crate) fn is_html_start(line: &str) -> bool {
    let s = strip_up_to_three_leading_spaces(line);
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'<') {
        return false;
    }
    match bytes.get(1) {
        Some(b'/') => bytes.get(2).is_some_and(|b| b.is_ascii_alphabetic()),
        Some(b) => b.is_ascii_alphabetic() || *b == b'!' || *b == b'?',
        None => false,
    }
}
