use mdblocks::{
    HtmlTag, fence_length, html_closing_tag_end, html_comment_end, html_tag_info, is_table_row,
    should_protect_separator,
};

#[test]
fn fence_length_counts_backticks() {
    assert_eq!(fence_length("```javascript", 0, '`'), 3);
}

#[test]
fn fence_length_counts_tildes() {
    assert_eq!(fence_length("~~~~python", 0, '~'), 4);
}

#[test]
fn fence_length_is_zero_for_other_characters() {
    assert_eq!(fence_length("```javascript", 0, '~'), 0);
}

#[test]
fn fence_length_stops_at_end_of_input() {
    assert_eq!(fence_length("```", 0, '`'), 3);
    assert_eq!(fence_length("ab``", 2, '`'), 2);
}

#[test]
fn comment_end_points_past_the_closer() {
    assert_eq!(html_comment_end("<!-- c -->", 0), Some(10));
    assert_eq!(html_comment_end("<!-- This is a comment -->", 0), Some(26));
    assert_eq!(html_comment_end("ab<!--x-->cd", 2), Some(10));
}

#[test]
fn comment_end_uses_first_closer() {
    assert_eq!(html_comment_end("<!-- a --> b -->", 0), Some(10));
}

#[test]
fn comment_end_rejects_non_comments() {
    assert_eq!(html_comment_end("<!- This is not a comment -->", 0), None);
    assert_eq!(html_comment_end("<div>", 0), None);
}

#[test]
fn comment_end_rejects_unterminated_comment() {
    assert_eq!(html_comment_end("<!-- This is not closed", 0), None);
    assert_eq!(html_comment_end("<!-->", 0), None);
}

#[test]
fn tag_info_for_opening_tag() {
    assert_eq!(
        html_tag_info("<div class=\"test\">", 0),
        Some(HtmlTag {
            name: "div".to_string(),
            end: 18,
            self_closing: false,
        })
    );
}

#[test]
fn tag_info_for_self_closing_tag() {
    assert_eq!(
        html_tag_info("<img src=\"test.jpg\" />", 0),
        Some(HtmlTag {
            name: "img".to_string(),
            end: 22,
            self_closing: true,
        })
    );
    // 15 bytes; `end` is the offset right after "/>".
    assert_eq!(
        html_tag_info("<img src=\"x\" />", 0),
        Some(HtmlTag {
            name: "img".to_string(),
            end: 15,
            self_closing: true,
        })
    );
}

#[test]
fn tag_info_lowercases_name() {
    let tag = html_tag_info("<Custom-Chart data='1'>", 0).unwrap();
    assert_eq!(tag.name, "custom-chart");
    assert!(!tag.self_closing);
}

#[test]
fn tag_info_rejects_closing_tag() {
    assert_eq!(html_tag_info("</div>", 0), None);
}

#[test]
fn tag_info_rejects_non_tag_content() {
    assert_eq!(html_tag_info("This is not a tag", 0), None);
    assert_eq!(html_tag_info("a < b", 2), None);
}

#[test]
fn tag_info_rejects_empty_name() {
    assert_eq!(html_tag_info("<>", 0), None);
}

#[test]
fn tag_info_rejects_unterminated_tag() {
    assert_eq!(html_tag_info("<div class=\"x>", 0), None);
    assert_eq!(html_tag_info("<div", 0), None);
}

#[test]
fn closing_tag_end_matches_name() {
    assert_eq!(html_closing_tag_end("</div>", 0, "div"), Some(6));
}

#[test]
fn closing_tag_end_allows_whitespace_before_terminator() {
    assert_eq!(html_closing_tag_end("</div  >", 0, "div"), Some(8));
    assert_eq!(html_closing_tag_end("</div\n>", 0, "div"), Some(7));
}

#[test]
fn closing_tag_end_rejects_other_names() {
    assert_eq!(html_closing_tag_end("</span>", 0, "div"), None);
}

#[test]
fn closing_tag_end_rejects_opening_tag() {
    assert_eq!(html_closing_tag_end("<div>", 0, "div"), None);
}

#[test]
fn table_row_needs_pipes_on_both_ends() {
    assert!(is_table_row("| a | b |"));
    assert!(is_table_row("  | - |  "));
    assert!(!is_table_row("| a | b"));
    assert!(!is_table_row("a | b |"));
}

#[test]
fn separator_protected_after_comment_before_table() {
    let src = "<!-- c -->\n\n| a |";
    assert!(should_protect_separator(src, 10, "<!-- c -->"));
}

#[test]
fn separator_protected_between_table_rows() {
    let src = "| a |\n| - |\n\n| b |";
    assert!(should_protect_separator(src, 11, "| a |\n| - |"));
}

#[test]
fn separator_protection_skips_extra_newlines() {
    let src = "<!-- c -->\n\n\n\n| a |";
    assert!(should_protect_separator(src, 10, "<!-- c -->"));
}

#[test]
fn separator_not_protected_without_table_after() {
    let src = "A\n\nParagraph 1\n\nParagraph 2";
    assert!(!should_protect_separator(src, 1, "A"));

    let src = "<!-- c -->\n\nNormal text";
    assert!(!should_protect_separator(src, 10, "<!-- c -->"));
}

#[test]
fn separator_not_protected_for_plain_text_before_table() {
    let src = "text\n\n| a |";
    assert!(!should_protect_separator(src, 4, "text"));
}

#[test]
fn separator_table_lookback_is_limited_to_five_lines() {
    let far = "| a |\nl1\nl2\nl3\nl4\nl5";
    let src = format!("{far}\n\n| b |");
    assert!(!should_protect_separator(&src, far.len(), far));

    let near = "| a |\nl1\nl2\nl3\nl4";
    let src = format!("{near}\n\n| b |");
    assert!(should_protect_separator(&src, near.len(), near));
}

#[test]
fn separator_at_end_of_input_is_not_protected() {
    assert!(!should_protect_separator("| a |\n\n", 5, "| a |"));
}
