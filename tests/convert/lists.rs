use md2html::config::{Config, OrderedMarker};
use md2html::{convert, convert_with};

#[test]
fn unordered_run_closed_once() {
    let out = convert("- a\n- b\n- c\n");
    similar_asserts::assert_eq!(out, "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>\n");
    assert_eq!(out.matches("</ul>").count(), 1);
}

#[test]
fn blank_line_splits_lists() {
    let out = convert("- a\n\n- b\n");
    similar_asserts::assert_eq!(out, "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>\n");
}

#[test]
fn item_content_is_trimmed() {
    similar_asserts::assert_eq!(convert("-    spaced   \n"), "<ul>\n<li>spaced</li>\n</ul>\n");
}

#[test]
fn numeric_markers_with_config() {
    let config = Config {
        ordered_marker: OrderedMarker::Numeric,
    };
    similar_asserts::assert_eq!(
        convert_with("1. one\n10. ten\n", &config),
        "<ol>\n<li>one</li>\n<li>ten</li>\n</ol>\n"
    );
    similar_asserts::assert_eq!(
        convert("1. one\n"),
        "<p>\n1. one\n</p>\n"
    );
}
