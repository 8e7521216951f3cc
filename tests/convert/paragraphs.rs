use md2html::convert;

#[test]
fn lines_joined_with_breaks() {
    similar_asserts::assert_eq!(
        convert("Hello\nWorld\n"),
        "<p>\nHello\n<br/>\nWorld\n</p>\n"
    );
}

#[test]
fn missing_final_newline() {
    similar_asserts::assert_eq!(convert("Hello"), "<p>\nHello\n</p>\n");
}

#[test]
fn crlf_line_endings() {
    similar_asserts::assert_eq!(
        convert("# T\r\n\r\nA\r\nB\r\n"),
        "<h1>T</h1>\n<p>\nA\n<br/>\nB\n</p>\n"
    );
}

#[test]
fn only_blank_lines() {
    similar_asserts::assert_eq!(convert("\n \n\n"), "");
}
