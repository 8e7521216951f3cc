use md2html::convert;

#[test]
fn title_is_a_bare_heading() {
    similar_asserts::assert_eq!(convert("# Title\n"), "<h1>Title</h1>\n");
}

#[test]
fn trailing_hashes_are_removed() {
    let out = convert("### A level-three heading ###\n");
    similar_asserts::assert_eq!(out, "<h3>A level-three heading</h3>\n");
}

#[test]
fn surrounding_spaces_are_trimmed() {
    similar_asserts::assert_eq!(convert("##   Title   \n"), "<h2>Title</h2>\n");
}

#[test]
fn heading_between_paragraph_lines() {
    let out = convert("intro\n# Break\noutro\n");
    similar_asserts::assert_eq!(
        out,
        "<p>\nintro\n</p>\n<h1>Break</h1>\n<p>\noutro\n</p>\n"
    );
}
