use md2html::convert;

#[test]
fn bold_in_paragraph() {
    similar_asserts::assert_eq!(convert("**bold**\n"), "<p>\n<b>bold</b>\n</p>\n");
}

#[test]
fn digest_in_list_item() {
    similar_asserts::assert_eq!(
        convert("* [[abc]]\n"),
        "<ol>\n<li>900150983cd24fb0d6963f7d28e17f72</li>\n</ol>\n"
    );
}

#[test]
fn filter_in_heading() {
    similar_asserts::assert_eq!(convert("# ((Cactus))\n"), "<h1>atus</h1>\n");
}

#[test]
fn literal_html_is_not_escaped() {
    similar_asserts::assert_eq!(
        convert("<i>kept</i> & **b**\n"),
        "<p>\n<i>kept</i> & <b>b</b>\n</p>\n"
    );
}
