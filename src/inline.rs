//! Inline substitutions applied to the content of a single line.
//!
//! Each rule rewrites the whole line before the next rule runs. Within a rule
//! the scanner pairs an opening delimiter with the *first* closing delimiter
//! that leaves at least one character of content, and matches never overlap.

use crate::digest::md5_hex;

/// A delimited inline construct and its replacement.
struct InlineRule {
    open: &'static str,
    close: &'static str,
    replace: fn(&str) -> String,
}

const RULES: &[InlineRule] = &[
    InlineRule {
        open: "**",
        close: "**",
        replace: bold,
    },
    InlineRule {
        open: "__",
        close: "__",
        replace: emphasis,
    },
    InlineRule {
        open: "[[",
        close: "]]",
        replace: md5_hex,
    },
    InlineRule {
        open: "((",
        close: "))",
        replace: strip_c,
    },
];

/// Apply every inline rule, in order, to one line of content.
///
/// ```rust
/// use md2html::inline::transform;
///
/// assert_eq!(transform("Hello **world**"), "Hello <b>world</b>");
/// assert_eq!(transform("((Cactus))"), "atus");
/// ```
pub fn transform(line: &str) -> String {
    RULES
        .iter()
        .fold(line.to_string(), |text, rule| rule.apply(&text))
}

impl InlineRule {
    fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(self.open) {
            let content_start = start + self.open.len();
            let Some(first) = rest[content_start..].chars().next() else {
                break;
            };
            let search_from = content_start + first.len_utf8();
            // A later opener can only see less text, so one miss ends the scan.
            let Some(end) = rest[search_from..]
                .find(self.close)
                .map(|offset| search_from + offset)
            else {
                break;
            };

            out.push_str(&rest[..start]);
            out.push_str(&(self.replace)(&rest[content_start..end]));
            rest = &rest[end + self.close.len()..];
        }

        out.push_str(rest);
        out
    }
}

fn bold(content: &str) -> String {
    format!("<b>{content}</b>")
}

fn emphasis(content: &str) -> String {
    format!("<em>{content}</em>")
}

fn strip_c(content: &str) -> String {
    content.chars().filter(|c| !matches!(c, 'c' | 'C')).collect()
}
