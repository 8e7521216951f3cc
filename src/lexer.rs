use crate::config::{Config, OrderedMarker};

/// Deepest heading level; longer `#` runs are plain text.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Classification of one non-blank line, after inline substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading {
        marker: &'a str,
        content: &'a str,
    },
    UnorderedItem {
        marker: &'a str,
        content: &'a str,
    },
    OrderedItem {
        marker: &'a str,
        content: &'a str,
    },
    Paragraph,
}

type Classifier = for<'a> fn(&'a str, &Config) -> Option<LineKind<'a>>;

/// Evaluated top to bottom; the first match wins. Anything left over is a
/// paragraph line.
const CLASSIFIERS: &[Classifier] = &[atx_heading, ordered_item, unordered_item];

/// Blank lines are detected on the raw line, before any inline rule runs.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub fn classify<'a>(line: &'a str, config: &Config) -> LineKind<'a> {
    let kind = CLASSIFIERS
        .iter()
        .find_map(|classifier| classifier(line, config))
        .unwrap_or(LineKind::Paragraph);
    log::trace!("Classified {line:?} as {kind:?}");
    kind
}

fn atx_heading<'a>(line: &'a str, _config: &Config) -> Option<LineKind<'a>> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL {
        return None;
    }

    let (marker, rest) = line.split_at(hashes);
    // A closing hash run only counts when it ends the line
    let content = rest.trim_end_matches('#').trim();
    Some(LineKind::Heading { marker, content })
}

fn unordered_item<'a>(line: &'a str, config: &Config) -> Option<LineKind<'a>> {
    let is_marker = |prefix: &str| line.starts_with(prefix);
    let matched = match config.ordered_marker {
        OrderedMarker::Asterisk => is_marker("- "),
        OrderedMarker::Numeric => is_marker("- ") || is_marker("* "),
    };
    if !matched {
        return None;
    }

    let (marker, rest) = line.split_at(2);
    Some(LineKind::UnorderedItem {
        marker,
        content: rest.trim(),
    })
}

fn ordered_item<'a>(line: &'a str, config: &Config) -> Option<LineKind<'a>> {
    let marker_len = match config.ordered_marker {
        OrderedMarker::Asterisk => line.starts_with("* ").then_some(2),
        OrderedMarker::Numeric => numbered_marker_len(line),
    }?;

    let (marker, rest) = line.split_at(marker_len);
    Some(LineKind::OrderedItem {
        marker,
        content: rest.trim(),
    })
}

/// Length of a `12. ` style prefix, including the trailing space.
fn numbered_marker_len(line: &str) -> Option<usize> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].starts_with(". ").then_some(digits + 2)
}
