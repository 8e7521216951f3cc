use crate::syntax::{SyntaxKind, SyntaxNode};

/// Writes HTML for a block tree, one tag or content line per output line.
/// Inline rules have already been applied by the block parser.
pub struct Renderer {
    output: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    pub fn render(mut self, node: &SyntaxNode) -> String {
        self.render_node(node);
        self.output
    }

    fn render_node(&mut self, node: &SyntaxNode) {
        match node.kind() {
            SyntaxKind::ROOT | SyntaxKind::DOCUMENT => {
                for child in node.children() {
                    self.render_node(&child);
                }
            }

            SyntaxKind::BlankLine => {}

            SyntaxKind::Heading => {
                let level = heading_level(node);
                let content = content_of(node, SyntaxKind::HeadingContent);
                self.push_line(&format!("<h{level}>{content}</h{level}>"));
            }

            SyntaxKind::UnorderedList | SyntaxKind::OrderedList => {
                let tag = if node.kind() == SyntaxKind::OrderedList {
                    "ol"
                } else {
                    "ul"
                };
                self.push_line(&format!("<{tag}>"));
                for item in node.children() {
                    self.render_node(&item);
                }
                self.push_line(&format!("</{tag}>"));
            }

            SyntaxKind::ListItem => {
                let content = content_of(node, SyntaxKind::ListItemContent);
                self.push_line(&format!("<li>{content}</li>"));
            }

            SyntaxKind::PARAGRAPH => {
                self.push_line("<p>");
                for (i, line) in node.children().enumerate() {
                    if i > 0 {
                        self.push_line("<br/>");
                    }
                    self.push_line(&line.text().to_string());
                }
                self.push_line("</p>");
            }

            kind => log::trace!("Nothing to render for {kind:?}"),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn heading_level(node: &SyntaxNode) -> usize {
    node.children_with_tokens()
        .filter_map(|el| el.into_token())
        .find(|t| t.kind() == SyntaxKind::HeadingMarker)
        .map_or(1, |t| t.text().len())
}

fn content_of(node: &SyntaxNode, kind: SyntaxKind) -> String {
    node.children()
        .find(|n| n.kind() == kind)
        .map(|n| n.text().to_string())
        .unwrap_or_default()
}
