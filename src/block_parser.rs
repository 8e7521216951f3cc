use crate::config::Config;
use crate::inline;
use crate::lexer::{LineKind, classify, is_blank};
use crate::syntax::{SyntaxKind, SyntaxNode};
use rowan::GreenNodeBuilder;

/// The block currently open in the tree builder. Blocks never nest, so
/// there is at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    None,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl BlockState {
    fn node_kind(self) -> Option<SyntaxKind> {
        match self {
            BlockState::None => None,
            BlockState::UnorderedList => Some(SyntaxKind::UnorderedList),
            BlockState::OrderedList => Some(SyntaxKind::OrderedList),
            BlockState::Paragraph => Some(SyntaxKind::PARAGRAPH),
        }
    }
}

pub struct BlockParser<'a> {
    lines: Vec<&'a str>,
    config: &'a Config,
    state: BlockState,
    builder: GreenNodeBuilder<'static>,
}

impl<'a> BlockParser<'a> {
    pub fn new(input: &'a str, config: &'a Config) -> Self {
        let lines: Vec<&str> = input.lines().collect();
        Self {
            lines,
            config,
            state: BlockState::None,
            builder: GreenNodeBuilder::new(),
        }
    }

    /// Finish the open block, if any.
    fn close_block(&mut self) {
        if self.state != BlockState::None {
            log::debug!("Closing {:?}", self.state);
            self.builder.finish_node();
            self.state = BlockState::None;
        }
    }

    /// Make `state` the open block, closing a different one first.
    /// Returns true when a new block node was started.
    fn ensure_block(&mut self, state: BlockState) -> bool {
        if self.state == state {
            return false;
        }
        self.close_block();
        if let Some(kind) = state.node_kind() {
            log::debug!("Opening {state:?}");
            self.builder.start_node(kind.into());
        }
        self.state = state;
        true
    }

    fn parse_blank_line(&mut self, line: &str) {
        self.close_block();
        self.builder.start_node(SyntaxKind::BlankLine.into());
        self.builder.token(SyntaxKind::TEXT.into(), line);
        self.builder.finish_node();
    }

    fn parse_heading(&mut self, marker: &str, content: &str) {
        self.close_block();

        self.builder.start_node(SyntaxKind::Heading.into());
        self.builder.token(SyntaxKind::HeadingMarker.into(), marker);
        self.builder.start_node(SyntaxKind::HeadingContent.into());
        self.builder.token(SyntaxKind::TEXT.into(), content);
        self.builder.finish_node();
        self.builder.finish_node(); // Heading
    }

    fn parse_list_item(&mut self, list: BlockState, marker: &str, content: &str) {
        self.ensure_block(list);

        self.builder.start_node(SyntaxKind::ListItem.into());
        self.builder.token(SyntaxKind::ListMarker.into(), marker);
        self.builder.start_node(SyntaxKind::ListItemContent.into());
        self.builder.token(SyntaxKind::TEXT.into(), content);
        self.builder.finish_node();
        self.builder.finish_node(); // ListItem
    }

    fn parse_paragraph_line(&mut self, line: &str) {
        if !self.ensure_block(BlockState::Paragraph) {
            log::debug!("Continuing paragraph");
        }

        self.builder.start_node(SyntaxKind::ParagraphLine.into());
        self.builder.token(SyntaxKind::TEXT.into(), line);
        self.builder.finish_node();
    }

    pub fn parse(mut self) -> SyntaxNode {
        self.builder.start_node(SyntaxKind::ROOT.into());
        self.parse_document();
        self.builder.finish_node();

        SyntaxNode::new_root(self.builder.finish())
    }

    fn parse_document(&mut self) {
        self.builder.start_node(SyntaxKind::DOCUMENT.into());

        log::debug!("Starting document parse");

        let lines = std::mem::take(&mut self.lines);
        for (idx, &line) in lines.iter().enumerate() {
            log::debug!("Parsing line {}: {}", idx + 1, line);

            if is_blank(line) {
                self.parse_blank_line(line);
                continue;
            }

            // Inline rules run once over the whole line; the block markers
            // are read from their output.
            let text = inline::transform(line);
            match classify(&text, self.config) {
                LineKind::Heading { marker, content } => self.parse_heading(marker, content),
                LineKind::UnorderedItem { marker, content } => {
                    self.parse_list_item(BlockState::UnorderedList, marker, content)
                }
                LineKind::OrderedItem { marker, content } => {
                    self.parse_list_item(BlockState::OrderedList, marker, content)
                }
                LineKind::Paragraph => self.parse_paragraph_line(&text),
            }
        }

        self.close_block();
        self.builder.finish_node();
    }
}
