use rowan::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    TEXT = 0,
    HeadingMarker, // leading #####
    ListMarker,    // "- ", "* " or "1. "

    // Composite nodes
    ROOT,
    DOCUMENT,
    BlankLine,

    // Headings
    Heading,
    HeadingContent,

    // Lists
    UnorderedList,
    OrderedList,
    ListItem,
    ListItemContent,

    // Paragraphs
    PARAGRAPH,
    ParagraphLine,
}

impl SyntaxKind {
    fn from_raw(raw: u16) -> Self {
        const KINDS: [SyntaxKind; 14] = [
            SyntaxKind::TEXT,
            SyntaxKind::HeadingMarker,
            SyntaxKind::ListMarker,
            SyntaxKind::ROOT,
            SyntaxKind::DOCUMENT,
            SyntaxKind::BlankLine,
            SyntaxKind::Heading,
            SyntaxKind::HeadingContent,
            SyntaxKind::UnorderedList,
            SyntaxKind::OrderedList,
            SyntaxKind::ListItem,
            SyntaxKind::ListItemContent,
            SyntaxKind::PARAGRAPH,
            SyntaxKind::ParagraphLine,
        ];
        KINDS[raw as usize]
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkdownLanguage {}

impl Language for MarkdownLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SyntaxKind::from_raw(raw.0)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<MarkdownLanguage>;
