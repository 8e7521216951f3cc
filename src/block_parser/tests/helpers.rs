use crate::block_parser::BlockParser;
use crate::config::{Config, OrderedMarker};
use crate::syntax::{SyntaxKind, SyntaxNode};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn parse_blocks(input: &str) -> SyntaxNode {
    init_logger();
    BlockParser::new(input, &Config::default()).parse()
}

pub fn parse_blocks_numeric(input: &str) -> SyntaxNode {
    init_logger();
    let config = Config {
        ordered_marker: OrderedMarker::Numeric,
    };
    BlockParser::new(input, &config).parse()
}

pub fn find_first(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    node.descendants().find(|n| n.kind() == kind)
}

pub fn get_blocks(node: &SyntaxNode) -> Vec<SyntaxNode> {
    let document = node
        .children()
        .find(|n| n.kind() == SyntaxKind::DOCUMENT)
        .unwrap();
    let blocks: Vec<SyntaxNode> = document.children().collect();
    blocks
}

pub fn child_texts(node: &SyntaxNode, kind: SyntaxKind) -> Vec<String> {
    node.descendants()
        .filter(|n| n.kind() == kind)
        .map(|n| n.text().to_string())
        .collect()
}

pub fn assert_block_kinds(input: &str, expected: &[SyntaxKind]) {
    let node = parse_blocks(input);
    let blocks = get_blocks(&node);
    let actual: Vec<_> = blocks.iter().map(|n| n.kind()).collect();
    assert_eq!(
        actual, expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}
