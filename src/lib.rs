pub mod block_parser;
pub mod config;
pub mod digest;
pub mod error;
pub mod inline;
pub mod lexer;
pub mod renderer;
pub mod syntax;

pub use config::Config;
pub use error::Error;
pub use renderer::Renderer;

use block_parser::BlockParser;
use syntax::SyntaxNode;

/// Parses a Markdown document into its block tree.
pub fn parse(input: &str, config: &Config) -> SyntaxNode {
    BlockParser::new(input, config).parse()
}

/// Renders a block tree produced by [`parse`] as HTML.
pub fn render(tree: &SyntaxNode) -> String {
    Renderer::new().render(tree)
}

/// Converts a Markdown document to HTML using the default configuration.
///
/// Every emitted tag and content line is followed by a newline. The
/// conversion is one-way: feeding the HTML back in does not reproduce it.
///
/// # Examples
///
/// ```rust
/// use md2html::convert;
///
/// let html = convert("# Title\n\nHello **world**\n");
/// assert_eq!(html, "<h1>Title</h1>\n<p>\nHello <b>world</b>\n</p>\n");
/// ```
pub fn convert(input: &str) -> String {
    convert_with(input, &Config::default())
}

/// Converts a Markdown document to HTML with the given configuration.
pub fn convert_with(input: &str, config: &Config) -> String {
    let tree = parse(input, config);
    render(&tree)
}
