mod syntax;

pub use syntax::SyntaxHighlighter;
