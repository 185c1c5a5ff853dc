pub mod engine;
pub mod renderer;
pub mod toc;
pub mod types;

pub use engine::ComrakConverter;
pub use toc::render_toc;
pub use types::{Conversion, HeadingEntry, MarkdownConverter};
