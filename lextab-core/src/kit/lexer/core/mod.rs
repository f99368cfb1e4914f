//! Character stream stages that run in front of the lexer engine

pub mod stream;

pub use stream::{normalize_line_endings, LineEndings, NormalizeLineEndings};
