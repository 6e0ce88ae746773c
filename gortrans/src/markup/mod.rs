//! Linear markup token stream.
//!
//! Pages are consumed as a one-pass sequence of start tags, text runs and
//! an end-of-stream marker. Nothing downstream ever sees a document tree.

mod token;
mod tokenizer;

pub use token::{MarkupToken, StartTag};
pub use tokenizer::tokenize;
