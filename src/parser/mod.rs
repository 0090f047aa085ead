//! Markup loading module.

pub mod entities;
mod markup_parser;
mod options;
mod tokenizer;

pub use markup_parser::{is_void_element, MarkupParser, VOID_ELEMENTS};
pub use options::ParseOptions;
pub use tokenizer::{Token, Tokenizer};
