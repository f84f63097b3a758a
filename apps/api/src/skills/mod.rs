// Rules engine: taxonomy keyword extraction and role inference.
// Everything except handlers is a pure function over 'static tables.

pub mod extractor;
pub mod handlers;
pub mod roles;
pub mod taxonomy;
pub mod tokenizer;
