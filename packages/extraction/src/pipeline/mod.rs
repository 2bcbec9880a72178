//! Extraction pipeline - the core of the library.
//!
//! The pipeline turns a fetched HTML body into prompt-ready text:
//! - Parse into an owned document tree
//! - Strip boilerplate (scripts, styles, site chrome) in place
//! - Read salient fields (title, meta description, headings, paragraphs, main content)
//! - Concatenate, normalize whitespace, truncate
//! - Reject pages with too little text

pub mod extract;
pub mod fields;
pub mod normalize;
pub mod strip;

pub use extract::extract_from_html;
pub use fields::{SalientFields, MAIN_CONTENT_SELECTOR};
pub use normalize::{char_len, normalize_whitespace, truncate_chars, word_count, TRUNCATION_MARKER};
pub use strip::{strip_boilerplate, BOILERPLATE_SELECTOR};
