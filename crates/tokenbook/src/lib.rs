//! # `tokenbook` Vocabulary Tables
//!
//! `tokenbook` manages fixed token vocabularies for sequence-processing
//! pipelines. A [`table::VocabTable`] is built once from a one-token-per-line
//! source listing, injects the four reserved special tokens (padding,
//! begin-of-seq, end-of-seq, unknown) at ids 0..=3, and then serves read-only
//! bidirectional token/id lookups for the life of the process.
//!
//! See:
//! * [`table`] for the vocabulary table itself.
//! * [`special`] for the reserved special-token roles and defaults.
//! * [`nested`] for the shape-preserving batch container used by lookups.
//! * [`io`] to load a table from a vocabulary file.
//!
//! Lookups are total functions: a miss in either direction resolves to the
//! unknown sentinel rather than an error, so downstream pipeline stages never
//! carry a per-token error path.
//!
//! ```rust
//! use tokenbook::special::SpecialTokens;
//! use tokenbook::table::VocabTable;
//!
//! type T = u32;
//!
//! let table: VocabTable<T> =
//!     VocabTable::build(["cat", "dog"], SpecialTokens::default()).unwrap();
//!
//! assert_eq!(table.token_to_id("cat"), 4);
//! assert_eq!(table.token_to_id("fish"), table.unk_token_id());
//! assert_eq!(table.id_to_token(0), "<PAD>");
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod io;
pub mod nested;
pub mod special;
pub mod table;
pub mod types;

#[doc(inline)]
pub use errors::{Result, TokenbookError};
#[doc(inline)]
pub use nested::Nested;
#[doc(inline)]
pub use special::{SpecialRole, SpecialTokens};
#[doc(inline)]
pub use table::VocabTable;
#[doc(inline)]
pub use types::TokenType;
