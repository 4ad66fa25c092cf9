//! # Vocabulary Table
//!
//! [`VocabTable`] owns the two complementary maps over the combined
//! special + loaded token set: `id -> token` (a dense vector indexed by id)
//! and `token -> id` (a hash map). It is built once and read-only thereafter,
//! so concurrent lookups need no locking.

use crate::{
    errors::{Result, TokenbookError},
    nested::Nested,
    special::{SpecialRole, SpecialTokens},
    types::{TokenIdMap, TokenType},
};

/// Immutable token/id lookup table with reserved special tokens.
///
/// Ids are dense and contiguous: the four special tokens occupy 0..=3 in
/// pad/bos/eos/unk order, and loaded tokens follow from 4 in source order.
/// Lookup misses in either direction resolve to the unknown sentinel.
#[derive(Debug, Clone)]
pub struct VocabTable<T: TokenType> {
    /// The special-token bindings.
    specials: SpecialTokens,

    /// Dense `id -> token` map; the index is the id.
    id_to_token: Vec<String>,

    /// Map of `{ String -> T }`.
    token_to_id: TokenIdMap<T>,
}

impl<T: TokenType> VocabTable<T> {
    /// Build a table from an ordered source listing.
    ///
    /// The lines must already be stripped of terminators and surrounding
    /// whitespace (see [`crate::io::read_vocab_lines`]). Duplicate lines
    /// collapse to a single entry; the last occurrence's id wins.
    ///
    /// ## Arguments
    /// * `lines` - the source listing, one token per entry, in file order.
    /// * `specials` - the four reserved token strings.
    ///
    /// ## Returns
    /// The immutable table, or an error if a reserved string already appears
    /// among `lines`, or if the combined size does not fit `T`.
    pub fn build<I, S>(
        lines: I,
        specials: SpecialTokens,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();

        for role in SpecialRole::ALL {
            let token = specials.token(role);
            if lines.iter().any(|line| line == token) {
                return Err(TokenbookError::DuplicateSpecialToken {
                    role,
                    token: token.to_string(),
                });
            }
        }

        let mut id_to_token = Vec::with_capacity(SpecialRole::ALL.len() + lines.len());
        id_to_token.extend(specials.as_array().map(str::to_string));
        id_to_token.extend(lines);

        let size = id_to_token.len();
        if T::from_usize(size - 1).is_none() {
            return Err(TokenbookError::VocabSizeOverflow { size });
        }

        // Insertion order makes the last duplicate win.
        let token_to_id: TokenIdMap<T> = id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (token.clone(), T::from_usize(id).unwrap()))
            .collect();

        Ok(Self {
            specials,
            id_to_token,
            token_to_id,
        })
    }

    /// The id for `token`; the unknown id when absent.
    pub fn token_to_id(
        &self,
        token: &str,
    ) -> T {
        self.token_to_id
            .get(token)
            .copied()
            .unwrap_or_else(|| self.unk_token_id())
    }

    /// The token for `id`; the unknown token when out of range.
    pub fn id_to_token(
        &self,
        id: T,
    ) -> &str {
        id.to_usize()
            .and_then(|ix| self.id_to_token.get(ix))
            .map_or_else(|| self.specials.unk(), String::as_str)
    }

    /// Map a (possibly nested) batch of tokens to ids.
    ///
    /// The nesting shape is preserved exactly; unknown tokens resolve to the
    /// unknown id. Total over strings.
    pub fn tokens_to_ids(
        &self,
        tokens: &Nested<String>,
    ) -> Nested<T> {
        tokens.map(&mut |token| self.token_to_id(token))
    }

    /// Map a (possibly nested) batch of ids to tokens.
    ///
    /// The symmetric counterpart of [`Self::tokens_to_ids`]; absent ids
    /// resolve to the unknown token string.
    pub fn ids_to_tokens(
        &self,
        ids: &Nested<T>,
    ) -> Nested<String> {
        ids.map(&mut |&id| self.id_to_token(id).to_string())
    }

    /// Map a flat token sequence to ids.
    pub fn map_tokens_to_ids<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<T> {
        tokens
            .iter()
            .map(|token| self.token_to_id(token.as_ref()))
            .collect()
    }

    /// Map a flat id sequence to tokens.
    pub fn map_ids_to_tokens(
        &self,
        ids: &[T],
    ) -> Vec<String> {
        ids.iter().map(|&id| self.id_to_token(id).to_string()).collect()
    }

    /// The vocabulary size: 4 specials + count of distinct loaded lines.
    ///
    /// Duplicate lines collapse on the map side, so they count once here
    /// even though the dense `id -> token` side keeps every position.
    pub fn len(&self) -> usize {
        self.token_to_id.len()
    }

    /// Always false; every table holds at least the four specials.
    pub fn is_empty(&self) -> bool {
        self.token_to_id.is_empty()
    }

    /// The special-token bindings.
    pub fn specials(&self) -> &SpecialTokens {
        &self.specials
    }

    /// The four special-token strings, in fixed pad/bos/eos/unk order.
    pub fn special_tokens(&self) -> [&str; 4] {
        self.specials.as_array()
    }

    /// The fixed id for a reserved role.
    pub fn special_token_id(
        &self,
        role: SpecialRole,
    ) -> T {
        // Size >= 4 is checked at build time.
        T::from_usize(role.fixed_id()).unwrap()
    }

    /// The padding token.
    pub fn pad_token(&self) -> &str {
        self.specials.pad()
    }

    /// The padding id; always 0.
    pub fn pad_token_id(&self) -> T {
        self.special_token_id(SpecialRole::Padding)
    }

    /// The begin-of-sequence token.
    pub fn bos_token(&self) -> &str {
        self.specials.bos()
    }

    /// The begin-of-sequence id; always 1.
    pub fn bos_token_id(&self) -> T {
        self.special_token_id(SpecialRole::BeginOfSequence)
    }

    /// The end-of-sequence token.
    pub fn eos_token(&self) -> &str {
        self.specials.eos()
    }

    /// The end-of-sequence id; always 2.
    pub fn eos_token_id(&self) -> T {
        self.special_token_id(SpecialRole::EndOfSequence)
    }

    /// The unknown-sentinel token.
    pub fn unk_token(&self) -> &str {
        self.specials.unk()
    }

    /// The unknown-sentinel id; always 3.
    pub fn unk_token_id(&self) -> T {
        self.special_token_id(SpecialRole::Unknown)
    }
}
