//! # Tokenized Text Inputs
//!
//! Scoring accepts hypotheses and references as raw sentence strings or as
//! already-tokenized sequences. [`TokenizedText`] is the seam that makes the
//! two interchangeable: strings split on whitespace, token sequences pass
//! through as-is.

fn fold(
    token: &str,
    lowercase: bool,
) -> String {
    if lowercase {
        token.to_lowercase()
    } else {
        token.to_string()
    }
}

/// Anything usable as a sequence of text tokens.
pub trait TokenizedText {
    /// The token sequence, case-folded when `lowercase` is set.
    fn to_tokens(
        &self,
        lowercase: bool,
    ) -> Vec<String>;
}

impl TokenizedText for str {
    fn to_tokens(
        &self,
        lowercase: bool,
    ) -> Vec<String> {
        self.split_whitespace()
            .map(|token| fold(token, lowercase))
            .collect()
    }
}

impl TokenizedText for String {
    fn to_tokens(
        &self,
        lowercase: bool,
    ) -> Vec<String> {
        self.as_str().to_tokens(lowercase)
    }
}

impl<S: AsRef<str>> TokenizedText for [S] {
    fn to_tokens(
        &self,
        lowercase: bool,
    ) -> Vec<String> {
        self.iter()
            .map(|token| fold(token.as_ref(), lowercase))
            .collect()
    }
}

impl<S: AsRef<str>> TokenizedText for Vec<S> {
    fn to_tokens(
        &self,
        lowercase: bool,
    ) -> Vec<String> {
        self.as_slice().to_tokens(lowercase)
    }
}

impl<T: TokenizedText + ?Sized> TokenizedText for &T {
    fn to_tokens(
        &self,
        lowercase: bool,
    ) -> Vec<String> {
        (**self).to_tokens(lowercase)
    }
}
