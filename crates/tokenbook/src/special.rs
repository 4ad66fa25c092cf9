//! # Special Token Roles
//!
//! Every vocabulary table reserves four token roles, bound to the first four
//! ids in a fixed order: padding at 0, begin-of-seq at 1, end-of-seq at 2,
//! and the unknown sentinel at 3.

use strum::Display;

/// Default padding marker.
pub const PAD_TOKEN: &str = "<PAD>";

/// Default begin-of-sequence marker.
pub const BOS_TOKEN: &str = "<BOS>";

/// Default end-of-sequence marker.
pub const EOS_TOKEN: &str = "<EOS>";

/// Default unknown-token marker.
pub const UNK_TOKEN: &str = "<UNK>";

/// The four reserved vocabulary roles, in fixed id order.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialRole {
    /// Sequence padding; always id 0.
    #[strum(serialize = "padding")]
    Padding = 0,

    /// Begin-of-sequence marker; always id 1.
    #[strum(serialize = "begin-of-seq")]
    BeginOfSequence = 1,

    /// End-of-sequence marker; always id 2.
    #[strum(serialize = "end-of-seq")]
    EndOfSequence = 2,

    /// Unknown-token sentinel; always id 3.
    #[strum(serialize = "UNK")]
    Unknown = 3,
}

impl SpecialRole {
    /// All roles, in id order.
    pub const ALL: [SpecialRole; 4] = [
        SpecialRole::Padding,
        SpecialRole::BeginOfSequence,
        SpecialRole::EndOfSequence,
        SpecialRole::Unknown,
    ];

    /// The fixed id this role occupies in every table.
    pub const fn fixed_id(self) -> usize {
        self as usize
    }
}

/// The token strings bound to the four reserved roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialTokens {
    pad: String,
    bos: String,
    eos: String,
    unk: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self::new(PAD_TOKEN, BOS_TOKEN, EOS_TOKEN, UNK_TOKEN)
    }
}

impl SpecialTokens {
    /// Bind custom strings to the four roles.
    ///
    /// ## Arguments
    /// * `pad` - the padding token.
    /// * `bos` - the begin-of-sequence token.
    /// * `eos` - the end-of-sequence token.
    /// * `unk` - the unknown-token sentinel.
    pub fn new<S: Into<String>>(
        pad: S,
        bos: S,
        eos: S,
        unk: S,
    ) -> Self {
        Self {
            pad: pad.into(),
            bos: bos.into(),
            eos: eos.into(),
            unk: unk.into(),
        }
    }

    /// The token string bound to `role`.
    pub fn token(
        &self,
        role: SpecialRole,
    ) -> &str {
        match role {
            SpecialRole::Padding => &self.pad,
            SpecialRole::BeginOfSequence => &self.bos,
            SpecialRole::EndOfSequence => &self.eos,
            SpecialRole::Unknown => &self.unk,
        }
    }

    /// The padding token.
    pub fn pad(&self) -> &str {
        &self.pad
    }

    /// The begin-of-sequence token.
    pub fn bos(&self) -> &str {
        &self.bos
    }

    /// The end-of-sequence token.
    pub fn eos(&self) -> &str {
        &self.eos
    }

    /// The unknown-token sentinel.
    pub fn unk(&self) -> &str {
        &self.unk
    }

    /// The four token strings, in fixed pad/bos/eos/unk order.
    pub fn as_array(&self) -> [&str; 4] {
        [&self.pad, &self.bos, &self.eos, &self.unk]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ids() {
        assert_eq!(SpecialRole::Padding.fixed_id(), 0);
        assert_eq!(SpecialRole::BeginOfSequence.fixed_id(), 1);
        assert_eq!(SpecialRole::EndOfSequence.fixed_id(), 2);
        assert_eq!(SpecialRole::Unknown.fixed_id(), 3);

        for (id, role) in SpecialRole::ALL.into_iter().enumerate() {
            assert_eq!(role.fixed_id(), id);
        }
    }

    #[test]
    fn test_default_tokens() {
        let specials = SpecialTokens::default();
        assert_eq!(specials.as_array(), ["<PAD>", "<BOS>", "<EOS>", "<UNK>"]);
        assert_eq!(specials.token(SpecialRole::Unknown), "<UNK>");
    }

    #[test]
    fn test_custom_tokens() {
        let specials = SpecialTokens::new("<p>", "<b>", "<e>", "<u>");
        assert_eq!(specials.pad(), "<p>");
        assert_eq!(specials.bos(), "<b>");
        assert_eq!(specials.eos(), "<e>");
        assert_eq!(specials.unk(), "<u>");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(SpecialRole::BeginOfSequence.to_string(), "begin-of-seq");
        assert_eq!(SpecialRole::Unknown.to_string(), "UNK");
    }
}
