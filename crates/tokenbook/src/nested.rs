//! # Nested Batch Containers
//!
//! Pipelines hand the table anything from a single token to a batch of
//! sequences of tokens. [`Nested`] is the tagged union the lookups are
//! defined over: rank-0 input is a [`Nested::Leaf`], rank-1 a [`Nested::Many`]
//! of leaves, rank-N nests further. Lookups map over the leaves and hand back
//! the exact same shape.

/// An arbitrarily nested batch of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<V> {
    /// A single scalar value.
    Leaf(V),

    /// An ordered sequence of nested batches.
    Many(Vec<Nested<V>>),
}

impl<V> Nested<V> {
    /// Wrap a single value as a rank-0 batch.
    pub fn leaf(value: impl Into<V>) -> Self {
        Nested::Leaf(value.into())
    }

    /// Collect nested batches into a sequence.
    pub fn many(items: impl IntoIterator<Item = Nested<V>>) -> Self {
        Nested::Many(items.into_iter().collect())
    }

    /// Wrap a flat sequence of values as a rank-1 batch.
    pub fn sequence(values: impl IntoIterator<Item = V>) -> Self {
        Nested::Many(values.into_iter().map(Nested::Leaf).collect())
    }

    /// Apply `f` to every leaf, preserving the nesting shape exactly.
    ///
    /// ## Arguments
    /// * `f` - the leaf transform.
    ///
    /// ## Returns
    /// A batch of the same shape with each leaf replaced by `f(leaf)`.
    pub fn map<U, F>(
        &self,
        f: &mut F,
    ) -> Nested<U>
    where
        F: FnMut(&V) -> U,
    {
        match self {
            Nested::Leaf(value) => Nested::Leaf(f(value)),
            Nested::Many(items) => Nested::Many(items.iter().map(|item| item.map(f)).collect()),
        }
    }

    /// The number of leaves in the batch.
    pub fn leaf_count(&self) -> usize {
        match self {
            Nested::Leaf(_) => 1,
            Nested::Many(items) => items.iter().map(Nested::leaf_count).sum(),
        }
    }

    /// The nesting depth; 0 for a leaf.
    ///
    /// Uniform nesting is the caller's contract; for ragged input this is the
    /// max depth over children.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::Many(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

impl<V> FromIterator<Nested<V>> for Nested<V> {
    fn from_iter<I: IntoIterator<Item = Nested<V>>>(iter: I) -> Self {
        Nested::many(iter)
    }
}

impl From<&str> for Nested<String> {
    fn from(value: &str) -> Self {
        Nested::Leaf(value.to_string())
    }
}
