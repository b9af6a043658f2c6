//! Records that carry a stable identity of their own.

/// A value that is told apart from its peers by `id()`, not by its fields.
pub trait Entity {
    /// Identifier type; printable so it can appear in error messages.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;
}
