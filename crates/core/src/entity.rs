//! Entity trait: identity assigned by the backend.

/// Entity marker + minimal interface.
///
/// Identifiers are server-assigned, so an entity that has not been saved yet
/// has no id.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier, if the backend assigned one.
    fn id(&self) -> Option<Self::Id>;

    /// Whether this entity is new (not yet persisted).
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}
