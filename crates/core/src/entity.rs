//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Key the entity is addressed by. Keys are not required to be unique
    /// within a [`RecordStore`](crate::RecordStore).
    type Id: Eq + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
