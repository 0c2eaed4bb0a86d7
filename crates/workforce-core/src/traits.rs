//! Core traits shared by the entity model.

/// An entity whose identity is assigned when it is first persisted.
///
/// An absent identity means the entity has never been stored; the
/// transition from transient to persistent happens once, on insert.
pub trait Entity {
    /// Typed identity of the entity.
    type Id: Copy + std::fmt::Display;

    /// Human-readable resource name used in error messages.
    const RESOURCE: &'static str;

    /// Returns the entity's identity, if it has been persisted.
    fn id(&self) -> Option<Self::Id>;

    /// Returns true if the entity has never been persisted.
    fn is_transient(&self) -> bool {
        self.id().is_none()
    }
}
