//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID.

use std::collections::HashSet;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Drop entities whose id was already seen, keeping the first occurrence.
///
/// Returns the ids that were dropped, in encounter order.
pub fn retain_unique<T: Entity>(entities: &mut Vec<T>) -> Vec<T::Id> {
    let mut seen = HashSet::with_capacity(entities.len());
    let mut dropped = Vec::new();
    entities.retain(|entity| {
        let id = entity.id();
        if seen.insert(id) {
            true
        } else {
            dropped.push(id);
            false
        }
    });
    dropped
}
