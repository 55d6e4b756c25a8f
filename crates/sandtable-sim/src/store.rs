//! Entity store — runtime unit records keyed by id.
//!
//! A pure data container. All validation and mutation policy lives in
//! the engine; concurrency discipline is the owner's responsibility.

use std::collections::HashMap;

use sandtable_core::state::Entity;

/// A unit as the engine sees it: the public view plus the private
/// route cursor, which never crosses the wire.
#[derive(Debug, Clone)]
pub struct RuntimeEntity {
    pub entity: Entity,
    /// Zero-based cursor into `entity.route`.
    pub route_index: usize,
}

impl RuntimeEntity {
    /// Wrap a seeded entity with its cursor at the route start.
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            route_index: 0,
        }
    }

    /// Public view with the route cursor stripped.
    pub fn to_public(&self) -> Entity {
        self.entity.clone()
    }
}

/// All unit records, keyed by entity id.
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: HashMap<String, RuntimeEntity>,
}

impl EntityStore {
    /// Build a store from a seed roster.
    pub fn from_roster(roster: impl IntoIterator<Item = Entity>) -> Self {
        let entities = roster
            .into_iter()
            .map(|e| (e.id.clone(), RuntimeEntity::new(e)))
            .collect();
        Self { entities }
    }

    pub fn get(&self, id: &str) -> Option<&RuntimeEntity> {
        self.entities.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut RuntimeEntity> {
        self.entities.get_mut(id)
    }

    /// All records, arbitrary order.
    pub fn all(&self) -> impl Iterator<Item = &RuntimeEntity> {
        self.entities.values()
    }

    pub fn all_mut(&mut self) -> impl Iterator<Item = &mut RuntimeEntity> {
        self.entities.values_mut()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
