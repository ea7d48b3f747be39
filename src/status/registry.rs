//! Status registry for definition lookup.
//!
//! Built once from the catalog and shared read-only by every combatant.
//! Registration order is preserved; the effect registry enumerates
//! `APPLY_*` / `REMOVE_*` effects in that order.

use rustc_hash::FxHashMap;

use super::definition::{StatusDefinition, StatusId, StatusKind};
use crate::error::{CombatError, Result};

/// Registry of status definitions.
#[derive(Clone, Debug, Default)]
pub struct StatusRegistry {
    statuses: Vec<StatusDefinition>,
    index: FxHashMap<StatusId, usize>,
}

impl StatusRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from definitions, failing on the first bad record.
    pub fn from_definitions(defs: impl IntoIterator<Item = StatusDefinition>) -> Result<Self> {
        let mut registry = Self::new();
        for def in defs {
            registry.register(def)?;
        }
        Ok(registry)
    }

    /// Register a status definition.
    pub fn register(&mut self, def: StatusDefinition) -> Result<()> {
        if !def.id.is_well_formed() {
            return Err(CombatError::invalid_identifier(
                def.id.as_str(),
                "status ids use A-Z, 0-9 and inner underscores",
            ));
        }
        if self.index.contains_key(&def.id) {
            return Err(CombatError::DuplicateId {
                kind: "status",
                id: def.id.to_string(),
            });
        }
        self.index.insert(def.id.clone(), self.statuses.len());
        self.statuses.push(def);
        Ok(())
    }

    /// Get a status definition by id.
    ///
    /// An unknown id is a content bug, so it is an error rather than `None`.
    pub fn get(&self, id: &StatusId) -> Result<&StatusDefinition> {
        self.index
            .get(id)
            .map(|&i| &self.statuses[i])
            .ok_or_else(|| CombatError::UnknownStatus(id.to_string()))
    }

    /// Get the behaviour of a status, if registered.
    #[must_use]
    pub fn kind(&self, id: &StatusId) -> Option<&StatusKind> {
        self.index.get(id).map(|&i| &self.statuses[i].kind)
    }

    /// Check if a status id is registered.
    #[must_use]
    pub fn contains(&self, id: &StatusId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of registered statuses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusDefinition> {
        self.statuses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defense() -> StatusDefinition {
        StatusDefinition::new("DEFENSE", "Defense", StatusKind::Defense)
    }

    #[test]
    fn test_register_and_get() {
        let registry = StatusRegistry::from_definitions([defense()]).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&StatusId::new("DEFENSE")).unwrap().name, "Defense");
        assert!(matches!(
            registry.get(&StatusId::new("MISSING")),
            Err(CombatError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = StatusRegistry::from_definitions([defense(), defense()]);
        assert!(matches!(result, Err(CombatError::DuplicateId { .. })));
    }

    #[test]
    fn test_malformed_id_rejected() {
        let bad = StatusDefinition::new("bad id", "Bad", StatusKind::Hidden);
        assert!(StatusRegistry::from_definitions([bad]).is_err());
    }

    #[test]
    fn test_iteration_order() {
        let registry = StatusRegistry::from_definitions([
            StatusDefinition::new("B", "B", StatusKind::Hidden),
            StatusDefinition::new("A", "A", StatusKind::Reflect),
        ])
        .unwrap();
        let ids: Vec<_> = registry.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }
}
