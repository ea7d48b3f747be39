//! Effect registry.
//!
//! Built once from the status registry as the cross product of target
//! types with every damage type, status (apply and remove) and resource
//! (restore and drain), plus hand effects and the `NOTHING` and
//! `PICKPOCKET_GOLD_TARGET` singletons.

use rustc_hash::FxHashMap;
use strum::IntoEnumIterator;

use super::effect::EffectDefinition;
use super::id::{EffectAction, EffectId, EffectSubject, Qualifier};
use super::targeting::TargetType;
use crate::core::{DamageType, ResourceKind};
use crate::error::{CombatError, Result};
use crate::status::StatusRegistry;

/// Registry of resolvable effects.
#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    effects: Vec<EffectDefinition>,
    index: FxHashMap<EffectId, usize>,
}

impl EffectRegistry {
    /// Enumerate every effect the given statuses make possible.
    #[must_use]
    pub fn build(statuses: &StatusRegistry) -> Self {
        let mut ids = vec![
            EffectId::nothing(),
            EffectId::new(
                EffectAction::Pickpocket,
                EffectSubject::Gold,
                Some(TargetType::Opponent),
            ),
        ];

        for target in TargetType::iter() {
            ids.extend(DamageType::iter().map(|t| EffectId::damage(t, target)));
            for def in statuses.iter() {
                ids.push(EffectId::status(def.id.clone(), false, target));
                ids.push(EffectId::status(def.id.clone(), true, target));
            }
            for resource in ResourceKind::iter() {
                ids.push(EffectId::resource(resource, false, target));
                ids.push(EffectId::resource(resource, true, target));
            }
            for action in [EffectAction::Draw, EffectAction::Discard] {
                ids.push(EffectId::new(action, EffectSubject::Cards, Some(target)));
            }
        }

        let mut registry = Self::default();
        for def in ids.into_iter().filter_map(EffectDefinition::from_id) {
            registry.index.insert(def.id.clone(), registry.effects.len());
            registry.effects.push(def);
        }
        tracing::debug!(count = registry.effects.len(), "effect registry built");
        registry
    }

    /// Get an effect by id.
    ///
    /// An unknown id means a card references an effect that cannot exist,
    /// which is a content bug.
    pub fn get(&self, id: &EffectId) -> Result<&EffectDefinition> {
        self.index
            .get(id)
            .map(|&i| &self.effects[i])
            .ok_or_else(|| CombatError::UnknownEffect(id.to_string()))
    }

    /// Check if an effect is registered.
    #[must_use]
    pub fn contains(&self, id: &EffectId) -> bool {
        self.index.contains_key(id)
    }

    /// Effects in `category` carrying any of `qualifiers`.
    pub fn matching<'r>(
        &'r self,
        category: Option<EffectAction>,
        qualifiers: &'r [Qualifier],
    ) -> impl Iterator<Item = &'r EffectDefinition> + 'r {
        self.effects
            .iter()
            .filter(move |e| e.id.matches(category, qualifiers))
    }

    /// Number of registered effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate over effects in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &EffectDefinition> {
        self.effects.iter()
    }
}
