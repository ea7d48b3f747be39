//! Effect definitions.
//!
//! Effects are immutable and enumerated once when the catalog is built.
//! The behaviour is a closed enum derived from the id, so resolution is a
//! single `match` (see [`EffectResolver`](super::EffectResolver)).

use serde::{Deserialize, Serialize};

use super::id::{EffectAction, EffectId, EffectSubject};
use super::targeting::TargetType;
use crate::core::{DamageType, ResourceKind};
use crate::status::StatusId;

/// Hand manipulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandAction {
    /// Draw `level` cards.
    Draw,
    /// Discard `level` random cards.
    Discard,
}

/// What resolving an effect does to its target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// No-op.
    Nothing,

    /// Move up to `level` gold from the target to the source.
    Pickpocket,

    /// Deal `level` damage through the damage pipeline.
    Damage { damage_type: DamageType },

    /// Apply `level` of a status, or remove it when `remove` is set.
    ChangeStatus { status: StatusId, remove: bool },

    /// Restore `level` of a resource, or drain it when `drain` is set.
    ChangeResource { resource: ResourceKind, drain: bool },

    /// Draw or discard cards.
    Hand(HandAction),
}

impl Effect {
    /// Derive the behaviour encoded by an effect id.
    ///
    /// Returns `None` when the action and subject disagree, which only
    /// happens for ids built by hand rather than parsed.
    #[must_use]
    pub fn from_id(id: &EffectId) -> Option<Self> {
        let effect = match (id.action, &id.subject) {
            (EffectAction::Nothing, EffectSubject::None) => Self::Nothing,
            (EffectAction::Pickpocket, EffectSubject::Gold) => Self::Pickpocket,
            (EffectAction::Damage, EffectSubject::Damage(t)) => Self::Damage { damage_type: *t },
            (EffectAction::Apply, EffectSubject::Status(s)) => Self::ChangeStatus {
                status: s.clone(),
                remove: false,
            },
            (EffectAction::Remove, EffectSubject::Status(s)) => Self::ChangeStatus {
                status: s.clone(),
                remove: true,
            },
            (EffectAction::Restore, EffectSubject::Resource(r)) => Self::ChangeResource {
                resource: *r,
                drain: false,
            },
            (EffectAction::Drain, EffectSubject::Resource(r)) => Self::ChangeResource {
                resource: *r,
                drain: true,
            },
            (EffectAction::Draw, EffectSubject::Cards) => Self::Hand(HandAction::Draw),
            (EffectAction::Discard, EffectSubject::Cards) => Self::Hand(HandAction::Discard),
            _ => return None,
        };
        Some(effect)
    }
}

/// An entry of the effect registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDefinition {
    pub id: EffectId,
    pub name: String,
    pub target: TargetType,
    pub effect: Effect,
}

impl EffectDefinition {
    /// Build the definition for an id.
    #[must_use]
    pub fn from_id(id: EffectId) -> Option<Self> {
        let effect = Effect::from_id(&id)?;
        let target = id.target.unwrap_or(TargetType::Source);
        let name = describe(&effect, target);
        Some(Self {
            id,
            name,
            target,
            effect,
        })
    }
}

fn describe(effect: &Effect, target: TargetType) -> String {
    let who = match target {
        TargetType::Source => "self",
        TargetType::Opponent => "target",
    };
    match effect {
        Effect::Nothing => "Do nothing".to_string(),
        Effect::Pickpocket => format!("Steal gold from {who}"),
        Effect::Damage { damage_type } => format!("Deal {damage_type} damage to {who}"),
        Effect::ChangeStatus {
            status,
            remove: false,
        } => format!("Apply {status} to {who}"),
        Effect::ChangeStatus { status, remove: true } => format!("Remove {status} from {who}"),
        Effect::ChangeResource {
            resource,
            drain: false,
        } => format!("Restore {resource} of {who}"),
        Effect::ChangeResource {
            resource,
            drain: true,
        } => format!("Drain {resource} of {who}"),
        Effect::Hand(HandAction::Draw) => format!("Draw cards ({who})"),
        Effect::Hand(HandAction::Discard) => format!("Discard cards ({who})"),
    }
}
