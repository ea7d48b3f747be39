//! Effect identifiers.
//!
//! An effect id is a tagged triple of action, subject and target. Its string
//! form joins the parts with underscores:
//!
//! | id                        | action       | subject          | target |
//! |---------------------------|--------------|------------------|--------|
//! | `DAMAGE_FIRE_TARGET`      | `DAMAGE`     | fire damage      | TARGET |
//! | `APPLY_WEAKNESS_FIRE_SELF`| `APPLY`      | `WEAKNESS_FIRE`  | SELF   |
//! | `DRAIN_STAMINA_TARGET`    | `DRAIN`      | stamina          | TARGET |
//! | `DRAW_CARDS_SELF`         | `DRAW`       | cards            | SELF   |
//! | `NOTHING`                 | `NOTHING`    | -                | -      |
//!
//! Status ids may contain underscores, so parsing splits off the first token
//! as the action and the last as the target.
//!
//! Statuses that scale card effects select them with
//! [`EffectId::matches`]: an optional action plus a list of qualifiers, any
//! one of which is enough.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use strum::{Display, EnumIter, EnumString};

use super::targeting::TargetType;
use crate::core::{DamageType, ResourceKind};
use crate::error::{CombatError, Result};
use crate::status::StatusId;

/// What an effect does.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectAction {
    Damage,
    Apply,
    Remove,
    Restore,
    Drain,
    Draw,
    Discard,
    Pickpocket,
    Nothing,
}

/// What an effect acts on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EffectSubject {
    None,
    Damage(DamageType),
    Status(StatusId),
    Resource(ResourceKind),
    Cards,
    Gold,
}

impl EffectSubject {
    fn parse(action: EffectAction, token: &str) -> Option<Self> {
        match action {
            EffectAction::Damage => DamageType::from_str(token).ok().map(Self::Damage),
            EffectAction::Apply | EffectAction::Remove => {
                let id = StatusId::new(token);
                id.is_well_formed().then_some(Self::Status(id))
            }
            EffectAction::Restore | EffectAction::Drain => {
                ResourceKind::from_str(token).ok().map(Self::Resource)
            }
            EffectAction::Draw | EffectAction::Discard => (token == "CARDS").then_some(Self::Cards),
            EffectAction::Pickpocket => (token == "GOLD").then_some(Self::Gold),
            EffectAction::Nothing => None,
        }
    }

    fn qualifier(&self) -> Option<Qualifier> {
        match self {
            Self::None => None,
            Self::Damage(t) => Some(Qualifier::DamageType(*t)),
            Self::Status(id) => Some(Qualifier::Status(id.clone())),
            Self::Resource(r) => Some(Qualifier::Resource(*r)),
            Self::Cards => Some(Qualifier::Cards),
            Self::Gold => Some(Qualifier::Gold),
        }
    }
}

impl fmt::Display for EffectSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Damage(t) => write!(f, "{t}"),
            Self::Status(id) => write!(f, "{id}"),
            Self::Resource(r) => write!(f, "{r}"),
            Self::Cards => f.write_str("CARDS"),
            Self::Gold => f.write_str("GOLD"),
        }
    }
}

/// One facet of an effect id, used for matching.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    Target(TargetType),
    DamageType(DamageType),
    Status(StatusId),
    Resource(ResourceKind),
    Cards,
    Gold,
}

/// Composite effect identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EffectId {
    pub action: EffectAction,
    pub subject: EffectSubject,
    pub target: Option<TargetType>,
}

impl EffectId {
    /// Create an effect id from its parts.
    #[must_use]
    pub fn new(action: EffectAction, subject: EffectSubject, target: Option<TargetType>) -> Self {
        Self {
            action,
            subject,
            target,
        }
    }

    /// `DAMAGE_<TYPE>_<TARGET>`
    #[must_use]
    pub fn damage(damage_type: DamageType, target: TargetType) -> Self {
        Self::new(
            EffectAction::Damage,
            EffectSubject::Damage(damage_type),
            Some(target),
        )
    }

    /// `APPLY_<STATUS>_<TARGET>` or `REMOVE_<STATUS>_<TARGET>`
    #[must_use]
    pub fn status(status: StatusId, remove: bool, target: TargetType) -> Self {
        let action = if remove {
            EffectAction::Remove
        } else {
            EffectAction::Apply
        };
        Self::new(action, EffectSubject::Status(status), Some(target))
    }

    /// `RESTORE_<RESOURCE>_<TARGET>` or `DRAIN_<RESOURCE>_<TARGET>`
    #[must_use]
    pub fn resource(resource: ResourceKind, drain: bool, target: TargetType) -> Self {
        let action = if drain {
            EffectAction::Drain
        } else {
            EffectAction::Restore
        };
        Self::new(action, EffectSubject::Resource(resource), Some(target))
    }

    /// `NOTHING`
    #[must_use]
    pub fn nothing() -> Self {
        Self::new(EffectAction::Nothing, EffectSubject::None, None)
    }

    /// Every qualifier this id carries.
    #[must_use]
    pub fn qualifiers(&self) -> SmallVec<[Qualifier; 2]> {
        let mut out: SmallVec<[Qualifier; 2]> = smallvec![];
        if let Some(q) = self.subject.qualifier() {
            out.push(q);
        }
        if let Some(t) = self.target {
            out.push(Qualifier::Target(t));
        }
        out
    }

    /// Check if this id carries a qualifier.
    #[must_use]
    pub fn has_qualifier(&self, qualifier: &Qualifier) -> bool {
        match qualifier {
            Qualifier::Target(t) => self.target == Some(*t),
            other => self.subject.qualifier().as_ref() == Some(other),
        }
    }

    /// Check if this id falls in `category` and carries any of
    /// `qualifiers`. `None` matches every action; an empty qualifier list
    /// matches every id of the category.
    #[must_use]
    pub fn matches(&self, category: Option<EffectAction>, qualifiers: &[Qualifier]) -> bool {
        category.map_or(true, |action| action == self.action)
            && (qualifiers.is_empty() || qualifiers.iter().any(|q| self.has_qualifier(q)))
    }
}

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action)?;
        if self.subject != EffectSubject::None {
            write!(f, "_{}", self.subject)?;
        }
        if let Some(target) = self.target {
            write!(f, "_{target}")?;
        }
        Ok(())
    }
}

impl FromStr for EffectId {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self> {
        let (action_token, rest) = s.split_once('_').unwrap_or((s, ""));
        let action = EffectAction::from_str(action_token)
            .map_err(|_| CombatError::invalid_identifier(s, "unknown effect action"))?;

        if action == EffectAction::Nothing {
            return if rest.is_empty() {
                Ok(Self::nothing())
            } else {
                Err(CombatError::invalid_identifier(s, "NOTHING takes no subject"))
            };
        }

        let (subject_token, target_token) = rest
            .rsplit_once('_')
            .ok_or_else(|| CombatError::invalid_identifier(s, "expected ACTION_SUBJECT_TARGET"))?;
        let target = TargetType::from_str(target_token)
            .map_err(|_| CombatError::invalid_identifier(s, "target must be SELF or TARGET"))?;
        let subject = EffectSubject::parse(action, subject_token).ok_or_else(|| {
            CombatError::invalid_identifier(s, format!("invalid subject for {action}"))
        })?;

        Ok(Self::new(action, subject, Some(target)))
    }
}

impl TryFrom<String> for EffectId {
    type Error = CombatError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<EffectId> for String {
    fn from(id: EffectId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> EffectId {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_damage() {
        let parsed = id("DAMAGE_FIRE_TARGET");
        assert_eq!(parsed, EffectId::damage(DamageType::Fire, TargetType::Opponent));
    }

    #[test]
    fn test_parse_status_with_underscores() {
        let parsed = id("APPLY_WEAKNESS_FIRE_SELF");
        assert_eq!(parsed.action, EffectAction::Apply);
        assert_eq!(
            parsed.subject,
            EffectSubject::Status(StatusId::new("WEAKNESS_FIRE"))
        );
        assert_eq!(parsed.target, Some(TargetType::Source));
    }

    #[test]
    fn test_display_round_trip() {
        for s in [
            "DAMAGE_PHYSICAL_TARGET",
            "REMOVE_POISON_SELF",
            "DRAIN_MAGICKA_TARGET",
            "DRAW_CARDS_SELF",
            "DISCARD_CARDS_TARGET",
            "PICKPOCKET_GOLD_TARGET",
            "NOTHING",
        ] {
            assert_eq!(id(s).to_string(), s);
        }
    }

    #[test]
    fn test_parse_errors() {
        for s in [
            "",
            "EXPLODE_FIRE_TARGET",
            "DAMAGE_HOLY_TARGET",
            "DAMAGE_FIRE",
            "DAMAGE_FIRE_ENEMY",
            "DRAW_GOLD_SELF",
            "NOTHING_SELF",
            "APPLY_poison_SELF",
        ] {
            assert!(s.parse::<EffectId>().is_err(), "{s} should not parse");
        }
    }

    #[test]
    fn test_qualifiers() {
        let q = id("DAMAGE_FROST_SELF").qualifiers();
        assert_eq!(q.len(), 2);
        assert!(q.contains(&Qualifier::DamageType(DamageType::Frost)));
        assert!(q.contains(&Qualifier::Target(TargetType::Source)));
        assert!(id("NOTHING").qualifiers().is_empty());
    }

    #[test]
    fn test_matches_any_qualifier() {
        let fire = id("DAMAGE_FIRE_TARGET");
        let frost = id("DAMAGE_FROST_TARGET");
        let quals = [
            Qualifier::DamageType(DamageType::Fire),
            Qualifier::DamageType(DamageType::Shock),
        ];

        assert!(fire.matches(Some(EffectAction::Damage), &quals));
        assert!(!frost.matches(Some(EffectAction::Damage), &quals));
    }

    #[test]
    fn test_matches_category_and_empty_qualifiers() {
        let fire = id("DAMAGE_FIRE_TARGET");
        assert!(fire.matches(Some(EffectAction::Damage), &[]));
        assert!(fire.matches(None, &[]));
        assert!(!fire.matches(Some(EffectAction::Apply), &[]));
    }

    #[test]
    fn test_target_qualifier_shares_across_subjects() {
        let quals = [Qualifier::Target(TargetType::Source)];
        assert!(id("APPLY_POISON_SELF").matches(None, &quals));
        assert!(id("RESTORE_HEALTH_SELF").matches(None, &quals));
        assert!(!id("APPLY_POISON_TARGET").matches(None, &quals));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&id("APPLY_POISON_TARGET")).unwrap();
        assert_eq!(json, "\"APPLY_POISON_TARGET\"");
        let back: EffectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id("APPLY_POISON_TARGET"));
    }

    #[test]
    fn test_qualifier_json() {
        let q: Qualifier = serde_json::from_str(r#"{"damage_type":"FIRE"}"#).unwrap();
        assert_eq!(q, Qualifier::DamageType(DamageType::Fire));
        let q: Qualifier = serde_json::from_str(r#"{"target":"SELF"}"#).unwrap();
        assert_eq!(q, Qualifier::Target(TargetType::Source));
    }
}
