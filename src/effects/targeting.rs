//! Effect targeting.
//!
//! Every effect declares whether it lands on the combatant playing the card
//! (`SELF`) or on the opponent (`TARGET`).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::combatant::Combatant;

/// Who an effect lands on.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum TargetType {
    /// The combatant resolving the effect.
    #[serde(rename = "SELF")]
    #[strum(serialize = "SELF")]
    Source,

    /// The combatant's opponent.
    #[serde(rename = "TARGET")]
    #[strum(serialize = "TARGET")]
    Opponent,
}

impl TargetType {
    /// Resolve the target of an effect.
    ///
    /// Returns the target and, when the target is the opponent, the source
    /// as the acting combatant. A self-targeted effect has no separate
    /// actor, so the two references can never alias.
    pub fn select<'c>(
        self,
        source: &'c mut Combatant,
        opponent: &'c mut Combatant,
    ) -> (&'c mut Combatant, Option<&'c mut Combatant>) {
        match self {
            Self::Source => (source, None),
            Self::Opponent => (opponent, Some(source)),
        }
    }
}
