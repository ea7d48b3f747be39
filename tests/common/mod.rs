//! Shared fixtures for integration tests.

#![allow(dead_code)]

use card_combat::cards::CardId;
use card_combat::catalog::Catalog;
use card_combat::combat::CombatManager;
use card_combat::combatant::{Combatant, ResourceValues};
use card_combat::core::{CombatConfig, ResourceKind, Side};
use card_combat::status::StatusId;
use tracing_subscriber::EnvFilter;

/// A small but complete catalog: one status of every kind, a handful of
/// cards, two enemies, an enchantment, two quests and a player.
pub const CATALOG_JSON: &str = r#"{
    "statuses": [
        {"id": "DEFENSE", "name": "Defense", "kind": "defense"},
        {"id": "WILLPOWER", "name": "Willpower", "kind": "willpower"},
        {"id": "HIDDEN", "name": "Hidden", "kind": "hidden"},
        {"id": "REFLECT", "name": "Reflect", "kind": "reflect"},
        {"id": "SPELL_ABSORPTION", "name": "Spell Absorption", "kind": "spell_absorption"},
        {"id": "POISON", "name": "Poisoned", "kind": "damage_over_time", "damage_type": "POISON"},
        {"id": "REGENERATION", "name": "Regeneration", "kind": "restore_over_time", "resource": "HEALTH"},
        {"id": "WEAKNESS_FIRE", "name": "Weak to Fire", "kind": "damage_taken", "damage_type": "FIRE", "per_level": 0.5},
        {"id": "RESIST_FIRE", "name": "Fire Resistance", "kind": "damage_taken", "damage_type": "FIRE", "per_level": -0.25},
        {"id": "SLOW", "name": "Slowed", "kind": "draw_count", "per_level": -1},
        {"id": "HASTE", "name": "Hasted", "kind": "draw_count", "per_level": 1},
        {"id": "FORTIFY_HEALTH", "name": "Fortify Health", "kind": "max_resource", "resource": "HEALTH", "per_level": 5},
        {"id": "EMPOWER_FIRE", "name": "Fire Empowered", "kind": "effect_level", "card_type": "SPELL",
         "target": "effect", "action": "DAMAGE", "qualifiers": [{"damage_type": "FIRE"}], "per_level": 0.5},
        {"id": "EXHAUSTED", "name": "Exhausted", "kind": "effect_level", "target": "cost", "per_level": 1.0}
    ],
    "cards": [
        {"id": "STRIKE", "name": "Strike", "card_type": "ATTACK", "cost": 1, "value": 5,
         "effects": [{"effect": "DAMAGE_PHYSICAL_TARGET", "level": 5}]},
        {"id": "HEAVY_BLOW", "name": "Heavy Blow", "card_type": "ATTACK", "cost": 3,
         "effects": [{"effect": "DAMAGE_PHYSICAL_TARGET", "level": 9}]},
        {"id": "FIREBOLT", "name": "Firebolt", "card_type": "SPELL", "cost": 2, "value": 20,
         "effects": [{"effect": "DAMAGE_FIRE_TARGET", "level": 4}]},
        {"id": "GUARD", "name": "Guard", "card_type": "SKILL", "cost": 1,
         "effects": [{"effect": "APPLY_DEFENSE_SELF", "level": 4}]},
        {"id": "POISON_DART", "name": "Poison Dart", "card_type": "ATTACK", "cost": 1,
         "effects": [{"effect": "APPLY_POISON_TARGET", "level": 3}]},
        {"id": "MEDITATE", "name": "Meditate", "card_type": "SKILL", "cost": 0,
         "effects": [{"effect": "DRAW_CARDS_SELF", "level": 2}]},
        {"id": "SHADOWSTEP", "name": "Shadowstep", "card_type": "SKILL", "cost": 1,
         "effects": [{"effect": "APPLY_HIDDEN_SELF", "level": 2}]},
        {"id": "CURSE", "name": "Curse", "card_type": "SPELL", "cost": 1,
         "effects": [{"effect": "APPLY_WEAKNESS_FIRE_TARGET", "level": 1}]},
        {"id": "PICK", "name": "Pick Pocket", "card_type": "SKILL", "cost": 0,
         "effects": [{"effect": "PICKPOCKET_GOLD_TARGET", "level": 5}]},
        {"id": "WAIT", "name": "Wait", "card_type": "SKILL", "cost": 0,
         "effects": [{"effect": "NOTHING", "level": 0}]}
    ],
    "enemies": [
        {"id": "RAT", "name": "Rat",
         "resources": {"health": 6, "stamina": 1, "gold": 0},
         "deck": ["STRIKE", "STRIKE", "STRIKE"],
         "loot": {"gold_min": 3, "gold_max": 3, "drops": [{"card": "FIREBOLT", "chance": 1.0}]}},
        {"id": "BANDIT", "name": "Bandit",
         "resources": {"health": 12, "stamina": 2, "gold": 40},
         "deck": ["STRIKE", "STRIKE", "GUARD", "GUARD"],
         "loot": {"gold_min": 10, "gold_max": 20}}
    ],
    "enchantments": [
        {"id": "FLAMING", "name": "Flames", "value_multiplier": 1.5,
         "effect_deltas": [{"effect": "DAMAGE_FIRE_TARGET", "level": 2}]}
    ],
    "quests": [
        {"id": "CELLAR", "name": "Rats in the Cellar", "encounters": ["RAT"], "reward_gold": 25},
        {"id": "ROAD", "name": "The King's Road", "encounters": ["RAT", "BANDIT"], "reward_gold": 50}
    ],
    "player": {
        "name": "Hero",
        "resources": {"health": 30, "stamina": 3, "magicka": 5},
        "deck": ["STRIKE", "STRIKE", "STRIKE", "STRIKE", "GUARD", "GUARD"],
        "library": ["FIREBOLT"]
    }
}"#;

/// Route engine logs through the test harness. Set `RUST_LOG=debug` to see
/// the combat log of a failing test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn catalog() -> Catalog {
    init_tracing();
    Catalog::from_json(CATALOG_JSON).expect("fixture catalog should be valid")
}

pub fn config() -> CombatConfig {
    CombatConfig::default().with_seed(7)
}

pub fn status(id: &str) -> StatusId {
    StatusId::new(id)
}

/// A combatant with no cards.
pub fn dummy(name: &str, side: Side, health: i32) -> Combatant {
    Combatant::new(
        name,
        side,
        ResourceValues::default().with_health(health).with_stamina(3),
        &config(),
    )
}

/// A combatant whose deck holds the given catalog cards.
pub fn with_deck(catalog: &Catalog, mut combatant: Combatant, cards: &[&str]) -> Combatant {
    for id in cards {
        let def = catalog.card(&CardId::new(*id)).expect("fixture card");
        combatant.cards_mut().add_to_deck(def);
    }
    combatant
}

/// Start a combat whose player hand holds exactly the cards in `hand`.
///
/// The hand size is set to the number of cards so the opening draw takes
/// the whole deck. Order in hand is shuffled; use [`hand_index`].
pub fn combat_with_hand<'c>(
    catalog: &'c Catalog,
    hand: &[&str],
    enemy: Combatant,
) -> CombatManager<'c> {
    let config = config().with_hand_size(hand.len());
    let player = with_deck(catalog, dummy("Hero", Side::Player, 30), hand);
    let mut combat = catalog.start_combat(config, card_combat::GameRng::new(1), player, enemy);
    combat.start_player_turn().expect("player turn should start");
    combat
}

pub fn health(combatant: &Combatant) -> i32 {
    combatant.current(ResourceKind::Health)
}

/// Index of the first card in the player's hand with this catalog id.
pub fn hand_index(combat: &CombatManager<'_>, card: &str) -> usize {
    combat
        .player()
        .cards()
        .hand()
        .iter()
        .position(|c| c.card_id.as_str() == card)
        .expect("card should be in hand")
}
