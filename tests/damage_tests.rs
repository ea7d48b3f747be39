//! Damage mitigation pipeline tests.

mod common;

use card_combat::catalog::Catalog;
use card_combat::combatant::{Combatant, ResourceValues};
use card_combat::core::{CombatConfig, DamageType, ResourceKind, Side};
use card_combat::damage::{DamageCalculator, DamageStage};

use common::{catalog, config, dummy, health, status};

fn with_status(catalog: &Catalog, mut combatant: Combatant, id: &str, level: i32) -> Combatant {
    combatant
        .change_status(&status(id), level, catalog.statuses())
        .unwrap();
    combatant
}

#[test]
fn test_defense_partially_blocks_physical() {
    let catalog = catalog();
    let config = config();
    let mut defender = with_status(&catalog, dummy("Knight", Side::Enemy, 20), "DEFENSE", 4);

    let report = DamageCalculator::new(catalog.statuses(), &config).calculate(
        &mut defender,
        None,
        DamageType::Physical,
        6,
    );

    assert_eq!(report.final_amount, 2);
    assert_eq!(
        report.stages,
        vec![DamageStage::Defense {
            blocked: 4,
            amount: 2
        }]
    );
    assert_eq!(defender.statuses().level(&status("DEFENSE")), 0);
    // The calculator never applies the final amount itself.
    assert_eq!(health(&defender), 20);
}

#[test]
fn test_defense_fully_blocks_and_keeps_remainder() {
    let catalog = catalog();
    let config = config();
    let mut defender = with_status(&catalog, dummy("Knight", Side::Enemy, 20), "DEFENSE", 10);

    let report = DamageCalculator::new(catalog.statuses(), &config).calculate(
        &mut defender,
        None,
        DamageType::Physical,
        6,
    );

    assert_eq!(report.final_amount, 0);
    assert!(report.was_negated());
    assert_eq!(defender.statuses().level(&status("DEFENSE")), 4);
}

#[test]
fn test_defense_ignores_spells_and_willpower_ignores_physical() {
    let catalog = catalog();
    let config = config();
    let defender = with_status(&catalog, dummy("Knight", Side::Enemy, 20), "DEFENSE", 10);
    let mut defender = with_status(&catalog, defender, "WILLPOWER", 5);
    let calc = DamageCalculator::new(catalog.statuses(), &config);

    let fire = calc.calculate(&mut defender, None, DamageType::Fire, 10);
    assert_eq!(fire.final_amount, 5);
    assert_eq!(defender.statuses().level(&status("DEFENSE")), 10);

    let mut plain = with_status(&catalog, dummy("Monk", Side::Enemy, 20), "WILLPOWER", 5);
    let physical = calc.calculate(&mut plain, None, DamageType::Physical, 10);
    assert_eq!(physical.final_amount, 10);
    assert!(physical.stages.is_empty());
}

#[test]
fn test_willpower_percentage_and_cap() {
    let catalog = catalog();
    let config = config();
    let calc = DamageCalculator::new(catalog.statuses(), &config);

    let mut defender = with_status(&catalog, dummy("Monk", Side::Enemy, 20), "WILLPOWER", 3);
    let report = calc.calculate(&mut defender, None, DamageType::Frost, 10);
    assert_eq!(
        report.stages,
        vec![DamageStage::Willpower {
            percent: 30,
            amount: 7
        }]
    );
    // Willpower is not consumed.
    assert_eq!(defender.statuses().level(&status("WILLPOWER")), 3);

    let mut saint = with_status(&catalog, dummy("Saint", Side::Enemy, 20), "WILLPOWER", 25);
    let report = calc.calculate(&mut saint, None, DamageType::Shock, 40);
    assert_eq!(report.final_amount, 0);
}

#[test]
fn test_willpower_handles_huge_hits() {
    let catalog = catalog();
    let config = config();
    let mut defender = with_status(&catalog, dummy("Monk", Side::Enemy, 20), "WILLPOWER", 1);

    let report = DamageCalculator::new(catalog.statuses(), &config).calculate(
        &mut defender,
        None,
        DamageType::Fire,
        30_000_000,
    );
    assert_eq!(report.final_amount, 27_000_000);

    let report = DamageCalculator::new(catalog.statuses(), &config).calculate(
        &mut defender,
        None,
        DamageType::Fire,
        i32::MAX,
    );
    assert_eq!(report.final_amount, 1_932_735_282);
}

#[test]
fn test_willpower_uses_configured_rate() {
    let catalog = catalog();
    let config = CombatConfig::default().with_willpower_percent(25);
    let mut defender = with_status(&catalog, dummy("Monk", Side::Enemy, 20), "WILLPOWER", 2);

    let report = DamageCalculator::new(catalog.statuses(), &config).calculate(
        &mut defender,
        None,
        DamageType::Fire,
        8,
    );
    assert_eq!(report.final_amount, 4);
}

#[test]
fn test_reflect_bounces_onto_attacker() {
    let catalog = catalog();
    let config = config();
    let mut defender = with_status(&catalog, dummy("Mirror", Side::Enemy, 20), "REFLECT", 3);
    let mut attacker = dummy("Mage", Side::Player, 20);

    let report = DamageCalculator::new(catalog.statuses(), &config).calculate(
        &mut defender,
        Some(&mut attacker),
        DamageType::Fire,
        5,
    );

    assert_eq!(report.final_amount, 2);
    assert_eq!(report.bounced(), 3);
    assert_eq!(health(&attacker), 17);
    assert_eq!(defender.statuses().level(&status("REFLECT")), 0);
}

#[test]
fn test_reflect_capped_by_damage() {
    let catalog = catalog();
    let config = config();
    let mut defender = with_status(&catalog, dummy("Mirror", Side::Enemy, 20), "REFLECT", 10);
    let mut attacker = dummy("Mage", Side::Player, 20);

    let report = DamageCalculator::new(catalog.statuses(), &config).calculate(
        &mut defender,
        Some(&mut attacker),
        DamageType::Shock,
        4,
    );

    assert_eq!(report.final_amount, 0);
    assert_eq!(health(&attacker), 16);
    assert_eq!(defender.statuses().level(&status("REFLECT")), 6);
}

#[test]
fn test_attacker_reflect_counters_bounce() {
    let catalog = catalog();
    let config = config();
    let mut defender = with_status(&catalog, dummy("Mirror", Side::Enemy, 20), "REFLECT", 3);
    let mut attacker = with_status(&catalog, dummy("Mage", Side::Player, 20), "REFLECT", 2);

    let report = DamageCalculator::new(catalog.statuses(), &config).calculate(
        &mut defender,
        Some(&mut attacker),
        DamageType::Fire,
        5,
    );

    assert_eq!(
        report.stages,
        vec![DamageStage::Reflect {
            reflected: 3,
            countered: 2,
            bounced: 1,
            amount: 2
        }]
    );
    assert_eq!(health(&attacker), 19);
    assert_eq!(attacker.statuses().level(&status("REFLECT")), 0);
}

#[test]
fn test_reflect_needs_an_attacker() {
    let catalog = catalog();
    let config = config();
    let mut defender = with_status(&catalog, dummy("Mirror", Side::Enemy, 20), "REFLECT", 3);

    let report = DamageCalculator::new(catalog.statuses(), &config).calculate(
        &mut defender,
        None,
        DamageType::Poison,
        5,
    );

    assert_eq!(report.final_amount, 5);
    assert_eq!(defender.statuses().level(&status("REFLECT")), 3);
}

#[test]
fn test_spell_absorption_converts_to_magicka() {
    let catalog = catalog();
    let config = config();
    let mut defender = Combatant::new(
        "Sponge",
        Side::Enemy,
        ResourceValues::default().with_health(20).with_magicka(10),
        &config,
    );
    defender.change_resource(ResourceKind::Magicka, -10);
    let mut defender = with_status(&catalog, defender, "SPELL_ABSORPTION", 3);
    let mut attacker = dummy("Mage", Side::Player, 20);

    let report = DamageCalculator::new(catalog.statuses(), &config).calculate(
        &mut defender,
        Some(&mut attacker),
        DamageType::Frost,
        5,
    );

    assert_eq!(report.final_amount, 2);
    assert_eq!(report.absorbed(), 3);
    assert_eq!(defender.current(ResourceKind::Magicka), 3);
    assert_eq!(defender.statuses().level(&status("SPELL_ABSORPTION")), 0);
}

#[test]
fn test_weakness_and_resistance() {
    let catalog = catalog();
    let config = config();
    let calc = DamageCalculator::new(catalog.statuses(), &config);

    let mut weak = with_status(&catalog, dummy("Troll", Side::Enemy, 20), "WEAKNESS_FIRE", 1);
    assert_eq!(calc.calculate(&mut weak, None, DamageType::Fire, 4).final_amount, 6);
    // Other types are untouched.
    assert_eq!(calc.calculate(&mut weak, None, DamageType::Frost, 4).final_amount, 4);

    let mut resistant = with_status(&catalog, dummy("Salamander", Side::Enemy, 20), "RESIST_FIRE", 2);
    assert_eq!(calc.calculate(&mut resistant, None, DamageType::Fire, 4).final_amount, 2);

    // Resistance past 100% bottoms out at zero.
    let mut immune = with_status(&catalog, dummy("Ember", Side::Enemy, 20), "RESIST_FIRE", 8);
    let report = calc.calculate(&mut immune, None, DamageType::Fire, 4);
    assert_eq!(report.final_amount, 0);
    assert!(report.was_negated());
}

#[test]
fn test_hidden_crit_rounds_and_breaks() {
    let catalog = catalog();
    let config = config();
    let mut defender = dummy("Guard", Side::Enemy, 20);
    let mut attacker = with_status(&catalog, dummy("Thief", Side::Player, 20), "HIDDEN", 1);

    let report = DamageCalculator::new(catalog.statuses(), &config).calculate(
        &mut defender,
        Some(&mut attacker),
        DamageType::Physical,
        5,
    );

    // 5 * 1.5 = 7.5, rounded away from zero.
    assert_eq!(report.final_amount, 8);
    assert!(matches!(report.stages[0], DamageStage::Crit { amount: 8, .. }));
    assert!(!attacker.statuses().has_status(&status("HIDDEN")));
}

#[test]
fn test_non_positive_damage_is_a_no_op() {
    let catalog = catalog();
    let config = config();
    let mut defender = with_status(&catalog, dummy("Knight", Side::Enemy, 20), "DEFENSE", 4);

    let report = DamageCalculator::new(catalog.statuses(), &config).calculate(
        &mut defender,
        None,
        DamageType::Physical,
        0,
    );
    assert_eq!(report.final_amount, 0);
    assert!(report.stages.is_empty());
    assert_eq!(defender.statuses().level(&status("DEFENSE")), 4);
}

#[test]
fn test_full_pipeline_order() {
    let catalog = catalog();
    let config = config();
    // Crit, then weakness, then willpower, then reflect.
    let mut attacker = with_status(&catalog, dummy("Mage", Side::Player, 20), "HIDDEN", 2);
    let defender = with_status(&catalog, dummy("Troll", Side::Enemy, 40), "WEAKNESS_FIRE", 1);
    let defender = with_status(&catalog, defender, "WILLPOWER", 5);
    let mut defender = with_status(&catalog, defender, "REFLECT", 2);

    let report = DamageCalculator::new(catalog.statuses(), &config).calculate(
        &mut defender,
        Some(&mut attacker),
        DamageType::Fire,
        4,
    );

    // 4 -> crit x2 = 8 -> weakness x1.5 = 12 -> willpower 50% = 6 -> reflect 2 = 4
    let amounts: Vec<i32> = report
        .stages
        .iter()
        .map(|stage| match stage {
            DamageStage::Crit { amount, .. }
            | DamageStage::Weakness { amount, .. }
            | DamageStage::Defense { amount, .. }
            | DamageStage::Willpower { amount, .. }
            | DamageStage::Reflect { amount, .. }
            | DamageStage::SpellAbsorption { amount, .. } => *amount,
        })
        .collect();
    assert_eq!(amounts, vec![8, 12, 6, 4]);
    assert_eq!(report.final_amount, 4);
    assert_eq!(health(&attacker), 18);
}
