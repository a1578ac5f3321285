//! The built-in twenty-card set.
//!
//! Card behaviour lives in `effects::ScriptTable::standard`; this module
//! only holds the data.

use super::definition::{CardDefinition, CardId, Mechanic, TargetType};
use super::registry::CardCatalog;

/// IDs of the standard set, referenced by the script table.
pub mod ids {
    use super::CardId;

    pub const EMBERWYRM_SCION: CardId = CardId::new(1);
    pub const GROVE_WARDEN: CardId = CardId::new(2);
    pub const RATTLE_SPRITE: CardId = CardId::new(3);
    pub const SHARDBLADE: CardId = CardId::new(4);
    pub const RIFT_WALKER: CardId = CardId::new(5);
    pub const MISTWOLF_PACK: CardId = CardId::new(6);
    pub const IRON_TROLL: CardId = CardId::new(7);
    pub const SOUL_BINDER: CardId = CardId::new(8);
    pub const RADIANT_PALADIN: CardId = CardId::new(9);
    pub const ALCHEMIST_ZEALOT: CardId = CardId::new(10);

    pub const FROST_BURST: CardId = CardId::new(11);
    pub const ARCANE_SWAP: CardId = CardId::new(12);
    pub const REVIVAL_RITE: CardId = CardId::new(13);
    pub const FLAME_WARD: CardId = CardId::new(14);
    pub const ARCANE_PULSE: CardId = CardId::new(15);
    pub const TIME_SEAL: CardId = CardId::new(16);
    pub const SHADOW_BIND: CardId = CardId::new(17);

    pub const CALAMITY_ORB: CardId = CardId::new(18);
    pub const MITHRIL_CHARM: CardId = CardId::new(19);
    pub const ANCIENT_CHRONOMETER: CardId = CardId::new(20);

    /// Not in the catalog; created by Mistwolf Pack.
    pub const MISTWOLF: CardId = CardId::new(100);
}

fn other(tag: &str) -> Mechanic {
    Mechanic::Other(tag.to_string())
}

/// The twenty standard definitions, in catalog order.
#[must_use]
pub fn standard_cards() -> Vec<CardDefinition> {
    vec![
        // Creatures
        CardDefinition::creature(ids::EMBERWYRM_SCION, "Emberwyrm Scion", 6, 5, 6)
            .with_text("Battlecry: Deal 2 damage to all enemy characters.")
            .with_mechanic(Mechanic::Battlecry),
        CardDefinition::creature(ids::GROVE_WARDEN, "Grove Warden", 3, 2, 5)
            .with_text("Taunt. Whenever this takes damage, restore 1 health to it.")
            .with_mechanic(Mechanic::Taunt)
            .with_mechanic(Mechanic::RegenerateOnDamage),
        CardDefinition::creature(ids::RATTLE_SPRITE, "Rattle Sprite", 2, 2, 1)
            .with_text("Deathrattle: Draw a card.")
            .with_mechanic(Mechanic::Deathrattle),
        CardDefinition::creature(ids::SHARDBLADE, "Shardblade", 4, 4, 3)
            .with_text("Whenever you cast a spell, gain +1 attack.")
            .with_mechanic(Mechanic::SpellburstAttack),
        CardDefinition::creature(ids::RIFT_WALKER, "Rift Walker", 5, 3, 4)
            .with_text("Battlecry: A friendly minion may attack again.")
            .with_mechanic(Mechanic::Battlecry)
            .with_mechanic(other("WindfuryGrant"))
            .with_target(TargetType::FriendlyMinion),
        CardDefinition::creature(ids::MISTWOLF_PACK, "Mistwolf Pack", 4, 2, 2)
            .with_text("Summon two 2/2 wolves. Combo: if you cast a spell last turn, summon a third.")
            .with_mechanic(other("Summon"))
            .with_mechanic(other("Combo")),
        CardDefinition::creature(ids::IRON_TROLL, "Iron Troll", 7, 7, 7),
        CardDefinition::creature(ids::SOUL_BINDER, "Soul Binder", 5, 3, 6)
            .with_text("Deathrattle: Summon a random minion from the enemy graveyard.")
            .with_mechanic(Mechanic::Deathrattle)
            .with_mechanic(other("ResurrectEnemyMinion")),
        CardDefinition::creature(ids::RADIANT_PALADIN, "Radiant Paladin", 6, 4, 7)
            .with_text("Divine Shield. Taunt.")
            .with_mechanic(Mechanic::DivineShield)
            .with_mechanic(Mechanic::Taunt),
        CardDefinition::creature(ids::ALCHEMIST_ZEALOT, "Alchemist Zealot", 3, 4, 2)
            .with_text("Whenever you cast a consumable spell, gain +2 attack this turn.")
            .with_mechanic(other("ConsumableSpellburstAttack")),
        // Spells
        CardDefinition::spell(ids::FROST_BURST, "Frost Burst", 2)
            .with_text("Deal 3 damage to an enemy and freeze it.")
            .with_mechanic(other("Damage"))
            .with_mechanic(other("Freeze"))
            .with_target(TargetType::EnemyCharacter),
        CardDefinition::spell(ids::ARCANE_SWAP, "Arcane Swap", 4)
            .with_text("Swap control of a friendly and an enemy minion.")
            .with_mechanic(other("SwapControl")),
        CardDefinition::spell(ids::REVIVAL_RITE, "Revival Rite", 6)
            .with_text("Resurrect a random minion from your graveyard.")
            .with_mechanic(other("ResurrectFriendlyMinion")),
        CardDefinition::spell(ids::FLAME_WARD, "Flame Ward", 3)
            .with_text("Give a friendly minion: whenever this is attacked, deal 3 damage to the attacker.")
            .with_mechanic(other("Enchantment"))
            .with_mechanic(other("DamageOnAttacked"))
            .with_target(TargetType::FriendlyMinion),
        CardDefinition::spell(ids::ARCANE_PULSE, "Arcane Pulse", 1)
            .with_text("Gain two extra mana next turn.")
            .with_mechanic(other("GainManaNextTurn")),
        CardDefinition::spell(ids::TIME_SEAL, "Time Seal", 5)
            .with_text("Your opponent skips their next turn.")
            .with_mechanic(other("SkipEnemyTurn")),
        CardDefinition::spell(ids::SHADOW_BIND, "Shadow Bind", 2)
            .with_text("Silence an enemy minion. It can't attack until your next turn.")
            .with_mechanic(other("Silence"))
            .with_mechanic(other("CannotAttackNextTurn"))
            .with_target(TargetType::EnemyMinion),
        // Artifacts
        CardDefinition::artifact(ids::CALAMITY_ORB, "Calamity Orb", 5, None)
            .with_text("At the start of your turn, deal 1 damage to all characters.")
            .with_mechanic(other("StartOfTurnDamage")),
        CardDefinition::artifact(ids::MITHRIL_CHARM, "Mithril Charm", 3, None)
            .with_text("Friendly minions return with 1 health the first time they die.")
            .with_mechanic(other("Aura"))
            .with_mechanic(other("ReincarnateOnDeath")),
        CardDefinition::artifact(ids::ANCIENT_CHRONOMETER, "Ancient Chronometer", 4, Some(3))
            .with_text("Your cards cost 1 less (minimum 1). Lasts 3 turns.")
            .with_mechanic(other("Aura"))
            .with_mechanic(other("CostReduction")),
    ]
}

/// The wolf token summoned by Mistwolf Pack.
#[must_use]
pub fn mistwolf_token() -> CardDefinition {
    CardDefinition::creature(ids::MISTWOLF, "Mistwolf", 0, 2, 2)
}

impl CardCatalog {
    /// The built-in twenty-card catalog.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for card in standard_cards() {
            let registered = catalog.register(card);
            debug_assert!(registered.is_ok(), "bad built-in card: {registered:?}");
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = CardCatalog::standard();
        assert_eq!(catalog.len(), 20);

        let count = |t: CardType| catalog.iter().filter(|c| c.card_type == t).count();
        assert_eq!(count(CardType::Creature), 10);
        assert_eq!(count(CardType::Spell), 7);
        assert_eq!(count(CardType::Artifact), 3);

        let ids: Vec<u32> = catalog.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_standard_cards_register_cleanly() {
        assert!(CardCatalog::from_definitions(standard_cards()).is_ok());
        assert_eq!(CardCatalog::standard().len(), standard_cards().len());
    }

    #[test]
    fn test_token_not_in_catalog() {
        let catalog = CardCatalog::standard();
        let wolf = mistwolf_token();
        assert!(!catalog.contains(wolf.id));
        assert_eq!((wolf.attack, wolf.health), (Some(2), Some(2)));
        assert!(wolf.mechanics.is_empty());
    }
}
