//! Card definitions - static catalog data.
//!
//! `CardDefinition` holds the immutable properties of a card: cost, base
//! stats, mechanic tags and targeting requirements. Instance-specific data
//! (damage taken, frozen, attached effects) lives in `CardInstance`.
//!
//! Mechanic tags are data. Card behaviour is dispatched by `CardId`
//! (see `effects::ScriptTable`); only a handful of generic tags carry
//! engine meaning (`Taunt`, `DivineShield`, `Deathrattle`, `Battlecry`,
//! `RegenerateOnDamage`, `SpellburstAttack`).

use serde::{Deserialize, Serialize};

use crate::core::{Side, Target};

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Creature,
    Spell,
    Artifact,
}

/// Mechanic tag.
///
/// Catalog strings map onto the generic tags; anything else is kept
/// verbatim in `Other`.
///
/// ```
/// use duel_ccg::cards::Mechanic;
///
/// assert_eq!(Mechanic::from("Divine Shield"), Mechanic::DivineShield);
/// assert_eq!(Mechanic::from("Combo"), Mechanic::Other("Combo".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mechanic {
    Taunt,
    DivineShield,
    Deathrattle,
    Battlecry,
    RegenerateOnDamage,
    SpellburstAttack,
    Other(String),
}

impl From<&str> for Mechanic {
    fn from(tag: &str) -> Self {
        match tag {
            "Taunt" => Mechanic::Taunt,
            "Divine Shield" | "DivineShield" => Mechanic::DivineShield,
            "Deathrattle" => Mechanic::Deathrattle,
            "Battlecry" => Mechanic::Battlecry,
            "RegenerateOnDamage" => Mechanic::RegenerateOnDamage,
            "SpellburstAttack" => Mechanic::SpellburstAttack,
            other => Mechanic::Other(other.to_string()),
        }
    }
}

impl From<String> for Mechanic {
    fn from(tag: String) -> Self {
        Mechanic::from(tag.as_str())
    }
}

impl From<Mechanic> for String {
    fn from(mechanic: Mechanic) -> Self {
        match mechanic {
            Mechanic::Taunt => "Taunt".to_string(),
            Mechanic::DivineShield => "Divine Shield".to_string(),
            Mechanic::Deathrattle => "Deathrattle".to_string(),
            Mechanic::Battlecry => "Battlecry".to_string(),
            Mechanic::RegenerateOnDamage => "RegenerateOnDamage".to_string(),
            Mechanic::SpellburstAttack => "SpellburstAttack".to_string(),
            Mechanic::Other(tag) => tag,
        }
    }
}

/// What a targeted card may be aimed at, relative to its caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    FriendlyMinion,
    EnemyCharacter,
    EnemyMinion,
}

impl TargetType {
    /// Structural check: does `target` have the right kind and owner for
    /// a card cast by `caster`? Existence is checked separately.
    #[must_use]
    pub fn accepts(self, target: &Target, caster: Side) -> bool {
        match (self, target) {
            (TargetType::FriendlyMinion, Target::Minion { owner, .. }) => *owner == caster,
            (TargetType::EnemyMinion, Target::Minion { owner, .. }) => *owner != caster,
            (TargetType::EnemyCharacter, t) => t.owner() != caster,
            _ => false,
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use duel_ccg::cards::{CardDefinition, CardId, CardType, Mechanic};
///
/// let guard = CardDefinition::creature(CardId::new(2), "Grove Warden", 3, 2, 5)
///     .with_mechanic(Mechanic::Taunt);
///
/// assert_eq!(guard.card_type, CardType::Creature);
/// assert!(guard.has(&Mechanic::Taunt));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub cost: u32,
    #[serde(default)]
    pub attack: Option<i32>,
    #[serde(default)]
    pub health: Option<i32>,
    #[serde(default)]
    pub durability: Option<u32>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub mechanics: Vec<Mechanic>,
    #[serde(default)]
    pub requires_target: bool,
    #[serde(default)]
    pub target_type: Option<TargetType>,
}

impl CardDefinition {
    fn base(id: CardId, name: impl Into<String>, card_type: CardType, cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            cost,
            attack: None,
            health: None,
            durability: None,
            text: String::new(),
            mechanics: Vec::new(),
            requires_target: false,
            target_type: None,
        }
    }

    /// A creature with base attack and health.
    #[must_use]
    pub fn creature(id: CardId, name: impl Into<String>, cost: u32, attack: i32, health: i32) -> Self {
        let mut def = Self::base(id, name, CardType::Creature, cost);
        def.attack = Some(attack);
        def.health = Some(health);
        def
    }

    /// A spell.
    #[must_use]
    pub fn spell(id: CardId, name: impl Into<String>, cost: u32) -> Self {
        Self::base(id, name, CardType::Spell, cost)
    }

    /// An artifact. `durability: None` lasts until replaced.
    #[must_use]
    pub fn artifact(id: CardId, name: impl Into<String>, cost: u32, durability: Option<u32>) -> Self {
        let mut def = Self::base(id, name, CardType::Artifact, cost);
        def.durability = durability;
        def
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Add a mechanic tag (builder pattern).
    #[must_use]
    pub fn with_mechanic(mut self, mechanic: Mechanic) -> Self {
        if !self.mechanics.contains(&mechanic) {
            self.mechanics.push(mechanic);
        }
        self
    }

    /// Require a target of the given type (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target_type: TargetType) -> Self {
        self.requires_target = true;
        self.target_type = Some(target_type);
        self
    }

    /// Does the definition carry a tag?
    #[must_use]
    pub fn has(&self, mechanic: &Mechanic) -> bool {
        self.mechanics.contains(mechanic)
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.card_type == CardType::Creature
    }

    #[must_use]
    pub fn is_spell(&self) -> bool {
        self.card_type == CardType::Spell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InstanceId;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_builders() {
        let spell = CardDefinition::spell(CardId::new(11), "Frost Burst", 2)
            .with_mechanic(Mechanic::Other("Freeze".into()))
            .with_target(TargetType::EnemyCharacter);

        assert!(spell.is_spell());
        assert!(spell.requires_target);
        assert_eq!(spell.target_type, Some(TargetType::EnemyCharacter));
        assert_eq!(spell.attack, None);

        let relic = CardDefinition::artifact(CardId::new(20), "Chronometer", 4, Some(3));
        assert_eq!(relic.durability, Some(3));
    }

    #[test]
    fn test_with_mechanic_dedupes() {
        let def = CardDefinition::creature(CardId::new(1), "A", 1, 1, 1)
            .with_mechanic(Mechanic::Taunt)
            .with_mechanic(Mechanic::Taunt);
        assert_eq!(def.mechanics.len(), 1);
    }

    #[test]
    fn test_target_type_accepts() {
        let own = Target::minion(Side::Player, InstanceId(1));
        let enemy = Target::minion(Side::Opponent, InstanceId(2));
        let enemy_hero = Target::hero(Side::Opponent);
        let own_hero = Target::hero(Side::Player);

        assert!(TargetType::FriendlyMinion.accepts(&own, Side::Player));
        assert!(!TargetType::FriendlyMinion.accepts(&enemy, Side::Player));
        assert!(!TargetType::FriendlyMinion.accepts(&own_hero, Side::Player));

        assert!(TargetType::EnemyMinion.accepts(&enemy, Side::Player));
        assert!(!TargetType::EnemyMinion.accepts(&enemy_hero, Side::Player));

        assert!(TargetType::EnemyCharacter.accepts(&enemy, Side::Player));
        assert!(TargetType::EnemyCharacter.accepts(&enemy_hero, Side::Player));
        assert!(!TargetType::EnemyCharacter.accepts(&own_hero, Side::Player));
        assert!(TargetType::EnemyCharacter.accepts(&own_hero, Side::Opponent));
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "id": 5, "name": "Rift Walker", "type": "Creature", "cost": 5,
            "attack": 3, "health": 4, "text": "",
            "mechanics": ["Battlecry", "WindfuryGrant"],
            "requiresTarget": true, "targetType": "friendly_minion"
        }"#;
        let def: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(def.id, CardId::new(5));
        assert!(def.has(&Mechanic::Battlecry));
        assert!(def.has(&Mechanic::Other("WindfuryGrant".into())));
        assert_eq!(def.target_type, Some(TargetType::FriendlyMinion));

        let back = serde_json::to_string(&def).unwrap();
        assert!(back.contains("\"requiresTarget\":true"));
    }
}
