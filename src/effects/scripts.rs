//! Per-card scripted behaviour.
//!
//! Card behaviour is keyed by `CardId`, not by mechanic tag. Each table
//! maps an id to a plain function that mutates the duel. Scripts never run
//! the death sweep themselves: the caller sweeps once after the script
//! returns (or, for deathrattles, on the next sweep pass).
//!
//! Adding a card means adding an entry, not a type:
//!
//! ```
//! use duel_ccg::cards::CardId;
//! use duel_ccg::core::DuelError;
//! use duel_ccg::effects::{ScriptContext, ScriptTable};
//! use duel_ccg::rules::Duel;
//!
//! fn heal_hero(duel: &mut Duel, ctx: &ScriptContext) -> Result<(), DuelError> {
//!     duel.state_mut().player_mut(ctx.owner).hero.hp += 2;
//!     Ok(())
//! }
//!
//! let scripts = ScriptTable::standard().with_spell(CardId::new(42), heal_hero);
//! assert!(scripts.spell(CardId::new(42)).is_some());
//! ```

use log::{debug, info, warn};
use rustc_hash::FxHashMap;

use super::aura::ArtifactAura;
use super::effect::Effect;
use crate::cards::{ids, mistwolf_token, CardId};
use crate::core::{DuelError, InstanceId, Side, Target};
use crate::rules::Duel;

/// Everything a script knows about why it is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptContext {
    /// The instance whose script is running.
    pub source: InstanceId,
    pub card: CardId,
    /// The side that played it (or owned it, for deathrattles).
    pub owner: Side,
    pub target: Option<Target>,
}

/// A card script.
pub type ScriptFn = fn(&mut Duel, &ScriptContext) -> Result<(), DuelError>;

/// Dispatch tables keyed by card id.
#[derive(Clone, Default)]
pub struct ScriptTable {
    battlecries: FxHashMap<CardId, ScriptFn>,
    spells: FxHashMap<CardId, ScriptFn>,
    deathrattles: FxHashMap<CardId, ScriptFn>,
    /// Creatures that replace normal board placement.
    placements: FxHashMap<CardId, ScriptFn>,
    artifacts: FxHashMap<CardId, ArtifactAura>,
}

impl std::fmt::Debug for ScriptTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptTable")
            .field("battlecries", &self.battlecries.len())
            .field("spells", &self.spells.len())
            .field("deathrattles", &self.deathrattles.len())
            .field("placements", &self.placements.len())
            .field("artifacts", &self.artifacts)
            .finish()
    }
}

impl ScriptTable {
    /// An empty table: every card resolves as a logged no-op.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts for the built-in card set.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_battlecry(ids::EMBERWYRM_SCION, emberwyrm_scion)
            .with_battlecry(ids::RIFT_WALKER, rift_walker)
            .with_placement(ids::MISTWOLF_PACK, mistwolf_pack)
            .with_deathrattle(ids::RATTLE_SPRITE, rattle_sprite)
            .with_deathrattle(ids::SOUL_BINDER, soul_binder)
            .with_spell(ids::FROST_BURST, frost_burst)
            .with_spell(ids::REVIVAL_RITE, revival_rite)
            .with_spell(ids::FLAME_WARD, flame_ward)
            .with_spell(ids::SHADOW_BIND, shadow_bind)
            .with_artifact(ids::CALAMITY_ORB, ArtifactAura::StartOfTurnDamage)
            .with_artifact(ids::MITHRIL_CHARM, ArtifactAura::Reincarnation)
            .with_artifact(ids::ANCIENT_CHRONOMETER, ArtifactAura::CostReduction)
    }

    // === Builders ===

    #[must_use]
    pub fn with_battlecry(mut self, id: CardId, script: ScriptFn) -> Self {
        self.battlecries.insert(id, script);
        self
    }

    #[must_use]
    pub fn with_spell(mut self, id: CardId, script: ScriptFn) -> Self {
        self.spells.insert(id, script);
        self
    }

    #[must_use]
    pub fn with_deathrattle(mut self, id: CardId, script: ScriptFn) -> Self {
        self.deathrattles.insert(id, script);
        self
    }

    /// Register a creature that puts something else on the board instead
    /// of itself. The card goes to the graveyard afterwards.
    #[must_use]
    pub fn with_placement(mut self, id: CardId, script: ScriptFn) -> Self {
        self.placements.insert(id, script);
        self
    }

    #[must_use]
    pub fn with_artifact(mut self, id: CardId, aura: ArtifactAura) -> Self {
        self.artifacts.insert(id, aura);
        self
    }

    // === Lookup ===

    #[must_use]
    pub fn battlecry(&self, id: CardId) -> Option<ScriptFn> {
        self.battlecries.get(&id).copied()
    }

    #[must_use]
    pub fn spell(&self, id: CardId) -> Option<ScriptFn> {
        self.spells.get(&id).copied()
    }

    #[must_use]
    pub fn deathrattle(&self, id: CardId) -> Option<ScriptFn> {
        self.deathrattles.get(&id).copied()
    }

    #[must_use]
    pub fn placement(&self, id: CardId) -> Option<ScriptFn> {
        self.placements.get(&id).copied()
    }

    #[must_use]
    pub fn artifact_aura(&self, id: CardId) -> Option<ArtifactAura> {
        self.artifacts.get(&id).copied()
    }
}

// === Battlecries ===

fn emberwyrm_scion(duel: &mut Duel, ctx: &ScriptContext) -> Result<(), DuelError> {
    let enemy = ctx.owner.other();
    let targets = duel.state().player(enemy).all_characters(enemy);
    debug!("emberwyrm scion hits {} enemy characters", targets.len());
    for target in targets {
        duel.deal_damage(target, 2);
    }
    Ok(())
}

fn rift_walker(duel: &mut Duel, ctx: &ScriptContext) -> Result<(), DuelError> {
    let Some(Target::Minion { owner, id }) = ctx.target else {
        info!("rift walker battlecry has no target, nothing happens");
        return Ok(());
    };
    if owner != ctx.owner {
        warn!("rift walker battlecry aimed at an enemy minion, ignored");
        return Ok(());
    }
    let minion = duel
        .state_mut()
        .player_mut(owner)
        .minion_mut(id)
        .ok_or(DuelError::InstanceNotFound(id))?;
    minion.can_attack = true;
    info!("{} may attack again", minion.def.name);
    Ok(())
}

// === Placements ===

fn mistwolf_pack(duel: &mut Duel, ctx: &ScriptContext) -> Result<(), DuelError> {
    let combo = duel.state().player(ctx.owner).played_spell_last_turn;
    let wolves = if combo { 3 } else { 2 };
    let token = mistwolf_token();
    let summoned = (0..wolves)
        .filter(|_| duel.summon(ctx.owner, &token).is_some())
        .count();
    info!("{} summons {} wolves (combo: {})", ctx.owner, summoned, combo);
    Ok(())
}

// === Deathrattles ===

fn rattle_sprite(duel: &mut Duel, ctx: &ScriptContext) -> Result<(), DuelError> {
    let drawn = duel.draw_from_deck(ctx.owner);
    debug!("rattle sprite deathrattle: {:?}", drawn);
    Ok(())
}

fn soul_binder(duel: &mut Duel, ctx: &ScriptContext) -> Result<(), DuelError> {
    if duel.resurrect_random(ctx.owner.other(), ctx.owner).is_none() {
        info!("soul binder finds nothing to raise for {}", ctx.owner);
    }
    Ok(())
}

// === Spells ===

fn frost_burst(duel: &mut Duel, ctx: &ScriptContext) -> Result<(), DuelError> {
    let target = ctx.target.ok_or(DuelError::MissingTarget)?;
    duel.deal_damage(target, 3);
    match target {
        Target::Hero(side) => info!("{} hero is frozen (no effect on heroes)", side),
        Target::Minion { owner, id } => {
            if let Some(minion) = duel.state_mut().player_mut(owner).minion_mut(id) {
                if minion.is_alive() {
                    minion.is_frozen = true;
                    info!("{} is frozen", minion.def.name);
                }
            }
        }
    }
    Ok(())
}

fn revival_rite(duel: &mut Duel, ctx: &ScriptContext) -> Result<(), DuelError> {
    if duel.resurrect_random(ctx.owner, ctx.owner).is_none() {
        info!("revival rite finds nothing to raise for {}", ctx.owner);
    }
    Ok(())
}

fn flame_ward(duel: &mut Duel, ctx: &ScriptContext) -> Result<(), DuelError> {
    let target = ctx.target.ok_or(DuelError::MissingTarget)?;
    let id = target.instance_id().ok_or(DuelError::InvalidTarget)?;
    let minion = duel
        .state_mut()
        .player_mut(target.owner())
        .minion_mut(id)
        .ok_or(DuelError::InstanceNotFound(id))?;
    minion.attach(Effect::retaliate(ctx.card, 3));
    info!("{} gains flame ward", minion.def.name);
    Ok(())
}

fn shadow_bind(duel: &mut Duel, ctx: &ScriptContext) -> Result<(), DuelError> {
    let target = ctx.target.ok_or(DuelError::MissingTarget)?;
    let id = target.instance_id().ok_or(DuelError::InvalidTarget)?;
    let minion = duel
        .state_mut()
        .player_mut(target.owner())
        .minion_mut(id)
        .ok_or(DuelError::InstanceNotFound(id))?;
    minion.silence();
    minion.is_shackled = true;
    info!("{} is silenced and bound", minion.def.name);
    Ok(())
}
