//! Turn flow tests: game start, turn transitions, artifacts, draws.

use duel_ccg::ai::{NoPacing, PassiveOpponent};
use duel_ccg::cards::{ids, CardCatalog, CardId, CardInstance};
use duel_ccg::core::{MatchConfig, Phase, Side, Target};
use duel_ccg::rules::{Draw, Duel};

fn passive(config: MatchConfig) -> Duel {
    let mut duel = Duel::standard(config).with_policy(Box::new(PassiveOpponent));
    duel.start_game().unwrap();
    duel
}

fn card(id: CardId) -> CardInstance {
    CardInstance::new(CardCatalog::standard().get(id).unwrap())
}

/// Play one full round: player ends, opponent runs its sequence.
fn round(duel: &mut Duel) {
    duel.end_turn().unwrap();
    duel.run_autonomous(&mut NoPacing::default()).unwrap();
}

/// Starting draws 3 for the player and 4 for the opponent from 20-card decks.
#[test]
fn test_opening_hands_and_decks() {
    let duel = passive(MatchConfig::default().with_seed(100));

    assert_eq!(duel.hand(Side::Player).len(), 3);
    assert_eq!(duel.hand(Side::Opponent).len(), 4);
    assert_eq!(duel.player(Side::Player).deck.len(), 17);
    assert_eq!(duel.player(Side::Opponent).deck.len(), 16);
    assert_eq!(duel.turn(), 1);
    assert_eq!(duel.active_side(), Side::Player);
    assert_eq!(duel.phase(), Phase::PlayerMain);
}

/// The same seed deals the same hands.
#[test]
fn test_seeded_shuffle_is_deterministic() {
    let a = passive(MatchConfig::default().with_seed(7));
    let b = passive(MatchConfig::default().with_seed(7));

    let ids = |d: &Duel| d.hand(Side::Player).iter().map(|c| c.card_id()).collect::<Vec<_>>();
    assert_eq!(ids(&a), ids(&b));
}

/// A duration-3 artifact leaves after three of its owner's turn starts.
#[test]
fn test_chronometer_expires_after_three_turns() {
    let mut duel = passive(MatchConfig::default().with_seed(8));
    let relic = card(ids::ANCIENT_CHRONOMETER);
    let relic_id = relic.instance_id;
    let troll = card(ids::IRON_TROLL);
    let troll_id = troll.instance_id;
    let player = duel.state_mut().player_mut(Side::Player);
    player.hand.push_back(relic);
    player.hand.push_back(troll);

    duel.play_card(relic_id, None).unwrap();
    assert_eq!(duel.effective_cost(Side::Player, troll_id), Some(6));

    round(&mut duel);
    round(&mut duel);
    assert_eq!(duel.artifact(Side::Player).and_then(|a| a.remaining_duration), Some(1));
    assert_eq!(duel.effective_cost(Side::Player, troll_id), Some(6));

    round(&mut duel);
    assert!(duel.artifact(Side::Player).is_none());
    assert!(duel.graveyard(Side::Player).iter().any(|c| c.instance_id == relic_id));
    assert_eq!(duel.effective_cost(Side::Player, troll_id), Some(7));
}

/// Mana grows by one per turn and stops at ten.
#[test]
fn test_mana_caps_at_ten() {
    let mut duel = passive(MatchConfig::default().with_seed(9));

    for _ in 0..5 {
        round(&mut duel);
    }

    assert_eq!(duel.mana(Side::Player).max, 10);
    assert_eq!(duel.mana(Side::Player).current, 10);
    assert_eq!(duel.mana(Side::Opponent).max, 5);
}

/// Summoning sickness wears off at the end of the owner's turn; freeze
/// wears off at the start of the owner's next turn.
#[test]
fn test_sickness_and_freeze_clear() {
    let mut duel = passive(MatchConfig::default().with_seed(10));
    let troll = card(ids::IRON_TROLL);
    let troll_id = troll.instance_id;
    duel.state_mut().player_mut(Side::Player).hand.push_back(troll);
    duel.play_card(troll_id, None).unwrap();
    assert!(!duel.state().player(Side::Player).minion(troll_id).unwrap().can_attack);

    duel.state_mut()
        .player_mut(Side::Player)
        .minion_mut(troll_id)
        .unwrap()
        .is_frozen = true;
    round(&mut duel);

    let m = duel.state().player(Side::Player).minion(troll_id).unwrap();
    assert!(m.can_attack);
    assert!(!m.is_frozen);
    assert_eq!(m.attack_block(), None);
}

/// Shadow Bind keeps the enemy minion from attacking until the caster's
/// next turn starts.
#[test]
fn test_shadow_bind_lasts_until_caster_turn() {
    let mut duel = passive(MatchConfig::default().with_seed(12));
    let mut guard = card(ids::RADIANT_PALADIN);
    guard.can_attack = true;
    let guard_id = guard.instance_id;
    duel.state_mut().player_mut(Side::Opponent).board.push_back(guard);
    let bind = card(ids::SHADOW_BIND);
    let bind_id = bind.instance_id;
    duel.state_mut().player_mut(Side::Player).hand.push_back(bind);

    duel.play_card(bind_id, Some(Target::minion(Side::Opponent, guard_id)))
        .unwrap();

    let m = duel.state().player(Side::Opponent).minion(guard_id).unwrap();
    assert!(m.is_shackled);
    assert!(m.is_silenced);
    assert!(!m.has_divine_shield);
    assert!(duel.state().player(Side::Opponent).taunt_targets(Side::Opponent).is_empty());

    duel.end_turn().unwrap();
    let m = duel.state().player(Side::Opponent).minion(guard_id).unwrap();
    assert!(m.is_shackled);
    assert!(m.attack_block().is_some());

    duel.run_autonomous(&mut NoPacing::default()).unwrap();
    assert!(!duel.state().player(Side::Opponent).minion(guard_id).unwrap().is_shackled);
}

/// Combo flags roll over at the end of each side's own turn.
#[test]
fn test_combo_flags_roll_over() {
    let mut duel = passive(MatchConfig::default().with_seed(13));
    let swap = card(ids::ARCANE_SWAP);
    let swap_id = swap.instance_id;
    duel.state_mut().player_mut(Side::Player).hand.push_back(swap);
    duel.play_card(swap_id, None).unwrap();

    round(&mut duel);

    let p = duel.player(Side::Player);
    assert!(p.played_card_last_turn);
    assert!(p.played_spell_last_turn);
    assert!(!p.played_card_this_turn);
    assert!(!p.played_spell_this_turn);

    round(&mut duel);
    assert!(!duel.player(Side::Player).played_spell_last_turn);
}

/// An empty deck deals escalating fatigue at the start of a turn.
#[test]
fn test_fatigue_on_turn_start() {
    let mut duel = passive(MatchConfig::default().with_seed(14));
    duel.state_mut().player_mut(Side::Opponent).deck.clear();

    round(&mut duel);
    assert_eq!(duel.hero(Side::Opponent).hp, 29);

    round(&mut duel);
    assert_eq!(duel.hero(Side::Opponent).hp, 27);
    assert_eq!(duel.player(Side::Opponent).fatigue, 3);
}

/// Calamity Orb hits every character at its owner's turn start.
#[test]
fn test_calamity_orb_ticks() {
    let mut duel = passive(MatchConfig::default().with_seed(15));
    let orb = card(ids::CALAMITY_ORB);
    let orb_id = orb.instance_id;
    let sprite = card(ids::RATTLE_SPRITE);
    duel.state_mut().player_mut(Side::Opponent).board.push_back(sprite);
    duel.state_mut().player_mut(Side::Player).hand.push_back(orb);
    duel.play_card(orb_id, None).unwrap();
    let opp_hand = duel.hand(Side::Opponent).len();

    round(&mut duel);

    assert_eq!(duel.hero(Side::Player).hp, 29);
    assert_eq!(duel.hero(Side::Opponent).hp, 29);
    assert!(duel.board(Side::Opponent).is_empty());
    // deathrattle draw plus the opponent's own turn draw
    assert_eq!(duel.hand(Side::Opponent).len(), opp_hand + 2);
}

/// The draw result reports burns when the hand is full.
#[test]
fn test_draw_reports_burn() {
    let mut duel = passive(MatchConfig::default().with_seed(16));
    while duel.hand(Side::Player).len() < 10 {
        duel.draw_card(Side::Player).unwrap();
    }
    assert!(matches!(duel.draw_card(Side::Player).unwrap(), Draw::Burned(_)));
    assert_eq!(duel.hand(Side::Player).len(), 10);
}
