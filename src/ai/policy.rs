//! Opponent policies.
//!
//! A policy only makes choices. The sequence in `ai::sequence` gathers the
//! legal options, asks the policy, and carries the choice out through the
//! same engine operations the human side uses.

use crate::core::{GameRng, InstanceId, Target, TargetKind};

/// Decision-maker for the autonomous side.
pub trait OpponentPolicy {
    /// Pick the next card to play from `playable` (affordable creatures
    /// with board room, in hand order). `None` ends the play phase.
    fn choose_play(&self, playable: &[InstanceId]) -> Option<InstanceId>;

    /// Pick an attack target from `pool`. `None` skips this attacker.
    fn choose_attack_target(&self, pool: &[Target], rng: &mut GameRng) -> Option<Target>;
}

/// The default greedy policy: play the first playable creature, attack
/// the hero whenever allowed, otherwise a random legal target.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptedOpponent;

impl OpponentPolicy for ScriptedOpponent {
    fn choose_play(&self, playable: &[InstanceId]) -> Option<InstanceId> {
        playable.first().copied()
    }

    fn choose_attack_target(&self, pool: &[Target], rng: &mut GameRng) -> Option<Target> {
        pool.iter()
            .find(|t| t.kind() == TargetKind::Hero)
            .or_else(|| rng.choose(pool))
            .copied()
    }
}

/// A policy that never acts. Useful for tests that only exercise turn
/// flow.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassiveOpponent;

impl OpponentPolicy for PassiveOpponent {
    fn choose_play(&self, _playable: &[InstanceId]) -> Option<InstanceId> {
        None
    }

    fn choose_attack_target(&self, _pool: &[Target], _rng: &mut GameRng) -> Option<Target> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    #[test]
    fn test_scripted_prefers_hero() {
        let mut rng = GameRng::new(1);
        let pool = vec![Target::minion(Side::Player, InstanceId(4)), Target::hero(Side::Player)];

        assert_eq!(
            ScriptedOpponent.choose_attack_target(&pool, &mut rng),
            Some(Target::hero(Side::Player))
        );
    }

    #[test]
    fn test_scripted_random_among_taunts() {
        let mut rng = GameRng::new(1);
        let pool = vec![
            Target::minion(Side::Player, InstanceId(4)),
            Target::minion(Side::Player, InstanceId(5)),
        ];

        for _ in 0..20 {
            let pick = ScriptedOpponent.choose_attack_target(&pool, &mut rng).unwrap();
            assert!(pool.contains(&pick));
        }
        assert_eq!(ScriptedOpponent.choose_attack_target(&[], &mut rng), None);
    }

    #[test]
    fn test_scripted_plays_first() {
        let playable = [InstanceId(8), InstanceId(2)];
        assert_eq!(ScriptedOpponent.choose_play(&playable), Some(InstanceId(8)));
        assert_eq!(ScriptedOpponent.choose_play(&[]), None);
        assert_eq!(PassiveOpponent.choose_play(&playable), None);
    }
}
