//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A match has exactly two combatants: the human-driven `Player` and the
//! scripted `Opponent`.
//!
//! ## SideMap
//!
//! Per-side storage with O(1) access, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two combatants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The human-driven side.
    Player,
    /// The autonomous, scripted side.
    Opponent,
}

impl Side {
    /// Both sides, in resolution order.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Is this the human-driven side?
    #[must_use]
    pub const fn is_human(self) -> bool {
        matches!(self, Side::Player)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use duel_ccg::core::{Side, SideMap};
///
/// let mut mana: SideMap<u32> = SideMap::new(|side| if side.is_human() { 7 } else { 0 });
///
/// assert_eq!(mana[Side::Player], 7);
/// mana[Side::Opponent] += 1;
/// assert_eq!(mana[Side::Opponent], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    player: T,
    opponent: T,
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            player: factory(Side::Player),
            opponent: factory(Side::Opponent),
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            player: value.clone(),
            opponent: value,
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Borrow both entries mutably: `(side, side.other())`.
    pub fn split_mut(&mut self, side: Side) -> (&mut T, &mut T) {
        match side {
            Side::Player => (&mut self.player, &mut self.opponent),
            Side::Opponent => (&mut self.opponent, &mut self.player),
        }
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Opponent, &self.opponent)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Player.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::Player);
        assert!(Side::Player.is_human());
        assert!(!Side::Opponent.is_human());
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<&str> = SideMap::new(|s| if s.is_human() { "me" } else { "ai" });

        assert_eq!(map[Side::Player], "me");
        assert_eq!(map[Side::Opponent], "ai");
    }

    #[test]
    fn test_split_mut() {
        let mut map: SideMap<Vec<i32>> = SideMap::default();

        let (own, other) = map.split_mut(Side::Opponent);
        own.push(1);
        other.push(2);

        assert_eq!(map[Side::Opponent], vec![1]);
        assert_eq!(map[Side::Player], vec![2]);
    }

    #[test]
    fn test_iter_order() {
        let map = SideMap::with_value(0);
        let sides: Vec<_> = map.iter().map(|(s, _)| s).collect();
        assert_eq!(sides, vec![Side::Player, Side::Opponent]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map: SideMap<u32> = SideMap::new(|s| if s.is_human() { 3 } else { 4 });
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
