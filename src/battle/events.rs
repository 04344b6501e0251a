//! Game event log

use serde::{Deserialize, Serialize};

use crate::core::types::{Cell, Side, UnitId};

/// Log entry for something that happened on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub turn: u32,
    pub kind: GameEventKind,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEventKind {
    GameStarted,
    UnitMoved { unit: UnitId, from: Cell, to: Cell },
    UnitAttacked { attacker: UnitId, target: UnitId, damage: f64 },
    UnitDied { unit: UnitId, cell: Cell, side: Side },
    RoundWon { level: usize },
    GameWon { score: u32 },
    GameLost,
    GameSaved,
    GameLoaded { level: usize },
}

/// Ordered log of events since the session started
#[derive(Debug, Clone, Default)]
pub struct GameEventLog {
    pub events: Vec<GameEvent>,
}

impl GameEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: GameEventKind, description: String, turn: u32) {
        self.events.push(GameEvent {
            turn,
            kind,
            description,
        });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Number of events matching a predicate
    pub fn count_where(&self, pred: impl Fn(&GameEventKind) -> bool) -> usize {
        self.events.iter().filter(|e| pred(&e.kind)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut log = GameEventLog::new();
        log.push(GameEventKind::GameStarted, "start".into(), 0);
        log.push(GameEventKind::GameLost, "lost".into(), 3);

        assert_eq!(log.len(), 2);
        assert_eq!(log.events[0].kind, GameEventKind::GameStarted);
        assert_eq!(log.last().unwrap().turn, 3);
    }

    #[test]
    fn test_count_where() {
        let mut log = GameEventLog::new();
        log.push(GameEventKind::GameSaved, String::new(), 1);
        log.push(GameEventKind::GameSaved, String::new(), 2);
        log.push(GameEventKind::GameLost, String::new(), 2);

        assert_eq!(log.count_where(|k| *k == GameEventKind::GameSaved), 2);
        log.clear();
        assert!(log.is_empty());
    }
}
