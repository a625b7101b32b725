//! Gold wallet.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::events::{EventQueue, GameEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough gold: have {have}, need {need}")]
pub struct InsufficientGold {
    pub have: u32,
    pub need: u32,
}

/// Apply a percent-points bonus to a reward amount, rounding to nearest.
pub fn apply_bonus(amount: u32, bonus_percent: f32) -> u32 {
    (amount as f32 * (1.0 + bonus_percent / 100.0)).round() as u32
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    gold: u32,
}

impl Wallet {
    pub fn new(gold: u32) -> Self {
        Self { gold }
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.gold >= cost
    }

    /// Credit gold. The caller applies any gold bonus first via
    /// [`apply_bonus`] so the event carries the final amount.
    pub fn earn(&mut self, amount: u32, events: &mut EventQueue) {
        if amount == 0 {
            return;
        }
        self.gold = self.gold.saturating_add(amount);
        events.push(GameEvent::GoldEarned {
            amount,
            total: self.gold,
        });
    }

    pub fn spend(&mut self, cost: u32, events: &mut EventQueue) -> Result<(), InsufficientGold> {
        if self.gold < cost {
            return Err(InsufficientGold {
                have: self.gold,
                need: cost,
            });
        }
        self.gold -= cost;
        events.push(GameEvent::GoldSpent {
            amount: cost,
            total: self.gold,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earn_and_spend() {
        let mut wallet = Wallet::new(10);
        let mut events = EventQueue::new();
        wallet.earn(40, &mut events);
        assert_eq!(wallet.gold(), 50);
        wallet.spend(30, &mut events).unwrap();
        assert_eq!(wallet.gold(), 20);
        assert_eq!(
            wallet.spend(25, &mut events),
            Err(InsufficientGold { have: 20, need: 25 })
        );
        assert_eq!(wallet.gold(), 20);
    }

    #[test]
    fn test_bonus_rounding() {
        assert_eq!(apply_bonus(10, 0.0), 10);
        assert_eq!(apply_bonus(10, 25.0), 13);
        assert_eq!(apply_bonus(5, 50.0), 8);
    }

    #[test]
    fn test_zero_earn_no_event() {
        let mut wallet = Wallet::default();
        let mut events = EventQueue::new();
        wallet.earn(0, &mut events);
        assert!(events.is_empty());
    }
}
