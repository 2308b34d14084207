//! Survival stats

use strum::{Display, EnumIter};

use crate::consts::{CRITICAL_THRESHOLD, STAT_MAX, STAT_MIN, WARNING_THRESHOLD};
use crate::object::Effect;

/// The four survival stats. Higher is better for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Stat {
    Health,
    Hunger,
    Thirst,
    /// Shown to the player as energy
    Fatigue,
}

impl Stat {
    /// Status panel label
    pub const fn label(self) -> &'static str {
        match self {
            Stat::Health => "HEALTH",
            Stat::Hunger => "HUNGER",
            Stat::Thirst => "THIRST",
            Stat::Fatigue => "ENERGY",
        }
    }
}

/// Severity bucket of a stat value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatLevel {
    Ok,
    Warning,
    Critical,
}

impl StatLevel {
    pub fn from_value(value: f32) -> Self {
        if value <= CRITICAL_THRESHOLD {
            StatLevel::Critical
        } else if value <= WARNING_THRESHOLD {
            StatLevel::Warning
        } else {
            StatLevel::Ok
        }
    }
}

/// Clamp a stat into [0, 100]
pub fn clamp_stat(value: f32) -> f32 {
    if value.is_nan() {
        return STAT_MIN;
    }
    value.clamp(STAT_MIN, STAT_MAX)
}

/// Health, hunger, thirst and fatigue, each kept in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    health: f32,
    hunger: f32,
    thirst: f32,
    fatigue: f32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            health: STAT_MAX,
            hunger: STAT_MAX,
            thirst: STAT_MAX,
            fatigue: STAT_MAX,
        }
    }
}

impl Stats {
    pub fn get(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Health => self.health,
            Stat::Hunger => self.hunger,
            Stat::Thirst => self.thirst,
            Stat::Fatigue => self.fatigue,
        }
    }

    pub fn set(&mut self, stat: Stat, value: f32) {
        let slot = match stat {
            Stat::Health => &mut self.health,
            Stat::Hunger => &mut self.hunger,
            Stat::Thirst => &mut self.thirst,
            Stat::Fatigue => &mut self.fatigue,
        };
        *slot = clamp_stat(value);
    }

    pub fn adjust(&mut self, stat: Stat, delta: f32) {
        self.set(stat, self.get(stat) + delta);
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn hunger(&self) -> f32 {
        self.hunger
    }

    pub fn thirst(&self) -> f32 {
        self.thirst
    }

    pub fn fatigue(&self) -> f32 {
        self.fatigue
    }

    /// Apply an item's deltas to every stat
    pub fn apply(&mut self, effect: &Effect) {
        for stat in [Stat::Health, Stat::Hunger, Stat::Thirst, Stat::Fatigue] {
            self.adjust(stat, effect.delta(stat));
        }
    }

    /// Health, hunger or thirst is at or below the critical threshold
    pub fn is_critical(&self) -> bool {
        [self.health, self.hunger, self.thirst]
            .iter()
            .any(|v| *v <= CRITICAL_THRESHOLD)
    }

    pub fn level(&self, stat: Stat) -> StatLevel {
        StatLevel::from_value(self.get(stat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_full() {
        let stats = Stats::default();
        assert_eq!(stats.health(), 100.0);
        assert_eq!(stats.fatigue(), 100.0);
        assert!(!stats.is_critical());
    }

    #[test]
    fn test_adjust_clamps() {
        let mut stats = Stats::default();
        stats.adjust(Stat::Hunger, 50.0);
        assert_eq!(stats.hunger(), 100.0);
        stats.adjust(Stat::Thirst, -250.0);
        assert_eq!(stats.thirst(), 0.0);
        assert!(stats.is_critical());
    }

    #[test]
    fn test_apply_effect() {
        let mut stats = Stats::default();
        stats.set(Stat::Hunger, 40.0);
        stats.set(Stat::Thirst, 90.0);
        stats.apply(&Effect::new(0.0, 30.0, 20.0, -5.0));
        assert_eq!(stats.hunger(), 70.0);
        assert_eq!(stats.thirst(), 100.0);
        assert_eq!(stats.fatigue(), 95.0);
    }

    #[test]
    fn test_levels() {
        assert_eq!(StatLevel::from_value(20.0), StatLevel::Critical);
        assert_eq!(StatLevel::from_value(20.5), StatLevel::Warning);
        assert_eq!(StatLevel::from_value(50.0), StatLevel::Warning);
        assert_eq!(StatLevel::from_value(51.0), StatLevel::Ok);
    }

    #[test]
    fn test_fatigue_not_critical() {
        let mut stats = Stats::default();
        stats.set(Stat::Fatigue, 0.0);
        assert!(!stats.is_critical());
        assert_eq!(stats.level(Stat::Fatigue), StatLevel::Critical);
    }

    #[test]
    fn test_nan_clamps_to_zero() {
        assert_eq!(clamp_stat(f32::NAN), 0.0);
    }
}
