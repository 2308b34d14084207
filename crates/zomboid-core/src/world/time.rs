//! Day counter and time of day

use core::fmt;

use crate::consts::{HOURS_PER_DAY, NIGHT_END, NIGHT_START};

/// In-game clock: day number (from 1) and hour in [0, 24)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameClock {
    pub day: u32,
    pub hour: f32,
}

impl GameClock {
    pub fn new(start_hour: f32) -> Self {
        Self {
            day: 1,
            hour: start_hour.rem_euclid(HOURS_PER_DAY),
        }
    }

    /// Move the clock forward. Returns true when a new day began.
    pub fn advance(&mut self, hours: f32) -> bool {
        self.hour += hours.max(0.0);
        let mut new_day = false;
        while self.hour >= HOURS_PER_DAY {
            self.hour -= HOURS_PER_DAY;
            self.day += 1;
            new_day = true;
        }
        new_day
    }

    pub fn is_night(&self) -> bool {
        self.hour >= NIGHT_START || self.hour < NIGHT_END
    }

    /// Whole hour for display
    pub fn whole_hour(&self) -> u32 {
        self.hour.floor() as u32
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(8.0)
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {} - {:02}:00", self.day, self.whole_hour())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_day_one_morning() {
        let clock = GameClock::default();
        assert_eq!(clock.day, 1);
        assert_eq!(clock.whole_hour(), 8);
        assert!(!clock.is_night());
        assert_eq!(clock.to_string(), "Day 1 - 08:00");
    }

    #[test]
    fn test_wraps_midnight() {
        let mut clock = GameClock::new(23.5);
        assert!(clock.is_night());
        assert!(clock.advance(1.0));
        assert_eq!(clock.day, 2);
        assert!((clock.hour - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_night_boundaries() {
        assert!(GameClock::new(20.0).is_night());
        assert!(GameClock::new(5.9).is_night());
        assert!(!GameClock::new(6.0).is_night());
        assert!(!GameClock::new(19.9).is_night());
    }

    #[test]
    fn test_negative_advance_ignored() {
        let mut clock = GameClock::new(10.0);
        assert!(!clock.advance(-5.0));
        assert_eq!(clock.whole_hour(), 10);
    }
}
