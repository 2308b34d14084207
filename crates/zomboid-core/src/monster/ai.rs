//! Zombie pursuit AI
//!
//! Greedy: each axis steps toward the player independently. No pathfinding
//! and no zombie-zombie collision; zombies are scanned linearly.

use super::Zombie;
use crate::world::{Bounds, Position};

/// What a zombie did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZombieAction {
    /// Player out of range
    Idle,
    /// Closed in on the player
    Moved,
    /// Ended the step on the player's cell
    ReachedPlayer,
}

/// One coordinate step toward `to`, never overshooting it
fn approach(from: f32, to: f32, speed: f32) -> f32 {
    let delta = to - from;
    if delta.abs() <= speed {
        to
    } else {
        from + speed * delta.signum()
    }
}

/// Advance a single zombie toward the player
pub fn step_toward(zombie: &mut Zombie, player: Position, bounds: Bounds) -> ZombieAction {
    if zombie.distance_to(player) > zombie.detection_range as f32 {
        zombie.chasing = false;
        return ZombieAction::Idle;
    }

    zombie.chasing = true;
    let nx = approach(zombie.x, player.x as f32, zombie.speed);
    let ny = approach(zombie.y, player.y as f32, zombie.speed);
    let (nx, ny) = bounds.clamp_f32(nx, ny);
    zombie.x = nx;
    zombie.y = ny;

    if zombie.cell() == player {
        ZombieAction::ReachedPlayer
    } else {
        ZombieAction::Moved
    }
}

/// Advance every zombie. Returns how many ended on the player's cell.
pub fn move_zombies(zombies: &mut [Zombie], player: Position, bounds: Bounds) -> u32 {
    zombies
        .iter_mut()
        .map(|z| step_toward(z, player, bounds))
        .filter(|a| *a == ZombieAction::ReachedPlayer)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZombieConfig;
    use crate::monster::ZombieId;

    const BOUNDS: Bounds = Bounds::new(20, 20);

    fn zombie_at(x: i32, y: i32) -> Zombie {
        Zombie::new(ZombieId(1), Position::new(x, y), &ZombieConfig::default())
    }

    #[test]
    fn test_out_of_range_stays_idle() {
        let mut z = zombie_at(0, 0);
        z.chasing = true;
        let action = step_toward(&mut z, Position::new(10, 10), BOUNDS);
        assert_eq!(action, ZombieAction::Idle);
        assert!(!z.chasing);
        assert_eq!(z.cell(), Position::new(0, 0));
    }

    #[test]
    fn test_in_range_steps_on_both_axes() {
        let mut z = zombie_at(8, 9);
        let action = step_toward(&mut z, Position::new(10, 10), BOUNDS);
        assert_eq!(action, ZombieAction::Moved);
        assert!(z.chasing);
        assert_eq!(z.x, 8.5);
        assert_eq!(z.y, 9.5);
    }

    #[test]
    fn test_approach_from_above_and_below() {
        // Zombies close in from either side.
        let mut below = zombie_at(12, 10);
        let mut above = zombie_at(8, 10);
        let player = Position::new(10, 10);
        for _ in 0..4 {
            step_toward(&mut below, player, BOUNDS);
            step_toward(&mut above, player, BOUNDS);
        }
        assert_eq!(below.cell(), player);
        assert_eq!(above.cell(), player);
    }

    #[test]
    fn test_no_overshoot() {
        let mut z = zombie_at(10, 10);
        z.x = 10.25;
        z.speed = 1.0;
        step_toward(&mut z, Position::new(10, 10), BOUNDS);
        assert_eq!(z.x, 10.0);
    }

    #[test]
    fn test_detection_is_inclusive() {
        let mut z = zombie_at(7, 10);
        assert_eq!(
            step_toward(&mut z, Position::new(10, 10), BOUNDS),
            ZombieAction::Moved
        );
    }

    #[test]
    fn test_move_zombies_counts_contacts() {
        let player = Position::new(5, 5);
        let mut zombies = vec![zombie_at(5, 5), zombie_at(6, 5), zombie_at(0, 19)];
        zombies[1].x = 5.5;
        let hits = move_zombies(&mut zombies, player, BOUNDS);
        assert_eq!(hits, 2);
        assert!(!zombies[2].chasing);
    }
}
