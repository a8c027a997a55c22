//! Game state and the per-tick update
//!
//! `GameState` is the single owner of everything that changes while playing.
//! It is mutated in exactly two places: `tick` (called by the fixed-period
//! clock) and `handle_action` (called for each key press). Both run on the
//! SDL2 event thread, so they interleave but never overlap.

use crate::collision::{collides, first_collision};
use crate::config::GameConfig;
use crate::input_system::GameAction;
use crate::level::{Level, LevelGenerator};
use crate::obstacle::{Obstacle, ShapeKind};
use crate::player::Player;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{GamePhase, TickOutcome};

/// Fall speed of the first level, in pixels per tick.
pub const INITIAL_OBSTACLE_SPEED: i32 = 3;

/// Speed added every time a level is cleared.
pub const SPEED_INCREMENT: i32 = 1;

pub struct GameState {
    pub player: Player,
    /// Shapes still on screen, in generation order.
    pub obstacles: Vec<Obstacle>,
    /// Kind of the shape to catch. Each level has exactly one shape of each
    /// kind, so this names a single obstacle of the current level. It stays
    /// selected after that obstacle falls off-screen.
    pub correct: ShapeKind,
    pub level: u32,
    pub obstacle_speed: i32,
    phase: GamePhase,
    screen_height: u32,
    generator: LevelGenerator,
    rng: Pcg32,
}

impl GameState {
    /// Creates a running game at level 1 with the first level already
    /// generated.
    pub fn new(config: &GameConfig, rng: Pcg32) -> Self {
        let generator = LevelGenerator::new(
            config.screen_width,
            config.obstacle_width,
            config.obstacle_height,
        );
        let player = Player::spawn(
            config.screen_width,
            config.screen_height,
            config.player_width,
            config.player_height,
        );

        let mut state = GameState {
            player,
            obstacles: Vec::new(),
            correct: ShapeKind::Square,
            level: 1,
            obstacle_speed: INITIAL_OBSTACLE_SPEED,
            phase: GamePhase::Running,
            screen_height: config.screen_height,
            generator,
            rng,
        };
        state.start_level();
        state
    }

    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        GameState::new(config, Pcg32::seed_from_u64(seed))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// The target obstacle, if it is still on screen.
    pub fn correct_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.kind == self.correct)
    }

    /// Replaces all obstacles with a freshly generated level.
    fn start_level(&mut self) {
        let Level { obstacles, correct } = self.generator.generate(&mut self.rng);
        self.obstacles = obstacles;
        self.correct = correct;
        log::debug!(
            "Level {} generated: target {} at x={:?}",
            self.level,
            self.correct.name(),
            self.correct_obstacle().map(|o| o.x)
        );
    }

    /// Runs one physics/collision step.
    ///
    /// Order matters: shapes fall, shapes past the bottom are dropped, then
    /// the target is checked before any other shape. Catching the target in
    /// the same tick as touching a wrong shape therefore counts as a catch.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Frozen;
        }

        let speed = self.obstacle_speed;
        for obstacle in &mut self.obstacles {
            obstacle.fall(speed);
        }

        let screen_height = self.screen_height;
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_below(screen_height));
        if self.obstacles.len() < before {
            log::debug!("{} obstacle(s) left the screen", before - self.obstacles.len());
        }

        let caught = self
            .correct_obstacle()
            .is_some_and(|target| collides(&self.player, target));
        if caught {
            self.level += 1;
            self.obstacle_speed += SPEED_INCREMENT;
            log::info!(
                "Caught the {}! Level {} (speed {})",
                self.correct.name(),
                self.level,
                self.obstacle_speed
            );
            self.start_level();
            return TickOutcome::LevelUp { level: self.level };
        }

        if let Some(index) = first_collision(&self.player, &self.obstacles) {
            let hit = self.obstacles[index].kind;
            if hit != self.correct {
                self.phase = GamePhase::GameOver;
                log::info!(
                    "Game over on level {}: hit the {} instead of the {}",
                    self.level,
                    hit.name(),
                    self.correct.name()
                );
                return TickOutcome::GameOver { level: self.level };
            }
        }

        TickOutcome::Advanced
    }

    /// Applies a player action. Movement is ignored once the game is over.
    pub fn handle_action(&mut self, action: &GameAction) {
        if self.is_game_over() {
            return;
        }

        match action {
            GameAction::MoveLeft => self.player.move_left(),
            GameAction::MoveRight => self.player.move_right(),
            GameAction::Quit => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game(seed: u64) -> GameState {
        GameState::with_seed(&GameConfig::default(), seed)
    }

    /// Puts the target directly above the player and parks the other two
    /// shapes in the far top-left corner.
    fn place_target_above_player(state: &mut GameState, target_y: i32) {
        let correct = state.correct;
        let player_x = state.player.x;
        for obstacle in &mut state.obstacles {
            if obstacle.kind == correct {
                obstacle.x = player_x + 10;
                obstacle.y = target_y;
            } else {
                obstacle.x = 0;
                obstacle.y = 0;
            }
        }
    }

    fn wrong_kind(state: &GameState) -> ShapeKind {
        ShapeKind::ALL
            .into_iter()
            .find(|&k| k != state.correct)
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = new_game(1);

        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.level, 1);
        assert_eq!(state.obstacle_speed, 3);
        assert_eq!((state.player.x, state.player.y), (375, 530));
        assert_eq!(state.obstacles.len(), 3);
        assert!(state.correct_obstacle().is_some());
    }

    #[test]
    fn test_first_tick_moves_all_obstacles() {
        let mut state = new_game(7);
        // Keep every shape clear of the player's column
        for (i, obstacle) in state.obstacles.iter_mut().enumerate() {
            obstacle.x = 20 + i as i32 * 100;
        }
        let before: Vec<i32> = state.obstacles.iter().map(|o| o.y).collect();

        let outcome = state.tick();

        assert_eq!(outcome, TickOutcome::Advanced);
        let after: Vec<i32> = state.obstacles.iter().map(|o| o.y).collect();
        assert_eq!(before, vec![0, 0, 0]);
        assert_eq!(after, vec![3, 3, 3]);
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_catching_target_starts_next_level() {
        let mut state = new_game(11);
        place_target_above_player(&mut state, 490);

        let mut outcome = TickOutcome::Advanced;
        for _ in 0..50 {
            outcome = state.tick();
            if outcome != TickOutcome::Advanced {
                break;
            }
        }

        assert_eq!(outcome, TickOutcome::LevelUp { level: 2 });
        assert_eq!(state.level, 2);
        assert_eq!(state.obstacle_speed, 4);
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.obstacles.len(), 3);
        assert!(state.obstacles.iter().all(|o| o.y == 0));
        assert_eq!(
            state.obstacles.iter().filter(|o| o.kind == state.correct).count(),
            1
        );
    }

    #[test]
    fn test_level_up_happens_on_first_overlapping_tick() {
        let mut state = new_game(12);
        // Bottom edge at 527: one tick of speed 3 brings it to 530 (touching),
        // the second to 533 (overlapping)
        place_target_above_player(&mut state, 507);

        assert_eq!(state.tick(), TickOutcome::Advanced);
        assert_eq!(state.tick(), TickOutcome::LevelUp { level: 2 });
    }

    #[test]
    fn test_hitting_wrong_shape_ends_game() {
        let mut state = new_game(21);
        let wrong = wrong_kind(&state);
        let correct = state.correct;
        let player_x = state.player.x;
        for obstacle in &mut state.obstacles {
            if obstacle.kind == wrong {
                obstacle.x = player_x + 10;
                obstacle.y = 505;
            } else if obstacle.kind == correct {
                obstacle.x = 700;
                obstacle.y = 100;
            } else {
                obstacle.x = 0;
                obstacle.y = 0;
            }
        }

        assert_eq!(state.tick(), TickOutcome::Advanced); // 508, still just above the player
        assert_eq!(state.tick(), TickOutcome::GameOver { level: 1 });
        assert!(state.is_game_over());
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = new_game(22);
        let wrong = wrong_kind(&state);
        let player_x = state.player.x;
        for obstacle in &mut state.obstacles {
            if obstacle.kind == wrong {
                obstacle.x = player_x;
                obstacle.y = 520;
            }
        }
        assert_eq!(state.tick(), TickOutcome::GameOver { level: 1 });

        let player = state.player.clone();
        let obstacles = state.obstacles.clone();
        let level = state.level;

        for _ in 0..20 {
            assert_eq!(state.tick(), TickOutcome::Frozen);
            state.handle_action(&GameAction::MoveLeft);
            state.handle_action(&GameAction::MoveRight);
        }

        assert_eq!(state.player, player);
        assert_eq!(state.obstacles, obstacles);
        assert_eq!(state.level, level);
        assert_eq!(state.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_simultaneous_hit_counts_as_catch() {
        let mut state = new_game(31);
        let player_x = state.player.x;
        for obstacle in &mut state.obstacles {
            obstacle.x = player_x + 15;
            obstacle.y = 520;
        }

        assert_eq!(state.tick(), TickOutcome::LevelUp { level: 2 });
        assert_eq!(state.phase(), GamePhase::Running);
    }

    #[test]
    fn test_obstacle_removed_on_crossing_tick() {
        let mut state = new_game(41);
        for obstacle in &mut state.obstacles {
            obstacle.x = 0;
        }
        state.obstacles[0].y = 598; // 601 after this tick
        state.obstacles[1].y = 597; // exactly 600, still on screen
        let removed_kind = state.obstacles[0].kind;

        state.tick();

        assert_eq!(state.obstacles.len(), 2);
        assert!(state.obstacles.iter().all(|o| o.kind != removed_kind));
        assert_eq!(state.obstacles[0].y, 600);
    }

    #[test]
    fn test_adjacent_removals_are_not_skipped() {
        let mut state = new_game(42);
        for obstacle in &mut state.obstacles {
            obstacle.x = 0;
            obstacle.y = 599;
        }

        state.tick();

        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_target_lost_off_screen_keeps_selection() {
        let mut state = new_game(51);
        let correct = state.correct;
        for obstacle in &mut state.obstacles {
            obstacle.x = 0;
            if obstacle.kind == correct {
                obstacle.y = 599;
            }
        }

        assert_eq!(state.tick(), TickOutcome::Advanced);
        assert!(state.correct_obstacle().is_none());
        assert_eq!(state.correct, correct);

        // Nothing can be caught any more, but the game keeps running
        for _ in 0..300 {
            assert_eq!(state.tick(), TickOutcome::Advanced);
        }
        assert_eq!(state.level, 1);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_repeated_left_clamps_at_zero() {
        let mut state = new_game(61);
        state.player.x = 5;

        for _ in 0..5 {
            state.handle_action(&GameAction::MoveLeft);
        }

        assert_eq!(state.player.x, 0);
    }

    #[test]
    fn test_actions_only_move_player() {
        let mut state = new_game(62);
        let obstacles = state.obstacles.clone();

        state.handle_action(&GameAction::MoveRight);
        state.handle_action(&GameAction::Quit);

        assert_eq!(state.player.x, 385);
        assert_eq!(state.player.y, 530);
        assert_eq!(state.obstacles, obstacles);
        assert_eq!(state.phase(), GamePhase::Running);
    }

    #[test]
    fn test_speed_grows_one_per_level() {
        let mut state = new_game(71);

        for expected_level in 2..6 {
            place_target_above_player(&mut state, 520);
            assert_eq!(state.tick(), TickOutcome::LevelUp { level: expected_level });
            assert_eq!(state.obstacle_speed, INITIAL_OBSTACLE_SPEED + expected_level as i32 - 1);
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = new_game(1234);
        let b = new_game(1234);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.correct, b.correct);
    }
}
