//! Level generation
//!
//! A level is one set of three falling shapes (one of each kind) plus the
//! kind the player has to catch. The random source is passed in by the
//! caller so a seeded generator reproduces the same levels.

use crate::obstacle::{Obstacle, ShapeKind};
use rand::Rng;

/// The shapes of one level and which of them is the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub obstacles: Vec<Obstacle>,
    pub correct: ShapeKind,
}

pub struct LevelGenerator {
    screen_width: u32,
    obstacle_width: u32,
    obstacle_height: u32,
}

impl LevelGenerator {
    /// `screen_width` must exceed `obstacle_width`; the config checks this
    /// at startup.
    pub fn new(screen_width: u32, obstacle_width: u32, obstacle_height: u32) -> Self {
        LevelGenerator {
            screen_width,
            obstacle_width,
            obstacle_height,
        }
    }

    /// Spawn range for an obstacle's x: `[w/2, W - w/2)`.
    pub fn x_range(&self) -> std::ops::Range<i32> {
        let min_x = self.obstacle_width as i32 / 2;
        let max_x = self.screen_width as i32 - self.obstacle_width as i32 / 2;
        min_x..max_x
    }

    /// Draws a fresh level: Square, Circle and Triangle at the top of the
    /// screen with independent random x positions, and a uniformly chosen
    /// target among the three.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Level {
        let obstacles: Vec<Obstacle> = ShapeKind::ALL
            .iter()
            .map(|&kind| {
                let x = rng.random_range(self.x_range());
                Obstacle::new(x, 0, self.obstacle_width, self.obstacle_height, kind)
            })
            .collect();

        let correct = obstacles[rng.random_range(0..obstacles.len())].kind;

        Level { obstacles, correct }
    }
}
