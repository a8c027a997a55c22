use crate::collision::Collidable;
use sdl2::rect::Rect;

/// Horizontal distance covered by one key press.
pub const PLAYER_STEP: i32 = 10;

/// Gap between the bottom of the player block and the bottom of the screen.
pub const PLAYER_BOTTOM_MARGIN: i32 = 20;

/// The block the player steers along the bottom of the screen.
///
/// The player only ever moves horizontally, one fixed step per key press,
/// and is kept fully on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Screen width the player is clamped against.
    bound_width: u32,
}

impl Player {
    pub fn new(x: i32, y: i32, width: u32, height: u32, bound_width: u32) -> Self {
        Player {
            x,
            y,
            width,
            height,
            bound_width,
        }
    }

    /// Creates a player centered horizontally near the bottom of the screen.
    pub fn spawn(screen_width: u32, screen_height: u32, width: u32, height: u32) -> Self {
        let x = screen_width as i32 / 2 - width as i32 / 2;
        let y = screen_height as i32 - height as i32 - PLAYER_BOTTOM_MARGIN;
        Player::new(x, y, width, height, screen_width)
    }

    /// Largest x that keeps the right edge on screen.
    pub fn max_x(&self) -> i32 {
        self.bound_width as i32 - self.width as i32
    }

    pub fn move_left(&mut self) {
        self.x = (self.x - PLAYER_STEP).max(0);
    }

    pub fn move_right(&mut self) {
        self.x = (self.x + PLAYER_STEP).min(self.max_x());
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
