use crate::collision::Collidable;
use sdl2::rect::Rect;

/// The three shapes that fall each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Circle,
    Triangle,
}

impl ShapeKind {
    /// Every kind, in generation order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Square, ShapeKind::Circle, ShapeKind::Triangle];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Square => "Square",
            ShapeKind::Circle => "Circle",
            ShapeKind::Triangle => "Triangle",
        }
    }
}

/// A falling shape. `(x, y)` is the top-left corner of its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub kind: ShapeKind,
}

impl Obstacle {
    pub fn new(x: i32, y: i32, width: u32, height: u32, kind: ShapeKind) -> Self {
        Obstacle {
            x,
            y,
            width,
            height,
            kind,
        }
    }

    pub fn fall(&mut self, speed: i32) {
        self.y += speed;
    }

    /// True once the top edge has moved past the bottom of the screen.
    pub fn is_below(&self, screen_height: u32) -> bool {
        self.y > screen_height as i32
    }
}

impl Collidable for Obstacle {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
