/// Collision detection for the Learning Game
///
/// Everything in the playfield is an axis-aligned rectangle as far as
/// collisions are concerned: the player block and every falling shape
/// (circles and triangles included) collide using their bounding boxes.
///
/// # Architecture
///
/// - `Collidable` trait: implemented by the player and by obstacles
/// - `aabb_intersect`: pure rectangle intersection test
/// - `first_collision`: first entity in a collection that overlaps another
use sdl2::rect::Rect;

/// Trait for anything that takes part in collision checks.
///
/// # Example
///
/// ```rust
/// impl Collidable for Obstacle {
///     fn get_bounds(&self) -> Rect {
///         Rect::new(self.x, self.y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box in screen coordinates.
    fn get_bounds(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes.
/// Rectangles that only share an edge do NOT intersect, so a shape sitting
/// exactly on top of the player is not a hit until it moves one more pixel.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Returns true if the two entities' bounding boxes overlap.
pub fn collides(a: &impl Collidable, b: &impl Collidable) -> bool {
    aabb_intersect(&a.get_bounds(), &b.get_bounds())
}

/// Finds the first entity in `entities` (in collection order) that overlaps
/// `entity`.
///
/// # Returns
///
/// The index into `entities` of the first hit, or `None` if nothing overlaps.
///
/// # Example
///
/// ```rust
/// if let Some(index) = first_collision(&player, &obstacles) {
///     println!("Player hit obstacle {}", index);
/// }
/// ```
pub fn first_collision<T: Collidable>(entity: &impl Collidable, entities: &[T]) -> Option<usize> {
    let entity_bounds = entity.get_bounds();

    entities
        .iter()
        .position(|other| aabb_intersect(&entity_bounds, &other.get_bounds()))
}
