/// Frame rendering for the Learning Game
///
/// Draws one frame from the current `GameState`: background, player,
/// falling shapes, HUD text and the game over message.
///
/// SDL2's canvas only fills rectangles, so discs and triangles are
/// rasterised into horizontal one-pixel-high spans first. The span
/// functions are pure and are what the tests check.
use crate::game::GameState;
use crate::obstacle::{Obstacle, ShapeKind};
use crate::text::{draw_text, draw_text_centered, text_height};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const BACKGROUND_COLOR: Color = Color::RGB(0, 0, 0);
const PLAYER_COLOR: Color = Color::RGB(0, 0, 255);
const SQUARE_COLOR: Color = Color::RGB(255, 0, 0);
const CIRCLE_COLOR: Color = Color::RGB(0, 255, 0);
const TRIANGLE_COLOR: Color = Color::RGB(0, 0, 255);
const TEXT_COLOR: Color = Color::RGB(255, 255, 255);

const HUD_SCALE: u32 = 2;
const GAME_OVER_SCALE: u32 = 3;
const HUD_MARGIN: i32 = 10;

/// One horizontal run of pixels: `width` pixels starting at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub x: i32,
    pub y: i32,
    pub width: u32,
}

/// Spans filling the ellipse inscribed in `bounds` (a disc for square bounds).
pub fn ellipse_spans(bounds: Rect) -> Vec<Span> {
    let rx = bounds.width() as f32 / 2.0;
    let ry = bounds.height() as f32 / 2.0;
    let center_x = bounds.x() as f32 + rx;

    (0..bounds.height() as i32)
        .filter_map(|row| {
            // Sample at the middle of the pixel row
            let dy = (row as f32 + 0.5 - ry) / ry;
            let half = rx * (1.0 - dy * dy).max(0.0).sqrt();
            let start = (center_x - half).round() as i32;
            let end = (center_x + half).round() as i32;
            (end > start).then(|| Span {
                x: start,
                y: bounds.y() + row,
                width: (end - start) as u32,
            })
        })
        .collect()
}

/// Spans filling an upward triangle: apex at the top center of `bounds`,
/// base along the bottom edge.
pub fn triangle_spans(bounds: Rect) -> Vec<Span> {
    let height = bounds.height() as f32;
    let half_width = bounds.width() as f32 / 2.0;
    let center_x = bounds.x() as f32 + half_width;

    (0..bounds.height() as i32)
        .filter_map(|row| {
            let t = (row as f32 + 0.5) / height;
            let half = half_width * t;
            let start = (center_x - half).round() as i32;
            let end = (center_x + half).round() as i32;
            (end > start).then(|| Span {
                x: start,
                y: bounds.y() + row,
                width: (end - start) as u32,
            })
        })
        .collect()
}

fn fill_spans(canvas: &mut Canvas<Window>, spans: &[Span]) -> Result<(), String> {
    for span in spans {
        canvas.fill_rect(Rect::new(span.x, span.y, span.width, 1))?;
    }
    Ok(())
}

pub fn shape_color(kind: ShapeKind) -> Color {
    match kind {
        ShapeKind::Square => SQUARE_COLOR,
        ShapeKind::Circle => CIRCLE_COLOR,
        ShapeKind::Triangle => TRIANGLE_COLOR,
    }
}

fn render_obstacle(canvas: &mut Canvas<Window>, obstacle: &Obstacle) -> Result<(), String> {
    let bounds = Rect::new(obstacle.x, obstacle.y, obstacle.width, obstacle.height);
    canvas.set_draw_color(shape_color(obstacle.kind));

    match obstacle.kind {
        ShapeKind::Square => canvas.fill_rect(bounds),
        ShapeKind::Circle => fill_spans(canvas, &ellipse_spans(bounds)),
        ShapeKind::Triangle => fill_spans(canvas, &triangle_spans(bounds)),
    }
}

/// HUD line naming the shape to catch.
pub fn target_hint(kind: ShapeKind) -> String {
    format!("Correct Obstacle: {}", kind.name())
}

pub fn level_label(level: u32) -> String {
    format!("Level: {}", level)
}

/// Draws a full frame. Does not call `present`.
pub fn render_frame(
    canvas: &mut Canvas<Window>,
    state: &GameState,
    screen_width: u32,
    screen_height: u32,
) -> Result<(), String> {
    canvas.set_draw_color(BACKGROUND_COLOR);
    canvas.clear();

    canvas.set_draw_color(PLAYER_COLOR);
    canvas.fill_rect(Rect::new(
        state.player.x,
        state.player.y,
        state.player.width,
        state.player.height,
    ))?;

    for obstacle in &state.obstacles {
        render_obstacle(canvas, obstacle)?;
    }

    let line_height = text_height(HUD_SCALE) as i32 + 6;
    draw_text(
        canvas,
        &level_label(state.level),
        HUD_MARGIN,
        HUD_MARGIN,
        TEXT_COLOR,
        HUD_SCALE,
    )?;
    draw_text(
        canvas,
        &target_hint(state.correct),
        HUD_MARGIN,
        HUD_MARGIN + line_height,
        TEXT_COLOR,
        HUD_SCALE,
    )?;

    if state.is_game_over() {
        let y = screen_height as i32 / 2 - text_height(GAME_OVER_SCALE) as i32 / 2;
        draw_text_centered(
            canvas,
            "Game Over!",
            screen_width as i32 / 2,
            y,
            TEXT_COLOR,
            GAME_OVER_SCALE,
        )?;
    }

    Ok(())
}
