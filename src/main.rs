use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::path::PathBuf;
use std::time::Instant;

mod collision;
mod config;
mod game;
mod input_system;
mod level;
mod obstacle;
mod player;
mod render;
mod text;

use config::GameConfig;
use game::{FixedTicker, GameState, TickOutcome};
use input_system::{GameAction, InputSystem};
use render::render_frame;

const WINDOW_TITLE: &str = "Learning Game";

/// Picks the RNG for this run and logs the seed so a run can be replayed
/// by putting it in the config file.
fn create_rng(config: &GameConfig) -> Pcg32 {
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Game seed: {}", seed);
    Pcg32::seed_from_u64(seed)
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::resolve(std::env::args().nth(1).map(PathBuf::from))?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    // SDL2 windows are not resizable unless asked for
    let window = video_subsystem
        .window(WINDOW_TITLE, config.screen_width, config.screen_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    log::info!(
        "Window: {}x{}, tick every {} ms",
        config.screen_width,
        config.screen_height,
        config.tick_ms
    );
    log::info!("Controls: Left/Right arrows move, catch the shape named in the corner");

    let mut state = GameState::new(&config, create_rng(&config));
    let mut input = InputSystem::new();
    let mut ticker = FixedTicker::new(config.tick_period(), Instant::now());

    'running: loop {
        input.update_context(state.phase());
        for action in input.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                other => state.handle_action(&other),
            }
        }

        for _ in 0..ticker.ticks_due(Instant::now()) {
            if let TickOutcome::GameOver { level } = state.tick() {
                log::info!("Reached level {}. Close the window to exit.", level);
            }
        }

        render_frame(&mut canvas, &state, config.screen_width, config.screen_height)?;
        canvas.present();

        std::thread::sleep(ticker.time_until_next(Instant::now()));
    }

    log::info!("Window closed, exiting");
    Ok(())
}
