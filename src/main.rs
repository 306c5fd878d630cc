//! Skillforge - Demo Driver
//!
//! Runs a single local player through the skill bars and talent
//! progression in the terminal.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use skillforge::audio::{AudioFeedback, AudioManager};
use skillforge::data::{load_talent_data_or_default, TALENT_DATA_PATH};
use skillforge::game::TickClock;
use skillforge::progression::{AdvancementLedger, SkillPoints, Talents};
use skillforge::save::{JsonPersistence, ProgressionStore};
use skillforge::ui::App;

/// Target frames per second for the render loop
const TARGET_FPS: u64 = 60;
const FRAME_TIME: Duration = Duration::from_millis(1000 / TARGET_FPS);

/// The local player
const LOCAL_PLAYER: u64 = 1;

fn main() -> Result<()> {
    // Log to a file so the terminal UI stays clean
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("skillforge.log")
        .or_else(|_| OpenOptions::new().write(true).open("/dev/null"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("Starting Skillforge v{}", env!("CARGO_PKG_VERSION"));

    let data = load_talent_data_or_default(Path::new(TALENT_DATA_PATH));
    let store = Arc::new(ProgressionStore::new(JsonPersistence::in_data_dir()));
    let feedback = Arc::new(AudioFeedback::new(AudioManager::new()));
    let talents = Talents::new(
        data,
        store.clone(),
        feedback.clone(),
        Arc::new(AdvancementLedger::new()),
        StdRng::from_entropy(),
    );
    let skill_points = SkillPoints::new(store, feedback.clone());
    let mut app = App::new(LOCAL_PLAYER, talents, skill_points, feedback)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.shutdown();

    if let Err(ref e) = result {
        log::error!("Exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Skillforge shut down cleanly");
    result
}

/// Input, fixed-rate ticks, render
fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut clock = TickClock::default();
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let delta = frame_start.duration_since(last_frame);
        last_frame = frame_start;

        if event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.handle_input(key) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => log::warn!("Input handling error: {}", e),
                    }
                }
            }
        }

        for _ in 0..clock.update(delta) {
            app.tick();
        }

        terminal.draw(|frame| app.render(frame))?;

        let frame_time = frame_start.elapsed();
        if frame_time < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - frame_time);
        }
    }

    Ok(())
}
