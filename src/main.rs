//! Rally Pong entry point
//!
//! There is no windowing stack wired up here: the binary runs a scripted
//! headless match to exercise the whole loop and logs the outcome. A real
//! frontend implements the `platform` traits and reuses `app::App`.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rally_pong::app::App;
use rally_pong::audio::{AudioSink, LogAudio, NullAudio};
use rally_pong::platform::Key;
use rally_pong::platform::headless::{HeadlessRenderer, ScriptedInput};
use rally_pong::settings::{SETTINGS_FILE, Settings};

fn main() {
    env_logger::init();
    log::info!("Rally Pong (headless demo) starting...");

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_millis() as u64
    });
    log::info!("Match initialized with seed: {}", seed);

    let audio: Box<dyn AudioSink> = if settings.muted {
        Box::new(NullAudio)
    } else {
        Box::new(LogAudio::new(settings.effective_volume()))
    };

    // Hold W for the whole match, try best-of-3 once the banner is up, quit
    // when the script runs out.
    let input = ScriptedInput::new(vec![Key::W])
        .idle(1200)
        .then_press(Key::Three)
        .idle(600);

    let mut app = App::new(seed, HeadlessRenderer::default(), input, audio);
    // Step directly instead of App::run - a demo has no frame pacing to honor
    while app.step() {}

    let state = app.state();
    log::info!(
        "Demo over after {} ticks: player {} - ai {} ({:?})",
        state.time_ticks,
        state.score.player,
        state.score.ai,
        state.phase
    );

    settings.save(Path::new(SETTINGS_FILE));
}
