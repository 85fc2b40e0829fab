//! Terminal presentation layer.
//!
//! Owns the terminal for the duration of the viewer: raw mode, alternate
//! screen, and mouse capture on the way in; everything restored on the way
//! out, with playback paused. The event loop is single-threaded — it races
//! the input channel against the pending transition timer.

mod app;
mod draw;
mod input;

pub use app::{App, Overlay};

use std::io;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::audio::{AudioController, NullPlayback, Playback};
use crate::config::{AudioConfig, Config};
use crate::error::Result;
use crate::milestone::MilestoneSet;
use crate::store::MomentStore;

/// Run the viewer until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be configured or drawn to.
pub async fn run(config: &Config, store: MomentStore, milestones: MilestoneSet) -> Result<()> {
    let audio = AudioController::start(build_playback(&config.audio), config.audio.autoplay);
    let mut app = App::new(store, milestones, audio);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app).await;

    // Restore the terminal before reporting any error.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    app.shutdown();

    result
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(32);
    input::spawn_reader(tx);

    while !app.should_quit() {
        terminal.draw(|frame| draw::render(frame, app))?;

        // The transition timer only exists while a move is in flight.
        let deadline = app.transition_deadline();
        let transition_elapsed = async {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            event = rx.recv() => match event {
                Some(event) => app.handle_event(&event),
                None => break,
            },
            () = transition_elapsed => app.finish_transition(),
        }
    }
    Ok(())
}

#[cfg(feature = "music")]
fn build_playback(audio: &AudioConfig) -> Box<dyn Playback> {
    use crate::audio::music::MusicPlayback;

    let Some(track) = &audio.track else {
        tracing::info!("no background track configured");
        return Box::new(NullPlayback);
    };
    match MusicPlayback::load(track, audio.volume) {
        Ok(playback) => Box::new(playback),
        Err(err) => {
            tracing::warn!(%err, "music disabled");
            Box::new(NullPlayback)
        }
    }
}

#[cfg(not(feature = "music"))]
fn build_playback(_audio: &AudioConfig) -> Box<dyn Playback> {
    tracing::info!("built without music support");
    Box::new(NullPlayback)
}
