//! Terminal input source.
//!
//! A dedicated thread blocks on crossterm and forwards every event over a
//! channel, so the event loop can race input against the transition timer.

use tokio::sync::mpsc::Sender;

use crossterm::event::Event;

/// Spawn the reader thread feeding `tx`.
///
/// The thread exits when the receiving side is dropped or the terminal
/// event stream fails.
pub fn spawn_reader(tx: Sender<Event>) {
    let spawned = std::thread::Builder::new()
        .name("souvenir-input".to_string())
        .spawn(move || loop {
            match crossterm::event::read() {
                Ok(event) => {
                    if tx.blocking_send(event).is_err() {
                        // UI is gone; nothing left to notify.
                        break;
                    }
                }
                Err(err) => {
                    tracing::error!(%err, "terminal input source failed");
                    break;
                }
            }
        });

    if let Err(err) = spawned {
        tracing::error!(%err, "could not spawn the input reader thread");
    }
}
