use crate::events::types::AppEvent;
use crossterm::event::{self, Event, KeyEventKind};
use std::{sync::mpsc, thread::JoinHandle};
use tracing::{debug, warn};

/// Forward terminal events to the UI loop until the receiver goes away.
///
/// Mouse capture is owned by the caller, see [`super::capture::MouseCapture`].
pub fn spawn(event_tx: mpsc::Sender<AppEvent>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                    event_tx.send(AppEvent::Input(key_event))
                }
                Ok(Event::Mouse(mouse_event)) => event_tx.send(AppEvent::Mouse(mouse_event)),
                Ok(Event::Resize(width, height)) => event_tx.send(AppEvent::Resize(width, height)),
                Ok(_) => Ok(()),
                Err(err) => {
                    warn!(error = %err, "failed to read terminal event");
                    break;
                }
            };

            if forwarded.is_err() {
                debug!("event receiver dropped, stopping input thread");
                break;
            }
        }
    })
}
