use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use std::io::{self, Write};
use tracing::warn;

/// Mouse reporting for as long as the guard lives.
///
/// The input thread stays blocked in `event::read` after the UI loop exits,
/// so capture is switched off here rather than by that thread.
pub struct MouseCapture<W: Write> {
    out: W,
}

impl<W: Write> MouseCapture<W> {
    pub fn enable(mut out: W) -> io::Result<Self> {
        execute!(out, EnableMouseCapture)?;
        Ok(Self { out })
    }
}

impl<W: Write> Drop for MouseCapture<W> {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, DisableMouseCapture) {
            warn!(error = %err, "failed to disable mouse capture");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_is_released_when_dropped() {
        let mut out = Vec::new();
        {
            let _capture = MouseCapture::enable(&mut out).unwrap();
        }

        let written = String::from_utf8(out).unwrap();
        let enabled = written.find("\x1b[?1000h").expect("capture was enabled");
        let disabled = written.find("\x1b[?1000l").expect("capture was disabled");
        assert!(enabled < disabled);
    }

    #[test]
    fn capture_stays_on_while_held() {
        let mut out = Vec::new();
        let capture = MouseCapture::enable(&mut out).unwrap();
        std::mem::forget(capture);

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1000h"));
        assert!(!written.contains("\x1b[?1000l"));
    }
}
