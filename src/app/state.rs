use std::time::Instant;

use arcspin::indicator::{Binding, IndicatorEvent, LoadingIndicator};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::info;

use crate::config::Config;

#[derive(Default, Clone)]
pub struct LayoutRegions {
    pub button: Option<Rect>,
}

pub struct App {
    /// Owned here, only read by the indicator.
    pub continue_animation: Binding<bool>,
    pub indicator: LoadingIndicator,

    pub now: Instant,
    pub cycles_completed: u64,
    pub should_quit: bool,

    pub layout_regions: LayoutRegions,
}

impl App {
    pub fn new(config: &Config, now: Instant) -> Self {
        let continue_animation = Binding::new(false);
        let indicator = LoadingIndicator::with_timing(
            config.indicator,
            continue_animation.clone(),
            config.timing(),
            now,
        );

        Self {
            continue_animation,
            indicator,
            now,
            cycles_completed: 0,
            should_quit: false,
            layout_regions: LayoutRegions::default(),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.now = now;

        for event in self.indicator.tick(now) {
            match event {
                IndicatorEvent::CycleCompleted(_) => self.cycles_completed += 1,
                IndicatorEvent::Halted => {
                    info!(
                        cycles = self.cycles_completed,
                        turns = self.indicator.turns(),
                        "animation halted"
                    );
                }
                _ => {}
            }
        }
    }

    pub fn toggle_animation(&mut self) {
        let running = self.continue_animation.toggle();
        info!(continue_animation = running, "toggled animation");
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_animation(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let position = Position::new(mouse.column, mouse.row);
        if let Some(button) = self.layout_regions.button {
            if button.contains(position) {
                self.toggle_animation();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    fn app() -> App {
        App::new(&Config::default(), Instant::now())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn starts_stopped_and_hidden() {
        let app = app();
        assert!(!app.continue_animation.get());
        assert_eq!(app.indicator.opacity(app.now), 0.0);
    }

    #[test]
    fn space_and_enter_toggle() {
        let mut app = app();
        app.handle_input(key(KeyCode::Char(' ')));
        assert!(app.continue_animation.get());
        app.handle_input(key(KeyCode::Enter));
        assert!(!app.continue_animation.get());
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        app.handle_input(key(KeyCode::Char('x')));
        assert!(!app.should_quit);
        app.handle_input(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn clicking_the_button_toggles() {
        let mut app = app();
        app.layout_regions.button = Some(Rect::new(10, 10, 20, 3));

        app.handle_mouse(click(2, 2));
        assert!(!app.continue_animation.get());

        app.handle_mouse(click(15, 11));
        assert!(app.continue_animation.get());

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..click(15, 11)
        };
        app.handle_mouse(release);
        assert!(app.continue_animation.get());
    }

    #[test]
    fn ticking_counts_completed_cycles() {
        let mut app = app();
        let start = app.now;
        app.toggle_animation();
        app.tick(start);

        let cycle = app.indicator.timing().cycle;
        app.tick(start + cycle);
        app.tick(start + cycle * 2);
        assert_eq!(app.cycles_completed, 2);

        app.toggle_animation();
        app.tick(start + cycle * 2 + Duration::from_millis(10));
        app.tick(start + cycle * 10);
        assert_eq!(app.cycles_completed, 3);
        assert_eq!(app.indicator.turns(), 3);
    }
}
