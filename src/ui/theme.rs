use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    TokyoNight,
    #[default]
    CatppuccinMocha,
}

impl ThemeName {
    pub const fn theme(self) -> Theme {
        match self {
            ThemeName::TokyoNight => Theme::tokyo_night(),
            ThemeName::CatppuccinMocha => Theme::catppuccin_mocha(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub button_bg: Color,

    // Accents
    pub accent: Color,
    pub running: Color,
    pub stopped: Color,
}

impl Theme {
    pub const fn tokyo_night() -> Self {
        Self {
            bg: Color::Rgb(26, 27, 38),     // #1a1b26
            fg: Color::Rgb(192, 202, 245),  // #c0caf5
            fg_dim: Color::Rgb(86, 95, 137), // #565f89

            border: Color::Rgb(61, 89, 161),           // #3d59a1
            border_focused: Color::Rgb(187, 154, 247), // #bb9af7
            button_bg: Color::Rgb(41, 46, 66),         // #292e42

            accent: Color::Rgb(125, 207, 255),  // #7dcfff
            running: Color::Rgb(158, 206, 106), // #9ece6a
            stopped: Color::Rgb(224, 175, 104), // #e0af68
        }
    }

    pub const fn catppuccin_mocha() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 46),        // #1e1e2e
            fg: Color::Rgb(205, 214, 244),     // #cdd6f4
            fg_dim: Color::Rgb(108, 112, 134), // #6c7086

            border: Color::Rgb(137, 180, 250),         // #89b4fa
            border_focused: Color::Rgb(203, 166, 247), // #cba6f7
            button_bg: Color::Rgb(69, 71, 90),         // #45475a

            accent: Color::Rgb(148, 226, 213),  // #94e2d5
            running: Color::Rgb(166, 227, 161), // #a6e3a1
            stopped: Color::Rgb(249, 226, 175), // #f9e2af
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::new().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    pub fn button_style(&self) -> Style {
        Style::new()
            .bg(self.button_bg)
            .fg(self.fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn label_style(&self) -> Style {
        Style::new().fg(self.fg_dim)
    }

    pub fn status_color(&self, running: bool) -> Color {
        if running { self.running } else { self.stopped }
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the palette. Only the first call has an effect.
pub fn init_theme(name: ThemeName) {
    let _ = THEME.set(name.theme());
}

pub fn get_theme() -> &'static Theme {
    THEME.get_or_init(|| ThemeName::default().theme())
}
