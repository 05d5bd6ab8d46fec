use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("malformed hex color `{0}`, expected #rrggbb")]
    MalformedHex(String),

    #[error("unknown color `{0}`")]
    Unknown(String),
}

// Named colors resolve to RGB so they can be faded.
const NAMED: &[(&str, Color)] = &[
    ("blue", Color::Rgb(0, 122, 255)),
    ("red", Color::Rgb(255, 59, 48)),
    ("green", Color::Rgb(52, 199, 89)),
    ("orange", Color::Rgb(255, 149, 0)),
    ("yellow", Color::Rgb(255, 204, 0)),
    ("purple", Color::Rgb(175, 82, 222)),
    ("pink", Color::Rgb(255, 45, 85)),
    ("gray", Color::Rgb(142, 142, 147)),
    ("white", Color::Rgb(255, 255, 255)),
    ("black", Color::Rgb(0, 0, 0)),
];

const TRANSPARENT: &str = "transparent";

/// Parse `#rrggbb`, a named color, or `transparent` / `clear`.
///
/// Hex values and names not in the built-in table go through ratatui's own
/// parser (`lightcyan`, `darkgray`, indexed colors and so on).
pub fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let name = input.trim().to_ascii_lowercase();

    if name == TRANSPARENT || name == "clear" {
        return Ok(Color::Reset);
    }

    if let Some((_, color)) = NAMED.iter().find(|(named, _)| *named == name) {
        return Ok(*color);
    }

    Color::from_str(&name).map_err(|_| {
        if name.starts_with('#') {
            ColorParseError::MalformedHex(input.to_string())
        } else {
            ColorParseError::Unknown(input.to_string())
        }
    })
}

/// Inverse of [`parse_color`].
pub fn format_color(color: Color) -> String {
    if let Some((name, _)) = NAMED.iter().find(|(_, named)| *named == color) {
        return (*name).to_string();
    }
    match color {
        Color::Reset => TRANSPARENT.to_string(),
        Color::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
        other => other.to_string().to_ascii_lowercase(),
    }
}

/// Colors of the indicator. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StyleRepr", into = "StyleRepr")]
pub struct Style {
    pub foreground: Color,
    /// Fill of the disc behind the arc. `Color::Reset` leaves it unpainted.
    pub background: Color,
}

impl Style {
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
        }
    }

    pub fn is_background_transparent(&self) -> bool {
        self.background == Color::Reset
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Color::Rgb(0, 122, 255), Color::Reset)
    }
}

#[derive(Serialize, Deserialize)]
struct StyleRepr {
    #[serde(default = "default_foreground")]
    foreground: String,
    #[serde(default = "default_background")]
    background: String,
}

fn default_foreground() -> String {
    format_color(Style::default().foreground)
}

fn default_background() -> String {
    format_color(Style::default().background)
}

impl TryFrom<StyleRepr> for Style {
    type Error = ColorParseError;

    fn try_from(repr: StyleRepr) -> Result<Self, Self::Error> {
        Ok(Style::new(
            parse_color(&repr.foreground)?,
            parse_color(&repr.background)?,
        ))
    }
}

impl From<Style> for StyleRepr {
    fn from(style: Style) -> Self {
        StyleRepr {
            foreground: format_color(style.foreground),
            background: format_color(style.background),
        }
    }
}
