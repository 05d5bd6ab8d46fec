use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Points},
    },
};

use super::loading::Snapshot;
use super::style::Style;

/// Radius of the view in canvas units. The canvas spans `[-50, 50]`.
pub const VIEW_RADIUS: f64 = 50.0;
pub const STROKE_WIDTH: f64 = 12.0;

const CAP_RADIUS: f64 = STROKE_WIDTH / 2.0;
// The stroke is centered on the outline and clipped to the disc.
const INNER_RADIUS: f64 = VIEW_RADIUS - CAP_RADIUS;
const MAX_GRID_STEP: f64 = 1.0;

/// Renders one [`Snapshot`] of a loading indicator as a braille arc.
#[derive(Debug, Clone, Copy)]
pub struct ArcWidget {
    snapshot: Snapshot,
    style: Style,
    backdrop: Color,
}

impl ArcWidget {
    pub fn new(snapshot: Snapshot, style: Style) -> Self {
        Self {
            snapshot,
            style,
            backdrop: Color::Rgb(0, 0, 0),
        }
    }

    /// The color the indicator fades into. Only RGB backdrops blend.
    pub fn backdrop(mut self, backdrop: Color) -> Self {
        self.backdrop = backdrop;
        self
    }

    fn arc_points(&self, step: f64) -> Vec<(f64, f64)> {
        let Snapshot { rotation, trim, .. } = self.snapshot;
        let mut points = Vec::new();

        let length = trim.span() * std::f64::consts::TAU * VIEW_RADIUS;
        let samples = (length / step).ceil().max(1.0) as usize;
        let rings = (CAP_RADIUS / step).ceil() as usize;
        for i in 0..=samples {
            let fraction = trim.begin + trim.span() * i as f64 / samples as f64;
            for ring in 0..=rings {
                let radius = INNER_RADIUS + CAP_RADIUS * ring as f64 / rings as f64;
                points.push(polar(radius, fraction, rotation));
            }
        }

        for fraction in [trim.begin, trim.end] {
            let (cx, cy) = polar(VIEW_RADIUS, fraction, rotation);
            points.extend(
                disc(cx, cy, CAP_RADIUS, step).filter(|&(x, y)| x.hypot(y) <= VIEW_RADIUS),
            );
        }
        points
    }
}

/// Position of `fraction` of the outline after a clockwise `rotation`.
/// Fraction 0 sits at 3 o'clock and fractions advance clockwise.
fn polar(radius: f64, fraction: f64, rotation: f64) -> (f64, f64) {
    let angle = -(fraction * 360.0 + rotation).to_radians();
    (radius * angle.cos(), radius * angle.sin())
}

fn disc(cx: f64, cy: f64, radius: f64, step: f64) -> impl Iterator<Item = (f64, f64)> {
    let steps = (radius / step).ceil() as i32;
    (-steps..=steps).flat_map(move |ix| {
        (-steps..=steps).filter_map(move |iy| {
            let (dx, dy) = (ix as f64 * step, iy as f64 * step);
            (dx.hypot(dy) <= radius).then_some((cx + dx, cy + dy))
        })
    })
}

/// `color` drawn at `opacity` over `backdrop`, or `None` when invisible.
fn faded(color: Color, backdrop: Color, opacity: f64) -> Option<Color> {
    if opacity <= 0.0 || color == Color::Reset {
        return None;
    }
    match (color, backdrop) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mix = |from: u8, to: u8| {
                (from as f64 + (to as f64 - from as f64) * opacity.min(1.0)).round() as u8
            };
            Some(Color::Rgb(mix(br, r), mix(bg, g), mix(bb, b)))
        }
        _ if opacity >= 0.5 => Some(color),
        _ => None,
    }
}

/// Spacing of sample points for a square `area`: half a braille dot, so every
/// dot under a filled shape gets hit. A cell is 4 dots tall.
fn grid_step(area: Rect) -> f64 {
    let dots = f64::from(area.height.max(1)) * 4.0;
    (2.0 * VIEW_RADIUS / dots / 2.0).min(MAX_GRID_STEP)
}

/// Largest area with a 1:1 aspect, counting a cell as twice as tall as wide.
fn square(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl Widget for ArcWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = square(area);
        if area.is_empty() {
            return;
        }

        let opacity = self.snapshot.opacity;
        let foreground = faded(self.style.foreground, self.backdrop, opacity);
        let background = faded(self.style.background, self.backdrop, opacity);
        if foreground.is_none() && background.is_none() {
            return;
        }

        let step = grid_step(area);
        let fill: Vec<(f64, f64)> = match background {
            Some(_) => disc(0.0, 0.0, VIEW_RADIUS, step).collect(),
            None => Vec::new(),
        };
        let arc = match foreground {
            Some(_) => self.arc_points(step),
            None => Vec::new(),
        };

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-VIEW_RADIUS, VIEW_RADIUS])
            .y_bounds([-VIEW_RADIUS, VIEW_RADIUS])
            .paint(|ctx| {
                if let Some(color) = background {
                    ctx.draw(&Points {
                        coords: &fill,
                        color,
                    });
                    ctx.layer();
                }
                if let Some(color) = foreground {
                    ctx.draw(&Points { coords: &arc, color });
                }
            })
            .render(area, buf);
    }
}
