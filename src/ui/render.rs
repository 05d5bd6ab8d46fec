use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{app::state::App, ui::theme::get_theme};

const ROUNDED_BORDER: border::Set = border::ROUNDED;
const BUTTON_LABEL: &str = "Tap to animate";

fn block_with_title(title: &'_ str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDER)
        .title(title)
}

pub fn render(f: &mut Frame, app: &mut App) {
    let theme = get_theme();
    let area = f.area();

    let background = Block::default().style(Style::default().bg(theme.bg));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(f, chunks[0]);
    draw_preview(f, chunks[1], app);
    draw_footer(f, chunks[2], app);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let theme = get_theme();
    let header = Paragraph::new("arcspin")
        .style(theme.header_style())
        .block(block_with_title(" preview ").border_style(theme.border_style(false)))
        .centered();
    f.render_widget(header, area);
}

fn draw_preview(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = get_theme();

    let rows = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)])
        .margin(1)
        .spacing(1)
        .split(area);

    let [button_area] = Layout::horizontal([Constraint::Length(BUTTON_LABEL.len() as u16 + 4)])
        .flex(Flex::Center)
        .areas(rows[0]);

    let running = app.continue_animation.get();
    let button = Paragraph::new(BUTTON_LABEL)
        .style(theme.button_style())
        .block(block_with_title("").border_style(theme.border_style(running)))
        .centered();
    f.render_widget(button, button_area);

    let widget = app.indicator.widget(app.now).backdrop(theme.bg);
    f.render_widget(widget, rows[1]);

    // Store regions for mouse hit detection
    app.layout_regions.button = Some(button_area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = get_theme();
    let running = app.continue_animation.get();

    let status = if running { "running" } else { "stopped" };
    let line = Line::from(vec![
        Span::styled(
            format!(" {status} "),
            Style::new().fg(theme.status_color(running)),
        ),
        Span::styled(
            format!(
                "cycles {}  turns {}  ",
                app.cycles_completed,
                app.indicator.turns()
            ),
            theme.label_style(),
        ),
        Span::styled("space/enter/click: toggle  q: quit", theme.label_style()),
    ]);

    let footer =
        Paragraph::new(line).block(block_with_title("").border_style(theme.border_style(false)));
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Instant;

    fn draw(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
    }

    #[test]
    fn records_button_region() {
        let mut app = App::new(&Config::default(), Instant::now());
        draw(&mut app);

        let button = app.layout_regions.button.unwrap();
        assert_eq!(button.height, 3);
        assert_eq!(button.width, BUTTON_LABEL.len() as u16 + 4);
        assert_eq!(button.x, (60 - button.width) / 2);
    }

    #[test]
    fn shows_label_and_status() {
        let mut app = App::new(&Config::default(), Instant::now());
        let terminal = draw(&mut app);

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains(BUTTON_LABEL));
        assert!(text.contains("stopped"));
    }
}
