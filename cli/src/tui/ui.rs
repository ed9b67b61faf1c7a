use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use streakmap_core::{hex_to_rgb, Palette, GRID_COLS, GRID_ROWS, WEEKDAY_LABELS};

use crate::tui::app::App;

// Two terminal cells per grid cell keeps the squares roughly square.
const CELL_WIDTH: usize = 2;
const LABEL_WIDTH: usize = 4;

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Month labels
            Constraint::Length(7), // Grid
            Constraint::Min(0),
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let title = match (app.decorative, app.total()) {
        (true, _) => "STREAKMAP (no data, decorative)".to_string(),
        (false, Some(total)) => format!("STREAKMAP ({} contributions)", total),
        (false, None) => "STREAKMAP".to_string(),
    };
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, chunks[0]);

    f.render_widget(Paragraph::new(month_label_line(app)), chunks[1]);
    f.render_widget(Paragraph::new(grid_lines(app)), chunks[2]);

    let footer = Paragraph::new(format!("t: Toggle theme ({}) | q: Quit", app.theme.name()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[4]);
}

fn month_label_line(app: &App) -> Line<'static> {
    let mut text = " ".repeat(LABEL_WIDTH + GRID_COLS * CELL_WIDTH);
    if let Some(graph) = &app.graph {
        for label in &graph.month_labels {
            let at = LABEL_WIDTH + label.column * CELL_WIDTH;
            let end = (at + label.name.len()).min(text.len());
            if at < end {
                text.replace_range(at..end, &label.name[..end - at]);
            }
        }
    }
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn grid_lines(app: &App) -> Vec<Line<'static>> {
    let palette = app.theme.palette();
    (0..GRID_ROWS)
        .map(|row| {
            let label = WEEKDAY_LABELS
                .iter()
                .find(|(r, _)| *r == row)
                .map(|(_, name)| *name)
                .unwrap_or("");
            let mut spans = vec![Span::styled(
                format!("{:<width$}", label, width = LABEL_WIDTH),
                Style::default().fg(Color::DarkGray),
            )];
            for column in 0..GRID_COLS {
                let level = app.buckets[column][row] as usize;
                spans.push(Span::styled(
                    " ".repeat(CELL_WIDTH),
                    Style::default().bg(cell_color(palette, level)),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

fn cell_color(palette: &Palette, level: usize) -> Color {
    match hex_to_rgb(palette.buckets[level.min(4)]) {
        Ok((r, g, b)) => Color::Rgb(r, g, b),
        Err(_) => Color::DarkGray,
    }
}
