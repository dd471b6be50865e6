//! Stateless UI rendering for tic-tac-toe.

use super::app::{App, InputMode};
use crate::games::tictactoe::{Mark, Position, Square};
use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Colors for one theme.
struct Palette {
    background: Color,
    text: Color,
    muted: Color,
    x: Color,
    o: Color,
    accent: Color,
    win: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                x: Color::Blue,
                o: Color::Red,
                accent: Color::Magenta,
                win: Color::Green,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                x: Color::LightCyan,
                o: Color::LightRed,
                accent: Color::Yellow,
                win: Color::LightGreen,
            },
        }
    }

    fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    fn mark(&self, mark: Mark) -> Color {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Scores
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(palette.base().fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], app, &palette);
    draw_board(frame, chunks[2], app, &palette);

    let status = match app.mode() {
        InputMode::Playing => app.message().to_string(),
        InputMode::EditingName { slot, buffer, .. } => format!("{} name: {}_", slot, buffer),
    };
    let status_text = Paragraph::new(status)
        .style(palette.base().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.base().fg(palette.muted)),
        );
    frame.render_widget(status_text, chunks[3]);

    let help = match app.mode() {
        InputMode::Playing => {
            "arrows/1-9 move · enter place · r restart · n names · t theme · q quit"
        }
        InputMode::EditingName { .. } => {
            "type a name · enter confirm (empty keeps it) · esc cancel"
        }
    };
    let help = Paragraph::new(help)
        .style(palette.base().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (name_one, name_two) = app.names();
    let (score_one, score_two) = app.scores();
    for (col, name, mark, score) in [
        (cols[0], name_one, Mark::X, score_one),
        (cols[1], name_two, Mark::O, score_two),
    ] {
        let text = vec![
            Line::from(Span::styled(
                format!("{} ({})", name, mark),
                palette.base().fg(palette.mark(mark)).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(score.to_string(), palette.base())),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.base().fg(palette.muted));
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(block),
            col,
        );
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    // Center the board
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, start) in [(rows[0], 0), (rows[2], 3), (rows[4], 6)] {
        draw_row(frame, row, app, palette, start);
    }
    draw_separator(frame, rows[1], palette);
    draw_separator(frame, rows[3], palette);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], app, palette, start);
    draw_separator_vertical(frame, cols[1], palette);
    draw_cell(frame, cols[2], app, palette, start + 1);
    draw_separator_vertical(frame, cols[3], palette);
    draw_cell(frame, cols[4], app, palette, start + 2);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, index: usize) {
    let square = app.cells()[index];

    let (symbol, mut style) = match square {
        Square::Empty => ((index + 1).to_string(), palette.base().fg(palette.muted)),
        Square::Occupied(mark) => (
            square.symbol().to_string(),
            palette.base().fg(palette.mark(mark)).add_modifier(Modifier::BOLD),
        ),
    };

    if app.highlight().is_some_and(|line| line.contains(index)) {
        style = style.bg(palette.win).fg(palette.background);
    }
    if Position::from_index(index) == Some(app.cursor()) && app.mode() == &InputMode::Playing {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center within the 3-line cell
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(palette.base().fg(palette.muted));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("│\n│\n│").style(palette.base().fg(palette.muted));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::PresentationEvent;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_screen_shows_names_scores_and_message() {
        let mut app = App::new(Theme::Dark);
        app.apply(PresentationEvent::PlayerNames("Ann".into(), "Bo".into()));
        app.apply(PresentationEvent::Score(3, 1));
        app.apply(PresentationEvent::Message("Bo's turn".into()));

        let screen = rendered(&app);
        assert!(screen.contains("Ann (X)"));
        assert!(screen.contains("Bo (O)"));
        assert!(screen.contains("Bo's turn"));
    }
}
