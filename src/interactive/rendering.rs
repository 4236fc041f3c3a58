//! TUI rendering with ratatui
//!
//! Board, keyboard, and status visualizations for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterStatus;
use crate::game::MAX_ATTEMPTS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Keyboard rows rendered in the hint panel
const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Status bar
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE - Terminal Edition")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unknown => Style::default().fg(Color::White),
    }
}

fn cell_span(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::default()];

    for row in 0..MAX_ATTEMPTS {
        let line = if let Some(attempt) = app.session.attempts().get(row) {
            // A scored row
            let mut spans = Vec::with_capacity(10);
            for (letter, status) in attempt.iter() {
                spans.push(cell_span(letter as char, status_style(status)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        } else if row == app.session.attempts().len() && app.input_mode == InputMode::Typing {
            // The row being typed
            let mut spans = Vec::with_capacity(10);
            for i in 0..5 {
                let cell = app.input_buffer.as_bytes().get(i).map_or_else(
                    || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    |&b| cell_span(b as char, Style::default().add_modifier(Modifier::BOLD)),
                );
                spans.push(cell);
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        } else {
            // An empty future row
            let mut spans = Vec::with_capacity(10);
            for _ in 0..5 {
                spans.push(Span::styled(" . ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        };

        lines.push(line.alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Keyboard hints
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();
    let mut lines: Vec<Line> = vec![Line::default()];

    for (i, row) in KEY_ROWS.iter().enumerate() {
        let mut spans = vec![Span::raw(" ".repeat(i * 2))];
        for letter in row.bytes() {
            spans.push(cell_span(
                letter as char,
                status_style(keyboard.hint(letter)),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(panel, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Typing => "Mode: Playing",
        InputMode::GameOver => "Mode: Game Over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let remaining_text = format!("Guesses left: {}", app.session.attempts_remaining());
    let remaining = Paragraph::new(remaining_text).alignment(Alignment::Center);
    f.render_widget(remaining, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Typing => "Esc: Quit | Ctrl-N: New Game | Enter: Submit",
        InputMode::GameOver => "q: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
