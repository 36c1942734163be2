//! TUI rendering with ratatui
//!
//! Board, keyboard, hints and message log for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterFeedback, MAX_TURNS, WORD_LENGTH};
use crate::game::{Dictionary, GameStatus};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<D: Dictionary>(f: &mut Frame, app: &App<'_, D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 HARDWORD 🟨")
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

fn render_play_panel<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_TURNS as u16 + 2), // Board
            Constraint::Min(5),                       // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn tile_style(outcome: Option<LetterFeedback>) -> Style {
    match outcome {
        Some(LetterFeedback::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterFeedback::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterFeedback::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile_span(letter: u8, outcome: Option<LetterFeedback>) -> Span<'static> {
    Span::styled(
        format!(" {} ", (letter as char).to_ascii_uppercase()),
        tile_style(outcome),
    )
}

fn render_board<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let history = app.game.history();
    let mut lines: Vec<Line> = history
        .iter()
        .map(|(guess, row)| {
            let tiles: Vec<Span> = guess
                .chars()
                .iter()
                .zip(row.cells())
                .flat_map(|(&letter, &outcome)| [tile_span(letter, Some(outcome)), Span::raw(" ")])
                .collect();
            Line::from(tiles)
        })
        .collect();

    if app.input_mode == InputMode::Typing && history.len() < MAX_TURNS {
        let typed = app.input_buffer.as_bytes();
        let tiles: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let tile = typed.get(i).map_or_else(
                    || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    |&letter| tile_span(letter, None),
                );
                [tile, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(tiles));
    }

    while lines.len() < MAX_TURNS {
        lines.push(Line::from(Span::styled(
            " · ".repeat(WORD_LENGTH),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let keys = app.game.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let tiles: Vec<Span> = row
                .bytes()
                .map(|letter| tile_span(letter, keys.get(letter)))
                .collect();
            Line::from(tiles)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_hints(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_hints<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let content: Vec<Line> = if app.hints.is_empty() {
        vec![Line::from(Span::styled(
            "Press TAB for suggestions",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.hints
            .iter()
            .enumerate()
            .map(|(i, word)| {
                Line::from(vec![
                    Span::raw(format!("{}. ", i + 1)),
                    Span::styled(
                        word.clone(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect()
    };

    let hints = Paragraph::new(content).block(
        Block::default()
            .title(" Hints ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(hints, area);
}

fn render_messages<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_input<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let (title, content, color) = match (app.input_mode, app.game.status()) {
        (InputMode::GameOver, GameStatus::Won) => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        (InputMode::GameOver, _) => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            format!("The word was {}", app.game.secret().text().to_uppercase()),
            Color::Red,
        ),
        (InputMode::Typing, _) => (
            " Type a guess | Enter to submit | TAB for hints ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!(
        "Turn {}/{MAX_TURNS}{}",
        (app.game.turn() + 1).min(MAX_TURNS),
        if app.game.hard_mode() { " | Hard" } else { "" }
    );
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games,
        app.stats.win_percentage()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.game.candidates_remaining());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Typing => "Esc: Quit | ^N: New | ^T: Hard | TAB: Hints",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
