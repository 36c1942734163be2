//! TUI application state and logic

use crate::core::{MAX_TURNS, WORD_LENGTH};
use crate::game::{Dictionary, DictionaryKind, Game, GameStatus, Statistics};
use crate::solver::DEFAULT_HINT_COUNT;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, D: Dictionary = DictionaryKind> {
    pub game: Game<'a, D>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub hints: Vec<String>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, D: Dictionary> App<'a, D> {
    #[must_use]
    pub fn new(game: Game<'a, D>) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Guess the five-letter word in {MAX_TURNS} tries."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB for hints, Ctrl-T toggles hard mode before the first guess."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            hints: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (_, KeyCode::Esc) => self.should_quit = true,
            (_, KeyCode::Char('n')) if ctrl => self.new_game(),
            (InputMode::GameOver, KeyCode::Char('n')) => self.new_game(),
            (InputMode::GameOver, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::GameOver, _) => {}
            (InputMode::Typing, KeyCode::Char('t')) if ctrl => self.toggle_hard_mode(),
            (InputMode::Typing, KeyCode::Char(c)) => {
                if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            (InputMode::Typing, KeyCode::Backspace) => {
                self.input_buffer.pop();
            }
            (InputMode::Typing, KeyCode::Enter) => self.submit(),
            (InputMode::Typing, KeyCode::Tab) => self.show_hints(),
            _ => {}
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();
        match self.game.submit_guess(&input) {
            Ok(row) => {
                self.input_buffer.clear();
                self.hints.clear();
                match self.game.status() {
                    GameStatus::Won => {
                        self.finish_game();
                        let celebration = match self.game.turn() {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameStatus::Lost => {
                        self.finish_game();
                        let reveal = format!(
                            "Out of guesses! The word was {}",
                            self.game.secret().text().to_uppercase()
                        );
                        self.add_message(&reveal, MessageStyle::Error);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameStatus::InProgress => {
                        self.add_message(
                            &format!("{} {}", input.to_uppercase(), row.to_emoji()),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Fill the hint panel from the current history
    pub fn show_hints(&mut self) {
        self.hints = self
            .game
            .suggest_hints(DEFAULT_HINT_COUNT)
            .into_iter()
            .map(|word| word.text().to_uppercase())
            .collect();

        if self.hints.is_empty() {
            self.add_message("No suggestions (constraints too tight).", MessageStyle::Error);
        } else {
            let remaining = self.game.candidates_remaining();
            self.add_message(&format!("{remaining} candidates remaining"), MessageStyle::Info);
        }
    }

    pub fn toggle_hard_mode(&mut self) {
        if self.game.turn() > 0 {
            self.add_message(
                "Hard mode can only change before the first guess.",
                MessageStyle::Error,
            );
            return;
        }
        self.game.set_hard_mode(!self.game.hard_mode());
        let state = if self.game.hard_mode() { "on" } else { "off" };
        self.add_message(&format!("Hard mode {state}"), MessageStyle::Info);
    }

    /// Abandon the current game (if any) and draw a new secret
    pub fn new_game(&mut self) {
        self.game.reset(None);
        self.input_buffer.clear();
        self.hints.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn finish_game(&mut self) {
        self.stats.record_game(self.game.status(), self.game.turn());
        self.input_mode = InputMode::GameOver;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary>(app: App<'_, D>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
