//! TUI application state and logic

use crate::game::{
    Dictionary, EmptyPoolError, GameSession, GuessError, MAX_ATTEMPTS, SessionStatus,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub session: GameSession<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing letters into the current row
    Typing,
    /// Win or loss reached; waiting for new-game/quit
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = number of guesses used for a win (1-6); index 0 unused
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if the dictionary has no solutions.
    pub fn new(dictionary: &'a Dictionary, mut rng: StdRng) -> Result<Self, EmptyPoolError> {
        let session = GameSession::new(dictionary, &mut rng)?;

        Ok(Self {
            dictionary,
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Guess the hidden 5-letter word in 6 tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
            rng,
        })
    }

    /// Submit the typed word to the session
    pub fn submit_input(&mut self) {
        let word = self.input_buffer.clone();

        match self.session.submit_guess(&word) {
            Ok(outcome) => {
                self.input_buffer.clear();

                match outcome.status {
                    SessionStatus::Won => {
                        let turns = self.session.attempts().len();
                        self.stats.total_games += 1;
                        self.stats.games_won += 1;
                        if turns < self.stats.guess_distribution.len() {
                            self.stats.guess_distribution[turns] += 1;
                        }

                        self.input_mode = InputMode::GameOver;

                        let celebration = match turns {
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
                    SessionStatus::Lost => {
                        self.stats.total_games += 1;
                        self.input_mode = InputMode::GameOver;

                        let reveal = format!(
                            "Out of guesses! The word was {}.",
                            self.session.target().text().to_uppercase()
                        );
                        self.add_message(&reveal, MessageStyle::Error);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    SessionStatus::InProgress => {
                        let remaining = self.session.attempts_remaining();
                        self.add_message(
                            &format!(
                                "{remaining} {} left",
                                if remaining == 1 { "guess" } else { "guesses" }
                            ),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(err @ (GuessError::InvalidLength(_) | GuessError::NotInDictionary(_))) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(GuessError::SessionTerminated) => {
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Replace the finished session with a fresh one
    pub fn new_game(&mut self) {
        match GameSession::new(self.dictionary, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Typing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Waiting for new-game/quit, ignore other keys
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        if can_type(&app) {
                            app.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_input();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn can_type(app: &App) -> bool {
    app.input_buffer.len() < 5 && app.session.attempts().len() < MAX_ATTEMPTS
}
