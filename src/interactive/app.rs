//! TUI application state and event loop

use crate::core::Word;
use crate::game::{Game, GameConfig, GameEvent, GameOutcome, InputEvent, KeyId};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// Redraw / clock granularity
const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Daily { day: i64 },
    Practice,
}

#[derive(Debug, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = number of attempts, `0..=max_attempts`
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_attempts + 1],
        }
    }

    /// Count a finished game; in-progress outcomes are ignored
    pub fn record(&mut self, outcome: GameOutcome, attempts: usize) {
        match outcome {
            GameOutcome::InProgress => return,
            GameOutcome::Won => {
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(attempts) {
                    *slot += 1;
                }
            }
            GameOutcome::Lost => {}
        }
        self.total_games += 1;
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub source: &'a WordSource,
    pub mode: GameMode,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Screen areas of the on-screen keyboard, from the last frame
    pub key_hitboxes: Vec<(Rect, KeyId)>,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(source: &'a WordSource, mode: GameMode, config: GameConfig) -> Self {
        let game = match mode {
            GameMode::Daily { day } => Game::for_day(source, day, config),
            GameMode::Practice => Game::new(source, source.random_target().clone(), config),
        };

        let stats = Statistics::new(game.config().max_attempts);
        Self {
            game,
            source,
            mode,
            stats,
            should_quit: false,
            key_hitboxes: Vec::new(),
        }
    }

    /// Start a fresh practice game on a random target
    pub fn new_practice_game(&mut self) {
        let target: Word = self.source.random_target().clone();
        self.mode = GameMode::Practice;
        self.game.new_game(target);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_practice_game(),
            KeyCode::Char(c) if !ctrl => {
                self.game.dispatch(InputEvent::Char(c));
            }
            KeyCode::Enter => {
                self.game.dispatch(InputEvent::Enter);
            }
            KeyCode::Backspace => {
                self.game.dispatch(InputEvent::Backspace);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(key) = self.key_at(mouse.column, mouse.row) {
            self.game.dispatch(InputEvent::Click(key));
        }
    }

    /// On-screen key under a terminal cell
    #[must_use]
    pub fn key_at(&self, column: u16, row: u16) -> Option<KeyId> {
        self.key_hitboxes
            .iter()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|&(_, key)| key)
    }

    /// Advance the game clock and fold its events into app state
    pub fn tick(&mut self, elapsed_ms: u64) {
        self.game.advance(elapsed_ms);
        for event in self.game.drain_events() {
            if let GameEvent::OutcomeChanged(outcome) = event {
                self.stats.record(outcome, self.game.attempts());
            }
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let mut hitboxes = Vec::new();
        terminal.draw(|f| hitboxes = super::rendering::ui(f, &app))?;
        app.key_hitboxes = hitboxes;

        let timeout = FRAME.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= FRAME {
            last_tick = Instant::now();
            app.tick(elapsed.as_millis() as u64);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
