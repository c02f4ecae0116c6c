//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.
//!
//! # Async bridge
//!
//! The event loop itself is synchronous. When the coordinator asks for a
//! fetch, [`App::dispatch`] spawns a task on the tokio runtime that calls the
//! search client and sends the resulting `FetchSucceeded` / `FetchFailed`
//! action back over an unbounded channel. The loop drains that channel with
//! `try_recv` at the top of every frame, so network results land between
//! keystrokes without blocking input.

use crate::{
    commands::Command,
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarResult, CommandBarState},
        header_bar::HeaderBar,
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        results_table::{ResultsTable, ResultsTableState},
        status_bar::StatusBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hackle_api::SearchClient;
use hackle_core::{config::Config, Action, Coordinator, FetchSpec};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    Table,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub coordinator: Coordinator,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub query_bar: QueryBarState,
    pub table: ResultsTableState,
    pub command_bar: CommandBarState,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    client: Arc<dyn SearchClient>,
    runtime: tokio::runtime::Handle,
    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(
        client: Arc<dyn SearchClient>,
        runtime: tokio::runtime::Handle,
        config: Config,
        theme: Theme,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let state = AppState {
            coordinator: Coordinator::new(),
            focus: Focus::Table,
            prev_focus: Focus::Table,
            query_bar: QueryBarState::default(),
            table: ResultsTableState::default(),
            command_bar: CommandBarState::default(),
            theme,
            config,
            show_help: false,
            quit: false,
        };

        App { state, client, runtime, tx, rx }
    }

    /// Commit the startup query and kick off its first fetch.
    ///
    /// `query_override` (from the CLI) wins over the configured default.
    pub fn bootstrap(&mut self, query_override: Option<String>) {
        let query = query_override.unwrap_or_else(|| self.state.config.api.default_query.clone());
        tracing::info!(%query, "bootstrap search");
        self.state.query_bar = QueryBarState::with_input(query.clone());
        self.apply(Action::SetQuery(query));
        self.apply(Action::SubmitQuery);
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            // Land any fetch results that arrived since the last frame
            while let Ok(action) = self.rx.try_recv() {
                self.apply(action);
            }

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Feed an action to the coordinator and dispatch any fetch it requests.
    fn apply(&mut self, action: Action) {
        if let Some(spec) = self.state.coordinator.apply(action) {
            self.dispatch(spec);
        }
        self.state.table.clamp(self.state.coordinator.hit_count());
    }

    /// Spawn the network call for a fetch effect; the result comes back
    /// through the action channel.
    fn dispatch(&self, spec: FetchSpec) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let hits_per_page = self.state.config.api.hits_per_page;
        let FetchSpec { key, page } = spec;
        tracing::debug!(%key, page, "dispatching fetch");

        self.runtime.spawn(async move {
            let action = match client.search(&key, page, hits_per_page).await {
                Ok(page) => Action::FetchSucceeded { key, page },
                Err(error) => Action::FetchFailed { key, error },
            };
            // Receiver only drops on shutdown; a missed result is fine then
            let _ = tx.send(action);
        });
    }

    fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.state.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    self.state.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if self.state.focus == Focus::Command {
            match self.state.command_bar.handle(&event) {
                CommandBarResult::Open => {}
                CommandBarResult::Cancelled => {
                    self.state.focus = self.state.prev_focus;
                }
                CommandBarResult::Submitted(command) => {
                    self.state.focus = self.state.prev_focus;
                    self.execute_command(command);
                }
            }
            return;
        }

        match event {
            // Toggle help (only when not typing in the search bar)
            AppEvent::Char('?') if self.state.focus != Focus::Query => {
                tracing::debug!("help popup opened");
                self.state.show_help = true;
            }

            // Enter command mode with `:` (not from the search bar)
            AppEvent::Char(':') if self.state.focus != Focus::Query => {
                tracing::debug!(prev_focus = ?self.state.focus, "entering command mode");
                self.state.prev_focus = self.state.focus;
                self.state.command_bar.clear();
                self.state.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                self.state.quit = true;
            }

            // Return focus from the search bar
            AppEvent::Escape => {
                if self.state.focus == Focus::Query {
                    tracing::debug!("focus: Query -> Table");
                    self.state.focus = Focus::Table;
                }
            }

            // Tab-cycle focus: search bar ↔ story list
            AppEvent::FocusNext => {
                let next = match self.state.focus {
                    Focus::Query => Focus::Table,
                    Focus::Table | Focus::Command => Focus::Query,
                };
                tracing::debug!(from = ?self.state.focus, to = ?next, "focus cycle");
                self.state.focus = next;
            }

            AppEvent::QueryFocus => {
                tracing::debug!("focus -> Query");
                self.state.focus = Focus::Query;
            }

            // Commit the draft query and fetch its first page
            AppEvent::Enter if self.state.focus == Focus::Query => {
                self.apply(Action::SubmitQuery);
                self.state.focus = Focus::Table;
            }

            AppEvent::More => self.apply(Action::RequestMore),
            AppEvent::Sort(key) => self.apply(Action::ToggleSort(key)),

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => self.dispatch_to_focused(other),
        }
    }

    /// Route an event to the widget that owns the current focus.
    fn dispatch_to_focused(&mut self, event: AppEvent) {
        match self.state.focus {
            Focus::Query => {
                // Mirror every edit into the coordinator's draft query
                if self.state.query_bar.handle(&event) {
                    let input = self.state.query_bar.input.clone();
                    self.apply(Action::SetQuery(input));
                }
            }
            Focus::Table => {
                let total = self.state.coordinator.hit_count();
                self.state.table.handle(&event, total);
            }
            Focus::Command => {} // handled before dispatch, should not reach here
        }
    }

    /// Execute a parsed [`Command`] against the application.
    fn execute_command(&mut self, command: Command) {
        tracing::debug!(?command, "executing command");
        match command {
            Command::Quit => self.state.quit = true,
            Command::Help => self.state.show_help = !self.state.show_help,
            Command::Theme(name) => {
                self.state.theme = match name.to_ascii_lowercase().as_str() {
                    "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Theme::load_gruvbox_dark(),
                    _ => Theme::load_default(),
                };
            }
            Command::Sort(key) => self.apply(Action::ToggleSort(key)),
            Command::More => self.apply(Action::RequestMore),
            Command::Search(term) => {
                self.state.query_bar = QueryBarState::with_input(term.clone());
                self.apply(Action::SetQuery(term));
                self.apply(Action::SubmitQuery);
            }
            Command::Url => {
                self.state.config.ui.show_url = !self.state.config.ui.show_url;
            }
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Query | Focus::Command)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line header | 3-line search bar | story list | 1-line status
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    let c = &state.coordinator;
    let hits = c.visible_hits();

    frame.render_widget(HeaderBar::new(c.search_key(), &state.theme), vert[0]);

    let readout = c.current_page().map(|page| (page, hits.len()));
    frame.render_widget(
        QueryBar::new(&state.query_bar, state.focus == Focus::Query, &state.theme, readout),
        vert[1],
    );

    frame.render_widget(
        ResultsTable::new(
            &hits,
            &state.table,
            state.focus == Focus::Table,
            &state.theme,
            c.sort_key(),
            c.is_sort_reverse(),
            state.config.ui.show_url,
            state.config.ui.title_width_pct,
            state.config.ui.author_width_pct,
        ),
        vert[2],
    );

    frame.render_widget(
        StatusBar::new(c.is_loading(), c.last_error(), &state.theme),
        vert[3],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom() - 1, height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return; // cursor is set; skip search-bar cursor below
    }

    // Position the terminal cursor when the search bar is focused
    if state.focus == Focus::Query {
        let qb = QueryBar::new(&state.query_bar, true, &state.theme, readout);
        let (cx, cy) = qb.cursor_position(vert[1]);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}
