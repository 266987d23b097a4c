//! TUI Renderer for the portfolio browser
//!
//! This module implements the TUI event loop and screen rendering.
//!
//! ## Design:
//! - Renderer owns the session: content store, view controller, component
//! - Every frame re-renders the page view model from the controller state
//! - Input is mapped to actions by the component and applied here

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

use folio_engine::{ContentStore, PageViewModel, ViewController, render_page};

use crate::presentation::components::{PortfolioAction, PortfolioComponent};

/// Opens a URL outside the terminal
pub type LinkOpener = fn(&str) -> io::Result<()>;

fn open_in_browser(url: &str) -> io::Result<()> {
    open::that(url)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Runs `restore` when dropped
struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    fn new(restore: fn()) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

pub struct TuiRenderer {
    store: ContentStore,
    controller: ViewController,
    component: PortfolioComponent,
    tick_rate: Duration,
    link_opener: LinkOpener,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(store: ContentStore, controller: ViewController, tick_rate: Duration) -> Self {
        Self {
            store,
            controller,
            component: PortfolioComponent::new(),
            tick_rate,
            link_opener: open_in_browser,
            should_quit: false,
        }
    }

    pub fn with_link_opener(mut self, opener: LinkOpener) -> Self {
        self.link_opener = opener;
        self
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    pub fn component(&self) -> &PortfolioComponent {
        &self.component
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn page(&self) -> PageViewModel {
        render_page(&self.store, &self.controller)
    }

    /// Main entry point for the interactive browser
    ///
    /// Sets up raw mode, the alternate screen and mouse capture, runs the
    /// loop, and restores the terminal on every exit path.
    pub fn run(mut self) -> Result<()> {
        ctrlc::set_handler(|| {
            restore_terminal();
            std::process::exit(0);
        })?;

        enable_raw_mode()?;
        let _guard = TerminalGuard::new(restore_terminal);

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(self.tick_rate)? {
                let event = event::read()?;
                self.handle_event(event);
            }
        }

        tracing::info!("portfolio closed");
        Ok(())
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let page = self.page();
        self.component.render(f, &page);
    }

    pub fn handle_event(&mut self, event: Event) {
        let page = self.page();
        let action = match event {
            Event::Key(key) => self.component.handle_key(key, &page),
            Event::Mouse(mouse) => self.component.handle_mouse(mouse, &page),
            _ => None,
        };

        if let Some(action) = action {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: PortfolioAction) {
        match action {
            PortfolioAction::Dispatch(action) => self.controller.dispatch(action),
            PortfolioAction::OpenLink(url) => self.open_link(&url),
            PortfolioAction::Quit => self.should_quit = true,
        }
    }

    fn open_link(&mut self, url: &str) {
        match (self.link_opener)(url) {
            Ok(()) => {
                tracing::info!(%url, "opened link");
                self.component.set_status(format!("Opened {}", url));
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "failed to open link");
                self.component
                    .set_status(format!("Could not open {}: {}", url, err));
            }
        }
    }
}
