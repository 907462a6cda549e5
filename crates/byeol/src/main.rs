//! Terminal front end for the star field.
//!
//! Reads [`Settings`], mounts a [`StarField`] onto a [`PixelBuffer`] sized to
//! the terminal, and animates it until `q`, `Esc`, or `Ctrl-C`.

use std::time::{SystemTime, UNIX_EPOCH};

use byeol_config::Settings;
use byeol_field::{PixelBuffer, StarField, mount};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame, layout::Size, widgets::Paragraph};
use tracing::info;

mod logging;
mod ticker;

use ticker::FrameTicker;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();
    let settings = Settings::load_or_default();
    let terminal = ratatui::init();
    let result = run(settings, terminal);
    ratatui::restore();
    result
}

/// Sizes the surface to the terminal, mounts the field, and enters the loop.
fn run(settings: Settings, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    let app = App::new(settings, size)?;
    app.run(terminal)
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The twinkling star population.
    field: StarField,
    /// Pixel surface the field draws onto.
    surface: PixelBuffer,
    /// Frame pacing for the animation.
    ticker: FrameTicker,
}

impl App {
    /// Construct a new instance of [`App`] with a freshly mounted field.
    pub fn new(settings: Settings, size: Size) -> color_eyre::Result<Self> {
        let seed = settings.seed.unwrap_or_else(time_seed);
        let mut surface = PixelBuffer::for_terminal(size.width, size.height);
        let field = mount(&mut surface, settings.field, seed)?;
        info!(frame_rate = settings.frame_rate, "frame pacing configured");
        Ok(Self {
            running: false,
            field,
            surface,
            ticker: FrameTicker::new(settings.frame_rate),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            if self.ticker.try_tick() {
                self.field.render_frame(&mut self.surface);
            }
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        info!("stopping");
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        frame.render_widget(Paragraph::new(self.surface.lines()), frame.area());
    }

    /// Reads the crossterm events and updates the state of [`App`].
    ///
    /// Blocks for at most the time left in the current frame.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.ticker.poll_timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Seed drawn from the system clock, for a fresh sky on every launch.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(Settings::default(), Size::new(20, 10)).unwrap()
    }

    #[test]
    fn test_quit_keys_stop_the_loop() {
        for (modifiers, code) in [
            (KeyModifiers::NONE, KeyCode::Char('q')),
            (KeyModifiers::NONE, KeyCode::Esc),
            (KeyModifiers::CONTROL, KeyCode::Char('c')),
            (KeyModifiers::CONTROL, KeyCode::Char('C')),
        ] {
            let mut app = test_app();
            app.running = true;
            app.on_key_event(KeyEvent::new(code, modifiers));
            assert!(!app.running, "{code:?} should stop the loop");
        }
    }

    #[test]
    fn test_other_keys_keep_it_running() {
        let mut app = test_app();
        app.running = true;
        app.on_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        app.on_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        app.on_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert!(app.running);
    }
}
