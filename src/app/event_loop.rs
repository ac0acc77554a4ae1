use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, input, update};

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization fails or the event
    /// loop encounters an I/O failure. Failures while reading or
    /// writing the edited file are surfaced as toasts instead.
    pub fn run(&mut self) -> Result<()> {
        let text = self.initial_text()?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal (scrawl requires an interactive terminal)")?;
        let size = terminal.size()?;

        let mut model = Model::new(self.file_path.clone(), &text, (size.width, size.height));
        model.show_gutter = self.show_gutter;
        model.readonly = self.readonly;

        let result = Self::event_loop(&mut terminal, &mut model);

        ratatui::restore();
        result
    }

    /// Read the initial buffer contents. A missing path or a path that
    /// does not exist yet both start an empty buffer.
    fn initial_text(&self) -> Result<String> {
        match &self.file_path {
            Some(path) if path.exists() => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            _ => Ok(String::new()),
        }
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            // Short poll while a toast is pending so it disappears on
            // time; long poll otherwise.
            let poll_ms = if model.active_toast().is_some() { 100 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                if let Some(msg) = input::handle_event(&event::read()?, model) {
                    let side_msg = msg.clone();
                    *model = update(std::mem::take(model), msg);
                    Self::handle_message_side_effects(model, &side_msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = input::handle_event(&event::read()?, model) {
                        let side_msg = msg.clone();
                        *model = update(std::mem::take(model), msg);
                        Self::handle_message_side_effects(model, &side_msg);
                        needs_render = true;
                    }
                }
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
