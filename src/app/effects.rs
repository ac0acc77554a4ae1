use std::fs;

use crate::app::{App, Message, Model, ToastLevel};

impl App {
    /// Perform the file I/O a message implies, after `update` has
    /// applied its pure state changes. All failures land in a toast;
    /// the in-memory buffer is never touched by a failed write.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::Save => Self::save_buffer(model),
            Message::Reload => Self::reload_buffer(model),
            _ => {}
        }
    }

    fn save_buffer(model: &mut Model) {
        if model.readonly {
            model.show_toast(ToastLevel::Warning, "Buffer is read-only");
            return;
        }
        let Some(path) = model.file_path.clone() else {
            model.show_toast(ToastLevel::Error, "Can't write file without a file name");
            return;
        };
        match fs::write(&path, model.buffer.to_text()) {
            Ok(()) => {
                model.dirty = false;
                model.show_toast(ToastLevel::Info, format!("{} saved", path.display()));
            }
            Err(err) => {
                tracing::warn!("write failed path={} err={err}", path.display());
                model.show_toast(
                    ToastLevel::Error,
                    format!("Failed to write {}: {err}", path.display()),
                );
            }
        }
    }

    fn reload_buffer(model: &mut Model) {
        let Some(path) = model.file_path.clone() else {
            model.show_toast(ToastLevel::Warning, "No file to reload");
            return;
        };
        match fs::read_to_string(&path) {
            Ok(text) => {
                model.buffer.load(&text);
                model.dirty = false;
                model.scroll_top = 0;
                model.clamp_cursor();
                model.show_toast(ToastLevel::Info, "Reloaded");
            }
            Err(err) => {
                tracing::warn!("read failed path={} err={err}", path.display());
                model.show_toast(ToastLevel::Error, format!("Reload failed: {err}"));
            }
        }
    }
}
