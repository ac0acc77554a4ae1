use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let filename = model.file_path.as_ref().map_or_else(
        || "[No Name]".to_string(),
        |p| {
            p.file_name()
                .map_or_else(|| p.display().to_string(), |s| s.to_string_lossy().to_string())
        },
    );

    let dirty_indicator = if model.dirty { " [+]" } else { "" };
    let readonly_indicator = if model.readonly { " [RO]" } else { "" };

    let left = format!(
        " {}  {}{}{}  ?:help",
        model.mode.as_str(),
        filename,
        dirty_indicator,
        readonly_indicator
    );
    let position = format!("{}:{} ", model.cursor.row + 1, model.cursor.col + 1);

    let pad = (area.width as usize).saturating_sub(left.len() + position.len());
    let status = format!("{left}{}{position}", " ".repeat(pad));

    let status_bar = Paragraph::new(status).style(
        Style::default()
            .bg(Color::DarkGray)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
