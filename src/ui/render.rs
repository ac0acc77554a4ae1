use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::ui::viewport::{self, LayoutParams, RowKind};

use super::{overlays, status};

/// Render the complete UI.
///
/// The bottom row is the status bar, the row above it shows a toast
/// when one is active, and everything else is the text area. The
/// layout plan's recomputed scroll position is written back to the
/// model so the next frame starts from it.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let text_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };

    render_text(model, frame, text_area);
    status::render_status_bar(model, frame, status_area);

    if model.active_toast().is_some() && area.height >= 2 {
        let toast_area = Rect {
            y: area.y + area.height - 2,
            height: 1,
            ..area
        };
        status::render_toast_bar(model, frame, toast_area);
    }

    if model.help_visible {
        overlays::render_help_overlay(frame, area);
    }
}

fn render_text(model: &mut Model, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }

    let plan = viewport::layout(
        model.buffer.lines(),
        LayoutParams {
            width: area.width as usize,
            height: area.height as usize,
            scroll_top: model.scroll_top,
            cursor_row: model.cursor.row,
            cursor_col: model.cursor.col,
            show_gutter: model.show_gutter,
        },
    );
    model.scroll_top = plan.scroll_top;

    let lines: Vec<Line> = plan
        .rows
        .iter()
        .map(|row| {
            let gutter_style = match row.kind {
                RowKind::Content { .. } => Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                RowKind::Padding => Style::default().fg(Color::DarkGray),
            };
            Line::from(vec![
                Span::styled(row.gutter.clone(), gutter_style),
                Span::raw(row.text.clone()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    if !model.help_visible {
        let col = u16::try_from(plan.cursor.col).unwrap_or(u16::MAX);
        let row = u16::try_from(plan.cursor.row).unwrap_or(u16::MAX);
        frame.set_cursor_position((area.x + col, area.y + row));
    }
}
