use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).clamp(30, 48);
    let popup_height = area.height.saturating_sub(4).min(22);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("Navigation", section_style));
    lines.push(Line::raw("  i / k or arrows   Up / down"));
    lines.push(Line::raw("  j / l or arrows   Left / right"));
    lines.push(Line::raw("  s / e             Line start / end"));
    lines.push(Line::raw("  o / u             Next / previous word"));
    lines.push(Line::raw("  x                 Delete character"));
    lines.push(Line::raw("  f / a             Insert at / after cursor"));
    lines.push(Line::raw("  w                 Write file"));
    lines.push(Line::raw("  r                 Reload from disk"));
    lines.push(Line::raw("  q                 Quit"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Insert mode", section_style));
    lines.push(Line::raw("  Esc               Back to navigation"));
    lines.push(Line::raw("  Enter             Split line"));
    lines.push(Line::raw("  Backspace         Delete backwards"));
    lines.push(Line::raw("  Ctrl-s            Write file"));
    lines.push(Line::raw(""));
    lines.push(Line::styled("any key closes this help", dim_style));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
