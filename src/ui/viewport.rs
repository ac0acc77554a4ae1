//! Wrap-aware layout engine.
//!
//! Everything here is a pure function of the line sequence and the
//! dimensions passed in; nothing is cached between calls, so the output
//! is always consistent with the buffer after a mutation. The engine
//! produces a [`DrawPlan`] that the renderer executes against the
//! terminal, which keeps this module testable without one.

/// Display form of a literal tab: a marker followed by three pad cells.
pub const TAB_PLACEHOLDER: &str = "|   ";

/// How a single display row of the plan is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A wrapped segment of buffer line `line`. `first` marks the
    /// segment that carries the line number in the gutter.
    Content {
        /// Buffer row this segment belongs to.
        line: usize,
        /// Whether this is the line's first segment.
        first: bool,
    },
    /// Filler below the last emitted line.
    Padding,
}

/// One display row of the plan: gutter cells followed by text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    /// Fixed-width gutter prefix (empty when the gutter is disabled).
    pub gutter: String,
    /// Wrapped segment text, at most the text width in cells.
    pub text: String,
    /// What this row represents.
    pub kind: RowKind,
}

/// Screen cell where the terminal cursor belongs, relative to the
/// top-left of the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorCell {
    /// Display row.
    pub row: usize,
    /// Display column, gutter included.
    pub col: usize,
}

/// Inputs to [`layout`], owned by the session and passed by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    /// Total text-area width in cells, gutter included.
    pub width: usize,
    /// Text-area height in rows.
    pub height: usize,
    /// First buffer row eligible for display before recomputation.
    pub scroll_top: usize,
    /// Logical cursor row.
    pub cursor_row: usize,
    /// Logical cursor column (byte offset into the line).
    pub cursor_col: usize,
    /// Whether the line-number gutter is drawn.
    pub show_gutter: bool,
}

/// The complete draw plan for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawPlan {
    /// Exactly `height` display rows, content first, padding after.
    pub rows: Vec<PlanRow>,
    /// The single cursor cell, always within the content rows.
    pub cursor: CursorCell,
    /// Recomputed scroll position the session stores back.
    pub scroll_top: usize,
}

/// Fixed-width display form of one source character.
///
/// Tabs become [`TAB_PLACEHOLDER`]; characters outside the printable
/// range `0x20..=0x7E` become a `<hex>` token; everything else passes
/// through as a single cell. Total over all of `char`.
pub fn expand_char(ch: char) -> String {
    match ch {
        '\t' => TAB_PLACEHOLDER.to_string(),
        ' '..='~' => ch.to_string(),
        _ => format!("<{:x}>", ch as u32),
    }
}

/// Display form of a whole line; the result is pure ASCII, so its byte
/// length equals its width in cells.
pub fn expand_line(raw: &str) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\t' => out.push_str(TAB_PLACEHOLDER),
            ' '..='~' => out.push(ch),
            _ => {
                let _ = write!(out, "<{:x}>", ch as u32);
            }
        }
    }
    out
}

/// Wrap a raw line into display segments of at most `width` cells.
///
/// An empty line produces exactly one empty segment; otherwise segments
/// are chunked greedily left to right and all but the last have exactly
/// `width` cells. Recomputed on every call, never cached.
pub fn wrap_line(raw: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let expanded = expand_line(raw);
    if expanded.is_empty() {
        return vec![String::new()];
    }
    let chars: Vec<char> = expanded.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

/// Number of display rows a buffer line occupies at `width`.
pub fn wrapped_row_count(lines: &[String], row: usize, width: usize) -> usize {
    lines.get(row).map_or(1, |line| wrap_line(line, width).len())
}

/// Backward scroll search: the smallest top row such that the wrapped
/// rows of `[top, bottom_row]` still fit in `height`.
///
/// Walks upward from `bottom_row`, accumulating wrapped row counts, and
/// stops when including one more row above would overflow the window or
/// when row 0 is reached. When `bottom_row`'s own segments already
/// exceed `height` the result is `bottom_row` itself.
pub fn scroll_top_for_bottom(
    lines: &[String],
    bottom_row: usize,
    width: usize,
    height: usize,
) -> usize {
    let mut top = bottom_row;
    let mut distance = wrapped_row_count(lines, bottom_row, width);
    while top > 0 {
        let above = wrapped_row_count(lines, top - 1, width);
        if distance + above > height {
            break;
        }
        distance += above;
        top -= 1;
    }
    top
}

/// Next scroll position that keeps `cursor_row` visible.
///
/// Top-aligns when the cursor moved above the window, bottom-aligns by
/// the minimum amount when it moved below, and otherwise leaves the
/// window where it is so nothing jumps while the cursor stays visible.
pub fn scroll_to(
    lines: &[String],
    cursor_row: usize,
    width: usize,
    height: usize,
    current_top: usize,
) -> usize {
    let lowest_top = scroll_top_for_bottom(lines, cursor_row, width, height);
    if cursor_row < current_top {
        cursor_row
    } else if current_top < lowest_top {
        lowest_top
    } else {
        current_top
    }
}

/// Gutter width in cells for a document of `line_count` lines.
pub fn gutter_width(line_count: usize, show_gutter: bool) -> usize {
    if show_gutter {
        digits(line_count).max(3) + 1
    } else {
        0
    }
}

fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

fn floor_char_boundary(line: &str, col: usize) -> usize {
    let mut col = col.min(line.len());
    while col > 0 && !line.is_char_boundary(col) {
        col -= 1;
    }
    col
}

/// Compute the draw plan for one frame.
///
/// Recomputes the scroll position via [`scroll_to`], emits wrapped
/// segments row by row until the next line no longer fits whole (that
/// line is omitted and the trailing indicator switches to `>`), pads the
/// rest of the window, and maps the logical cursor to its display cell
/// by measuring the expanded prefix before the cursor column in cells.
///
/// The one exception to whole-line emission: when the cursor line alone
/// wraps to more rows than the window holds, its leading segments are
/// shown anyway, since an empty window with an unplaced cursor is not a
/// usable outcome.
pub fn layout(lines: &[String], params: LayoutParams) -> DrawPlan {
    let height = params.height.max(1);
    let gutter = gutter_width(lines.len(), params.show_gutter);
    let text_width = params.width.saturating_sub(gutter).max(1);
    let scroll_top = scroll_to(
        lines,
        params.cursor_row,
        text_width,
        height,
        params.scroll_top,
    );

    let mut rows: Vec<PlanRow> = Vec::with_capacity(height);
    let mut cursor = CursorCell {
        row: 0,
        col: gutter,
    };
    let mut trailing = '.';

    for (line_idx, line) in lines.iter().enumerate().skip(scroll_top) {
        let remaining = height - rows.len();
        if remaining == 0 {
            break;
        }
        let mut segments = wrap_line(line, text_width);
        let fits = segments.len() <= remaining;
        if !fits {
            trailing = '>';
            if !rows.is_empty() {
                break;
            }
            segments.truncate(remaining);
        }

        if line_idx == params.cursor_row {
            let col = floor_char_boundary(line, params.cursor_col);
            let cells = expand_line(&line[..col]).len();
            cursor = CursorCell {
                row: rows.len() + cells / text_width,
                col: gutter + cells % text_width,
            };
        }

        for (n, segment) in segments.into_iter().enumerate() {
            let gutter_text = match gutter {
                0 => String::new(),
                w if n == 0 => format!("{:>w$}", format!("{} ", line_idx + 1)),
                w => " ".repeat(w),
            };
            rows.push(PlanRow {
                gutter: gutter_text,
                text: segment,
                kind: RowKind::Content {
                    line: line_idx,
                    first: n == 0,
                },
            });
        }

        if !fits {
            break;
        }
    }

    // Keep the cursor inside the emitted region even when its line was
    // cut short by the window edge.
    let content_rows = rows.len().max(1);
    cursor.row = cursor.row.min(content_rows - 1);

    while rows.len() < height {
        let gutter_text = if gutter == 0 {
            String::new()
        } else {
            format!("{trailing:<gutter$}")
        };
        rows.push(PlanRow {
            gutter: gutter_text,
            text: String::new(),
            kind: RowKind::Padding,
        });
    }

    DrawPlan {
        rows,
        cursor,
        scroll_top,
    }
}
