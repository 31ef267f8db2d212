//! Frame rendering for the picker.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::session::{MAX_RESULTS, PickerSession};

const HEADER_BLUE: Color = Color::Rgb(0x5f, 0x87, 0xff);
const PROMPT_GREEN: Color = Color::Rgb(0x5f, 0xff, 0x87);
const DIM_GRAY: Color = Color::Rgb(0x66, 0x66, 0x66);
const FAINT_GRAY: Color = Color::Rgb(0x44, 0x44, 0x44);
const PREFIX_GRAY: Color = Color::Rgb(0x55, 0x55, 0x55);
const SELECTED_BG: Color = Color::Rgb(0x1e, 0x3a, 0x5f);
const DIVIDER_GRAY: Color = Color::Rgb(0x33, 0x33, 0x33);
const NO_RESULTS_RED: Color = Color::Rgb(0xff, 0x55, 0x55);

/// Renders the whole picker frame.
pub fn draw(frame: &mut Frame, session: &PickerSession) {
    let [title, hints, query, divider, results] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(MAX_RESULTS as u16),
    ])
    .areas(frame.area());

    draw_title(frame, title, session);
    draw_hints(frame, hints);
    draw_query(frame, query, session);
    draw_divider(frame, divider);
    draw_results(frame, results, session);
}

fn draw_title(frame: &mut Frame, area: Rect, session: &PickerSession) {
    let root = tilde_display(&session.root().display().to_string());

    let mut spans = vec![
        Span::styled(
            "  Dongle",
            Style::default().fg(HEADER_BLUE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  in {root}"), Style::default().fg(DIM_GRAY)),
    ];

    if session.scanning() {
        spans.push(Span::styled(
            "  scanning…",
            Style::default().fg(DIM_GRAY).add_modifier(Modifier::ITALIC),
        ));
    }

    if let Some(version) = session.update_banner() {
        spans.push(Span::styled(
            format!("  update {version} available"),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(Span::styled(
        "  ↑↓ navigate  Enter select  Esc cancel",
        Style::default().fg(FAINT_GRAY),
    ));
    frame.render_widget(Paragraph::new(hints), area);
}

fn draw_query(frame: &mut Frame, area: Rect, session: &PickerSession) {
    let line = Line::from(vec![
        Span::styled(
            "  / ",
            Style::default()
                .fg(PROMPT_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(session.query().to_string()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    // Keep the hardware cursor at the end of the query text.
    let cursor_x = area.x + 4 + session.query().chars().count() as u16;
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
}

fn draw_divider(frame: &mut Frame, area: Rect) {
    let divider = "─".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(divider, Style::default().fg(DIVIDER_GRAY))),
        area,
    );
}

/// Renders exactly [`MAX_RESULTS`] rows, padding with blanks, so the pane
/// never changes height as results come and go.
fn draw_results(frame: &mut Frame, area: Rect, session: &PickerSession) {
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_RESULTS);

    if session.visible().is_empty() && !session.scanning() {
        lines.push(Line::from(Span::styled(
            "  No results found",
            Style::default()
                .fg(NO_RESULTS_RED)
                .add_modifier(Modifier::ITALIC),
        )));
    } else {
        for (i, entry) in session.visible().iter().enumerate() {
            lines.push(result_line(entry.display_text(), i == session.cursor()));
        }
    }

    while lines.len() < MAX_RESULTS {
        lines.push(Line::raw(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// One result row: dimmed parent segments, highlighted final segment.
fn result_line(path: &str, selected: bool) -> Line<'static> {
    let (prefix, last) = match path.rfind('/') {
        Some(idx) => (&path[..=idx], &path[idx + 1..]),
        None => ("", path),
    };

    if selected {
        let base = Style::default()
            .bg(SELECTED_BG)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        Line::from(vec![
            Span::styled(format!("  ❯ {prefix}"), base),
            Span::styled(
                last.to_string(),
                Style::default()
                    .bg(SELECTED_BG)
                    .fg(PROMPT_GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                format!("    {prefix}"),
                Style::default().fg(PREFIX_GRAY),
            ),
            Span::styled(last.to_string(), Style::default().fg(Color::White)),
        ])
    }
}

/// Abbreviates the home directory to `~` for the header.
fn tilde_display(path: &str) -> String {
    if let Some(home) = dirs::home_dir() {
        let home = home.display().to_string();
        if let Some(rest) = path.strip_prefix(&home) {
            return format!("~{rest}");
        }
    }
    path.to_string()
}
