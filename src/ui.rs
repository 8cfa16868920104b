//! UI rendering helpers for the terminal user interface.
//!
//! This module projects the `App` state onto a `ratatui` frame. It never
//! changes the state; long-name marks are measured with `label_widths`
//! and stored by the app before drawing.

mod marquee;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, EMPTY_PLACEHOLDER, FilesPanel, Focus, LabelWidths, PlayStatus};
use crate::config::{ControlsSettings, UiSettings};

pub use marquee::marquee;

const ACCENT: Color = Color::Rgb(0xFE, 0xDE, 0x42);
const TRACK_FILL: Color = Color::Rgb(0xDD, 0xDD, 0xDD);
const HIGHLIGHT_SYMBOL: &str = "> ";
const TIME_COLUMN: u16 = 7;

/// Render the controls help text, incorporating the seek step.
fn controls_text(seek_step: f64) -> String {
    [
        "[tab] switch list".to_string(),
        "[j/k] up/down".to_string(),
        "[enter] open/play".to_string(),
        "[space/p] play/pause".to_string(),
        "[h/l] prev/next".to_string(),
        format!("[H/L] seek -/+{}%", seek_step),
        "[0-9] jump".to_string(),
        "[r] repeat".to_string(),
        "[R] reload".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

struct Areas {
    header: Rect,
    libraries: Rect,
    tracks: Rect,
    transport: Rect,
    notice: Rect,
    footer: Rect,
}

fn areas(area: Rect, has_notice: bool) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(5),
            Constraint::Length(if has_notice { 1 } else { 0 }),
            Constraint::Length(4),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    Areas {
        header: chunks[0],
        libraries: body[0],
        tracks: body[1],
        transport: chunks[2],
        notice: chunks[3],
        footer: chunks[4],
    }
}

/// Cells available for the track name column inside the tracks panel.
fn name_column(tracks: Rect) -> u16 {
    tracks
        .width
        .saturating_sub(2)
        .saturating_sub(HIGHLIGHT_SYMBOL.len() as u16)
        .saturating_sub(TIME_COLUMN + 1)
}

/// Widths of the containers holding the now-playing label and track names.
pub fn label_widths(area: Rect, has_notice: bool) -> LabelWidths {
    let a = areas(area, has_notice);
    LabelWidths {
        // Borders, padding and the play glyph prefix.
        now_playing: a.transport.width.saturating_sub(2 + 2 + 2),
        track_name: name_column(a.tracks),
    }
}

/// Render the entire UI into the provided `frame`.
///
/// `tick` drives the scrolling of long names.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
    tick: u64,
) {
    let a = areas(frame.area(), app.notice.is_some());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" stetho ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, a.header);

    draw_libraries(frame, app, a.libraries);
    draw_tracks(frame, app, a.tracks, tick);
    draw_transport(frame, app, a.transport, tick);

    if let Some(notice) = &app.notice {
        let p = Paragraph::new(format!(" {notice}")).style(Style::default().fg(Color::Red));
        frame.render_widget(p, a.notice);
    }

    let footer = Paragraph::new(controls_text(controls_settings.seek_step))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, a.footer);
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().fg(ACCENT))
    } else {
        block
    }
}

fn draw_libraries(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Libraries;
    let items: Vec<ListItem> = app
        .directories
        .iter()
        .enumerate()
        .map(|(i, d)| {
            if app.library_selected == Some(i) {
                ListItem::new(d.as_str()).style(Style::default().fg(ACCENT).bold())
            } else {
                ListItem::new(d.as_str())
            }
        })
        .collect();

    let mut list = List::new(items).block(panel_block(" libraries ", focused));
    if focused {
        list = list
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(HIGHLIGHT_SYMBOL);
    }

    let mut state = ListState::default();
    if !app.directories.is_empty() {
        state.select(Some(app.library_cursor.min(app.directories.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_tracks(frame: &mut Frame, app: &App, area: Rect, tick: u64) {
    let focused = app.focus == Focus::Tracks;
    let title = match app.files.directory() {
        Some(d) => format!(" {d} "),
        None => " tracks ".to_string(),
    };
    let block = panel_block(&title, focused);

    let message = match &app.files {
        FilesPanel::Idle => Some(Line::from("Select a library.").dim()),
        FilesPanel::Loading(_) => Some(Line::from("Loading...").dim()),
        FilesPanel::Empty(_) => Some(Line::from(EMPTY_PLACEHOLDER).italic()),
        FilesPanel::Unavailable { .. } => {
            Some(Line::from("Audio files unavailable.").fg(Color::Red))
        }
        FilesPanel::Loaded { .. } => None,
    };
    if let Some(line) = message {
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let name_width = usize::from(name_column(area));
    let items: Vec<ListItem> = app
        .track_rows()
        .into_iter()
        .map(|row| {
            let selected = app.track_selected == Some(row.id);
            let name = if selected && app.long_names.selected_row {
                marquee(&row.name, name_width, tick)
            } else {
                truncate(&row.name, name_width)
            };
            let pad = name_width.saturating_sub(name.width());
            let line = Line::from(vec![
                Span::raw(name),
                Span::raw(" ".repeat(pad + 1)),
                Span::raw(format!("{:>width$}", row.time, width = TIME_COLUMN as usize)).dim(),
            ]);
            if selected {
                ListItem::new(line).style(Style::default().fg(ACCENT).bold())
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    let count = items.len();
    let mut list = List::new(items).block(block);
    if focused {
        list = list
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(HIGHLIGHT_SYMBOL);
    }

    let mut state = ListState::default();
    if count > 0 {
        state.select(Some(app.track_cursor.min(count - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_transport(frame: &mut Frame, app: &App, area: Rect, tick: u64) {
    let block = Block::bordered()
        .padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        })
        .title(" now playing ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let glyph = if app.playback.is_playing() { "⏸ " } else { "▶ " };
    let label_width = usize::from(rows[0].width.saturating_sub(2));
    let title = match app.now_playing.as_deref() {
        Some(name) if app.long_names.now_playing => marquee(name, label_width, tick),
        Some(name) => name.to_string(),
        None => "-".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(glyph, Style::default().fg(ACCENT)),
            Span::raw(title).bold(),
        ])),
        rows[0],
    );

    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(ACCENT))
        .unfilled_style(Style::default().fg(TRACK_FILL))
        .label(app.transport.time_label.clone())
        .ratio((app.transport.seek_percent / 100.0).clamp(0.0, 1.0));
    frame.render_widget(gauge, rows[1]);

    let repeat_style = if app.repeat_opacity() < 1.0 {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(ACCENT)
    };
    let state = match app.playback.status {
        PlayStatus::Playing => "playing",
        PlayStatus::Paused => "paused",
        PlayStatus::Stopped => "stopped",
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(format!("{glyph}{state}  ")),
            Span::styled("⟳ repeat", repeat_style),
        ])),
        rows[2],
    );
}

/// Cut `text` to at most `width` cells.
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}
