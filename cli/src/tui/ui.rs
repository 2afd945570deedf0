use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use showcal_core::{PerformanceStatus, ShowCode};
use unicode_width::UnicodeWidthStr;

use crate::table::legend;
use crate::tui::app::{App, Card};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    error: Color,
    selected: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    error: Color::Red,
    selected: Color::Blue,
};

const NAME_WIDTH: usize = 40;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let error_height = if app.session.error.is_some() { 4 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Selectors
            Constraint::Length(error_height), // Error + retry
            Constraint::Min(1),               // Cards
            Constraint::Length(1),            // Legend
            Constraint::Length(1),            // Help
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);
    if error_height > 0 {
        draw_error(f, app, main_chunks[1]);
    }
    draw_cards(f, app, main_chunks[2]);

    let legend_line = Paragraph::new(legend())
        .style(Style::default().fg(THEME.primary))
        .alignment(Alignment::Center);
    f.render_widget(legend_line, main_chunks[3]);

    let footer = Paragraph::new(
        "m/M: Month | 7/8/9: Jump | p: Park | s: Show | j/k: Navigate | Enter: Expand | r: Reload | q: Quit",
    )
    .style(Style::default().fg(THEME.muted))
    .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[4]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let filter = app.session.filter;
    let mut spans = vec![
        Span::styled(
            format!(" {} ", filter.month().label()),
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(filter.park().label(), Style::default().fg(THEME.text)),
        Span::raw(" | "),
        Span::styled(filter.show().label(), Style::default().fg(THEME.text)),
    ];

    if app.session.loading {
        spans.push(Span::styled("  読込中...", Style::default().fg(THEME.primary)));
    } else if let Some(at) = app.session.fetched_at {
        spans.push(Span::styled(
            format!("  更新 {}", at.format("%H:%M:%S")),
            Style::default().fg(THEME.muted),
        ));
    }

    if let Some(summary) = app.session.displayable_summary() {
        spans.push(Span::styled(
            format!(
                "  計{} {}{} {}{} {}{}",
                summary.total_tickets,
                PerformanceStatus::Available.icon(),
                summary.available,
                PerformanceStatus::SoldOut.icon(),
                summary.sold_out,
                PerformanceStatus::Unknown.icon(),
                summary.unknown
            ),
            Style::default().fg(THEME.muted),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().title(" SHOWCAL ").borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn draw_error(f: &mut Frame, app: &App, area: Rect) {
    let message = app.session.error.as_deref().unwrap_or_default();
    let text = vec![
        Line::from(vec![
            Span::styled("エラー: ", Style::default().fg(THEME.error).add_modifier(Modifier::BOLD)),
            Span::raw(message),
        ]),
        Line::from(Span::styled("r: 再試行", Style::default().fg(THEME.error))),
    ];
    let panel = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(THEME.error)))
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

fn draw_cards(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Calendar ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let cards = app.cards();
    if cards.is_empty() {
        let lines = if app.session.is_empty_notice() {
            vec![
                Line::from(format!("{}の公演データがありません", app.session.filter.month().label())),
                Line::from(Span::styled("r で再読込できます", Style::default().fg(THEME.muted))),
            ]
        } else {
            Vec::new()
        };
        let notice = Paragraph::new(lines).alignment(Alignment::Center).block(block);
        f.render_widget(notice, area);
        return;
    }

    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| ListItem::new(card_lines(card, app.session.is_expanded(&card.key()))))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(THEME.selected).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.state);
}

pub fn card_lines(card: &Card, expanded: bool) -> Vec<Line<'static>> {
    let day = if card.first_of_day {
        pad_to_width(&format!("{}日", card.day), 5)
    } else {
        " ".repeat(5)
    };
    let title = title_lines(card);
    let status = card.entry.overall_status();
    let marker = if expanded { "▲" } else { "▼" };

    let mut lines = Vec::new();
    for (i, part) in title.iter().enumerate() {
        let prefix = if i == 0 { day.clone() } else { " ".repeat(5) };
        let mut spans = vec![
            Span::styled(prefix, Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)),
            Span::raw(pad_to_width(part, NAME_WIDTH)),
        ];
        if i == 0 {
            spans.push(Span::styled(format!(" {} ", status.icon()), status_style(status)));
            spans.push(Span::styled(marker, Style::default().fg(THEME.muted)));
        }
        lines.push(Line::from(spans));
    }

    if expanded {
        if !card.entry.full_show_name.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("       {}", card.entry.full_show_name),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        for performance in card.entry.performances_by_round() {
            lines.push(Line::from(vec![
                Span::raw(format!("         第{}回 ", performance.round)),
                Span::styled(performance.status.icon(), status_style(performance.status)),
            ]));
        }
    }
    lines
}

fn title_lines(card: &Card) -> Vec<String> {
    match ShowCode::from_code(&card.code) {
        Some(show) => show.short_name_lines().iter().map(|s| s.to_string()).collect(),
        None if !card.entry.full_show_name.is_empty() => vec![card.entry.full_show_name.clone()],
        None => vec![card.code.clone()],
    }
}

fn status_style(status: PerformanceStatus) -> Style {
    match status {
        PerformanceStatus::Available => Style::default().fg(Color::Green),
        PerformanceStatus::SoldOut => Style::default().fg(Color::Red),
        PerformanceStatus::PreSale => Style::default().fg(Color::Yellow),
        PerformanceStatus::Unknown => Style::default().fg(THEME.muted),
    }
}

/// Right-pad to a display width; CJK characters count as two columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    if used >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - used))
    }
}
