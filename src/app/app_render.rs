use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use super::app_state::App;
use super::article_input::{ArticleInput, Side};

const HELP_TEXT: &str = " Tab switch | Up/Down browse | Enter choose | Esc quit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([Constraint::Min(4), Constraint::Length(1)]).split(frame.area());
        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(layout[0]);

        let focus = self.focus;
        render_column(&mut self.from, focus == Side::From, frame, columns[0]);
        render_column(&mut self.to, focus == Side::To, frame, columns[1]);

        let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, layout[1]);
    }
}

fn render_column(input: &mut ArticleInput, focused: bool, frame: &mut Frame, area: Rect) {
    let rows = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);

    let title = if input.fetch_state().is_fetching {
        format!(" {} (searching...) ", input.side().label())
    } else {
        format!(" {} ", input.side().label())
    };
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );
    input.textarea.set_cursor_line_style(Style::default());
    input.textarea.set_cursor_style(if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });

    frame.render_widget(&input.textarea, rows[0]);

    if input.suggestions_visible() {
        render_suggestions(input, frame, rows[1]);
    }
}

/// Draw filled slots in rank order; holes take no space
///
/// Each entry is its title, then the description and thumbnail URL when present.
fn render_suggestions(input: &ArticleInput, frame: &mut Frame, area: Rect) {
    if area.height == 0 || area.width < 3 {
        return;
    }

    let text_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = input
        .fetch_state()
        .suggestions
        .iter_present()
        .map(|(position, suggestion)| {
            let highlighted = input.highlighted() == Some(position);
            let title_style = if highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            let mut lines = vec![Line::from(Span::styled(
                truncate_to_width(&suggestion.title, text_width),
                title_style,
            ))];
            if let Some(description) = &suggestion.description {
                lines.push(Line::from(Span::styled(
                    truncate_to_width(description, text_width),
                    Style::default().fg(Color::Gray),
                )));
            }
            if let Some(url) = &suggestion.thumbnail_url {
                lines.push(Line::from(Span::styled(
                    truncate_to_width(&format!("img {}", url), text_width),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

/// Cut `text` to at most `max_width` display columns, marking the cut with `…`
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
