//! Reusable UI widget helpers

use crate::forms::{FieldDescriptor, FieldKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};

/// Render a scrollable list that automatically keeps the selected item visible.
///
/// This is the preferred way to render lists in the app. It wraps `render_stateful_widget`
/// with a `ListState`, ensuring the list scrolls to keep the selected item in view.
///
/// # Example
/// ```ignore
/// let list = List::new(items).block(block);
/// render_scrollable_list(frame, area, list, app.state.facet_index);
/// ```
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render a bordered placeholder message for empty views
pub fn render_empty_message(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let content = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(content, area);
}

/// Build the display lines for a facet's declared fields.
///
/// Each field gets a label line with its kind tag; select options and
/// help text follow as dimmed continuation lines.
pub fn field_lines(fields: &[FieldDescriptor], show_help: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if fields.is_empty() {
        lines.push(Line::from(Span::styled(
            "    (no fields)",
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    for field in fields {
        let mut spans = vec![
            Span::raw("    "),
            Span::styled(field.label.clone(), Style::default().fg(Color::White)),
        ];
        if field.required {
            spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
        }
        spans.push(Span::styled(
            format!("  ({})", field.kind.tag()),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));

        if let FieldKind::Select(options) = &field.kind {
            if !options.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("      [{}]", options.join(" | ")),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        if show_help {
            if let Some(help) = &field.help {
                lines.push(Line::from(Span::styled(
                    format!("      {help}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    lines
}
