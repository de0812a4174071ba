//! Composed form preview view

use super::{field_lines, render_empty_message};
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the composed form for the selected recipe.
///
/// Sections render top to bottom in composed order; the renderer knows
/// nothing about individual facets, it just walks the tree.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = &app.state.composed else {
        render_empty_message(frame, area, "Settings", "No settings forms registered.");
        return;
    };

    let title = format!(" {} ({}) ", form.title, form.recipe);

    let mut content: Vec<Line> = Vec::new();
    for (idx, section) in form.sections.iter().enumerate() {
        let is_focused = idx == app.state.section_index;
        let marker = if is_focused { "▸ " } else { "  " };
        let label_style = if is_focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let mut header = vec![
            Span::styled(marker, label_style),
            Span::styled(section.label.clone(), label_style),
            Span::styled(
                format!("  [{}]", section.alias),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if let Some(format) = &section.format {
            header.push(Span::styled(
                format!("  format: {format}"),
                Style::default().fg(Color::Yellow),
            ));
        }
        content.push(Line::from(header));

        content.extend(field_lines(&section.fields, app.state.show_field_help));
        content.push(Line::from(""));
    }

    if form.sections.is_empty() {
        content.push(Line::from(Span::styled(
            "This form declares no sections.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0));

    frame.render_widget(paragraph, area);
}
