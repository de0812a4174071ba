//! Facet registry browser view

use super::{field_lines, render_empty_message, render_scrollable_list};
use crate::app::App;
use crate::forms::FacetDescriptor;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the facet browser: the registry on the left, the selected
/// facet's declaration on the right
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let facets: Vec<&FacetDescriptor> = app.catalog.registry().iter().collect();

    if facets.is_empty() {
        render_empty_message(frame, area, "Facets", "No facets registered.");
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(area);

    draw_facet_list(frame, chunks[0], app, &facets);

    let selected = facets
        .get(app.state.facet_index)
        .copied()
        .or_else(|| facets.first().copied());
    if let Some(facet) = selected {
        draw_facet_detail(frame, chunks[1], app, facet);
    }
}

/// Draw the registry list (left side)
fn draw_facet_list(frame: &mut Frame, area: Rect, app: &App, facets: &[&FacetDescriptor]) {
    let items: Vec<ListItem> = facets
        .iter()
        .enumerate()
        .map(|(idx, facet)| {
            let is_selected = idx == app.state.facet_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(facet.alias.clone(), style),
                Span::styled(
                    format!(" ({})", facet.field_count()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Facets ({}) ", facets.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    render_scrollable_list(frame, area, list, app.state.facet_index);
}

/// Draw the selected facet's declaration (right side)
fn draw_facet_detail(frame: &mut Frame, area: Rect, app: &App, facet: &FacetDescriptor) {
    let mut content = vec![
        Line::from(vec![
            Span::styled("Alias: ", Style::default().fg(Color::DarkGray)),
            Span::styled(facet.alias.clone(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Fields",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    content.extend(field_lines(&facet.fields, true));

    // Which registered forms pull this facet in
    let used_by: Vec<&str> = app
        .catalog
        .forms()
        .iter()
        .filter(|d| d.facets().iter().any(|r| r.facet == facet.alias))
        .map(|d| d.recipe())
        .collect();

    content.push(Line::from(""));
    if used_by.is_empty() {
        content.push(Line::from(Span::styled(
            "Not referenced by any form.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        content.push(Line::from(vec![
            Span::styled("Used by: ", Style::default().fg(Color::DarkGray)),
            Span::raw(used_by.join(", ")),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {} ", facet.label))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
