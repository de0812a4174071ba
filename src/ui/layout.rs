//! Layout components (sidebar, status bar)

use super::render_scrollable_list;
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Create the main layout with the recipe sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar listing the registered recipes
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    // The sidebar drives recipe selection in the form view; dim it
    // while the facet browser has focus
    let border_color = match app.state.current_view {
        View::Form => Color::Cyan,
        View::Facets => Color::DarkGray,
    };

    let items: Vec<ListItem> = app
        .catalog
        .forms()
        .iter()
        .enumerate()
        .map(|(idx, definition)| {
            let is_selected = idx == app.state.recipe_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(definition.title().to_string(), style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Recipes ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    render_scrollable_list(frame, area, list, app.state.recipe_index);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![];

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Current form summary
    if let Some(form) = &app.state.composed {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!(
                "{} ({} sections, {} fields)",
                form.recipe,
                form.section_count(),
                form.field_count()
            ),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " q:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Form => "j/k:recipe  Tab:section  J/K:scroll  d/u:page  h:help  f:facets".to_string(),
        View::Facets => "j/k:nav  f/Esc:back".to_string(),
    }
}
