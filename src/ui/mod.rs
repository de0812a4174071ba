//! UI module for rendering the TUI

mod facets;
mod form_view;
mod layout;
mod widgets;

pub use widgets::{field_lines, render_empty_message, render_scrollable_list};

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Form => form_view::draw(frame, main_area, app),
        View::Facets => facets::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
