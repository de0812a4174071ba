//! Application state definitions

use crate::forms::ComposedForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Composed form preview for the selected recipe
    #[default]
    Form,
    /// Facet registry browser
    Facets,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Selection
    pub recipe_index: usize,
    pub section_index: usize,
    pub facet_index: usize,

    // UI state
    pub scroll_offset: usize,
    pub show_field_help: bool,

    // Data
    pub composed: Option<ComposedForm>,
}

impl AppState {
    /// Number of sections in the currently composed form
    pub fn section_count(&self) -> usize {
        self.composed.as_ref().map(ComposedForm::section_count).unwrap_or(0)
    }

    /// Move recipe selection down, clamped to the list end
    pub fn next_recipe(&mut self, total: usize) {
        if total > 0 && self.recipe_index < total - 1 {
            self.recipe_index += 1;
        }
    }

    /// Move recipe selection up
    pub fn prev_recipe(&mut self) {
        self.recipe_index = self.recipe_index.saturating_sub(1);
    }

    /// Cycle focus to the next form section, wrapping at the end
    pub fn next_section(&mut self) {
        let total = self.section_count();
        if total > 0 {
            self.section_index = (self.section_index + 1) % total;
        }
    }

    /// Cycle focus to the previous form section, wrapping at the start
    pub fn prev_section(&mut self) {
        let total = self.section_count();
        if total > 0 {
            if self.section_index == 0 {
                self.section_index = total - 1;
            } else {
                self.section_index -= 1;
            }
        }
    }

    /// Move facet selection down, clamped to the list end
    pub fn next_facet(&mut self, total: usize) {
        if total > 0 && self.facet_index < total - 1 {
            self.facet_index += 1;
        }
    }

    /// Move facet selection up
    pub fn prev_facet(&mut self) {
        self.facet_index = self.facet_index.saturating_sub(1);
    }

    /// Reset per-form selection after switching recipes
    pub fn reset_form_selection(&mut self) {
        self.section_index = 0;
        self.scroll_offset = 0;
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }
}
