//! Application state and core logic

use crate::config::UiConfig;
use crate::forms::FormCatalog;
use crate::state::{AppState, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Registered facets and form definitions
    pub catalog: FormCatalog,
    /// User configuration, persisted on quit
    pub config: UiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance over an already validated catalog
    #[allow(clippy::field_reassign_with_default)]
    pub fn new(catalog: FormCatalog, config: UiConfig) -> Result<Self> {
        let mut state = AppState::default();
        state.show_field_help = config.show_field_help.unwrap_or(true);

        // Restore the recipe selected in a previous session
        if let Some(recipe) = &config.start_recipe {
            if let Some(idx) = catalog
                .forms()
                .iter()
                .position(|d| d.recipe() == recipe.as_str())
            {
                state.recipe_index = idx;
            }
        }

        let mut app = Self {
            state,
            catalog,
            config,
            quit: false,
        };
        app.compose_selected()?;
        Ok(app)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Name of the currently selected recipe
    pub fn selected_recipe(&self) -> Option<&str> {
        self.catalog
            .forms()
            .get(self.state.recipe_index)
            .map(|d| d.recipe())
    }

    /// Compose the form for the currently selected recipe
    fn compose_selected(&mut self) -> Result<()> {
        let recipe = self
            .catalog
            .forms()
            .get(self.state.recipe_index)
            .map(|d| d.recipe().to_string());
        self.state.composed = match recipe {
            Some(recipe) => Some(self.catalog.compose(&recipe)?),
            None => None,
        };
        Ok(())
    }

    /// Quit, capturing UI preferences for persistence
    fn request_quit(&mut self) {
        self.config.start_recipe = self.selected_recipe().map(str::to_string);
        self.config.show_field_help = Some(self.state.show_field_help);
        self.quit = true;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit shortcuts
        if key.code == KeyCode::Char('q')
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.request_quit();
            return Ok(());
        }

        match self.state.current_view {
            View::Form => self.handle_form_key(key)?,
            View::Facets => self.handle_facets_key(key),
        }
        Ok(())
    }

    /// Handle keys in the form preview view
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let before = self.state.recipe_index;
                self.state.next_recipe(self.catalog.forms().len());
                if before != self.state.recipe_index {
                    self.state.reset_form_selection();
                    self.compose_selected()?;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let before = self.state.recipe_index;
                self.state.prev_recipe();
                if before != self.state.recipe_index {
                    self.state.reset_form_selection();
                    self.compose_selected()?;
                }
            }
            KeyCode::Tab => self.state.next_section(),
            KeyCode::BackTab => self.state.prev_section(),
            KeyCode::Char('J') => self.state.scroll_down(),
            KeyCode::Char('K') => self.state.scroll_up(),
            KeyCode::Char('d') | KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::Char('u') | KeyCode::PageUp => self.state.scroll_up_page(),
            KeyCode::Char('h') => {
                self.state.show_field_help = !self.state.show_field_help;
            }
            KeyCode::Char('f') => {
                self.state.current_view = View::Facets;
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the facet browser
    fn handle_facets_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let total = self.catalog.registry().len();
                self.state.next_facet(total);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.prev_facet();
            }
            KeyCode::Char('f') | KeyCode::Esc | KeyCode::Enter => {
                self.state.current_view = View::Form;
            }
            _ => {}
        }
    }
}
