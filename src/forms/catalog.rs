//! Form catalog: the registration surface facets and forms plug into

use super::compose::{ComposedForm, FormComposer};
use super::definition::FormDefinition;
use super::error::ConfigError;
use super::facet::FacetDescriptor;
use super::registry::FacetRegistry;

/// Everything the application registered: the facet registry plus the
/// form definitions wired against it.
///
/// Definitions are validated eagerly at registration, so a catalog that
/// built without error can compose any of its forms without one.
#[derive(Debug, Clone, Default)]
pub struct FormCatalog {
    registry: FacetRegistry,
    forms: Vec<FormDefinition>,
}

impl FormCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a facet descriptor
    pub fn register_facet(&mut self, descriptor: FacetDescriptor) -> Result<(), ConfigError> {
        self.registry.register(descriptor)
    }

    /// Register a form definition, checking every facet reference
    /// against the registry.
    ///
    /// Validation happens before insertion: a rejected definition
    /// leaves the catalog unchanged.
    pub fn register_form(&mut self, definition: FormDefinition) -> Result<(), ConfigError> {
        if self.form(definition.recipe()).is_some() {
            return Err(ConfigError::DuplicateRecipe {
                recipe: definition.recipe().to_string(),
            });
        }
        for fref in definition.facets() {
            if !self.registry.contains(&fref.facet) {
                return Err(ConfigError::UnknownFacet {
                    recipe: definition.recipe().to_string(),
                    facet: fref.facet.clone(),
                });
            }
        }
        tracing::info!(
            "registered settings form '{}' ({} facets)",
            definition.recipe(),
            definition.len()
        );
        self.forms.push(definition);
        Ok(())
    }

    pub fn registry(&self) -> &FacetRegistry {
        &self.registry
    }

    /// Definitions in registration order
    pub fn forms(&self) -> &[FormDefinition] {
        &self.forms
    }

    /// Look up a definition by recipe name
    pub fn form(&self, recipe: &str) -> Option<&FormDefinition> {
        self.forms.iter().find(|f| f.recipe() == recipe)
    }

    /// Compose the registered form for a recipe
    pub fn compose(&self, recipe: &str) -> Result<ComposedForm, ConfigError> {
        let definition = self.form(recipe).ok_or_else(|| ConfigError::UnknownRecipe {
            recipe: recipe.to_string(),
        })?;
        FormComposer::new(&self.registry).compose(definition)
    }
}
