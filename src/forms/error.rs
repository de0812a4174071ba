//! Configuration errors raised while wiring facets and forms

use thiserror::Error;

/// Errors detected while registering facets and form definitions.
///
/// Every variant is a static wiring mistake. They surface to the plugin
/// developer at registration time, before any form is shown to a user;
/// none of them is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A form definition references a facet alias missing from the registry
    #[error("form '{recipe}' references unknown facet '{facet}'")]
    UnknownFacet { recipe: String, facet: String },

    /// A facet alias was registered twice
    #[error("facet '{facet}' is already registered")]
    DuplicateFacet { facet: String },

    /// Two form definitions were registered under the same recipe name
    #[error("settings form for recipe '{recipe}' is already registered")]
    DuplicateRecipe { recipe: String },

    /// A form was requested for a recipe no definition was registered for
    #[error("no settings form registered for recipe '{recipe}'")]
    UnknownRecipe { recipe: String },
}
